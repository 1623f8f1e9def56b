//! End-to-end lifecycle scenarios against a fresh manager: reuse across
//! evaluations, reclamation of untouched resources, skip-on-cancel,
//! construction failure, and cross-kind isolation.

use std::cell::Cell;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use prism_cache::error::{CacheError, Result};
use prism_cache::resources::{
    BlurFilterKind, BokehKernel, SymmetricSeparableBlurWeights,
};
use prism_cache::StaticCacheManager;

fn separable_weights(taps: usize) -> Result<SymmetricSeparableBlurWeights> {
    Ok(SymmetricSeparableBlurWeights {
        weights: vec![1.0 / taps as f32; taps],
    })
}

fn bokeh_kernel() -> Result<BokehKernel> {
    Ok(BokehKernel {
        pixels: vec![[1.0; 4]; 4],
        size: [2, 2],
    })
}

/// S1 — a resource built in one evaluation is reused in the next, same
/// instance, without reconstruction.
#[test]
fn basic_reuse_across_evaluations() {
    let mut cache = StaticCacheManager::new();
    let constructions = Cell::new(0u32);

    let build = || {
        constructions.set(constructions.get() + 1);
        separable_weights(5)
    };

    cache.reset();
    let first = cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 5.0, true, build)
        .unwrap();
    let again = cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 5.0, true, build)
        .unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(constructions.get(), 1);

    cache.reset();
    let next_evaluation = cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 5.0, true, build)
        .unwrap();
    assert!(Arc::ptr_eq(&first, &next_evaluation));
    assert_eq!(constructions.get(), 1);
}

/// S2 — a resource untouched for one whole evaluation is reclaimed by the
/// following reset while touched ones survive.
#[test]
fn untouched_resources_are_reclaimed() {
    let mut cache = StaticCacheManager::new();

    cache.reset();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 1.0, true, || separable_weights(3))
        .unwrap();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 2.0, true, || separable_weights(5))
        .unwrap();

    // Second evaluation touches only the first radius.
    cache.reset();
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 2);
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 1.0, true, || {
            unreachable!("hit must not reconstruct")
        })
        .unwrap();

    // Third reset reclaims the untouched radius.
    cache.reset();
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 1);
    assert_eq!(cache.symmetric_separable_blur_weights.stats().evictions, 1);
}

/// S3 — after a cancelled evaluation the skipped reset preserves the
/// population, and the reset after that behaves normally.
#[test]
fn skip_preserves_population_after_cancel() {
    let mut cache = StaticCacheManager::new();

    cache.reset();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 1.0, true, || separable_weights(3))
        .unwrap();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 2.0, true, || separable_weights(5))
        .unwrap();

    // Evaluation cancelled after touching only the first radius.
    cache.reset();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 1.0, true, || {
            unreachable!("hit must not reconstruct")
        })
        .unwrap();
    cache.skip_next_reset();

    // Skipped: nothing is reclaimed, flags stay as they were.
    cache.reset();
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 2);

    // The reset after that behaves normally: the radius touched before the
    // cancellation survives, the other one is reclaimed now that a full
    // evaluation has settled which resources are still in use.
    cache.reset();
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 1);
}

/// S4 — a failing constructor surfaces its error and inserts nothing; the
/// same key constructs normally afterwards.
#[test]
fn construction_failure_leaves_container_unchanged() {
    let mut cache = StaticCacheManager::new();
    cache.reset();

    let result = cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 7.0, true, || {
            Err(CacheError::construction(
                "symmetric_separable_blur_weights",
                "radius out of range",
            ))
        });
    assert!(matches!(result, Err(CacheError::ConstructionFailed { .. })));
    assert!(cache.symmetric_separable_blur_weights.is_empty());

    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 7.0, true, || separable_weights(15))
        .unwrap();
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 1);
}

/// S5 — containers of different kinds are fully isolated even when their
/// parameters coincide; reclaiming in one never touches the other.
#[test]
fn kinds_are_isolated() {
    let mut cache = StaticCacheManager::new();

    cache.reset();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 2.0, true, || separable_weights(5))
        .unwrap();
    cache
        .bokeh_kernels
        .get([2, 2], 6, 0.0, 1.0, 0.0, 0.0, bokeh_kernel)
        .unwrap();

    // Next evaluation touches only the bokeh kernel.
    cache.reset();
    cache
        .bokeh_kernels
        .get([2, 2], 6, 0.0, 1.0, 0.0, 0.0, || {
            unreachable!("hit must not reconstruct")
        })
        .unwrap();

    cache.reset();
    assert!(cache.symmetric_separable_blur_weights.is_empty());
    assert_eq!(cache.bokeh_kernels.len(), 1);
}

/// S6 — calling skip twice before one reset still skips exactly one reset.
#[test]
fn double_skip_elides_a_single_reset() {
    let mut cache = StaticCacheManager::new();

    cache.reset();
    cache
        .symmetric_separable_blur_weights
        .get(BlurFilterKind::Gaussian, 2.0, true, || separable_weights(5))
        .unwrap();

    cache.skip_next_reset();
    cache.skip_next_reset();

    cache.reset(); // skipped
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 1);

    cache.reset(); // sweeps; entry still marked from the evaluation, survives
    assert_eq!(cache.symmetric_separable_blur_weights.len(), 1);

    cache.reset(); // sweeps; entry unmarked, reclaimed
    assert!(cache.symmetric_separable_blur_weights.is_empty());
}
