//! Cached weights for symmetric 2D blurs.
//!
//! A symmetric blur convolves the image with a radially symmetric filter, so
//! only one quadrant of the weight table needs to be computed and stored.
//! The table depends only on the filter function and the blur radius per
//! axis, which together form the cache key.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// The filter function a blur weight table is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlurFilterKind {
    /// Constant box filter.
    Flat,
    /// Linear tent filter.
    Tent,
    /// Quadratic B-spline.
    Quadratic,
    /// Cubic B-spline.
    Cubic,
    /// Gaussian with the radius as its support.
    Gaussian,
    /// Catmull-Rom interpolating spline.
    CatmullRom,
    /// Mitchell-Netravali spline.
    Mitchell,
}

/// Parameter tuple identifying one symmetric blur weight table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymmetricBlurWeightsKey {
    pub filter: BlurFilterKind,
    pub radius: [FloatKey; 2],
}

impl SymmetricBlurWeightsKey {
    #[must_use]
    pub fn new(filter: BlurFilterKind, radius: [f32; 2]) -> Self {
        Self {
            filter,
            radius: [FloatKey(radius[0]), FloatKey(radius[1])],
        }
    }
}

/// One quadrant of a normalized 2D blur weight table. The remaining
/// quadrants are reconstructed by mirroring at sample time.
#[derive(Debug)]
pub struct SymmetricBlurWeights {
    /// Row-major weights, `size[0] * size[1]` values summing to one over the
    /// full (mirrored) table.
    pub weights: Vec<f32>,
    /// Table dimensions in texels.
    pub size: [usize; 2],
}

cached_resource_container! {
    /// Container of every cached symmetric blur weight table.
    SymmetricBlurWeightsContainer,
    SymmetricBlurWeightsKey,
    SymmetricBlurWeights,
    "symmetric_blur_weights"
}

impl SymmetricBlurWeightsContainer {
    /// Look up the weight table for the given filter and radius, running
    /// `construct` to build it on a miss.
    pub fn get(
        &mut self,
        filter: BlurFilterKind,
        radius: [f32; 2],
        construct: impl FnOnce() -> Result<SymmetricBlurWeights>,
    ) -> Result<Arc<SymmetricBlurWeights>> {
        self.cache
            .get_or_create(SymmetricBlurWeightsKey::new(filter, radius), construct)
    }
}
