//! The static cache manager.
//!
//! One manager exists per compositor context and owns one container per
//! cached resource kind. Resources are retrieved through the container
//! fields during evaluation and created on miss; the manager reclaims the
//! ones the previous evaluation stopped using.
//!
//! The reclamation protocol:
//!
//! - Before every evaluation the host calls [`reset`](StaticCacheManager::reset),
//!   which drops every resource whose needed flag is still false and clears
//!   the flag on the rest.
//! - During evaluation, every lookup sets the needed flag of its resource.
//!
//! So a resource used in the previous evaluation but not in the current one
//! is dropped by the next reset. When an evaluation is cancelled before all
//! operations ran, the host calls
//! [`skip_next_reset`](StaticCacheManager::skip_next_reset) so that the one
//! following reset leaves the population untouched — otherwise resources
//! that never got the chance to be marked would be reclaimed even though the
//! next evaluation still needs them.

use tracing::debug;

use crate::resources::{
    BokehKernelContainer, CachedImageContainer, CachedMaskContainer, CachedShaderContainer,
    DericheGaussianCoefficientsContainer, DistortionGridContainer, FogGlowKernelContainer,
    ImageCoordinatesContainer, KeyingScreenContainer, MorphologicalDistanceFeatherWeightsContainer,
    OcioColorSpaceConversionShaderContainer, SmaaPrecomputedTexturesContainer,
    SymmetricBlurWeightsContainer, SymmetricSeparableBlurWeightsContainer,
    VanVlietGaussianCoefficientsContainer,
};

/// Owns one cached-resource container per kind and orchestrates the
/// per-evaluation reset protocol. See the module docs for the lifecycle.
#[derive(Debug, Default)]
pub struct StaticCacheManager {
    pub symmetric_blur_weights: SymmetricBlurWeightsContainer,
    pub symmetric_separable_blur_weights: SymmetricSeparableBlurWeightsContainer,
    pub morphological_distance_feather_weights: MorphologicalDistanceFeatherWeightsContainer,
    pub cached_masks: CachedMaskContainer,
    pub smaa_precomputed_textures: SmaaPrecomputedTexturesContainer,
    pub ocio_color_space_conversion_shaders: OcioColorSpaceConversionShaderContainer,
    pub distortion_grids: DistortionGridContainer,
    pub keying_screens: KeyingScreenContainer,
    pub cached_shaders: CachedShaderContainer,
    pub bokeh_kernels: BokehKernelContainer,
    pub cached_images: CachedImageContainer,
    pub deriche_gaussian_coefficients: DericheGaussianCoefficientsContainer,
    pub van_vliet_gaussian_coefficients: VanVlietGaussianCoefficientsContainer,
    pub fog_glow_kernels: FogGlowKernelContainer,
    pub image_coordinates: ImageCoordinatesContainer,

    /// One-shot directive to elide the next sweep. See
    /// [`skip_next_reset`](Self::skip_next_reset).
    should_skip_next_reset: bool,
}

impl StaticCacheManager {
    /// Create a manager with empty containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reclaim the cached resources that were not used in the last
    /// evaluation and prepare the rest to track their needed status in the
    /// next one. Must be called once before every evaluation, never during
    /// one.
    ///
    /// If [`skip_next_reset`](Self::skip_next_reset) was called since the
    /// previous reset, this clears the flag and returns without sweeping.
    pub fn reset(&mut self) {
        if self.should_skip_next_reset {
            self.should_skip_next_reset = false;
            debug!("cache reset skipped after cancelled evaluation");
            return;
        }

        self.symmetric_blur_weights.sweep();
        self.symmetric_separable_blur_weights.sweep();
        self.morphological_distance_feather_weights.sweep();
        self.cached_masks.sweep();
        self.smaa_precomputed_textures.sweep();
        self.ocio_color_space_conversion_shaders.sweep();
        self.distortion_grids.sweep();
        self.keying_screens.sweep();
        self.cached_shaders.sweep();
        self.bokeh_kernels.sweep();
        self.cached_images.sweep();
        self.deriche_gaussian_coefficients.sweep();
        self.van_vliet_gaussian_coefficients.sweep();
        self.fog_glow_kernels.sweep();
        self.image_coordinates.sweep();
    }

    /// Make the next [`reset`](Self::reset) a no-op.
    ///
    /// Called by the host when an evaluation is cancelled before it was
    /// fully done. In that case not every operation that uses cached
    /// resources got the chance to mark its resources as still in use, so we
    /// wait for a full evaluation before deciding which resources are no
    /// longer needed. Idempotent; the flag is cleared by the next reset.
    pub fn skip_next_reset(&mut self) {
        self.should_skip_next_reset = true;
        debug!("next cache reset will be skipped");
    }

    /// Whether the next [`reset`](Self::reset) will be skipped.
    #[must_use]
    pub fn will_skip_next_reset(&self) -> bool {
        self.should_skip_next_reset
    }
}
