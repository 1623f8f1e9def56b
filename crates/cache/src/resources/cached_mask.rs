//! Cached mask rasters.
//!
//! Masks are authored as splines and rasterized on demand. Rasterization is
//! expensive and depends on the mask datablock, the output size, the frame,
//! and the motion blur settings, so the result is cached per parameter
//! tuple.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// Parameter tuple identifying one rasterized mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CachedMaskKey {
    /// Name of the mask datablock.
    pub mask: String,
    /// Raster size in pixels.
    pub size: [i32; 2],
    /// Scene frame the mask was evaluated at.
    pub frame: i32,
    /// Whether spline feathering was applied.
    pub use_feather: bool,
    /// Number of motion blur samples, 1 for no motion blur.
    pub motion_blur_samples: i32,
    /// Motion blur shutter time in frames.
    pub motion_blur_shutter: FloatKey,
}

/// A mask rasterized into a single-channel float buffer.
#[derive(Debug)]
pub struct CachedMask {
    /// Row-major coverage values in `[0, 1]`.
    pub pixels: Vec<f32>,
    pub size: [i32; 2],
}

cached_resource_container! {
    /// Container of every cached mask raster.
    CachedMaskContainer,
    CachedMaskKey,
    CachedMask,
    "cached_masks"
}

impl CachedMaskContainer {
    /// Look up the raster for the given mask parameters, running `construct`
    /// to rasterize it on a miss.
    #[allow(clippy::too_many_arguments)]
    pub fn get(
        &mut self,
        mask: &str,
        size: [i32; 2],
        frame: i32,
        use_feather: bool,
        motion_blur_samples: i32,
        motion_blur_shutter: f32,
        construct: impl FnOnce() -> Result<CachedMask>,
    ) -> Result<Arc<CachedMask>> {
        let key = CachedMaskKey {
            mask: mask.to_owned(),
            size,
            frame,
            use_feather,
            motion_blur_samples,
            motion_blur_shutter: FloatKey(motion_blur_shutter),
        };
        self.cache.get_or_create(key, construct)
    }
}
