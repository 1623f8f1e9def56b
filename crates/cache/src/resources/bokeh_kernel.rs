//! Cached bokeh kernels.
//!
//! The depth-of-field and bokeh blur operations convolve with an iris-shaped
//! kernel described by its polygon and lens parameters. Rendering the kernel
//! raster is expensive relative to the convolution itself, so it is cached
//! per parameter tuple.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// Parameter tuple identifying one bokeh kernel raster.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BokehKernelKey {
    /// Raster size in pixels.
    pub size: [i32; 2],
    /// Number of iris blades.
    pub flaps: i32,
    /// Iris rotation in radians.
    pub rotation: FloatKey,
    /// Polygon-to-circle blend factor in `[0, 1]`.
    pub roundness: FloatKey,
    /// Catadioptric (donut) hole ratio in `[0, 1]`.
    pub catadioptric: FloatKey,
    /// Chromatic lens shift along the kernel radius.
    pub lens_shift: FloatKey,
}

impl BokehKernelKey {
    #[must_use]
    pub fn new(
        size: [i32; 2],
        flaps: i32,
        rotation: f32,
        roundness: f32,
        catadioptric: f32,
        lens_shift: f32,
    ) -> Self {
        Self {
            size,
            flaps,
            rotation: FloatKey(rotation),
            roundness: FloatKey(roundness),
            catadioptric: FloatKey(catadioptric),
            lens_shift: FloatKey(lens_shift),
        }
    }
}

/// An RGBA raster of the iris shape, one channel per chromatic shift.
#[derive(Debug)]
pub struct BokehKernel {
    /// Row-major RGBA texels.
    pub pixels: Vec<[f32; 4]>,
    pub size: [i32; 2],
}

cached_resource_container! {
    /// Container of every cached bokeh kernel raster.
    BokehKernelContainer,
    BokehKernelKey,
    BokehKernel,
    "bokeh_kernels"
}

impl BokehKernelContainer {
    /// Look up the kernel raster for the given iris parameters, running
    /// `construct` to render it on a miss.
    #[allow(clippy::too_many_arguments)]
    pub fn get(
        &mut self,
        size: [i32; 2],
        flaps: i32,
        rotation: f32,
        roundness: f32,
        catadioptric: f32,
        lens_shift: f32,
        construct: impl FnOnce() -> Result<BokehKernel>,
    ) -> Result<Arc<BokehKernel>> {
        let key = BokehKernelKey::new(size, flaps, rotation, roundness, catadioptric, lens_shift);
        self.cache.get_or_create(key, construct)
    }
}
