//! Cached fog glow convolution kernels.
//!
//! The fog glow operation convolves in the frequency domain. The kernel's
//! Fourier spectrum depends only on its size and the simulated field of
//! view, so the transformed kernel is cached rather than recomputed per
//! evaluation.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// Parameter tuple identifying one fog glow kernel spectrum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FogGlowKernelKey {
    /// Square kernel side length in pixels, a power of two.
    pub size: i32,
    /// Field of view of the glow in radians.
    pub field_of_view: FloatKey,
}

/// The frequency-domain fog glow kernel.
#[derive(Debug)]
pub struct FogGlowKernel {
    /// Row-major complex spectrum as (re, im) pairs.
    pub spectrum: Vec<[f32; 2]>,
    /// Square side length in pixels.
    pub size: i32,
}

cached_resource_container! {
    /// Container of every cached fog glow kernel spectrum.
    FogGlowKernelContainer,
    FogGlowKernelKey,
    FogGlowKernel,
    "fog_glow_kernels"
}

impl FogGlowKernelContainer {
    /// Look up the kernel spectrum for the given size and field of view,
    /// running `construct` to compute it on a miss.
    pub fn get(
        &mut self,
        size: i32,
        field_of_view: f32,
        construct: impl FnOnce() -> Result<FogGlowKernel>,
    ) -> Result<Arc<FogGlowKernel>> {
        let key = FogGlowKernelKey {
            size,
            field_of_view: FloatKey(field_of_view),
        };
        self.cache.get_or_create(key, construct)
    }
}
