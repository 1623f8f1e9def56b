//! Cached Van Vliet Gaussian filter coefficients.
//!
//! The Van Vliet recursive Gaussian is used for large sigmas where the
//! Deriche approximation loses accuracy. Its pole pairs are refined
//! iteratively per sigma, which is worth caching.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// Sigma identifying one Van Vliet coefficient set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VanVlietGaussianCoefficientsKey {
    pub sigma: FloatKey,
}

/// Van Vliet filter coefficients for one sigma, as two second-order
/// sections applied causally and anti-causally.
#[derive(Debug)]
pub struct VanVlietGaussianCoefficients {
    /// Feedforward coefficients of the first and second section.
    pub feedforward: [[f64; 2]; 2],
    /// Feedback coefficients of the first and second section.
    pub feedback: [[f64; 2]; 2],
    /// Overall gain normalizing the impulse response to unit sum.
    pub gain: f64,
}

cached_resource_container! {
    /// Container of every cached Van Vliet coefficient set.
    VanVlietGaussianCoefficientsContainer,
    VanVlietGaussianCoefficientsKey,
    VanVlietGaussianCoefficients,
    "van_vliet_gaussian_coefficients"
}

impl VanVlietGaussianCoefficientsContainer {
    /// Look up the coefficient set for `sigma`, running `construct` to
    /// derive it on a miss.
    pub fn get(
        &mut self,
        sigma: f32,
        construct: impl FnOnce() -> Result<VanVlietGaussianCoefficients>,
    ) -> Result<Arc<VanVlietGaussianCoefficients>> {
        self.cache.get_or_create(
            VanVlietGaussianCoefficientsKey {
                sigma: FloatKey(sigma),
            },
            construct,
        )
    }
}
