//! Cached Deriche Gaussian filter coefficients.
//!
//! The recursive Deriche approximation of a Gaussian blur is driven by a
//! small set of feedback/feedforward coefficients derived from sigma. The
//! derivation involves pole fitting in double precision, so the coefficient
//! set is cached per sigma.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// Sigma identifying one Deriche coefficient set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DericheGaussianCoefficientsKey {
    pub sigma: FloatKey,
}

/// Fourth-order Deriche filter coefficients for one sigma.
#[derive(Debug)]
pub struct DericheGaussianCoefficients {
    /// Feedforward coefficients of the causal pass.
    pub causal_feedforward: [f64; 4],
    /// Feedforward coefficients of the non-causal pass.
    pub non_causal_feedforward: [f64; 4],
    /// Feedback coefficients shared by both passes.
    pub feedback: [f64; 4],
    /// Boundary correction factor of the causal pass.
    pub causal_boundary: f64,
    /// Boundary correction factor of the non-causal pass.
    pub non_causal_boundary: f64,
}

cached_resource_container! {
    /// Container of every cached Deriche coefficient set.
    DericheGaussianCoefficientsContainer,
    DericheGaussianCoefficientsKey,
    DericheGaussianCoefficients,
    "deriche_gaussian_coefficients"
}

impl DericheGaussianCoefficientsContainer {
    /// Look up the coefficient set for `sigma`, running `construct` to
    /// derive it on a miss.
    pub fn get(
        &mut self,
        sigma: f32,
        construct: impl FnOnce() -> Result<DericheGaussianCoefficients>,
    ) -> Result<Arc<DericheGaussianCoefficients>> {
        self.cache.get_or_create(
            DericheGaussianCoefficientsKey {
                sigma: FloatKey(sigma),
            },
            construct,
        )
    }
}
