//! Cached weights for symmetric separable blurs.
//!
//! Separable blurs run as two 1D passes, so the cached table is a single
//! half-row of weights. The key adds a normalization flag: some operations
//! want the raw filter samples, others a table that sums to one.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

use super::symmetric_blur_weights::BlurFilterKind;

/// Parameter tuple identifying one separable blur weight row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymmetricSeparableBlurWeightsKey {
    pub filter: BlurFilterKind,
    pub radius: FloatKey,
    pub normalized: bool,
}

impl SymmetricSeparableBlurWeightsKey {
    #[must_use]
    pub fn new(filter: BlurFilterKind, radius: f32, normalized: bool) -> Self {
        Self {
            filter,
            radius: FloatKey(radius),
            normalized,
        }
    }
}

/// Half of a symmetric 1D blur weight row; the other half is mirrored.
#[derive(Debug)]
pub struct SymmetricSeparableBlurWeights {
    pub weights: Vec<f32>,
}

cached_resource_container! {
    /// Container of every cached separable blur weight row.
    SymmetricSeparableBlurWeightsContainer,
    SymmetricSeparableBlurWeightsKey,
    SymmetricSeparableBlurWeights,
    "symmetric_separable_blur_weights"
}

impl SymmetricSeparableBlurWeightsContainer {
    /// Look up the weight row for the given parameters, running `construct`
    /// to build it on a miss.
    pub fn get(
        &mut self,
        filter: BlurFilterKind,
        radius: f32,
        normalized: bool,
        construct: impl FnOnce() -> Result<SymmetricSeparableBlurWeights>,
    ) -> Result<Arc<SymmetricSeparableBlurWeights>> {
        self.cache.get_or_create(
            SymmetricSeparableBlurWeightsKey::new(filter, radius, normalized),
            construct,
        )
    }
}
