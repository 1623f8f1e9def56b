//! Cached weight tables for the morphological distance feather operation.
//!
//! The operation needs two tables per (falloff, radius) pair: the blur
//! weights of the feather itself and the falloff factors indexed by
//! morphological distance.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// Falloff profile applied over the feather distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatherFalloff {
    Smooth,
    Sphere,
    Root,
    InverseSquare,
    Sharp,
    Linear,
}

/// Parameter tuple identifying one feather weight table pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorphologicalDistanceFeatherWeightsKey {
    pub falloff: FeatherFalloff,
    pub radius: i32,
}

/// Weight and falloff tables for one feather configuration.
#[derive(Debug)]
pub struct MorphologicalDistanceFeatherWeights {
    /// 1D blur weights over the feather radius.
    pub weights: Vec<f32>,
    /// Falloff factor per unit of morphological distance.
    pub distance_falloffs: Vec<f32>,
}

cached_resource_container! {
    /// Container of every cached feather weight table pair.
    MorphologicalDistanceFeatherWeightsContainer,
    MorphologicalDistanceFeatherWeightsKey,
    MorphologicalDistanceFeatherWeights,
    "morphological_distance_feather_weights"
}

impl MorphologicalDistanceFeatherWeightsContainer {
    /// Look up the tables for the given falloff and radius, running
    /// `construct` to build them on a miss.
    pub fn get(
        &mut self,
        falloff: FeatherFalloff,
        radius: i32,
        construct: impl FnOnce() -> Result<MorphologicalDistanceFeatherWeights>,
    ) -> Result<Arc<MorphologicalDistanceFeatherWeights>> {
        self.cache
            .get_or_create(MorphologicalDistanceFeatherWeightsKey { falloff, radius }, construct)
    }
}
