//! Cached image coordinate buffers.
//!
//! Several operations sample a precomputed buffer of per-pixel coordinates
//! instead of deriving them in the shader. The buffer depends on the output
//! size and which coordinate convention is requested.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// Coordinate convention of a coordinate buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    /// Centered, aspect-corrected coordinates spanning `[-1, 1]` on the
    /// longer axis.
    Uniform,
    /// Texel-center coordinates normalized to `[0, 1]`.
    Normalized,
    /// Integer pixel coordinates.
    Pixel,
}

/// Parameter tuple identifying one coordinate buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageCoordinatesKey {
    pub size: [i32; 2],
    pub kind: CoordinateKind,
}

/// A per-pixel coordinate buffer.
#[derive(Debug)]
pub struct ImageCoordinates {
    /// Row-major coordinate pairs.
    pub coordinates: Vec<[f32; 2]>,
    pub size: [i32; 2],
}

cached_resource_container! {
    /// Container of every cached coordinate buffer.
    ImageCoordinatesContainer,
    ImageCoordinatesKey,
    ImageCoordinates,
    "image_coordinates"
}

impl ImageCoordinatesContainer {
    /// Look up the coordinate buffer for the given size and convention,
    /// running `construct` to fill it on a miss.
    pub fn get(
        &mut self,
        size: [i32; 2],
        kind: CoordinateKind,
        construct: impl FnOnce() -> Result<ImageCoordinates>,
    ) -> Result<Arc<ImageCoordinates>> {
        self.cache.get_or_create(ImageCoordinatesKey { size, kind }, construct)
    }
}
