//! Cached lens distortion grids.
//!
//! Movie clip distortion is evaluated through the clip's camera calibration
//! into a grid of displaced coordinates covering the frame. The grid depends
//! on the clip, the output size, the distortion direction, and the frame the
//! calibration was sampled at.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// Direction of the distortion evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistortionKind {
    /// Apply the lens distortion model.
    Distort,
    /// Invert the lens distortion model.
    Undistort,
}

/// Parameter tuple identifying one distortion grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistortionGridKey {
    /// Name of the movie clip datablock carrying the calibration.
    pub clip: String,
    /// Grid size in pixels.
    pub size: [i32; 2],
    pub kind: DistortionKind,
    /// Frame the calibration values were sampled at.
    pub calibration_frame: i32,
}

/// A per-pixel grid of distorted sampling coordinates.
#[derive(Debug)]
pub struct DistortionGrid {
    /// Row-major displaced coordinates, one pair per pixel.
    pub coordinates: Vec<[f32; 2]>,
    pub size: [i32; 2],
}

cached_resource_container! {
    /// Container of every cached distortion grid.
    DistortionGridContainer,
    DistortionGridKey,
    DistortionGrid,
    "distortion_grids"
}

impl DistortionGridContainer {
    /// Look up the grid for the given clip and parameters, running
    /// `construct` to evaluate it on a miss.
    pub fn get(
        &mut self,
        clip: &str,
        size: [i32; 2],
        kind: DistortionKind,
        calibration_frame: i32,
        construct: impl FnOnce() -> Result<DistortionGrid>,
    ) -> Result<Arc<DistortionGrid>> {
        let key = DistortionGridKey {
            clip: clip.to_owned(),
            size,
            kind,
            calibration_frame,
        };
        self.cache.get_or_create(key, construct)
    }
}
