//! Cached images.
//!
//! Image inputs are loaded, pass-extracted and premultiplied outside the
//! cache; the result is kept per (image, pass, view, frame) tuple so nodes
//! referencing the same image data in one evaluation share a single buffer.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// Parameter tuple identifying one prepared image buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CachedImageKey {
    /// Name of the image datablock.
    pub image: String,
    /// Render pass name, empty for the combined pass.
    pub pass: String,
    /// Multi-view view name, empty for single-view images.
    pub view: String,
    /// Frame of the image sequence or movie.
    pub frame: i32,
}

/// A prepared RGBA image buffer.
#[derive(Debug)]
pub struct CachedImage {
    /// Row-major RGBA texels.
    pub pixels: Vec<[f32; 4]>,
    pub size: [i32; 2],
}

cached_resource_container! {
    /// Container of every cached image buffer.
    CachedImageContainer,
    CachedImageKey,
    CachedImage,
    "cached_images"
}

impl CachedImageContainer {
    /// Look up the prepared buffer for the given image identity, running
    /// `construct` to load it on a miss.
    pub fn get(
        &mut self,
        image: &str,
        pass: &str,
        view: &str,
        frame: i32,
        construct: impl FnOnce() -> Result<CachedImage>,
    ) -> Result<Arc<CachedImage>> {
        let key = CachedImageKey {
            image: image.to_owned(),
            pass: pass.to_owned(),
            view: view.to_owned(),
            frame,
        };
        self.cache.get_or_create(key, construct)
    }
}
