//! Cached keying screens.
//!
//! A keying screen is a smooth gradient plate built from the tracking
//! markers of a movie clip, used as the reference color field by the keyer.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;
use crate::key::FloatKey;

/// Parameter tuple identifying one keying screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyingScreenKey {
    /// Name of the movie clip datablock providing the markers.
    pub clip: String,
    /// Frame the markers were sampled at.
    pub frame: i32,
    /// Gradient smoothness in `[0, 1]`.
    pub smoothness: FloatKey,
}

/// An RGBA gradient plate interpolating the tracked marker colors.
#[derive(Debug)]
pub struct KeyingScreen {
    /// Row-major RGBA texels.
    pub pixels: Vec<[f32; 4]>,
    pub size: [i32; 2],
}

cached_resource_container! {
    /// Container of every cached keying screen.
    KeyingScreenContainer,
    KeyingScreenKey,
    KeyingScreen,
    "keying_screens"
}

impl KeyingScreenContainer {
    /// Look up the screen for the given clip, frame and smoothness, running
    /// `construct` to build it on a miss.
    pub fn get(
        &mut self,
        clip: &str,
        frame: i32,
        smoothness: f32,
        construct: impl FnOnce() -> Result<KeyingScreen>,
    ) -> Result<Arc<KeyingScreen>> {
        let key = KeyingScreenKey {
            clip: clip.to_owned(),
            frame,
            smoothness: FloatKey(smoothness),
        };
        self.cache.get_or_create(key, construct)
    }
}
