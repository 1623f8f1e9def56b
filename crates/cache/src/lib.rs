//! Generational in-memory cache manager for the Prism compositor.
//!
//! Evaluating the compositor graph needs precomputed auxiliary resources —
//! convolution kernels, weight tables, color space conversion shaders,
//! distortion grids, rasterized masks — that are expensive to build but
//! depend only on a small parameter tuple. This crate keeps one typed
//! container per resource kind, memoizes construction by key, and reclaims
//! whatever the most recent completed evaluation stopped using:
//!
//! - Before every evaluation, [`StaticCacheManager::reset`] drops every
//!   resource whose needed flag is false and clears the flag on the rest.
//! - During evaluation, every lookup marks its resource as needed.
//!
//! Cancelled evaluations never got the chance to mark everything they use;
//! [`StaticCacheManager::skip_next_reset`] preserves the population across
//! the one following reset.
//!
//! The cache is single-threaded by contract: one evaluation at a time
//! drives all lookups and resets, so containers take `&mut self` and carry
//! no locks.
//!
//! # Example
//!
//! ```
//! use prism_cache::StaticCacheManager;
//! use prism_cache::resources::{CoordinateKind, ImageCoordinates};
//!
//! let mut cache = StaticCacheManager::new();
//!
//! // Host: before each evaluation.
//! cache.reset();
//!
//! // Operation: during evaluation.
//! let coords = cache.image_coordinates.get([4, 4], CoordinateKind::Pixel, || {
//!     let mut coordinates = Vec::with_capacity(16);
//!     for y in 0..4 {
//!         for x in 0..4 {
//!             coordinates.push([x as f32, y as f32]);
//!         }
//!     }
//!     Ok(ImageCoordinates { coordinates, size: [4, 4] })
//! })?;
//! assert_eq!(coords.coordinates.len(), 16);
//! # Ok::<(), prism_cache::CacheError>(())
//! ```

pub mod container;
pub mod error;
pub mod key;
pub mod manager;
pub mod resources;

pub use container::{CacheKey, CachedResourceContainer, ContainerStats};
pub use error::{CacheError, Result};
pub use key::FloatKey;
pub use manager::StaticCacheManager;
