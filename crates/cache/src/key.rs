//! Hashable float wrappers for cache keys.
//!
//! Many resource keys carry float parameters (blur radii, Gaussian sigmas,
//! kernel rotations). `f32` is neither `Eq` nor `Hash`, so keys wrap float
//! members in [`FloatKey`], which compares and hashes the raw bit pattern.

use std::hash::{Hash, Hasher};

/// An `f32` usable as a `HashMap` key component.
///
/// Equality and hashing are defined over the bit pattern: a NaN equals an
/// identical NaN, and `0.0` and `-0.0` are distinct keys. For memoizing
/// construction parameters this is exactly what we want — two parameter
/// tuples address the same cached resource iff they are bitwise identical.
#[derive(Debug, Clone, Copy)]
pub struct FloatKey(pub f32);

impl FloatKey {
    /// The wrapped float value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for FloatKey {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
