//! Cached compiled shaders.
//!
//! Operations that generate shader code at evaluation time (for instance
//! from a node's expression) cache the compiled program by the generating
//! shader's name and requested precision.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// Floating point precision a shader was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderPrecision {
    Full,
    Half,
}

/// Parameter tuple identifying one compiled shader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CachedShaderKey {
    /// Name of the shader create-info the program was compiled from.
    pub name: String,
    pub precision: ShaderPrecision,
}

/// A compiled shader program.
#[derive(Debug)]
pub struct CachedShader {
    /// Driver-produced program binary.
    pub binary: Vec<u8>,
}

cached_resource_container! {
    /// Container of every cached compiled shader.
    CachedShaderContainer,
    CachedShaderKey,
    CachedShader,
    "cached_shaders"
}

impl CachedShaderContainer {
    /// Look up the compiled program for `name` at `precision`, running
    /// `construct` to compile it on a miss.
    pub fn get(
        &mut self,
        name: &str,
        precision: ShaderPrecision,
        construct: impl FnOnce() -> Result<CachedShader>,
    ) -> Result<Arc<CachedShader>> {
        let key = CachedShaderKey {
            name: name.to_owned(),
            precision,
        };
        self.cache.get_or_create(key, construct)
    }
}
