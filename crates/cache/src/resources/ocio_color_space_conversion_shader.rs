//! Cached OCIO color space conversion shaders.
//!
//! Converting between color spaces goes through an OCIO processor that is
//! baked into shader code plus lookup tables. Baking is slow, so the result
//! is cached per (source, target) pair within one OCIO configuration.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// Parameter tuple identifying one baked conversion shader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OcioColorSpaceConversionShaderKey {
    /// Source color space name.
    pub source: String,
    /// Target color space name.
    pub target: String,
    /// Cache identifier of the OCIO configuration the spaces come from.
    /// Conversions baked under one configuration are invalid under another.
    pub config_identifier: String,
}

/// A conversion processor baked to shader code and its lookup tables.
#[derive(Debug)]
pub struct OcioColorSpaceConversionShader {
    /// Generated shader source implementing the conversion.
    pub shader_source: String,
    /// Flattened 3D lookup tables referenced by the shader, if any.
    pub luts: Vec<Vec<f32>>,
}

cached_resource_container! {
    /// Container of every baked color space conversion shader.
    OcioColorSpaceConversionShaderContainer,
    OcioColorSpaceConversionShaderKey,
    OcioColorSpaceConversionShader,
    "ocio_color_space_conversion_shaders"
}

impl OcioColorSpaceConversionShaderContainer {
    /// Look up the conversion from `source` to `target` under the given OCIO
    /// configuration, running `construct` to bake it on a miss.
    pub fn get(
        &mut self,
        source: &str,
        target: &str,
        config_identifier: &str,
        construct: impl FnOnce() -> Result<OcioColorSpaceConversionShader>,
    ) -> Result<Arc<OcioColorSpaceConversionShader>> {
        let key = OcioColorSpaceConversionShaderKey {
            source: source.to_owned(),
            target: target.to_owned(),
            config_identifier: config_identifier.to_owned(),
        };
        self.cache.get_or_create(key, construct)
    }
}
