//! Per-kind cached resource containers.
//!
//! Each module specializes the generic
//! [`CachedResourceContainer`](crate::container::CachedResourceContainer)
//! for one resource kind: it defines the key (the parameter tuple that
//! uniquely identifies a resource), the payload type, and a typed `get`
//! method that composes the key from plain parameters so callers never build
//! keys by hand. Resource construction itself stays outside the cache —
//! every `get` takes a constructor closure supplied by the evaluating
//! operation.

pub mod bokeh_kernel;
pub mod cached_image;
pub mod cached_mask;
pub mod cached_shader;
pub mod deriche_gaussian_coefficients;
pub mod distortion_grid;
pub mod fog_glow_kernel;
pub mod image_coordinates;
pub mod keying_screen;
pub mod morphological_distance_feather_weights;
pub mod ocio_color_space_conversion_shader;
pub mod smaa_precomputed_textures;
pub mod symmetric_blur_weights;
pub mod symmetric_separable_blur_weights;
pub mod van_vliet_gaussian_coefficients;

pub use bokeh_kernel::{BokehKernel, BokehKernelContainer, BokehKernelKey};
pub use cached_image::{CachedImage, CachedImageContainer, CachedImageKey};
pub use cached_mask::{CachedMask, CachedMaskContainer, CachedMaskKey};
pub use cached_shader::{CachedShader, CachedShaderContainer, CachedShaderKey, ShaderPrecision};
pub use deriche_gaussian_coefficients::{
    DericheGaussianCoefficients, DericheGaussianCoefficientsContainer, DericheGaussianCoefficientsKey,
};
pub use distortion_grid::{DistortionGrid, DistortionGridContainer, DistortionGridKey, DistortionKind};
pub use fog_glow_kernel::{FogGlowKernel, FogGlowKernelContainer, FogGlowKernelKey};
pub use image_coordinates::{CoordinateKind, ImageCoordinates, ImageCoordinatesContainer, ImageCoordinatesKey};
pub use keying_screen::{KeyingScreen, KeyingScreenContainer, KeyingScreenKey};
pub use morphological_distance_feather_weights::{
    FeatherFalloff, MorphologicalDistanceFeatherWeights, MorphologicalDistanceFeatherWeightsContainer,
    MorphologicalDistanceFeatherWeightsKey,
};
pub use ocio_color_space_conversion_shader::{
    OcioColorSpaceConversionShader, OcioColorSpaceConversionShaderContainer, OcioColorSpaceConversionShaderKey,
};
pub use smaa_precomputed_textures::{SmaaPrecomputedTextures, SmaaPrecomputedTexturesContainer};
pub use symmetric_blur_weights::{BlurFilterKind, SymmetricBlurWeights, SymmetricBlurWeightsContainer, SymmetricBlurWeightsKey};
pub use symmetric_separable_blur_weights::{
    SymmetricSeparableBlurWeights, SymmetricSeparableBlurWeightsContainer, SymmetricSeparableBlurWeightsKey,
};
pub use van_vliet_gaussian_coefficients::{
    VanVlietGaussianCoefficients, VanVlietGaussianCoefficientsContainer, VanVlietGaussianCoefficientsKey,
};
