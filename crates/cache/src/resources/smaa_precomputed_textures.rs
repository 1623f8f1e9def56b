//! Cached SMAA precomputed lookup textures.
//!
//! The SMAA anti-aliasing algorithm uses two constant lookup textures, the
//! area and search tables. They take no parameters, so this is a
//! single-instance kind: the container holds at most one resource under the
//! unit key, kept alive across evaluations as long as any operation uses
//! SMAA.

use std::sync::Arc;

use crate::container::cached_resource_container;
use crate::error::Result;

/// The SMAA area and search lookup tables, decoded and ready for upload.
#[derive(Debug)]
pub struct SmaaPrecomputedTextures {
    /// RG8 area table texels.
    pub area: Vec<u8>,
    /// Area table dimensions in texels.
    pub area_size: [usize; 2],
    /// R8 search table texels.
    pub search: Vec<u8>,
    /// Search table dimensions in texels.
    pub search_size: [usize; 2],
}

cached_resource_container! {
    /// Container holding the single SMAA precomputed texture set.
    SmaaPrecomputedTexturesContainer,
    (),
    SmaaPrecomputedTextures,
    "smaa_precomputed_textures"
}

impl SmaaPrecomputedTexturesContainer {
    /// Look up the texture set, running `construct` to decode it on a miss.
    pub fn get(
        &mut self,
        construct: impl FnOnce() -> Result<SmaaPrecomputedTextures>,
    ) -> Result<Arc<SmaaPrecomputedTextures>> {
        self.cache.get_or_create((), construct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_instance_is_shared() {
        let mut container = SmaaPrecomputedTexturesContainer::default();

        let build = || {
            Ok(SmaaPrecomputedTextures {
                area: vec![0; 4],
                area_size: [2, 1],
                search: vec![0; 2],
                search_size: [2, 1],
            })
        };

        let a = container.get(build).unwrap();
        let b = container.get(|| unreachable!("hit must not reconstruct")).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(container.len(), 1);
    }
}
