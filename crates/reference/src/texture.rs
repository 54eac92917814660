//! Texture objects and multisample storage.

use crate::context::{GlResult, ReferenceGl};
use crate::formats;
use crate::quirk::Quirk;
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl::{self, GLenum};

const TEXTURE_TARGETS: &[GLenum] = &[
    gl::TEXTURE_1D,
    gl::TEXTURE_2D,
    gl::TEXTURE_3D,
    gl::TEXTURE_1D_ARRAY,
    gl::TEXTURE_2D_ARRAY,
    gl::TEXTURE_RECTANGLE,
    gl::TEXTURE_CUBE_MAP,
    gl::TEXTURE_CUBE_MAP_ARRAY,
    gl::TEXTURE_BUFFER,
    gl::TEXTURE_2D_MULTISAMPLE,
    gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MultisampleStorage {
    pub internalformat: GLenum,
    pub samples: i32,
    pub size: [i32; 3],
    pub fixed_sample_locations: bool,
}

/// A texture name. `target` is fixed by the first bind.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Texture {
    pub target: Option<GLenum>,
    pub storage: Option<MultisampleStorage>,
}

impl ReferenceGl {
    pub(crate) fn bind_texture_checked(&mut self, target: GLenum, texture: u32) -> GlResult {
        if !TEXTURE_TARGETS.contains(&target) {
            return Err(ErrorCode::InvalidEnum);
        }
        if texture != 0 {
            let tex = self
                .textures
                .get_mut(&texture)
                .ok_or(ErrorCode::InvalidOperation)?;
            match tex.target {
                Some(existing) if existing != target => return Err(ErrorCode::InvalidOperation),
                _ => tex.target = Some(target),
            }
        }
        self.texture_bindings.insert(target, texture);
        Ok(())
    }

    pub(crate) fn delete_texture_object(&mut self, texture: u32) {
        if texture == 0 || self.textures.remove(&texture).is_none() {
            return;
        }
        for bound in self.texture_bindings.values_mut() {
            if *bound == texture {
                *bound = 0;
            }
        }
        for fb in self.framebuffers.values_mut() {
            fb.attachments.retain(|_, a| a.texture != texture);
        }
    }

    /// `TexImage3DMultisample` on the texture bound to `target`.
    pub(crate) fn tex_image_3d_multisample_checked(
        &mut self,
        target: GLenum,
        samples: i32,
        internalformat: GLenum,
        size: [i32; 3],
        fixed_sample_locations: bool,
    ) -> GlResult {
        if target != gl::TEXTURE_2D_MULTISAMPLE_ARRAY {
            return Err(ErrorCode::InvalidEnum);
        }
        let zero_ok = self.profile.has_quirk(Quirk::AcceptZeroSamples);
        if samples < 0 || (samples == 0 && !zero_ok) {
            return Err(ErrorCode::InvalidValue);
        }
        let renderable = formats::describe(internalformat)
            .is_some_and(|f| f.renderable && f.kind != formats::Kind::Stencil);
        if !renderable {
            return Err(ErrorCode::InvalidEnum);
        }

        let limits = self.profile.limits;
        let [width, height, depth] = size;
        let max_size = i64::from(limits.max_texture_size);
        let max_layers = i64::from(limits.max_array_texture_layers);
        if width < 0
            || height < 0
            || depth < 0
            || i64::from(width) > max_size
            || i64::from(height) > max_size
            || i64::from(depth) > max_layers
        {
            return Err(ErrorCode::InvalidValue);
        }
        if i64::from(samples) > i64::from(limits.max_samples) {
            return Err(ErrorCode::InvalidOperation);
        }

        let bound = self.texture_bindings.get(&target).copied().unwrap_or(0);
        let tex = self
            .textures
            .get_mut(&bound)
            .ok_or(ErrorCode::InvalidOperation)?;
        tex.storage = Some(MultisampleStorage {
            internalformat,
            samples,
            size,
            fixed_sample_locations,
        });
        Ok(())
    }
}
