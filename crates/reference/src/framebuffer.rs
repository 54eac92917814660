//! Framebuffer objects and the buffer selection rules of GL 4.5 §17.4.1
//! and §18.2.1.

use crate::context::{is_framebuffer_target, GlResult, ReferenceGl};
use crate::quirk::Quirk;
use gl_conform_core::api::Visual;
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl::{self, GLenum};
use std::collections::BTreeMap;

/// Table 17.6: buffers of the default framebuffer.
const TABLE_17_6: &[GLenum] = &[
    gl::NONE,
    gl::FRONT_LEFT,
    gl::FRONT_RIGHT,
    gl::BACK_LEFT,
    gl::BACK_RIGHT,
];

/// Constants that may name more than one buffer (table 17.4).
const MULTIPLE_BUFFERS: &[GLenum] = &[gl::FRONT, gl::LEFT, gl::RIGHT, gl::FRONT_AND_BACK];

/// One texture image attached to a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Attachment {
    pub texture: u32,
    pub level: i32,
    pub layer: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Framebuffer {
    pub draw_buffers: Vec<GLenum>,
    pub read_buffer: GLenum,
    pub attachments: BTreeMap<GLenum, Attachment>,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            draw_buffers: vec![gl::COLOR_ATTACHMENT0],
            read_buffer: gl::COLOR_ATTACHMENT0,
            attachments: BTreeMap::new(),
        }
    }

    /// The object that stands in for the window when the surface is an FBO.
    pub fn window() -> Self {
        Self::new()
    }
}

/// Buffer selection state of the window system framebuffer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DefaultFramebuffer {
    pub visual: Visual,
    pub draw_buffers: Vec<GLenum>,
    pub read_buffer: GLenum,
}

impl DefaultFramebuffer {
    pub fn new(visual: Visual) -> Self {
        let initial = if visual.contains(Visual::DOUBLE) {
            gl::BACK
        } else {
            gl::FRONT
        };
        Self {
            visual,
            draw_buffers: vec![initial],
            read_buffer: initial,
        }
    }

    /// Whether a constant from table 17.4 or 17.6 names at least one buffer
    /// this framebuffer allocated.
    pub fn allocated(&self, buf: GLenum) -> bool {
        let stereo = self.visual.contains(Visual::STEREO);
        let double = self.visual.contains(Visual::DOUBLE);
        match buf {
            gl::NONE => true,
            gl::FRONT_LEFT | gl::FRONT | gl::LEFT | gl::FRONT_AND_BACK => true,
            gl::FRONT_RIGHT | gl::RIGHT => stereo,
            gl::BACK_LEFT | gl::BACK => double,
            gl::BACK_RIGHT => double && stereo,
            _ => false,
        }
    }
}

fn is_window_buffer(buf: GLenum) -> bool {
    TABLE_17_6.contains(&buf) || buf == gl::BACK || MULTIPLE_BUFFERS.contains(&buf)
}

impl ReferenceGl {
    pub(crate) fn bind_framebuffer_checked(&mut self, target: GLenum, framebuffer: u32) -> GlResult {
        if !is_framebuffer_target(target) {
            return Err(ErrorCode::InvalidEnum);
        }
        if framebuffer != 0 && !self.framebuffers.contains_key(&framebuffer) {
            return Err(ErrorCode::InvalidOperation);
        }
        if matches!(target, gl::FRAMEBUFFER | gl::DRAW_FRAMEBUFFER) {
            self.draw_framebuffer = framebuffer;
        }
        if matches!(target, gl::FRAMEBUFFER | gl::READ_FRAMEBUFFER) {
            self.read_framebuffer = framebuffer;
        }
        Ok(())
    }

    pub(crate) fn delete_framebuffer_object(&mut self, framebuffer: u32) {
        if framebuffer == 0 || self.framebuffers.remove(&framebuffer).is_none() {
            return;
        }
        if self.draw_framebuffer == framebuffer {
            self.draw_framebuffer = 0;
        }
        if self.read_framebuffer == framebuffer {
            self.read_framebuffer = 0;
        }
    }

    pub(crate) fn bound_framebuffer(&self, target: GLenum) -> u32 {
        match target {
            gl::READ_FRAMEBUFFER => self.read_framebuffer,
            _ => self.draw_framebuffer,
        }
    }

    /// `ReadBuffer` on the framebuffer bound for reading.
    pub(crate) fn set_read_buffer(&mut self, src: GLenum) -> GlResult {
        let attachment = gl::color_attachment_index(src);
        if !is_window_buffer(src) && attachment.is_none() {
            return Err(ErrorCode::InvalidEnum);
        }
        if src == gl::FRONT && self.profile.has_quirk(Quirk::RejectFrontReadBuffer) {
            return Err(ErrorCode::InvalidEnum);
        }

        let max_attachments = self.profile.limits.max_color_attachments;
        match self.read_framebuffer {
            0 => {
                if attachment.is_some() || !self.default_framebuffer.allocated(src) {
                    return Err(ErrorCode::InvalidOperation);
                }
                self.default_framebuffer.read_buffer = src;
            }
            name => {
                let valid = src == gl::NONE || attachment.is_some_and(|i| i < max_attachments);
                if !valid {
                    return Err(ErrorCode::InvalidOperation);
                }
                if let Some(fb) = self.framebuffers.get_mut(&name) {
                    fb.read_buffer = src;
                }
            }
        }
        Ok(())
    }

    /// `NamedFramebufferDrawBuffers`. Checks run in the order the error
    /// list of §17.4.1 gives them; the first violated rule decides.
    pub(crate) fn draw_buffers_checked(&mut self, framebuffer: u32, n: i32, bufs: &[GLenum]) -> GlResult {
        let quirk = |q: Quirk| self.profile.has_quirk(q);

        let mut framebuffer = framebuffer;
        if framebuffer != 0 && !self.framebuffers.contains_key(&framebuffer) {
            if !quirk(Quirk::AcceptUnknownFramebuffer) {
                return Err(ErrorCode::InvalidOperation);
            }
            framebuffer = 0;
        }

        let max_draw_buffers = self.profile.limits.max_draw_buffers;
        let count = usize::try_from(n).map_err(|_| ErrorCode::InvalidValue)?;
        if count > max_draw_buffers as usize && !quirk(Quirk::IgnoreDrawBuffersLimit) {
            return Err(ErrorCode::InvalidValue);
        }

        // Entries past the caller's slice read as NONE.
        let list: Vec<GLenum> = (0..count)
            .map(|i| bufs.get(i).copied().unwrap_or(gl::NONE))
            .collect();

        let enum_error = if quirk(Quirk::DrawBuffersEnumAsValue) {
            ErrorCode::InvalidValue
        } else {
            ErrorCode::InvalidEnum
        };
        for &buf in &list {
            let known = TABLE_17_6.contains(&buf) || buf == gl::BACK || gl::color_attachment_index(buf).is_some();
            if MULTIPLE_BUFFERS.contains(&buf) || !known {
                return Err(enum_error);
            }
        }

        let max_attachments = self.profile.limits.max_color_attachments;
        if framebuffer == 0 {
            for &buf in &list {
                if gl::color_attachment_index(buf).is_some() {
                    return Err(ErrorCode::InvalidOperation);
                }
                if buf == gl::BACK && count != 1 && !quirk(Quirk::AcceptBackWithOthers) {
                    return Err(ErrorCode::InvalidOperation);
                }
                if buf != gl::BACK && !self.default_framebuffer.allocated(buf) {
                    return Err(ErrorCode::InvalidOperation);
                }
            }
        } else {
            for &buf in &list {
                if buf == gl::NONE {
                    continue;
                }
                match gl::color_attachment_index(buf) {
                    Some(i) if i < max_attachments => {}
                    _ => return Err(ErrorCode::InvalidOperation),
                }
            }
        }

        if !quirk(Quirk::AcceptDuplicateDrawBuffers) {
            for (i, buf) in list.iter().enumerate() {
                if *buf != gl::NONE && list[i + 1..].contains(buf) {
                    return Err(ErrorCode::InvalidOperation);
                }
            }
        }

        match framebuffer {
            0 => self.default_framebuffer.draw_buffers = list,
            name => {
                if let Some(fb) = self.framebuffers.get_mut(&name) {
                    fb.draw_buffers = list;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn framebuffer_texture_layer_checked(
        &mut self,
        target: GLenum,
        attachment: GLenum,
        texture: u32,
        level: i32,
        layer: i32,
    ) -> GlResult {
        if !is_framebuffer_target(target) {
            return Err(ErrorCode::InvalidEnum);
        }
        let framebuffer = self.bound_framebuffer(target);
        if framebuffer == 0 {
            return Err(ErrorCode::InvalidOperation);
        }
        let depth_stencil = matches!(
            attachment,
            gl::DEPTH_ATTACHMENT | gl::STENCIL_ATTACHMENT | gl::DEPTH_STENCIL_ATTACHMENT
        );
        match gl::color_attachment_index(attachment) {
            Some(i) if i >= self.profile.limits.max_color_attachments => {
                return Err(ErrorCode::InvalidOperation)
            }
            None if !depth_stencil => return Err(ErrorCode::InvalidEnum),
            _ => {}
        }

        if texture != 0 {
            let tex_target = match self.textures.get(&texture) {
                Some(tex) => tex.target,
                None => return Err(ErrorCode::InvalidOperation),
            };
            let layered = matches!(
                tex_target,
                Some(
                    gl::TEXTURE_3D
                        | gl::TEXTURE_1D_ARRAY
                        | gl::TEXTURE_2D_ARRAY
                        | gl::TEXTURE_CUBE_MAP_ARRAY
                        | gl::TEXTURE_2D_MULTISAMPLE_ARRAY
                )
            );
            if !layered {
                return Err(ErrorCode::InvalidOperation);
            }
            if layer < 0 && !self.profile.has_quirk(Quirk::AcceptNegativeLayer) {
                return Err(ErrorCode::InvalidValue);
            }
            let max_layers = match tex_target {
                Some(gl::TEXTURE_3D) => self.profile.limits.max_3d_texture_size,
                _ => self.profile.limits.max_array_texture_layers,
            };
            if i64::from(layer) >= i64::from(max_layers) {
                return Err(ErrorCode::InvalidValue);
            }
            let multisample = tex_target == Some(gl::TEXTURE_2D_MULTISAMPLE_ARRAY);
            if level < 0 || (multisample && level != 0) {
                return Err(ErrorCode::InvalidValue);
            }
        }

        if let Some(fb) = self.framebuffers.get_mut(&framebuffer) {
            if texture == 0 {
                fb.attachments.remove(&attachment);
            } else {
                fb.attachments.insert(
                    attachment,
                    Attachment {
                        texture,
                        level,
                        layer,
                    },
                );
            }
        }
        Ok(())
    }
}
