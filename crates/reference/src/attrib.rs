//! Vertex arrays and the 64-bit (`L`) attribute entry points.

use crate::context::{GlResult, ReferenceGl};
use crate::quirk::Quirk;
use gl_conform_core::api::Profile;
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl::{self, GLenum};
use std::collections::BTreeMap;

/// Layout of one attribute array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttribFormat {
    pub size: i32,
    pub ty: GLenum,
    pub stride: i32,
    pub offset: isize,
    pub buffer: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct VertexArray {
    pub attribs: BTreeMap<u32, AttribFormat>,
}

impl ReferenceGl {
    /// Index rules shared by every `L` entry point. Attribute zero aliases
    /// the vertex position and cannot hold a 64-bit value.
    fn check_attrib_index(&self, index: u32) -> GlResult {
        if index >= self.profile.limits.max_vertex_attribs {
            return Err(ErrorCode::InvalidValue);
        }
        if index == 0 && !self.profile.has_quirk(Quirk::AcceptZeroAttribIndex) {
            return Err(ErrorCode::InvalidOperation);
        }
        Ok(())
    }

    pub(crate) fn set_current_attrib_l(&mut self, index: u32, values: &[f64]) -> GlResult {
        self.check_attrib_index(index)?;
        if values.is_empty() || values.len() > 4 {
            return Err(ErrorCode::InvalidValue);
        }
        let mut current = [0.0, 0.0, 0.0, 1.0];
        current[..values.len()].copy_from_slice(values);
        if let Some(slot) = self.current_attribs.get_mut(index as usize) {
            *slot = current;
        }
        Ok(())
    }

    pub(crate) fn current_attrib_l(&self, index: u32, pname: GLenum) -> GlResult<[f64; 4]> {
        self.check_attrib_index(index)?;
        if pname != gl::CURRENT_VERTEX_ATTRIB {
            return Err(ErrorCode::InvalidEnum);
        }
        Ok(self
            .current_attribs
            .get(index as usize)
            .copied()
            .unwrap_or([0.0, 0.0, 0.0, 1.0]))
    }

    fn check_attrib_format(&self, size: i32, ty: GLenum, stride: i32) -> GlResult {
        if !(1..=4).contains(&size) || stride < 0 {
            return Err(ErrorCode::InvalidValue);
        }
        if ty != gl::DOUBLE {
            return Err(ErrorCode::InvalidEnum);
        }
        Ok(())
    }

    /// `VertexAttribLPointer` on the bound vertex array.
    pub(crate) fn attrib_l_pointer(
        &mut self,
        vao: u32,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: isize,
    ) -> GlResult {
        self.check_attrib_index(index)?;
        self.check_attrib_format(size, ty, stride)?;
        let core = self.profile.version.profile == Profile::Core;
        if vao == 0 && core {
            return Err(ErrorCode::InvalidOperation);
        }
        let format = AttribFormat {
            size,
            ty,
            stride,
            offset,
            buffer: 0,
        };
        if let Some(array) = self.vertex_arrays.get_mut(&vao) {
            array.attribs.insert(index, format);
        }
        Ok(())
    }

    /// `VertexArrayVertexAttribLOffsetEXT`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn attrib_l_offset_ext(
        &mut self,
        vaobj: u32,
        buffer: u32,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: isize,
    ) -> GlResult {
        if !self.profile.has_extension("GL_EXT_direct_state_access") {
            return Err(ErrorCode::InvalidOperation);
        }
        if !self.vertex_arrays.contains_key(&vaobj) {
            return Err(ErrorCode::InvalidOperation);
        }
        // No buffer objects exist here, so only the zero buffer is a name.
        if buffer != 0 {
            return Err(ErrorCode::InvalidOperation);
        }
        self.check_attrib_index(index)?;
        self.check_attrib_format(size, ty, stride)?;
        if offset < 0 {
            return Err(ErrorCode::InvalidValue);
        }
        if let Some(array) = self.vertex_arrays.get_mut(&vaobj) {
            array.attribs.insert(
                index,
                AttribFormat {
                    size,
                    ty,
                    stride,
                    offset,
                    buffer,
                },
            );
        }
        Ok(())
    }

    pub(crate) fn bind_vertex_array_checked(&mut self, array: u32) -> GlResult {
        if array != 0 && !self.vertex_arrays.contains_key(&array) {
            return Err(ErrorCode::InvalidOperation);
        }
        self.bound_vertex_array = array;
        Ok(())
    }
}
