//! The reference GL state machine.
//!
//! `ReferenceGl` keeps just enough object state to apply the GL 4.5 error
//! rules of every entry point in `GlApi`. Rules live next to the objects
//! they govern (`framebuffer`, `texture`, `attrib`, `query`); this module
//! owns the error register and dispatches the trait.

use crate::attrib::VertexArray;
use crate::framebuffer::{DefaultFramebuffer, Framebuffer};
use crate::profile::ReferenceProfile;
use crate::texture::Texture;
use gl_conform_core::api::{GlApi, GlVersion, SurfaceInfo};
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl::{self, GLenum};
use std::collections::BTreeMap;

/// Outcome of one entry point: `Err` carries the error it raises.
pub(crate) type GlResult<T = ()> = Result<T, ErrorCode>;

/// A software GL context.
pub struct ReferenceGl {
    pub(crate) profile: ReferenceProfile,
    pending: Option<ErrorCode>,
    next_name: u32,
    pub(crate) default_framebuffer: DefaultFramebuffer,
    pub(crate) framebuffers: BTreeMap<u32, Framebuffer>,
    pub(crate) draw_framebuffer: u32,
    pub(crate) read_framebuffer: u32,
    pub(crate) textures: BTreeMap<u32, Texture>,
    pub(crate) texture_bindings: BTreeMap<GLenum, u32>,
    pub(crate) vertex_arrays: BTreeMap<u32, VertexArray>,
    pub(crate) bound_vertex_array: u32,
    pub(crate) current_attribs: Vec<[f64; 4]>,
    calls: u64,
}

impl ReferenceGl {
    pub fn new(profile: ReferenceProfile) -> Self {
        let attribs = profile.limits.max_vertex_attribs as usize;
        let default_framebuffer = DefaultFramebuffer::new(profile.surface.visual);
        let mut gl = Self {
            profile,
            pending: None,
            next_name: 1,
            default_framebuffer,
            framebuffers: BTreeMap::new(),
            draw_framebuffer: 0,
            read_framebuffer: 0,
            textures: BTreeMap::new(),
            texture_bindings: BTreeMap::new(),
            vertex_arrays: BTreeMap::new(),
            bound_vertex_array: 0,
            current_attribs: vec![[0.0, 0.0, 0.0, 1.0]; attribs],
            calls: 0,
        };
        if gl.profile.surface.uses_fbo {
            let window = gl.allocate_name();
            gl.framebuffers.insert(window, Framebuffer::window());
            gl.draw_framebuffer = window;
            gl.read_framebuffer = window;
        }
        for quirk in &gl.profile.quirks {
            log::debug!("reference GL quirk enabled: {quirk:?}");
        }
        gl
    }

    pub fn profile(&self) -> &ReferenceProfile {
        &self.profile
    }

    /// Number of entry point calls made so far, `get_error` excluded.
    pub fn call_count(&self) -> u64 {
        self.calls
    }

    /// Error currently latched in the register, without clearing it.
    pub fn pending_error(&self) -> ErrorCode {
        self.pending.unwrap_or(ErrorCode::NoError)
    }

    pub(crate) fn allocate_name(&mut self) -> u32 {
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    /// Latches `error` unless an earlier one is still pending.
    pub(crate) fn raise(&mut self, error: ErrorCode) {
        log::trace!("reference GL raises {error}");
        if self.pending.is_none() && error.is_error() {
            self.pending = Some(error);
        }
    }

    fn settle(&mut self, result: GlResult) {
        self.calls += 1;
        if let Err(error) = result {
            self.raise(error);
        }
    }

    fn settle_value<T>(&mut self, result: GlResult<T>, fallback: T) -> T {
        self.calls += 1;
        match result {
            Ok(value) => value,
            Err(error) => {
                self.raise(error);
                fallback
            }
        }
    }
}

impl Default for ReferenceGl {
    fn default() -> Self {
        Self::new(ReferenceProfile::default())
    }
}

impl GlApi for ReferenceGl {
    fn get_error(&mut self) -> GLenum {
        self.pending.take().unwrap_or(ErrorCode::NoError).to_raw()
    }

    fn version(&self) -> GlVersion {
        self.profile.version
    }

    fn has_extension(&self, name: &str) -> bool {
        self.profile.has_extension(name)
    }

    fn surface(&self) -> SurfaceInfo {
        self.profile.surface
    }

    fn get_integer(&mut self, pname: GLenum) -> i32 {
        let result = self.integer(pname);
        self.settle_value(result, 0)
    }

    fn read_buffer(&mut self, src: GLenum) {
        let result = self.set_read_buffer(src);
        self.settle(result);
    }

    fn create_framebuffer(&mut self) -> u32 {
        self.calls += 1;
        let name = self.allocate_name();
        self.framebuffers.insert(name, Framebuffer::new());
        name
    }

    fn bind_framebuffer(&mut self, target: GLenum, framebuffer: u32) {
        let result = self.bind_framebuffer_checked(target, framebuffer);
        self.settle(result);
    }

    fn delete_framebuffer(&mut self, framebuffer: u32) {
        self.calls += 1;
        self.delete_framebuffer_object(framebuffer);
    }

    fn named_framebuffer_draw_buffers(&mut self, framebuffer: u32, n: i32, bufs: &[GLenum]) {
        let result = self.draw_buffers_checked(framebuffer, n, bufs);
        self.settle(result);
    }

    fn gen_texture(&mut self) -> u32 {
        self.calls += 1;
        let name = self.allocate_name();
        self.textures.insert(name, Texture::default());
        name
    }

    fn bind_texture(&mut self, target: GLenum, texture: u32) {
        let result = self.bind_texture_checked(target, texture);
        self.settle(result);
    }

    fn delete_texture(&mut self, texture: u32) {
        self.calls += 1;
        self.delete_texture_object(texture);
    }

    fn tex_image_3d_multisample(
        &mut self,
        target: GLenum,
        samples: i32,
        internalformat: GLenum,
        width: i32,
        height: i32,
        depth: i32,
        fixed_sample_locations: bool,
    ) {
        let result = self.tex_image_3d_multisample_checked(
            target,
            samples,
            internalformat,
            [width, height, depth],
            fixed_sample_locations,
        );
        self.settle(result);
    }

    fn framebuffer_texture_layer(
        &mut self,
        target: GLenum,
        attachment: GLenum,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        let result = self.framebuffer_texture_layer_checked(target, attachment, texture, level, layer);
        self.settle(result);
    }

    fn get_internalformat_iv(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [i32],
    ) {
        let result = self.internalformat(target, internalformat, pname).map(|values| {
            for (out, v) in params.iter_mut().zip(values) {
                *out = i32::try_from(v).unwrap_or(i32::MAX);
            }
        });
        self.settle(result);
    }

    fn get_internalformat_i64v(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [i64],
    ) {
        let result = self.internalformat(target, internalformat, pname).map(|values| {
            for (out, v) in params.iter_mut().zip(values) {
                *out = v;
            }
        });
        self.settle(result);
    }

    fn vertex_attrib_l(&mut self, index: u32, values: &[f64]) {
        let result = self.set_current_attrib_l(index, values);
        self.settle(result);
    }

    fn vertex_attrib_lv(&mut self, index: u32, values: &[f64]) {
        let result = self.set_current_attrib_l(index, values);
        self.settle(result);
    }

    fn vertex_attrib_l_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: usize,
    ) {
        let vao = self.bound_vertex_array;
        let offset = isize::try_from(offset).unwrap_or(isize::MAX);
        let result = self.attrib_l_pointer(vao, index, size, ty, stride, offset);
        self.settle(result);
    }

    fn get_vertex_attrib_ldv(&mut self, index: u32, pname: GLenum, params: &mut [f64; 4]) {
        let result = self.current_attrib_l(index, pname).map(|v| *params = v);
        self.settle(result);
    }

    fn gen_vertex_array(&mut self) -> u32 {
        self.calls += 1;
        let name = self.allocate_name();
        self.vertex_arrays.insert(name, VertexArray::default());
        name
    }

    fn bind_vertex_array(&mut self, array: u32) {
        let result = self.bind_vertex_array_checked(array);
        self.settle(result);
    }

    fn delete_vertex_array(&mut self, array: u32) {
        self.calls += 1;
        if self.vertex_arrays.remove(&array).is_some() && self.bound_vertex_array == array {
            self.bound_vertex_array = 0;
        }
    }

    fn vertex_array_vertex_attrib_l_offset_ext(
        &mut self,
        vaobj: u32,
        buffer: u32,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: isize,
    ) {
        let result = self.attrib_l_offset_ext(vaobj, buffer, index, size, ty, stride, offset);
        self.settle(result);
    }
}

/// Whether `target` names a framebuffer binding point.
pub(crate) fn is_framebuffer_target(target: GLenum) -> bool {
    matches!(
        target,
        gl::FRAMEBUFFER | gl::DRAW_FRAMEBUFFER | gl::READ_FRAMEBUFFER
    )
}
