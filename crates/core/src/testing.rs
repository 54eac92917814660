//! Scripted `GlApi` used by the unit tests of this crate.

use crate::api::{GlApi, GlVersion, Profile, SurfaceInfo};
use crate::gl::{self, GLenum};
use std::collections::VecDeque;

/// A minimal context: a queue of pending errors, a few limits, and
/// `read_buffer` that rejects anything outside the window buffers.
pub struct ScriptedGl {
    pub version: GlVersion,
    pub extensions: Vec<String>,
    pub surface: SurfaceInfo,
    /// When set, `get_error` returns this forever.
    pub stuck_error: Option<GLenum>,
    /// Value written by internal format queries.
    pub query_response: i64,
    pub calls: usize,
    pub(crate) errors: VecDeque<GLenum>,
    pub(crate) next_name: u32,
}

impl Default for ScriptedGl {
    fn default() -> Self {
        Self {
            version: GlVersion::new(4, 6, Profile::Compatibility),
            extensions: Vec::new(),
            surface: SurfaceInfo::default(),
            stuck_error: None,
            query_response: 0,
            calls: 0,
            errors: VecDeque::new(),
            next_name: 1,
        }
    }
}

impl ScriptedGl {
    pub fn push_error(&mut self, raw: GLenum) {
        self.errors.push_back(raw);
    }

    fn name(&mut self) -> u32 {
        self.calls += 1;
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    fn touch(&mut self) {
        self.calls += 1;
    }
}

impl GlApi for ScriptedGl {
    fn get_error(&mut self) -> GLenum {
        if let Some(stuck) = self.stuck_error {
            return stuck;
        }
        self.errors.pop_front().unwrap_or(gl::NO_ERROR)
    }

    fn version(&self) -> GlVersion {
        self.version
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    fn surface(&self) -> SurfaceInfo {
        self.surface
    }

    fn get_integer(&mut self, pname: GLenum) -> i32 {
        self.touch();
        match pname {
            gl::MAX_DRAW_BUFFERS | gl::MAX_COLOR_ATTACHMENTS => 8,
            gl::MAX_VERTEX_ATTRIBS => 16,
            gl::MAX_SAMPLES => 4,
            _ => {
                self.push_error(gl::INVALID_ENUM);
                0
            }
        }
    }

    fn read_buffer(&mut self, src: GLenum) {
        self.touch();
        let window = matches!(
            src,
            gl::NONE
                | gl::FRONT
                | gl::BACK
                | gl::LEFT
                | gl::RIGHT
                | gl::FRONT_LEFT
                | gl::FRONT_RIGHT
                | gl::BACK_LEFT
                | gl::BACK_RIGHT
        );
        if !window && gl::color_attachment_index(src).is_none() {
            self.push_error(gl::INVALID_ENUM);
        }
    }

    fn create_framebuffer(&mut self) -> u32 {
        self.name()
    }

    fn bind_framebuffer(&mut self, _target: GLenum, _framebuffer: u32) {
        self.touch();
    }

    fn delete_framebuffer(&mut self, _framebuffer: u32) {
        self.touch();
    }

    fn named_framebuffer_draw_buffers(&mut self, _framebuffer: u32, _n: i32, _bufs: &[GLenum]) {
        self.touch();
    }

    fn gen_texture(&mut self) -> u32 {
        self.name()
    }

    fn bind_texture(&mut self, _target: GLenum, _texture: u32) {
        self.touch();
    }

    fn delete_texture(&mut self, _texture: u32) {
        self.touch();
    }

    fn tex_image_3d_multisample(
        &mut self,
        _target: GLenum,
        _samples: i32,
        _internalformat: GLenum,
        _width: i32,
        _height: i32,
        _depth: i32,
        _fixed_sample_locations: bool,
    ) {
        self.touch();
    }

    fn framebuffer_texture_layer(
        &mut self,
        _target: GLenum,
        _attachment: GLenum,
        _texture: u32,
        _level: i32,
        _layer: i32,
    ) {
        self.touch();
    }

    fn get_internalformat_iv(
        &mut self,
        _target: GLenum,
        _internalformat: GLenum,
        _pname: GLenum,
        params: &mut [i32],
    ) {
        self.touch();
        if let Some(first) = params.first_mut() {
            *first = self.query_response as i32;
        }
    }

    fn get_internalformat_i64v(
        &mut self,
        _target: GLenum,
        _internalformat: GLenum,
        _pname: GLenum,
        params: &mut [i64],
    ) {
        self.touch();
        if let Some(first) = params.first_mut() {
            *first = self.query_response;
        }
    }

    fn vertex_attrib_l(&mut self, _index: u32, _values: &[f64]) {
        self.touch();
    }

    fn vertex_attrib_lv(&mut self, _index: u32, _values: &[f64]) {
        self.touch();
    }

    fn vertex_attrib_l_pointer(
        &mut self,
        _index: u32,
        _size: i32,
        _ty: GLenum,
        _stride: i32,
        _offset: usize,
    ) {
        self.touch();
    }

    fn get_vertex_attrib_ldv(&mut self, _index: u32, _pname: GLenum, params: &mut [f64; 4]) {
        self.touch();
        *params = [0.0, 0.0, 0.0, 1.0];
    }

    fn gen_vertex_array(&mut self) -> u32 {
        self.name()
    }

    fn bind_vertex_array(&mut self, _array: u32) {
        self.touch();
    }

    fn delete_vertex_array(&mut self, _array: u32) {
        self.touch();
    }

    fn vertex_array_vertex_attrib_l_offset_ext(
        &mut self,
        _vaobj: u32,
        _buffer: u32,
        _index: u32,
        _size: i32,
        _ty: GLenum,
        _stride: i32,
        _offset: isize,
    ) {
        self.touch();
    }
}
