//! The external GL capability the checks are run against.
//!
//! [`GlApi`] is the narrow slice of the GL entry points the shipped tests
//! exercise. It is object safe so the harness can hold `&mut dyn GlApi`
//! regardless of whether a live driver or the software reference sits
//! behind it. Methods mirror the C entry points one to one, including the
//! invalid arguments the tests feed them on purpose; none of them report
//! errors directly. Errors only surface through [`GlApi::get_error`], which
//! [`crate::observe`] turns into an explicit per-call result.

use crate::gl::GLenum;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Context flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Core,
    Compatibility,
    Es,
}

/// Version and profile of the current context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
    pub profile: Profile,
}

impl GlVersion {
    pub fn new(major: u32, minor: u32, profile: Profile) -> Self {
        Self {
            major,
            minor,
            profile,
        }
    }

    /// Version encoded as `10 * major + minor`, e.g. `45` for 4.5.
    pub fn as_number(&self) -> u32 {
        self.major * 10 + self.minor
    }

    /// Whether this version is `major.minor` or newer, ignoring profile.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = match self.profile {
            Profile::Core => "core",
            Profile::Compatibility => "compat",
            Profile::Es => "es",
        };
        write!(f, "{}.{} {profile}", self.major, self.minor)
    }
}

bitflags! {
    /// Window system visual attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Visual: u32 {
        const RGB = 1 << 0;
        const ALPHA = 1 << 1;
        const RGBA = Self::RGB.bits() | Self::ALPHA.bits();
        const DEPTH = 1 << 2;
        const STENCIL = 1 << 3;
        const DOUBLE = 1 << 4;
        const ACCUM = 1 << 5;
        const STEREO = 1 << 6;
    }
}

/// Facts about the drawable the context renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceInfo {
    pub visual: Visual,
    /// The window system framebuffer is emulated with a framebuffer object,
    /// so `COLOR_ATTACHMENT0` replaces `FRONT`/`BACK`.
    pub uses_fbo: bool,
    /// The context was created with `KHR_no_error`.
    pub no_error: bool,
}

impl Default for SurfaceInfo {
    fn default() -> Self {
        Self {
            visual: Visual::RGBA | Visual::DOUBLE,
            uses_fbo: false,
            no_error: false,
        }
    }
}

/// GL entry points used by the conformance tests.
///
/// Names are the GL names in snake case without the `gl` prefix. Object
/// names are raw `u32` values because the tests pass names that were never
/// generated. Where GL takes a count and a pointer, the count is passed
/// separately from the slice; implementations must not read past the end of
/// the slice.
pub trait GlApi {
    /// `glGetError`: returns and clears one pending error flag.
    fn get_error(&mut self) -> GLenum;

    fn version(&self) -> GlVersion;

    /// Whether the extension string list contains `name` (e.g.
    /// `"GL_ARB_internalformat_query2"`).
    fn has_extension(&self, name: &str) -> bool;

    fn surface(&self) -> SurfaceInfo;

    /// `glGetIntegerv` for a single-valued pname.
    fn get_integer(&mut self, pname: GLenum) -> i32;

    fn read_buffer(&mut self, src: GLenum);

    /// `glCreateFramebuffers` for one name.
    fn create_framebuffer(&mut self) -> u32;

    fn bind_framebuffer(&mut self, target: GLenum, framebuffer: u32);

    fn delete_framebuffer(&mut self, framebuffer: u32);

    fn named_framebuffer_draw_buffers(&mut self, framebuffer: u32, n: i32, bufs: &[GLenum]);

    /// `glGenTextures` for one name.
    fn gen_texture(&mut self) -> u32;

    fn bind_texture(&mut self, target: GLenum, texture: u32);

    fn delete_texture(&mut self, texture: u32);

    #[allow(clippy::too_many_arguments)]
    fn tex_image_3d_multisample(
        &mut self,
        target: GLenum,
        samples: i32,
        internalformat: GLenum,
        width: i32,
        height: i32,
        depth: i32,
        fixed_sample_locations: bool,
    );

    fn framebuffer_texture_layer(
        &mut self,
        target: GLenum,
        attachment: GLenum,
        texture: u32,
        level: i32,
        layer: i32,
    );

    /// `glGetInternalformativ` with `bufSize = params.len()`.
    fn get_internalformat_iv(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [i32],
    );

    /// `glGetInternalformati64v` with `bufSize = params.len()`.
    fn get_internalformat_i64v(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [i64],
    );

    /// `glVertexAttribL{n}d` where `n = values.len()` (1 to 4).
    fn vertex_attrib_l(&mut self, index: u32, values: &[f64]);

    /// `glVertexAttribL{n}dv` where `n = values.len()` (1 to 4).
    fn vertex_attrib_lv(&mut self, index: u32, values: &[f64]);

    /// `glVertexAttribLPointer` with a buffer offset instead of a client pointer.
    fn vertex_attrib_l_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: usize,
    );

    fn get_vertex_attrib_ldv(&mut self, index: u32, pname: GLenum, params: &mut [f64; 4]);

    /// `glGenVertexArrays` for one name.
    fn gen_vertex_array(&mut self) -> u32;

    fn bind_vertex_array(&mut self, array: u32);

    fn delete_vertex_array(&mut self, array: u32);

    /// `glVertexArrayVertexAttribLOffsetEXT` from `EXT_direct_state_access`.
    #[allow(clippy::too_many_arguments)]
    fn vertex_array_vertex_attrib_l_offset_ext(
        &mut self,
        vaobj: u32,
        buffer: u32,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: isize,
    );
}
