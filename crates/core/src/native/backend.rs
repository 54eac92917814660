//! `GlApi` on a live driver through `glow`.
//!
//! `GlowBackend` wraps a `glow::Context` plus the [`EntryPoints`] glow has
//! no wrapper for. The context must stay current on the calling thread for
//! the lifetime of the backend.

use super::entry_points::EntryPoints;
use crate::api::{GlApi, GlVersion, Profile, SurfaceInfo};
use crate::error::ConformError;
use crate::gl::{self, GLenum};
use glow::HasContext;
use std::ffi::c_void;
use std::num::NonZeroU32;

/// Upper bound on the array handed to the driver when a test passes a
/// count larger than its buffer list. Counts beyond this are rejected by
/// every driver before the array is read.
const MAX_PADDED_BUFFERS: usize = 256;

/// Entry points without which no context is usable. glow calls them while
/// it is being built.
const REQUIRED_ENTRY_POINTS: &[&str] = &["glGetString", "glGetIntegerv", "glGetError"];

/// A live GL context.
pub struct GlowBackend {
    gl: glow::Context,
    entries: EntryPoints,
    version: GlVersion,
    surface: SurfaceInfo,
}

impl GlowBackend {
    /// Builds a backend from a GL loader such as `glutin`'s
    /// `get_proc_address`.
    ///
    /// # Safety
    ///
    /// A GL context must be current on this thread, `loader` must return
    /// entry points of that context, and the context must outlive the
    /// backend.
    ///
    /// Returns `ConformError::Backend` when the loader cannot resolve the
    /// basic query entry points or the context reports no GL version.
    #[allow(unsafe_code)]
    pub unsafe fn from_loader<F>(mut loader: F, surface: SurfaceInfo) -> Result<Self, ConformError>
    where
        F: FnMut(&str) -> *const c_void,
    {
        check_required(&mut loader)?;
        let entries = EntryPoints::load(&mut loader);
        let missing = entries.missing();
        if !missing.is_empty() {
            log::warn!("driver lacks {}", missing.join(", "));
        }

        // SAFETY: forwarded from the caller's contract.
        let gl = unsafe { glow::Context::from_loader_function(loader) };
        let version = detect_version(&gl);
        if version.major == 0 {
            return Err(ConformError::Backend(
                "context reports no GL version; is it current?".into(),
            ));
        }
        log::info!("native context: GL {version}");

        Ok(Self {
            gl,
            entries,
            version,
            surface,
        })
    }

    /// Returns the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

fn check_required<F>(loader: &mut F) -> Result<(), ConformError>
where
    F: FnMut(&str) -> *const c_void,
{
    let unresolved: Vec<&str> = REQUIRED_ENTRY_POINTS
        .iter()
        .copied()
        .filter(|name| loader(*name).is_null())
        .collect();
    if unresolved.is_empty() {
        Ok(())
    } else {
        Err(ConformError::Backend(format!(
            "loader did not resolve {}",
            unresolved.join(", ")
        )))
    }
}

#[allow(unsafe_code)]
fn detect_version(gl: &glow::Context) -> GlVersion {
    let v = gl.version();
    let profile = if v.is_embedded {
        Profile::Es
    } else if (v.major, v.minor) >= (3, 2) {
        // SAFETY: plain state query on the current context.
        let mask = unsafe { gl.get_parameter_i32(gl::CONTEXT_PROFILE_MASK) };
        if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
            Profile::Core
        } else {
            Profile::Compatibility
        }
    } else {
        Profile::Compatibility
    };
    GlVersion::new(v.major, v.minor, profile)
}

fn missing(name: &str) {
    log::debug!("{name} unavailable, call skipped");
}

fn framebuffer(name: u32) -> Option<glow::NativeFramebuffer> {
    NonZeroU32::new(name).map(glow::NativeFramebuffer)
}

fn texture(name: u32) -> Option<glow::NativeTexture> {
    NonZeroU32::new(name).map(glow::NativeTexture)
}

fn vertex_array(name: u32) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(name).map(glow::NativeVertexArray)
}

/// `bufs` extended with `NONE` up to `n` entries so the driver never reads
/// past the caller's slice.
fn padded_buffers(n: i32, bufs: &[GLenum]) -> Vec<GLenum> {
    let len = usize::try_from(n).unwrap_or(0).min(MAX_PADDED_BUFFERS);
    let mut padded = bufs.to_vec();
    if padded.len() < len {
        padded.resize(len, gl::NONE);
    }
    padded
}

#[allow(unsafe_code)]
impl GlApi for GlowBackend {
    fn get_error(&mut self) -> GLenum {
        // SAFETY: the context is current (construction contract).
        unsafe { self.gl.get_error() }
    }

    fn version(&self) -> GlVersion {
        self.version
    }

    fn has_extension(&self, name: &str) -> bool {
        self.gl.supported_extensions().contains(name)
    }

    fn surface(&self) -> SurfaceInfo {
        self.surface
    }

    fn get_integer(&mut self, pname: GLenum) -> i32 {
        // SAFETY: single-valued query; glow supplies the out parameter.
        unsafe { self.gl.get_parameter_i32(pname) }
    }

    fn read_buffer(&mut self, src: GLenum) {
        // SAFETY: any enum value is legal input; bad ones raise GL errors.
        unsafe { self.gl.read_buffer(src) }
    }

    fn create_framebuffer(&mut self) -> u32 {
        if let Some(create) = self.entries.create_framebuffers {
            let mut name = 0u32;
            // SAFETY: one name is written to a valid u32.
            unsafe { create(1, &mut name) };
            return name;
        }
        // Without DSA the object only exists once it has been bound.
        // SAFETY: the new name is bound and unbound on the current context.
        unsafe {
            match self.gl.create_framebuffer() {
                Ok(fb) => {
                    self.gl.bind_framebuffer(gl::FRAMEBUFFER, Some(fb));
                    self.gl.bind_framebuffer(gl::FRAMEBUFFER, None);
                    fb.0.get()
                }
                Err(e) => {
                    log::warn!("glGenFramebuffers failed: {e}");
                    0
                }
            }
        }
    }

    fn bind_framebuffer(&mut self, target: GLenum, name: u32) {
        // SAFETY: names come from create_framebuffer or are 0.
        unsafe { self.gl.bind_framebuffer(target, framebuffer(name)) }
    }

    fn delete_framebuffer(&mut self, name: u32) {
        if let Some(fb) = framebuffer(name) {
            // SAFETY: deleting an unknown name is ignored by GL.
            unsafe { self.gl.delete_framebuffer(fb) }
        }
    }

    fn named_framebuffer_draw_buffers(&mut self, framebuffer: u32, n: i32, bufs: &[GLenum]) {
        let Some(draw_buffers) = self.entries.named_framebuffer_draw_buffers else {
            return missing("glNamedFramebufferDrawBuffers");
        };
        let bufs = padded_buffers(n, bufs);
        // SAFETY: `bufs` holds at least `min(n, MAX_PADDED_BUFFERS)` entries.
        unsafe { draw_buffers(framebuffer, n, bufs.as_ptr()) }
    }

    fn gen_texture(&mut self) -> u32 {
        // SAFETY: plain name allocation.
        match unsafe { self.gl.create_texture() } {
            Ok(tex) => tex.0.get(),
            Err(e) => {
                log::warn!("glGenTextures failed: {e}");
                0
            }
        }
    }

    fn bind_texture(&mut self, target: GLenum, name: u32) {
        // SAFETY: names come from gen_texture or are 0.
        unsafe { self.gl.bind_texture(target, texture(name)) }
    }

    fn delete_texture(&mut self, name: u32) {
        if let Some(tex) = texture(name) {
            // SAFETY: deleting an unknown name is ignored by GL.
            unsafe { self.gl.delete_texture(tex) }
        }
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
        let Some(tex_image) = self.entries.tex_image_3d_multisample else {
            return missing("glTexImage3DMultisample");
        };
        // SAFETY: scalar arguments only.
        unsafe {
            tex_image(
                target,
                samples,
                internalformat,
                width,
                height,
                depth,
                u8::from(fixed_sample_locations),
            )
        }
    }

    fn framebuffer_texture_layer(
        &mut self,
        target: GLenum,
        attachment: GLenum,
        name: u32,
        level: i32,
        layer: i32,
    ) {
        // SAFETY: scalar arguments; invalid ones raise GL errors.
        unsafe {
            self.gl
                .framebuffer_texture_layer(target, attachment, texture(name), level, layer)
        }
    }

    fn get_internalformat_iv(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [i32],
    ) {
        let Some(query) = self.entries.get_internalformativ else {
            return missing("glGetInternalformativ");
        };
        let len = i32::try_from(params.len()).unwrap_or(i32::MAX);
        // SAFETY: bufSize is the length of `params`.
        unsafe { query(target, internalformat, pname, len, params.as_mut_ptr()) }
    }

    fn get_internalformat_i64v(
        &mut self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [i64],
    ) {
        let Some(query) = self.entries.get_internalformati64v else {
            return missing("glGetInternalformati64v");
        };
        let len = i32::try_from(params.len()).unwrap_or(i32::MAX);
        // SAFETY: bufSize is the length of `params`.
        unsafe { query(target, internalformat, pname, len, params.as_mut_ptr()) }
    }

    fn vertex_attrib_l(&mut self, index: u32, values: &[f64]) {
        let e = &self.entries;
        // SAFETY: scalar arguments only.
        unsafe {
            match *values {
                [x] => match e.vertex_attrib_l1d {
                    Some(f) => f(index, x),
                    None => missing("glVertexAttribL1d"),
                },
                [x, y] => match e.vertex_attrib_l2d {
                    Some(f) => f(index, x, y),
                    None => missing("glVertexAttribL2d"),
                },
                [x, y, z] => match e.vertex_attrib_l3d {
                    Some(f) => f(index, x, y, z),
                    None => missing("glVertexAttribL3d"),
                },
                [x, y, z, w] => match e.vertex_attrib_l4d {
                    Some(f) => f(index, x, y, z, w),
                    None => missing("glVertexAttribL4d"),
                },
                _ => log::warn!("glVertexAttribL*d takes 1 to 4 values, got {}", values.len()),
            }
        }
    }

    fn vertex_attrib_lv(&mut self, index: u32, values: &[f64]) {
        let slot = match values.len() {
            n @ 1..=4 => n - 1,
            n => return log::warn!("glVertexAttribL*dv takes 1 to 4 values, got {n}"),
        };
        let Some(f) = self.entries.vertex_attrib_ldv[slot] else {
            return missing("glVertexAttribL*dv");
        };
        // SAFETY: the entry point for `values.len()` components reads exactly
        // that many doubles.
        unsafe { f(index, values.as_ptr()) }
    }

    fn vertex_attrib_l_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: usize,
    ) {
        let Some(f) = self.entries.vertex_attrib_l_pointer else {
            return missing("glVertexAttribLPointer");
        };
        // SAFETY: the pointer is a buffer offset and is never dereferenced
        // by the call itself.
        unsafe { f(index, size, ty, stride, offset as *const c_void) }
    }

    fn get_vertex_attrib_ldv(&mut self, index: u32, pname: GLenum, params: &mut [f64; 4]) {
        let Some(f) = self.entries.get_vertex_attrib_ldv else {
            return missing("glGetVertexAttribLdv");
        };
        // SAFETY: four doubles is the largest answer any pname returns.
        unsafe { f(index, pname, params.as_mut_ptr()) }
    }

    fn gen_vertex_array(&mut self) -> u32 {
        // SAFETY: plain name allocation.
        match unsafe { self.gl.create_vertex_array() } {
            Ok(vao) => vao.0.get(),
            Err(e) => {
                log::warn!("glGenVertexArrays failed: {e}");
                0
            }
        }
    }

    fn bind_vertex_array(&mut self, name: u32) {
        // SAFETY: names come from gen_vertex_array or are 0.
        unsafe { self.gl.bind_vertex_array(vertex_array(name)) }
    }

    fn delete_vertex_array(&mut self, name: u32) {
        if let Some(vao) = vertex_array(name) {
            // SAFETY: deleting an unknown name is ignored by GL.
            unsafe { self.gl.delete_vertex_array(vao) }
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
        let Some(f) = self.entries.vertex_array_vertex_attrib_l_offset_ext else {
            return missing("glVertexArrayVertexAttribLOffsetEXT");
        };
        // SAFETY: scalar arguments only.
        unsafe { f(vaobj, buffer, index, size, ty, stride, offset) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_fills_with_none() {
        let bufs = padded_buffers(4, &[gl::BACK]);
        assert_eq!(bufs, vec![gl::BACK, gl::NONE, gl::NONE, gl::NONE]);
    }

    #[test]
    fn padding_keeps_longer_lists_and_ignores_negative_counts() {
        let list = [gl::COLOR_ATTACHMENT0, gl::NONE];
        assert_eq!(padded_buffers(1, &list), list.to_vec());
        assert_eq!(padded_buffers(-1, &list), list.to_vec());
    }

    #[test]
    fn padding_is_capped() {
        assert_eq!(padded_buffers(i32::MAX, &[]).len(), MAX_PADDED_BUFFERS);
    }

    #[test]
    fn loader_without_query_entry_points_is_a_backend_error() {
        let mut null_loader = |_: &str| std::ptr::null::<c_void>();
        let err = check_required(&mut null_loader).unwrap_err();
        assert!(matches!(err, ConformError::Backend(_)));
        assert!(err.to_string().contains("glGetString"), "{err}");
    }

    #[test]
    fn loader_resolving_query_entry_points_passes() {
        static MARKER: u8 = 0;
        let mut loader = |_: &str| (&MARKER as *const u8).cast::<c_void>();
        assert!(check_required(&mut loader).is_ok());
    }

    #[test]
    fn zero_names_map_to_none() {
        assert!(framebuffer(0).is_none());
        assert!(texture(0).is_none());
        assert_eq!(vertex_array(7).map(|v| v.0.get()), Some(7));
    }

    #[test]
    #[ignore = "requires GL context"]
    fn backend_reports_context_version() {
        // Would test: GlowBackend::from_loader on a current 4.5 core context
        // reports Profile::Core and has_extension("GL_ARB_internalformat_query2").
    }
}
