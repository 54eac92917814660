//! State queries: `GetIntegerv` and `GetInternalformat*`.

use crate::context::{GlResult, ReferenceGl};
use crate::formats;
use gl_conform_core::api::Profile;
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl::{self, GLenum};

fn as_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl ReferenceGl {
    pub(crate) fn integer(&self, pname: GLenum) -> GlResult<i32> {
        let limits = &self.profile.limits;
        let value = match pname {
            gl::MAX_DRAW_BUFFERS => limits.max_draw_buffers,
            gl::MAX_COLOR_ATTACHMENTS => limits.max_color_attachments,
            gl::MAX_VERTEX_ATTRIBS => limits.max_vertex_attribs,
            gl::MAX_SAMPLES => limits.max_samples,
            gl::MAX_ARRAY_TEXTURE_LAYERS => limits.max_array_texture_layers,
            gl::DRAW_FRAMEBUFFER_BINDING => self.bound_framebuffer(gl::DRAW_FRAMEBUFFER),
            gl::READ_FRAMEBUFFER_BINDING => self.bound_framebuffer(gl::READ_FRAMEBUFFER),
            gl::CONTEXT_PROFILE_MASK => match self.profile.version.profile {
                Profile::Core => gl::CONTEXT_CORE_PROFILE_BIT as u32,
                _ => 0x2,
            },
            _ => return Err(ErrorCode::InvalidEnum),
        };
        Ok(as_int(value))
    }

    /// Every value `GetInternalformat*` would write for this query.
    pub(crate) fn internalformat(&self, target: GLenum, internalformat: GLenum, pname: GLenum) -> GlResult<Vec<i64>> {
        if !formats::QUERY_TARGETS.contains(&target) {
            return Err(ErrorCode::InvalidEnum);
        }
        let pname_ok = if formats::has_query2(&self.profile) {
            formats::is_query2_pname(pname)
        } else {
            matches!(pname, gl::SAMPLES | gl::NUM_SAMPLE_COUNTS)
        };
        if !pname_ok {
            return Err(ErrorCode::InvalidEnum);
        }
        Ok(formats::answer(&self.profile, target, internalformat, pname))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ReferenceProfile;
    use gl_conform_core::api::GlApi;

    #[test]
    fn unknown_integer_pname_is_invalid_enum() {
        let mut gl = ReferenceGl::default();
        assert_eq!(gl.get_integer(gl::RGBA), 0);
        assert_eq!(gl.get_error(), gl::INVALID_ENUM);
    }

    #[test]
    fn profile_mask_reflects_profile() {
        let mut core = ReferenceGl::new(ReferenceProfile::with_version(4, 5, Profile::Core));
        assert_eq!(core.get_integer(gl::CONTEXT_PROFILE_MASK), gl::CONTEXT_CORE_PROFILE_BIT);
        let mut compat = ReferenceGl::default();
        assert_eq!(compat.get_integer(gl::CONTEXT_PROFILE_MASK), 0x2);
    }

    #[test]
    fn framebuffer_bindings_are_queryable() {
        let mut gl = ReferenceGl::default();
        let fb = gl.create_framebuffer();
        gl.bind_framebuffer(gl::DRAW_FRAMEBUFFER, fb);
        assert_eq!(gl.get_integer(gl::DRAW_FRAMEBUFFER_BINDING), fb as i32);
        assert_eq!(gl.get_integer(gl::READ_FRAMEBUFFER_BINDING), 0);
        assert_eq!(gl.get_error(), gl::NO_ERROR);
    }

    #[test]
    fn iv_and_i64v_agree() {
        let mut gl = ReferenceGl::default();
        for &pname in &[gl::IMAGE_TEXEL_SIZE, gl::READ_PIXELS, gl::TEXTURE_IMAGE_FORMAT] {
            let mut a = [-1i32];
            let mut b = [-1i64];
            gl.get_internalformat_iv(gl::TEXTURE_2D, gl::RGBA32F, pname, &mut a);
            gl.get_internalformat_i64v(gl::TEXTURE_2D, gl::RGBA32F, pname, &mut b);
            assert_eq!(gl.get_error(), gl::NO_ERROR);
            assert_eq!(i64::from(a[0]), b[0]);
        }
    }

    #[test]
    fn buffer_size_limits_writes() {
        let mut gl = ReferenceGl::default();
        let mut out = [-1i32; 2];
        gl.get_internalformat_iv(gl::TEXTURE_2D_MULTISAMPLE, gl::RGBA8, gl::SAMPLES, &mut out[..1]);
        assert_eq!(out, [8, -1]);
        let mut none: [i32; 0] = [];
        gl.get_internalformat_iv(gl::TEXTURE_2D, gl::RGBA8, gl::READ_PIXELS, &mut none);
        assert_eq!(gl.get_error(), gl::NO_ERROR);
    }

    #[test]
    fn bad_target_and_pname_are_invalid_enum() {
        let mut gl = ReferenceGl::default();
        let mut out = [0i32];
        gl.get_internalformat_iv(gl::RGBA, gl::RGBA8, gl::READ_PIXELS, &mut out);
        assert_eq!(gl.get_error(), gl::INVALID_ENUM);
        gl.get_internalformat_iv(gl::TEXTURE_2D, gl::RGBA8, gl::FULL_SUPPORT, &mut out);
        assert_eq!(gl.get_error(), gl::INVALID_ENUM);
    }

    #[test]
    fn without_query2_only_sample_pnames_exist() {
        let profile = ReferenceProfile::with_version(4, 2, Profile::Core)
            .without_extension("GL_ARB_internalformat_query2");
        let mut gl = ReferenceGl::new(profile);
        let mut out = [0i32];
        gl.get_internalformat_iv(gl::RENDERBUFFER, gl::RGBA8, gl::NUM_SAMPLE_COUNTS, &mut out);
        assert_eq!(gl.get_error(), gl::NO_ERROR);
        gl.get_internalformat_iv(gl::RENDERBUFFER, gl::RGBA8, gl::READ_PIXELS, &mut out);
        assert_eq!(gl.get_error(), gl::INVALID_ENUM);
    }
}
