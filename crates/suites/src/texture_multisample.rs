//! `arb_texture_multisample/errors`: error cases added by multisample
//! array textures.

use gl_conform_core::config::{KhrNoError, Skip, TestConfig};
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl;
use gl_conform_core::{CheckRunner, ConformanceTest, Visual};

const TARGET: gl::GLenum = gl::TEXTURE_2D_MULTISAMPLE_ARRAY;

pub struct TextureMultisampleErrors;

impl ConformanceTest for TextureMultisampleErrors {
    fn name(&self) -> &'static str {
        "arb_texture_multisample/errors"
    }

    fn description(&self) -> &'static str {
        "Negative layers and zero samples are rejected with INVALID_VALUE"
    }

    fn config(&self) -> TestConfig {
        TestConfig::new()
            .compat(30)
            .visual(Visual::RGB | Visual::DOUBLE)
            .khr_no_error(KhrNoError::HasErrors)
    }

    fn run(&self, r: &mut CheckRunner<'_>) -> Result<(), Skip> {
        let (draw_binding, read_binding) = r.setup("save framebuffer bindings", |ctx| {
            (
                ctx.get_integer(gl::DRAW_FRAMEBUFFER_BINDING),
                ctx.get_integer(gl::READ_FRAMEBUFFER_BINDING),
            )
        });

        let fbo = r.setup("GenFramebuffers", |ctx| {
            let fbo = ctx.create_framebuffer();
            ctx.bind_framebuffer(gl::FRAMEBUFFER, fbo);
            fbo
        });
        let textures = r.setup("GenTextures", |ctx| [ctx.gen_texture(), ctx.gen_texture()]);

        r.setup("TexImage3DMultisample with 4 samples", |ctx| {
            ctx.bind_texture(TARGET, textures[0]);
            ctx.tex_image_3d_multisample(TARGET, 4, gl::RGBA, 64, 64, 2, true);
        });

        r.expect_error(
            "FramebufferTextureLayer with layer -1",
            ErrorCode::InvalidValue,
            |ctx| ctx.framebuffer_texture_layer(gl::FRAMEBUFFER, gl::COLOR_ATTACHMENT0, textures[0], 0, -1),
        );

        r.setup("BindTexture", |ctx| ctx.bind_texture(TARGET, textures[1]));
        r.expect_error("TexImage3DMultisample with 0 samples", ErrorCode::InvalidValue, |ctx| {
            ctx.tex_image_3d_multisample(TARGET, 0, gl::RGBA, 64, 64, 2, true)
        });

        let ctx = r.gl();
        ctx.bind_texture(TARGET, 0);
        for texture in textures {
            ctx.delete_texture(texture);
        }
        ctx.delete_framebuffer(fbo);
        let name = |binding: i32| u32::try_from(binding).unwrap_or(0);
        ctx.bind_framebuffer(gl::DRAW_FRAMEBUFFER, name(draw_binding));
        ctx.bind_framebuffer(gl::READ_FRAMEBUFFER, name(read_binding));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_conform_core::harness::run_test;
    use gl_conform_core::{GlApi, Status};
    use gl_conform_reference::{Quirk, ReferenceGl, ReferenceProfile};

    #[test]
    fn conformant_context_passes() {
        let mut gl = ReferenceGl::default();
        let result = run_test(&TextureMultisampleErrors, &mut gl);
        assert_eq!(result.result, Status::Pass, "{:?}", result.out);
    }

    #[test]
    fn quirks_are_caught() {
        for quirk in [Quirk::AcceptNegativeLayer, Quirk::AcceptZeroSamples] {
            let mut gl = ReferenceGl::new(ReferenceProfile::conformant().with_quirk(quirk));
            let result = run_test(&TextureMultisampleErrors, &mut gl);
            assert_eq!(result.result, Status::Fail, "{quirk:?}");
        }
    }

    #[test]
    fn window_framebuffer_is_restored() {
        let mut profile = ReferenceProfile::conformant();
        profile.surface.uses_fbo = true;
        let mut gl = ReferenceGl::new(profile);
        let window = gl.get_integer(gl::DRAW_FRAMEBUFFER_BINDING);
        assert_ne!(window, 0);
        run_test(&TextureMultisampleErrors, &mut gl);
        assert_eq!(gl.get_integer(gl::DRAW_FRAMEBUFFER_BINDING), window);
        assert_eq!(gl.get_integer(gl::READ_FRAMEBUFFER_BINDING), window);
        assert_eq!(gl.get_error(), gl::NO_ERROR);
    }

    #[test]
    fn skipped_below_gl_3_0() {
        let mut gl = ReferenceGl::new(ReferenceProfile::with_version(2, 1, gl_conform_core::Profile::Compatibility));
        assert_eq!(run_test(&TextureMultisampleErrors, &mut gl).result, Status::Skip);
    }
}
