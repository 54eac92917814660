//! `gl-4.5/named-framebuffer-draw-buffers-errors`.
//!
//! Every error rule of `NamedFramebufferDrawBuffers` from section 17.4.1
//! ("Selecting Buffers for Writing") of the GL 4.5 core spec. For 4.5 the
//! rules are the same as for `DrawBuffers`. Each rule is one subtest, named
//! by the GL sentence it checks.

use gl_conform_core::config::{KhrNoError, Skip, TestConfig};
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl::{self, GLenum};
use gl_conform_core::{CheckRunner, ConformanceTest, Visual};

/// Table 17.6: buffers of the default framebuffer.
const TABLE_17_6: &[GLenum] = &[
    gl::NONE,
    gl::FRONT_LEFT,
    gl::FRONT_RIGHT,
    gl::BACK_LEFT,
    gl::BACK_RIGHT,
];

/// Table 17.6 plus BACK, which 4.5 allows on the default framebuffer.
const TABLE_17_6_AND_BACK: &[GLenum] = &[
    gl::NONE,
    gl::FRONT_LEFT,
    gl::FRONT_RIGHT,
    gl::BACK_LEFT,
    gl::BACK_RIGHT,
    gl::BACK,
];

/// Constants that may name several buffers (table 17.4).
const MULTIPLE_BUFFERS: &[GLenum] = &[gl::FRONT, gl::LEFT, gl::RIGHT, gl::FRONT_AND_BACK];

/// Buffers in table 17.6 are only required to work when allocated.
const NO_ERROR_OR_INVALID_OPERATION: &[ErrorCode] = &[ErrorCode::NoError, ErrorCode::InvalidOperation];

/// A framebuffer name no test creates.
const UNUSED_FRAMEBUFFER: u32 = 0x7FFF_FFF0;

/// Counts above MAX_DRAW_BUFFERS that must be rejected.
const EXCESS_COUNTS: std::ops::RangeInclusive<i32> = 1..=4;

const DEFAULT_FRAMEBUFFER: u32 = 0;

pub struct NamedFramebufferDrawBuffersErrors;

fn on_default(buf: GLenum) -> String {
    format!("{} on the default framebuffer", gl::enum_label(buf))
}

fn on_object(buf: GLenum) -> String {
    format!("{} on a framebuffer object", gl::enum_label(buf))
}

impl ConformanceTest for NamedFramebufferDrawBuffersErrors {
    fn name(&self) -> &'static str {
        "gl-4.5/named-framebuffer-draw-buffers-errors"
    }

    fn description(&self) -> &'static str {
        "NamedFramebufferDrawBuffers raises the errors listed in section 17.4.1"
    }

    fn config(&self) -> TestConfig {
        TestConfig::new()
            .core(45)
            .visual(Visual::RGBA | Visual::DOUBLE)
            .khr_no_error(KhrNoError::HasErrors)
    }

    fn run(&self, r: &mut CheckRunner<'_>) -> Result<(), Skip> {
        let bufs = [gl::BACK_LEFT, gl::BACK];
        let fbo = r.setup("CreateFramebuffers", |ctx| ctx.create_framebuffer());

        r.subtest(
            "INVALID_OPERATION if framebuffer is not zero or the name of an existing framebuffer",
            |r| {
                r.expect_error("unknown framebuffer name", ErrorCode::InvalidOperation, |ctx| {
                    ctx.named_framebuffer_draw_buffers(UNUSED_FRAMEBUFFER, 2, &bufs)
                });
                // A list the default framebuffer accepts, so the name check
                // is the only rule that can fire.
                r.expect_error("unknown framebuffer name with {NONE}", ErrorCode::InvalidOperation, |ctx| {
                    ctx.named_framebuffer_draw_buffers(UNUSED_FRAMEBUFFER, 1, &[gl::NONE])
                });
            },
        );

        let max_draw_buffers = r.setup("GetIntegerv(MAX_DRAW_BUFFERS)", |ctx| {
            ctx.get_integer(gl::MAX_DRAW_BUFFERS)
        });
        r.subtest(
            "INVALID_VALUE error is generated if n is negative, or greater than the value of MAX_DRAW_BUFFERS.",
            |r| {
                r.expect_error("n = -1", ErrorCode::InvalidValue, |ctx| {
                    ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, -1, &bufs)
                });
                for excess in EXCESS_COUNTS {
                    let n = max_draw_buffers.saturating_add(excess);
                    r.expect_error(
                        format!("n = MAX_DRAW_BUFFERS + {excess}"),
                        ErrorCode::InvalidValue,
                        |ctx| ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, n, &bufs),
                    );
                }
            },
        );

        r.subtest(
            "INVALID_ENUM error is generated if any value in bufs is not one of the values in tables 17.5 or 17.6.",
            |r| {
                r.expect_error(on_default(gl::RED), ErrorCode::InvalidEnum, |ctx| {
                    ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, 1, &[gl::RED])
                });
                r.expect_error(on_object(gl::RED), ErrorCode::InvalidEnum, |ctx| {
                    ctx.named_framebuffer_draw_buffers(fbo, 1, &[gl::RED])
                });
            },
        );

        r.subtest(
            "If the default framebuffer is affected, then each of the constants must be one of the \
             values listed in table 17.6 or the special value BACK. INVALID_OPERATION error is \
             generated if the default framebuffer is affected and any value in bufs is a constant \
             (other than NONE or BACK ) that does not indicate one of the color buffers allocated \
             to the default framebuffer.",
            |r| {
                for &buf in TABLE_17_6_AND_BACK {
                    r.expect_any_error(on_default(buf), NO_ERROR_OR_INVALID_OPERATION, |ctx| {
                        ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, 1, &[buf])
                    });
                }
                // Table 17.5 values are never allocated to the default framebuffer.
                r.expect_error(
                    on_default(gl::COLOR_ATTACHMENT0),
                    ErrorCode::InvalidOperation,
                    |ctx| ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, 1, &[gl::COLOR_ATTACHMENT0]),
                );
            },
        );

        r.subtest(
            "(default framebuffer) An INVALID_OPERATION error is generated if any value in bufs is \
             BACK, and n is not one.",
            |r| {
                r.expect_error("{BACK_LEFT, BACK} with n = 2", ErrorCode::InvalidOperation, |ctx| {
                    ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, 2, &bufs)
                });
            },
        );

        let max_attachments = r.setup("GetIntegerv(MAX_COLOR_ATTACHMENTS)", |ctx| {
            ctx.get_integer(gl::MAX_COLOR_ATTACHMENTS)
        });
        let max_attachments = u32::try_from(max_attachments)
            .unwrap_or(0)
            .min(gl::MAX_COLOR_ATTACHMENT_ENUMS);

        r.subtest(
            "If a framebuffer object is affected, then each of constants must be one of the values \
             listed in table 17.5.",
            |r| {
                for i in 0..max_attachments {
                    let buf = gl::color_attachment(i);
                    r.expect_error(on_object(buf), ErrorCode::NoError, |ctx| {
                        ctx.named_framebuffer_draw_buffers(fbo, 1, &[buf])
                    });
                }
            },
        );

        r.subtest(
            "INVALID_OPERATION error is generated if a framebuffer object is affected and any value \
             in bufs is a constant from table 17.6, or COLOR_ATTACHMENTm where m is greater than or \
             equal to the value of MAX_COLOR_ATTACHMENTS.",
            |r| {
                // NONE is a legal entry for framebuffer objects.
                for &buf in &TABLE_17_6[1..] {
                    r.expect_error(on_object(buf), ErrorCode::InvalidOperation, |ctx| {
                        ctx.named_framebuffer_draw_buffers(fbo, 1, &[buf])
                    });
                }
                let past_last = gl::COLOR_ATTACHMENT0 + max_attachments;
                r.expect_error(
                    format!("COLOR_ATTACHMENT{max_attachments} on a framebuffer object"),
                    ErrorCode::InvalidOperation,
                    |ctx| ctx.named_framebuffer_draw_buffers(fbo, 1, &[past_last]),
                );
            },
        );

        r.subtest(
            "INVALID_OPERATION error is generated if a buffer other than NONE is specified more \
             than once in the array pointed to by bufs.",
            |r| {
                for buf in [gl::FRONT_LEFT, gl::COLOR_ATTACHMENT0] {
                    r.expect_error(
                        format!("{{{0}, {0}}} on a framebuffer object", gl::enum_label(buf)),
                        ErrorCode::InvalidOperation,
                        |ctx| ctx.named_framebuffer_draw_buffers(fbo, 2, &[buf, buf]),
                    );
                }
            },
        );

        r.subtest(
            "INVALID_ENUM error is generated if any value in bufs is FRONT, LEFT, RIGHT, or FRONT_AND_BACK ",
            |r| {
                for &buf in MULTIPLE_BUFFERS {
                    r.expect_error(on_default(buf), ErrorCode::InvalidEnum, |ctx| {
                        ctx.named_framebuffer_draw_buffers(DEFAULT_FRAMEBUFFER, 1, &[buf])
                    });
                    r.expect_error(on_object(buf), ErrorCode::InvalidEnum, |ctx| {
                        ctx.named_framebuffer_draw_buffers(fbo, 1, &[buf])
                    });
                }
            },
        );

        r.gl().delete_framebuffer(fbo);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_conform_core::harness::run_test;
    use gl_conform_core::Status;
    use gl_conform_reference::{Limits, Quirk, ReferenceGl, ReferenceProfile};

    fn run(profile: ReferenceProfile) -> gl_conform_core::TestResult {
        let mut gl = ReferenceGl::new(profile);
        run_test(&NamedFramebufferDrawBuffersErrors, &mut gl)
    }

    #[test]
    fn conformant_context_passes_every_rule() {
        let result = run(ReferenceProfile::conformant());
        assert_eq!(result.result, Status::Pass, "{:?}", result.out);
        assert_eq!(result.subtests.len(), 9);
        assert!(result.subtests.statuses().all(|s| s == Status::Pass));
    }

    #[test]
    fn fewer_color_attachments_still_pass() {
        let mut profile = ReferenceProfile::conformant();
        profile.limits = Limits {
            max_color_attachments: 4,
            ..Limits::default()
        };
        assert_eq!(run(profile).result, Status::Pass);
    }

    #[test]
    fn each_quirk_fails_its_own_subtest() {
        let cases = [
            (Quirk::AcceptUnknownFramebuffer, "not zero or the name of an existing"),
            (Quirk::IgnoreDrawBuffersLimit, "n is negative"),
            (Quirk::DrawBuffersEnumAsValue, "tables 17.5 or 17.6"),
            (Quirk::AcceptBackWithOthers, "and n is not one"),
            (Quirk::AcceptDuplicateDrawBuffers, "more than once"),
        ];
        for (quirk, rule) in cases {
            let result = run(ReferenceProfile::conformant().with_quirk(quirk));
            assert_eq!(result.result, Status::Fail, "{quirk:?}");
            let failed: Vec<&str> = result
                .subtests
                .iter()
                .filter(|(_, s)| *s == Status::Fail)
                .map(|(name, _)| name)
                .collect();
            assert!(failed.iter().any(|n| n.contains(rule)), "{quirk:?}: {failed:?}");
        }
    }

    #[test]
    fn excess_counts_are_all_reported() {
        let result = run(ReferenceProfile::conformant().with_quirk(Quirk::IgnoreDrawBuffersLimit));
        for excess in EXCESS_COUNTS {
            let label = format!("n = MAX_DRAW_BUFFERS + {excess}");
            assert!(result.out.iter().any(|l| l.contains(&label)), "{label}");
        }
    }

    #[test]
    fn skipped_on_old_context() {
        use gl_conform_core::Profile;
        let result = run(ReferenceProfile::with_version(4, 1, Profile::Core));
        assert_eq!(result.result, Status::Skip);
    }
}
