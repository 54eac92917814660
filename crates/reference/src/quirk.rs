//! Deliberate deviations from the GL spec.
//!
//! A conformant profile has no quirks. Each quirk breaks exactly one rule so
//! the shipped tests can be shown to notice.

use gl_conform_core::gl::GLenum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quirk {
    /// `ReadBuffer(FRONT)` raises INVALID_ENUM.
    RejectFrontReadBuffer,
    /// `NamedFramebufferDrawBuffers` treats unknown names as the default
    /// framebuffer.
    AcceptUnknownFramebuffer,
    /// The `n > MAX_DRAW_BUFFERS` check is missing.
    IgnoreDrawBuffersLimit,
    /// Enum errors in the draw buffer list are reported as INVALID_VALUE.
    DrawBuffersEnumAsValue,
    /// BACK is accepted in a list of more than one buffer.
    AcceptBackWithOthers,
    /// A buffer may appear more than once in the draw buffer list.
    AcceptDuplicateDrawBuffers,
    /// `TexImage3DMultisample` accepts zero samples.
    AcceptZeroSamples,
    /// `FramebufferTextureLayer` accepts a negative layer.
    AcceptNegativeLayer,
    /// Unsupported internal format queries answer 1 instead of 0.
    NonzeroUnsupportedAnswer,
    /// The given query2 pname answers a value outside its legal set.
    InadmissibleAnswer(GLenum),
    /// The 64-bit attribute entry points accept index 0.
    AcceptZeroAttribIndex,
}

/// Value returned by [`Quirk::InadmissibleAnswer`]. Not a legal answer for
/// any pname.
pub const INADMISSIBLE_VALUE: i64 = 0x7FFF_0001;

impl Quirk {
    /// Every quirk with a default parameter, for listings and tests.
    pub fn catalogue() -> Vec<Quirk> {
        vec![
            Quirk::RejectFrontReadBuffer,
            Quirk::AcceptUnknownFramebuffer,
            Quirk::IgnoreDrawBuffersLimit,
            Quirk::DrawBuffersEnumAsValue,
            Quirk::AcceptBackWithOthers,
            Quirk::AcceptDuplicateDrawBuffers,
            Quirk::AcceptZeroSamples,
            Quirk::AcceptNegativeLayer,
            Quirk::NonzeroUnsupportedAnswer,
            Quirk::InadmissibleAnswer(gl_conform_core::gl::FRAMEBUFFER_BLEND),
            Quirk::AcceptZeroAttribIndex,
        ]
    }
}
