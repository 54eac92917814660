//! `arb_internalformat_query2/generic-pname-checks`.
//!
//! Pnames whose only requirements are that an unsupported resource answers
//! zero and a supported one answers a value from a fixed set. Every pname is
//! queried for every (target, internalformat) pair through both
//! `GetInternalformativ` and `GetInternalformati64v`.

use gl_conform_core::config::{Skip, TestConfig};
use gl_conform_core::expect::Expectation;
use gl_conform_core::gl::{self, GLenum};
use gl_conform_core::{CheckRunner, ConformanceTest, GlApi, Profile, Visual};

/// Targets `GetInternalformat*` accepts.
pub const VALID_TARGETS: &[GLenum] = &[
    gl::TEXTURE_1D,
    gl::TEXTURE_1D_ARRAY,
    gl::TEXTURE_2D,
    gl::TEXTURE_2D_ARRAY,
    gl::TEXTURE_3D,
    gl::TEXTURE_CUBE_MAP,
    gl::TEXTURE_CUBE_MAP_ARRAY,
    gl::TEXTURE_RECTANGLE,
    gl::TEXTURE_BUFFER,
    gl::RENDERBUFFER,
    gl::TEXTURE_2D_MULTISAMPLE,
    gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
];

/// Internal formats every pname is asked about.
pub const VALID_INTERNALFORMATS: &[GLenum] = &[
    gl::RED,
    gl::RG,
    gl::RGB,
    gl::RGBA,
    gl::DEPTH_COMPONENT,
    gl::DEPTH_STENCIL,
    gl::R8,
    gl::RG8,
    gl::RGB8,
    gl::RGBA8,
    gl::RGB10_A2,
    gl::SRGB8_ALPHA8,
    gl::R16F,
    gl::RG16F,
    gl::RGB16F,
    gl::RGBA16F,
    gl::R32F,
    gl::RG32F,
    gl::RGB32F,
    gl::RGBA32F,
    gl::R11F_G11F_B10F,
    gl::RGB9_E5,
    gl::R8I,
    gl::R8UI,
    gl::R32I,
    gl::R32UI,
    gl::RGBA8I,
    gl::RGBA8UI,
    gl::RGBA16I,
    gl::RGBA16UI,
    gl::RGBA32I,
    gl::RGBA32UI,
    gl::DEPTH_COMPONENT16,
    gl::DEPTH_COMPONENT24,
    gl::DEPTH_COMPONENT32F,
    gl::DEPTH24_STENCIL8,
    gl::STENCIL_INDEX8,
];

const PNAMES_COMMON_OUTCOME: &[GLenum] = &[
    gl::FRAMEBUFFER_RENDERABLE,
    gl::FRAMEBUFFER_RENDERABLE_LAYERED,
    gl::FRAMEBUFFER_BLEND,
    gl::READ_PIXELS,
    gl::MANUAL_GENERATE_MIPMAP,
    gl::AUTO_GENERATE_MIPMAP,
    gl::SRGB_READ,
    gl::SRGB_WRITE,
    gl::SRGB_DECODE_ARB,
    gl::VERTEX_TEXTURE,
    gl::TESS_CONTROL_TEXTURE,
    gl::TESS_EVALUATION_TEXTURE,
    gl::GEOMETRY_TEXTURE,
    gl::FRAGMENT_TEXTURE,
    gl::COMPUTE_TEXTURE,
    gl::TEXTURE_SHADOW,
    gl::TEXTURE_GATHER,
    gl::TEXTURE_GATHER_SHADOW,
    gl::SHADER_IMAGE_LOAD,
    gl::SHADER_IMAGE_STORE,
    gl::SHADER_IMAGE_ATOMIC,
    gl::SIMULTANEOUS_TEXTURE_AND_DEPTH_TEST,
    gl::SIMULTANEOUS_TEXTURE_AND_STENCIL_TEST,
    gl::SIMULTANEOUS_TEXTURE_AND_DEPTH_WRITE,
    gl::SIMULTANEOUS_TEXTURE_AND_STENCIL_WRITE,
    gl::CLEAR_BUFFER,
    gl::TEXTURE_VIEW,
];

const POSSIBLE_VALUES_COMMON: &[i64] = &[
    gl::NONE as i64,
    gl::CAVEAT_SUPPORT as i64,
    gl::FULL_SUPPORT as i64,
];

const PNAMES_TRUE_FALSE: &[GLenum] = &[
    gl::COLOR_COMPONENTS,
    gl::DEPTH_COMPONENTS,
    gl::STENCIL_COMPONENTS,
    gl::COLOR_RENDERABLE,
    gl::DEPTH_RENDERABLE,
    gl::STENCIL_RENDERABLE,
    gl::TEXTURE_COMPRESSED,
];

const POSSIBLE_VALUES_TRUE_FALSE: &[i64] = &[gl::TRUE as i64, gl::FALSE as i64];

/// Table 3.22 texel sizes, plus 0 for unsupported.
const POSSIBLE_VALUES_IMAGE_TEXEL_SIZE: &[i64] = &[0, 8, 16, 32, 64, 128];

const POSSIBLE_VALUES_IMAGE_COMPATIBILITY_CLASS: &[i64] = &[
    gl::NONE as i64,
    gl::IMAGE_CLASS_4_X_32 as i64,
    gl::IMAGE_CLASS_2_X_32 as i64,
    gl::IMAGE_CLASS_1_X_32 as i64,
    gl::IMAGE_CLASS_4_X_16 as i64,
    gl::IMAGE_CLASS_2_X_16 as i64,
    gl::IMAGE_CLASS_1_X_16 as i64,
    gl::IMAGE_CLASS_4_X_8 as i64,
    gl::IMAGE_CLASS_2_X_8 as i64,
    gl::IMAGE_CLASS_1_X_8 as i64,
    gl::IMAGE_CLASS_11_11_10 as i64,
    gl::IMAGE_CLASS_10_10_10_2 as i64,
];

const POSSIBLE_VALUES_IMAGE_PIXEL_FORMAT: &[i64] = &[
    gl::NONE as i64,
    gl::RG as i64,
    gl::RGB as i64,
    gl::RGBA as i64,
    gl::RED as i64,
    gl::RGBA_INTEGER as i64,
    gl::RG_INTEGER as i64,
    gl::RED_INTEGER as i64,
];

const POSSIBLE_VALUES_IMAGE_PIXEL_TYPE: &[i64] = &[
    gl::NONE as i64,
    gl::FLOAT as i64,
    gl::HALF_FLOAT as i64,
    gl::UNSIGNED_INT_10F_11F_11F_REV as i64,
    gl::UNSIGNED_INT as i64,
    gl::UNSIGNED_SHORT as i64,
    gl::UNSIGNED_INT_2_10_10_10_REV as i64,
    gl::UNSIGNED_BYTE as i64,
    gl::INT as i64,
    gl::SHORT as i64,
    gl::BYTE as i64,
];

/// Table 3.3 minus STENCIL_INDEX, plus NONE for unsupported.
const POSSIBLE_VALUES_TEXTURE_IMAGE_FORMAT: &[i64] = &[
    gl::DEPTH_COMPONENT as i64,
    gl::DEPTH_STENCIL as i64,
    gl::RED as i64,
    gl::GREEN as i64,
    gl::BLUE as i64,
    gl::RG as i64,
    gl::RGB as i64,
    gl::RGBA as i64,
    gl::BGR as i64,
    gl::BGRA as i64,
    gl::RED_INTEGER as i64,
    gl::GREEN_INTEGER as i64,
    gl::BLUE_INTEGER as i64,
    gl::RG_INTEGER as i64,
    gl::RGB_INTEGER as i64,
    gl::RGBA_INTEGER as i64,
    gl::BGR_INTEGER as i64,
    gl::BGRA_INTEGER as i64,
    gl::NONE as i64,
];

/// Pnames sharing one admissible set.
struct PnameGroup {
    pnames: &'static [GLenum],
    admissible: Expectation,
}

#[rustfmt::skip]
const PNAME_GROUPS: &[PnameGroup] = &[
    PnameGroup { pnames: &[gl::INTERNALFORMAT_PREFERRED], admissible: Expectation::Any },
    PnameGroup { pnames: PNAMES_COMMON_OUTCOME, admissible: Expectation::OneOf(POSSIBLE_VALUES_COMMON) },
    PnameGroup { pnames: &[gl::IMAGE_TEXEL_SIZE], admissible: Expectation::OneOf(POSSIBLE_VALUES_IMAGE_TEXEL_SIZE) },
    PnameGroup {
        pnames: &[gl::IMAGE_COMPATIBILITY_CLASS],
        admissible: Expectation::OneOf(POSSIBLE_VALUES_IMAGE_COMPATIBILITY_CLASS),
    },
    PnameGroup { pnames: &[gl::IMAGE_PIXEL_FORMAT], admissible: Expectation::OneOf(POSSIBLE_VALUES_IMAGE_PIXEL_FORMAT) },
    PnameGroup { pnames: &[gl::IMAGE_PIXEL_TYPE], admissible: Expectation::OneOf(POSSIBLE_VALUES_IMAGE_PIXEL_TYPE) },
    PnameGroup { pnames: PNAMES_TRUE_FALSE, admissible: Expectation::OneOf(POSSIBLE_VALUES_TRUE_FALSE) },
    PnameGroup {
        pnames: &[gl::TEXTURE_IMAGE_FORMAT],
        admissible: Expectation::OneOf(POSSIBLE_VALUES_TEXTURE_IMAGE_FORMAT),
    },
];

/// Something a target or pname needs before the query can answer for it.
struct Requirement {
    extension: &'static str,
    core_since: Option<(u32, u32)>,
}

impl Requirement {
    const fn new(extension: &'static str, major: u32, minor: u32) -> Option<Self> {
        Some(Self {
            extension,
            core_since: Some((major, minor)),
        })
    }

    fn met(&self, gl: &dyn GlApi) -> bool {
        let version = gl.version();
        gl.has_extension(self.extension)
            || self
                .core_since
                .is_some_and(|(major, minor)| version.profile != Profile::Es && version.at_least(major, minor))
    }
}

fn target_requirement(target: GLenum) -> Option<Requirement> {
    match target {
        gl::TEXTURE_1D_ARRAY | gl::TEXTURE_2D_ARRAY => Requirement::new("GL_EXT_texture_array", 3, 0),
        gl::TEXTURE_CUBE_MAP_ARRAY => Requirement::new("GL_ARB_texture_cube_map_array", 4, 0),
        gl::TEXTURE_RECTANGLE => Requirement::new("GL_ARB_texture_rectangle", 3, 1),
        gl::TEXTURE_BUFFER => Requirement::new("GL_ARB_texture_buffer_object", 3, 1),
        gl::TEXTURE_2D_MULTISAMPLE | gl::TEXTURE_2D_MULTISAMPLE_ARRAY => {
            Requirement::new("GL_ARB_texture_multisample", 3, 2)
        }
        _ => None,
    }
}

fn pname_requirement(pname: GLenum) -> Option<Requirement> {
    match pname {
        gl::SRGB_READ => Requirement::new("GL_EXT_texture_sRGB", 2, 1),
        gl::SRGB_WRITE => Requirement::new("GL_ARB_framebuffer_sRGB", 3, 0),
        gl::SRGB_DECODE_ARB => Some(Requirement {
            extension: "GL_ARB_texture_sRGB_decode",
            core_since: None,
        }),
        gl::TESS_CONTROL_TEXTURE | gl::TESS_EVALUATION_TEXTURE => {
            Requirement::new("GL_ARB_tessellation_shader", 4, 0)
        }
        gl::GEOMETRY_TEXTURE => Requirement::new("GL_ARB_geometry_shader4", 3, 2),
        gl::COMPUTE_TEXTURE => Requirement::new("GL_ARB_compute_shader", 4, 3),
        gl::TEXTURE_GATHER | gl::TEXTURE_GATHER_SHADOW => Requirement::new("GL_ARB_texture_gather", 4, 0),
        gl::SHADER_IMAGE_LOAD
        | gl::SHADER_IMAGE_STORE
        | gl::SHADER_IMAGE_ATOMIC
        | gl::IMAGE_TEXEL_SIZE
        | gl::IMAGE_COMPATIBILITY_CLASS
        | gl::IMAGE_PIXEL_FORMAT
        | gl::IMAGE_PIXEL_TYPE => Requirement::new("GL_ARB_shader_image_load_store", 4, 2),
        gl::CLEAR_BUFFER => Requirement::new("GL_ARB_clear_texture", 4, 4),
        gl::TEXTURE_VIEW => Requirement::new("GL_ARB_texture_view", 4, 3),
        _ => None,
    }
}

/// Which of the two query entry points a check goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Query {
    Iv,
    I64v,
}

impl Query {
    const BOTH: [Query; 2] = [Query::Iv, Query::I64v];

    fn entry_point(self) -> &'static str {
        match self {
            Query::Iv => "GetInternalformativ",
            Query::I64v => "GetInternalformati64v",
        }
    }

    /// Runs the query with room for one value. The buffer starts at -1 so
    /// an implementation that writes nothing is caught.
    fn get(self, gl: &mut dyn GlApi, target: GLenum, internalformat: GLenum, pname: GLenum) -> i64 {
        match self {
            Query::Iv => {
                let mut params = [-1i32];
                gl.get_internalformat_iv(target, internalformat, pname, &mut params);
                i64::from(params[0])
            }
            Query::I64v => {
                let mut params = [-1i64];
                gl.get_internalformat_i64v(target, internalformat, pname, &mut params);
                params[0]
            }
        }
    }
}

/// Whether the (target, internalformat, pname) resource is supported: every
/// requirement is met and the implementation reports the format supported.
fn is_supported(gl: &mut dyn GlApi, query: Query, target: GLenum, internalformat: GLenum, pname: GLenum) -> bool {
    let met = |req: Option<Requirement>| req.map_or(true, |r| r.met(&*gl));
    if !met(target_requirement(target)) || !met(pname_requirement(pname)) {
        return false;
    }
    query.get(gl, target, internalformat, gl::INTERNALFORMAT_SUPPORTED) == i64::from(gl::TRUE)
}

pub struct GenericPnameChecks;

impl GenericPnameChecks {
    fn check_pname(r: &mut CheckRunner<'_>, pname: GLenum, admissible: Expectation) {
        let mut unsupported = 0usize;
        for query in Query::BOTH {
            for &target in VALID_TARGETS {
                for &internalformat in VALID_INTERNALFORMATS {
                    let supported = is_supported(r.gl(), query, target, internalformat, pname);
                    unsupported += usize::from(!supported);
                    let label = format!(
                        "{}({}, {}, {})",
                        query.entry_point(),
                        gl::enum_label(target),
                        gl::enum_label(internalformat),
                        gl::enum_label(pname)
                    );
                    r.expect_supported_value(label, supported, admissible, |ctx| {
                        query.get(ctx, target, internalformat, pname)
                    });
                }
            }
        }
        log::debug!(
            "{}: {unsupported} of {} resources unsupported",
            gl::enum_label(pname),
            Query::BOTH.len() * VALID_TARGETS.len() * VALID_INTERNALFORMATS.len()
        );
    }
}

impl ConformanceTest for GenericPnameChecks {
    fn name(&self) -> &'static str {
        "arb_internalformat_query2/generic-pname-checks"
    }

    fn description(&self) -> &'static str {
        "Query2 pnames answer zero when unsupported and a legal value otherwise"
    }

    fn config(&self) -> TestConfig {
        TestConfig::new().compat(10).visual(Visual::RGB)
    }

    fn run(&self, r: &mut CheckRunner<'_>) -> Result<(), Skip> {
        r.require_extension("GL_ARB_framebuffer_object")?;
        r.require_extension("GL_ARB_internalformat_query2")?;

        for group in PNAME_GROUPS {
            for &pname in group.pnames {
                r.subtest(gl::enum_label(pname), |r| {
                    Self::check_pname(r, pname, group.admissible);
                });
            }
        }
        Ok(())
    }
}
