//! Internal format knowledge for `GetInternalformat*`.
//!
//! One descriptor per internal format the reference GL implements, and the
//! answers every query2 pname gives for a (target, format) pair.

use crate::profile::ReferenceProfile;
use crate::quirk::{Quirk, INADMISSIBLE_VALUE};
use gl_conform_core::api::{GlVersion, Profile};
use gl_conform_core::gl::{self, GLenum};

/// Component representation of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    UNorm,
    Float,
    Int,
    UInt,
    Depth,
    Stencil,
    DepthStencil,
}

impl Kind {
    pub fn is_color(self) -> bool {
        matches!(self, Kind::UNorm | Kind::Float | Kind::Int | Kind::UInt)
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Int | Kind::UInt)
    }

    pub fn has_depth(self) -> bool {
        matches!(self, Kind::Depth | Kind::DepthStencil)
    }

    pub fn has_stencil(self) -> bool {
        matches!(self, Kind::Stencil | Kind::DepthStencil)
    }
}

/// Image load/store properties (table 8.27 of GL 4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub class: GLenum,
    pub texel_bits: i64,
    pub format: GLenum,
    pub ty: GLenum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDesc {
    pub internalformat: GLenum,
    pub kind: Kind,
    pub sized: bool,
    pub srgb: bool,
    pub renderable: bool,
    /// Usable as a buffer texture format.
    pub buffer: bool,
    /// Pixel transfer format and type for TexImage and ReadPixels.
    pub format: GLenum,
    pub ty: GLenum,
    pub image: Option<ImageInfo>,
}

const fn color(
    internalformat: GLenum,
    kind: Kind,
    format: GLenum,
    ty: GLenum,
    image: Option<ImageInfo>,
) -> FormatDesc {
    FormatDesc {
        internalformat,
        kind,
        sized: true,
        srgb: false,
        renderable: true,
        buffer: image.is_some(),
        format,
        ty,
        image,
    }
}

const fn image(class: GLenum, texel_bits: i64, format: GLenum, ty: GLenum) -> Option<ImageInfo> {
    Some(ImageInfo {
        class,
        texel_bits,
        format,
        ty,
    })
}

const fn special(
    internalformat: GLenum,
    kind: Kind,
    sized: bool,
    format: GLenum,
    ty: GLenum,
) -> FormatDesc {
    FormatDesc {
        internalformat,
        kind,
        sized,
        srgb: false,
        renderable: true,
        buffer: false,
        format,
        ty,
        image: None,
    }
}

#[rustfmt::skip]
pub static FORMATS: &[FormatDesc] = &[
    color(gl::RGBA8, Kind::UNorm, gl::RGBA, gl::UNSIGNED_BYTE,
        image(gl::IMAGE_CLASS_4_X_8, 32, gl::RGBA, gl::UNSIGNED_BYTE)),
    color(gl::RGB8, Kind::UNorm, gl::RGB, gl::UNSIGNED_BYTE, None),
    color(gl::RGB10_A2, Kind::UNorm, gl::RGBA, gl::UNSIGNED_INT_2_10_10_10_REV,
        image(gl::IMAGE_CLASS_10_10_10_2, 32, gl::RGBA, gl::UNSIGNED_INT_2_10_10_10_REV)),
    color(gl::R8, Kind::UNorm, gl::RED, gl::UNSIGNED_BYTE,
        image(gl::IMAGE_CLASS_1_X_8, 8, gl::RED, gl::UNSIGNED_BYTE)),
    color(gl::RG8, Kind::UNorm, gl::RG, gl::UNSIGNED_BYTE,
        image(gl::IMAGE_CLASS_2_X_8, 16, gl::RG, gl::UNSIGNED_BYTE)),
    color(gl::R16F, Kind::Float, gl::RED, gl::HALF_FLOAT,
        image(gl::IMAGE_CLASS_1_X_16, 16, gl::RED, gl::HALF_FLOAT)),
    color(gl::R32F, Kind::Float, gl::RED, gl::FLOAT,
        image(gl::IMAGE_CLASS_1_X_32, 32, gl::RED, gl::FLOAT)),
    color(gl::RG16F, Kind::Float, gl::RG, gl::HALF_FLOAT,
        image(gl::IMAGE_CLASS_2_X_16, 32, gl::RG, gl::HALF_FLOAT)),
    color(gl::RG32F, Kind::Float, gl::RG, gl::FLOAT,
        image(gl::IMAGE_CLASS_2_X_32, 64, gl::RG, gl::FLOAT)),
    color(gl::R8I, Kind::Int, gl::RED_INTEGER, gl::BYTE,
        image(gl::IMAGE_CLASS_1_X_8, 8, gl::RED_INTEGER, gl::BYTE)),
    color(gl::R8UI, Kind::UInt, gl::RED_INTEGER, gl::UNSIGNED_BYTE,
        image(gl::IMAGE_CLASS_1_X_8, 8, gl::RED_INTEGER, gl::UNSIGNED_BYTE)),
    color(gl::R32I, Kind::Int, gl::RED_INTEGER, gl::INT,
        image(gl::IMAGE_CLASS_1_X_32, 32, gl::RED_INTEGER, gl::INT)),
    color(gl::R32UI, Kind::UInt, gl::RED_INTEGER, gl::UNSIGNED_INT,
        image(gl::IMAGE_CLASS_1_X_32, 32, gl::RED_INTEGER, gl::UNSIGNED_INT)),
    color(gl::RGBA32F, Kind::Float, gl::RGBA, gl::FLOAT,
        image(gl::IMAGE_CLASS_4_X_32, 128, gl::RGBA, gl::FLOAT)),
    color(gl::RGB32F, Kind::Float, gl::RGB, gl::FLOAT, None),
    color(gl::RGBA16F, Kind::Float, gl::RGBA, gl::HALF_FLOAT,
        image(gl::IMAGE_CLASS_4_X_16, 64, gl::RGBA, gl::HALF_FLOAT)),
    color(gl::RGB16F, Kind::Float, gl::RGB, gl::HALF_FLOAT, None),
    color(gl::RGBA32UI, Kind::UInt, gl::RGBA_INTEGER, gl::UNSIGNED_INT,
        image(gl::IMAGE_CLASS_4_X_32, 128, gl::RGBA_INTEGER, gl::UNSIGNED_INT)),
    color(gl::RGBA16UI, Kind::UInt, gl::RGBA_INTEGER, gl::UNSIGNED_SHORT,
        image(gl::IMAGE_CLASS_4_X_16, 64, gl::RGBA_INTEGER, gl::UNSIGNED_SHORT)),
    color(gl::RGBA8UI, Kind::UInt, gl::RGBA_INTEGER, gl::UNSIGNED_BYTE,
        image(gl::IMAGE_CLASS_4_X_8, 32, gl::RGBA_INTEGER, gl::UNSIGNED_BYTE)),
    color(gl::RGBA32I, Kind::Int, gl::RGBA_INTEGER, gl::INT,
        image(gl::IMAGE_CLASS_4_X_32, 128, gl::RGBA_INTEGER, gl::INT)),
    color(gl::RGBA16I, Kind::Int, gl::RGBA_INTEGER, gl::SHORT,
        image(gl::IMAGE_CLASS_4_X_16, 64, gl::RGBA_INTEGER, gl::SHORT)),
    color(gl::RGBA8I, Kind::Int, gl::RGBA_INTEGER, gl::BYTE,
        image(gl::IMAGE_CLASS_4_X_8, 32, gl::RGBA_INTEGER, gl::BYTE)),
    color(gl::R11F_G11F_B10F, Kind::Float, gl::RGB, gl::UNSIGNED_INT_10F_11F_11F_REV,
        image(gl::IMAGE_CLASS_11_11_10, 32, gl::RGB, gl::UNSIGNED_INT_10F_11F_11F_REV)),
    FormatDesc {
        renderable: false,
        ..color(gl::RGB9_E5, Kind::Float, gl::RGB, gl::UNSIGNED_INT_5_9_9_9_REV, None)
    },
    FormatDesc {
        srgb: true,
        ..color(gl::SRGB8_ALPHA8, Kind::UNorm, gl::RGBA, gl::UNSIGNED_BYTE, None)
    },
    special(gl::DEPTH_COMPONENT16, Kind::Depth, true, gl::DEPTH_COMPONENT, gl::UNSIGNED_SHORT),
    special(gl::DEPTH_COMPONENT24, Kind::Depth, true, gl::DEPTH_COMPONENT, gl::UNSIGNED_INT),
    special(gl::DEPTH_COMPONENT32F, Kind::Depth, true, gl::DEPTH_COMPONENT, gl::FLOAT),
    special(gl::DEPTH24_STENCIL8, Kind::DepthStencil, true, gl::DEPTH_STENCIL, gl::UNSIGNED_INT_24_8),
    special(gl::STENCIL_INDEX8, Kind::Stencil, true, gl::STENCIL_INDEX, gl::UNSIGNED_BYTE),
    special(gl::RED, Kind::UNorm, false, gl::RED, gl::UNSIGNED_BYTE),
    special(gl::RG, Kind::UNorm, false, gl::RG, gl::UNSIGNED_BYTE),
    special(gl::RGB, Kind::UNorm, false, gl::RGB, gl::UNSIGNED_BYTE),
    special(gl::RGBA, Kind::UNorm, false, gl::RGBA, gl::UNSIGNED_BYTE),
    special(gl::DEPTH_COMPONENT, Kind::Depth, false, gl::DEPTH_COMPONENT, gl::UNSIGNED_INT),
    special(gl::DEPTH_STENCIL, Kind::DepthStencil, false, gl::DEPTH_STENCIL, gl::UNSIGNED_INT_24_8),
];

pub fn describe(internalformat: GLenum) -> Option<&'static FormatDesc> {
    FORMATS.iter().find(|f| f.internalformat == internalformat)
}

/// A feature available through an extension or from a core version on.
struct Feature {
    extension: &'static str,
    /// First core version that includes the feature, if any.
    core_since: Option<(u32, u32)>,
}

impl Feature {
    fn available(&self, profile: &ReferenceProfile) -> bool {
        let v = profile.version;
        profile.has_extension(self.extension)
            || self
                .core_since
                .is_some_and(|(major, minor)| v.profile != Profile::Es && v.at_least(major, minor))
    }
}

const fn feature(extension: &'static str, core_since: (u32, u32)) -> Option<Feature> {
    Some(Feature {
        extension,
        core_since: Some(core_since),
    })
}

const fn extension_only(extension: &'static str) -> Option<Feature> {
    Some(Feature {
        extension,
        core_since: None,
    })
}

fn target_feature(target: GLenum) -> Option<Feature> {
    match target {
        gl::TEXTURE_1D_ARRAY | gl::TEXTURE_2D_ARRAY => feature("GL_EXT_texture_array", (3, 0)),
        gl::TEXTURE_CUBE_MAP_ARRAY => feature("GL_ARB_texture_cube_map_array", (4, 0)),
        gl::TEXTURE_RECTANGLE => feature("GL_ARB_texture_rectangle", (3, 1)),
        gl::TEXTURE_BUFFER => feature("GL_ARB_texture_buffer_object", (3, 1)),
        gl::TEXTURE_2D_MULTISAMPLE | gl::TEXTURE_2D_MULTISAMPLE_ARRAY => {
            feature("GL_ARB_texture_multisample", (3, 2))
        }
        _ => None,
    }
}

fn pname_feature(pname: GLenum) -> Option<Feature> {
    match pname {
        gl::SRGB_READ => feature("GL_EXT_texture_sRGB", (2, 1)),
        gl::SRGB_WRITE => feature("GL_ARB_framebuffer_sRGB", (3, 0)),
        gl::SRGB_DECODE_ARB => extension_only("GL_ARB_texture_sRGB_decode"),
        gl::TESS_CONTROL_TEXTURE | gl::TESS_EVALUATION_TEXTURE => {
            feature("GL_ARB_tessellation_shader", (4, 0))
        }
        gl::GEOMETRY_TEXTURE => feature("GL_ARB_geometry_shader4", (3, 2)),
        gl::COMPUTE_TEXTURE => feature("GL_ARB_compute_shader", (4, 3)),
        gl::TEXTURE_GATHER | gl::TEXTURE_GATHER_SHADOW => feature("GL_ARB_texture_gather", (4, 0)),
        gl::SHADER_IMAGE_LOAD
        | gl::SHADER_IMAGE_STORE
        | gl::SHADER_IMAGE_ATOMIC
        | gl::IMAGE_TEXEL_SIZE
        | gl::IMAGE_COMPATIBILITY_CLASS
        | gl::IMAGE_PIXEL_FORMAT
        | gl::IMAGE_PIXEL_TYPE => feature("GL_ARB_shader_image_load_store", (4, 2)),
        gl::CLEAR_BUFFER => feature("GL_ARB_clear_texture", (4, 4)),
        gl::TEXTURE_VIEW => feature("GL_ARB_texture_view", (4, 3)),
        _ => None,
    }
}

/// Targets `GetInternalformat*` accepts.
pub const QUERY_TARGETS: &[GLenum] = &[
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

fn is_multisample(target: GLenum) -> bool {
    matches!(target, gl::TEXTURE_2D_MULTISAMPLE | gl::TEXTURE_2D_MULTISAMPLE_ARRAY)
}

fn is_layered(target: GLenum) -> bool {
    matches!(
        target,
        gl::TEXTURE_3D
            | gl::TEXTURE_1D_ARRAY
            | gl::TEXTURE_2D_ARRAY
            | gl::TEXTURE_CUBE_MAP
            | gl::TEXTURE_CUBE_MAP_ARRAY
            | gl::TEXTURE_2D_MULTISAMPLE_ARRAY
    )
}

fn is_mipmapped(target: GLenum) -> bool {
    matches!(
        target,
        gl::TEXTURE_1D
            | gl::TEXTURE_2D
            | gl::TEXTURE_3D
            | gl::TEXTURE_1D_ARRAY
            | gl::TEXTURE_2D_ARRAY
            | gl::TEXTURE_CUBE_MAP
            | gl::TEXTURE_CUBE_MAP_ARRAY
    )
}

fn supports_gather(target: GLenum) -> bool {
    matches!(
        target,
        gl::TEXTURE_2D
            | gl::TEXTURE_2D_ARRAY
            | gl::TEXTURE_CUBE_MAP
            | gl::TEXTURE_CUBE_MAP_ARRAY
            | gl::TEXTURE_RECTANGLE
    )
}

/// Whether `desc` can back a resource of `target` at all.
fn format_fits_target(desc: &FormatDesc, target: GLenum) -> bool {
    match target {
        gl::TEXTURE_BUFFER => desc.buffer,
        gl::RENDERBUFFER => desc.renderable,
        t if is_multisample(t) => desc.renderable && desc.kind != Kind::Stencil,
        gl::TEXTURE_3D => desc.kind.is_color(),
        _ => desc.kind != Kind::Stencil,
    }
}

/// `INTERNALFORMAT_SUPPORTED` for a (target, format) pair.
pub fn resource_supported(profile: &ReferenceProfile, target: GLenum, internalformat: GLenum) -> bool {
    let target_ok = target_feature(target).map_or(true, |f| f.available(profile));
    target_ok && describe(internalformat).is_some_and(|d| format_fits_target(d, target))
}

fn pname_supported(profile: &ReferenceProfile, pname: GLenum) -> bool {
    pname_feature(pname).map_or(true, |f| f.available(profile))
}

/// Pnames the query accepts with `ARB_internalformat_query2`.
pub fn is_query2_pname(pname: GLenum) -> bool {
    matches!(
        pname,
        gl::SAMPLES | gl::NUM_SAMPLE_COUNTS | gl::TEXTURE_COMPRESSED
    ) || ((gl::INTERNALFORMAT_SUPPORTED..=gl::IMAGE_CLASS_10_10_10_2).contains(&pname)
        && !is_query2_value(pname))
}

/// Enums inside the query2 range that are answers, not pnames.
fn is_query2_value(value: GLenum) -> bool {
    matches!(
        value,
        gl::FULL_SUPPORT
            | gl::CAVEAT_SUPPORT
            | gl::IMAGE_CLASS_4_X_32
            | gl::IMAGE_CLASS_2_X_32
            | gl::IMAGE_CLASS_1_X_32
            | gl::IMAGE_CLASS_4_X_16
            | gl::IMAGE_CLASS_2_X_16
            | gl::IMAGE_CLASS_1_X_16
            | gl::IMAGE_CLASS_4_X_8
            | gl::IMAGE_CLASS_2_X_8
            | gl::IMAGE_CLASS_1_X_8
            | gl::IMAGE_CLASS_11_11_10
            | gl::IMAGE_CLASS_10_10_10_2
    )
}

const FULL: i64 = gl::FULL_SUPPORT as i64;
const NONE: i64 = 0;
const TRUE: i64 = 1;
const FALSE: i64 = 0;

fn full_if(cond: bool) -> i64 {
    if cond {
        FULL
    } else {
        NONE
    }
}

fn bool_value(cond: bool) -> i64 {
    if cond {
        TRUE
    } else {
        FALSE
    }
}

fn sample_counts(max_samples: u32) -> Vec<i64> {
    let mut counts = Vec::new();
    let mut s = max_samples;
    while s > 1 {
        counts.push(i64::from(s));
        s /= 2;
    }
    if counts.is_empty() {
        counts.push(1);
    }
    counts
}

/// Answers a `GetInternalformat*` query. The result holds every value the
/// query produces; callers copy at most `bufSize` of them.
pub fn answer(profile: &ReferenceProfile, target: GLenum, internalformat: GLenum, pname: GLenum) -> Vec<i64> {
    let supported = resource_supported(profile, target, internalformat);

    if pname == gl::INTERNALFORMAT_SUPPORTED {
        return vec![bool_value(supported)];
    }

    let desc = match describe(internalformat) {
        Some(d) if supported && pname_supported(profile, pname) => d,
        _ => {
            let unsupported = if profile.has_quirk(Quirk::NonzeroUnsupportedAnswer) {
                1
            } else {
                0
            };
            return vec![unsupported];
        }
    };

    if profile.has_quirk(Quirk::InadmissibleAnswer(pname)) {
        return vec![INADMISSIBLE_VALUE];
    }

    let limits = &profile.limits;
    let texture = target != gl::RENDERBUFFER;
    let kind = desc.kind;
    let filterable = !kind.is_integer() && kind != Kind::Stencil;

    let value = match pname {
        gl::INTERNALFORMAT_PREFERRED => i64::from(desc.internalformat),
        gl::SAMPLES => {
            return if is_multisample(target) || target == gl::RENDERBUFFER {
                sample_counts(limits.max_samples)
            } else {
                vec![1]
            };
        }
        gl::NUM_SAMPLE_COUNTS => {
            if is_multisample(target) || target == gl::RENDERBUFFER {
                sample_counts(limits.max_samples).len() as i64
            } else {
                1
            }
        }
        gl::MAX_WIDTH => match target {
            gl::TEXTURE_3D => i64::from(limits.max_3d_texture_size),
            _ => i64::from(limits.max_texture_size),
        },
        gl::MAX_HEIGHT => match target {
            gl::TEXTURE_1D | gl::TEXTURE_1D_ARRAY | gl::TEXTURE_BUFFER => 0,
            gl::TEXTURE_3D => i64::from(limits.max_3d_texture_size),
            _ => i64::from(limits.max_texture_size),
        },
        gl::MAX_DEPTH => match target {
            gl::TEXTURE_3D => i64::from(limits.max_3d_texture_size),
            _ => 0,
        },
        gl::MAX_LAYERS => match target {
            gl::TEXTURE_1D_ARRAY
            | gl::TEXTURE_2D_ARRAY
            | gl::TEXTURE_CUBE_MAP_ARRAY
            | gl::TEXTURE_2D_MULTISAMPLE_ARRAY => i64::from(limits.max_array_texture_layers),
            _ => 0,
        },
        gl::COLOR_COMPONENTS => bool_value(kind.is_color()),
        gl::DEPTH_COMPONENTS => bool_value(kind.has_depth()),
        gl::STENCIL_COMPONENTS => bool_value(kind.has_stencil()),
        gl::COLOR_RENDERABLE => bool_value(kind.is_color() && desc.renderable),
        gl::DEPTH_RENDERABLE => bool_value(kind.has_depth()),
        gl::STENCIL_RENDERABLE => bool_value(kind.has_stencil()),
        gl::TEXTURE_COMPRESSED => FALSE,
        gl::FRAMEBUFFER_RENDERABLE => full_if(desc.renderable && target != gl::TEXTURE_BUFFER),
        gl::FRAMEBUFFER_RENDERABLE_LAYERED => full_if(desc.renderable && is_layered(target)),
        gl::FRAMEBUFFER_BLEND => {
            full_if(desc.renderable && kind.is_color() && !kind.is_integer() && target != gl::TEXTURE_BUFFER)
        }
        gl::READ_PIXELS => full_if(desc.renderable && target != gl::TEXTURE_BUFFER),
        gl::READ_PIXELS_FORMAT => {
            if desc.renderable {
                i64::from(desc.format)
            } else {
                NONE
            }
        }
        gl::READ_PIXELS_TYPE => {
            if desc.renderable {
                i64::from(desc.ty)
            } else {
                NONE
            }
        }
        gl::TEXTURE_IMAGE_FORMAT => {
            if texture && target != gl::TEXTURE_BUFFER && kind != Kind::Stencil {
                i64::from(desc.format)
            } else {
                NONE
            }
        }
        gl::TEXTURE_IMAGE_TYPE => {
            if texture && target != gl::TEXTURE_BUFFER && kind != Kind::Stencil {
                i64::from(desc.ty)
            } else {
                NONE
            }
        }
        gl::MIPMAP => bool_value(is_mipmapped(target)),
        gl::MANUAL_GENERATE_MIPMAP => full_if(is_mipmapped(target) && filterable && kind.is_color()),
        gl::AUTO_GENERATE_MIPMAP => full_if(
            profile.version.profile == Profile::Compatibility
                && is_mipmapped(target)
                && filterable
                && kind.is_color(),
        ),
        gl::SRGB_READ | gl::SRGB_WRITE | gl::SRGB_DECODE_ARB => full_if(desc.srgb),
        gl::FILTER => full_if(texture && filterable),
        gl::VERTEX_TEXTURE
        | gl::TESS_CONTROL_TEXTURE
        | gl::TESS_EVALUATION_TEXTURE
        | gl::GEOMETRY_TEXTURE
        | gl::FRAGMENT_TEXTURE
        | gl::COMPUTE_TEXTURE => full_if(texture),
        gl::TEXTURE_SHADOW => full_if(texture && kind.has_depth() && !is_multisample(target)),
        gl::TEXTURE_GATHER => full_if(supports_gather(target)),
        gl::TEXTURE_GATHER_SHADOW => full_if(supports_gather(target) && kind.has_depth()),
        gl::SHADER_IMAGE_LOAD | gl::SHADER_IMAGE_STORE => full_if(texture && desc.image.is_some()),
        gl::SHADER_IMAGE_ATOMIC => full_if(
            texture && matches!(desc.internalformat, gl::R32I | gl::R32UI),
        ),
        gl::IMAGE_TEXEL_SIZE => desc.image.map_or(0, |i| i.texel_bits),
        gl::IMAGE_COMPATIBILITY_CLASS => desc.image.map_or(NONE, |i| i64::from(i.class)),
        gl::IMAGE_PIXEL_FORMAT => desc.image.map_or(NONE, |i| i64::from(i.format)),
        gl::IMAGE_PIXEL_TYPE => desc.image.map_or(NONE, |i| i64::from(i.ty)),
        gl::SIMULTANEOUS_TEXTURE_AND_DEPTH_TEST
        | gl::SIMULTANEOUS_TEXTURE_AND_STENCIL_TEST
        | gl::SIMULTANEOUS_TEXTURE_AND_DEPTH_WRITE
        | gl::SIMULTANEOUS_TEXTURE_AND_STENCIL_WRITE => full_if(texture && desc.renderable),
        gl::CLEAR_BUFFER => full_if(texture && target != gl::TEXTURE_BUFFER),
        gl::TEXTURE_VIEW => full_if(texture && target != gl::TEXTURE_BUFFER && desc.sized),
        _ => NONE,
    };
    vec![value]
}

/// Whether a version supports query2 without the extension string.
pub fn has_query2(profile: &ReferenceProfile) -> bool {
    let v: GlVersion = profile.version;
    profile.has_extension("GL_ARB_internalformat_query2")
        || (v.profile != Profile::Es && v.at_least(4, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conformant() -> ReferenceProfile {
        ReferenceProfile::conformant()
    }

    #[test]
    fn every_format_is_unique() {
        for (i, a) in FORMATS.iter().enumerate() {
            for b in &FORMATS[i + 1..] {
                assert_ne!(a.internalformat, b.internalformat, "{}", gl::enum_label(a.internalformat));
            }
        }
    }

    #[test]
    fn image_texel_sizes_are_legal() {
        for f in FORMATS {
            if let Some(img) = f.image {
                assert!([8, 16, 32, 64, 128].contains(&img.texel_bits));
            }
        }
    }

    #[test]
    fn stencil_only_format_is_renderbuffer_only() {
        let p = conformant();
        assert!(resource_supported(&p, gl::RENDERBUFFER, gl::STENCIL_INDEX8));
        assert!(!resource_supported(&p, gl::TEXTURE_2D, gl::STENCIL_INDEX8));
    }

    #[test]
    fn depth_formats_are_not_3d_textures() {
        let p = conformant();
        assert!(!resource_supported(&p, gl::TEXTURE_3D, gl::DEPTH_COMPONENT24));
        assert!(resource_supported(&p, gl::TEXTURE_2D, gl::DEPTH_COMPONENT24));
    }

    #[test]
    fn unknown_format_is_unsupported_and_answers_zero() {
        let p = conformant();
        assert_eq!(answer(&p, gl::TEXTURE_2D, 0xBEEF, gl::READ_PIXELS), vec![0]);
        assert_eq!(answer(&p, gl::TEXTURE_2D, 0xBEEF, gl::INTERNALFORMAT_SUPPORTED), vec![0]);
    }

    #[test]
    fn missing_extension_makes_pname_unsupported() {
        let p = ReferenceProfile::with_version(3, 3, Profile::Compatibility)
            .without_extension("GL_ARB_tessellation_shader");
        assert_eq!(answer(&p, gl::TEXTURE_2D, gl::RGBA8, gl::TESS_CONTROL_TEXTURE), vec![0]);
        assert_eq!(answer(&p, gl::TEXTURE_2D, gl::RGBA8, gl::VERTEX_TEXTURE), vec![FULL]);
    }

    #[test]
    fn core_version_provides_feature_without_extension() {
        let p = ReferenceProfile::with_version(4, 5, Profile::Core)
            .without_extension("GL_ARB_tessellation_shader");
        assert_eq!(answer(&p, gl::TEXTURE_2D, gl::RGBA8, gl::TESS_CONTROL_TEXTURE), vec![FULL]);
    }

    #[test]
    fn image_queries_follow_table() {
        let p = conformant();
        assert_eq!(answer(&p, gl::TEXTURE_2D, gl::RGBA16F, gl::IMAGE_TEXEL_SIZE), vec![64]);
        assert_eq!(
            answer(&p, gl::TEXTURE_2D, gl::R11F_G11F_B10F, gl::IMAGE_COMPATIBILITY_CLASS),
            vec![i64::from(gl::IMAGE_CLASS_11_11_10)]
        );
        assert_eq!(answer(&p, gl::TEXTURE_2D, gl::RGB8, gl::IMAGE_PIXEL_FORMAT), vec![0]);
    }

    #[test]
    fn quirks_change_answers() {
        let p = conformant().with_quirk(Quirk::NonzeroUnsupportedAnswer);
        assert_eq!(answer(&p, gl::TEXTURE_3D, gl::DEPTH_COMPONENT16, gl::READ_PIXELS), vec![1]);
        assert_eq!(
            answer(&p, gl::TEXTURE_3D, gl::DEPTH_COMPONENT16, gl::INTERNALFORMAT_SUPPORTED),
            vec![0]
        );

        let p = conformant().with_quirk(Quirk::InadmissibleAnswer(gl::FRAMEBUFFER_BLEND));
        assert_eq!(
            answer(&p, gl::TEXTURE_2D, gl::RGBA8, gl::FRAMEBUFFER_BLEND),
            vec![INADMISSIBLE_VALUE]
        );
    }

    #[test]
    fn samples_list_descends() {
        assert_eq!(sample_counts(8), vec![8, 4, 2]);
        assert_eq!(sample_counts(1), vec![1]);
        let p = conformant();
        assert_eq!(answer(&p, gl::TEXTURE_2D_MULTISAMPLE, gl::RGBA8, gl::NUM_SAMPLE_COUNTS), vec![3]);
    }

    #[test]
    fn query2_pname_range_excludes_answers() {
        assert!(is_query2_pname(gl::READ_PIXELS));
        assert!(is_query2_pname(gl::TEXTURE_VIEW));
        assert!(!is_query2_pname(gl::FULL_SUPPORT));
        assert!(!is_query2_pname(gl::IMAGE_CLASS_4_X_32));
        assert!(!is_query2_pname(gl::RGBA8));
    }
}
