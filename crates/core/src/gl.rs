//! GL enumerant values and their canonical spellings.
//!
//! Values are plain `u32` constants named after the GL spelling without the
//! `GL_` prefix. The name table mirrors the registry so that every check can
//! print the enum it was exercising. Several enumerants share a value (`NONE`,
//! `FALSE` and `NO_ERROR` are all zero); lookups return the first spelling in
//! [`NAMES`], which lists the most useful one first.

/// Raw GL enumerant.
pub type GLenum = u32;

pub const NONE: GLenum = 0;
pub const FALSE: GLenum = 0;
pub const TRUE: GLenum = 1;

// Errors
pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;
pub const CONTEXT_LOST: GLenum = 0x0507;

// Color buffers (tables 17.4 and 17.6)
pub const FRONT_LEFT: GLenum = 0x0400;
pub const FRONT_RIGHT: GLenum = 0x0401;
pub const BACK_LEFT: GLenum = 0x0402;
pub const BACK_RIGHT: GLenum = 0x0403;
pub const FRONT: GLenum = 0x0404;
pub const BACK: GLenum = 0x0405;
pub const LEFT: GLenum = 0x0406;
pub const RIGHT: GLenum = 0x0407;
pub const FRONT_AND_BACK: GLenum = 0x0408;

// Framebuffer objects (table 17.5)
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;
pub const STENCIL_ATTACHMENT: GLenum = 0x8D20;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821A;
pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const READ_FRAMEBUFFER: GLenum = 0x8CA8;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8CA9;
pub const DRAW_FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const READ_FRAMEBUFFER_BINDING: GLenum = 0x8CAA;
pub const RENDERBUFFER: GLenum = 0x8D41;
/// Highest attachment point the enum space reserves (`COLOR_ATTACHMENT31`).
pub const MAX_COLOR_ATTACHMENT_ENUMS: u32 = 32;

// Implementation limits
pub const MAX_DRAW_BUFFERS: GLenum = 0x8824;
pub const MAX_COLOR_ATTACHMENTS: GLenum = 0x8CDF;
pub const MAX_VERTEX_ATTRIBS: GLenum = 0x8869;
pub const MAX_SAMPLES: GLenum = 0x8D57;
pub const MAX_ARRAY_TEXTURE_LAYERS: GLenum = 0x88FF;
pub const CONTEXT_PROFILE_MASK: GLenum = 0x9126;
pub const CONTEXT_CORE_PROFILE_BIT: i32 = 0x1;

// Texture targets
pub const TEXTURE_1D: GLenum = 0x0DE0;
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_3D: GLenum = 0x806F;
pub const TEXTURE_1D_ARRAY: GLenum = 0x8C18;
pub const TEXTURE_2D_ARRAY: GLenum = 0x8C1A;
pub const TEXTURE_RECTANGLE: GLenum = 0x84F5;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_CUBE_MAP_ARRAY: GLenum = 0x9009;
pub const TEXTURE_BUFFER: GLenum = 0x8C2A;
pub const TEXTURE_2D_MULTISAMPLE: GLenum = 0x9100;
pub const TEXTURE_2D_MULTISAMPLE_ARRAY: GLenum = 0x9102;

// Pixel formats (table 3.3)
pub const STENCIL_INDEX: GLenum = 0x1901;
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const GREEN: GLenum = 0x1904;
pub const BLUE: GLenum = 0x1905;
pub const ALPHA: GLenum = 0x1906;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const BGR: GLenum = 0x80E0;
pub const BGRA: GLenum = 0x80E1;
pub const RG: GLenum = 0x8227;
pub const RG_INTEGER: GLenum = 0x8228;
pub const DEPTH_STENCIL: GLenum = 0x84F9;
pub const RED_INTEGER: GLenum = 0x8D94;
pub const GREEN_INTEGER: GLenum = 0x8D95;
pub const BLUE_INTEGER: GLenum = 0x8D96;
pub const RGB_INTEGER: GLenum = 0x8D98;
pub const RGBA_INTEGER: GLenum = 0x8D99;
pub const BGR_INTEGER: GLenum = 0x8D9A;
pub const BGRA_INTEGER: GLenum = 0x8D9B;

// Pixel types
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const DOUBLE: GLenum = 0x140A;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const UNSIGNED_INT_2_10_10_10_REV: GLenum = 0x8368;
pub const UNSIGNED_INT_10F_11F_11F_REV: GLenum = 0x8C3B;
pub const UNSIGNED_INT_5_9_9_9_REV: GLenum = 0x8C3E;
pub const UNSIGNED_INT_24_8: GLenum = 0x84FA;
pub const FLOAT_32_UNSIGNED_INT_24_8_REV: GLenum = 0x8DAD;

// Sized internal formats
pub const RGB8: GLenum = 0x8051;
pub const RGBA8: GLenum = 0x8058;
pub const RGB10_A2: GLenum = 0x8059;
pub const R8: GLenum = 0x8229;
pub const RG8: GLenum = 0x822B;
pub const R16F: GLenum = 0x822D;
pub const R32F: GLenum = 0x822E;
pub const RG16F: GLenum = 0x822F;
pub const RG32F: GLenum = 0x8230;
pub const R8I: GLenum = 0x8231;
pub const R8UI: GLenum = 0x8232;
pub const R32I: GLenum = 0x8235;
pub const R32UI: GLenum = 0x8236;
pub const RGBA32F: GLenum = 0x8814;
pub const RGB32F: GLenum = 0x8815;
pub const RGBA16F: GLenum = 0x881A;
pub const RGB16F: GLenum = 0x881B;
pub const RGBA32UI: GLenum = 0x8D70;
pub const RGBA16UI: GLenum = 0x8D76;
pub const RGBA8UI: GLenum = 0x8D7C;
pub const RGBA32I: GLenum = 0x8D82;
pub const RGBA16I: GLenum = 0x8D88;
pub const RGBA8I: GLenum = 0x8D8E;
pub const R11F_G11F_B10F: GLenum = 0x8C3A;
pub const RGB9_E5: GLenum = 0x8C3D;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const DEPTH_COMPONENT32F: GLenum = 0x8CAC;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;
pub const STENCIL_INDEX8: GLenum = 0x8D48;

// Vertex attributes
pub const CURRENT_VERTEX_ATTRIB: GLenum = 0x8626;

// ARB_internalformat_query2 pnames
pub const SAMPLES: GLenum = 0x80A9;
pub const TEXTURE_COMPRESSED: GLenum = 0x86A1;
pub const NUM_SAMPLE_COUNTS: GLenum = 0x9380;
pub const INTERNALFORMAT_SUPPORTED: GLenum = 0x826F;
pub const INTERNALFORMAT_PREFERRED: GLenum = 0x8270;
pub const MAX_WIDTH: GLenum = 0x827E;
pub const MAX_HEIGHT: GLenum = 0x827F;
pub const MAX_DEPTH: GLenum = 0x8280;
pub const MAX_LAYERS: GLenum = 0x8281;
pub const COLOR_COMPONENTS: GLenum = 0x8283;
pub const DEPTH_COMPONENTS: GLenum = 0x8284;
pub const STENCIL_COMPONENTS: GLenum = 0x8285;
pub const COLOR_RENDERABLE: GLenum = 0x8286;
pub const DEPTH_RENDERABLE: GLenum = 0x8287;
pub const STENCIL_RENDERABLE: GLenum = 0x8288;
pub const FRAMEBUFFER_RENDERABLE: GLenum = 0x8289;
pub const FRAMEBUFFER_RENDERABLE_LAYERED: GLenum = 0x828A;
pub const FRAMEBUFFER_BLEND: GLenum = 0x828B;
pub const READ_PIXELS: GLenum = 0x828C;
pub const READ_PIXELS_FORMAT: GLenum = 0x828D;
pub const READ_PIXELS_TYPE: GLenum = 0x828E;
pub const TEXTURE_IMAGE_FORMAT: GLenum = 0x828F;
pub const TEXTURE_IMAGE_TYPE: GLenum = 0x8290;
pub const MIPMAP: GLenum = 0x8293;
pub const MANUAL_GENERATE_MIPMAP: GLenum = 0x8294;
pub const AUTO_GENERATE_MIPMAP: GLenum = 0x8295;
pub const SRGB_READ: GLenum = 0x8297;
pub const SRGB_WRITE: GLenum = 0x8298;
pub const SRGB_DECODE_ARB: GLenum = 0x8299;
pub const FILTER: GLenum = 0x829A;
pub const VERTEX_TEXTURE: GLenum = 0x829B;
pub const TESS_CONTROL_TEXTURE: GLenum = 0x829C;
pub const TESS_EVALUATION_TEXTURE: GLenum = 0x829D;
pub const GEOMETRY_TEXTURE: GLenum = 0x829E;
pub const FRAGMENT_TEXTURE: GLenum = 0x829F;
pub const COMPUTE_TEXTURE: GLenum = 0x82A0;
pub const TEXTURE_SHADOW: GLenum = 0x82A1;
pub const TEXTURE_GATHER: GLenum = 0x82A2;
pub const TEXTURE_GATHER_SHADOW: GLenum = 0x82A3;
pub const SHADER_IMAGE_LOAD: GLenum = 0x82A4;
pub const SHADER_IMAGE_STORE: GLenum = 0x82A5;
pub const SHADER_IMAGE_ATOMIC: GLenum = 0x82A6;
pub const IMAGE_TEXEL_SIZE: GLenum = 0x82A7;
pub const IMAGE_COMPATIBILITY_CLASS: GLenum = 0x82A8;
pub const IMAGE_PIXEL_FORMAT: GLenum = 0x82A9;
pub const IMAGE_PIXEL_TYPE: GLenum = 0x82AA;
pub const SIMULTANEOUS_TEXTURE_AND_DEPTH_TEST: GLenum = 0x82AC;
pub const SIMULTANEOUS_TEXTURE_AND_STENCIL_TEST: GLenum = 0x82AD;
pub const SIMULTANEOUS_TEXTURE_AND_DEPTH_WRITE: GLenum = 0x82AE;
pub const SIMULTANEOUS_TEXTURE_AND_STENCIL_WRITE: GLenum = 0x82AF;
pub const CLEAR_BUFFER: GLenum = 0x82B4;
pub const TEXTURE_VIEW: GLenum = 0x82B5;
pub const FULL_SUPPORT: GLenum = 0x82B7;
pub const CAVEAT_SUPPORT: GLenum = 0x82B8;
pub const IMAGE_CLASS_4_X_32: GLenum = 0x82B9;
pub const IMAGE_CLASS_2_X_32: GLenum = 0x82BA;
pub const IMAGE_CLASS_1_X_32: GLenum = 0x82BB;
pub const IMAGE_CLASS_4_X_16: GLenum = 0x82BC;
pub const IMAGE_CLASS_2_X_16: GLenum = 0x82BD;
pub const IMAGE_CLASS_1_X_16: GLenum = 0x82BE;
pub const IMAGE_CLASS_4_X_8: GLenum = 0x82BF;
pub const IMAGE_CLASS_2_X_8: GLenum = 0x82C0;
pub const IMAGE_CLASS_1_X_8: GLenum = 0x82C1;
pub const IMAGE_CLASS_11_11_10: GLenum = 0x82C2;
pub const IMAGE_CLASS_10_10_10_2: GLenum = 0x82C3;

/// Value → canonical spelling. The first entry for a value wins.
pub const NAMES: &[(GLenum, &str)] = &[
    (NONE, "GL_NONE"),
    (TRUE, "GL_TRUE"),
    (INVALID_ENUM, "GL_INVALID_ENUM"),
    (INVALID_VALUE, "GL_INVALID_VALUE"),
    (INVALID_OPERATION, "GL_INVALID_OPERATION"),
    (STACK_OVERFLOW, "GL_STACK_OVERFLOW"),
    (STACK_UNDERFLOW, "GL_STACK_UNDERFLOW"),
    (OUT_OF_MEMORY, "GL_OUT_OF_MEMORY"),
    (INVALID_FRAMEBUFFER_OPERATION, "GL_INVALID_FRAMEBUFFER_OPERATION"),
    (CONTEXT_LOST, "GL_CONTEXT_LOST"),
    (FRONT_LEFT, "GL_FRONT_LEFT"),
    (FRONT_RIGHT, "GL_FRONT_RIGHT"),
    (BACK_LEFT, "GL_BACK_LEFT"),
    (BACK_RIGHT, "GL_BACK_RIGHT"),
    (FRONT, "GL_FRONT"),
    (BACK, "GL_BACK"),
    (LEFT, "GL_LEFT"),
    (RIGHT, "GL_RIGHT"),
    (FRONT_AND_BACK, "GL_FRONT_AND_BACK"),
    (DEPTH_ATTACHMENT, "GL_DEPTH_ATTACHMENT"),
    (STENCIL_ATTACHMENT, "GL_STENCIL_ATTACHMENT"),
    (DEPTH_STENCIL_ATTACHMENT, "GL_DEPTH_STENCIL_ATTACHMENT"),
    (FRAMEBUFFER, "GL_FRAMEBUFFER"),
    (READ_FRAMEBUFFER, "GL_READ_FRAMEBUFFER"),
    (DRAW_FRAMEBUFFER, "GL_DRAW_FRAMEBUFFER"),
    (DRAW_FRAMEBUFFER_BINDING, "GL_DRAW_FRAMEBUFFER_BINDING"),
    (READ_FRAMEBUFFER_BINDING, "GL_READ_FRAMEBUFFER_BINDING"),
    (RENDERBUFFER, "GL_RENDERBUFFER"),
    (MAX_DRAW_BUFFERS, "GL_MAX_DRAW_BUFFERS"),
    (MAX_COLOR_ATTACHMENTS, "GL_MAX_COLOR_ATTACHMENTS"),
    (MAX_VERTEX_ATTRIBS, "GL_MAX_VERTEX_ATTRIBS"),
    (MAX_SAMPLES, "GL_MAX_SAMPLES"),
    (MAX_ARRAY_TEXTURE_LAYERS, "GL_MAX_ARRAY_TEXTURE_LAYERS"),
    (TEXTURE_1D, "GL_TEXTURE_1D"),
    (TEXTURE_2D, "GL_TEXTURE_2D"),
    (TEXTURE_3D, "GL_TEXTURE_3D"),
    (TEXTURE_1D_ARRAY, "GL_TEXTURE_1D_ARRAY"),
    (TEXTURE_2D_ARRAY, "GL_TEXTURE_2D_ARRAY"),
    (TEXTURE_RECTANGLE, "GL_TEXTURE_RECTANGLE"),
    (TEXTURE_CUBE_MAP, "GL_TEXTURE_CUBE_MAP"),
    (TEXTURE_CUBE_MAP_ARRAY, "GL_TEXTURE_CUBE_MAP_ARRAY"),
    (TEXTURE_BUFFER, "GL_TEXTURE_BUFFER"),
    (TEXTURE_2D_MULTISAMPLE, "GL_TEXTURE_2D_MULTISAMPLE"),
    (TEXTURE_2D_MULTISAMPLE_ARRAY, "GL_TEXTURE_2D_MULTISAMPLE_ARRAY"),
    (STENCIL_INDEX, "GL_STENCIL_INDEX"),
    (DEPTH_COMPONENT, "GL_DEPTH_COMPONENT"),
    (RED, "GL_RED"),
    (GREEN, "GL_GREEN"),
    (BLUE, "GL_BLUE"),
    (ALPHA, "GL_ALPHA"),
    (RGB, "GL_RGB"),
    (RGBA, "GL_RGBA"),
    (BGR, "GL_BGR"),
    (BGRA, "GL_BGRA"),
    (RG, "GL_RG"),
    (RG_INTEGER, "GL_RG_INTEGER"),
    (DEPTH_STENCIL, "GL_DEPTH_STENCIL"),
    (RED_INTEGER, "GL_RED_INTEGER"),
    (GREEN_INTEGER, "GL_GREEN_INTEGER"),
    (BLUE_INTEGER, "GL_BLUE_INTEGER"),
    (RGB_INTEGER, "GL_RGB_INTEGER"),
    (RGBA_INTEGER, "GL_RGBA_INTEGER"),
    (BGR_INTEGER, "GL_BGR_INTEGER"),
    (BGRA_INTEGER, "GL_BGRA_INTEGER"),
    (BYTE, "GL_BYTE"),
    (UNSIGNED_BYTE, "GL_UNSIGNED_BYTE"),
    (SHORT, "GL_SHORT"),
    (UNSIGNED_SHORT, "GL_UNSIGNED_SHORT"),
    (INT, "GL_INT"),
    (UNSIGNED_INT, "GL_UNSIGNED_INT"),
    (FLOAT, "GL_FLOAT"),
    (DOUBLE, "GL_DOUBLE"),
    (HALF_FLOAT, "GL_HALF_FLOAT"),
    (UNSIGNED_INT_2_10_10_10_REV, "GL_UNSIGNED_INT_2_10_10_10_REV"),
    (UNSIGNED_INT_10F_11F_11F_REV, "GL_UNSIGNED_INT_10F_11F_11F_REV"),
    (UNSIGNED_INT_5_9_9_9_REV, "GL_UNSIGNED_INT_5_9_9_9_REV"),
    (UNSIGNED_INT_24_8, "GL_UNSIGNED_INT_24_8"),
    (FLOAT_32_UNSIGNED_INT_24_8_REV, "GL_FLOAT_32_UNSIGNED_INT_24_8_REV"),
    (RGB8, "GL_RGB8"),
    (RGBA8, "GL_RGBA8"),
    (RGB10_A2, "GL_RGB10_A2"),
    (R8, "GL_R8"),
    (RG8, "GL_RG8"),
    (R16F, "GL_R16F"),
    (R32F, "GL_R32F"),
    (RG16F, "GL_RG16F"),
    (RG32F, "GL_RG32F"),
    (R8I, "GL_R8I"),
    (R8UI, "GL_R8UI"),
    (R32I, "GL_R32I"),
    (R32UI, "GL_R32UI"),
    (RGBA32F, "GL_RGBA32F"),
    (RGB32F, "GL_RGB32F"),
    (RGBA16F, "GL_RGBA16F"),
    (RGB16F, "GL_RGB16F"),
    (RGBA32UI, "GL_RGBA32UI"),
    (RGBA16UI, "GL_RGBA16UI"),
    (RGBA8UI, "GL_RGBA8UI"),
    (RGBA32I, "GL_RGBA32I"),
    (RGBA16I, "GL_RGBA16I"),
    (RGBA8I, "GL_RGBA8I"),
    (R11F_G11F_B10F, "GL_R11F_G11F_B10F"),
    (RGB9_E5, "GL_RGB9_E5"),
    (SRGB8_ALPHA8, "GL_SRGB8_ALPHA8"),
    (DEPTH_COMPONENT16, "GL_DEPTH_COMPONENT16"),
    (DEPTH_COMPONENT24, "GL_DEPTH_COMPONENT24"),
    (DEPTH_COMPONENT32F, "GL_DEPTH_COMPONENT32F"),
    (DEPTH24_STENCIL8, "GL_DEPTH24_STENCIL8"),
    (STENCIL_INDEX8, "GL_STENCIL_INDEX8"),
    (CURRENT_VERTEX_ATTRIB, "GL_CURRENT_VERTEX_ATTRIB"),
    (SAMPLES, "GL_SAMPLES"),
    (TEXTURE_COMPRESSED, "GL_TEXTURE_COMPRESSED"),
    (NUM_SAMPLE_COUNTS, "GL_NUM_SAMPLE_COUNTS"),
    (INTERNALFORMAT_SUPPORTED, "GL_INTERNALFORMAT_SUPPORTED"),
    (INTERNALFORMAT_PREFERRED, "GL_INTERNALFORMAT_PREFERRED"),
    (MAX_WIDTH, "GL_MAX_WIDTH"),
    (MAX_HEIGHT, "GL_MAX_HEIGHT"),
    (MAX_DEPTH, "GL_MAX_DEPTH"),
    (MAX_LAYERS, "GL_MAX_LAYERS"),
    (COLOR_COMPONENTS, "GL_COLOR_COMPONENTS"),
    (DEPTH_COMPONENTS, "GL_DEPTH_COMPONENTS"),
    (STENCIL_COMPONENTS, "GL_STENCIL_COMPONENTS"),
    (COLOR_RENDERABLE, "GL_COLOR_RENDERABLE"),
    (DEPTH_RENDERABLE, "GL_DEPTH_RENDERABLE"),
    (STENCIL_RENDERABLE, "GL_STENCIL_RENDERABLE"),
    (FRAMEBUFFER_RENDERABLE, "GL_FRAMEBUFFER_RENDERABLE"),
    (FRAMEBUFFER_RENDERABLE_LAYERED, "GL_FRAMEBUFFER_RENDERABLE_LAYERED"),
    (FRAMEBUFFER_BLEND, "GL_FRAMEBUFFER_BLEND"),
    (READ_PIXELS, "GL_READ_PIXELS"),
    (READ_PIXELS_FORMAT, "GL_READ_PIXELS_FORMAT"),
    (READ_PIXELS_TYPE, "GL_READ_PIXELS_TYPE"),
    (TEXTURE_IMAGE_FORMAT, "GL_TEXTURE_IMAGE_FORMAT"),
    (TEXTURE_IMAGE_TYPE, "GL_TEXTURE_IMAGE_TYPE"),
    (MIPMAP, "GL_MIPMAP"),
    (MANUAL_GENERATE_MIPMAP, "GL_MANUAL_GENERATE_MIPMAP"),
    (AUTO_GENERATE_MIPMAP, "GL_AUTO_GENERATE_MIPMAP"),
    (SRGB_READ, "GL_SRGB_READ"),
    (SRGB_WRITE, "GL_SRGB_WRITE"),
    (SRGB_DECODE_ARB, "GL_SRGB_DECODE_ARB"),
    (FILTER, "GL_FILTER"),
    (VERTEX_TEXTURE, "GL_VERTEX_TEXTURE"),
    (TESS_CONTROL_TEXTURE, "GL_TESS_CONTROL_TEXTURE"),
    (TESS_EVALUATION_TEXTURE, "GL_TESS_EVALUATION_TEXTURE"),
    (GEOMETRY_TEXTURE, "GL_GEOMETRY_TEXTURE"),
    (FRAGMENT_TEXTURE, "GL_FRAGMENT_TEXTURE"),
    (COMPUTE_TEXTURE, "GL_COMPUTE_TEXTURE"),
    (TEXTURE_SHADOW, "GL_TEXTURE_SHADOW"),
    (TEXTURE_GATHER, "GL_TEXTURE_GATHER"),
    (TEXTURE_GATHER_SHADOW, "GL_TEXTURE_GATHER_SHADOW"),
    (SHADER_IMAGE_LOAD, "GL_SHADER_IMAGE_LOAD"),
    (SHADER_IMAGE_STORE, "GL_SHADER_IMAGE_STORE"),
    (SHADER_IMAGE_ATOMIC, "GL_SHADER_IMAGE_ATOMIC"),
    (IMAGE_TEXEL_SIZE, "GL_IMAGE_TEXEL_SIZE"),
    (IMAGE_COMPATIBILITY_CLASS, "GL_IMAGE_COMPATIBILITY_CLASS"),
    (IMAGE_PIXEL_FORMAT, "GL_IMAGE_PIXEL_FORMAT"),
    (IMAGE_PIXEL_TYPE, "GL_IMAGE_PIXEL_TYPE"),
    (SIMULTANEOUS_TEXTURE_AND_DEPTH_TEST, "GL_SIMULTANEOUS_TEXTURE_AND_DEPTH_TEST"),
    (SIMULTANEOUS_TEXTURE_AND_STENCIL_TEST, "GL_SIMULTANEOUS_TEXTURE_AND_STENCIL_TEST"),
    (SIMULTANEOUS_TEXTURE_AND_DEPTH_WRITE, "GL_SIMULTANEOUS_TEXTURE_AND_DEPTH_WRITE"),
    (SIMULTANEOUS_TEXTURE_AND_STENCIL_WRITE, "GL_SIMULTANEOUS_TEXTURE_AND_STENCIL_WRITE"),
    (CLEAR_BUFFER, "GL_CLEAR_BUFFER"),
    (TEXTURE_VIEW, "GL_TEXTURE_VIEW"),
    (FULL_SUPPORT, "GL_FULL_SUPPORT"),
    (CAVEAT_SUPPORT, "GL_CAVEAT_SUPPORT"),
    (IMAGE_CLASS_4_X_32, "GL_IMAGE_CLASS_4_X_32"),
    (IMAGE_CLASS_2_X_32, "GL_IMAGE_CLASS_2_X_32"),
    (IMAGE_CLASS_1_X_32, "GL_IMAGE_CLASS_1_X_32"),
    (IMAGE_CLASS_4_X_16, "GL_IMAGE_CLASS_4_X_16"),
    (IMAGE_CLASS_2_X_16, "GL_IMAGE_CLASS_2_X_16"),
    (IMAGE_CLASS_1_X_16, "GL_IMAGE_CLASS_1_X_16"),
    (IMAGE_CLASS_4_X_8, "GL_IMAGE_CLASS_4_X_8"),
    (IMAGE_CLASS_2_X_8, "GL_IMAGE_CLASS_2_X_8"),
    (IMAGE_CLASS_1_X_8, "GL_IMAGE_CLASS_1_X_8"),
    (IMAGE_CLASS_11_11_10, "GL_IMAGE_CLASS_11_11_10"),
    (IMAGE_CLASS_10_10_10_2, "GL_IMAGE_CLASS_10_10_10_2"),
];

/// Returns `COLOR_ATTACHMENTi`.
pub const fn color_attachment(i: u32) -> GLenum {
    COLOR_ATTACHMENT0 + i
}

/// If `value` is `COLOR_ATTACHMENTi` for some `i` in the reserved range,
/// returns `i`.
pub fn color_attachment_index(value: GLenum) -> Option<u32> {
    value
        .checked_sub(COLOR_ATTACHMENT0)
        .filter(|i| *i < MAX_COLOR_ATTACHMENT_ENUMS)
}

/// Canonical `GL_*` spelling of `value`, if the table knows it.
pub fn enum_name(value: GLenum) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, name)| *name)
}

/// Printable label for `value`: the `GL_*` spelling, `GL_COLOR_ATTACHMENTi`
/// for attachment points, or the hex value.
pub fn enum_label(value: GLenum) -> String {
    if let Some(name) = enum_name(value) {
        return name.to_string();
    }
    match color_attachment_index(value) {
        Some(i) => format!("GL_COLOR_ATTACHMENT{i}"),
        None => format!("0x{value:04X}"),
    }
}
