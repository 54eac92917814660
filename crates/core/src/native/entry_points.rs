//! Raw entry points that `glow` does not wrap.
//!
//! They are resolved from the same loader the `glow::Context` is built
//! from. A name the driver does not export stays `None`; the backend turns
//! calls through it into logged no-ops.

use std::ffi::c_void;

pub(crate) type CreateFramebuffers = unsafe extern "system" fn(n: i32, framebuffers: *mut u32);
pub(crate) type NamedFramebufferDrawBuffers =
    unsafe extern "system" fn(framebuffer: u32, n: i32, bufs: *const u32);
pub(crate) type TexImage3DMultisample =
    unsafe extern "system" fn(u32, i32, u32, i32, i32, i32, u8);
pub(crate) type GetInternalformativ = unsafe extern "system" fn(u32, u32, u32, i32, *mut i32);
pub(crate) type GetInternalformati64v = unsafe extern "system" fn(u32, u32, u32, i32, *mut i64);
pub(crate) type VertexAttribL1d = unsafe extern "system" fn(u32, f64);
pub(crate) type VertexAttribL2d = unsafe extern "system" fn(u32, f64, f64);
pub(crate) type VertexAttribL3d = unsafe extern "system" fn(u32, f64, f64, f64);
pub(crate) type VertexAttribL4d = unsafe extern "system" fn(u32, f64, f64, f64, f64);
pub(crate) type VertexAttribLdv = unsafe extern "system" fn(u32, *const f64);
pub(crate) type VertexAttribLPointer =
    unsafe extern "system" fn(u32, i32, u32, i32, *const c_void);
pub(crate) type GetVertexAttribLdv = unsafe extern "system" fn(u32, u32, *mut f64);
pub(crate) type VertexArrayVertexAttribLOffsetExt =
    unsafe extern "system" fn(u32, u32, u32, i32, u32, i32, isize);

/// Function pointers resolved at construction.
#[derive(Default)]
pub(crate) struct EntryPoints {
    pub create_framebuffers: Option<CreateFramebuffers>,
    pub named_framebuffer_draw_buffers: Option<NamedFramebufferDrawBuffers>,
    pub tex_image_3d_multisample: Option<TexImage3DMultisample>,
    pub get_internalformativ: Option<GetInternalformativ>,
    pub get_internalformati64v: Option<GetInternalformati64v>,
    pub vertex_attrib_l1d: Option<VertexAttribL1d>,
    pub vertex_attrib_l2d: Option<VertexAttribL2d>,
    pub vertex_attrib_l3d: Option<VertexAttribL3d>,
    pub vertex_attrib_l4d: Option<VertexAttribL4d>,
    /// `glVertexAttribL1dv` through `glVertexAttribL4dv`.
    pub vertex_attrib_ldv: [Option<VertexAttribLdv>; 4],
    pub vertex_attrib_l_pointer: Option<VertexAttribLPointer>,
    pub get_vertex_attrib_ldv: Option<GetVertexAttribLdv>,
    pub vertex_array_vertex_attrib_l_offset_ext: Option<VertexArrayVertexAttribLOffsetExt>,
}

macro_rules! resolve {
    ($loader:expr, $name:literal, $ty:ty) => {{
        let ptr: *const c_void = $loader($name);
        if ptr.is_null() {
            log::debug!("{} is not exported by the driver", $name);
            None
        } else {
            // SAFETY: the loader returned a non-null address for this exact
            // GL entry point, whose C signature is `$ty`.
            Some(unsafe { std::mem::transmute::<*const c_void, $ty>(ptr) })
        }
    }};
}

impl EntryPoints {
    /// Resolves every entry point through `loader`.
    #[allow(unsafe_code)]
    pub(crate) fn load<F>(loader: &mut F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        Self {
            create_framebuffers: resolve!(loader, "glCreateFramebuffers", CreateFramebuffers),
            named_framebuffer_draw_buffers: resolve!(
                loader,
                "glNamedFramebufferDrawBuffers",
                NamedFramebufferDrawBuffers
            ),
            tex_image_3d_multisample: resolve!(
                loader,
                "glTexImage3DMultisample",
                TexImage3DMultisample
            ),
            get_internalformativ: resolve!(loader, "glGetInternalformativ", GetInternalformativ),
            get_internalformati64v: resolve!(
                loader,
                "glGetInternalformati64v",
                GetInternalformati64v
            ),
            vertex_attrib_l1d: resolve!(loader, "glVertexAttribL1d", VertexAttribL1d),
            vertex_attrib_l2d: resolve!(loader, "glVertexAttribL2d", VertexAttribL2d),
            vertex_attrib_l3d: resolve!(loader, "glVertexAttribL3d", VertexAttribL3d),
            vertex_attrib_l4d: resolve!(loader, "glVertexAttribL4d", VertexAttribL4d),
            vertex_attrib_ldv: [
                resolve!(loader, "glVertexAttribL1dv", VertexAttribLdv),
                resolve!(loader, "glVertexAttribL2dv", VertexAttribLdv),
                resolve!(loader, "glVertexAttribL3dv", VertexAttribLdv),
                resolve!(loader, "glVertexAttribL4dv", VertexAttribLdv),
            ],
            vertex_attrib_l_pointer: resolve!(
                loader,
                "glVertexAttribLPointer",
                VertexAttribLPointer
            ),
            get_vertex_attrib_ldv: resolve!(loader, "glGetVertexAttribLdv", GetVertexAttribLdv),
            vertex_array_vertex_attrib_l_offset_ext: resolve!(
                loader,
                "glVertexArrayVertexAttribLOffsetEXT",
                VertexArrayVertexAttribLOffsetExt
            ),
        }
    }

    /// Names of entry points the driver did not export.
    pub(crate) fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut note = |present: bool, name: &'static str| {
            if !present {
                missing.push(name);
            }
        };
        note(self.create_framebuffers.is_some(), "glCreateFramebuffers");
        note(
            self.named_framebuffer_draw_buffers.is_some(),
            "glNamedFramebufferDrawBuffers",
        );
        note(self.tex_image_3d_multisample.is_some(), "glTexImage3DMultisample");
        note(self.get_internalformativ.is_some(), "glGetInternalformativ");
        note(self.get_internalformati64v.is_some(), "glGetInternalformati64v");
        note(self.vertex_attrib_l1d.is_some(), "glVertexAttribL1d");
        note(self.vertex_attrib_l2d.is_some(), "glVertexAttribL2d");
        note(self.vertex_attrib_l3d.is_some(), "glVertexAttribL3d");
        note(self.vertex_attrib_l4d.is_some(), "glVertexAttribL4d");
        note(self.vertex_attrib_ldv.iter().all(Option::is_some), "glVertexAttribL{1,2,3,4}dv");
        note(self.vertex_attrib_l_pointer.is_some(), "glVertexAttribLPointer");
        note(self.get_vertex_attrib_ldv.is_some(), "glGetVertexAttribLdv");
        note(
            self.vertex_array_vertex_attrib_l_offset_ext.is_some(),
            "glVertexArrayVertexAttribLOffsetEXT",
        );
        missing
    }
}
