//! `arb_vertex_attrib_64bit/zero-vertex-attrib`.
//!
//! ARB_vertex_attrib_64bit: "The error INVALID_OPERATION is generated if
//! index is zero, as there is no current value for generic attribute zero."
//! The sentence is written for `GetVertexAttribLdv` but the reason applies to
//! every `L` entry point, so each one is called with index 0.

use gl_conform_core::config::{Skip, TestConfig};
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl;
use gl_conform_core::{CheckRunner, ConformanceTest, GlApi, Visual};

const ZERO_INDEX: u32 = 0;
const DOUBLES: [f64; 4] = [1.0; 4];

type Call = fn(&mut dyn GlApi);

#[rustfmt::skip]
const ENTRY_POINTS: &[(&str, Call)] = &[
    ("VertexAttribL1d", |ctx| ctx.vertex_attrib_l(ZERO_INDEX, &DOUBLES[..1])),
    ("VertexAttribL2d", |ctx| ctx.vertex_attrib_l(ZERO_INDEX, &DOUBLES[..2])),
    ("VertexAttribL3d", |ctx| ctx.vertex_attrib_l(ZERO_INDEX, &DOUBLES[..3])),
    ("VertexAttribL4d", |ctx| ctx.vertex_attrib_l(ZERO_INDEX, &DOUBLES[..4])),
    ("VertexAttribL1dv", |ctx| ctx.vertex_attrib_lv(ZERO_INDEX, &DOUBLES[..1])),
    ("VertexAttribL2dv", |ctx| ctx.vertex_attrib_lv(ZERO_INDEX, &DOUBLES[..2])),
    ("VertexAttribL3dv", |ctx| ctx.vertex_attrib_lv(ZERO_INDEX, &DOUBLES[..3])),
    ("VertexAttribL4dv", |ctx| ctx.vertex_attrib_lv(ZERO_INDEX, &DOUBLES[..4])),
    ("VertexAttribLPointer", |ctx| ctx.vertex_attrib_l_pointer(ZERO_INDEX, 2, gl::DOUBLE, 0, 0)),
    ("GetVertexAttribLdv", |ctx| {
        let mut params = DOUBLES;
        ctx.get_vertex_attrib_ldv(ZERO_INDEX, gl::CURRENT_VERTEX_ATTRIB, &mut params);
    }),
];

pub struct ZeroVertexAttrib;

impl ConformanceTest for ZeroVertexAttrib {
    fn name(&self) -> &'static str {
        "arb_vertex_attrib_64bit/zero-vertex-attrib"
    }

    fn description(&self) -> &'static str {
        "Every 64-bit attribute entry point rejects index 0 with INVALID_OPERATION"
    }

    fn config(&self) -> TestConfig {
        TestConfig::new().core(33).visual(Visual::RGB | Visual::DOUBLE)
    }

    fn run(&self, r: &mut CheckRunner<'_>) -> Result<(), Skip> {
        r.require_version(2, 0)?;
        r.require_extension("GL_ARB_vertex_attrib_64bit")?;

        for &(name, call) in ENTRY_POINTS {
            r.subtest(name, |r| {
                r.expect_error(format!("{name} with index 0"), ErrorCode::InvalidOperation, call);
            });
        }

        if r.gl().has_extension("GL_EXT_direct_state_access") {
            let vao = r.setup("GenVertexArrays", |ctx| {
                let vao = ctx.gen_vertex_array();
                ctx.bind_vertex_array(vao);
                vao
            });
            r.subtest("VertexArrayVertexAttribLOffsetEXT", |r| {
                r.expect_error(
                    "VertexArrayVertexAttribLOffsetEXT with index 0",
                    ErrorCode::InvalidOperation,
                    |ctx| ctx.vertex_array_vertex_attrib_l_offset_ext(vao, 0, ZERO_INDEX, 3, gl::DOUBLE, 0, 0),
                );
            });
            let ctx = r.gl();
            ctx.bind_vertex_array(0);
            ctx.delete_vertex_array(vao);
        }
        Ok(())
    }
}
