//! What kind of context the reference GL pretends to be.
//!
//! A [`ReferenceProfile`] is plain data loaded from JSON. Every field has a
//! default, so a profile file only needs to name what it changes:
//!
//! ```json
//! { "version": { "major": 4, "minor": 5, "profile": "core" },
//!   "quirks": ["accept_negative_layer"] }
//! ```

use crate::error::ReferenceError;
use crate::quirk::Quirk;
use gl_conform_core::api::{GlVersion, Profile, SurfaceInfo};
use gl_conform_core::gl::MAX_COLOR_ATTACHMENT_ENUMS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Most generic vertex attributes a profile may advertise.
pub const MAX_VERTEX_ATTRIBS_LIMIT: u32 = 1024;

/// Extensions a default profile advertises.
pub const ALL_EXTENSIONS: &[&str] = &[
    "GL_ARB_clear_texture",
    "GL_ARB_compute_shader",
    "GL_ARB_direct_state_access",
    "GL_ARB_framebuffer_object",
    "GL_ARB_framebuffer_sRGB",
    "GL_ARB_geometry_shader4",
    "GL_ARB_internalformat_query2",
    "GL_ARB_shader_image_load_store",
    "GL_ARB_tessellation_shader",
    "GL_ARB_texture_buffer_object",
    "GL_ARB_texture_cube_map_array",
    "GL_ARB_texture_gather",
    "GL_ARB_texture_multisample",
    "GL_ARB_texture_rectangle",
    "GL_ARB_texture_sRGB_decode",
    "GL_ARB_texture_view",
    "GL_ARB_vertex_attrib_64bit",
    "GL_EXT_direct_state_access",
    "GL_EXT_texture_array",
    "GL_EXT_texture_sRGB",
];

/// Implementation-dependent limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_draw_buffers: u32,
    pub max_color_attachments: u32,
    pub max_vertex_attribs: u32,
    pub max_samples: u32,
    pub max_texture_size: u32,
    pub max_3d_texture_size: u32,
    pub max_array_texture_layers: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_draw_buffers: 8,
            max_color_attachments: 8,
            max_vertex_attribs: 16,
            max_samples: 8,
            max_texture_size: 16384,
            max_3d_texture_size: 2048,
            max_array_texture_layers: 2048,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceProfile {
    pub version: GlVersion,
    pub extensions: Vec<String>,
    pub limits: Limits,
    pub surface: SurfaceInfo,
    pub quirks: Vec<Quirk>,
}

impl Default for ReferenceProfile {
    fn default() -> Self {
        Self {
            version: GlVersion::new(4, 6, Profile::Compatibility),
            extensions: ALL_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            limits: Limits::default(),
            surface: SurfaceInfo::default(),
            quirks: Vec::new(),
        }
    }
}

impl ReferenceProfile {
    /// A conformant compatibility 4.6 context with every extension.
    pub fn conformant() -> Self {
        Self::default()
    }

    /// A conformant context of the given version and profile.
    pub fn with_version(major: u32, minor: u32, profile: Profile) -> Self {
        Self {
            version: GlVersion::new(major, minor, profile),
            ..Self::default()
        }
    }

    pub fn with_quirk(mut self, quirk: Quirk) -> Self {
        self.quirks.push(quirk);
        self
    }

    pub fn without_extension(mut self, name: &str) -> Self {
        self.extensions.retain(|e| e != name);
        self
    }

    pub fn has_quirk(&self, quirk: Quirk) -> bool {
        self.quirks.contains(&quirk)
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    /// Rejects limits no GL implementation could report.
    pub fn validate(&self) -> Result<(), ReferenceError> {
        let l = &self.limits;
        if l.max_draw_buffers == 0 || l.max_draw_buffers > MAX_COLOR_ATTACHMENT_ENUMS {
            return Err(ReferenceError::Invalid(format!(
                "max_draw_buffers must be between 1 and {MAX_COLOR_ATTACHMENT_ENUMS}"
            )));
        }
        if l.max_color_attachments == 0 || l.max_color_attachments >= MAX_COLOR_ATTACHMENT_ENUMS {
            return Err(ReferenceError::Invalid(format!(
                "max_color_attachments must be between 1 and {}",
                MAX_COLOR_ATTACHMENT_ENUMS - 1
            )));
        }
        if !(2..=MAX_VERTEX_ATTRIBS_LIMIT).contains(&l.max_vertex_attribs) {
            return Err(ReferenceError::Invalid(format!(
                "max_vertex_attribs must be between 2 and {MAX_VERTEX_ATTRIBS_LIMIT}"
            )));
        }
        if l.max_samples == 0 {
            return Err(ReferenceError::Invalid("max_samples must be at least 1".into()));
        }
        // Every limit is reported through a signed integer query.
        let queried = [
            ("max_samples", l.max_samples),
            ("max_texture_size", l.max_texture_size),
            ("max_3d_texture_size", l.max_3d_texture_size),
            ("max_array_texture_layers", l.max_array_texture_layers),
        ];
        if let Some((name, _)) = queried.iter().find(|(_, v)| i32::try_from(*v).is_err()) {
            return Err(ReferenceError::Invalid(format!(
                "{name} does not fit a GL integer"
            )));
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, ReferenceError> {
        let profile: Self =
            serde_json::from_str(text).map_err(|e| ReferenceError::Parse(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let text = fs::read_to_string(path).map_err(|e| ReferenceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let profile = Self::from_json(&text)?;
        log::info!(
            "loaded profile {}: GL {}, {} quirk(s)",
            path.display(),
            profile.version,
            profile.quirks.len()
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_conform_core::api::Visual;
    use std::io::Write;

    #[test]
    fn empty_object_is_the_conformant_profile() {
        let p = ReferenceProfile::from_json("{}").unwrap();
        assert_eq!(p, ReferenceProfile::conformant());
        assert!(p.has_extension("GL_ARB_internalformat_query2"));
    }

    #[test]
    fn partial_profile_overrides_only_named_fields() {
        let text = r#"{
            "version": { "major": 4, "minor": 5, "profile": "core" },
            "limits": { "max_draw_buffers": 4 },
            "quirks": ["accept_negative_layer", { "inadmissible_answer": 33420 }]
        }"#;
        let p = ReferenceProfile::from_json(text).unwrap();
        assert_eq!(p.version, GlVersion::new(4, 5, Profile::Core));
        assert_eq!(p.limits.max_draw_buffers, 4);
        assert_eq!(p.limits.max_color_attachments, 8);
        assert!(p.has_quirk(Quirk::AcceptNegativeLayer));
        assert!(p.has_quirk(Quirk::InadmissibleAnswer(33420)));
    }

    #[test]
    fn impossible_limits_are_rejected() {
        let err = ReferenceProfile::from_json(r#"{"limits": {"max_color_attachments": 32}}"#)
            .unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid(_)));
        let err = ReferenceProfile::from_json(r#"{"limits": {"max_draw_buffers": 0}}"#)
            .unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid(_)));
    }

    #[test]
    fn limits_past_what_a_context_can_report_are_rejected() {
        let huge = r#"{"limits": {"max_vertex_attribs": 4294967295, "max_draw_buffers": 4294967295}}"#;
        assert!(matches!(
            ReferenceProfile::from_json(huge),
            Err(ReferenceError::Invalid(_))
        ));
        for text in [
            r#"{"limits": {"max_vertex_attribs": 1025}}"#,
            r#"{"limits": {"max_draw_buffers": 33}}"#,
            r#"{"limits": {"max_draw_buffers": 2147483647}}"#,
            r#"{"limits": {"max_texture_size": 2147483648}}"#,
        ] {
            let err = ReferenceProfile::from_json(text).unwrap_err();
            assert!(matches!(err, ReferenceError::Invalid(_)), "{text}");
        }
        let edge = r#"{"limits": {"max_vertex_attribs": 1024, "max_draw_buffers": 32, "max_color_attachments": 31}}"#;
        assert!(ReferenceProfile::from_json(edge).is_ok());
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = ReferenceProfile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ReferenceError::Parse(_)));
        let err = ReferenceProfile::from_json(r#"{"quirks": ["no_such_quirk"]}"#).unwrap_err();
        assert!(matches!(err, ReferenceError::Parse(_)));
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"surface": {{"visual": "RGB", "uses_fbo": true, "no_error": false}}}}"#)
            .unwrap();
        let p = ReferenceProfile::load(file.path()).unwrap();
        assert!(p.surface.uses_fbo);
        assert_eq!(p.surface.visual, Visual::RGB);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceProfile::load(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, ReferenceError::Io { .. }));
    }

    #[test]
    fn builders_compose() {
        let p = ReferenceProfile::with_version(3, 3, Profile::Core)
            .without_extension("GL_EXT_direct_state_access")
            .with_quirk(Quirk::AcceptZeroAttribIndex);
        assert!(!p.has_extension("GL_EXT_direct_state_access"));
        assert!(p.has_quirk(Quirk::AcceptZeroAttribIndex));
        assert!(p.validate().is_ok());
    }
}
