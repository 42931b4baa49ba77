use crate::{
    foundation::{
        core::Vec3,
        error::{RayframeError, RayframeResult},
    },
    scene::{
        model::{Camera, Light, RootConfig, SceneConfig, Shape},
        record::Shared,
    },
};

/// One frame's complete scene document, as consumed by the ray tracer.
///
/// A document is a detached snapshot: later mutation of the live records does not reach it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RootDocument {
    /// Maximum number of ray bounces.
    pub nbounces: u32,
    /// Shading mode.
    pub rendermode: String,
    /// Camera state for this frame.
    pub camera: Camera,
    /// Lights, shapes and background.
    pub scene: SceneDocument,
}

/// The `scene` section of a [`RootDocument`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDocument {
    /// Background colour.
    pub backgroundcolor: Vec3,
    /// Light sources in registration order.
    #[serde(default)]
    pub lightsources: Vec<Light>,
    /// Shapes in registration order.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// Merge the current record state into one document.
pub fn assemble(
    root: &RootConfig,
    scene: &SceneConfig,
    camera: &Camera,
    shapes: &[Shared<Shape>],
    lights: &[Shared<Light>],
) -> RootDocument {
    RootDocument {
        nbounces: root.nbounces,
        rendermode: root.rendermode.clone(),
        camera: camera.clone(),
        scene: SceneDocument {
            backgroundcolor: scene.backgroundcolor,
            lightsources: lights.iter().map(|l| l.borrow().clone()).collect(),
            shapes: shapes.iter().map(|s| s.borrow().snapshot()).collect(),
        },
    }
}

impl RootDocument {
    /// Serialize as pretty JSON with `indent` spaces per level.
    pub fn to_json_bytes(&self, indent: usize) -> RayframeResult<Vec<u8>> {
        use serde::Serialize as _;

        let indent = vec![b' '; indent];
        let mut out = Vec::with_capacity(4096);
        let fmt = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
        self.serialize(&mut ser)
            .map_err(|e| RayframeError::serde(format!("encode frame document: {e}")))?;
        Ok(out)
    }

    /// Parse a document previously produced by [`RootDocument::to_json_bytes`].
    pub fn from_json_slice(bytes: &[u8]) -> RayframeResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| RayframeError::serde(format!("decode frame document: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
