use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Vec3,
        error::{RayframeError, RayframeResult},
    },
    scene::model::Shape,
};

#[derive(serde::Deserialize)]
struct Fragment {
    scene: FragmentScene,
}

#[derive(serde::Deserialize)]
struct FragmentScene {
    #[serde(default)]
    shapes: Vec<Shape>,
}

/// Load `scene.shapes` from a previously emitted document and move each one by `translation`.
///
/// Everything else in the document is ignored. Each imported shape owns a fresh material.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn import_shapes(path: impl AsRef<Path>, translation: Vec3) -> RayframeResult<Vec<Shape>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read shape fragment '{}'", path.display()))?;
    let mut shapes = parse_fragment(&bytes)
        .map_err(|e| RayframeError::serde(format!("{}: {e}", path.display())))?;
    translate_shapes(&mut shapes, translation);
    tracing::debug!(count = shapes.len(), "imported shapes");
    Ok(shapes)
}

/// Translate every shape in place.
pub fn translate_shapes(shapes: &mut [Shape], translation: Vec3) {
    for shape in shapes {
        shape.translate(translation);
    }
}

fn parse_fragment(bytes: &[u8]) -> Result<Vec<Shape>, serde_json::Error> {
    let fragment: Fragment = serde_json::from_slice(bytes)?;
    Ok(fragment.scene.shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/import.rs"]
mod tests;
