use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    animation::{
        change::{Change, Target},
        driver::{AnimationContext, DriverOpts},
    },
    foundation::{
        core::{FrameIndex, Vec3},
        error::{RayframeError, RayframeResult},
    },
    project::record_ref::RecordRef,
    scene::{
        graph::SceneGraph,
        import::import_shapes,
        model::{Camera, Light, Material, RootConfig, SceneConfig, Shape},
    },
};

/// A JSON project describing the starting scene and the changes to animate.
///
/// Every field is optional; missing fields fall back to the record defaults.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectFile {
    pub nbounces: u32,
    pub rendermode: String,
    pub camera: Camera,
    pub backgroundcolor: Vec3,
    /// Materials shapes can refer to by name.
    pub materials: BTreeMap<String, Material>,
    pub lights: Vec<Light>,
    /// Shapes as JSON objects. A string `material` names an entry of `materials`; an object is
    /// an inline material; no `material` gives the default one.
    pub shapes: Vec<serde_json::Value>,
    /// Fragments appended after `shapes`, in order.
    pub imports: Vec<ImportSpec>,
    pub changes: Vec<ChangeSpec>,
    pub output_start: u64,
    /// Frames to tick. Defaults to [`DriverOpts::default`]'s count.
    pub frames: Option<u64>,
}

impl Default for ProjectFile {
    fn default() -> Self {
        let root = RootConfig::default();
        Self {
            nbounces: root.nbounces,
            rendermode: root.rendermode,
            camera: Camera::default(),
            backgroundcolor: SceneConfig::default().backgroundcolor,
            materials: BTreeMap::new(),
            lights: Vec::new(),
            shapes: Vec::new(),
            imports: Vec::new(),
            changes: Vec::new(),
            output_start: 0,
            frames: None,
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportSpec {
    /// Relative paths resolve against the project file's directory.
    pub path: PathBuf,
    #[serde(default)]
    pub translate: Vec3,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeSpec {
    pub target: RecordRef,
    pub attribute: String,
    pub to: Target,
    pub start: u64,
    pub end: u64,
}

impl ProjectFile {
    pub fn from_path(path: impl AsRef<Path>) -> RayframeResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read project '{}'", path.display()))?;
        Self::from_json_slice(&bytes)
            .map_err(|e| RayframeError::serde(format!("{}: {e}", path.display())))
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Driver window from `output_start` and `frames`.
    pub fn driver_opts(&self) -> DriverOpts {
        let defaults = DriverOpts::default();
        DriverOpts {
            output_start: FrameIndex(self.output_start),
            frame_count: self.frames.unwrap_or(defaults.frame_count),
        }
    }

    /// Build the record graph and timeline. Import paths resolve against `base_dir`.
    #[tracing::instrument(skip(self, base_dir), fields(base = %base_dir.as_ref().display()))]
    pub fn build(&self, base_dir: impl AsRef<Path>) -> RayframeResult<AnimationContext> {
        let base_dir = base_dir.as_ref();
        let root = RootConfig {
            nbounces: self.nbounces,
            rendermode: self.rendermode.clone(),
        };
        let scene = SceneConfig {
            backgroundcolor: self.backgroundcolor,
        };
        let mut graph = SceneGraph::new(root, scene, self.camera.clone());

        for (name, material) in &self.materials {
            graph.add_material(name.clone(), material.clone())?;
        }
        for light in &self.lights {
            graph.add_light(light.clone());
        }
        for (index, raw) in self.shapes.iter().enumerate() {
            let shape = shape_from_json(&graph, index, raw)?;
            graph.add_shape(shape);
        }
        for import in &self.imports {
            let path = if import.path.is_relative() {
                base_dir.join(&import.path)
            } else {
                import.path.clone()
            };
            graph.extend_shapes(import_shapes(&path, import.translate)?);
        }

        let changes = self
            .changes
            .iter()
            .map(|entry| {
                Change::new(
                    entry.target.resolve(&graph)?,
                    entry.attribute.as_str(),
                    entry.to.clone(),
                    FrameIndex(entry.start),
                    FrameIndex(entry.end),
                )
            })
            .collect::<RayframeResult<Vec<_>>>()?;

        let mut ctx = AnimationContext::new(graph);
        ctx.timeline.extend(changes);

        tracing::debug!(
            shapes = ctx.graph.shapes.len(),
            lights = ctx.graph.lights.len(),
            changes = ctx.timeline.len(),
            "project built"
        );
        Ok(ctx)
    }
}

fn shape_from_json(
    graph: &SceneGraph,
    index: usize,
    raw: &serde_json::Value,
) -> RayframeResult<Shape> {
    let mut raw = raw.clone();
    let named = match raw.get("material") {
        Some(serde_json::Value::String(name)) => Some(name.clone()),
        _ => None,
    };
    if named.is_some()
        && let Some(obj) = raw.as_object_mut()
    {
        obj.remove("material");
    }

    let shape: Shape = serde_json::from_value(raw)
        .map_err(|e| RayframeError::serde(format!("shape #{index}: {e}")))?;
    match named {
        None => Ok(shape),
        Some(name) => {
            let material = graph.material(&name).ok_or_else(|| {
                RayframeError::config(format!("shape #{index} uses unknown material '{name}'"))
            })?;
            Ok(shape.with_material(material))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/file.rs"]
mod tests;
