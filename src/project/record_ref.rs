use crate::{
    foundation::error::{RayframeError, RayframeResult},
    scene::{graph::SceneGraph, record::RecordHandle},
};

/// Address of a record inside a [`SceneGraph`], as written in project files.
///
/// Spelled `camera`, `scene`, `light/<index>`, `shape/<index>` or `material/<name>`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum RecordRef {
    Camera,
    Scene,
    Light(usize),
    Shape(usize),
    Material(String),
}

impl std::str::FromStr for RecordRef {
    type Err = RayframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || {
            RayframeError::config(format!(
                "invalid change target '{s}' (expected camera, scene, light/<i>, shape/<i> or material/<name>)"
            ))
        };
        let index = |raw: &str| raw.parse::<usize>().map_err(|_| bad());

        match s.split_once('/') {
            None if s == "camera" => Ok(Self::Camera),
            None if s == "scene" => Ok(Self::Scene),
            Some(("light", i)) => Ok(Self::Light(index(i)?)),
            Some(("shape", i)) => Ok(Self::Shape(index(i)?)),
            Some(("material", name)) if !name.is_empty() => Ok(Self::Material(name.to_owned())),
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for RecordRef {
    type Error = RayframeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for RecordRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Scene => f.write_str("scene"),
            Self::Light(i) => write!(f, "light/{i}"),
            Self::Shape(i) => write!(f, "shape/{i}"),
            Self::Material(name) => write!(f, "material/{name}"),
        }
    }
}

impl RecordRef {
    /// Resolve to a live handle in `graph`.
    pub fn resolve(&self, graph: &SceneGraph) -> RayframeResult<RecordHandle> {
        let handle: Option<RecordHandle> = match self {
            Self::Camera => Some(graph.camera.clone() as RecordHandle),
            Self::Scene => Some(graph.scene.clone() as RecordHandle),
            Self::Light(i) => graph.lights.get(*i).map(|h| h.clone() as RecordHandle),
            Self::Shape(i) => graph.shapes.get(*i).map(|h| h.clone() as RecordHandle),
            Self::Material(name) => graph.material(name).map(|h| h as RecordHandle),
        };
        handle.ok_or_else(|| RayframeError::config(format!("change target '{self}' does not exist")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/record_ref.rs"]
mod tests;
