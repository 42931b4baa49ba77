use std::collections::BTreeMap;

use crate::{
    foundation::error::{RayframeError, RayframeResult},
    scene::{
        document::{RootDocument, assemble},
        model::{Camera, Light, Material, RootConfig, SceneConfig, Shape},
        record::{Shared, shared},
    },
};

/// The live record store for one generation run.
///
/// Holds the longest-lived handle to every record. Changes and shapes hold clones of these
/// handles.
#[derive(Debug, Default)]
pub struct SceneGraph {
    /// Render settings written at the top of each document.
    pub root: RootConfig,
    /// Scene-wide settings.
    pub scene: Shared<SceneConfig>,
    /// The single camera.
    pub camera: Shared<Camera>,
    /// Light sources in document order.
    pub lights: Vec<Shared<Light>>,
    /// Shapes in document order.
    pub shapes: Vec<Shared<Shape>>,
    /// Named materials; shapes referring to the same name share one handle.
    pub materials: BTreeMap<String, Shared<Material>>,
}

impl SceneGraph {
    pub fn new(root: RootConfig, scene: SceneConfig, camera: Camera) -> Self {
        Self {
            root,
            scene: shared(scene),
            camera: shared(camera),
            lights: Vec::new(),
            shapes: Vec::new(),
            materials: BTreeMap::new(),
        }
    }

    pub fn add_light(&mut self, light: Light) -> Shared<Light> {
        let handle = shared(light);
        self.lights.push(handle.clone());
        handle
    }

    pub fn add_shape(&mut self, shape: Shape) -> Shared<Shape> {
        let handle = shared(shape);
        self.shapes.push(handle.clone());
        handle
    }

    /// Append shapes (for example the result of [`crate::import_shapes`]) in order.
    pub fn extend_shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes.into_iter().map(shared));
    }

    /// Register a named material.
    pub fn add_material(
        &mut self,
        name: impl Into<String>,
        material: Material,
    ) -> RayframeResult<Shared<Material>> {
        let name = name.into();
        if self.materials.contains_key(&name) {
            return Err(RayframeError::config(format!(
                "duplicate material name '{name}'"
            )));
        }
        let handle = shared(material);
        self.materials.insert(name, handle.clone());
        Ok(handle)
    }

    pub fn material(&self, name: &str) -> Option<Shared<Material>> {
        self.materials.get(name).cloned()
    }

    /// Snapshot the current state as a frame document.
    pub fn assemble(&self) -> RootDocument {
        assemble(
            &self.root,
            &self.scene.borrow(),
            &self.camera.borrow(),
            &self.shapes,
            &self.lights,
        )
    }
}
