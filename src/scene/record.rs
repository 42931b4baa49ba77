//! Shared record handles and attribute addressing by name.
//!
//! Every live record is held behind a [`Shared`] handle. The scene graph, shapes that embed a
//! material, and the changes that animate a record all hold clones of the same handle, so a
//! mutation through any of them is visible to the others.

use std::{cell::RefCell, rc::Rc};

use crate::{
    foundation::error::{RayframeError, RayframeResult},
    scene::{
        model::{Camera, Light, Material, SceneConfig, Shape},
        value::AttrValue,
    },
};

/// Shared, interior-mutable handle to a record.
pub type Shared<T> = Rc<RefCell<T>>;

/// Type-erased handle used by changes to address any record kind.
pub type RecordHandle = Rc<RefCell<dyn Record>>;

/// Wrap a record in a fresh [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// A scene entity whose attributes can be read and written by name.
pub trait Record {
    /// Short kind label used in diagnostics (`camera`, `light`, `sphere`, ...).
    fn record_kind(&self) -> &'static str;

    /// Owned copy of the named attribute, or `None` if the record has no such attribute.
    fn get_attr(&self, name: &str) -> Option<AttrValue>;

    /// Overwrite the named attribute; the value must have the attribute's kind.
    fn set_attr(&mut self, name: &str, value: AttrValue) -> RayframeResult<()>;
}

/// Read an attribute, failing with [`RayframeError::MissingAttribute`] when absent.
pub fn read_attr(record: &dyn Record, name: &str) -> RayframeResult<AttrValue> {
    record
        .get_attr(name)
        .ok_or_else(|| RayframeError::missing_attribute(record.record_kind(), name))
}

fn missing<T>(kind: &str, name: &str) -> RayframeResult<T> {
    Err(RayframeError::missing_attribute(kind, name))
}

impl Record for Camera {
    fn record_kind(&self) -> &'static str {
        "camera"
    }

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        Some(match name {
            "width" => self.width.into(),
            "height" => self.height.into(),
            "position" => self.position.into(),
            "lookAt" => self.look_at.into(),
            "upVector" => self.up_vector.into(),
            "fov" => self.fov.into(),
            "exposure" => self.exposure.into(),
            _ => return None,
        })
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> RayframeResult<()> {
        let kind = self.record_kind();
        match name {
            "width" => self.width = value.into_u32(kind, name)?,
            "height" => self.height = value.into_u32(kind, name)?,
            "position" => self.position = value.into_vec3(kind, name)?,
            "lookAt" => self.look_at = value.into_vec3(kind, name)?,
            "upVector" => self.up_vector = value.into_vec3(kind, name)?,
            "fov" => self.fov = value.into_scalar(kind, name)?,
            "exposure" => self.exposure = value.into_scalar(kind, name)?,
            _ => return missing(kind, name),
        }
        Ok(())
    }
}

impl Record for Light {
    fn record_kind(&self) -> &'static str {
        "light"
    }

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "position" => Some(self.position.into()),
            "intensity" => Some(self.intensity.into()),
            _ => None,
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> RayframeResult<()> {
        let kind = self.record_kind();
        match name {
            "position" => self.position = value.into_vec3(kind, name)?,
            "intensity" => self.intensity = value.into_vec3(kind, name)?,
            _ => return missing(kind, name),
        }
        Ok(())
    }
}

impl Record for Material {
    fn record_kind(&self) -> &'static str {
        "material"
    }

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        Some(match name {
            "ks" => self.ks.into(),
            "kd" => self.kd.into(),
            "specularexponent" => self.specular_exponent.into(),
            "diffusecolor" => self.diffuse_color.into(),
            "diffusetexture" => self.diffuse_texture.clone().into(),
            "specularcolor" => self.specular_color.into(),
            "isreflective" => self.is_reflective.into(),
            "reflectivity" => self.reflectivity.into(),
            "isrefractive" => self.is_refractive.into(),
            "refractiveindex" => self.refractive_index.into(),
            _ => return None,
        })
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> RayframeResult<()> {
        let kind = self.record_kind();
        match name {
            "ks" => self.ks = value.into_scalar(kind, name)?,
            "kd" => self.kd = value.into_scalar(kind, name)?,
            "specularexponent" => self.specular_exponent = value.into_scalar(kind, name)?,
            "diffusecolor" => self.diffuse_color = value.into_vec3(kind, name)?,
            "diffusetexture" => self.diffuse_texture = value.into_text(kind, name)?,
            "specularcolor" => self.specular_color = value.into_vec3(kind, name)?,
            "isreflective" => self.is_reflective = value.into_bool(kind, name)?,
            "reflectivity" => self.reflectivity = value.into_scalar(kind, name)?,
            "isrefractive" => self.is_refractive = value.into_bool(kind, name)?,
            "refractiveindex" => self.refractive_index = value.into_scalar(kind, name)?,
            _ => return missing(kind, name),
        }
        Ok(())
    }
}

impl Record for SceneConfig {
    fn record_kind(&self) -> &'static str {
        "scene"
    }

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "backgroundcolor" => Some(self.backgroundcolor.into()),
            _ => None,
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> RayframeResult<()> {
        match name {
            "backgroundcolor" => {
                self.backgroundcolor = value.into_vec3(self.record_kind(), name)?;
                Ok(())
            }
            _ => missing(self.record_kind(), name),
        }
    }
}

// The nested material is reached through its own handle, not through the shape.
impl Record for Shape {
    fn record_kind(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Cylinder(_) => "cylinder",
            Self::Triangle(_) => "triangle",
        }
    }

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match (self, name) {
            (Self::Sphere(s), "center") => Some(s.center.into()),
            (Self::Sphere(s), "radius") => Some(s.radius.into()),
            (Self::Cylinder(c), "center") => Some(c.center.into()),
            (Self::Cylinder(c), "axis") => Some(c.axis.into()),
            (Self::Cylinder(c), "radius") => Some(c.radius.into()),
            (Self::Cylinder(c), "height") => Some(c.height.into()),
            (Self::Triangle(t), "v0") => Some(t.v0.into()),
            (Self::Triangle(t), "v1") => Some(t.v1.into()),
            (Self::Triangle(t), "v2") => Some(t.v2.into()),
            _ => None,
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> RayframeResult<()> {
        let kind = self.record_kind();
        match (self, name) {
            (Self::Sphere(s), "center") => s.center = value.into_vec3(kind, name)?,
            (Self::Sphere(s), "radius") => s.radius = value.into_scalar(kind, name)?,
            (Self::Cylinder(c), "center") => c.center = value.into_vec3(kind, name)?,
            (Self::Cylinder(c), "axis") => c.axis = value.into_vec3(kind, name)?,
            (Self::Cylinder(c), "radius") => c.radius = value.into_scalar(kind, name)?,
            (Self::Cylinder(c), "height") => c.height = value.into_scalar(kind, name)?,
            (Self::Triangle(t), "v0") => t.v0 = value.into_vec3(kind, name)?,
            (Self::Triangle(t), "v1") => t.v1 = value.into_vec3(kind, name)?,
            (Self::Triangle(t), "v2") => t.v2 = value.into_vec3(kind, name)?,
            _ => return missing(kind, name),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/record.rs"]
mod tests;
