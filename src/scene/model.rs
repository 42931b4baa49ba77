use crate::{
    foundation::core::{Vec3, translate3},
    scene::record::{Shared, shared},
};

/// Global render settings at the top of every frame document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Maximum number of ray bounces.
    pub nbounces: u32,
    /// Shading mode understood by the ray tracer (`phong`, `binary`, ...).
    pub rendermode: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            nbounces: 10,
            rendermode: "phong".to_owned(),
        }
    }
}

/// Scene-wide settings that are not lights or shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Colour returned by rays that hit nothing.
    pub backgroundcolor: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            backgroundcolor: [0.25, 0.25, 0.25],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraKind {
    #[default]
    Pinhole,
    ThinLens,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Camera {
    #[serde(rename = "type")]
    pub kind: CameraKind,
    pub width: u32,
    pub height: u32,
    pub position: Vec3,
    #[serde(rename = "lookAt")]
    pub look_at: Vec3,
    #[serde(rename = "upVector")]
    pub up_vector: Vec3,
    pub fov: f64,
    pub exposure: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            kind: CameraKind::Pinhole,
            width: 1200,
            height: 800,
            position: [0.0, 0.0, 0.0],
            look_at: [0.0, 0.0, 1.0],
            up_vector: [0.0, 1.0, 0.0],
            fov: 45.0,
            exposure: 0.1,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    #[default]
    PointLight,
    AreaLight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    #[serde(rename = "type", default)]
    pub kind: LightKind,
    pub position: Vec3,
    pub intensity: Vec3, // per-channel rgb
}

impl Light {
    pub fn point(position: Vec3, intensity: Vec3) -> Self {
        Self {
            kind: LightKind::PointLight,
            position,
            intensity,
        }
    }
}

/// Surface description shared by every shape kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Material {
    pub ks: f64,
    pub kd: f64,
    #[serde(rename = "specularexponent")]
    pub specular_exponent: f64,
    #[serde(rename = "diffusecolor")]
    pub diffuse_color: Vec3,
    /// Texture image path; `None` is written as `null`.
    #[serde(
        rename = "diffusetexture",
        default,
        deserialize_with = "texture_from_json"
    )]
    pub diffuse_texture: Option<String>,
    #[serde(rename = "specularcolor")]
    pub specular_color: Vec3,
    #[serde(rename = "isreflective")]
    pub is_reflective: bool,
    pub reflectivity: f64,
    #[serde(rename = "isrefractive")]
    pub is_refractive: bool,
    #[serde(rename = "refractiveindex")]
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ks: 0.1,
            kd: 0.9,
            specular_exponent: 10.0,
            diffuse_color: [1.0, 0.0, 0.0],
            diffuse_texture: None,
            specular_color: [1.0, 1.0, 1.0],
            is_reflective: false,
            reflectivity: 1.0,
            is_refractive: false,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    pub fn diffuse(color: Vec3) -> Self {
        Self {
            diffuse_color: color,
            ..Self::default()
        }
    }
}

// Older documents spell "no texture" as the string "null".
fn texture_from_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.filter(|s| s != "null"))
}

fn default_material() -> Shared<Material> {
    shared(Material::default())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    #[serde(default = "default_material")]
    pub material: Shared<Material>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cylinder {
    pub center: Vec3,
    pub axis: Vec3,
    pub radius: f64,
    pub height: f64,
    #[serde(default = "default_material")]
    pub material: Shared<Material>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    #[serde(default = "default_material")]
    pub material: Shared<Material>,
}

/// Renderable primitive. Cloning shares the material handle; use [`Shape::snapshot`] for a
/// detached copy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Triangle(Triangle),
}

impl Shape {
    /// Sphere with its own default material.
    pub fn sphere(center: Vec3, radius: f64) -> Self {
        Self::Sphere(Sphere {
            center,
            radius,
            material: default_material(),
        })
    }

    pub fn cylinder(center: Vec3, axis: Vec3, radius: f64, height: f64) -> Self {
        Self::Cylinder(Cylinder {
            center,
            axis,
            radius,
            height,
            material: default_material(),
        })
    }

    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self::Triangle(Triangle {
            v0,
            v1,
            v2,
            material: default_material(),
        })
    }

    /// Replace the material handle; shapes given the same handle share mutations.
    pub fn with_material(mut self, material: Shared<Material>) -> Self {
        *self.material_mut() = material;
        self
    }

    pub fn material(&self) -> &Shared<Material> {
        match self {
            Self::Sphere(s) => &s.material,
            Self::Cylinder(c) => &c.material,
            Self::Triangle(t) => &t.material,
        }
    }

    fn material_mut(&mut self) -> &mut Shared<Material> {
        match self {
            Self::Sphere(s) => &mut s.material,
            Self::Cylinder(c) => &mut c.material,
            Self::Triangle(t) => &mut t.material,
        }
    }

    /// Deep copy with a material that no longer aliases the live one.
    pub fn snapshot(&self) -> Self {
        let mut out = self.clone();
        let material = self.material().borrow().clone();
        *out.material_mut() = shared(material);
        out
    }

    /// Move the shape by `t`: the center of spheres and cylinders, every vertex of triangles.
    pub fn translate(&mut self, t: Vec3) {
        match self {
            Self::Sphere(s) => s.center = translate3(s.center, t),
            Self::Cylinder(c) => c.center = translate3(c.center, t),
            Self::Triangle(tri) => {
                tri.v0 = translate3(tri.v0, t);
                tri.v1 = translate3(tri.v1, t);
                tri.v2 = translate3(tri.v2, t);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
