use super::*;
use crate::scene::{
    model::{Camera, Light, Material},
    record::{Shared, shared},
};

fn dark_light() -> Shared<Light> {
    shared(Light::point([0.0, 1.0, 0.5], [0.0, 0.0, 0.0]))
}

fn approx(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-4)
}

#[test]
fn light_fades_in_linearly() {
    let light = dark_light();
    let mut c = Change::new(
        light.clone(),
        "intensity",
        [0.5, 0.5, 0.5],
        FrameIndex(0),
        FrameIndex(15),
    )
    .unwrap();

    for f in 0..=5 {
        c.evaluate(FrameIndex(f)).unwrap();
    }
    let v = light.borrow().intensity;
    assert!(approx(&v, &[0.1667, 0.1667, 0.1667]), "{v:?}");

    for f in 6..=15 {
        c.evaluate(FrameIndex(f)).unwrap();
    }
    assert_eq!(light.borrow().intensity, [0.5, 0.5, 0.5]);
}

#[test]
fn start_frame_only_arms() {
    let cam = shared(Camera::new([0.0, 0.75, -0.25], [0.0, 0.35, 1.0]));
    let mut c = Change::new(
        cam.clone(),
        "position",
        [-12.0, 12.0, -50.0],
        FrameIndex(25),
        FrameIndex(50),
    )
    .unwrap();

    for f in 0..=25 {
        c.evaluate(FrameIndex(f)).unwrap();
        assert_eq!(cam.borrow().position, [0.0, 0.75, -0.25], "frame {f}");
    }
    c.evaluate(FrameIndex(26)).unwrap();
    assert_ne!(cam.borrow().position, [0.0, 0.75, -0.25]);
}

#[test]
fn end_frame_is_exactly_the_target() {
    let mat = shared(Material {
        diffuse_color: [0.1, 0.2, 0.3],
        ..Material::default()
    });
    let target = [235.0 / 255.0, 196.0 / 255.0, 23.0 / 255.0];
    let mut c = Change::new(mat.clone(), "diffusecolor", target, FrameIndex(45), FrameIndex(75))
        .unwrap();
    for f in 45..=75 {
        c.evaluate(FrameIndex(f)).unwrap();
    }
    assert_eq!(mat.borrow().diffuse_color, target);

    // Frames past the end leave the value alone.
    mat.borrow_mut().diffuse_color = [0.0, 0.0, 0.0];
    c.evaluate(FrameIndex(76)).unwrap();
    assert_eq!(mat.borrow().diffuse_color, [0.0, 0.0, 0.0]);
}

#[test]
fn scalar_attribute_interpolates() {
    let mat = shared(Material::default());
    let mut c = Change::new(mat.clone(), "reflectivity", 0.9, FrameIndex(0), FrameIndex(20)).unwrap();
    for f in 0..=10 {
        c.evaluate(FrameIndex(f)).unwrap();
    }
    assert!((mat.borrow().reflectivity - 0.95).abs() < 1e-12);
    for f in 11..=20 {
        c.evaluate(FrameIndex(f)).unwrap();
    }
    assert_eq!(mat.borrow().reflectivity, 0.9);
}

#[test]
fn activation_picks_up_earlier_change() {
    let scene = shared(crate::scene::model::SceneConfig {
        backgroundcolor: [0.0, 0.0, 0.0],
    });
    let mut first = Change::new(
        scene.clone(),
        "backgroundcolor",
        [1.0, 1.0, 1.0],
        FrameIndex(0),
        FrameIndex(10),
    )
    .unwrap();
    let mut second = Change::new(
        scene.clone(),
        "backgroundcolor",
        [0.0, 0.0, 1.0],
        FrameIndex(10),
        FrameIndex(20),
    )
    .unwrap();

    for f in 0..=10 {
        first.evaluate(FrameIndex(f)).unwrap();
        second.evaluate(FrameIndex(f)).unwrap();
    }
    assert_eq!(second.activation(), &AttrValue::Vector(vec![1.0, 1.0, 1.0]));
    assert_eq!(second.initial(), &AttrValue::Vector(vec![0.0, 0.0, 0.0]));

    second.evaluate(FrameIndex(15)).unwrap();
    assert_eq!(scene.borrow().backgroundcolor, [0.5, 0.5, 1.0]);
}

#[test]
fn rearm_happens_once_per_pass() {
    let light = dark_light();
    let mut c = Change::new(light.clone(), "intensity", [1.0, 1.0, 1.0], FrameIndex(2), FrameIndex(4))
        .unwrap();
    c.evaluate(FrameIndex(2)).unwrap();
    light.borrow_mut().intensity = [0.25, 0.25, 0.25];
    c.evaluate(FrameIndex(2)).unwrap();
    assert_eq!(c.activation(), &AttrValue::Vector(vec![0.0, 0.0, 0.0]));

    c.reset().unwrap();
    light.borrow_mut().intensity = [0.25, 0.25, 0.25];
    c.evaluate(FrameIndex(2)).unwrap();
    assert_eq!(c.activation(), &AttrValue::Vector(vec![0.25, 0.25, 0.25]));
}

#[test]
fn reset_restores_construction_value() {
    let light = dark_light();
    let mut c = Change::new(light.clone(), "intensity", [0.5, 0.5, 0.5], FrameIndex(0), FrameIndex(15))
        .unwrap();
    for f in 0..30 {
        c.evaluate(FrameIndex(f)).unwrap();
    }
    c.reset().unwrap();
    assert_eq!(light.borrow().intensity, [0.0, 0.0, 0.0]);
    assert_eq!(c.activation(), c.initial());
}

#[test]
fn empty_or_inverted_interval_is_a_config_error() {
    let light = dark_light();
    let err = Change::new(light.clone(), "intensity", [1.0; 3], FrameIndex(5), FrameIndex(5))
        .unwrap_err();
    assert!(matches!(err, RayframeError::Config(_)));

    let err = Change::new(light, "intensity", [1.0; 3], FrameIndex(6), FrameIndex(5)).unwrap_err();
    assert!(matches!(err, RayframeError::Config(_)));
}

#[test]
fn unknown_attribute_fails_at_construction() {
    let err = Change::new(dark_light(), "colour", [1.0; 3], FrameIndex(0), FrameIndex(5))
        .unwrap_err();
    assert!(matches!(err, RayframeError::MissingAttribute { .. }));
}

#[test]
fn mismatched_target_fails_at_evaluation() {
    let light = dark_light();
    let mut c = Change::new(light.clone(), "intensity", 0.5, FrameIndex(0), FrameIndex(5)).unwrap();
    c.evaluate(FrameIndex(0)).unwrap();
    let err = c.evaluate(FrameIndex(1)).unwrap_err();
    assert!(matches!(err, RayframeError::ShapeMismatch { .. }));

    let mut c = Change::new(
        light.clone(),
        "intensity",
        vec![1.0, 1.0],
        FrameIndex(0),
        FrameIndex(5),
    )
    .unwrap();
    c.evaluate(FrameIndex(0)).unwrap();
    let err = c.evaluate(FrameIndex(5)).unwrap_err();
    assert!(matches!(err, RayframeError::ShapeMismatch { .. }));
    assert_eq!(light.borrow().intensity, [0.0, 0.0, 0.0]);
}

#[test]
fn boolean_attribute_cannot_be_interpolated() {
    let mat = shared(Material::default());
    let mut c = Change::new(mat, "isreflective", 1.0, FrameIndex(0), FrameIndex(2)).unwrap();
    let err = c.evaluate(FrameIndex(1)).unwrap_err();
    assert!(matches!(err, RayframeError::ShapeMismatch { .. }));
}

#[test]
fn target_deserializes_from_number_or_array() {
    let t: Target = serde_json::from_str("0.9").unwrap();
    assert_eq!(t, Target::Scalar(0.9));
    let t: Target = serde_json::from_str("[0, 0.3, 1]").unwrap();
    assert_eq!(t, Target::Vector(vec![0.0, 0.3, 1.0]));
    assert_eq!(t.kind(), AttrKind::Vector(3));
}
