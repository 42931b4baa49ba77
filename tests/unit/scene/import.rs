use std::path::PathBuf;

use super::*;

fn write_fragment(name: &str, json: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_import");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

const FRAGMENT: &str = r#"{
    "nbounces": 4,
    "rendermode": "phong",
    "camera": { "type": "pinhole" },
    "scene": {
        "backgroundcolor": [0.0, 0.0, 0.0],
        "lightsources": [],
        "shapes": [
            { "type": "sphere", "center": [0.0, -1.0, 0.0], "radius": 1.0 },
            { "type": "cylinder", "center": [1.0, 0.0, 1.0], "axis": [0.0, 1.0, 0.0],
              "radius": 0.2, "height": 1.5 },
            { "type": "triangle", "v0": [0.0, 0.0, 0.0], "v1": [1.0, 0.0, 0.0],
              "v2": [0.0, 1.0, 0.0],
              "material": { "diffusecolor": [0.2, 0.8, 0.2], "diffusetexture": "null" } }
        ]
    }
}"#;

#[test]
fn translates_centers_and_vertices() {
    let path = write_fragment("tree.json", FRAGMENT);
    let shapes = import_shapes(&path, [3.0, 0.0, 5.0]).unwrap();
    assert_eq!(shapes.len(), 3);

    let Shape::Sphere(s) = &shapes[0] else { panic!("sphere") };
    assert_eq!(s.center, [3.0, -1.0, 5.0]);
    assert_eq!(s.radius, 1.0);

    let Shape::Cylinder(c) = &shapes[1] else { panic!("cylinder") };
    assert_eq!(c.center, [4.0, 0.0, 6.0]);
    assert_eq!(c.axis, [0.0, 1.0, 0.0]);

    let Shape::Triangle(t) = &shapes[2] else { panic!("triangle") };
    assert_eq!(t.v0, [3.0, 0.0, 5.0]);
    assert_eq!(t.v1, [4.0, 0.0, 5.0]);
    assert_eq!(t.v2, [3.0, 1.0, 5.0]);
    assert_eq!(t.material.borrow().diffuse_color, [0.2, 0.8, 0.2]);
    assert_eq!(t.material.borrow().diffuse_texture, None);
}

#[test]
fn missing_file_is_reported() {
    let err = import_shapes("target/unit_import/does-not-exist.json", [0.0; 3]).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.json"), "{err}");
}

#[test]
fn document_without_scene_is_a_serde_error() {
    let path = write_fragment("no-scene.json", r#"{ "nbounces": 1 }"#);
    let err = import_shapes(&path, [0.0; 3]).unwrap_err();
    assert!(matches!(err, RayframeError::Serde(_)));
}
