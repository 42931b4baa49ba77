use super::*;

#[test]
fn defaults_match_document_conventions() {
    let cam = Camera::default();
    assert_eq!(cam.kind, CameraKind::Pinhole);
    assert_eq!((cam.width, cam.height), (1200, 800));
    assert_eq!(cam.look_at, [0.0, 0.0, 1.0]);
    assert_eq!(cam.up_vector, [0.0, 1.0, 0.0]);
    assert_eq!(cam.fov, 45.0);
    assert_eq!(cam.exposure, 0.1);

    let root = RootConfig::default();
    assert_eq!(root.nbounces, 10);
    assert_eq!(root.rendermode, "phong");

    assert_eq!(SceneConfig::default().backgroundcolor, [0.25, 0.25, 0.25]);

    let mat = Material::default();
    assert_eq!(mat.diffuse_color, [1.0, 0.0, 0.0]);
    assert_eq!(mat.diffuse_texture, None);
    assert_eq!(mat.specular_exponent, 10.0);
}

#[test]
fn camera_serializes_with_document_keys() {
    let v = serde_json::to_value(Camera::default()).unwrap();
    assert_eq!(v["type"], "pinhole");
    assert_eq!(v["width"], 1200);
    assert!(v.get("lookAt").is_some());
    assert!(v.get("upVector").is_some());
    assert!(v.get("look_at").is_none());
}

#[test]
fn light_kind_serializes_lowercase() {
    let v = serde_json::to_value(Light::point([0.0, 1.0, 0.5], [0.5, 0.5, 0.5])).unwrap();
    assert_eq!(v["type"], "pointlight");
    assert_eq!(v["intensity"], serde_json::json!([0.5, 0.5, 0.5]));
}

#[test]
fn shape_is_tagged_by_type() {
    let v = serde_json::to_value(Shape::sphere([0.0, -1.0, 0.0], 0.5)).unwrap();
    assert_eq!(v["type"], "sphere");
    assert_eq!(v["radius"], 0.5);
    assert_eq!(v["material"]["specularexponent"], 10.0);
    assert!(v["material"]["diffusetexture"].is_null());

    let tri: Shape = serde_json::from_value(serde_json::json!({
        "type": "triangle",
        "v0": [0.0, 0.0, 0.0],
        "v1": [1.0, 0.0, 0.0],
        "v2": [0.0, 1.0, 0.0]
    }))
    .unwrap();
    assert!(matches!(tri, Shape::Triangle(_)));
    assert_eq!(*tri.material().borrow(), Material::default());
}

#[test]
fn legacy_null_texture_string_reads_as_none() {
    let m: Material =
        serde_json::from_value(serde_json::json!({ "diffusetexture": "null" })).unwrap();
    assert_eq!(m.diffuse_texture, None);

    let m: Material =
        serde_json::from_value(serde_json::json!({ "diffusetexture": "dog.ppm" })).unwrap();
    assert_eq!(m.diffuse_texture.as_deref(), Some("dog.ppm"));
}

#[test]
fn shared_material_is_visible_from_every_shape() {
    let mat = shared(Material::default());
    let a = Shape::sphere([-0.75, 0.3, 1.0], 0.2).with_material(mat.clone());
    let b = Shape::sphere([0.75, 0.3, 1.0], 0.2).with_material(mat.clone());

    mat.borrow_mut().reflectivity = 0.25;
    assert_eq!(a.material().borrow().reflectivity, 0.25);
    assert_eq!(b.material().borrow().reflectivity, 0.25);
}

#[test]
fn snapshot_detaches_material() {
    let mat = shared(Material::default());
    let live = Shape::sphere([0.0, 0.0, 0.0], 1.0).with_material(mat.clone());
    let snap = live.snapshot();

    mat.borrow_mut().kd = 0.0;
    assert_eq!(snap.material().borrow().kd, 0.9);
    assert_eq!(live.material().borrow().kd, 0.0);
}

#[test]
fn translate_moves_center_or_vertices() {
    let mut s = Shape::sphere([0.0, -1.0, 0.0], 1.0);
    s.translate([3.0, 0.0, 5.0]);
    let Shape::Sphere(s) = s else { panic!("sphere") };
    assert_eq!(s.center, [3.0, -1.0, 5.0]);

    let mut c = Shape::cylinder([1.0, 1.0, 1.0], [0.0, 1.0, 0.0], 0.5, 2.0);
    c.translate([1.0, 2.0, 3.0]);
    let Shape::Cylinder(c) = c else { panic!("cylinder") };
    assert_eq!(c.center, [2.0, 3.0, 4.0]);
    assert_eq!(c.axis, [0.0, 1.0, 0.0]);

    let mut t = Shape::triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    t.translate([3.0, 0.0, 5.0]);
    let Shape::Triangle(t) = t else { panic!("triangle") };
    assert_eq!(t.v0, [3.0, 0.0, 5.0]);
    assert_eq!(t.v1, [4.0, 0.0, 5.0]);
    assert_eq!(t.v2, [3.0, 1.0, 5.0]);
}
