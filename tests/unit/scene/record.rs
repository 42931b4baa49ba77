use super::*;

#[test]
fn camera_attributes_round_trip_by_name() {
    let mut cam = Camera::default();
    cam.set_attr("position", AttrValue::Vector(vec![1.0, 2.0, 3.0]))
        .unwrap();
    cam.set_attr("fov", AttrValue::Scalar(60.0)).unwrap();
    assert_eq!(cam.position, [1.0, 2.0, 3.0]);
    assert_eq!(cam.get_attr("fov"), Some(AttrValue::Scalar(60.0)));
    assert_eq!(cam.get_attr("width"), Some(AttrValue::Int(1200)));
    assert_eq!(
        cam.get_attr("lookAt"),
        Some(AttrValue::Vector(vec![0.0, 0.0, 1.0]))
    );
}

#[test]
fn unknown_attribute_is_missing() {
    let light = Light::point([0.0; 3], [0.0; 3]);
    assert_eq!(light.get_attr("colour"), None);
    let err = read_attr(&light, "colour").unwrap_err();
    assert!(matches!(err, RayframeError::MissingAttribute { .. }));

    let mut tri = Shape::triangle([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let err = tri.set_attr("radius", AttrValue::Scalar(1.0)).unwrap_err();
    assert!(matches!(err, RayframeError::MissingAttribute { .. }));
}

#[test]
fn kind_mismatch_is_rejected_on_set() {
    let mut mat = Material::default();
    let err = mat
        .set_attr("diffusecolor", AttrValue::Scalar(1.0))
        .unwrap_err();
    assert!(matches!(err, RayframeError::ShapeMismatch { .. }));

    let err = mat
        .set_attr("reflectivity", AttrValue::Vector(vec![1.0, 1.0]))
        .unwrap_err();
    assert!(matches!(err, RayframeError::ShapeMismatch { .. }));

    let err = mat
        .set_attr("diffusecolor", AttrValue::Vector(vec![1.0, 1.0]))
        .unwrap_err();
    assert!(matches!(err, RayframeError::ShapeMismatch { .. }));
}

#[test]
fn shape_record_kind_follows_variant() {
    assert_eq!(Shape::sphere([0.0; 3], 1.0).record_kind(), "sphere");
    let cyl = Shape::cylinder([0.0; 3], [0.0, 1.0, 0.0], 1.0, 2.0);
    assert_eq!(cyl.record_kind(), "cylinder");
    assert_eq!(cyl.get_attr("height"), Some(AttrValue::Scalar(2.0)));
}

#[test]
fn handles_share_mutations() {
    let light = shared(Light::point([0.0; 3], [0.0; 3]));
    let erased: RecordHandle = light.clone();
    erased
        .borrow_mut()
        .set_attr("intensity", AttrValue::Vector(vec![0.5, 0.5, 0.5]))
        .unwrap();
    assert_eq!(light.borrow().intensity, [0.5, 0.5, 0.5]);
}

#[test]
fn texture_attribute_is_optional_text() {
    let mut mat = Material::default();
    assert_eq!(mat.get_attr("diffusetexture"), Some(AttrValue::Text(None)));
    mat.set_attr("diffusetexture", AttrValue::Text(Some("stone.ppm".into())))
        .unwrap();
    assert_eq!(mat.diffuse_texture.as_deref(), Some("stone.ppm"));
}
