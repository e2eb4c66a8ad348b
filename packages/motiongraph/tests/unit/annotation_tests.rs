// Annotation Loader Tests

#[path = "../common/mod.rs"]
mod common;

use common::*;
use motiongraph::features::annotation::AnnotationError;
use motiongraph::Annotation;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(ANNOTATION_JSON.as_bytes()).unwrap();

    let annotation = Annotation::from_path(file.path()).unwrap();
    assert_eq!(annotation.objects().len(), 2);
    assert_eq!(annotation.frame_ids().collect::<Vec<_>>(), vec![0, 5, 15]);
    assert_eq!(annotation.object(1).and_then(|o| o.size), Some(0.4));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Annotation::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, AnnotationError::Io(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = Annotation::from_json_str("{\"object_property\": [").unwrap_err();
    assert!(matches!(err, AnnotationError::Json(_)));
}

#[test]
fn test_objects_in_frame_merges_properties() {
    let annotation = Annotation::from_json_str(ANNOTATION_JSON).unwrap();
    let snapshots = annotation.objects_in_frame(0);

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[1].property.color, "cyan");
    assert_eq!(snapshots[1].location, vec![3.0, 0.0, 0.0]);
    assert_eq!(snapshots[1].velocity, vec![-1.0, 0.0, 0.0]);
}

#[test]
fn test_missing_velocity_defaults_to_empty() {
    let annotation = Annotation::from_json_str(ANNOTATION_JSON).unwrap();
    let snapshots = annotation.objects_in_frame(5);
    assert!(snapshots.iter().all(|s| s.velocity.is_empty()));
}

#[test]
fn test_unknown_frame_is_empty() {
    let annotation = Annotation::from_json_str(ANNOTATION_JSON).unwrap();
    assert!(annotation.objects_in_frame(99).is_empty());
}

#[test]
fn test_duplicate_frame_rejected() {
    let json = r#"{
        "object_property": [{"object_id": 0, "shape": "cube", "color": "red", "material": "metal"}],
        "motion_trajectory": [
            {"frame_id": 3, "objects": []},
            {"frame_id": 3, "objects": []}
        ]
    }"#;
    let err = Annotation::from_json_str(json).unwrap_err();
    assert!(matches!(err, AnnotationError::DuplicateFrame(3)));
}

#[test]
fn test_duplicate_object_rejected() {
    let json = r#"{
        "object_property": [
            {"object_id": 4, "shape": "cube", "color": "red", "material": "metal"},
            {"object_id": 4, "shape": "sphere", "color": "blue", "material": "rubber"}
        ],
        "motion_trajectory": []
    }"#;
    let err = Annotation::from_json_str(json).unwrap_err();
    assert!(matches!(err, AnnotationError::DuplicateObject(4)));
}

#[test]
fn test_scene_builder_matches_loader_shape() {
    let annotation = approach_scene().build();
    assert_eq!(annotation.frame_ids().collect::<Vec<_>>(), vec![0, 10, 20]);
    assert_eq!(annotation.objects_in_frame(10)[1].location, vec![1.0, 0.0]);
}
