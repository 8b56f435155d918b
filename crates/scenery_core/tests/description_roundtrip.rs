//! Integration tests for scene-description persistence
//!
//! Round-trips a command log through a RON file on disk and checks that
//! loading re-validates what it reads.

use std::fs;
use std::path::PathBuf;

use scenery_core::{Color, Cuboid, Finish, LoadError, MeshRef, SceneBuilder};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scenery_core_{}_{}", std::process::id(), name))
}

#[test]
fn test_save_then_load_preserves_log() {
    let mut scene = SceneBuilder::new();
    scene
        .add_point_light((-100, 200, 0), Color::rgb(200, 200, 200), 1.0)
        .unwrap();
    scene.add_camera((0, 2, 0), 0).unwrap();
    scene
        .add_box(Cuboid::new(
            (0, -25, 0),
            (1000, 50, 1000),
            Color::rgb(100, 100, 100),
            Finish::MATTE,
        ))
        .unwrap();
    scene
        .add_mesh(MeshRef::new(
            "meshes/cow.obj",
            (1, 1, -7),
            Color::rgb(0, 255, 255),
            Finish::MATTE,
        ))
        .unwrap();

    let path = temp_path("roundtrip.ron");
    scene.save(&path).unwrap();
    let loaded = SceneBuilder::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, scene);
}

#[test]
fn test_load_rejects_invalid_ron() {
    let path = temp_path("garbage.ron");
    fs::write(&path, "not a scene at all").unwrap();
    let result = SceneBuilder::load(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn test_load_revalidates_commands() {
    // A hand-edited description with an out-of-range intensity must not
    // load, even though it parses.
    let path = temp_path("invalid_intensity.ron");
    fs::write(
        &path,
        r#"SceneBuilder(commands: [PointLight(
            position: Vec3(x: 0, y: 0, z: 0),
            color: Color(r: 255, g: 255, b: 255),
            intensity: 5.0,
        )])"#,
    )
    .unwrap();
    let result = SceneBuilder::load(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(LoadError::Invalid(_))));
}
