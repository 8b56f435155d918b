//! A small city block
//!
//! Lights from four sides, two street-level cameras, a ground slab, two
//! street signs, and a pair of meshes loaded by the renderer.

use scenery_core::{
    Color, Cuboid, Cylinder, Finish, MeshRef, SceneBuilder, TexturedMeshRef, ValidationError,
};

/// Which way a street sign's plate faces
#[derive(Clone, Copy)]
enum SignFacing {
    EastWest,
    NorthSouth,
}

/// A two meter pole with a half-meter square plate on top
fn add_sign(
    scene: &mut SceneBuilder,
    cx: i64,
    cz: i64,
    facing: SignFacing,
    color: Color,
) -> Result<(), ValidationError> {
    scene.add_cylinder(Cylinder::new(
        (cx, 1, cz),
        0.05,
        2,
        Color::rgb(127, 127, 127),
        Finish::MATTE,
    ))?;
    // The plate is thin along the axis the sign faces.
    let extents = match facing {
        SignFacing::EastWest => (0.5, 0.5, 0.1),
        SignFacing::NorthSouth => (0.1, 0.5, 0.5),
    };
    scene.add_box(Cuboid::new((cx, 2, cz), extents, color, Finish::MATTE))
}

/// Assemble the city-block sample scene
pub fn city_block() -> Result<SceneBuilder, ValidationError> {
    let mut scene = SceneBuilder::new();

    // Lights from four sides
    scene.add_point_light((-100, 200, 0), Color::rgb(200, 200, 200), 1.0)?;
    scene.add_point_light((100, 200, 0), Color::rgb(200, 200, 200), 1.0)?;
    scene.add_point_light((0, 0, -100), Color::rgb(200, 200, 200), 1.0)?;
    scene.add_point_light((0, 0, 100), Color::rgb(200, 200, 200), 1.0)?;

    // A street-level camera and a reverse angle from down the block
    scene.add_camera((0, 2, 0), 0)?;
    scene.add_camera((0, 2, -40), 180)?;

    // Ground slab
    scene.add_box(Cuboid::new(
        (0, -25, 0),
        (1000, 50, 1000),
        Color::rgb(100, 100, 100),
        Finish::MATTE,
    ))?;

    // A red sign ahead and to the left, a green one further down
    add_sign(&mut scene, -2, -5, SignFacing::EastWest, Color::RED)?;
    add_sign(&mut scene, 0, -10, SignFacing::NorthSouth, Color::GREEN)?;

    // A cyan cow and a smokestack
    scene.add_mesh(MeshRef::new(
        "meshes/cow.obj",
        (1, 1, -7),
        Color::rgb(0, 255, 255),
        Finish::MATTE,
    ))?;
    scene.add_textured_mesh(
        TexturedMeshRef::new(
            "meshes/smokestack/medres.obj",
            "meshes/smokestack/medres.mtl",
            (0, 18, -20),
            0,
        )
        .with_rotation((0, 180, 0))
        .with_scale((10, 10, 10)),
    )?;

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenery_core::SceneCommand;

    #[test]
    fn test_city_block_builds() {
        let scene = city_block().unwrap();
        // 4 lights + 2 cameras + ground + 2 signs of 2 commands + 2 meshes
        assert_eq!(scene.len(), 13);
        assert!(matches!(scene.commands()[0], SceneCommand::PointLight { .. }));
        assert!(matches!(scene.commands()[12], SceneCommand::TexturedMesh(_)));
    }

    #[test]
    fn test_city_block_is_deterministic() {
        let a = city_block().unwrap();
        let b = city_block().unwrap();
        assert_eq!(a, b);
    }
}
