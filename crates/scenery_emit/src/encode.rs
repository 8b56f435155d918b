//! Fragment encoding
//!
//! One renderer statement per command, arguments in fixed declared order,
//! one statement per line, each terminated by `;`. Numeric text comes
//! from [`Scalar`](scenery_core::Scalar)'s canonical form; strings are
//! embedded verbatim between double quotes (the builder has already
//! rejected anything that cannot be).

use scenery_core::{Color, Finish, SceneCommand, Vec3};

/// Receiver object of every emitted statement
pub(crate) const RECEIVER: &str = "canvas";

/// Statement instantiating the renderer-facing scene object
pub(crate) const INIT_STATEMENT: &str = "let canvas = new SceneCanvas();\n";

fn vec3(v: &Vec3) -> String {
    format!("{},{},{}", v.x, v.y, v.z)
}

fn color(c: &Color) -> String {
    format!("{},{},{}", c.r, c.g, c.b)
}

fn finish(f: &Finish) -> String {
    format!("{},{}", f.roughness, f.metalness)
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Append the script statement for one command
pub(crate) fn push_statement(out: &mut String, command: &SceneCommand) {
    match command {
        SceneCommand::Box(b) => out.push_str(&format!(
            "{}.addBox({},{},{},{},{});\n",
            RECEIVER,
            vec3(&b.center),
            vec3(&b.extents),
            color(&b.color),
            finish(&b.finish),
            vec3(&b.rotation),
        )),
        SceneCommand::Cylinder(c) => out.push_str(&format!(
            "{}.addCylinder({},{},{},{},{},{},{});\n",
            RECEIVER,
            vec3(&c.center),
            c.radius,
            c.height,
            color(&c.color),
            finish(&c.finish),
            vec3(&c.rotation),
            vec3(&c.scale),
        )),
        SceneCommand::Cone(c) => out.push_str(&format!(
            "{}.addCone({},{},{},{},{},{},{});\n",
            RECEIVER,
            vec3(&c.center),
            c.radius,
            c.height,
            color(&c.color),
            finish(&c.finish),
            vec3(&c.rotation),
            vec3(&c.scale),
        )),
        SceneCommand::Ellipsoid(e) => out.push_str(&format!(
            "{}.addEllipsoid({},{},{},{},{});\n",
            RECEIVER,
            vec3(&e.center),
            vec3(&e.radii),
            color(&e.color),
            finish(&e.finish),
            vec3(&e.rotation),
        )),
        SceneCommand::Mesh(m) => out.push_str(&format!(
            "{}.addMesh({},{},{},{},{},{});\n",
            RECEIVER,
            quoted(&m.path),
            vec3(&m.position),
            vec3(&m.rotation),
            vec3(&m.scale),
            color(&m.color),
            finish(&m.finish),
        )),
        SceneCommand::TexturedMesh(t) => out.push_str(&format!(
            "{}.addTexturedMesh({},{},{},{},{},{});\n",
            RECEIVER,
            quoted(&t.mesh_path),
            quoted(&t.material_path),
            vec3(&t.position),
            vec3(&t.rotation),
            vec3(&t.scale),
            t.shininess,
        )),
        SceneCommand::Camera { position, rotation_y } => out.push_str(&format!(
            "{}.addCamera({},{});\n",
            RECEIVER,
            vec3(position),
            rotation_y,
        )),
        SceneCommand::PointLight { position, color: c, intensity } => out.push_str(&format!(
            "{}.addPointLight({},{},{});\n",
            RECEIVER,
            vec3(position),
            color(c),
            intensity,
        )),
        SceneCommand::DirectionalLight { position, color: c, intensity } => out.push_str(&format!(
            "{}.addDirectionalLight({},{},{});\n",
            RECEIVER,
            vec3(position),
            color(c),
            intensity,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenery_core::{Cuboid, Cylinder, Ellipsoid, MeshRef, Scalar, TexturedMeshRef};

    fn statement(command: &SceneCommand) -> String {
        let mut out = String::new();
        push_statement(&mut out, command);
        out
    }

    #[test]
    fn test_box_statement() {
        let cmd = SceneCommand::Box(Cuboid::new(
            (0, -25, 0),
            (1000, 50, 1000),
            Color::rgb(100, 100, 100),
            Finish::new(1, 0),
        ));
        assert_eq!(
            statement(&cmd),
            "canvas.addBox(0,-25,0,1000,50,1000,100,100,100,1,0,0,0,0);\n"
        );
    }

    #[test]
    fn test_point_light_statement_keeps_float_intensity() {
        let cmd = SceneCommand::PointLight {
            position: Vec3::new(-100, 200, 0),
            color: Color::rgb(200, 200, 200),
            intensity: Scalar::Float(1.0),
        };
        assert_eq!(
            statement(&cmd),
            "canvas.addPointLight(-100,200,0,200,200,200,1.0);\n"
        );
    }

    #[test]
    fn test_camera_statement() {
        let cmd = SceneCommand::Camera {
            position: Vec3::new(0, 2, 0),
            rotation_y: Scalar::Int(0),
        };
        assert_eq!(statement(&cmd), "canvas.addCamera(0,2,0,0);\n");
    }

    #[test]
    fn test_cylinder_statement_defaults() {
        let cmd = SceneCommand::Cylinder(Cylinder::new(
            (-2, 1, -5),
            0.05,
            2,
            Color::rgb(127, 127, 127),
            Finish::new(1, 0),
        ));
        assert_eq!(
            statement(&cmd),
            "canvas.addCylinder(-2,1,-5,0.05,2,127,127,127,1,0,0,0,0,1,1,1);\n"
        );
    }

    #[test]
    fn test_cone_statement_with_rotation_and_scale() {
        let cmd = SceneCommand::Cone(
            scenery_core::Cone::new((0, 3, 0), 1.5, 4, Color::rgb(10, 20, 30), Finish::new(0.5, 1))
                .with_rotation((0, 90, 0))
                .with_scale((2, 1, 2)),
        );
        assert_eq!(
            statement(&cmd),
            "canvas.addCone(0,3,0,1.5,4,10,20,30,0.5,1,0,90,0,2,1,2);\n"
        );
    }

    #[test]
    fn test_ellipsoid_statement() {
        let cmd = SceneCommand::Ellipsoid(Ellipsoid::new(
            (1, 2, 3),
            (1.5, 1.5, 1.5),
            Color::rgb(255, 0, 0),
            Finish::new(1, 0),
        ));
        assert_eq!(
            statement(&cmd),
            "canvas.addEllipsoid(1,2,3,1.5,1.5,1.5,255,0,0,1,0,0,0,0);\n"
        );
    }

    #[test]
    fn test_mesh_statement() {
        let cmd = SceneCommand::Mesh(MeshRef::new(
            "meshes/cow.obj",
            (1, 1, -7),
            Color::rgb(0, 255, 255),
            Finish::new(1, 0),
        ));
        assert_eq!(
            statement(&cmd),
            "canvas.addMesh(\"meshes/cow.obj\",1,1,-7,0,0,0,1,1,1,0,255,255,1,0);\n"
        );
    }

    #[test]
    fn test_textured_mesh_statement() {
        let cmd = SceneCommand::TexturedMesh(
            TexturedMeshRef::new(
                "meshes/smokestack/medres.obj",
                "meshes/smokestack/medres.mtl",
                (0, 18, -20),
                0,
            )
            .with_rotation((0, 180, 0))
            .with_scale((10, 10, 10)),
        );
        assert_eq!(
            statement(&cmd),
            "canvas.addTexturedMesh(\"meshes/smokestack/medres.obj\",\"meshes/smokestack/medres.mtl\",0,18,-20,0,180,0,10,10,10,0);\n"
        );
    }

    #[test]
    fn test_directional_light_statement() {
        let cmd = SceneCommand::DirectionalLight {
            position: Vec3::new(0, 50, 0),
            color: Color::rgb(255, 255, 255),
            intensity: Scalar::Float(0.8),
        };
        assert_eq!(
            statement(&cmd),
            "canvas.addDirectionalLight(0,50,0,255,255,255,0.8);\n"
        );
    }
}
