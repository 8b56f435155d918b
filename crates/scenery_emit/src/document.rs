//! Artifact assembly and the single save I/O
//!
//! A [`SceneDocument`] pairs a command log with a display title and turns
//! them into the final page: fixed prefix, script open, the scene-object
//! initialization, one statement per command in log order, the title
//! assignment, the repaint trigger, script close, fixed suffix.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use scenery_core::{validate_text, SceneBuilder, ValidationError};

use crate::encode;
use crate::template;

/// A scene description paired with a display title, ready to serialize
///
/// Construction validates the title; after that, rendering is infallible
/// and deterministic. The same log contents and title always produce
/// byte-identical output.
pub struct SceneDocument<'a> {
    scene: &'a SceneBuilder,
    title: &'a str,
}

impl<'a> SceneDocument<'a> {
    /// Pair a scene with the title shown in the viewer
    ///
    /// Fails if the title contains characters the script format cannot
    /// carry (double quotes, backslashes, control characters).
    pub fn new(scene: &'a SceneBuilder, title: &'a str) -> Result<Self, EmitError> {
        validate_text("scene title", title).map_err(EmitError::Title)?;
        Ok(Self { scene, title })
    }

    /// Render the complete HTML artifact
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            template::PAGE_PREFIX.len()
                + template::PAGE_SUFFIX.len()
                + 80 * (self.scene.len() + 4),
        );
        out.push_str(template::PAGE_PREFIX);
        out.push_str("<script>\n");
        out.push_str(encode::INIT_STATEMENT);
        for command in self.scene.commands() {
            encode::push_statement(&mut out, command);
        }
        out.push_str(&format!("{}.name = \"{}\";\n", encode::RECEIVER, self.title));
        out.push_str(&format!("{}.repaint();\n</script>", encode::RECEIVER));
        out.push_str(template::PAGE_SUFFIX);
        out
    }

    /// Write the artifact to `path`
    ///
    /// The whole document is rendered before any I/O starts, so a failed
    /// write never reflects a half-serialized scene. The underlying log
    /// is read, not consumed; saving again (to the same or another
    /// destination) is always valid and reflects the full history at
    /// call time.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EmitError> {
        let html = self.render();
        fs::write(&path, html)?;
        log::info!(
            "wrote scene '{}' ({} commands) to {}",
            self.title,
            self.scene.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Error producing or persisting an artifact
#[derive(Debug)]
pub enum EmitError {
    /// The scene title cannot be embedded in the script
    Title(ValidationError),
    /// IO error writing the destination (permissions, missing directory,
    /// disk full)
    Io(io::Error),
}

impl From<io::Error> for EmitError {
    fn from(e: io::Error) -> Self {
        EmitError::Io(e)
    }
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Title(e) => write!(f, "Invalid title: {}", e),
            EmitError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EmitError {}

#[cfg(test)]
mod tests {
    use super::*;
    use scenery_core::{Color, Finish};

    #[test]
    fn test_empty_scene_still_renders_a_complete_page() {
        let scene = SceneBuilder::new();
        let html = SceneDocument::new(&scene, "Empty").unwrap().render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains(
            "<script>\nlet canvas = new SceneCanvas();\ncanvas.name = \"Empty\";\ncanvas.repaint();\n</script>"
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut scene = SceneBuilder::new();
        scene.add_camera((0, 2, 0), 0).unwrap();
        scene
            .add_sphere((0, 1, 0), 0.5, Color::rgb(40, 40, 200), Finish::MATTE)
            .unwrap();

        let doc = SceneDocument::new(&scene, "Twice").unwrap();
        assert_eq!(doc.render(), doc.render());
    }

    #[test]
    fn test_title_with_quote_rejected() {
        let scene = SceneBuilder::new();
        let result = SceneDocument::new(&scene, "bad \" title");
        assert!(matches!(result, Err(EmitError::Title(_))));
    }

    #[test]
    fn test_title_with_newline_rejected() {
        let scene = SceneBuilder::new();
        let result = SceneDocument::new(&scene, "two\nlines");
        assert!(matches!(result, Err(EmitError::Title(_))));
    }
}
