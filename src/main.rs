//! Scenery - scene page generator
//!
//! Assembles the sample city-block scene and writes it as a renderer HTML
//! page, optionally alongside a RON snapshot of the scene description.

use std::process;

use scenery::config::AppConfig;
use scenery::scene;
use scenery::SceneDocument;

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting scenery");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let scene = scene::city_block()?;
    log::info!("Assembled sample scene with {} commands", scene.len());

    if let Some(path) = &config.output.description {
        scene.save(path)?;
        log::info!("Saved scene description to {}", path);
    }

    SceneDocument::new(&scene, &config.output.title)?.save(&config.output.html)?;
    Ok(())
}
