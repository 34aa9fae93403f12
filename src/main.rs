//! flatraster entry point
//!
//! Loads a mesh, renders it in one pass and writes the image. Any failure is
//! reported on stderr and turns into a non-zero exit status.

use std::process::ExitCode;

use clap::Parser;
use flatraster::engine::render_demo;
use flatraster::{Args, Engine, Mesh, RenderConfig, Result};

fn run(config: &RenderConfig) -> Result<()> {
    let mut frame = if config.demo {
        log::info!("Rendering demo scene at {}x{}", config.width, config.height);
        render_demo(config)
    } else {
        log::info!("Loading mesh from {}", config.mesh_path.display());
        let mesh = Mesh::from_obj(&config.mesh_path)?;
        log::info!(
            "Rendering {} faces ({} vertices) at {}x{} with {} rasterizer",
            mesh.face_count(),
            mesh.vertex_count(),
            config.width,
            config.height,
            config.rasterizer
        );
        let frame = Engine::from_config(&mesh, config).render();
        log::info!(
            "Drew {} faces, culled {}",
            frame.stats.faces_drawn,
            frame.stats.faces_culled
        );
        frame.buffer
    };

    frame.flip_vertically();
    frame.write_to_file(&config.output_path)?;
    log::info!("Wrote {}", config.output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let result = Args::parse().into_config().and_then(|config| run(&config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
