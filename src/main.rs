use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tinycaster::config::{OutputFormat, SceneConfig};
use tinycaster::sink::{ImageSink, PngSink, PpmSink};
use tinycaster::{Renderer, SinkError};

fn open_sink(scene: &SceneConfig) -> Result<Box<dyn ImageSink>> {
    let dir = &scene.output.dir;
    let sink: Box<dyn ImageSink> = match scene.output.format {
        OutputFormat::Ppm => Box::new(PpmSink::new(dir).context("creating output directory")?),
        OutputFormat::Png => Box::new(PngSink::new(dir).context("creating output directory")?),
        #[cfg(feature = "window")]
        OutputFormat::Window => Box::new(
            tinycaster::sink::WindowSink::new(scene.width, scene.height, "tinycaster")
                .context("opening window")?,
        ),
        #[cfg(not(feature = "window"))]
        OutputFormat::Window => bail!("window output needs the `window` feature"),
    };
    Ok(sink)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scene = match env::args().nth(1) {
        Some(path) => {
            info!("loading scene {path}");
            SceneConfig::load(&path).with_context(|| format!("reading scene {path}"))?
        }
        None => SceneConfig::default(),
    };
    if scene.width < 2 || scene.height == 0 {
        bail!("canvas {}x{} is too small", scene.width, scene.height);
    }

    let map = scene.tile_map().context("building tile map")?;
    let atlas = scene.texture_atlas().context("failed to load wall textures")?;
    info!(
        "map {}x{}, {} textures of {}px, {} sprites",
        map.width(),
        map.height(),
        atlas.count(),
        atlas.size(),
        scene.sprites.len()
    );
    let renderer = Renderer::new(map, atlas, scene.sprites.clone(), scene.render)
        .context("failed to load wall textures")?;

    let mut sink = open_sink(&scene)?;
    let mut fb = renderer.frame_buffer(scene.width, scene.height);
    let mut player = scene.player;

    let started = Instant::now();
    let mut written = 0;
    for frame in 0..scene.frames {
        player.rotate(scene.rotation_step);
        let columns = renderer.render(&mut fb, &player);
        debug!(
            "frame {frame}: heading {:.3}, {}/{} columns hit",
            player.a,
            columns.iter().flatten().count(),
            columns.len()
        );
        match sink.write_frame(frame, &fb) {
            Ok(()) => written += 1,
            Err(SinkError::Closed) => break,
            Err(e) => {
                error!("frame {frame}: {e}");
                return Err(e).context("writing frame");
            }
        }
    }

    info!("{written} frames in {:.2?} -> {}", started.elapsed(), scene.output.dir.display());
    Ok(())
}
