use anyhow::{Context, Result};
use getopts::Options;
use log::*;
use mirrortrace::loader;
use mirrortrace::renderer::{RenderConfig, Renderer};
use std::sync::Arc;

fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {} [options] <scene-file> <output-file>", program);
    opts.usage(&brief)
}

fn parse_opt<T: std::str::FromStr>(matches: &getopts::Matches, name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match matches.opt_str(name) {
        Some(s) => Ok(Some(
            s.parse()
                .with_context(|| format!("invalid value for --{}: {}", name, s))?,
        )),
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "mirrortrace".to_string());

    let mut opts = Options::new();
    opts.optopt("t", "threads", "number of worker threads", "N");
    opts.optopt("W", "width", "output width in pixels (default 512)", "PX");
    opts.optopt("H", "height", "output height in pixels (default 512)", "PX");
    opts.optopt("a", "antialias", "samples per pixel, overriding the scene file", "N");
    opts.optflag("h", "help", "print this help");
    let matches = opts.parse(args.iter().skip(1))?;

    if matches.opt_present("h") || matches.free.len() != 2 {
        println!("{}", usage(&program, &opts));
        return Ok(());
    }
    let scene_file = &matches.free[0];
    let output_file = &matches.free[1];

    let mut config = RenderConfig::default();
    if let Some(nthread) = parse_opt(&matches, "threads")? {
        config.nthread = nthread;
    }
    if let Some(width) = parse_opt(&matches, "width")? {
        config.width = width;
    }
    if let Some(height) = parse_opt(&matches, "height")? {
        config.height = height;
    }
    if config.width != config.height {
        warn!("non-square output: the vertical axis is scaled by the width");
    }

    let mut scene = loader::load_scene(scene_file)
        .with_context(|| format!("failed to load scene {}", scene_file))?;
    if let Some(antialias) = parse_opt(&matches, "antialias")? {
        scene = scene.set_antialias(antialias)?;
    }
    if scene.objects().is_empty() {
        warn!("scene {} has no objects", scene_file);
    }

    let image = Renderer.render(Arc::new(scene), &config)?;
    image
        .write_png(output_file)
        .with_context(|| format!("failed to write {}", output_file))?;
    info!("wrote {}", output_file);
    Ok(())
}
