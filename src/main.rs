use getopts::Options;
use localtrace::example_scenes;
use localtrace::image::{FilmArc, Image};
use localtrace::renderer::{RenderConfig, Renderer};
use localtrace::shading::ShadeParams;
use localtrace::texture::TextureSet;
use localtrace::*;
use log::*;
use std::path::Path;
use std::sync::Arc;

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
}

fn opt_parse<T: std::str::FromStr>(matches: &getopts::Matches, name: &str, default: T) -> T {
    match matches.opt_str(name) {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("invalid value for --{}: {}", name, s);
                std::process::exit(2);
            }
        },
        None => default,
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options::new();
    opts.optopt("w", "width", "image width in pixels", "PIXELS");
    opts.optopt("h", "height", "image height in pixels", "PIXELS");
    opts.optopt("o", "output", "output PNG file", "FILE");
    opts.optopt("p", "power", "specular highlight exponent", "EXPONENT");
    opts.optopt("i", "intensity", "point light intensity", "VALUE");
    opts.optopt("t", "textures", "directory with the tile texture images", "DIR");
    opts.optopt("j", "threads", "number of render threads", "COUNT");
    opts.optflag("", "help", "print this help");
    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    if matches.opt_present("help") {
        print_usage(&args[0], &opts);
        return;
    }

    let width: u32 = opt_parse(&matches, "width", 1200);
    let height: u32 = opt_parse(&matches, "height", 800);
    let output = matches
        .opt_str("output")
        .unwrap_or_else(|| "render.png".to_string());
    let defaults = ShadeParams::default();
    let params = ShadeParams {
        phong_power: opt_parse(&matches, "power", defaults.phong_power),
        light_intensity: opt_parse(&matches, "intensity", defaults.light_intensity),
    };
    let nthread: usize = opt_parse(&matches, "threads", num_cpus::get());

    let textures = match matches.opt_str("textures") {
        Some(dir) => TextureSet::load(Path::new(&dir)),
        None => TextureSet::default(),
    };

    let (camera, scene, lights) = example_scenes::make_scene();
    let film = FilmArc::new(Image::new(width, height));
    let config = RenderConfig {
        nthread: nthread.max(1),
        background: RGB::all(0.1),
    };

    info!(
        "rendering {}x{} with {} threads",
        width, height, config.nthread
    );
    let renderer = Renderer;
    renderer.render(
        Arc::new(scene),
        Arc::new(lights),
        Arc::new(textures),
        &camera,
        params,
        film.clone(),
        config,
    );
    info!("render complete");

    let image = film.into_image().unwrap();
    if let Err(e) = image.write_png(Path::new(&output)) {
        error!("failed to write {}: {}", output, e);
        std::process::exit(1);
    }
    info!("wrote {}", output);
}
