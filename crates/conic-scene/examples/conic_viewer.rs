//! Conic Lab Viewer CLI
//!
//! Builds one conic scene from command-line arguments and writes it as a standalone
//! HTML viewer or as scene JSON.
//!
//! # Usage
//!
//! ```bash
//! # Ellipse with default parameters
//! conic_viewer ellipse
//! # Creates: ellipse.html
//!
//! # Hyperbola cut from a cone, written as JSON
//! conic_viewer hyperbola --cone --angle 0.4 --json hyperbola.json
//! ```

use std::path::{Path, PathBuf};
use std::process;

use conic_geometry::ConicType;
use conic_scene::{build_scene_with, Layer, SceneOptions, ViewMode, ViewState};

fn print_usage() {
    eprintln!(
        r#"Conic Lab Viewer CLI

USAGE:
    conic_viewer <type> [OPTIONS] [output]

ARGS:
    <type>          circle, ellipse, parabola or hyperbola
    [output]        Output path (defaults to <type>.html, or <type>.json with --json)

OPTIONS:
    --a <value>         Radius / semi-major axis / parabola coefficient
    --b <value>         Semi-minor axis
    --h <value>         Center x
    --k <value>         Center y
    --segments <n>      Sample count (default 100)
    --cone              Show the cone-cutting view
    --angle <value>     Cutting plane angle (0 to 1)
    --position <value>  Cutting plane height (-2 to 2)
    --fill              Fill circles and ellipses
    --no-foci           Hide focus markers
    --no-grid           Hide the ground grid
    --options <file>    Load scene options from a JSON file
    --json              Write scene JSON instead of HTML
    --help              Show this help message

EXAMPLES:
    conic_viewer circle --a 3
    conic_viewer parabola --a 0.5 --h 1 parabola.html
    conic_viewer ellipse --cone --angle 0.3 --json ellipse.json
"#
    );
}

struct Args {
    view: ViewState,
    options: SceneOptions,
    json: bool,
    output: PathBuf,
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}\n", message);
    print_usage();
    process::exit(1);
}

fn number(flag: &str, value: Option<&String>) -> f64 {
    match value.map(|v| v.parse::<f64>()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => fail(&format!("{} expects a number", flag)),
        None => fail(&format!("{} requires a value", flag)),
    }
}

fn load_options(path: &Path) -> SceneOptions {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => fail(&format!("cannot read {}: {}", path.display(), e)),
    };
    match SceneOptions::from_json_str(&text) {
        Ok(options) => options,
        Err(e) => fail(&e.to_string()),
    }
}

fn parse_args(args: &[String]) -> Args {
    let kind: ConicType = match args[1].parse() {
        Ok(kind) => kind,
        Err(e) => fail(&e.to_string()),
    };

    let mut view = ViewState::new(kind);
    let mut options = SceneOptions::default();
    let mut json = false;
    let mut output = None;
    // plane sliders apply after the mode switch, which resets the angle
    let mut angle = None;
    let mut position = None;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--a" => view.set_a(number(arg, rest.next())),
            "--b" => view.set_b(number(arg, rest.next())),
            "--h" => view.set_h(number(arg, rest.next())),
            "--k" => view.set_k(number(arg, rest.next())),
            "--segments" => match rest.next().map(|v| v.parse::<usize>()) {
                Some(Ok(n)) => view.set_segments(n),
                _ => fail("--segments expects a whole number"),
            },
            "--cone" => view.set_view_mode(ViewMode::ConeCutting),
            "--angle" => angle = Some(number(arg, rest.next())),
            "--position" => position = Some(number(arg, rest.next())),
            "--fill" => view.set_shown(Layer::Fill, true),
            "--no-foci" => view.set_shown(Layer::Foci, false),
            "--no-grid" => view.set_shown(Layer::Grid, false),
            "--options" => match rest.next() {
                Some(path) => options = load_options(Path::new(path)),
                None => fail("--options requires a file"),
            },
            "--json" => json = true,
            flag if flag.starts_with("--") => fail(&format!("unknown option {}", flag)),
            path => output = Some(PathBuf::from(path)),
        }
    }

    if let Some(angle) = angle {
        view.set_plane_angle(angle);
    }
    if let Some(position) = position {
        view.set_plane_position(position);
    }

    let output = output.unwrap_or_else(|| {
        PathBuf::from(kind.name()).with_extension(if json { "json" } else { "html" })
    });
    Args {
        view,
        options,
        json,
        output,
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        fail("Missing required argument <type>");
    }
    if args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(0);
    }

    let Args {
        view,
        options,
        json,
        output,
    } = parse_args(&args);

    eprintln!("{}: {}", view.kind().label(), view.equation());
    eprintln!("  {}", view.kind().description());

    let scene = build_scene_with(&view, &options);
    let written = if json {
        scene
            .to_json()
            .and_then(|data| std::fs::write(&output, data).map_err(Into::into))
    } else {
        scene.export_html(&output)
    };

    match written {
        Ok(()) => {
            eprintln!("✓ Wrote {}", output.display());
            eprintln!("  Polylines: {}", scene.polylines.len());
            eprintln!(
                "  Meshes:    {} ({} triangles)",
                scene.meshes.len(),
                scene.total_triangles()
            );
            eprintln!("  Markers:   {}", scene.markers.len());
        }
        Err(e) => {
            eprintln!("✗ Export failed: {}", e);
            process::exit(1);
        }
    }
}
