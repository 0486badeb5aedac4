//! Command-line entry point: decodes a glTF asset, builds the startup
//! camera and sphere scene from an optional TOML preset, and logs a summary.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glam::UVec2;
use refraction::camera::{CameraState, CameraUniform};
use refraction::error::RefractionError;
use refraction::input::InputProcessor;
use refraction::mesh::{self, Mesh};
use refraction::options::Options;
use refraction::scene::SphereList;
use refraction::util::FrameTiming;

struct Args {
    asset: PathBuf,
    options: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args_os().skip(1);
    let asset = PathBuf::from(args.next()?);
    let options = args.next().map(PathBuf::from);
    Some(Args { asset, options })
}

fn load_options(path: Option<&Path>) -> Result<Options, RefractionError> {
    match path {
        Some(path) => Options::load(path),
        None => Ok(Options::default()),
    }
}

fn log_mesh(path: &Path, mesh: &Mesh) {
    log::info!(
        "{}: {} vertices, {} triangles, normals: {}, indexed: {}",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.has_normals(),
        mesh.has_indices(),
    );
    if let Some((min, max)) = mesh.bounds() {
        log::info!("bounds: {min} .. {max}");
    }
}

fn run(args: &Args) -> Result<(), RefractionError> {
    let options = load_options(args.options.as_deref())?;
    let mesh = mesh::decode(&args.asset)?;
    log_mesh(&args.asset, &mesh);

    let viewport = UVec2::new(options.window.width, options.window.height);
    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone())
        .with_viewport(viewport.x, viewport.y);
    let mut camera = CameraState::from_options(&options.camera, viewport);
    camera.process_input(&input.frame_input());

    let spheres = SphereList::with_default_sphere();
    let mut uniform = CameraUniform::new();
    uniform.update_camera(&camera, options.camera.fov);
    uniform.update_scene(&options.tracing, spheres.len());

    log::info!(
        "camera at {} looking {} (yaw {}, pitch {})",
        camera.position(),
        camera.orientation(),
        camera.yaw(),
        camera.pitch(),
    );
    log::info!(
        "{} sphere(s), {} bytes of sphere data, {} bytes of uniforms",
        spheres.len(),
        spheres.as_bytes().len(),
        bytemuck::bytes_of(&uniform).len(),
    );

    let timing = FrameTiming::new();
    log::info!("{}", timing.window_title(&options.window.title));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = parse_args() else {
        log::error!("Usage: refraction <asset.gltf|asset.glb> [options.toml]");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
