//! Loads an OBJ mesh and displays it spinning in a window.
//!
//! Usage: `viewer OBJ_FILE [WIDTH HEIGHT]`

use std::env;
use std::ops::ControlFlow::{Break, Continue};
use std::process::ExitCode;

use rf::prelude::*;
use rf_front::{Frame, dims::VGA_640_480, minifb::Window};
use rf_geom::load_obj;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: viewer OBJ_FILE [WIDTH HEIGHT]");
        return ExitCode::from(2);
    };
    let dims = match (args.next(), args.next()) {
        (Some(w), Some(h)) => match (w.parse(), h.parse()) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                eprintln!("usage: viewer OBJ_FILE [WIDTH HEIGHT]");
                return ExitCode::from(2);
            }
        },
        _ => VGA_640_480,
    };

    let mesh = match load_obj(&path) {
        Ok(mesh) => mesh,
        Err(e) => {
            log::error!("could not load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {path}: {mesh:?}");
    let verts = mesh.vertex_array();

    let mut win = Window::builder()
        .title("rasterfall//viewer")
        .dims(dims)
        .build()
        .expect("should create window");

    let cam = Camera {
        pos: vec3(0.0, 0.0, 5.0),
        target: Vec3::zero(),
        up: vec3(0.0, 1.0, 0.0),
    };
    let (w, h) = dims;
    let projection = perspective(degs(60.0), w as f32 / h as f32, 0.1..100.0);
    let viewport = viewport(w, h);
    let view = cam.world_to_view();
    let shader = Flat(rgb(0xFF, 0xFF, 0xFF));

    win.run(|frame: &mut Frame<_>| {
        let spin = rads(frame.t.as_secs_f32() * 0.59);
        let uni = Uniforms {
            model: model_matrix(
                Vec3::zero(),
                [Angle::ZERO, spin, Angle::ZERO],
                vec3(1.0, 1.0, 1.0),
            ),
            view,
            projection,
            viewport,
        };

        match render(&verts, &shader, &uni, frame.buf, frame.ctx) {
            Ok(()) => Continue(()),
            Err(e) => {
                log::error!("render failed: {e}");
                Break(())
            }
        }
    });

    ExitCode::SUCCESS
}
