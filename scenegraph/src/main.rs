use glam::{Quat, Vec3, Vec4};
use scenegraph::{
    AnimationDriver, Mesh, SceneGraph, SceneNode, ShaderProgram, Trs, UniformLocation, UniformRole,
    UniformValue,
};
use std::cell::Cell;

const DEFAULT_FRAMES: u32 = 120;
const FRAME_TIME: f32 = 1.0 / 60.0;
const ANIMATION_SECONDS: f32 = 1.5;

/// Stands in for an uploaded vertex array; reports its draw calls.
#[derive(Debug)]
struct LoggedMesh {
    name: &'static str,
    draws: Cell<u32>,
}

impl LoggedMesh {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            draws: Cell::new(0),
        }
    }
}

impl Mesh for LoggedMesh {
    fn draw(&self) {
        self.draws.set(self.draws.get() + 1);
        log::trace!("draw {}", self.name);
    }
}

#[derive(Debug, Default)]
struct LoggedShader {
    bound: Cell<bool>,
}

impl ShaderProgram for LoggedShader {
    fn bind(&self) {
        debug_assert!(!self.bound.get(), "shader bound twice");
        self.bound.set(true);
    }

    fn unbind(&self) {
        self.bound.set(false);
    }

    fn uniform_location(&self, role: UniformRole) -> Option<UniformLocation> {
        Some(match role {
            UniformRole::ModelMatrix => UniformLocation::new(0),
            UniformRole::Color => UniformLocation::new(1),
        })
    }

    fn upload_uniform(&self, location: UniformLocation, value: UniformValue) {
        debug_assert!(self.bound.get(), "upload to unbound shader");
        log::trace!(
            "uniform {} <- {} bytes",
            location.index(),
            value.as_bytes().len()
        );
    }
}

fn build_scene<'a>(
    cube: &'a LoggedMesh,
    tile: &'a LoggedMesh,
    shader: &'a LoggedShader,
) -> SceneGraph<'a> {
    let mut root = SceneNode::new();

    root.add_child(SceneNode::with_payload(
        tile,
        shader,
        Trs::from_scale(Vec3::new(6.0, 0.1, 6.0)),
        Vec4::new(0.4, 0.4, 0.4, 1.0),
    ));

    // everything below the pivot swings together
    let mut pivot = SceneNode::from_trs(Trs::from_position(Vec3::new(0.0, 0.5, 0.0)));
    let colors = [
        Vec4::new(0.9, 0.1, 0.1, 1.0),
        Vec4::new(0.1, 0.9, 0.1, 1.0),
        Vec4::new(0.1, 0.1, 0.9, 1.0),
    ];
    for (i, color) in colors.into_iter().enumerate() {
        let offset = i as f32 - 1.0;
        let start = Trs::from_position(Vec3::new(offset * 1.5, 0.0, 0.0));
        let end = Trs::new(
            Vec3::new(offset * 0.5, 1.0 + i as f32, 0.0),
            Quat::from_rotation_y((90.0 * offset).to_radians()),
            Vec3::splat(0.5),
        );

        let mut block = SceneNode::with_payload(cube, shader, start, color);
        block.set_animation(start, end);
        pivot.add_child(block);
    }
    pivot.set_rotation(15.0, Vec3::Y);
    root.add_child(pivot);

    SceneGraph::new(root)
}

fn main() {
    env_logger::init();

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|err| {
            log::warn!("invalid frame count {arg:?} ({err}), using {DEFAULT_FRAMES}");
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    };

    let cube = LoggedMesh::new("cube");
    let tile = LoggedMesh::new("tile");
    let shader = LoggedShader::default();

    let mut scene = build_scene(&cube, &tile, &shader);
    log::info!("scene has {} nodes", scene.node_count());

    let mut driver = AnimationDriver::new(ANIMATION_SECONDS);
    driver.toggle();

    for frame in 0..frames {
        let t = driver.advance(FRAME_TIME);
        scene.update_animation(t);
        scene.draw();

        if driver.is_settled() {
            log::info!("frame {frame}: animation settled at t = {t}, reversing");
            driver.toggle();
        }
    }

    log::info!(
        "{} frames: cube drawn {} times, tile drawn {} times",
        frames,
        cube.draws.get(),
        tile.draws.get()
    );
}
