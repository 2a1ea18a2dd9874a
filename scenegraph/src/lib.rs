pub mod animation;
pub mod graph;
pub mod node;
pub mod render;
pub mod trs;

pub use animation::AnimationDriver;
pub use graph::SceneGraph;
pub use node::{Keyframes, SceneNode};
pub use render::{Drawable, Mesh, ShaderProgram, UniformLocation, UniformRole, UniformValue};
pub use trs::Trs;
