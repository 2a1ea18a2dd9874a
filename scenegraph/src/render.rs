use glam::{Mat4, Vec4};
use std::fmt::Debug;

/// Uploaded geometry that can issue its own draw call.
pub trait Mesh: Debug {
    fn draw(&self);
}

/// A linked shader program. Uniform uploads only affect the bound program.
pub trait ShaderProgram: Debug {
    fn bind(&self);
    fn unbind(&self);
    fn uniform_location(&self, role: UniformRole) -> Option<UniformLocation>;
    fn upload_uniform(&self, location: UniformLocation, value: UniformValue);
}

/// Uniforms a scene node writes before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformRole {
    ModelMatrix,
    Color,
}

impl UniformRole {
    /// Name of the uniform in the GLSL source.
    pub fn name(self) -> &'static str {
        match self {
            Self::ModelMatrix => "ModelMatrix",
            Self::Color => "Color",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniformLocation(i32);

impl UniformLocation {
    pub fn new(index: i32) -> Self {
        Self(index)
    }

    pub fn index(self) -> i32 {
        self.0
    }
}

impl From<i32> for UniformLocation {
    fn from(index: i32) -> Self {
        Self::new(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec4(Vec4),
}

impl UniformValue {
    /// Column-major floats, ready for `glUniformMatrix4fv` / `glUniform4fv`.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Mat4(m) => bytemuck::bytes_of(m),
            Self::Vec4(v) => bytemuck::bytes_of(v),
        }
    }
}

/// Mesh and shader borrowed by a node. Both are owned by the caller and must
/// outlive the tree.
#[derive(Debug, Clone, Copy)]
pub struct Drawable<'a> {
    pub mesh: &'a dyn Mesh,
    pub shader: &'a dyn ShaderProgram,
}

impl<'a> Drawable<'a> {
    pub fn new(mesh: &'a dyn Mesh, shader: &'a dyn ShaderProgram) -> Self {
        Self { mesh, shader }
    }

    pub fn render(&self, model: Mat4, color: Vec4) {
        self.shader.bind();
        self.upload(UniformRole::ModelMatrix, UniformValue::Mat4(model));
        self.upload(UniformRole::Color, UniformValue::Vec4(color));
        self.mesh.draw();
        self.shader.unbind();
    }

    fn upload(&self, role: UniformRole, value: UniformValue) {
        match self.shader.uniform_location(role) {
            Some(location) => self.shader.upload_uniform(location, value),
            None => log::warn!(
                "shader {:?} has no `{}` uniform, skipping upload",
                self.shader,
                role.name()
            ),
        }
    }
}
