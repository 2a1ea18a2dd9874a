//! Scene graph nodes.
//!
//! A [`SceneNode`] owns its children outright and borrows its mesh and shader
//! for `'a`. There is no stored parent pointer: drawing only happens through
//! a [`SceneGraph`](crate::SceneGraph), which starts at the root and carries
//! the accumulated parent matrix downwards, so a node's global transform is
//! `root.local * .. * parent.local * node.local`.

use crate::render::{Drawable, Mesh, ShaderProgram};
use crate::trs::Trs;
use glam::{Mat4, Vec3, Vec4};
use smallvec::SmallVec;

pub type Children<'a> = SmallVec<[Box<SceneNode<'a>>; 4]>;

/// Start and end poses blended by [`SceneNode::update_animation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub start: Trs,
    pub end: Trs,
}

#[derive(Debug)]
pub struct SceneNode<'a> {
    drawable: Option<Drawable<'a>>,
    local: Mat4,
    color: Vec4,
    keyframes: Keyframes,
    animated: bool,
    children: Children<'a>,
}

impl<'a> SceneNode<'a> {
    /// Identity pivot: no payload, white, not animated.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matrix(local: Mat4) -> Self {
        Self {
            local,
            ..Self::default()
        }
    }

    /// Keyframes start out as `start = end = trs`, so a later
    /// [`set_animation`](Self::set_animation) can be written against the same pose.
    pub fn from_trs(trs: Trs) -> Self {
        Self {
            local: trs.to_matrix(),
            keyframes: Keyframes {
                start: trs,
                end: trs,
            },
            ..Self::default()
        }
    }

    pub fn with_payload(
        mesh: &'a dyn Mesh,
        shader: &'a dyn ShaderProgram,
        trs: Trs,
        color: Vec4,
    ) -> Self {
        Self::from_trs(trs).with_drawable(mesh, shader).with_color(color)
    }

    pub fn with_drawable(mut self, mesh: &'a dyn Mesh, shader: &'a dyn ShaderProgram) -> Self {
        self.drawable = Some(Drawable::new(mesh, shader));
        self
    }

    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Appends `child`, taking ownership of it and its whole subtree.
    ///
    /// Taking the child by value means it cannot already belong to another
    /// node, and no node can end up as its own ancestor.
    pub fn add_child(&mut self, child: SceneNode<'a>) {
        log::debug!(
            "attaching child #{} ({} nodes in subtree)",
            self.children.len(),
            child.descendant_count() + 1
        );
        self.children.push(Box::new(child));
    }

    /// Draws the subtree below a parent whose global transform is
    /// `parent_global`. Callers go through [`SceneGraph`](crate::SceneGraph),
    /// which knows the ancestors.
    pub(crate) fn draw_with_parent(&self, parent_global: Mat4) {
        self.visit_with_parent(parent_global, &mut |node: &SceneNode<'a>, global: Mat4| {
            match &node.drawable {
                Some(drawable) => {
                    log::trace!("drawing node with model matrix {global:?}");
                    drawable.render(global, node.color);
                }
                None => log::trace!("pivot node, nothing to draw"),
            }
        });
    }

    /// Pre-order walk handing each node its global transform.
    pub(crate) fn visit_with_parent<F>(&self, parent_global: Mat4, f: &mut F)
    where
        F: FnMut(&SceneNode<'a>, Mat4),
    {
        let global = parent_global * self.local;
        f(self, global);
        for child in &self.children {
            child.visit_with_parent(global, f);
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.local = Mat4::from_translation(position) * self.local;
    }

    /// Rotates by `angle` degrees about `axis`. The axis does not need to be
    /// normalized but must not be zero.
    pub fn set_rotation(&mut self, angle: f32, axis: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            log::warn!("ignoring rotation of {angle} degrees about degenerate axis {axis}");
            return;
        };
        self.local = Mat4::from_axis_angle(axis, angle.to_radians()) * self.local;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.local = Mat4::from_scale(scale) * self.local;
    }

    /// Replaces the keyframes and marks the node animated. Children are not
    /// touched.
    pub fn set_animation(&mut self, start: Trs, end: Trs) {
        log::debug!("animating node from {start:?} to {end:?}");
        self.keyframes = Keyframes { start, end };
        self.animated = true;
    }

    /// Blends every animated node in the subtree to `t`. Static nodes keep
    /// their local transform. `t` is expected in `[0, 1]` and is not clamped.
    pub fn update_animation(&mut self, t: f32) {
        if self.animated {
            self.local = Trs::matrix_between(&self.keyframes.start, &self.keyframes.end, t);
        }
        for child in &mut self.children {
            child.update_animation(t);
        }
    }

    pub fn local_transform(&self) -> Mat4 {
        self.local
    }

    pub fn set_local_transform(&mut self, local: Mat4) {
        self.local = local;
    }

    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    pub fn drawable(&self) -> Option<&Drawable<'a>> {
        self.drawable.as_ref()
    }

    pub fn is_pivot(&self) -> bool {
        self.drawable.is_none()
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn keyframes(&self) -> &Keyframes {
        &self.keyframes
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = &SceneNode<'a>> {
        self.children.iter().map(|child| &**child)
    }

    pub fn child(&self, index: usize) -> Option<&SceneNode<'a>> {
        self.children.get(index).map(|child| &**child)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut SceneNode<'a>> {
        self.children.get_mut(index).map(|child| &mut **child)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes below this one, not counting itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

impl Default for SceneNode<'_> {
    fn default() -> Self {
        Self {
            drawable: None,
            local: Mat4::IDENTITY,
            color: Vec4::ONE,
            keyframes: Keyframes {
                start: Trs::IDENTITY,
                end: Trs::IDENTITY,
            },
            animated: false,
            children: SmallVec::new(),
        }
    }
}
