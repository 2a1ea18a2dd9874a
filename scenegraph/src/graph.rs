//! Rooted scene graph.
//!
//! Nodes are addressed by their child-index path from the root. An empty
//! path names the root itself.

use crate::node::SceneNode;
use glam::Mat4;

/// Owns the root node. Every draw goes through here so the model matrix of
/// a node always includes all of its ancestors.
#[derive(Debug, Default)]
pub struct SceneGraph<'a> {
    root: SceneNode<'a>,
}

impl<'a> SceneGraph<'a> {
    pub fn new(root: SceneNode<'a>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SceneNode<'a> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SceneNode<'a> {
        &mut self.root
    }

    pub fn into_root(self) -> SceneNode<'a> {
        self.root
    }

    pub fn node(&self, path: &[usize]) -> Option<&SceneNode<'a>> {
        self.locate(path).map(|(node, _)| node)
    }

    pub fn node_mut(&mut self, path: &[usize]) -> Option<&mut SceneNode<'a>> {
        let mut node = &mut self.root;
        for &index in path {
            node = node.child_mut(index)?;
        }
        Some(node)
    }

    /// Product of the local transforms from the root down to the node at
    /// `path`, root leftmost.
    pub fn global_transform(&self, path: &[usize]) -> Option<Mat4> {
        self.locate(path)
            .map(|(node, parent_global)| parent_global * node.local_transform())
    }

    /// Draws the whole tree.
    pub fn draw(&self) {
        self.root.draw_with_parent(Mat4::IDENTITY);
    }

    /// Draws only the subtree at `path`, still placed by its ancestors'
    /// transforms. Returns false, drawing nothing, if the path leads nowhere.
    pub fn draw_at(&self, path: &[usize]) -> bool {
        match self.locate(path) {
            Some((node, parent_global)) => {
                node.draw_with_parent(parent_global);
                true
            }
            None => {
                log::warn!("no scene node at path {path:?}, nothing drawn");
                false
            }
        }
    }

    /// Pre-order walk handing each node its global transform, in draw order.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&SceneNode<'a>, Mat4),
    {
        self.root.visit_with_parent(Mat4::IDENTITY, &mut f);
    }

    pub fn update_animation(&mut self, t: f32) {
        self.root.update_animation(t);
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count() + 1
    }

    /// Node at `path` together with the global transform of its parent.
    fn locate(&self, path: &[usize]) -> Option<(&SceneNode<'a>, Mat4)> {
        let mut node = &self.root;
        let mut parent_global = Mat4::IDENTITY;
        for &index in path {
            let child = node.child(index)?;
            parent_global *= node.local_transform();
            node = child;
        }
        Some((node, parent_global))
    }
}

impl<'a> From<SceneNode<'a>> for SceneGraph<'a> {
    fn from(root: SceneNode<'a>) -> Self {
        Self::new(root)
    }
}
