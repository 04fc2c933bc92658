// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashMap;

use crate::MarkupNode;

/// A stable identifier for a node in a [`Scene`].
///
/// Ids are allocated from a monotonically increasing counter and never
/// reused, so a stale `NodeId` can never alias a different live node. Holding
/// a `NodeId` confers no liveness: resolve it against the scene on every use.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

/// Owner of all markup nodes, addressed by stable [`NodeId`]s.
///
/// The scene also carries a `closing` flag set by the surrounding document
/// model when teardown begins; deferred destructive actions check it and skip
/// themselves rather than mutate a scene that is going away.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: HashMap<NodeId, MarkupNode>,
    next_id: u64,
    closing: bool,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its id.
    pub fn insert(&mut self, node: MarkupNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Resolves an id to its node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&MarkupNode> {
        self.nodes.get(&id)
    }

    /// Resolves an id to its node, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut MarkupNode> {
        self.nodes.get_mut(&id)
    }

    /// Removes and returns a node. Stale ids yield `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<MarkupNode> {
        self.nodes.remove(&id)
    }

    /// Whether the id still refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all live nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MarkupNode)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    /// Whether the surrounding document model has begun teardown.
    #[must_use]
    pub fn closing(&self) -> bool {
        self.closing
    }

    /// Marks the scene as closing (or reopens it).
    pub fn set_closing(&mut self, closing: bool) {
        self.closing = closing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkupKind;

    #[test]
    fn insert_get_remove_roundtrip() {
        let mut scene = Scene::new();
        let id = scene.insert(MarkupNode::new(MarkupKind::Fiducial));
        assert!(scene.is_alive(id));
        assert_eq!(scene.len(), 1);

        let node = scene.remove(id).unwrap();
        assert_eq!(node.kind(), MarkupKind::Fiducial);
        assert!(!scene.is_alive(id));
        assert!(scene.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut scene = Scene::new();
        let a = scene.insert(MarkupNode::new(MarkupKind::Curve));
        scene.remove(a);
        let b = scene.insert(MarkupNode::new(MarkupKind::Curve));
        assert_ne!(a, b);
        assert!(!scene.is_alive(a));
        assert!(scene.is_alive(b));
    }

    #[test]
    fn stale_id_lookups_return_none() {
        let mut scene = Scene::new();
        let id = scene.insert(MarkupNode::new(MarkupKind::Line));
        scene.remove(id);
        assert!(scene.get(id).is_none());
        assert!(scene.get_mut(id).is_none());
        assert!(scene.remove(id).is_none());
    }

    #[test]
    fn closing_flag_roundtrip() {
        let mut scene = Scene::new();
        assert!(!scene.closing());
        scene.set_closing(true);
        assert!(scene.closing());
    }
}
