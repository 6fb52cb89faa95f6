use crate::Predictor;
use ringzip_math::{to_angle, DEFAULT_ERROR_THRESHOLD, FULL_TURN};

/// Index of a node inside a [`PartitionTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in insertion order (the root is `0`).
    pub fn index(self) -> usize {
        self.0
    }
}

/// One observed byte and the half-open angular interval `[angle_start, angle_end)`
/// it was inserted into.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionNode {
    /// Byte stored at this slot. Never replaced once written.
    pub value: u8,
    pub angle_start: f64,
    pub angle_end: f64,
    /// Relative tolerance used by the tolerant match rule (`threshold * 256`).
    pub error_threshold: f64,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl PartitionNode {
    fn new(value: u8, angle_start: f64, angle_end: f64, error_threshold: f64) -> Self {
        Self {
            value,
            angle_start,
            angle_end,
            error_threshold,
            left: None,
            right: None,
        }
    }

    /// Split point between the left `[start, mid)` and right `[mid, end)` halves.
    #[inline]
    pub fn mid_angle(&self) -> f64 {
        (self.angle_start + self.angle_end) / 2.0
    }

    /// Angle of the stored byte.
    #[inline]
    pub fn angle(&self) -> f64 {
        to_angle(self.value)
    }

    /// Plain absolute angular distance; no wrap-around at `2π`.
    #[inline]
    pub fn distance_to(&self, angle: f64) -> f64 {
        (self.angle() - angle).abs()
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Child on the side of the midpoint that `angle` falls on.
    #[inline]
    fn child_toward(&self, angle: f64) -> Option<NodeId> {
        if angle < self.mid_angle() {
            self.left
        } else {
            self.right
        }
    }
}

/// Binary trie over the circle, stored as an arena in insertion order.
///
/// Every [`insert`](Self::insert) adds exactly one node: it walks the
/// midpoint splits toward the byte's angle and fills the first empty child
/// slot it meets. The walk depends only on the angle, so the same insertion
/// sequence always yields the same tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionTree {
    nodes: Vec<PartitionNode>,
    error_threshold: f64,
}

impl Default for PartitionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartitionTree {
    pub fn new() -> Self {
        Self::with_error_threshold(DEFAULT_ERROR_THRESHOLD)
    }

    /// Tree whose nodes carry `error_threshold` instead of the default 0.1.
    pub fn with_error_threshold(error_threshold: f64) -> Self {
        Self {
            nodes: Vec::new(),
            error_threshold,
        }
    }

    pub fn error_threshold(&self) -> f64 {
        self.error_threshold
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&PartitionNode> {
        self.nodes.first()
    }

    pub fn node(&self, id: NodeId) -> Option<&PartitionNode> {
        self.nodes.get(id.0)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &PartitionNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Insert a byte and return the id of the node created for it.
    pub fn insert(&mut self, value: u8) -> NodeId {
        let id = NodeId(self.nodes.len());
        if self.nodes.is_empty() {
            self.nodes
                .push(PartitionNode::new(value, 0.0, FULL_TURN, self.error_threshold));
            return id;
        }

        let angle = to_angle(value);
        let mut current = 0;
        loop {
            let node = &self.nodes[current];
            let mid = node.mid_angle();
            let goes_left = angle < mid;
            let (slot, start, end) = if goes_left {
                (node.left, node.angle_start, mid)
            } else {
                (node.right, mid, node.angle_end)
            };

            match slot {
                Some(child) => current = child.0,
                None => {
                    self.nodes
                        .push(PartitionNode::new(value, start, end, self.error_threshold));
                    let parent = &mut self.nodes[current];
                    if goes_left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return id;
                }
            }
        }
    }

    /// Greedy nearest search.
    ///
    /// Walks a single root-to-leaf path, always stepping to the child on
    /// `angle`'s side of the midpoint, and returns the path node closest to
    /// `angle`. On equal distance the shallower node wins. The sibling
    /// subtrees are never visited, so a closer byte stored there is missed;
    /// encoder and decoder both depend on exactly this behaviour.
    pub fn find_closest_id(&self, angle: f64) -> Option<NodeId> {
        let root = self.nodes.first()?;
        let mut best = NodeId(0);
        let mut best_distance = root.distance_to(angle);
        let mut cursor = root.child_toward(angle);

        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            let distance = node.distance_to(angle);
            if distance < best_distance {
                best = id;
                best_distance = distance;
            }
            cursor = node.child_toward(angle);
        }
        Some(best)
    }

    /// See [`find_closest_id`](Self::find_closest_id).
    pub fn find_closest(&self, angle: f64) -> Option<&PartitionNode> {
        self.find_closest_id(angle).map(|id| &self.nodes[id.0])
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(NodeId(0), 1usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id.0];
            stack.extend(node.left.into_iter().chain(node.right).map(|c| (c, depth + 1)));
        }
        deepest
    }
}

impl Predictor for PartitionTree {
    /// Closest stored byte to `previous` (angle 0 when there is none).
    fn predict(&self, previous: Option<u8>) -> Option<u8> {
        let angle = previous.map_or(0.0, to_angle);
        self.find_closest(angle).map(|node| node.value)
    }

    fn update(&mut self, value: u8) {
        self.insert(value);
    }

    fn reset(&mut self) {
        self.clear();
    }
}
