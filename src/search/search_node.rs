use crate::search::{Cost, Direction, HeuristicValue};
use ordered_float::Float;

/// Index of a node in its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is a node in the search space. It contains information
/// about the state specific to the search, such as path cost and parent
/// node.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the node
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, only meaningful for informed search.
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost of the best known path to it.
    g: Cost,
    /// H-value of the node, the heuristic estimate of the remaining cost.
    h: HeuristicValue,
    /// Move that led to this node, `None` for the root
    transition: Option<Direction>,
    /// Parent node
    parent_id: NodeId,
}

impl SearchNode {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space.
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: Cost::MAX,
            h: HeuristicValue::infinity(),
            transition: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, transition: Direction) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: Cost::MAX,
            h: HeuristicValue::infinity(),
            transition: Some(transition),
            parent_id,
        }
    }

    pub fn open(&mut self, g: Cost, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = HeuristicValue::from(g as f64) + h;
    }

    /// Opens the node again with a cheaper path through `parent_id`. The
    /// heuristic value is kept.
    pub fn reopen(&mut self, g: Cost, parent_id: NodeId, transition: Direction) {
        self.parent_id = parent_id;
        self.transition = Some(transition);
        self.open(g, self.h);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<Direction> {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn reopen_moves_parent_and_keeps_h() {
        let mut node = SearchNode::new_with_parent(NodeId::new(3), NodeId::new(1), Direction::East);
        node.open(7, OrderedFloat(2.));
        assert_eq!(node.get_f(), OrderedFloat(9.));

        node.reopen(4, NodeId::new(2), Direction::North);
        assert_eq!(node.get_g(), 4);
        assert_eq!(node.get_h(), OrderedFloat(2.));
        assert_eq!(node.get_f(), OrderedFloat(6.));
        assert_eq!(node.get_parent_id(), NodeId::new(2));
        assert_eq!(node.get_transition(), Some(Direction::North));
        assert_eq!(node.get_status(), SearchNodeStatus::Open);
    }

    #[test]
    fn root_has_no_parent() {
        let node = SearchNode::new_without_parent(NodeId::new(0));
        assert_eq!(node.get_parent_id(), NO_NODE);
        assert_eq!(node.get_transition(), None);
        assert_eq!(node.get_status(), SearchNodeStatus::New);
    }
}
