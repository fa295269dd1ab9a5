use crate::search::{Direction, NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};
use std::collections::HashMap;
use std::hash::Hash;

/// A [`SearchSpace`] is a data structure for managing the states and nodes
/// during a search. Every distinct state gets exactly one node, and the
/// path to a node is recovered by following parent pointers.
#[derive(Debug)]
pub struct SearchSpace<S: Hash + Eq + Clone> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S: Hash + Eq + Clone> SearchSpace<S> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Returns the node of `state`, creating it with the given parent and
    /// transition if the state has not been seen before. An existing node
    /// is returned untouched.
    pub fn insert_or_get_node(
        &mut self,
        state: S,
        transition: Direction,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        let node_id = match self.registered_nodes.get(&state) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId::new(self.nodes.len());
                self.nodes
                    .push(SearchNode::new_with_parent(node_id, parent_id, transition));
                self.registered_nodes.insert(state.clone(), node_id);
                self.states.push(state);
                node_id
            }
        };
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of distinct states generated so far, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    pub fn extract_plan(&self, goal_node_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_node_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(direction) = current_node.get_transition() {
                steps.push(direction);
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }
}
