//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices; parent links are indices too,
//! so the arena is the only owner.

use crate::node::{MctsNode, NodeId};
use crate::selection::{argmax_last, ucb1, FinalActionPolicy, SelectionPolicy, UcbPerspective};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<A> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<A>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<A: PartialEq> MctsTree<A> {
    /// Create a new tree whose root has the given legal actions.
    pub fn new(root_legal_actions: Vec<A>) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_legal_actions)],
            root: NodeId(0),
        }
    }
}

impl<A> MctsTree<A> {
    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<A> {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<A> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<A>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of a node, the root being 0.
    pub fn depth(&self, id: NodeId) -> u32 {
        let mut depth = 0;
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).parent;
        }
        depth
    }

    /// Select a child of `node_id` to descend into.
    ///
    /// Returns `None` when the node has no children.
    pub fn select_child(
        &self,
        node_id: NodeId,
        policy: SelectionPolicy,
        exploration: f64,
        perspective: UcbPerspective,
    ) -> Option<NodeId> {
        let node = self.get(node_id);
        let ucb_values: Vec<f64> = node
            .children
            .iter()
            .map(|(_, id)| {
                let child = self.get(*id);
                let total = match perspective {
                    UcbPerspective::OwnVisits => child.visits,
                    UcbPerspective::ParentVisits => node.visits,
                };
                ucb1(child.wins, child.visits, total, exploration)
            })
            .collect();

        policy
            .choose(&ucb_values)
            .map(|idx| node.children[idx].1)
    }

    /// Record one round's outcome on every node from `leaf_id` up to the root.
    pub fn backpropagate(&mut self, leaf_id: NodeId, won: bool) {
        let mut current = Some(leaf_id);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.record_visit();
            if won {
                node.record_win();
            }
            current = node.parent;
        }
    }

    /// Statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_wins: root.wins,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        node.children
            .iter()
            .map(|(_, id)| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

impl<A: Clone + PartialEq> MctsTree<A> {
    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, action: A, legal_actions: Vec<A>) -> NodeId {
        let child = MctsNode::new_child(parent_id, action.clone(), legal_actions);
        let child_id = self.allocate(child);
        self.get_mut(parent_id).attach_child(action, child_id);
        child_id
    }

    /// The recommended action among the root's children.
    ///
    /// Returns `None` if the root has no children.
    pub fn best_action(&self, policy: FinalActionPolicy) -> Option<A> {
        let root = self.get(self.root);
        argmax_last(root.children.iter().map(|(_, id)| policy.key(self.get(*id))))
            .map(|idx| root.children[idx].0.clone())
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_wins: u32,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_stats(tree: &mut MctsTree<u8>, id: NodeId, wins: u32, visits: u32) {
        let node = tree.get_mut(id);
        node.wins = wins;
        node.visits = visits;
    }

    #[test]
    fn test_new_tree() {
        let tree = MctsTree::new(vec![1u8, 2, 3]);

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId(0));

        let root = tree.get(tree.root());
        assert!(root.is_root());
        assert_eq!(root.untried_actions(), &[1, 2, 3]);
    }

    #[test]
    fn test_add_child() {
        let mut tree = MctsTree::new(vec![0u8, 1]);

        let child_id = tree.add_child(tree.root(), 1, vec![5, 6]);

        assert_eq!(tree.len(), 2);
        assert_eq!(child_id, NodeId(1));

        let root = tree.get(tree.root());
        assert_eq!(root.children, vec![(1, NodeId(1))]);

        let child = tree.get(child_id);
        assert_eq!(child.parent, Some(tree.root()));
        assert_eq!(child.parent_action, Some(1));
        assert_eq!(child.untried_actions(), &[5, 6]);
        assert_eq!(tree.depth(child_id), 1);
    }

    #[test]
    fn test_backpropagate() {
        let mut tree = MctsTree::new(vec![0u8]);

        // Create a chain: root -> child -> grandchild
        let child_id = tree.add_child(tree.root(), 0, vec![1]);
        let grandchild_id = tree.add_child(child_id, 1, vec![]);

        tree.backpropagate(grandchild_id, true);
        tree.backpropagate(grandchild_id, false);

        // Same credit on every node of the path
        for id in [grandchild_id, child_id, tree.root()] {
            assert_eq!(tree.get(id).visits, 2);
            assert_eq!(tree.get(id).wins, 1);
        }
    }

    #[test]
    fn test_backpropagate_stops_at_root() {
        let mut tree = MctsTree::new(vec![0u8, 1]);
        let left = tree.add_child(tree.root(), 0, vec![]);
        let right = tree.add_child(tree.root(), 1, vec![]);

        tree.backpropagate(left, true);

        assert_eq!(tree.get(left).visits, 1);
        assert_eq!(tree.get(right).visits, 0);
        assert_eq!(tree.get(tree.root()).visits, 1);
    }

    #[test]
    fn test_select_child_zero_exploration_picks_best_rate() {
        let mut tree = MctsTree::new(vec![0u8, 1, 2]);
        let a = tree.add_child(tree.root(), 0, vec![]);
        let b = tree.add_child(tree.root(), 1, vec![]);
        let c = tree.add_child(tree.root(), 2, vec![]);
        set_stats(&mut tree, a, 2, 10);
        set_stats(&mut tree, b, 7, 10);
        set_stats(&mut tree, c, 5, 10);
        let root = tree.root();
        set_stats(&mut tree, root, 14, 30);

        for perspective in [UcbPerspective::OwnVisits, UcbPerspective::ParentVisits] {
            let best = tree.select_child(tree.root(), SelectionPolicy::Plain, 0.0, perspective);
            assert_eq!(best, Some(b));
        }
    }

    #[test]
    fn test_select_child_tie_picks_later_child() {
        let mut tree = MctsTree::new(vec![0u8, 1, 2]);
        let a = tree.add_child(tree.root(), 0, vec![]);
        let b = tree.add_child(tree.root(), 1, vec![]);
        let c = tree.add_child(tree.root(), 2, vec![]);
        set_stats(&mut tree, a, 3, 4);
        set_stats(&mut tree, b, 3, 4);
        set_stats(&mut tree, c, 1, 4);

        for policy in [SelectionPolicy::Plain, SelectionPolicy::HeuristicWeighted] {
            let best = tree.select_child(tree.root(), policy, 2.0, UcbPerspective::OwnVisits);
            assert_eq!(best, Some(b));
        }
    }

    #[test]
    fn test_select_child_parent_perspective_favors_less_visited() {
        let mut tree = MctsTree::new(vec![0u8, 1]);
        let a = tree.add_child(tree.root(), 0, vec![]);
        let b = tree.add_child(tree.root(), 1, vec![]);
        // Same win rate, b visited far less
        set_stats(&mut tree, a, 25, 50);
        set_stats(&mut tree, b, 1, 2);
        let root = tree.root();
        set_stats(&mut tree, root, 26, 52);

        let best = tree.select_child(
            tree.root(),
            SelectionPolicy::Plain,
            2.0,
            UcbPerspective::ParentVisits,
        );
        assert_eq!(best, Some(b));
    }

    #[test]
    fn test_select_child_without_children() {
        let tree = MctsTree::new(vec![0u8]);
        let best = tree.select_child(
            tree.root(),
            SelectionPolicy::Plain,
            2.0,
            UcbPerspective::OwnVisits,
        );
        assert_eq!(best, None);
    }

    #[test]
    fn test_best_action_policies_can_disagree() {
        let mut tree = MctsTree::new(vec![0u8, 1]);
        let a = tree.add_child(tree.root(), 0, vec![]);
        let b = tree.add_child(tree.root(), 1, vec![]);
        set_stats(&mut tree, a, 30, 100);
        set_stats(&mut tree, b, 4, 5);

        assert_eq!(tree.best_action(FinalActionPolicy::MostWins), Some(0));
        assert_eq!(tree.best_action(FinalActionPolicy::BestWinRate), Some(1));
    }

    #[test]
    fn test_best_action_tie_and_empty() {
        let mut tree = MctsTree::new(vec![0u8, 1]);
        assert_eq!(tree.best_action(FinalActionPolicy::MostWins), None);

        // Unvisited children rate 0.0 and tie; the later one wins
        tree.add_child(tree.root(), 0, vec![]);
        tree.add_child(tree.root(), 1, vec![]);
        assert_eq!(tree.best_action(FinalActionPolicy::BestWinRate), Some(1));
        assert_eq!(tree.best_action(FinalActionPolicy::MostWins), Some(1));
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MctsTree::new(vec![0u8, 1]);
        let child = tree.add_child(tree.root(), 0, vec![1]);
        let grandchild = tree.add_child(child, 1, vec![]);
        tree.backpropagate(grandchild, true);

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.root_visits, 1);
        assert_eq!(stats.root_wins, 1);
    }
}
