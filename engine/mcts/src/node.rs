//! MCTS tree node representation.
//!
//! Each node represents a game state reached by taking an action from the parent.
//! Nodes store the win/visit statistics used for UCB1 selection, the children
//! expanded so far, and the legal actions that have not been expanded yet.
//! Nodes never see game states; the search carries the state alongside.

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<A> {
    /// Parent node index (None for root). Navigation only, the arena owns nodes.
    pub parent: Option<NodeId>,

    /// Action that led to this node from parent (None for root)
    pub parent_action: Option<A>,

    /// Children as (action, NodeId) pairs in insertion order.
    pub children: Vec<(A, NodeId)>,

    /// Legal actions at this node's state that have not been expanded.
    untried_actions: Vec<A>,

    /// Number of rounds that passed through this node
    pub visits: u32,

    /// Number of those rounds that ended in a win for the searching player
    pub wins: u32,
}

/// Drop repeated actions, keeping the first occurrence of each.
fn distinct<A: PartialEq>(actions: Vec<A>) -> Vec<A> {
    let mut unique = Vec::with_capacity(actions.len());
    for action in actions {
        if !unique.contains(&action) {
            unique.push(action);
        }
    }
    unique
}

impl<A: PartialEq> MctsNode<A> {
    /// Create a new root node. Repeated legal actions are collapsed.
    pub fn new_root(legal_actions: Vec<A>) -> Self {
        Self {
            parent: None,
            parent_action: None,
            children: Vec::new(),
            untried_actions: distinct(legal_actions),
            visits: 0,
            wins: 0,
        }
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: A, legal_actions: Vec<A>) -> Self {
        Self {
            parent: Some(parent),
            parent_action: Some(action),
            children: Vec::new(),
            untried_actions: distinct(legal_actions),
            visits: 0,
            wins: 0,
        }
    }
}

impl<A> MctsNode<A> {

    /// Whether this is the root of its tree.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Win rate = wins / visits. Returns 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether any legal action is still waiting to be expanded.
    #[inline]
    pub fn has_untried(&self) -> bool {
        !self.untried_actions.is_empty()
    }

    /// Actions not yet expanded. `take_untried` hands them out from the end.
    #[inline]
    pub fn untried_actions(&self) -> &[A] {
        &self.untried_actions
    }

    /// Remove and return one untried action.
    ///
    /// Takes the most recently listed action. Each action is handed out at
    /// most once over the node's lifetime.
    #[inline]
    pub fn take_untried(&mut self) -> Option<A> {
        self.untried_actions.pop()
    }

    /// Count one more round through this node.
    #[inline]
    pub fn record_visit(&mut self) {
        self.visits += 1;
    }

    /// Count one more winning round through this node.
    #[inline]
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Attach an already allocated child.
    pub(crate) fn attach_child(&mut self, action: A, child: NodeId) {
        self.children.push((action, child));
    }
}

impl<A: PartialEq> MctsNode<A> {
    /// Look up the child reached by `action`.
    pub fn child(&self, action: &A) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, id)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(vec![1u8, 2, 3]);

        assert!(node.is_root());
        assert!(node.parent_action.is_none());
        assert_eq!(node.visits, 0);
        assert_eq!(node.wins, 0);
        assert!(node.children.is_empty());
        assert_eq!(node.untried_actions(), &[1, 2, 3]);
    }

    #[test]
    fn test_new_child() {
        let node = MctsNode::new_child(NodeId(0), 7u8, vec![]);

        assert!(!node.is_root());
        assert_eq!(node.parent, Some(NodeId(0)));
        assert_eq!(node.parent_action, Some(7));
        assert!(!node.has_untried());
    }

    #[test]
    fn test_win_rate() {
        let mut node = MctsNode::new_root(Vec::<u8>::new());

        // Unvisited
        assert!((node.win_rate()).abs() < 1e-12);

        // After visits
        node.visits = 4;
        node.wins = 3;
        assert!((node.win_rate() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_take_untried_never_repeats() {
        let mut node = MctsNode::new_root(vec![10u8, 20, 30, 40]);
        let mut taken = Vec::new();

        while let Some(action) = node.take_untried() {
            assert!(!taken.contains(&action), "action {} handed out twice", action);
            taken.push(action);
        }

        assert_eq!(taken, vec![40, 30, 20, 10]);
        assert!(!node.has_untried());
        assert_eq!(node.take_untried(), None);
    }

    #[test]
    fn test_repeated_legal_actions_are_collapsed() {
        let mut node = MctsNode::new_root(vec![1u8, 1, 2, 1]);
        assert_eq!(node.untried_actions(), &[1, 2]);

        assert_eq!(node.take_untried(), Some(2));
        assert_eq!(node.take_untried(), Some(1));
        assert_eq!(node.take_untried(), None);

        let child = MctsNode::new_child(NodeId(0), 0u8, vec![3, 3]);
        assert_eq!(child.untried_actions(), &[3]);
    }

    #[test]
    fn test_record_statistics() {
        let mut node = MctsNode::new_root(vec![0u8]);
        node.record_visit();
        node.record_visit();
        node.record_win();

        assert_eq!(node.visits, 2);
        assert_eq!(node.wins, 1);
    }

    #[test]
    fn test_child_lookup() {
        let mut node = MctsNode::new_root(Vec::<u8>::new());
        node.attach_child(3, NodeId(1));
        node.attach_child(5, NodeId(2));

        assert!(node.is_expanded());
        assert_eq!(node.child(&5), Some(NodeId(2)));
        assert_eq!(node.child(&4), None);
    }
}
