//! Arena-backed tree storage and structural metrics.

use core::fmt;

use crate::{Action, Composite, Condition, Status};

/// Index of a node in its [`Tree`]. Ids follow pre-order, so the n-th
/// non-`)` token of a description becomes `NodeId(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Condition(Condition),
    Action(Action),
    Composite(Composite),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: String,
    pub(crate) status: Status,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            status: Status::Invalid,
            kind,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Composite(composite) => composite.children(),
            _ => &[],
        }
    }

    pub fn action(&self) -> Option<&Action> {
        match &self.kind {
            NodeKind::Action(action) => Some(action),
            _ => None,
        }
    }

    pub fn composite(&self) -> Option<&Composite> {
        match &self.kind {
            NodeKind::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Composite(_))
    }
}

/// A behavior tree: nodes in pre-order plus the outcome flags of the last run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    root: NodeId,
    pub(crate) failed: bool,
    pub(crate) timeout: bool,
}

impl Tree {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            root: NodeId(0),
            failed: false,
            timeout: false,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Status of the root after the last tick.
    pub fn status(&self) -> Status {
        self.nodes[self.root.0].status
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// First node, in pre-order, carrying `label`.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.iter().find(|(_, node)| node.label() == label).map(|(id, _)| id)
    }

    /// Number of nodes; equals the number of non-`)` tokens.
    pub fn length(&self) -> usize {
        self.nodes.len()
    }

    /// Composite nesting depth. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.depth_of(self.root)
    }

    fn depth_of(&self, id: NodeId) -> usize {
        let node = self.node(id);
        if !node.is_composite() {
            return 0;
        }
        1 + node
            .children()
            .iter()
            .map(|child| self.depth_of(*child))
            .max()
            .unwrap_or(0)
    }

    /// The last run ended on consecutive failures.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// The last run exhausted its tick budget.
    pub fn timeout(&self) -> bool {
        self.timeout
    }

    fn render(&self, id: NodeId, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node(id);
        let mark = match node.status {
            Status::Success => 'o',
            Status::Failure => 'x',
            Status::Running => '*',
            Status::Invalid => '-',
        };
        let label = match node.composite() {
            Some(composite) => composite.kind().to_string(),
            None => node.label.clone(),
        };
        writeln!(f, "{:indent$}[{mark}] {label}", "", indent = indent * 4)?;
        for child in node.children() {
            self.render(*child, indent + 1, f)?;
        }
        Ok(())
    }
}

/// Indented outline with one status mark per node.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(self.root, 0, f)
    }
}
