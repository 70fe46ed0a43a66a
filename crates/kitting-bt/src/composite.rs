use core::fmt;

use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// Succeeds when every child succeeds, in order.
    Sequence,
    /// Succeeds at the first child that does not fail.
    Fallback,
    /// Ticks every child each cycle; succeeds on all, fails on any.
    Parallel,
}

impl CompositeKind {
    /// Opening token.
    pub fn token(self) -> &'static str {
        match self {
            CompositeKind::Sequence => "s(",
            CompositeKind::Fallback => "f(",
            CompositeKind::Parallel => "p(",
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompositeKind::Sequence => "Sequence",
            CompositeKind::Fallback => "Fallback",
            CompositeKind::Parallel => "Parallel",
        })
    }
}

/// Interior node. Children are ids into the owning [`crate::Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    kind: CompositeKind,
    pub(crate) children: Vec<NodeId>,
    /// Child that returned control on the previous tick.
    pub(crate) current_child: Option<usize>,
}

impl Composite {
    pub fn new(kind: CompositeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            current_child: None,
        }
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn current_child(&self) -> Option<usize> {
        self.current_child
    }
}
