//! Builds a [`Tree`] from its flat token description.
//!
//! Tokens are matched after trimming surrounding whitespace:
//!
//! | token                         | node                     |
//! |-------------------------------|--------------------------|
//! | `s(` `f(` `p(`                | open a composite         |
//! | `)`                           | close the open composite |
//! | `idle` `charge` `pick` `place`| action                   |
//! | `move to STATION`             | action                   |
//! | `at station STATION`          | condition                |
//! | `FIELD < N`, `FIELD > N`      | condition                |
//!
//! where `FIELD` is one of the [`Field`] labels.

use kitting_sim::{ParseStationError, Station};
use thiserror::Error;

use crate::tree::Node;
use crate::{
    Action, ActionKind, Comparator, Composite, CompositeKind, Condition, Field, NodeId, NodeKind,
    Tree,
};

/// Why a token sequence does not describe a tree. `index` is the offending
/// token's position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no tokens")]
    Empty,
    #[error("token {index}: unrecognized token `{token}`")]
    UnknownToken { index: usize, token: String },
    #[error("token {index}: {source}")]
    UnknownStation {
        index: usize,
        source: ParseStationError,
    },
    #[error("token {index}: `{token}` needs a `<` or `>` comparator")]
    MissingComparator { index: usize, token: String },
    #[error("token {index}: `{token}` needs an integer threshold")]
    InvalidThreshold { index: usize, token: String },
    #[error("token {index}: `)` has no composite to close")]
    UnexpectedClose { index: usize },
    #[error("token {index}: `{token}` is never closed")]
    Unclosed { index: usize, token: String },
    #[error("token {index}: `{token}` has no children")]
    EmptyComposite { index: usize, token: String },
    #[error("token {index}: `{token}` follows a complete tree")]
    TrailingToken { index: usize, token: String },
}

enum Token {
    Open(CompositeKind),
    Close,
    Leaf(NodeKind),
}

/// Builds a fresh tree. Every node starts `Invalid` with cleared memory.
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Tree, BuildError> {
    let mut nodes: Vec<Node> = Vec::with_capacity(tokens.len());
    // Open composites with the index of their opening token.
    let mut open: Vec<(NodeId, usize)> = Vec::new();

    for (index, raw) in tokens.iter().enumerate() {
        let text = raw.as_ref().trim();
        let token = parse_token(index, text)?;

        if let Token::Close = token {
            let (id, opened) = open.pop().ok_or(BuildError::UnexpectedClose { index })?;
            if nodes[id.0].children().is_empty() {
                return Err(BuildError::EmptyComposite {
                    index: opened,
                    token: tokens[opened].as_ref().trim().to_string(),
                });
            }
            continue;
        }

        if !nodes.is_empty() && open.is_empty() {
            return Err(BuildError::TrailingToken {
                index,
                token: text.to_string(),
            });
        }

        let id = NodeId(nodes.len());
        if let Some((parent, _)) = open.last() {
            if let NodeKind::Composite(composite) = &mut nodes[parent.0].kind {
                composite.children.push(id);
            }
        }

        match token {
            Token::Open(kind) => {
                nodes.push(Node::new(kind.token(), NodeKind::Composite(Composite::new(kind))));
                open.push((id, index));
            }
            Token::Leaf(kind) => nodes.push(Node::new(text, kind)),
            Token::Close => {}
        }
    }

    if let Some((_, opened)) = open.pop() {
        return Err(BuildError::Unclosed {
            index: opened,
            token: tokens[opened].as_ref().trim().to_string(),
        });
    }
    if nodes.is_empty() {
        return Err(BuildError::Empty);
    }

    tracing::debug!(nodes = nodes.len(), "tree built");
    Ok(Tree::from_nodes(nodes))
}

fn parse_token(index: usize, text: &str) -> Result<Token, BuildError> {
    let action = |kind: ActionKind| -> Result<Token, BuildError> {
        Ok(Token::Leaf(NodeKind::Action(Action::new(kind))))
    };
    match text {
        "s(" => return Ok(Token::Open(CompositeKind::Sequence)),
        "f(" => return Ok(Token::Open(CompositeKind::Fallback)),
        "p(" => return Ok(Token::Open(CompositeKind::Parallel)),
        ")" => return Ok(Token::Close),
        "idle" => return action(ActionKind::Idle),
        "charge" => return action(ActionKind::Charge),
        "pick" => return action(ActionKind::Pick),
        "place" => return action(ActionKind::Place),
        _ => {}
    }

    if let Some(name) = text.strip_prefix("move to ") {
        let station = parse_station(index, name)?;
        return action(ActionKind::MoveTo(station));
    }
    if let Some(name) = text.strip_prefix("at station ") {
        let station = parse_station(index, name)?;
        return Ok(Token::Leaf(NodeKind::Condition(Condition::AtStation(station))));
    }

    for field in Field::ALL {
        if let Some(rest) = text.strip_prefix(field.label()) {
            let rest = rest.trim_start();
            let comparator = match rest.chars().next() {
                Some('<') => Comparator::Less,
                Some('>') => Comparator::Greater,
                _ => {
                    return Err(BuildError::MissingComparator {
                        index,
                        token: text.to_string(),
                    })
                }
            };
            let threshold = rest[1..]
                .trim()
                .parse::<i64>()
                .map_err(|_| BuildError::InvalidThreshold {
                    index,
                    token: text.to_string(),
                })?;
            return Ok(Token::Leaf(NodeKind::Condition(Condition::compare(
                field, comparator, threshold,
            ))));
        }
    }

    Err(BuildError::UnknownToken {
        index,
        token: text.to_string(),
    })
}

fn parse_station(index: usize, name: &str) -> Result<Station, BuildError> {
    name.parse::<Station>().map_err(|source| BuildError::UnknownStation { index, source })
}
