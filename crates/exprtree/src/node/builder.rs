//! Incremental construction of composite nodes
//!
//! A parser rarely has every child of a node at hand when it first sees the
//! token that introduces it: `sin` arrives before its argument and `+` before
//! its right operand. [`NodeBuilder`] accumulates those children and freezes
//! them into an immutable [`Node`] once the node is complete.

use crate::error::NodeError;

use super::{Arity, Node, NodeKind, Operator, Slot};

/// A node under construction.
///
/// # Example
///
/// ```
/// use exprtree::{Node, NodeBuilder, Operator};
///
/// let mut sum = NodeBuilder::expression(Operator::Add);
/// sum.set_left(Node::integer(1)).unwrap();
/// sum.set_right(Node::integer(2)).unwrap();
///
/// let node = sum.build().unwrap();
/// assert_eq!(node, Node::binary(Node::integer(1), Operator::Add, Node::integer(2)));
/// ```
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    draft: Draft,
}

#[derive(Debug, Clone)]
enum Draft {
    Leaf(Node),
    Function {
        name: String,
        operand: Option<Node>,
    },
    SubExpression {
        inner: Option<Node>,
    },
    Expression {
        operator: Operator,
        left: Option<Node>,
        right: Option<Node>,
    },
}

impl NodeBuilder {
    /// Wrap an already finished node.
    pub fn leaf(node: Node) -> Self {
        Self {
            draft: Draft::Leaf(node),
        }
    }

    /// Function application awaiting its operand.
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            draft: Draft::Function {
                name: name.into(),
                operand: None,
            },
        }
    }

    /// Sub-expression awaiting its body.
    pub fn sub_expression() -> Self {
        Self {
            draft: Draft::SubExpression { inner: None },
        }
    }

    /// Expression awaiting its operands.
    pub fn expression(operator: Operator) -> Self {
        Self {
            draft: Draft::Expression {
                operator,
                left: None,
                right: None,
            },
        }
    }

    /// Variant of the node that [`build`](Self::build) will produce.
    pub fn kind(&self) -> NodeKind {
        match &self.draft {
            Draft::Leaf(node) => node.kind(),
            Draft::Function { .. } => NodeKind::Function,
            Draft::SubExpression { .. } => NodeKind::SubExpression,
            Draft::Expression { .. } => NodeKind::Expression,
        }
    }

    /// Operator symbol, empty unless this is an expression.
    pub fn operator(&self) -> &'static str {
        match &self.draft {
            Draft::Expression { operator, .. } => operator.symbol(),
            Draft::Leaf(node) => node.operator(),
            _ => "",
        }
    }

    /// Whether the finished node will be a leaf.
    pub fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }

    /// Whether [`build`](Self::build) would succeed.
    pub fn is_complete(&self) -> bool {
        self.missing_slot().is_none()
    }

    /// Set the argument of a function.
    pub fn set_operand(&mut self, node: Node) -> Result<(), NodeError> {
        if let Draft::Function { operand, .. } = &mut self.draft {
            *operand = Some(node);
            return Ok(());
        }
        Err(self.unexpected(Slot::Operand))
    }

    /// Set the body of a sub-expression.
    pub fn set_inner(&mut self, node: Node) -> Result<(), NodeError> {
        if let Draft::SubExpression { inner } = &mut self.draft {
            *inner = Some(node);
            return Ok(());
        }
        Err(self.unexpected(Slot::Inner))
    }

    /// Set the left operand of a binary or postfix expression.
    pub fn set_left(&mut self, node: Node) -> Result<(), NodeError> {
        if let Draft::Expression { operator, left, .. } = &mut self.draft {
            if operator.arity() != Arity::Prefix {
                *left = Some(node);
                return Ok(());
            }
        }
        Err(self.unexpected(Slot::Left))
    }

    /// Set the right operand of a binary or prefix expression.
    pub fn set_right(&mut self, node: Node) -> Result<(), NodeError> {
        if let Draft::Expression {
            operator, right, ..
        } = &mut self.draft
        {
            if operator.arity() != Arity::Postfix {
                *right = Some(node);
                return Ok(());
            }
        }
        Err(self.unexpected(Slot::Right))
    }

    /// Freeze into an immutable node.
    ///
    /// Fails with [`NodeError::MissingChild`] if a required slot is unset.
    pub fn build(self) -> Result<Node, NodeError> {
        if let Some(slot) = self.missing_slot() {
            return Err(NodeError::MissingChild {
                kind: self.kind(),
                slot,
            });
        }

        let node = match self.draft {
            Draft::Leaf(node) => node,
            Draft::Function {
                name,
                operand: Some(operand),
            } => Node::function(name, operand),
            Draft::SubExpression { inner: Some(inner) } => Node::sub_expression(inner),
            Draft::Expression {
                operator,
                left,
                right,
            } => Node::Expression {
                operator,
                left: left.map(Box::new),
                right: right.map(Box::new),
            },
            Draft::Function { operand: None, .. } => {
                return Err(NodeError::MissingChild {
                    kind: NodeKind::Function,
                    slot: Slot::Operand,
                })
            }
            Draft::SubExpression { inner: None } => {
                return Err(NodeError::MissingChild {
                    kind: NodeKind::SubExpression,
                    slot: Slot::Inner,
                })
            }
        };
        Ok(node)
    }

    fn missing_slot(&self) -> Option<Slot> {
        match &self.draft {
            Draft::Leaf(_) => None,
            Draft::Function { operand, .. } => operand.is_none().then_some(Slot::Operand),
            Draft::SubExpression { inner } => inner.is_none().then_some(Slot::Inner),
            Draft::Expression {
                operator,
                left,
                right,
            } => {
                let needs_left = operator.arity() != Arity::Prefix;
                let needs_right = operator.arity() != Arity::Postfix;
                if needs_left && left.is_none() {
                    Some(Slot::Left)
                } else if needs_right && right.is_none() {
                    Some(Slot::Right)
                } else {
                    None
                }
            }
        }
    }

    fn unexpected(&self, slot: Slot) -> NodeError {
        NodeError::UnexpectedChild {
            kind: self.kind(),
            slot,
        }
    }
}

impl From<Node> for NodeBuilder {
    fn from(node: Node) -> Self {
        Self::leaf(node)
    }
}
