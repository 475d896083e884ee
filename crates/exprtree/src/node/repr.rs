//! Serialized form of [`Node`]
//!
//! Deserialized trees are rebuilt through [`NodeBuilder`], so a document
//! cannot produce a node with a required slot unset or a slot its operator
//! does not have.

use serde::Deserialize;

use crate::error::NodeError;

use super::{Node, NodeBuilder, Operator};

/// Mirror of [`Node`] as it appears on the wire.
#[derive(Deserialize)]
pub(super) enum NodeRepr {
    Integer(i64),
    Number(f64),
    Rational {
        numerator: i64,
        denominator: i64,
    },
    Variable(String),
    Constant(String),
    Function {
        name: String,
        operand: Box<Node>,
    },
    SubExpression(Box<Node>),
    Expression {
        operator: Operator,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
}

impl TryFrom<NodeRepr> for Node {
    type Error = NodeError;

    fn try_from(repr: NodeRepr) -> Result<Self, Self::Error> {
        let builder = match repr {
            NodeRepr::Integer(value) => return Ok(Node::Integer(value)),
            NodeRepr::Number(value) => return Ok(Node::Number(value)),
            NodeRepr::Rational {
                numerator,
                denominator,
            } => return Ok(Node::rational(numerator, denominator)),
            NodeRepr::Variable(name) => return Ok(Node::Variable(name)),
            NodeRepr::Constant(name) => return Ok(Node::Constant(name)),
            NodeRepr::Function { name, operand } => {
                let mut builder = NodeBuilder::function(name);
                builder.set_operand(*operand)?;
                builder
            }
            NodeRepr::SubExpression(inner) => {
                let mut builder = NodeBuilder::sub_expression();
                builder.set_inner(*inner)?;
                builder
            }
            NodeRepr::Expression {
                operator,
                left,
                right,
            } => {
                let mut builder = NodeBuilder::expression(operator);
                if let Some(left) = left {
                    builder.set_left(*left)?;
                }
                if let Some(right) = right {
                    builder.set_right(*right)?;
                }
                builder
            }
        };
        builder.build()
    }
}
