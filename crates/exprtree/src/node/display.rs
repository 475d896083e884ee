//! Display implementation for Node

use std::fmt;

use super::{Arity, Node, Operator};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Integer(n) => write!(f, "{}", n),
            Node::Number(n) => write!(f, "{}", n),
            Node::Rational {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            Node::Variable(name) | Node::Constant(name) => write!(f, "{}", name),
            Node::Function { name, operand } => write!(f, "{}({})", name, operand),
            Node::SubExpression(inner) => write!(f, "({})", inner),
            Node::Expression {
                operator,
                left,
                right,
            } => {
                let left = Operand(left.as_deref());
                let right = Operand(right.as_deref());
                match (operator, operator.arity()) {
                    (Operator::Neg, _) => write!(f, "-{}", right),
                    (_, Arity::Prefix) => write!(f, "{}{}", operator, right),
                    (_, Arity::Postfix) => write!(f, "{}{}", left, operator),
                    (_, Arity::Binary) => write!(f, "{} {} {}", left, operator, right),
                }
            }
        }
    }
}

/// A child slot; an unset slot renders as `?`.
struct Operand<'a>(Option<&'a Node>);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(f, "{}", node),
            None => write!(f, "?"),
        }
    }
}
