//! Double dispatch over node variants
//!
//! New operations on trees are written as [`Visitor`] implementations rather
//! than as methods on [`Node`]. [`Node::accept`] selects the `visit_*` method
//! for the node's variant; the visitor decides whether and how to recurse by
//! calling `accept` on the children it is handed.
//!
//! Every `visit_*` method defaults to [`Visitor::unsupported`], so a visitor
//! only overrides the variants it handles and reports the rest through its
//! own result type.
//!
//! # Example
//!
//! ```
//! use exprtree::{Node, NodeKind, Operator, Visitor};
//!
//! struct CountVariables;
//!
//! impl Visitor for CountVariables {
//!     type Output = usize;
//!
//!     fn unsupported(&mut self, _kind: NodeKind) -> usize {
//!         0
//!     }
//!
//!     fn visit_variable(&mut self, _name: &str) -> usize {
//!         1
//!     }
//!
//!     fn visit_expression(
//!         &mut self,
//!         _operator: Operator,
//!         left: Option<&Node>,
//!         right: Option<&Node>,
//!     ) -> usize {
//!         left.map_or(0, |n| n.accept(self)) + right.map_or(0, |n| n.accept(self))
//!     }
//! }
//!
//! let tree = Node::binary(Node::variable("x"), Operator::Mul, Node::variable("y"));
//! assert_eq!(tree.accept(&mut CountVariables), 2);
//! ```

use crate::node::{Node, NodeKind, Operator};

/// An operation over expression trees, one method per node variant.
pub trait Visitor {
    /// Result of visiting a node.
    type Output;

    /// Called for every variant the visitor does not override.
    fn unsupported(&mut self, kind: NodeKind) -> Self::Output;

    /// Visit an integer leaf.
    fn visit_integer(&mut self, _value: i64) -> Self::Output {
        self.unsupported(NodeKind::Integer)
    }

    /// Visit a floating point leaf.
    fn visit_number(&mut self, _value: f64) -> Self::Output {
        self.unsupported(NodeKind::Number)
    }

    /// Visit a rational leaf.
    fn visit_rational(&mut self, _numerator: i64, _denominator: i64) -> Self::Output {
        self.unsupported(NodeKind::Rational)
    }

    /// Visit a variable leaf.
    fn visit_variable(&mut self, _name: &str) -> Self::Output {
        self.unsupported(NodeKind::Variable)
    }

    /// Visit a symbolic constant leaf.
    fn visit_constant(&mut self, _name: &str) -> Self::Output {
        self.unsupported(NodeKind::Constant)
    }

    /// Visit a function application.
    fn visit_function(&mut self, _name: &str, _operand: &Node) -> Self::Output {
        self.unsupported(NodeKind::Function)
    }

    /// Visit a parenthesized sub-expression.
    fn visit_sub_expression(&mut self, _inner: &Node) -> Self::Output {
        self.unsupported(NodeKind::SubExpression)
    }

    /// Visit an operator application.
    fn visit_expression(
        &mut self,
        _operator: Operator,
        _left: Option<&Node>,
        _right: Option<&Node>,
    ) -> Self::Output {
        self.unsupported(NodeKind::Expression)
    }
}

impl Node {
    /// Dispatch to the visitor method for this node's variant.
    ///
    /// Exactly one `visit_*` call is made; children are only visited if the
    /// visitor recurses into them.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Integer(value) => visitor.visit_integer(*value),
            Node::Number(value) => visitor.visit_number(*value),
            Node::Rational {
                numerator,
                denominator,
            } => visitor.visit_rational(*numerator, *denominator),
            Node::Variable(name) => visitor.visit_variable(name),
            Node::Constant(name) => visitor.visit_constant(name),
            Node::Function { name, operand } => visitor.visit_function(name, operand),
            Node::SubExpression(inner) => visitor.visit_sub_expression(inner),
            Node::Expression {
                operator,
                left,
                right,
            } => visitor.visit_expression(*operator, left.as_deref(), right.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the kind of every node it visits, recursing into all children.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<NodeKind>,
    }

    impl Visitor for Recorder {
        type Output = ();

        fn unsupported(&mut self, kind: NodeKind) {
            self.seen.push(kind);
        }

        fn visit_function(&mut self, _name: &str, operand: &Node) {
            self.seen.push(NodeKind::Function);
            operand.accept(self);
        }

        fn visit_sub_expression(&mut self, inner: &Node) {
            self.seen.push(NodeKind::SubExpression);
            inner.accept(self);
        }

        fn visit_expression(
            &mut self,
            _operator: Operator,
            left: Option<&Node>,
            right: Option<&Node>,
        ) {
            self.seen.push(NodeKind::Expression);
            if let Some(left) = left {
                left.accept(self);
            }
            if let Some(right) = right {
                right.accept(self);
            }
        }
    }

    #[test]
    fn test_dispatch_selects_variant() {
        let mut recorder = Recorder::default();
        Node::rational(1, 2).accept(&mut recorder);
        Node::constant("e").accept(&mut recorder);
        assert_eq!(recorder.seen, vec![NodeKind::Rational, NodeKind::Constant]);
    }

    #[test]
    fn test_pre_order_traversal() {
        let tree = Node::binary(
            Node::function("ln", Node::variable("x")),
            Operator::Div,
            Node::sub_expression(Node::number(2.0)),
        );
        let mut recorder = Recorder::default();
        tree.accept(&mut recorder);
        assert_eq!(
            recorder.seen,
            vec![
                NodeKind::Expression,
                NodeKind::Function,
                NodeKind::Variable,
                NodeKind::SubExpression,
                NodeKind::Number,
            ]
        );
    }

    #[test]
    fn test_dyn_visitor() {
        let mut recorder = Recorder::default();
        let visitor: &mut dyn Visitor<Output = ()> = &mut recorder;
        Node::integer(1).accept(visitor);
        assert_eq!(recorder.seen, vec![NodeKind::Integer]);
    }
}
