//! Expression tree nodes
//!
//! A [`Node`] is one of eight variants. Leaves carry a value; composite nodes
//! exclusively own their children through `Box`, so a tree is acyclic, finite
//! and reclaimed as a whole when its root is dropped. Dropping, like every
//! structural walk in this module, uses a heap stack rather than recursion.
//!
//! Composite nodes are assembled incrementally with a
//! [`NodeBuilder`](builder::NodeBuilder) and frozen once every required slot is
//! filled. A finished `Node` is never observed half built.

pub mod builder;
pub mod complexity;
mod display;
pub mod equality;
pub mod operator;
#[cfg(feature = "serde")]
mod repr;

pub use builder::NodeBuilder;
pub use operator::{Arity, Operator, OperatorSet, ParseOperatorError};

use std::fmt;

/// A node of a parsed mathematical expression.
///
/// With the `serde` feature, deserialization goes through [`NodeBuilder`]
/// and rejects composite nodes with missing or misplaced children.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "repr::NodeRepr"))]
pub enum Node {
    /// Integer literal
    Integer(i64),

    /// Floating point literal
    Number(f64),

    /// Exact fraction
    Rational {
        /// Numerator
        numerator: i64,
        /// Denominator
        denominator: i64,
    },

    /// Free variable, resolved through bindings at evaluation time
    Variable(String),

    /// Symbolic constant such as `pi` or `e`
    Constant(String),

    /// Application of a named function to one operand
    Function {
        /// Function name
        name: String,
        /// Argument
        operand: Box<Node>,
    },

    /// Parenthesized sub-expression
    SubExpression(Box<Node>),

    /// Operator application.
    ///
    /// Binary operators fill both slots. Prefix operators leave `left`
    /// unset and postfix operators leave `right` unset.
    Expression {
        /// Operator
        operator: Operator,
        /// Left operand
        left: Option<Box<Node>>,
        /// Right operand
        right: Option<Box<Node>>,
    },
}

/// Variant tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// [`Node::Integer`]
    Integer,
    /// [`Node::Number`]
    Number,
    /// [`Node::Rational`]
    Rational,
    /// [`Node::Variable`]
    Variable,
    /// [`Node::Constant`]
    Constant,
    /// [`Node::Function`]
    Function,
    /// [`Node::SubExpression`]
    SubExpression,
    /// [`Node::Expression`]
    Expression,
}

impl NodeKind {
    /// Whether nodes of this kind are leaves.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NodeKind::Integer
                | NodeKind::Number
                | NodeKind::Rational
                | NodeKind::Variable
                | NodeKind::Constant
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Integer => "Integer",
            NodeKind::Number => "Number",
            NodeKind::Rational => "Rational",
            NodeKind::Variable => "Variable",
            NodeKind::Constant => "Constant",
            NodeKind::Function => "Function",
            NodeKind::SubExpression => "SubExpression",
            NodeKind::Expression => "Expression",
        };
        f.write_str(name)
    }
}

/// A child position inside a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Function argument
    Operand,
    /// Sub-expression body
    Inner,
    /// Left operand of an expression
    Left,
    /// Right operand of an expression
    Right,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Operand => "operand",
            Slot::Inner => "inner expression",
            Slot::Left => "left operand",
            Slot::Right => "right operand",
        };
        f.write_str(name)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

impl Node {
    /// Integer leaf.
    pub fn integer(value: i64) -> Self {
        Node::Integer(value)
    }

    /// Floating point leaf.
    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    /// Rational leaf. The fraction is stored as given, not reduced.
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        Node::Rational {
            numerator,
            denominator,
        }
    }

    /// Variable leaf.
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    /// Symbolic constant leaf.
    pub fn constant(name: impl Into<String>) -> Self {
        Node::Constant(name.into())
    }

    /// Function application.
    pub fn function(name: impl Into<String>, operand: Node) -> Self {
        Node::Function {
            name: name.into(),
            operand: Box::new(operand),
        }
    }

    /// Parenthesized sub-expression.
    pub fn sub_expression(inner: Node) -> Self {
        Node::SubExpression(Box::new(inner))
    }

    /// `left op right`.
    pub fn binary(left: Node, operator: Operator, right: Node) -> Self {
        Node::Expression {
            operator,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// `op operand`, stored in the right slot.
    pub fn prefix(operator: Operator, operand: Node) -> Self {
        Node::Expression {
            operator,
            left: None,
            right: Some(Box::new(operand)),
        }
    }

    /// `operand op`, stored in the left slot.
    pub fn postfix(operand: Node, operator: Operator) -> Self {
        Node::Expression {
            operator,
            left: Some(Box::new(operand)),
            right: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════

impl Node {
    /// Variant tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Integer(_) => NodeKind::Integer,
            Node::Number(_) => NodeKind::Number,
            Node::Rational { .. } => NodeKind::Rational,
            Node::Variable(_) => NodeKind::Variable,
            Node::Constant(_) => NodeKind::Constant,
            Node::Function { .. } => NodeKind::Function,
            Node::SubExpression(_) => NodeKind::SubExpression,
            Node::Expression { .. } => NodeKind::Expression,
        }
    }

    /// True for leaf variants: Integer, Number, Rational, Variable, Constant.
    pub fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }

    /// Operator symbol of an expression node, empty for every other variant.
    pub fn operator(&self) -> &'static str {
        match self {
            Node::Expression { operator, .. } => operator.symbol(),
            _ => "",
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        let (first, second): (Option<&Node>, Option<&Node>) = match self {
            Node::Function { operand, .. } => (Some(operand.as_ref()), None),
            Node::SubExpression(inner) => (Some(inner.as_ref()), None),
            Node::Expression { left, right, .. } => (left.as_deref(), right.as_deref()),
            _ => (None, None),
        };
        first.into_iter().chain(second)
    }

    /// Total number of nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().map(|child| (child, level + 1)));
        }
        deepest
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Destruction
// ═══════════════════════════════════════════════════════════════════════

impl Node {
    /// Move this node's children onto `out`, leaving it childless.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::Function { operand: child, .. } | Node::SubExpression(child) => {
                out.push(std::mem::replace(&mut **child, Node::Integer(0)));
            }
            Node::Expression { left, right, .. } => {
                out.extend(left.take().map(|child| *child));
                out.extend(right.take().map(|child| *child));
            }
            _ => {}
        }
    }
}

// Dropping a tree with the default recursive glue would use one stack frame
// per level; unlink children onto a heap stack instead.
impl Drop for Node {
    fn drop(&mut self) {
        if self.children().all(Node::is_terminal) {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        // sin(x) + (2 ^ 3)
        Node::binary(
            Node::function("sin", Node::variable("x")),
            Operator::Add,
            Node::sub_expression(Node::binary(
                Node::integer(2),
                Operator::Pow,
                Node::integer(3),
            )),
        )
    }

    #[test]
    fn test_kind() {
        assert_eq!(Node::integer(1).kind(), NodeKind::Integer);
        assert_eq!(Node::number(1.0).kind(), NodeKind::Number);
        assert_eq!(Node::rational(1, 2).kind(), NodeKind::Rational);
        assert_eq!(Node::variable("x").kind(), NodeKind::Variable);
        assert_eq!(Node::constant("pi").kind(), NodeKind::Constant);
        assert_eq!(sample().kind(), NodeKind::Expression);
    }

    #[test]
    fn test_operator_accessor() {
        assert_eq!(sample().operator(), "+");
        assert_eq!(Node::prefix(Operator::Sqrt, Node::integer(4)).operator(), "√");
        assert_eq!(Node::integer(1).operator(), "");
        assert_eq!(Node::function("sin", Node::variable("x")).operator(), "");
        assert_eq!(Node::sub_expression(Node::integer(1)).operator(), "");
    }

    #[test]
    fn test_children() {
        let tree = sample();
        let kinds: Vec<_> = tree.children().map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Function, NodeKind::SubExpression]);

        let neg = Node::prefix(Operator::Neg, Node::integer(1));
        assert_eq!(neg.children().count(), 1);
        assert_eq!(Node::variable("x").children().count(), 0);
    }

    #[test]
    fn test_node_count_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.depth(), 4);
        assert_eq!(Node::integer(1).node_count(), 1);
        assert_eq!(Node::integer(1).depth(), 1);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::Inner.to_string(), "inner expression");
        assert_eq!(NodeKind::SubExpression.to_string(), "SubExpression");
    }
}
