//! Complexity scoring
//!
//! The complexity of a tree is the sum of a fixed per-node weight over every
//! node in it:
//!
//! | Node                         | Weight |
//! |------------------------------|--------|
//! | Integer, Variable, Constant  | 1      |
//! | Number, Rational             | 2      |
//! | Function                     | 5      |
//! | SubExpression                | 0      |
//! | Expression `+` `-` `*`       | 2      |
//! | Expression `/`               | 4      |
//! | Expression `^`               | 8      |
//!
//! An unset child contributes nothing. Factorial, square root and unary
//! minus have no weight and make scoring fail with
//! [`NodeError::UnknownOperator`].
//!
//! Parentheses only group, so a `SubExpression` scores exactly what its
//! inner node scores: `complexity((e)) == complexity(e)`. A malformed
//! inner tree still fails, since its nodes are scored like any others.

use crate::error::NodeError;

use super::{Node, Operator};

impl Node {
    /// Complexity score of this tree.
    ///
    /// # Example
    ///
    /// ```
    /// use exprtree::{Node, Operator};
    ///
    /// let sum = Node::binary(Node::integer(1), Operator::Add, Node::integer(2));
    /// assert_eq!(sum.complexity(), Ok(4));
    /// ```
    pub fn complexity(&self) -> Result<u64, NodeError> {
        let mut total = 0u64;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += weight(node)?;
            stack.extend(node.children());
        }
        Ok(total)
    }
}

/// Weight of a single node, excluding its children.
fn weight(node: &Node) -> Result<u64, NodeError> {
    let w = match node {
        Node::Integer(_) | Node::Variable(_) | Node::Constant(_) => 1,
        Node::Number(_) | Node::Rational { .. } => 2,
        Node::Function { .. } => 5,
        Node::SubExpression(_) => 0,
        Node::Expression { operator, .. } => operator_weight(*operator)?,
    };
    Ok(w)
}

fn operator_weight(operator: Operator) -> Result<u64, NodeError> {
    match operator {
        Operator::Add | Operator::Sub | Operator::Mul => Ok(2),
        Operator::Div => Ok(4),
        Operator::Pow => Ok(8),
        Operator::Factorial | Operator::Sqrt | Operator::Neg => Err(NodeError::UnknownOperator {
            operator: operator.symbol().to_string(),
        }),
    }
}
