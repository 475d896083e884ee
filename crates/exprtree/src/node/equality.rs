//! Structural equality between trees
//!
//! Two trees are equal when they have the same shape, the same variants at
//! every position and the same values in every field. Node identity plays no
//! part. The walk uses an explicit stack, so arbitrarily deep trees compare
//! without growing the call stack.

use super::Node;

impl Node {
    /// Structural equality.
    ///
    /// Integers, numbers and rationals compare numerically field by field
    /// (`1/2` and `2/4` differ); names compare exactly; expressions compare
    /// operator and both child slots. A `NaN` number equals another `NaN` so
    /// the relation stays reflexive.
    pub fn compare_to(&self, other: &Node) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Node::Integer(x), Node::Integer(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Node::Number(x), Node::Number(y)) => {
                    if !numbers_equal(*x, *y) {
                        return false;
                    }
                }
                (
                    Node::Rational {
                        numerator: n1,
                        denominator: d1,
                    },
                    Node::Rational {
                        numerator: n2,
                        denominator: d2,
                    },
                ) => {
                    if n1 != n2 || d1 != d2 {
                        return false;
                    }
                }
                (Node::Variable(x), Node::Variable(y)) | (Node::Constant(x), Node::Constant(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (
                    Node::Function {
                        name: n1,
                        operand: o1,
                    },
                    Node::Function {
                        name: n2,
                        operand: o2,
                    },
                ) => {
                    if n1 != n2 {
                        return false;
                    }
                    pending.push((o1.as_ref(), o2.as_ref()));
                }
                (Node::SubExpression(x), Node::SubExpression(y)) => {
                    pending.push((x.as_ref(), y.as_ref()))
                }
                (
                    Node::Expression {
                        operator: op1,
                        left: l1,
                        right: r1,
                    },
                    Node::Expression {
                        operator: op2,
                        left: l2,
                        right: r2,
                    },
                ) => {
                    if op1 != op2 {
                        return false;
                    }
                    for (x, y) in [(l1, l2), (r1, r2)] {
                        match (x.as_deref(), y.as_deref()) {
                            (Some(x), Some(y)) => pending.push((x, y)),
                            (None, None) => {}
                            _ => return false,
                        }
                    }
                }
                _ => return false,
            }
        }

        true
    }
}

fn numbers_equal(x: f64, y: f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other)
    }
}
