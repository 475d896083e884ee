//! Expression evaluation
//!
//! The tree itself knows nothing about evaluation: [`evaluate_with`] hands a
//! root node to any [`Visitor`] and returns what it produces. [`evaluate`]
//! and [`evaluate_in`] are conveniences that seed a [`NumericEvaluator`] with
//! variable bindings.

pub mod builtins;
pub mod numeric;

pub use numeric::NumericEvaluator;

use tracing::debug;

use crate::{Bindings, EvalContext, EvalError, Node, Visitor};

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Run a visitor over a tree.
pub fn evaluate_with<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) -> V::Output {
    node.accept(visitor)
}

/// Evaluate a tree numerically with the given bindings.
///
/// # Example
///
/// ```
/// use exprtree::{evaluate, Bindings, EvalError, Node, Operator};
///
/// let tree = Node::binary(Node::variable("x"), Operator::Add, Node::integer(1));
/// let bindings: Bindings = [("x", 2.0)].into_iter().collect();
///
/// assert_eq!(evaluate(&tree, &bindings), Ok(3.0));
/// assert!(matches!(
///     evaluate(&tree, &Bindings::new()),
///     Err(EvalError::UndefinedVariable { .. })
/// ));
/// ```
pub fn evaluate(node: &Node, bindings: &Bindings) -> Result<f64, EvalError> {
    evaluate_in(node, bindings, &EvalContext::default())
}

/// Evaluate a tree numerically with bindings and an explicit context.
pub fn evaluate_in(
    node: &Node,
    bindings: &Bindings,
    ctx: &EvalContext,
) -> Result<f64, EvalError> {
    debug!(
        kind = %node.kind(),
        nodes = node.node_count(),
        depth = node.depth(),
        bindings = bindings.len(),
        "evaluate"
    );

    let mut evaluator = NumericEvaluator::with_context(bindings, ctx.clone());
    let result = evaluator.eval(node);

    match &result {
        Ok(value) => debug!(value, "evaluate finished"),
        Err(error) => debug!(%error, "evaluate failed"),
    }
    result
}
