//! Floating point evaluation of expression trees

use tracing::trace;

use crate::bindings::Bindings;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::node::{Node, NodeKind, Operator, OperatorSet};
use crate::visitor::Visitor;

use super::builtins;

/// Visitor that computes the numeric value of a tree.
///
/// Variables are resolved through [`Bindings`]; constants and functions
/// through the builtin tables. Depth and interruption are governed by the
/// [`EvalContext`].
#[derive(Debug, Clone)]
pub struct NumericEvaluator<'a> {
    bindings: &'a Bindings,
    ctx: EvalContext,
    operators: OperatorSet,
    depth: usize,
}

impl<'a> NumericEvaluator<'a> {
    /// Evaluator over `bindings` with a default context.
    pub fn new(bindings: &'a Bindings) -> Self {
        Self::with_context(bindings, EvalContext::default())
    }

    /// Evaluator over `bindings` with an explicit context.
    pub fn with_context(bindings: &'a Bindings, ctx: EvalContext) -> Self {
        Self {
            bindings,
            ctx,
            operators: OperatorSet::all(),
            depth: 0,
        }
    }

    /// Restrict the operators this evaluator applies.
    ///
    /// Expressions using any other operator fail with
    /// [`EvalError::UnknownOperator`].
    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    /// Evaluate a subtree, enforcing the depth limit and interrupt flag.
    pub fn eval(&mut self, node: &Node) -> Result<f64, EvalError> {
        if self.ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }
        if self.depth >= self.ctx.max_depth {
            return Err(EvalError::ExpressionTooDeep {
                depth: self.depth + 1,
                max: self.ctx.max_depth,
            });
        }
        if self.ctx.trace {
            trace!(
                depth = self.depth,
                kind = %node.kind(),
                operator = node.operator(),
                "evaluating node"
            );
        }

        self.depth += 1;
        let result = node.accept(self);
        self.depth -= 1;
        result
    }

    fn operand(&mut self, operator: Operator, slot: Option<&Node>) -> Result<f64, EvalError> {
        match slot {
            Some(node) => self.eval(node),
            None => Err(EvalError::MissingOperand {
                operator: operator.symbol().to_string(),
            }),
        }
    }
}

impl Visitor for NumericEvaluator<'_> {
    type Output = Result<f64, EvalError>;

    fn unsupported(&mut self, kind: NodeKind) -> Self::Output {
        Err(EvalError::UnknownNodeVariant { kind })
    }

    fn visit_integer(&mut self, value: i64) -> Self::Output {
        Ok(value as f64)
    }

    fn visit_number(&mut self, value: f64) -> Self::Output {
        Ok(value)
    }

    fn visit_rational(&mut self, numerator: i64, denominator: i64) -> Self::Output {
        if denominator == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(numerator as f64 / denominator as f64)
    }

    fn visit_variable(&mut self, name: &str) -> Self::Output {
        self.bindings
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    fn visit_constant(&mut self, name: &str) -> Self::Output {
        builtins::constant(name).ok_or_else(|| EvalError::UnknownConstant {
            name: name.to_string(),
        })
    }

    fn visit_function(&mut self, name: &str, operand: &Node) -> Self::Output {
        let f = builtins::function(name).ok_or_else(|| EvalError::UnknownFunction {
            name: name.to_string(),
        })?;
        let x = self.eval(operand)?;
        domain_checked(name, x, f(x))
    }

    fn visit_sub_expression(&mut self, inner: &Node) -> Self::Output {
        self.eval(inner)
    }

    fn visit_expression(
        &mut self,
        operator: Operator,
        left: Option<&Node>,
        right: Option<&Node>,
    ) -> Self::Output {
        if !self.operators.contains(operator) {
            return Err(EvalError::UnknownOperator {
                operator: operator.symbol().to_string(),
            });
        }

        match operator {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => {
                let a = self.operand(operator, left)?;
                let b = self.operand(operator, right)?;
                apply_binary(operator, a, b)
            }
            Operator::Neg => Ok(-self.operand(operator, right)?),
            Operator::Sqrt => {
                let x = self.operand(operator, right)?;
                domain_checked(operator.symbol(), x, x.sqrt())
            }
            Operator::Factorial => {
                let x = self.operand(operator, left)?;
                builtins::factorial(x).ok_or_else(|| EvalError::Domain {
                    operation: operator.symbol().to_string(),
                    value: x,
                })
            }
        }
    }
}

fn apply_binary(operator: Operator, a: f64, b: f64) -> Result<f64, EvalError> {
    match operator {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div if b == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Div => Ok(a / b),
        Operator::Pow => domain_checked(operator.symbol(), a, a.powf(b)),
        other => Err(EvalError::UnknownOperator {
            operator: other.symbol().to_string(),
        }),
    }
}

/// Reject a NaN produced from a non-NaN input.
fn domain_checked(operation: &str, input: f64, result: f64) -> Result<f64, EvalError> {
    if result.is_nan() && !input.is_nan() {
        return Err(EvalError::Domain {
            operation: operation.to_string(),
            value: input,
        });
    }
    Ok(result)
}
