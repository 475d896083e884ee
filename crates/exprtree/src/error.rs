//! Error types for node construction, scoring and evaluation

use thiserror::Error;

use crate::node::{NodeKind, Slot};
use crate::token::TokenKind;

/// Errors produced by [`NodeFactory`](crate::NodeFactory).
///
/// `NoMatch` is ordinary control flow: parsers probe tokens during lookahead
/// and expect most of them to be declined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// The token kind has no node mapping (or its operator is not allowed)
    #[error("No node for token of kind {kind}")]
    NoMatch {
        /// Kind of the declined token
        kind: TokenKind,
    },

    /// The token text could not be converted to a number
    #[error("Invalid number literal `{value}` for {kind}: {reason}")]
    InvalidNumber {
        /// Kind of the offending token
        kind: TokenKind,
        /// Raw token text
        value: String,
        /// Message from the conversion helper
        reason: String,
    },

    /// The token text is not the operator its kind announces
    #[error("Invalid operator `{value}` for {kind}")]
    InvalidOperator {
        /// Kind of the offending token
        kind: TokenKind,
        /// Raw token text
        value: String,
    },
}

impl FactoryError {
    /// True when the factory simply declined the token.
    pub fn is_no_match(&self) -> bool {
        matches!(self, FactoryError::NoMatch { .. })
    }
}

/// Errors produced while finalizing or scoring a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// A composite node was finalized with a required child slot unset
    #[error("{kind} node is missing its {slot}")]
    MissingChild {
        /// Variant being built
        kind: NodeKind,
        /// Slot left empty
        slot: Slot,
    },

    /// A child was placed in a slot the node does not have
    #[error("{kind} node has no {slot} slot")]
    UnexpectedChild {
        /// Variant being built
        kind: NodeKind,
        /// Slot that was filled
        slot: Slot,
    },

    /// The complexity weight table has no entry for this operator
    #[error("Unknown operator `{operator}`")]
    UnknownOperator {
        /// Operator symbol
        operator: String,
    },
}

/// Errors produced while evaluating a tree with a visitor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Variable has no binding
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Symbolic constant the evaluator does not know
    #[error("Unknown constant: {name}")]
    UnknownConstant {
        /// Constant name
        name: String,
    },

    /// Function name the evaluator does not know
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// Function name
        name: String,
    },

    /// Operator outside the evaluator's known set
    #[error("Unknown operator `{operator}`")]
    UnknownOperator {
        /// Operator symbol
        operator: String,
    },

    /// The visitor has no case for this variant
    #[error("Visitor has no case for {kind} nodes")]
    UnknownNodeVariant {
        /// Variant that was dispatched
        kind: NodeKind,
    },

    /// An expression reached evaluation without a required operand
    #[error("Operator `{operator}` is missing an operand")]
    MissingOperand {
        /// Operator symbol
        operator: String,
    },

    /// Division (or a rational) with a zero denominator
    #[error("Division by zero")]
    DivisionByZero,

    /// Operation is undefined for its input
    #[error("Domain error: {operation} is undefined for {value}")]
    Domain {
        /// Function or operator name
        operation: String,
        /// Offending input
        value: f64,
    },

    /// Tree is nested deeper than the configured limit
    #[error("Expression too deep: depth {depth} exceeds maximum {max}")]
    ExpressionTooDeep {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Evaluation was interrupted through the context flag
    #[error("Evaluation interrupted")]
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_control_flow() {
        let err = FactoryError::NoMatch {
            kind: TokenKind::CloseParenthesis,
        };
        assert!(err.is_no_match());

        let err = FactoryError::InvalidNumber {
            kind: TokenKind::Integer,
            value: "12a".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(!err.is_no_match());
    }

    #[test]
    fn test_error_messages() {
        let err = NodeError::MissingChild {
            kind: NodeKind::Expression,
            slot: Slot::Right,
        };
        assert_eq!(err.to_string(), "Expression node is missing its right operand");

        let err = EvalError::UndefinedVariable {
            name: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Undefined variable: x");

        let err = FactoryError::InvalidOperator {
            kind: TokenKind::AdditionOperator,
            value: "*".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid operator `*` for addition operator");

        let err = EvalError::ExpressionTooDeep { depth: 10, max: 10 };
        assert!(err.to_string().contains("exceeds maximum 10"));
    }
}
