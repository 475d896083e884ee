//! Token to node conversion
//!
//! The factory turns one token into either a finished leaf or a composite
//! placeholder whose children the parser fills in later. Which operator
//! tokens are recognized is decided by the [`OperatorSet`] the factory was
//! built with, so the restricted and full variants share one table.

use std::str::FromStr;

use tracing::trace;

use crate::error::FactoryError;
use crate::node::{Node, NodeBuilder, Operator, OperatorSet};
use crate::token::{Token, TokenKind};

/// Creates nodes from single tokens.
///
/// # Example
///
/// ```
/// use exprtree::{Node, NodeFactory, Token, TokenKind};
///
/// let factory = NodeFactory::full();
///
/// let leaf = factory.create(&Token::new(TokenKind::Integer, "42")).unwrap();
/// assert_eq!(leaf.build().unwrap(), Node::integer(42));
///
/// let err = factory.create(&Token::new(TokenKind::Comma, ",")).unwrap_err();
/// assert!(err.is_no_match());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeFactory {
    operators: OperatorSet,
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::full()
    }
}

impl NodeFactory {
    /// A factory accepting exactly the given operators.
    pub fn new(operators: OperatorSet) -> Self {
        Self { operators }
    }

    /// Accepts `+ - * / ^` but not factorial or square root tokens.
    pub fn restricted() -> Self {
        Self::new(OperatorSet::arithmetic())
    }

    /// Accepts every operator token.
    pub fn full() -> Self {
        Self::new(OperatorSet::all())
    }

    /// Operators this factory accepts.
    pub fn operators(&self) -> OperatorSet {
        self.operators
    }

    /// Create the node a token stands for.
    ///
    /// Returns [`FactoryError::NoMatch`] for tokens with no node mapping,
    /// including operator tokens outside this factory's operator set. The
    /// text of an operator token must spell the operator its kind names,
    /// aliases such as `×` included, or [`FactoryError::InvalidOperator`] is
    /// returned.
    pub fn create(&self, token: &Token) -> Result<NodeBuilder, FactoryError> {
        let builder = match token.kind {
            TokenKind::PosInt | TokenKind::Integer => {
                NodeBuilder::leaf(Node::Integer(parse_number(token)?))
            }
            TokenKind::RealNumber => NodeBuilder::leaf(Node::Number(parse_number(token)?)),
            TokenKind::Identifier => NodeBuilder::leaf(Node::variable(token.value.as_str())),
            TokenKind::Constant => NodeBuilder::leaf(Node::constant(token.value.as_str())),
            TokenKind::FunctionName => NodeBuilder::function(token.value.as_str()),
            TokenKind::OpenParenthesis => NodeBuilder::sub_expression(),
            kind => match kind.operator() {
                Some(op) if self.operators.contains(op) => {
                    NodeBuilder::expression(parse_operator(token, op)?)
                }
                _ => {
                    trace!(kind = %kind, value = %token.value, "no node for token");
                    return Err(FactoryError::NoMatch { kind });
                }
            },
        };
        Ok(builder)
    }
}

/// Convert token text to a number.
fn parse_number<T>(token: &Token) -> Result<T, FactoryError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    token
        .value
        .trim()
        .parse::<T>()
        .map_err(|e| FactoryError::InvalidNumber {
            kind: token.kind,
            value: token.value.clone(),
            reason: e.to_string(),
        })
}

/// Read the operator spelled by an operator token's text.
fn parse_operator(token: &Token, expected: Operator) -> Result<Operator, FactoryError> {
    match token.value.trim().parse::<Operator>() {
        Ok(op) if op == expected => Ok(op),
        _ => Err(FactoryError::InvalidOperator {
            kind: token.kind,
            value: token.value.clone(),
        }),
    }
}
