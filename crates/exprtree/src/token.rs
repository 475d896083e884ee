//! Lexical tokens consumed by the node factory
//!
//! Tokens are produced by a tokenizer that lives outside this crate; only
//! their shape is defined here.

use std::fmt;

use crate::node::Operator;

/// Type tag of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Unsigned integer literal
    PosInt,
    /// Signed integer literal
    Integer,
    /// Floating point literal
    RealNumber,
    /// Variable name
    Identifier,
    /// Symbolic constant such as `pi` or `e`
    Constant,
    /// Name of a function application, e.g. `sin`
    FunctionName,
    /// `(`
    OpenParenthesis,
    /// `)`
    CloseParenthesis,
    /// `,`
    Comma,
    /// `+`
    AdditionOperator,
    /// `-`
    SubtractionOperator,
    /// `*`
    MultiplicationOperator,
    /// `/`
    DivisionOperator,
    /// `^`
    ExponentiationOperator,
    /// `!`
    FactorialOperator,
    /// `√`
    SquareRootOperator,
    /// `=`
    EqualsSign,
    /// Anything the tokenizer could not classify
    Unknown,
}

impl TokenKind {
    /// The operator an operator token stands for.
    pub fn operator(self) -> Option<Operator> {
        match self {
            TokenKind::AdditionOperator => Some(Operator::Add),
            TokenKind::SubtractionOperator => Some(Operator::Sub),
            TokenKind::MultiplicationOperator => Some(Operator::Mul),
            TokenKind::DivisionOperator => Some(Operator::Div),
            TokenKind::ExponentiationOperator => Some(Operator::Pow),
            TokenKind::FactorialOperator => Some(Operator::Factorial),
            TokenKind::SquareRootOperator => Some(Operator::Sqrt),
            _ => None,
        }
    }

    /// Human-readable name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::PosInt => "positive integer",
            TokenKind::Integer => "integer",
            TokenKind::RealNumber => "real number",
            TokenKind::Identifier => "identifier",
            TokenKind::Constant => "constant",
            TokenKind::FunctionName => "function name",
            TokenKind::OpenParenthesis => "open parenthesis",
            TokenKind::CloseParenthesis => "close parenthesis",
            TokenKind::Comma => "comma",
            TokenKind::AdditionOperator => "addition operator",
            TokenKind::SubtractionOperator => "subtraction operator",
            TokenKind::MultiplicationOperator => "multiplication operator",
            TokenKind::DivisionOperator => "division operator",
            TokenKind::ExponentiationOperator => "exponentiation operator",
            TokenKind::FactorialOperator => "factorial operator",
            TokenKind::SquareRootOperator => "square root operator",
            TokenKind::EqualsSign => "equals sign",
            TokenKind::Unknown => "unknown token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit: a type tag and the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Type tag
    pub kind: TokenKind,

    /// Source text
    pub value: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_kinds() {
        assert_eq!(TokenKind::AdditionOperator.operator(), Some(Operator::Add));
        assert_eq!(TokenKind::SquareRootOperator.operator(), Some(Operator::Sqrt));
        assert_eq!(TokenKind::Identifier.operator(), None);
        assert_eq!(TokenKind::OpenParenthesis.operator(), None);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::RealNumber, "2.5");
        assert_eq!(token.to_string(), "real number `2.5`");
    }
}
