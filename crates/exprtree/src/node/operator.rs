//! Operator symbols carried by expression nodes

use std::fmt;
use std::str::FromStr;

/// Operator of an [`Expression`](super::Node::Expression) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// Postfix `!`
    Factorial,
    /// Prefix `√`
    Sqrt,
    /// Prefix unary minus
    Neg,
}

/// How many operands an operator takes and which slot holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `left op right`
    Binary,
    /// `op right`; `left` stays unset
    Prefix,
    /// `left op`; `right` stays unset
    Postfix,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 8] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Factorial,
        Operator::Sqrt,
        Operator::Neg,
    ];

    /// Canonical symbol, as returned by [`Node::operator`](super::Node::operator).
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Factorial => "!",
            Operator::Sqrt => "√",
            Operator::Neg => "neg",
        }
    }

    /// Operand layout of this operator.
    pub fn arity(self) -> Arity {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => {
                Arity::Binary
            }
            Operator::Sqrt | Operator::Neg => Arity::Prefix,
            Operator::Factorial => Arity::Postfix,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string is not an operator symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not an operator symbol")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Sub),
            "*" | "×" => Ok(Operator::Mul),
            "/" | "÷" => Ok(Operator::Div),
            "^" => Ok(Operator::Pow),
            "!" => Ok(Operator::Factorial),
            "√" | "sqrt" => Ok(Operator::Sqrt),
            "neg" => Ok(Operator::Neg),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

/// A set of operators.
///
/// Factories use it to decide which operator tokens they accept; evaluators
/// use it as the set of operators they know how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OperatorSet(u8);

impl OperatorSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// `+ - * / ^`
    pub fn arithmetic() -> Self {
        Self::from_iter([
            Operator::Add,
            Operator::Sub,
            Operator::Mul,
            Operator::Div,
            Operator::Pow,
        ])
    }

    /// Every operator, including factorial, square root and unary minus.
    pub fn all() -> Self {
        Self::from_iter(Operator::ALL)
    }

    /// Return a copy of this set with `op` added.
    pub fn with(mut self, op: Operator) -> Self {
        self.insert(op);
        self
    }

    /// Add an operator.
    pub fn insert(&mut self, op: Operator) {
        self.0 |= op.bit();
    }

    /// Remove an operator.
    pub fn remove(&mut self, op: Operator) {
        self.0 &= !op.bit();
    }

    /// Check membership.
    pub fn contains(&self, op: Operator) -> bool {
        self.0 & op.bit() != 0
    }

    /// Number of operators in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no operator is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Operator> + '_ {
        Operator::ALL.into_iter().filter(|op| self.contains(*op))
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        let mut set = Self::empty();
        for op in iter {
            set.insert(op);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_parse_back() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Sub);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Div);
        assert_eq!("sqrt".parse::<Operator>().unwrap(), Operator::Sqrt);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operator::Pow.arity(), Arity::Binary);
        assert_eq!(Operator::Neg.arity(), Arity::Prefix);
        assert_eq!(Operator::Sqrt.arity(), Arity::Prefix);
        assert_eq!(Operator::Factorial.arity(), Arity::Postfix);
    }

    #[test]
    fn test_operator_sets() {
        let restricted = OperatorSet::arithmetic();
        assert_eq!(restricted.len(), 5);
        assert!(restricted.contains(Operator::Pow));
        assert!(!restricted.contains(Operator::Factorial));
        assert!(!restricted.contains(Operator::Sqrt));

        let full = OperatorSet::all();
        assert_eq!(full.len(), Operator::ALL.len());
        assert!(full.contains(Operator::Neg));

        let mut set = restricted.with(Operator::Sqrt);
        assert!(set.contains(Operator::Sqrt));
        set.remove(Operator::Sqrt);
        assert_eq!(set, restricted);
        assert!(OperatorSet::empty().is_empty());
    }

    #[test]
    fn test_iter_order() {
        let set = OperatorSet::from_iter([Operator::Pow, Operator::Add]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Operator::Add, Operator::Pow]);
    }
}
