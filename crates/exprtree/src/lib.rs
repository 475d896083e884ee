//! # exprtree
//!
//! Expression tree nodes for a symbolic math library.
//!
//! A parsed mathematical expression is a tree of [`Node`]s. This crate
//! defines the node variants and the machinery every downstream algorithm
//! builds on:
//!
//! - **Factory**: [`NodeFactory`] turns one lexical [`Token`] into a leaf or
//!   a composite placeholder ([`NodeBuilder`]) for the parser to complete
//! - **Dispatch**: [`Visitor`] and [`Node::accept`] let evaluators,
//!   differentiators and printers live outside the node definitions
//! - **Structure**: [`Node::complexity`], [`Node::compare_to`] and
//!   [`Node::is_terminal`]
//! - **Evaluation**: [`evaluate`] runs a [`NumericEvaluator`] against
//!   variable [`Bindings`]
//!
//! Tokenizing and parsing live in other crates; they meet this one at
//! [`Token`] and [`NodeBuilder`].
//!
//! ## Example
//!
//! ```
//! use exprtree::{evaluate, Bindings, NodeFactory, Token, TokenKind};
//!
//! let factory = NodeFactory::full();
//!
//! // x ^ 2, assembled the way a parser would
//! let x = factory.create(&Token::new(TokenKind::Identifier, "x")).unwrap();
//! let two = factory.create(&Token::new(TokenKind::PosInt, "2")).unwrap();
//! let mut pow = factory
//!     .create(&Token::new(TokenKind::ExponentiationOperator, "^"))
//!     .unwrap();
//! pow.set_left(x.build().unwrap()).unwrap();
//! pow.set_right(two.build().unwrap()).unwrap();
//! let tree = pow.build().unwrap();
//!
//! assert_eq!(tree.to_string(), "x ^ 2");
//! assert_eq!(tree.complexity(), Ok(10));
//!
//! let bindings: Bindings = [("x", 3.0)].into_iter().collect();
//! assert_eq!(evaluate(&tree, &bindings), Ok(9.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bindings;
pub mod context;
pub mod error;
pub mod eval;
pub mod factory;
pub mod node;
pub mod token;
pub mod visitor;

// Re-export main types
pub use bindings::Bindings;
pub use context::EvalContext;
pub use error::{EvalError, FactoryError, NodeError};
pub use eval::{evaluate, evaluate_in, evaluate_with, NumericEvaluator};
pub use factory::NodeFactory;
pub use node::{Arity, Node, NodeBuilder, NodeKind, Operator, OperatorSet, Slot};
pub use token::{Token, TokenKind};
pub use visitor::Visitor;

/// exprtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
