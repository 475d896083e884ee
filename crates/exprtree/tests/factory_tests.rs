use exprtree::*;
use pretty_assertions::assert_eq;

// Helper to run a token through the full factory and finalize leaves
fn leaf(kind: TokenKind, value: &str) -> Node {
    NodeFactory::full()
        .create(&Token::new(kind, value))
        .expect("token should map to a node")
        .build()
        .expect("leaf should be complete")
}

fn create(
    factory: &NodeFactory,
    kind: TokenKind,
    value: &str,
) -> Result<NodeBuilder, FactoryError> {
    factory.create(&Token::new(kind, value))
}

// ═══════════════════════════════════════════════════════════════════════
// Leaf Tokens
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_integer_tokens() {
    assert_eq!(leaf(TokenKind::PosInt, "42"), Node::integer(42));
    assert_eq!(leaf(TokenKind::Integer, "-7"), Node::integer(-7));
    assert_eq!(leaf(TokenKind::Integer, "0"), Node::integer(0));
}

#[test]
fn test_real_number_tokens() {
    assert_eq!(leaf(TokenKind::RealNumber, "2.5"), Node::number(2.5));
    assert_eq!(leaf(TokenKind::RealNumber, "1e3"), Node::number(1000.0));
}

#[test]
fn test_name_tokens() {
    assert_eq!(leaf(TokenKind::Identifier, "x"), Node::variable("x"));
    assert_eq!(leaf(TokenKind::Constant, "pi"), Node::constant("pi"));
}

#[test]
fn test_leaves_are_terminal_and_complete() {
    let factory = NodeFactory::full();
    for (kind, value) in [
        (TokenKind::PosInt, "1"),
        (TokenKind::RealNumber, "1.0"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Constant, "e"),
    ] {
        let builder = create(&factory, kind, value).unwrap();
        assert!(builder.is_terminal(), "{kind} should be terminal");
        assert!(builder.is_complete(), "{kind} should be complete");
        assert_eq!(builder.operator(), "");
    }
}

#[test]
fn test_malformed_numbers() {
    let factory = NodeFactory::full();
    let err = create(&factory, TokenKind::PosInt, "four").unwrap_err();
    assert!(matches!(
        err,
        FactoryError::InvalidNumber {
            kind: TokenKind::PosInt,
            ..
        }
    ));

    let err = create(&factory, TokenKind::RealNumber, "1.2.3").unwrap_err();
    assert!(matches!(err, FactoryError::InvalidNumber { .. }));
}

// ═══════════════════════════════════════════════════════════════════════
// Placeholder Tokens
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_function_placeholder() {
    let mut builder = create(&NodeFactory::full(), TokenKind::FunctionName, "cos").unwrap();
    assert_eq!(builder.kind(), NodeKind::Function);
    assert!(!builder.is_terminal());

    builder.set_operand(Node::variable("t")).unwrap();
    assert_eq!(
        builder.build().unwrap(),
        Node::function("cos", Node::variable("t"))
    );
}

#[test]
fn test_parenthesis_placeholder() {
    let mut builder = create(&NodeFactory::full(), TokenKind::OpenParenthesis, "(").unwrap();
    assert_eq!(builder.kind(), NodeKind::SubExpression);
    builder.set_inner(Node::integer(3)).unwrap();
    assert_eq!(builder.build().unwrap(), Node::sub_expression(Node::integer(3)));
}

#[test]
fn test_operator_placeholders() {
    let factory = NodeFactory::full();
    let cases = [
        (TokenKind::AdditionOperator, "+"),
        (TokenKind::SubtractionOperator, "-"),
        (TokenKind::MultiplicationOperator, "*"),
        (TokenKind::DivisionOperator, "/"),
        (TokenKind::ExponentiationOperator, "^"),
        (TokenKind::FactorialOperator, "!"),
        (TokenKind::SquareRootOperator, "√"),
    ];
    for (kind, symbol) in cases {
        let builder = create(&factory, kind, symbol).unwrap();
        assert_eq!(builder.kind(), NodeKind::Expression);
        assert_eq!(builder.operator(), symbol);
        assert!(!builder.is_complete());
    }
}

#[test]
fn test_operator_placeholder_builds_binary() {
    let factory = NodeFactory::restricted();
    let mut builder = create(&factory, TokenKind::DivisionOperator, "/").unwrap();
    builder.set_left(Node::integer(1)).unwrap();
    builder.set_right(Node::integer(2)).unwrap();
    assert_eq!(
        builder.build().unwrap(),
        Node::binary(Node::integer(1), Operator::Div, Node::integer(2))
    );
}

#[test]
fn test_operator_text_is_read() {
    let factory = NodeFactory::full();
    let cases = [
        (TokenKind::SubtractionOperator, "−", "-"),
        (TokenKind::MultiplicationOperator, "×", "*"),
        (TokenKind::DivisionOperator, "÷", "/"),
        (TokenKind::SquareRootOperator, "sqrt", "√"),
        (TokenKind::AdditionOperator, " + ", "+"),
    ];
    for (kind, text, symbol) in cases {
        let builder = create(&factory, kind, text).unwrap();
        assert_eq!(builder.operator(), symbol, "{kind} spelled `{text}`");
    }
}

#[test]
fn test_operator_text_disagreeing_with_kind() {
    let factory = NodeFactory::full();
    for (kind, text) in [
        (TokenKind::AdditionOperator, "*"),
        (TokenKind::MultiplicationOperator, "+"),
        (TokenKind::SubtractionOperator, "neg"),
        (TokenKind::FactorialOperator, "fact"),
    ] {
        let err = create(&factory, kind, text).unwrap_err();
        assert_eq!(
            err,
            FactoryError::InvalidOperator {
                kind,
                value: text.to_string(),
            }
        );
        assert!(!err.is_no_match());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// NoMatch
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unrecognized_tokens() {
    let factory = NodeFactory::full();
    for kind in [
        TokenKind::CloseParenthesis,
        TokenKind::Comma,
        TokenKind::EqualsSign,
        TokenKind::Unknown,
    ] {
        let err = create(&factory, kind, "?").unwrap_err();
        assert_eq!(err, FactoryError::NoMatch { kind });
        assert!(err.is_no_match());
    }
}

#[test]
fn test_restricted_factory_table() {
    let restricted = NodeFactory::restricted();
    let full = NodeFactory::full();

    for (kind, symbol) in [
        (TokenKind::FactorialOperator, "!"),
        (TokenKind::SquareRootOperator, "√"),
    ] {
        assert!(create(&restricted, kind, symbol).unwrap_err().is_no_match());
        assert!(create(&full, kind, symbol).is_ok());
    }

    // Everything else maps identically
    for (kind, value) in [
        (TokenKind::PosInt, "3"),
        (TokenKind::Identifier, "x"),
        (TokenKind::AdditionOperator, "+"),
        (TokenKind::ExponentiationOperator, "^"),
    ] {
        assert_eq!(
            create(&restricted, kind, value).unwrap().kind(),
            create(&full, kind, value).unwrap().kind()
        );
    }
}

#[test]
fn test_default_factory_is_full() {
    assert_eq!(NodeFactory::default(), NodeFactory::full());
    assert_eq!(NodeFactory::full().operators(), OperatorSet::all());
    assert_eq!(NodeFactory::restricted().operators(), OperatorSet::arithmetic());
}
