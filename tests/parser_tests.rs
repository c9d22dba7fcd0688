// Integration tests for the arithmetic front-end

use skink::config::{ParserConfig, ANONYMOUS_SOURCE, DEFAULT_MAX_DEPTH};
use skink::parser::{
    lex, parse_source, parse_source_with, parse_tokens, run_string, AstNode, BinOp,
    DiagnosticKind, Parser, TokenKind, UnOp,
};

fn int(text: &str) -> AstNode {
    AstNode::IntLiteral {
        text: text.to_string(),
        line: 1,
    }
}

fn bin(op: BinOp, left: AstNode, right: AstNode) -> AstNode {
    AstNode::binary(op, left, right)
}

#[test]
fn test_precedence() {
    let tree = parse_source("test", "1+2*3").expect("Parsing failed");
    assert_eq!(
        tree,
        bin(BinOp::Add, int("1"), bin(BinOp::Mul, int("2"), int("3")))
    );
}

#[test]
fn test_left_associativity() {
    let tree = parse_source("test", "1-2-3").expect("Parsing failed");
    assert_eq!(
        tree,
        bin(BinOp::Sub, bin(BinOp::Sub, int("1"), int("2")), int("3"))
    );
}

#[test]
fn test_grouping() {
    let tree = parse_source("test", "(1+2)*3").expect("Parsing failed");
    assert_eq!(
        tree,
        bin(BinOp::Mul, bin(BinOp::Add, int("1"), int("2")), int("3"))
    );
}

#[test]
fn test_unary_chaining() {
    let tree = parse_source("test", "--5").expect("Parsing failed");
    assert_eq!(
        tree,
        AstNode::unary(UnOp::Minus, AstNode::unary(UnOp::Minus, int("5")))
    );
}

#[test]
fn test_literal_classification() {
    let tree = parse_source("test", "3.14").expect("Parsing failed");
    assert_eq!(
        tree,
        AstNode::FloatLiteral {
            text: "3.14".to_string(),
            line: 1
        }
    );

    let tree = parse_source("test", "314").expect("Parsing failed");
    assert_eq!(tree, int("314"));
}

#[test]
fn test_modulus_and_division() {
    let tree = parse_source("test", "7 % 4 / 2").expect("Parsing failed");
    assert_eq!(
        tree,
        bin(BinOp::Div, bin(BinOp::Mod, int("7"), int("4")), int("2"))
    );
}

#[test]
fn test_deterministic() {
    let source = "-(1 + 2.5) * 3 % (4 - -5)";
    let first = parse_source("test", source).expect("Parsing failed");
    let second = parse_source("test", source).expect("Parsing failed");
    assert_eq!(first, second);
}

#[test]
fn test_malformed_number() {
    let err = parse_source("test", "1.2.3").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Lexical);
    assert_eq!(err.line, 1);
    assert!(err.message.starts_with("lexical error"));
}

#[test]
fn test_unterminated_group() {
    let err = parse_source("test", "(1+2").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
    assert!(err.message.starts_with("syntax error"));
    assert!(err.message.contains("end of input"), "{}", err);
}

#[test]
fn test_unknown_character() {
    let err = parse_source("test", "1+@").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Lexical);
    assert_eq!(err.line, 1);

    let err = parse_source("test", "1 +\n2 *\n  @").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Lexical);
    assert_eq!(err.line, 3);
}

#[test]
fn test_trailing_garbage() {
    let err = parse_source("test", "1+2 3").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
    assert!(err.message.contains("int literal 3"), "{}", err);

    let err = parse_source("test", "(1))").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
}

#[test]
fn test_empty_input() {
    let err = parse_source("test", "").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
    assert_eq!(err.line, 1);
    assert!(err.message.contains("end of input"));

    let err = parse_source("test", "  \n\t").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
    assert_eq!(err.line, 2);
}

#[test]
fn test_node_lines_follow_leftmost_leaf() {
    let tree = parse_source("test", "\n\n(1\n+ 2)\n* 3").expect("Parsing failed");
    assert_eq!(tree.line(), 3);
    match &tree {
        AstNode::BinaryOp { right, .. } => assert_eq!(right.line(), 5),
        other => panic!("Expected binary node, got {:?}", other),
    }
}

#[test]
fn test_syntax_error_line() {
    let err = parse_source("calc.sk", "1 +\n\n)").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
    assert_eq!(err.line, 3);
    assert_eq!(err.to_string(), "calc.sk:3: error: syntax error: unexpected ')'");
}

#[test]
fn test_nesting_limit() {
    let config = ParserConfig::default().with_max_depth(10);

    let ok = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    assert!(parse_source_with("test", &ok, config).is_ok());

    let too_deep = format!("{}1{}", "(".repeat(11), ")".repeat(11));
    let err = parse_source_with("test", &too_deep, config).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);

    let err = parse_source_with("test", &format!("{}1", "-".repeat(11)), config).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);
}

#[test]
fn test_pathological_nesting_does_not_overflow() {
    let source = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = parse_source("test", &source).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);
    assert!(err.message.contains(&DEFAULT_MAX_DEPTH.to_string()));
}

#[test]
fn test_long_flat_chain() {
    let source = vec!["1"; 1_000].join("+");
    let tree = parse_source("test", &source).expect("Parsing failed");
    assert_eq!(tree.node_count(), 1_999);
}

#[test]
fn test_very_long_flat_chain_prints_and_drops() {
    let source = vec!["1"; 500_000].join("+");
    let tree = parse_source("test", &source).expect("Parsing failed");
    assert_eq!(tree.node_count(), 999_999);
    assert_eq!(tree.height(), 500_000);

    let printed = tree.to_string();
    assert!(printed.starts_with("(add (add (add "));
    assert!(printed.ends_with("(int 1)) (int 1))"));

    let again = parse_source("test", &source).expect("Parsing failed");
    assert!(tree == again);
    drop(tree);
    drop(again);

    let source = vec!["1"; 100_000].join("-");
    let tree = run_string(&source).expect("Parsing failed");
    assert!(tree.to_string().starts_with("(subtract (subtract "));
}

#[test]
fn test_run_string_uses_anonymous_source() {
    let err = run_string("1 $").unwrap_err();
    assert_eq!(err.source_name, ANONYMOUS_SOURCE);
    assert!(err.to_string().starts_with("<anonymous>:1: error:"));

    let tree = run_string("2*2").expect("Parsing failed");
    assert_eq!(tree.to_string(), "(multiply (int 2) (int 2))");
}

#[test]
fn test_two_stage_api() {
    let tokens = lex("test", "4 - 2").expect("Lexing failed");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

    let tree = parse_tokens("test", tokens.clone(), ParserConfig::default()).unwrap();
    assert_eq!(tree, bin(BinOp::Sub, int("4"), int("2")));

    let again = Parser::new("test", tokens).parse().unwrap();
    assert_eq!(tree, again);
}
