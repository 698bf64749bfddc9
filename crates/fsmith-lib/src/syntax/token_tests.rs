use super::{SyntaxError, Token, parse_postfix, postfix_string};

#[test]
fn operators_and_literals() {
    let tokens = parse_postfix("ab|*c.").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal('a'),
            Token::Literal('b'),
            Token::Union,
            Token::Star,
            Token::Literal('c'),
            Token::Concat,
        ]
    );
}

#[test]
fn whitespace_is_trimmed() {
    assert_eq!(parse_postfix("  a b . ").unwrap().len(), 3);
    assert!(parse_postfix(" \t\n").unwrap().is_empty());
    assert!(parse_postfix("").unwrap().is_empty());
}

#[test]
fn escapes_make_operators_literal() {
    let tokens = parse_postfix(r"\*\ .").unwrap();
    assert_eq!(
        tokens,
        vec![Token::Literal('*'), Token::Literal(' '), Token::Concat]
    );
}

#[test]
fn trailing_escape() {
    let err = parse_postfix("ab\\").unwrap_err();
    assert_eq!(err, SyntaxError::TrailingEscape { span: 2..3 });
}

#[test]
fn arity() {
    assert_eq!(Token::Literal('x').arity(), 0);
    assert_eq!(Token::Star.arity(), 1);
    assert_eq!(Token::Plus.arity(), 1);
    assert_eq!(Token::Optional.arity(), 1);
    assert_eq!(Token::Concat.arity(), 2);
    assert_eq!(Token::Union.arity(), 2);
}

#[test]
fn display_reads_back() {
    let source = r"\.a|\\?\ +";
    let tokens = parse_postfix(source).unwrap();
    let printed = postfix_string(&tokens);

    assert_eq!(printed, source);
    assert_eq!(parse_postfix(&printed).unwrap(), tokens);
}
