use super::{SyntaxError, to_postfix};

#[test]
fn messages() {
    assert_eq!(
        SyntaxError::MissingOperand { op: '*', span: 0..1 }.to_string(),
        "operator `*` has no operand"
    );
    assert_eq!(
        SyntaxError::EmptyGroup { span: 0..2 }.to_string(),
        "empty group `()`"
    );
    assert_eq!(
        SyntaxError::UnexpectedChar { ch: '#', span: 0..1 }.to_string(),
        "unexpected character `#`"
    );
}

#[test]
fn span_accessor() {
    let err = to_postfix("ab|").unwrap_err();
    assert_eq!(err.span(), 2..3);
}

#[test]
fn render_plain_points_at_span() {
    let source = "a|(b";
    let err = to_postfix(source).unwrap_err();
    let rendered = err.render(source, false);

    assert!(rendered.contains("error"), "{rendered}");
    assert!(rendered.contains("unclosed group"), "{rendered}");
    assert!(rendered.contains(source), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
}

#[test]
fn render_plain_has_no_ansi() {
    let source = "*";
    let err = to_postfix(source).unwrap_err();
    assert!(!err.render(source, false).contains('\x1b'));
}

#[test]
fn render_clamps_span_past_end() {
    let err = SyntaxError::UnclosedGroup { span: 10..12 };
    let rendered = err.render("ab", false);
    assert!(rendered.contains("unclosed group"), "{rendered}");
}
