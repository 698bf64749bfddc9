//! Syntax errors for infix and postfix expression text.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// An error in expression text, located by byte span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unclosed group: `(` has no matching `)`")]
    UnclosedGroup { span: Range<usize> },

    #[error("unexpected `)`: no group is open")]
    UnopenedGroup { span: Range<usize> },

    #[error("operator `{op}` has no operand")]
    MissingOperand { op: char, span: Range<usize> },

    #[error("empty group `()`")]
    EmptyGroup { span: Range<usize> },

    #[error("unexpected character `{ch}`")]
    UnexpectedChar { ch: char, span: Range<usize> },

    #[error("`\\` is not followed by a character to escape")]
    TrailingEscape { span: Range<usize> },
}

impl SyntaxError {
    pub fn span(&self) -> Range<usize> {
        match self {
            SyntaxError::UnclosedGroup { span }
            | SyntaxError::UnopenedGroup { span }
            | SyntaxError::MissingOperand { span, .. }
            | SyntaxError::EmptyGroup { span }
            | SyntaxError::UnexpectedChar { span, .. }
            | SyntaxError::TrailingEscape { span } => span.clone(),
        }
    }

    /// Render the error against its source with a caret under the span.
    pub fn render(&self, source: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.to_string();
        let range = adjust_range(self.span(), source.len());
        let snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));
        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];

        renderer.render(&report).to_string()
    }
}

/// Widen empty spans to one char and clamp to the source.
fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
