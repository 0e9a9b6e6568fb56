//! Core diagnostic types.
//!
//! Every diagnostic the constant passes produce is an error: a bad
//! concatenation operand is reported and folding goes on, an internal error
//! is rendered once and then aborts.

use std::fmt;

use vela_ir::Span;

use crate::ErrorCode;

/// A source span with a message attached.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The location the diagnostic is about, as opposed to context.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// An error report: code, message, labeled spans and trailing notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Label the location the error is about.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Label a surrounding location for context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {:?}: {}", label.span, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// Operand of a constant string concatenation has no string form.
///
/// `found` is the kind tag of the offending operand after folding;
/// `concat` is the span of the whole concatenation.
#[cold]
pub fn not_convertible_to_string(operand: Span, concat: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E7001)
        .with_message(format!(
            "expected type convertible to string, but got: {found}"
        ))
        .with_label(operand, "this operand of the constant concatenation")
        .with_secondary_label(concat, "while folding this concatenation")
}

/// A constant pass reached a node its caller should have rejected.
#[cold]
pub fn internal_compiler_error(reason: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(format!("internal compiler error: {reason}"))
        .with_note("hashing, formatting and folding only accept subtrees a constancy check accepted")
}
