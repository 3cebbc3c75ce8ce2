//! Error types with rich diagnostics using miette
//!
//! Layout over the typed part and direction enums is total, so the only
//! failure the crate knows is an unknown name on the free-text lookup
//! path. A figure whose configuration trips this lookup emits nothing.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Which lookup table rejected a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The body proportion table
    BodyPart,
    /// The direction table
    Direction,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::BodyPart => write!(f, "body part"),
            KeyKind::Direction => write!(f, "direction"),
        }
    }
}

/// A body-part or direction name that is absent from its table.
#[derive(Error, Diagnostic, Debug)]
#[error("unknown {kind} name: {name:?}")]
#[diagnostic(code(manikin::unknown_key))]
pub struct UnknownKey {
    pub kind: KeyKind,
    pub name: String,
    #[help]
    pub suggestion: Option<String>,
}

impl UnknownKey {
    /// Build the error for a failed lookup, listing the names the table
    /// does know.
    pub(crate) fn new(kind: KeyKind, name: &str, known: &[&'static str]) -> UnknownKey {
        UnknownKey {
            kind,
            name: name.to_owned(),
            suggestion: Some(format!("known {kind} names: {}", known.join(", "))),
        }
    }
}
