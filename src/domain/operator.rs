//! Boolean operators and the modifier-key contract that selects them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean operator attached to a search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    /// Every AND term must match
    #[default]
    And,
    /// At least one OR term must match (needs two or more OR terms)
    Or,
    /// No NOT term may match
    Not,
}

/// Modifier keys held while a suggestion is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeys {
    pub shift: bool,
    pub ctrl: bool,
}

impl ModifierKeys {
    /// No modifiers held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ctrl: false,
        }
    }

    /// Ctrl and shift held together.
    pub fn ctrl_shift() -> Self {
        Self {
            shift: true,
            ctrl: true,
        }
    }
}

impl Operator {
    /// All operators in classification order.
    pub const ALL: [Operator; 3] = [Operator::And, Operator::Or, Operator::Not];

    /// Map held modifier keys to an operator.
    ///
    /// ctrl+shift selects NOT, shift alone selects OR, anything else is AND.
    pub fn from_modifiers(keys: ModifierKeys) -> Self {
        match (keys.ctrl, keys.shift) {
            (true, true) => Self::Not,
            (false, true) => Self::Or,
            _ => Self::And,
        }
    }

    /// Display label for the operator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
