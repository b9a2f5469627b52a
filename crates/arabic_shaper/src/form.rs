//! Positional forms and joining predicates

use crate::{is_arabic, tables, JoiningScope};

/// Arabic positional form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionalForm {
    /// Isolated form (no connections)
    Isolated,
    /// Final form (connects to previous only)
    Final,
    /// Initial form (connects to next only)
    Initial,
    /// Medial form (connects both sides)
    Medial,
}

impl PositionalForm {
    /// Index into a letter's form list
    pub fn index(self) -> usize {
        match self {
            PositionalForm::Isolated => 0,
            PositionalForm::Final => 1,
            PositionalForm::Initial => 2,
            PositionalForm::Medial => 3,
        }
    }

    /// Select the form from the join state on each side
    pub fn from_joins(prev_joins: bool, next_joins: bool) -> Self {
        match (prev_joins, next_joins) {
            (true, true) => PositionalForm::Medial,
            (true, false) => PositionalForm::Final,
            (false, true) => PositionalForm::Initial,
            (false, false) => PositionalForm::Isolated,
        }
    }

    /// Whether this form carries a connecting stroke on its leading side
    pub fn joins_previous(self) -> bool {
        matches!(self, PositionalForm::Final | PositionalForm::Medial)
    }
}

/// Whether the character before the current one joins forward into it.
///
/// Shared by positional shaping and lam-alef sub-form selection.
pub fn joins_forward(prev: Option<char>, scope: JoiningScope) -> bool {
    match prev {
        Some(p) => scope.counts(p) && !tables().is_non_connecting(p),
        None => false,
    }
}

/// Whether `current` can pass a join to `next`.
///
/// `current` must be able to join forward and `next` must have a form that
/// receives a join from the letter before it.
pub fn accepts_join(current: char, next: Option<char>) -> bool {
    let tables = tables();
    let Some(n) = next else {
        return false;
    };
    if !is_arabic(n) || tables.is_non_connecting(current) {
        return false;
    }
    tables
        .forms(n)
        .is_some_and(|forms| forms.accepts_join_from_previous())
}
