//! Solver-internal symbols.

use std::fmt;

/// The kind of a tableau symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum SymbolKind {
    /// Sentinel for "no symbol"; never enters the tableau.
    Invalid,
    /// A user-visible variable.
    External,
    /// Absorbs the looseness of an inequality.
    Slack,
    /// Absorbs the strength-weighted violation of a non-required constraint.
    Error,
    /// Marks a required equality.
    Dummy,
}

/// A tableau symbol.
///
/// Symbols are compared by identity and ordered by creation sequence, which
/// keeps every tableau iteration deterministic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Symbol {
    id: u64,
    kind: SymbolKind,
}

impl Symbol {
    pub(crate) const INVALID: Symbol = Symbol {
        id: 0,
        kind: SymbolKind::Invalid,
    };

    pub(crate) fn new(id: u64, kind: SymbolKind) -> Self {
        Self { id, kind }
    }

    pub(crate) fn is_valid(self) -> bool {
        self.kind != SymbolKind::Invalid
    }

    pub(crate) fn is_external(self) -> bool {
        self.kind == SymbolKind::External
    }

    pub(crate) fn is_slack(self) -> bool {
        self.kind == SymbolKind::Slack
    }

    pub(crate) fn is_error(self) -> bool {
        self.kind == SymbolKind::Error
    }

    pub(crate) fn is_dummy(self) -> bool {
        self.kind == SymbolKind::Dummy
    }

    /// Slack and error symbols may be chosen as the subject of a new row.
    pub(crate) fn is_pivotable(self) -> bool {
        self.is_slack() || self.is_error()
    }

    /// Restricted symbols are constrained to be non-negative.
    pub(crate) fn is_restricted(self) -> bool {
        match self.kind {
            SymbolKind::External | SymbolKind::Invalid => false,
            SymbolKind::Slack | SymbolKind::Error | SymbolKind::Dummy => true,
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            SymbolKind::Invalid => return f.write_str("invalid"),
            SymbolKind::External => 'v',
            SymbolKind::Slack => 's',
            SymbolKind::Error => 'e',
            SymbolKind::Dummy => 'd',
        };
        write!(f, "{}{}", prefix, self.id)
    }
}

/// The marker (and optional paired error) symbol synthesized for a
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tag {
    pub marker: Symbol,
    pub other: Symbol,
}

impl Tag {
    pub(crate) fn new(marker: Symbol, other: Symbol) -> Self {
        Self { marker, other }
    }
}
