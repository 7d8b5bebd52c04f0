//! Editor column selection for the opened companion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based editor column (split pane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewColumn(u32);

impl ViewColumn {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);

    /// `None` for 0, which no editor uses as a column number.
    pub fn new(column: u32) -> Option<Self> {
        (column > 0).then_some(Self(column))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The column across a two-pane split: 1 becomes 2, anything else 1.
    pub fn other(self) -> Self {
        if self == Self::ONE { Self::TWO } else { Self::ONE }
    }
}

impl Default for ViewColumn {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ViewColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Column to open the companion in.
///
/// Without an active column the first one is used regardless of
/// `use_other_column`.
pub fn determine_column(active: Option<ViewColumn>, use_other_column: bool) -> ViewColumn {
    match active {
        None => ViewColumn::ONE,
        Some(active) if use_other_column => active.other(),
        Some(active) => active,
    }
}
