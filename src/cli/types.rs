//! Type-safe wrappers used by the CLI and the report layer.

use std::fmt;

/// Minimum printed width of every report column, in characters.
///
/// Values shorter than the width are right-padded with spaces; longer values
/// are printed in full.
///
/// # Examples
///
/// ```rust
/// use courtside::ColumnWidth;
///
/// let width = ColumnWidth::new(27);
/// assert_eq!(width.as_usize(), 27);
/// assert_eq!(width.to_string(), "27");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnWidth(pub usize);

impl ColumnWidth {
    pub const fn new(width: usize) -> Self {
        Self(width)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self(27)
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
