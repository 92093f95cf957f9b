//! Sheet options

/// What an average query returns for a column with no numeric cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyColumnPolicy {
    /// Fail with [`Error::NoNumericData`](crate::Error::NoNumericData)
    #[default]
    Error,
    /// Return `f64::NAN`
    NaN,
}

/// Options for building and querying a [`Sheet`](crate::Sheet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    /// Reject cells whose id differs from their storage position (default: false)
    pub require_positional_ids: bool,
    /// Result for columns without numeric cells (default: error)
    pub empty_column: EmptyColumnPolicy,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            require_positional_ids: false,
            empty_column: EmptyColumnPolicy::Error,
        }
    }
}

impl SheetOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether cell ids must match their position
    pub fn with_positional_ids(mut self, required: bool) -> Self {
        self.require_positional_ids = required;
        self
    }

    /// Set the empty column policy
    pub fn with_empty_column(mut self, policy: EmptyColumnPolicy) -> Self {
        self.empty_column = policy;
        self
    }
}
