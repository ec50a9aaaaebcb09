//! Per-table policies. Every loader names both explicitly.

/// What happens to an existing table before seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Drop the table with all its rows, then create it fresh.
    HardReset,
    /// Create the table only if absent; existing rows are left untouched.
    SoftEnsure,
}

/// How the bulk loader treats a row whose primary key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Fail the whole batch.
    Strict,
    /// Skip the incoming row and keep the stored one.
    IgnoreDuplicate,
    /// Overwrite every non-key column of the stored row. Counted as
    /// replaced even when the table declares only its key column.
    ReplaceOnDuplicate,
}

impl std::fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ResetPolicy::HardReset => "hard_reset",
            ResetPolicy::SoftEnsure => "soft_ensure",
        })
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConflictPolicy::Strict => "strict",
            ConflictPolicy::IgnoreDuplicate => "ignore_duplicate",
            ConflictPolicy::ReplaceOnDuplicate => "replace_on_duplicate",
        })
    }
}
