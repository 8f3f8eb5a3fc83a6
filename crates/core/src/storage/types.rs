/// Result of a conditional write addressed by id.
///
/// Rows-affected counts collapse "the id does not exist" and "nothing changed"
/// into zero, so both surface as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// At least one row was affected.
    Applied,
    /// No row matched the id.
    NotFound,
}

impl WriteOutcome {
    /// Builds an outcome from a store's rows-affected count.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        }
    }
}
