/// Domain-level failures. Ledger refusals have their own type in the
/// data layer; this covers what the pure logic and form edges reject.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
