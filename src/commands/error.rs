/// Centralized error mapping for message handlers.
///
/// Validation errors keep their user-facing message; storage failures carry
/// their context chain.
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}
