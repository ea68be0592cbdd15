//! JSON output for machine consumption.

use crate::processing::Evaluation;

/// Pretty-printed JSON for an [`Evaluation`].
///
/// Serialization of these types cannot fail, but the serde_json error is
/// propagated rather than swallowed.
pub fn render_json(eval: &Evaluation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(eval)
}
