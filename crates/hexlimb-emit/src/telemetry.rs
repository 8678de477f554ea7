use serde::{Deserialize, Serialize};

/// Deterministic, machine-readable record of one emit operation.
///
/// Contains no wall-clock fields, so records are stable across runs and safe
/// to diff in CI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitTelemetry {
    /// Operation category, e.g. "split", "packet", "verify".
    pub op: String,

    /// Whether the operation succeeded.
    pub ok: bool,

    /// Words produced (0 when the operation failed).
    pub word_count: usize,

    /// Characters of input literal consumed.
    pub input_chars: usize,

    /// Characters of rendered output, when one was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_chars: Option<usize>,

    /// Machine-readable error code (when failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl SplitTelemetry {
    /// Record for a successful operation.
    pub fn success(op: &str, word_count: usize, input_chars: usize, output_chars: usize) -> Self {
        Self {
            op: op.to_string(),
            ok: true,
            word_count,
            input_chars,
            output_chars: Some(output_chars),
            error_code: None,
        }
    }

    /// Record for a failed operation.
    pub fn failure(op: &str, input_chars: usize, error_code: &str) -> Self {
        Self {
            op: op.to_string(),
            ok: false,
            word_count: 0,
            input_chars,
            output_chars: None,
            error_code: Some(error_code.to_string()),
        }
    }
}
