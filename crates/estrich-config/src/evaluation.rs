//! Conformity evaluation policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvaluationConfig {
    /// Exit with a non-zero status when a conformity check fails or a
    /// designation has structural errors.
    #[serde(default)]
    pub fail_on_nonconformity: bool,
}
