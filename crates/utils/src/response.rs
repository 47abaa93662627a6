use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Envelope every API endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unfold the envelope: a failed response becomes its message.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "missing data in successful response".to_string())
        } else {
            Err(self.message.unwrap_or_else(|| "unknown error".to_string()))
        }
    }
}
