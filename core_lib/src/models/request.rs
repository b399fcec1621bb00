//! Request and response models

use serde::{Deserialize, Serialize};

/// Query string accepted by `GET /api/providers`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProviderListParams {
    pub q: Option<String>,
    pub specialization: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
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

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let ok = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"], serde_json::json!([1, 2]));
        assert!(ok["message"].is_null());
    }

    #[test]
    fn test_list_params_all_optional() {
        let params: ProviderListParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.q.is_none());
        assert!(params.specialization.is_none());
        assert!(params.sort.is_none());
    }
}
