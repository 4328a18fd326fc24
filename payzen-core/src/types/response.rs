use serde::{Deserialize, Serialize};

/// The `commonResponse` group of a `createPayment` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonResponse {
    /// `0` on success.
    pub response_code: i32,
    /// Human-readable detail, when the platform provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code_detail: Option<String>,
}

impl CommonResponse {
    pub fn is_success(&self) -> bool {
        self.response_code == 0
    }
}

/// The `createPaymentResult` returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResult {
    pub common_response: CommonResponse,
}
