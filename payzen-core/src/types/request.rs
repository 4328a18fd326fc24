//! Field groups of a `createPayment` request.
//!
//! Every value is a pre-formatted string handed over as-is: amounts in the currency's smallest
//! unit, currencies as ISO 4217 numeric codes. Format checks are left to the PayZen platform.

use std::fmt::Debug;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Default currency code: euro.
pub const DEFAULT_CURRENCY: &str = "978";

/// The `commonRequest` group. Only the submission date is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRequest {
    pub submission_date: Timestamp,
}

impl CommonRequest {
    pub fn new(submission_date: Timestamp) -> Self {
        CommonRequest { submission_date }
    }
}

/// The `paymentRequest` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount to charge, in the smallest unit of the currency.
    pub amount: String,
    /// ISO 4217 numeric currency code.
    pub currency: String,
}

impl PaymentRequest {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        PaymentRequest {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// The `cardRequest` group.
///
/// `Debug` masks the card number and the security code.
#[derive(Builder, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    #[builder(into)]
    pub number: String,
    /// Two digits.
    #[builder(into)]
    pub expiry_month: String,
    /// Four digits.
    #[builder(into)]
    pub expiry_year: String,
    #[builder(into)]
    pub card_security_code: String,
    /// Card type, e.g. `VISA`, `MASTERCARD`, `AMEX`, `CB`, `MAESTRO`, `E-CARTEBLEUE`.
    #[builder(into)]
    pub scheme: String,
}

impl Debug for CardRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible = self.number.len().saturating_sub(4);
        let last_four = self.number.get(visible..).unwrap_or_default();

        f.debug_struct("CardRequest")
            .field("number", &format!("****{last_four}"))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("card_security_code", &"***")
            .field("scheme", &self.scheme)
            .finish()
    }
}

/// The `orderRequest` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_id: String,
}

impl OrderRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        OrderRequest {
            order_id: order_id.into(),
        }
    }
}

/// The `customerRequest` group. Mandatory, sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {}

/// The `techRequest` group. Mandatory, sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechRequest {}

/// Caller-supplied parameters of a `createPayment` request.
///
/// ```
/// use payzen_core::types::CreatePaymentParams;
///
/// let params = CreatePaymentParams::builder()
///     .amount("1234")
///     .card_number("4970100000000003")
///     .expiry_month("06")
///     .expiry_year("2030")
///     .card_security_code("123")
///     .scheme("VISA")
///     .order_id("12345678")
///     .build();
///
/// assert_eq!(params.currency, "978");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct CreatePaymentParams {
    #[builder(into)]
    pub amount: String,
    #[builder(into, default = DEFAULT_CURRENCY.to_string())]
    pub currency: String,
    #[builder(into)]
    pub card_number: String,
    #[builder(into)]
    pub expiry_month: String,
    #[builder(into)]
    pub expiry_year: String,
    #[builder(into)]
    pub card_security_code: String,
    #[builder(into)]
    pub scheme: String,
    #[builder(into)]
    pub order_id: String,
}

/// The body of a `createPayment` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub common_request: CommonRequest,
    pub payment_request: PaymentRequest,
    pub order_request: OrderRequest,
    pub card_request: CardRequest,
    pub customer_request: CustomerRequest,
    pub tech_request: TechRequest,
}

impl CreatePayment {
    /// Shape `params` into the `createPayment` field groups.
    pub fn assemble(params: &CreatePaymentParams, submission_date: Timestamp) -> Self {
        CreatePayment {
            common_request: CommonRequest::new(submission_date),
            payment_request: PaymentRequest::new(&params.amount, &params.currency),
            order_request: OrderRequest::new(&params.order_id),
            card_request: CardRequest::builder()
                .number(&params.card_number)
                .expiry_month(&params.expiry_month)
                .expiry_year(&params.expiry_year)
                .card_security_code(&params.card_security_code)
                .scheme(&params.scheme)
                .build(),
            customer_request: CustomerRequest::default(),
            tech_request: TechRequest::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params() -> CreatePaymentParams {
        CreatePaymentParams::builder()
            .amount("1234")
            .currency("840")
            .card_number("4970100000000003")
            .expiry_month("06")
            .expiry_year("2030")
            .card_security_code("123")
            .scheme("VISA")
            .order_id("12345678")
            .build()
    }

    #[test]
    fn assemble_create_payment() {
        let workload = CreatePayment::assemble(&params(), Timestamp::from("2024-01-01T00:00:00Z"));

        assert_eq!(
            serde_json::to_value(&workload).unwrap(),
            json!({
                "commonRequest": { "submissionDate": "2024-01-01T00:00:00Z" },
                "paymentRequest": { "amount": "1234", "currency": "840" },
                "orderRequest": { "orderId": "12345678" },
                "cardRequest": {
                    "number": "4970100000000003",
                    "expiryMonth": "06",
                    "expiryYear": "2030",
                    "cardSecurityCode": "123",
                    "scheme": "VISA"
                },
                "customerRequest": {},
                "techRequest": {}
            })
        );
    }

    #[test]
    fn empty_values_pass_through() {
        let params = CreatePaymentParams::builder()
            .amount("")
            .card_number("")
            .expiry_month("")
            .expiry_year("")
            .card_security_code("")
            .scheme("")
            .order_id("")
            .build();

        let workload = CreatePayment::assemble(&params, Timestamp::from(""));

        assert_eq!(workload.payment_request, PaymentRequest::new("", "978"));
        assert_eq!(workload.order_request.order_id, "");
        assert_eq!(workload.card_request.number, "");
        assert_eq!(workload.common_request.submission_date.as_str(), "");
    }

    #[test]
    fn card_debug_is_masked() {
        let workload = CreatePayment::assemble(&params(), Timestamp::from("2024-01-01T00:00:00Z"));
        let debug = format!("{:?}", workload.card_request);

        assert!(debug.contains("****0003"));
        assert!(!debug.contains("4970100000000003"));
        assert!(!debug.contains("\"123\""));
    }
}
