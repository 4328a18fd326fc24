//! Sends a `createPayment` request through an in-process stand-in for the PayZen platform.
//!
//! Replace `SandboxTransport` with a real SOAP client to talk to PayZen.

use payzen_kit::{
    account::Account,
    auth::{Direction, build_token},
    logging::{LogThreshold, Logger},
    toolbox::Toolbox,
    transport::{SoapCall, SoapResponse, Transport},
    types::{
        CommonResponse, CreatePaymentParams, CreatePaymentResult, HeaderField, Mode, Record,
        Timestamp,
    },
};

const TEST_SECRET: &str = "[***CHANGE-ME***]";

#[derive(Debug, thiserror::Error)]
enum SandboxError {
    #[error("missing `{0}` in the request headers")]
    MissingHeader(HeaderField),
    #[error(transparent)]
    Signing(#[from] payzen_kit::errors::Error),
}

/// Answers every call with a successful, correctly signed response.
#[derive(Debug)]
struct SandboxTransport;

impl Transport for SandboxTransport {
    type Error = SandboxError;

    async fn create_payment(&self, call: SoapCall) -> Result<SoapResponse, Self::Error> {
        let get = |name: HeaderField| {
            call.headers
                .iter()
                .find(|h| h.name == name)
                .map(|h| h.value.clone())
                .ok_or(SandboxError::MissingHeader(name))
        };

        let request_id = get(HeaderField::RequestId)?;
        let timestamp = Timestamp::now();
        let token = build_token(
            &request_id,
            timestamp.as_str(),
            TEST_SECRET.as_bytes(),
            Direction::Incoming,
        )?;

        let headers: Record<String> = [
            (HeaderField::ShopId, get(HeaderField::ShopId)?),
            (HeaderField::RequestId, request_id),
            (HeaderField::Timestamp, timestamp.0),
            (HeaderField::Mode, get(HeaderField::Mode)?),
            (HeaderField::AuthToken, token.0),
        ]
        .into_iter()
        .map(|(name, value)| (name.as_str().to_string(), value))
        .collect();

        Ok(SoapResponse {
            headers,
            result: CreatePaymentResult {
                common_response: CommonResponse {
                    response_code: 0,
                    response_code_detail: None,
                },
            },
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let toolbox = Toolbox::builder()
        .account(Account::new(
            "[***CHANGE-ME***]",
            TEST_SECRET,
            "[***CHANGE-ME***]",
            Mode::Test,
        ))
        .transport(SandboxTransport)
        .logger(Logger::tracing(LogThreshold::Notice))
        .build();

    let params = CreatePaymentParams::builder()
        .amount("1234")
        .currency("978")
        .card_number("4970100000000003")
        .expiry_month("06")
        .expiry_year("2030")
        .card_security_code("123")
        .scheme("VISA")
        .order_id("12345678")
        .build();

    let payment = toolbox.create_payment(&params).await?;
    let response = &payment.result.common_response;

    println!("Response code: {}", response.response_code);
    println!(
        "Message: {}",
        response.response_code_detail.as_deref().unwrap_or("[NONE]")
    );

    Ok(())
}
