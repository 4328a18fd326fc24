//! # PayZen Kit
//!
//! PayZen Kit builds, signs and checks PayZen SOAP v5 `createPayment` exchanges.
//!
//! PayZen Kit is **not a SOAP client**: the wire call goes through a [`transport::Transport`]
//! you provide. The kit handles everything around it: the request identifier, the `authToken`
//! headers, the request field groups and the validation of the response headers.
//!
//! ## Core Components Overview
//!
//! - **[`account`]**: The PayZen account, with one secret per [`types::Mode`].
//! - **[`config`]**: Platform localisation (WSDL URL, header namespace, request id namespace).
//! - **[`toolbox`]**: The `createPayment` flow, see [`toolbox::Toolbox`].
//! - **[`transport`]**: The seam to the SOAP client.
//! - **[`logging`]**: Optional observational logging.
//!
//! Re-exported from `payzen-core`:
//!
//! - **[`auth`]**: Auth token construction and verification.
//! - **[`request_id`]**: Name-based request identifiers.
//! - **[`verification`]**: Response header validation.
//! - **[`types`]**: Header, request and response types.
//!
//! ## Example
//!
//! ```no_run
//! use payzen_kit::{
//!     account::Account,
//!     toolbox::Toolbox,
//!     transport::{SoapCall, SoapResponse, Transport},
//!     types::{CreatePaymentParams, Mode},
//! };
//!
//! struct MySoapClient;
//!
//! impl Transport for MySoapClient {
//!     type Error = std::io::Error;
//!
//!     async fn create_payment(&self, call: SoapCall) -> Result<SoapResponse, Self::Error> {
//!         // Attach `call.headers`, send `call.body` to `call.wsdl`, read the response.
//!         # unimplemented!()
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let toolbox = Toolbox::builder()
//!     .account(Account::new("12345678", "test-secret", "production-secret", Mode::Test))
//!     .transport(MySoapClient)
//!     .build();
//!
//! let params = CreatePaymentParams::builder()
//!     .amount("1234")
//!     .card_number("4970100000000003")
//!     .expiry_month("06")
//!     .expiry_year("2030")
//!     .card_security_code("123")
//!     .scheme("VISA")
//!     .order_id("12345678")
//!     .build();
//!
//! let payment = toolbox.create_payment(&params).await?;
//! println!("Response code: {}", payment.result.common_response.response_code);
//! # Ok(())
//! # }
//! ```

pub mod auth {
    pub use payzen_core::auth::*;
}

pub mod request_id {
    pub use payzen_core::request_id::*;
}

pub mod types {
    pub use payzen_core::types::*;
}

pub mod verification {
    pub use payzen_core::verification::*;
}

pub mod account;
pub mod config;
pub mod errors;
pub mod logging;
pub mod toolbox;
pub mod transport;
