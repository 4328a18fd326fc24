//! PayZen core library.
//!
//! This library provides the deterministic parts of a PayZen SOAP v5 exchange:
//! request identifiers, auth tokens, response header checks and the
//! `createPayment` field layout. It performs no I/O.

pub mod auth;
pub mod errors;
pub mod request_id;
pub mod types;
pub mod verification;
