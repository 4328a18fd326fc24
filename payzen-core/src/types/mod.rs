//! Core types used across the PayZen Kit.

mod common;
mod header;
mod request;
mod response;

pub use common::*;
pub use header::*;
pub use request::*;
pub use response::*;
