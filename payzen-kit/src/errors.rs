pub use payzen_core::errors::*;

/// Error of a full `createPayment` exchange.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError<E: std::error::Error> {
    /// Request identity or response verification failed.
    #[error(transparent)]
    Core(#[from] Error),
    /// The transport failed; the error is passed through unchanged.
    #[error("{0}")]
    Transport(E),
}
