//! PayZen account information.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// An account secret ("certificate" in the PayZen back office).
///
/// Never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    /// The raw key bytes, for HMAC computation only.
    pub fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// One secret per mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secrets {
    pub test: Secret,
    pub production: Secret,
}

impl Secrets {
    pub fn new(test: impl Into<String>, production: impl Into<String>) -> Self {
        Secrets {
            test: Secret::new(test),
            production: Secret::new(production),
        }
    }

    pub fn for_mode(&self, mode: Mode) -> &Secret {
        match mode {
            Mode::Test => &self.test,
            Mode::Production => &self.production,
        }
    }
}

/// A PayZen account. Immutable once built.
///
/// Can be loaded from configuration:
///
/// ```
/// use payzen_kit::{account::Account, types::Mode};
///
/// let account: Account = serde_json::from_value(serde_json::json!({
///     "shopId": "12345678",
///     "secrets": { "test": "1111111111111111", "production": "2222222222222222" },
///     "mode": "PRODUCTION"
/// })).unwrap();
///
/// assert_eq!(account.mode(), Mode::Production);
/// assert_eq!(account.secret(), b"2222222222222222");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    shop_id: String,
    secrets: Secrets,
    #[serde(default)]
    mode: Mode,
}

impl Account {
    pub fn new(
        shop_id: impl Into<String>,
        test_secret: impl Into<String>,
        production_secret: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Account {
            shop_id: shop_id.into(),
            secrets: Secrets::new(test_secret, production_secret),
            mode,
        }
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The secret of the active mode.
    pub fn secret(&self) -> &[u8] {
        self.secrets.for_mode(self.mode).expose()
    }
}
