//! Business profile shown in the settings modal and used for money display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Currency used to display amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Bangladeshi Taka.
    #[default]
    Bdt,
    /// US Dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// All currencies, in the order the settings modal cycles through them.
    pub const ALL: [Self; 3] = [Self::Bdt, Self::Usd, Self::Eur];

    /// The symbol prefixed to amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Bdt => "৳",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// The next currency, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bdt => "BDT - Bangladeshi Taka",
            Self::Usd => "USD - US Dollar",
            Self::Eur => "EUR - Euro",
        })
    }
}

/// The business profile.
///
/// # Examples
///
/// ```
/// use nexus_config::business::{BusinessConfig, Currency};
///
/// let business = BusinessConfig::default();
/// assert_eq!(business.name, "Acme Corporation Ltd.");
/// assert_eq!(business.currency, Currency::Bdt);
/// assert_eq!(business.invoice_number(1024), "INV-1024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub currency: Currency,
    pub timezone: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Prefix for generated invoice numbers.
    pub invoice_prefix: String,
    /// Note printed at the bottom of invoices.
    pub invoice_footer: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Acme Corporation Ltd.".to_string(),
            currency: Currency::default(),
            timezone: "Asia/Dhaka".to_string(),
            phone: "+880 1712 345678".to_string(),
            email: "info@acmecorp.com".to_string(),
            address: "House 42, Road 11, Block E, Banani, Dhaka 1213".to_string(),
            invoice_prefix: "INV-".to_string(),
            invoice_footer:
                "Thank you for your business! For any queries, contact us at support@acmecorp.com"
                    .to_string(),
        }
    }
}

impl BusinessConfig {
    /// Formats an invoice number with the configured prefix.
    #[must_use]
    pub fn invoice_number(&self, number: u64) -> String {
        format!("{}{number}", self.invoice_prefix)
    }

    /// Checks that the profile can be displayed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBusinessName`] if the name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyBusinessName);
        }
        Ok(())
    }
}
