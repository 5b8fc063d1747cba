//! Customers and their history.
//!
//! [`Customer`] holds the profile plus lifetime counters shown in the
//! customer list. Everything on the details screen beyond the profile
//! (recent orders, payments, returns, saved addresses, activity) lives in a
//! [`CustomerHistory`] keyed by customer id.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::order::OrderStatus;
use crate::variant::{Variant, impl_display_and_from_str};

/// Identifier of a customer, e.g. `CUS-001`.
pub type CustomerId = String;

/// Whether the customer is still ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

impl Variant for CustomerStatus {
    const KIND: &'static str = "customer status";
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// New vs. returning customers, as filtered in the customer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// No repeat orders yet.
    New,
    /// At least one repeat order.
    Repeat,
}

impl Variant for OrderType {
    const KIND: &'static str = "order type";
    const ALL: &'static [Self] = &[Self::New, Self::Repeat];

    fn display_name(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Repeat => "Repeat",
        }
    }
}

impl_display_and_from_str!(CustomerStatus, OrderType);

/// A customer profile with lifetime counters.
///
/// The counters are stored, not derived from the order list, and are not
/// guaranteed to agree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub district: String,
    pub division: String,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub total_orders: u32,
    pub repeat_orders: u32,
    /// Lifetime value in whole taka.
    pub total_spent: u64,
    pub last_order_date: Option<NaiveDate>,
    pub status: CustomerStatus,
}

impl Customer {
    /// Classifies the customer by whether they have ordered again.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::{Catalog, OrderType};
    ///
    /// let catalog = Catalog::sample();
    /// let ahmed = catalog.customer("CUS-001").unwrap();
    /// assert_eq!(ahmed.order_type(), OrderType::Repeat);
    /// ```
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        if self.repeat_orders > 0 {
            OrderType::Repeat
        } else {
            OrderType::New
        }
    }

    /// Appends a line to the internal notes.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyNote`] if the trimmed note is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Catalog;
    ///
    /// let mut catalog = Catalog::sample();
    /// let mut customer = catalog.customers.remove(0);
    /// customer.add_note("Asked for invoice copies").unwrap();
    /// assert_eq!(
    ///     customer.note_lines().collect::<Vec<_>>(),
    ///     ["VIP customer, prefers morning delivery", "Asked for invoice copies"]
    /// );
    /// ```
    pub fn add_note(&mut self, note: &str) -> Result<()> {
        let note = note.trim();
        if note.is_empty() {
            return Err(ProtocolError::EmptyNote);
        }
        match &mut self.notes {
            Some(notes) if !notes.trim().is_empty() => {
                notes.push('\n');
                notes.push_str(note);
            }
            notes => *notes = Some(note.to_string()),
        }
        Ok(())
    }

    /// The internal notes, one entry per line.
    pub fn note_lines(&self) -> impl Iterator<Item = &str> {
        self.notes
            .iter()
            .flat_map(|notes| notes.lines())
            .filter(|line| !line.trim().is_empty())
    }
}

/// The fields collected by the "Add Customer" form.
///
/// Converted into a [`Customer`] by [`NewCustomer::into_customer`], which is
/// where the name and phone are validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub division: String,
    pub district: String,
    pub address: String,
    pub notes: Option<String>,
}

impl NewCustomer {
    /// Builds an active customer with no orders yet.
    ///
    /// The name is trimmed and the phone number is stored without spaces or
    /// dashes. Blank optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidCustomerName`] for a blank name and
    /// [`ProtocolError::InvalidPhone`] for a malformed phone number.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::customer::NewCustomer;
    ///
    /// let draft = NewCustomer {
    ///     name: " Rina Das ".into(),
    ///     phone: "+880 1711-222333".into(),
    ///     ..NewCustomer::default()
    /// };
    /// let customer = draft.into_customer("CUS-009").unwrap();
    /// assert_eq!(customer.name, "Rina Das");
    /// assert_eq!(customer.phone, "+8801711222333");
    /// ```
    pub fn into_customer(self, id: impl Into<CustomerId>) -> Result<Customer> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProtocolError::InvalidCustomerName);
        }
        let phone = normalize_phone(&self.phone)?;
        let optional = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Ok(Customer {
            id: id.into(),
            name: name.to_string(),
            phone,
            email: optional(self.email),
            address: self.address.trim().to_string(),
            district: self.district,
            division: self.division,
            notes: optional(self.notes),
            tags: Vec::new(),
            total_orders: 0,
            repeat_orders: 0,
            total_spent: 0,
            last_order_date: None,
            status: CustomerStatus::Active,
        })
    }
}

/// Strips spaces and dashes and checks for an optional `+` followed by 10 to
/// 15 digits.
fn normalize_phone(raw: &str) -> Result<String> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    let valid = (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
    if valid {
        Ok(compact)
    } else {
        Err(ProtocolError::InvalidPhone(raw.trim().to_string()))
    }
}

/// Derived figures shown on the customer overview tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInsights {
    pub last_order_amount: u64,
    pub avg_order_value: u64,
    pub order_frequency: String,
    pub return_rate: String,
    pub cancel_rate: String,
}

/// One line of the customer's order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOrder {
    pub id: String,
    pub date: NaiveDate,
    pub total: u64,
    pub status: OrderStatus,
}

/// A payment received from the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: u64,
    /// bKash, Card, COD, ...
    pub method: String,
    /// Gateway transaction reference; cash on delivery has none.
    pub reference: Option<String>,
}

/// A returned order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    pub order_id: String,
    pub reason: String,
    pub amount: u64,
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub label: String,
    pub address: String,
    pub is_default: bool,
}

/// An entry on the customer's activity timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: NaiveDateTime,
    pub action: String,
    pub details: String,
}

/// Everything the details screen shows about a customer besides the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerHistory {
    pub customer_id: CustomerId,
    pub insights: CustomerInsights,
    pub orders: Vec<CustomerOrder>,
    pub payments: Vec<Payment>,
    pub returns: Vec<Return>,
    pub addresses: Vec<Address>,
    pub activities: Vec<ActivityEntry>,
}

impl CustomerHistory {
    /// Returns the address marked as default, if any.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(repeat_orders: u32) -> Customer {
        Customer {
            id: "CUS-100".into(),
            name: "Test".into(),
            phone: "+880".into(),
            email: None,
            address: String::new(),
            district: "Dhaka".into(),
            division: "Dhaka".into(),
            notes: None,
            tags: Vec::new(),
            total_orders: repeat_orders + 1,
            repeat_orders,
            total_spent: 0,
            last_order_date: None,
            status: CustomerStatus::Active,
        }
    }

    #[test]
    fn order_type_depends_on_repeat_orders() {
        assert_eq!(customer(0).order_type(), OrderType::New);
        assert_eq!(customer(3).order_type(), OrderType::Repeat);
    }

    fn draft(name: &str, phone: &str) -> NewCustomer {
        NewCustomer {
            name: name.into(),
            phone: phone.into(),
            division: "Dhaka".into(),
            district: "Gazipur".into(),
            ..NewCustomer::default()
        }
    }

    #[test]
    fn new_customer_starts_without_orders() {
        let customer = NewCustomer {
            email: Some("  ".into()),
            notes: Some("Prefers bKash".into()),
            ..draft("Rina Das", "01711-222333")
        }
        .into_customer("CUS-009")
        .unwrap();

        assert_eq!(customer.id, "CUS-009");
        assert_eq!(customer.phone, "01711222333");
        assert_eq!(customer.email, None);
        assert_eq!(customer.notes.as_deref(), Some("Prefers bKash"));
        assert_eq!(customer.total_orders, 0);
        assert_eq!(customer.order_type(), OrderType::New);
        assert_eq!(customer.status, CustomerStatus::Active);
    }

    #[test]
    fn new_customer_requires_a_name() {
        let err = draft("   ", "+8801711222333").into_customer("CUS-009").unwrap_err();
        assert_eq!(err, ProtocolError::InvalidCustomerName);
    }

    #[test]
    fn new_customer_requires_a_phone_number() {
        for phone in ["", "12345", "+880 17ab 222333", "+8801711222333444555"] {
            let err = draft("Rina Das", phone).into_customer("CUS-009").unwrap_err();
            assert!(matches!(err, ProtocolError::InvalidPhone(_)), "{phone:?}");
        }
    }

    #[test]
    fn notes_append_as_lines() {
        let mut customer = customer(0);
        assert_eq!(customer.add_note("  "), Err(ProtocolError::EmptyNote));
        assert_eq!(customer.notes, None);

        customer.add_note("Call before delivery").unwrap();
        customer.add_note(" Gate code 4411 ").unwrap();
        assert_eq!(
            customer.note_lines().collect::<Vec<_>>(),
            ["Call before delivery", "Gate code 4411"]
        );
    }

    #[test]
    fn status_parses_lowercase() {
        assert_eq!("inactive".parse::<CustomerStatus>(), Ok(CustomerStatus::Inactive));
        assert_eq!("repeat".parse::<OrderType>(), Ok(OrderType::Repeat));
    }
}
