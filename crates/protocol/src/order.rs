//! Sales orders.
//!
//! Orders arrive from the storefront or WooCommerce, carry a snapshot of the
//! customer as they were at checkout, and move through a nine-step
//! fulfilment [`OrderStatus`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::variant::{Variant, impl_display_and_from_str};

/// Identifier of an order.
pub type OrderId = String;

/// Fulfilment status of an order.
///
/// Any status may be replaced by any other; the order of [`Variant::ALL`] is
/// only the order of the orders page tabs.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{OrderStatus, Variant};
///
/// assert_eq!(OrderStatus::ALL.len(), 9);
/// assert_eq!(OrderStatus::OnHold.display_name(), "On Hold");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    OnHold,
    Approved,
    Processing,
    ReadyToShip,
    InTransit,
    Delivered,
    Flagged,
    Cancelled,
}

impl Variant for OrderStatus {
    const KIND: &'static str = "order status";
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::OnHold,
        Self::Approved,
        Self::Processing,
        Self::ReadyToShip,
        Self::InTransit,
        Self::Delivered,
        Self::Flagged,
        Self::Cancelled,
    ];

    fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::OnHold => "On Hold",
            Self::Approved => "Approved",
            Self::Processing => "Processing",
            Self::ReadyToShip => "Ready To Ship",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Flagged => "Flagged",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Sales channel an order came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSource {
    Website,
    WooCommerce,
}

impl Variant for OrderSource {
    const KIND: &'static str = "order source";
    const ALL: &'static [Self] = &[Self::Website, Self::WooCommerce];

    fn display_name(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::WooCommerce => "WooCommerce",
        }
    }
}

/// Delivery speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    #[default]
    Regular,
    Express,
}

impl Variant for DeliveryType {
    const KIND: &'static str = "delivery type";
    const ALL: &'static [Self] = &[Self::Regular, Self::Express];

    fn display_name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Express => "Express",
        }
    }
}

impl_display_and_from_str!(OrderStatus, OrderSource, DeliveryType);

/// The customer as recorded on the order at checkout time.
///
/// Not linked to [`crate::Customer`]; the two can disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// First order from this phone number.
    pub is_new: bool,
}

/// Money owed and received for an order, in whole taka.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub sales_amount: u64,
    pub paid_amount: u64,
    pub due_amount: u64,
}

/// Courier handling the delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPartner {
    pub name: String,
    /// Status reported by the courier, which is not the order status.
    pub status: Option<String>,
    pub tracking_id: Option<String>,
}

/// A sales order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Internal identifier.
    pub id: OrderId,
    /// Invoice number shown to staff and customers, e.g. `FX-0005`.
    pub invoice_no: String,
    pub source: OrderSource,
    pub created_at: NaiveDateTime,
    pub shipping_date: NaiveDateTime,
    /// When the current status was set, if tracked.
    pub status_date: Option<NaiveDateTime>,
    /// When someone should check on the order again.
    pub follow_up_date: Option<NaiveDateTime>,
    pub customer: CustomerSnapshot,
    pub pickup_address: String,
    pub payment: PaymentSummary,
    pub status: OrderStatus,
    pub delivery_partner: Option<DeliveryPartner>,
    pub delivery_fee: u64,
    pub delivery_type: DeliveryType,
    /// Only set on cancelled orders.
    pub cancel_reason: Option<String>,
    pub internal_notes: Option<String>,
}

impl Order {
    /// Returns `true` if the order has an outstanding balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Catalog;
    ///
    /// let catalog = Catalog::sample();
    /// assert!(catalog.orders.iter().all(|o| o.has_due()));
    /// ```
    #[must_use]
    pub fn has_due(&self) -> bool {
        self.payment.due_amount > 0
    }
}
