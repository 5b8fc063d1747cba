//! The in-memory entity catalog.
//!
//! [`Catalog`] owns every task, order, customer, and customer history. It is
//! built once at startup (see [`Catalog::sample`]) and edited in place; nothing
//! is written back anywhere.
//!
//! # Examples
//!
//! ```
//! use nexus_protocol::Catalog;
//!
//! let catalog = Catalog::sample();
//! assert_eq!(catalog.tasks.len(), 8);
//! assert_eq!(catalog.orders.len(), 4);
//! assert_eq!(catalog.customers.len(), 8);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::customer::{
    ActivityEntry, Address, Customer, CustomerHistory, CustomerInsights, CustomerOrder,
    CustomerStatus, NewCustomer, Payment, Return,
};
use crate::error::{ProtocolError, Result};
use crate::filter::{Choice, OrderFilter, project};
use crate::order::{
    CustomerSnapshot, DeliveryPartner, DeliveryType, Order, OrderSource, OrderStatus,
    PaymentSummary,
};
use crate::task::{NewTask, Task, TaskCategory, TaskPriority, TaskStatus};
use crate::transition::transition;
use crate::variant::Variant;

/// All entities known to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// The day the data was captured. Due-date statistics are computed
    /// relative to this day.
    pub as_of: NaiveDate,
    pub tasks: Vec<Task>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub histories: Vec<CustomerHistory>,
}

impl Catalog {
    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Looks up an order by id.
    #[must_use]
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Looks up a customer by id.
    #[must_use]
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Returns the history recorded for a customer, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Catalog;
    ///
    /// let catalog = Catalog::sample();
    /// assert!(catalog.history("CUS-001").is_some());
    /// assert!(catalog.history("CUS-002").is_none());
    /// ```
    #[must_use]
    pub fn history(&self, customer_id: &str) -> Option<&CustomerHistory> {
        self.histories.iter().find(|h| h.customer_id == customer_id)
    }

    /// The id the next created task will get: one past the largest numeric
    /// task id.
    #[must_use]
    pub fn next_task_id(&self) -> String {
        let max = self
            .tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Validates `draft` and appends it as a new `To Do` task created on
    /// [`Catalog::as_of`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProtocolError::InvalidTaskTitle`] if the title is blank; the
    /// catalog is unchanged in that case.
    pub fn add_task(&mut self, draft: NewTask) -> Result<&Task> {
        let task = draft.into_task(self.next_task_id(), self.as_of)?;
        info!(id = %task.id, title = %task.title, "task created");
        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// The id the next created customer will get, e.g. `CUS-009`: one past
    /// the largest numeric suffix.
    #[must_use]
    pub fn next_customer_id(&self) -> String {
        let max = self
            .customers
            .iter()
            .filter_map(|c| c.id.strip_prefix("CUS-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("CUS-{:03}", max + 1)
    }

    /// Validates `draft` and appends it as a new active customer.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidCustomerName`] or
    /// [`ProtocolError::InvalidPhone`]; the catalog is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::{Catalog, NewCustomer};
    ///
    /// let mut catalog = Catalog::sample();
    /// let draft = NewCustomer {
    ///     name: "Rina Das".into(),
    ///     phone: "+8801711222333".into(),
    ///     ..NewCustomer::default()
    /// };
    /// assert_eq!(catalog.add_customer(draft).unwrap().id, "CUS-009");
    /// ```
    pub fn add_customer(&mut self, draft: NewCustomer) -> Result<&Customer> {
        let customer = draft.into_customer(self.next_customer_id())?;
        info!(id = %customer.id, name = %customer.name, "customer created");
        let index = self.customers.len();
        self.customers.push(customer);
        Ok(&self.customers[index])
    }

    /// Appends a line to a customer's internal notes.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EntityNotFound`] for an unknown id and
    /// [`ProtocolError::EmptyNote`] for a blank note.
    pub fn add_customer_note(&mut self, id: &str, note: &str) -> Result<&Customer> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ProtocolError::not_found("customer", id))?;
        customer.add_note(note)?;
        info!(id, "customer note added");
        Ok(&*customer)
    }

    /// Moves a task to another board column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProtocolError::EntityNotFound`] for an unknown id.
    pub fn set_task_status(&mut self, id: &str, status: TaskStatus) -> Result<TaskStatus> {
        transition(&mut self.tasks, id, status)
    }

    /// Changes an order's fulfilment status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProtocolError::EntityNotFound`] for an unknown id.
    pub fn set_order_status(&mut self, id: &str, status: OrderStatus) -> Result<OrderStatus> {
        transition(&mut self.orders, id, status)
    }

    /// Order counts per status tab, starting with "All Orders".
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::{Catalog, Choice, OrderStatus};
    ///
    /// let counts = Catalog::sample().order_tab_counts();
    /// assert_eq!(counts[0], (Choice::All, 4));
    /// assert_eq!(counts.len(), 10);
    /// ```
    #[must_use]
    pub fn order_tab_counts(&self) -> Vec<(Choice<OrderStatus>, usize)> {
        std::iter::once(Choice::All)
            .chain(OrderStatus::ALL.iter().copied().map(Choice::Only))
            .map(|status| {
                let count = project(&self.orders, &OrderFilter { status: status.clone() }).len();
                (status, count)
            })
            .collect()
    }

    /// Distinct customer divisions, in first-seen order.
    #[must_use]
    pub fn divisions(&self) -> Vec<String> {
        distinct(self.customers.iter().map(|c| c.division.as_str()))
    }

    /// Distinct customer districts, in first-seen order.
    #[must_use]
    pub fn districts(&self) -> Vec<String> {
        distinct(self.customers.iter().map(|c| c.district.as_str()))
    }

    /// Builds the sample data set captured on January 24, 2026.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            as_of: date(2026, 1, 24),
            tasks: sample_tasks(),
            orders: sample_orders(),
            customers: sample_customers(),
            histories: vec![sample_history()],
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Calendar date from literal parts. An invalid literal falls back to the
/// epoch, which the sample date tests reject.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

/// A builder for sample tasks.
struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    fn new(id: &str, title: &str, description: &str) -> Self {
        let mut task = Task::new(id, title, date(2026, 1, 24));
        task.description = Some(description.to_string());
        Self { task }
    }

    fn priority(mut self, priority: TaskPriority) -> Self {
        self.task.priority = priority;
        self
    }

    fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    fn category(mut self, category: TaskCategory) -> Self {
        self.task.category = category;
        self
    }

    fn assignee(mut self, assignee: &str) -> Self {
        self.task.assignee = assignee.to_string();
        self
    }

    /// Sets the due and creation days (both in January 2026).
    fn dates(mut self, due: u32, created: u32) -> Self {
        self.task.due_date = date(2026, 1, due);
        self.task.created_at = date(2026, 1, created);
        self
    }

    fn related(mut self, id: &str) -> Self {
        self.task.related_id = Some(id.to_string());
        self
    }

    fn tags(mut self, tags: &[&str]) -> Self {
        self.task.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    fn build(self) -> Task {
        self.task
    }
}

fn sample_tasks() -> Vec<Task> {
    use TaskCategory as C;
    use TaskPriority as P;
    use TaskStatus as S;

    vec![
        TaskBuilder::new(
            "1",
            "Follow up with customer NAHIDUL",
            "Customer requested callback regarding order FX-0005",
        )
        .priority(P::High)
        .status(S::ToDo)
        .category(C::Customer)
        .assignee("John Doe")
        .dates(25, 24)
        .related("FX-0005")
        .tags(&["callback", "urgent"])
        .build(),
        TaskBuilder::new(
            "2",
            "Process pending order FX-0003",
            "Verify payment and prepare for shipping",
        )
        .priority(P::Medium)
        .status(S::InProgress)
        .category(C::Order)
        .assignee("Jane Smith")
        .dates(24, 23)
        .related("FX-0003")
        .build(),
        TaskBuilder::new(
            "3",
            "Review inventory levels",
            "Check stock for low inventory items and create reorder list",
        )
        .priority(P::Low)
        .status(S::ToDo)
        .category(C::Inventory)
        .assignee("Mike Johnson")
        .dates(26, 22)
        .tags(&["weekly"])
        .build(),
        TaskBuilder::new(
            "4",
            "Resolve delivery issue for FX-0004",
            "Contact Steadfast regarding delayed delivery",
        )
        .priority(P::Urgent)
        .status(S::InProgress)
        .category(C::Order)
        .assignee("John Doe")
        .dates(24, 24)
        .related("FX-0004")
        .tags(&["delivery", "escalation"])
        .build(),
        TaskBuilder::new(
            "5",
            "Update customer payment records",
            "Reconcile payments received today",
        )
        .priority(P::Medium)
        .status(S::Review)
        .category(C::Finance)
        .assignee("Sarah Wilson")
        .dates(24, 24)
        .build(),
        TaskBuilder::new(
            "6",
            "Prepare monthly sales report",
            "Compile sales data for January 2026",
        )
        .priority(P::Low)
        .status(S::Completed)
        .category(C::General)
        .assignee("Jane Smith")
        .dates(31, 20)
        .tags(&["report", "monthly"])
        .build(),
        TaskBuilder::new(
            "7",
            "Contact supplier for bulk order",
            "Request quote for 500 units of product SKU-001",
        )
        .priority(P::Medium)
        .status(S::ToDo)
        .category(C::Inventory)
        .assignee("Mike Johnson")
        .dates(27, 24)
        .build(),
        TaskBuilder::new(
            "8",
            "Verify new customer documents",
            "Review KYC documents for 3 new business customers",
        )
        .priority(P::High)
        .status(S::Review)
        .category(C::Customer)
        .assignee("Sarah Wilson")
        .dates(25, 23)
        .tags(&["compliance"])
        .build(),
    ]
}

const SAMPLE_ADDRESS: &str = "DHAKA DHANMONDI, NEW 8/A DHAKA, BANGLADESH";

fn snapshot(name: &str, phone: &str) -> CustomerSnapshot {
    CustomerSnapshot {
        name: name.to_string(),
        phone: phone.to_string(),
        address: SAMPLE_ADDRESS.to_string(),
        is_new: true,
    }
}

fn steadfast(tracking_id: Option<&str>) -> DeliveryPartner {
    DeliveryPartner {
        name: "Steadfast".to_string(),
        status: tracking_id.map(|_| "In Review".to_string()),
        tracking_id: tracking_id.map(ToString::to_string),
    }
}

fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".into(),
            invoice_no: "FX-0005".into(),
            source: OrderSource::Website,
            created_at: at(2026, 1, 24, 16, 2),
            shipping_date: at(2026, 1, 24, 16, 2),
            status_date: Some(at(2026, 1, 24, 16, 2)),
            follow_up_date: None,
            customer: snapshot("NAHIDUL", "+8801328190017"),
            pickup_address: "Warehouse".into(),
            payment: PaymentSummary {
                sales_amount: 500,
                paid_amount: 0,
                due_amount: 580,
            },
            status: OrderStatus::Cancelled,
            delivery_partner: Some(steadfast(None)),
            delivery_fee: 80,
            delivery_type: DeliveryType::Regular,
            cancel_reason: Some("Fake Order".into()),
            internal_notes: None,
        },
        Order {
            id: "2".into(),
            invoice_no: "FX-0004".into(),
            source: OrderSource::Website,
            created_at: at(2026, 1, 24, 10, 21),
            shipping_date: at(2026, 1, 24, 10, 38),
            status_date: Some(at(2026, 1, 24, 10, 38)),
            follow_up_date: None,
            customer: snapshot("JABED", "+8801328190016"),
            pickup_address: "Warehouse".into(),
            payment: PaymentSummary {
                sales_amount: 500,
                paid_amount: 0,
                due_amount: 580,
            },
            status: OrderStatus::InTransit,
            delivery_partner: Some(steadfast(Some("211897799"))),
            delivery_fee: 80,
            delivery_type: DeliveryType::Regular,
            cancel_reason: None,
            internal_notes: None,
        },
        Order {
            id: "3".into(),
            invoice_no: "FX-0003".into(),
            source: OrderSource::WooCommerce,
            created_at: at(2026, 1, 16, 21, 36),
            shipping_date: at(2026, 1, 16, 21, 35),
            status_date: None,
            follow_up_date: None,
            customer: snapshot("JABED", "+8801328190016"),
            pickup_address: "Warehouse".into(),
            payment: PaymentSummary {
                sales_amount: 500,
                paid_amount: 0,
                due_amount: 500,
            },
            status: OrderStatus::Pending,
            delivery_partner: None,
            delivery_fee: 0,
            delivery_type: DeliveryType::Regular,
            cancel_reason: None,
            internal_notes: None,
        },
        Order {
            id: "4".into(),
            invoice_no: "FX-0002".into(),
            source: OrderSource::WooCommerce,
            created_at: at(2026, 1, 15, 16, 41),
            shipping_date: at(2026, 1, 15, 16, 43),
            status_date: Some(at(2026, 1, 24, 10, 20)),
            follow_up_date: Some(at(2026, 1, 24, 10, 23)),
            customer: snapshot("NAHIDUL", "+8801328190017"),
            pickup_address: "Warehouse".into(),
            payment: PaymentSummary {
                sales_amount: 500,
                paid_amount: 0,
                due_amount: 580,
            },
            status: OrderStatus::OnHold,
            delivery_partner: Some(steadfast(Some("209081685"))),
            delivery_fee: 80,
            delivery_type: DeliveryType::Regular,
            cancel_reason: None,
            internal_notes: None,
        },
    ]
}

/// `(id, name, phone, district, division, total, repeat, spent, last order day in Jan 2026, active)`
type CustomerRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    u32,
    u64,
    Option<u32>,
    bool,
);

const CUSTOMER_ROWS: [CustomerRow; 8] = [
    ("CUS-001", "Ahmed Rahman", "+8801712345678", "Dhaka", "Dhaka", 15, 12, 45_500, Some(28), true),
    ("CUS-002", "Fatima Begum", "+8801823456789", "Chittagong", "Chittagong", 8, 5, 22_800, Some(25), true),
    ("CUS-003", "Mohammad Hasan", "+8801934567890", "Sylhet", "Sylhet", 3, 1, 8_500, Some(20), true),
    ("CUS-004", "Nusrat Jahan", "+8801645678901", "Rajshahi", "Rajshahi", 22, 19, 67_200, Some(30), true),
    ("CUS-005", "Kamal Uddin", "+8801756789012", "Khulna", "Khulna", 1, 0, 2_500, Some(10), false),
    ("CUS-006", "Rashida Akter", "+8801867890123", "Barisal", "Barisal", 11, 8, 34_500, Some(27), true),
    ("CUS-007", "Jamal Khan", "+8801978901234", "Rangpur", "Rangpur", 6, 4, 18_900, Some(22), true),
    ("CUS-008", "Salma Khatun", "+8801689012345", "Comilla", "Chittagong", 0, 0, 0, None, false),
];

fn sample_customers() -> Vec<Customer> {
    CUSTOMER_ROWS
        .iter()
        .map(
            |&(id, name, phone, district, division, total, repeat, spent, last, active)| Customer {
                id: id.to_string(),
                name: name.to_string(),
                phone: phone.to_string(),
                email: None,
                address: String::new(),
                district: district.to_string(),
                division: division.to_string(),
                notes: None,
                tags: Vec::new(),
                total_orders: total,
                repeat_orders: repeat,
                total_spent: spent,
                last_order_date: last.map(|day| date(2026, 1, day)),
                status: if active {
                    CustomerStatus::Active
                } else {
                    CustomerStatus::Inactive
                },
            },
        )
        .map(|mut customer| {
            if customer.id == "CUS-001" {
                customer.email = Some("ahmed.rahman@email.com".into());
                customer.address = "House 12, Road 5, Block C, Banani".into();
                customer.notes = Some("VIP customer, prefers morning delivery".into());
                customer.tags = vec!["Repeat".into(), "VIP".into()];
            }
            customer
        })
        .collect()
}

fn sample_history() -> CustomerHistory {
    let order = |id: &str, day: u32, total: u64, status: OrderStatus| CustomerOrder {
        id: id.to_string(),
        date: date(2026, 1, day),
        total,
        status,
    };
    let payment = |day: u32, amount: u64, method: &str, reference: Option<&str>| Payment {
        date: date(2026, 1, day),
        amount,
        method: method.to_string(),
        reference: reference.map(ToString::to_string),
    };
    let activity = |day: u32, hour: u32, minute: u32, action: &str, details: &str| ActivityEntry {
        at: at(2026, 1, day, hour, minute),
        action: action.to_string(),
        details: details.to_string(),
    };

    CustomerHistory {
        customer_id: "CUS-001".into(),
        insights: CustomerInsights {
            last_order_amount: 3_200,
            avg_order_value: 3_033,
            order_frequency: "2.5/month".into(),
            return_rate: "6.7%".into(),
            cancel_rate: "0%".into(),
        },
        orders: vec![
            order("ORD-1021", 28, 3_200, OrderStatus::Delivered),
            order("ORD-1018", 22, 2_800, OrderStatus::Delivered),
            order("ORD-1015", 15, 4_500, OrderStatus::Delivered),
            order("ORD-1010", 8, 2_100, OrderStatus::Cancelled),
            order("ORD-1005", 2, 3_800, OrderStatus::Delivered),
        ],
        payments: vec![
            payment(28, 3_200, "bKash", Some("TXN892834")),
            payment(22, 2_800, "Card", Some("PAY728394")),
            payment(15, 4_500, "COD", None),
            payment(2, 3_800, "bKash", Some("TXN782931")),
        ],
        returns: vec![Return {
            order_id: "ORD-1008".into(),
            reason: "Wrong size".into(),
            amount: 1_200,
        }],
        addresses: vec![
            Address {
                label: "Home (Default)".into(),
                address: "House 12, Road 5, Block C, Banani, Dhaka 1213".into(),
                is_default: true,
            },
            Address {
                label: "Office".into(),
                address: "Floor 8, Tower B, Gulshan Avenue, Dhaka 1212".into(),
                is_default: false,
            },
        ],
        activities: vec![
            activity(28, 10, 30, "Order delivered", "ORD-1021 delivered successfully"),
            activity(26, 14, 15, "Payment received", "৳3,200 via bKash"),
            activity(25, 9, 0, "Order placed", "ORD-1021 created"),
            activity(22, 11, 45, "Order delivered", "ORD-1018 delivered successfully"),
            activity(20, 15, 30, "Note added", "Marked as VIP customer"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CustomerFilter, TextQuery};

    #[test]
    fn sample_ids_are_unique() {
        let catalog = Catalog::sample();
        let mut invoices: Vec<_> = catalog.orders.iter().map(|o| &o.invoice_no).collect();
        invoices.sort();
        invoices.dedup();
        assert_eq!(invoices.len(), catalog.orders.len());

        let mut ids: Vec<_> = catalog.tasks.iter().map(|t| &t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn next_task_id_follows_the_largest_numeric_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.next_task_id(), "9");
    }

    #[test]
    fn add_task_appends_to_do_task() {
        let mut catalog = Catalog::sample();
        let draft = NewTask {
            title: "Call RedX about pickup".into(),
            category: TaskCategory::Order,
            ..NewTask::default()
        };
        let task = catalog.add_task(draft).expect("valid draft");
        assert_eq!(task.id, "9");
        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.created_at, date(2026, 1, 24));
        assert_eq!(catalog.tasks.len(), 9);
        assert_eq!(catalog.next_task_id(), "10");
    }

    #[test]
    fn add_task_with_blank_title_leaves_catalog_unchanged() {
        let mut catalog = Catalog::sample();
        let err = catalog.add_task(NewTask::default()).expect_err("blank title");
        assert_eq!(err, ProtocolError::InvalidTaskTitle);
        assert_eq!(catalog.tasks.len(), 8);
    }

    #[test]
    fn order_tab_counts_reflect_current_statuses() {
        let mut catalog = Catalog::sample();
        let count = |catalog: &Catalog, status: OrderStatus| {
            catalog
                .order_tab_counts()
                .into_iter()
                .find(|(tab, _)| *tab == Choice::Only(status))
                .map(|(_, n)| n)
        };
        assert_eq!(count(&catalog, OrderStatus::Cancelled), Some(1));
        assert_eq!(count(&catalog, OrderStatus::Delivered), Some(0));

        catalog
            .set_order_status("3", OrderStatus::Delivered)
            .expect("order 3 exists");
        assert_eq!(count(&catalog, OrderStatus::Pending), Some(0));
        assert_eq!(count(&catalog, OrderStatus::Delivered), Some(1));
    }

    #[test]
    fn history_is_keyed_by_customer() {
        let catalog = Catalog::sample();
        let history = catalog.history("CUS-001").expect("sample history");
        assert_eq!(history.orders.len(), 5);
        assert_eq!(history.payments[2].reference, None);
        assert_eq!(
            history.default_address().map(|a| a.label.as_str()),
            Some("Home (Default)")
        );
        assert!(catalog.history("CUS-404").is_none());
    }

    #[test]
    fn divisions_are_distinct_in_first_seen_order() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.divisions(),
            ["Dhaka", "Chittagong", "Sylhet", "Rajshahi", "Khulna", "Barisal", "Rangpur"]
        );
        assert_eq!(catalog.districts().len(), 8);
    }

    #[test]
    fn customer_totals_are_not_derived_from_orders() {
        // Stored counters and the history disagree in the sample data.
        let catalog = Catalog::sample();
        let ahmed = catalog.customer("CUS-001").expect("sample customer");
        let history = catalog.history("CUS-001").expect("sample history");
        assert_eq!(ahmed.total_orders, 15);
        assert_ne!(ahmed.total_orders as usize, history.orders.len());
    }

    #[test]
    fn sample_dates_fall_in_the_capture_window() {
        let catalog = Catalog::sample();
        let floor = date(2025, 1, 1);
        let mut days = vec![catalog.as_of];
        for task in &catalog.tasks {
            days.extend([task.due_date, task.created_at]);
        }
        for order in &catalog.orders {
            days.extend([order.created_at.date(), order.shipping_date.date()]);
            days.extend(order.status_date.map(|d| d.date()));
            days.extend(order.follow_up_date.map(|d| d.date()));
        }
        days.extend(catalog.customers.iter().filter_map(|c| c.last_order_date));
        for history in &catalog.histories {
            days.extend(history.orders.iter().map(|o| o.date));
            days.extend(history.payments.iter().map(|p| p.date));
            days.extend(history.activities.iter().map(|a| a.at.date()));
        }

        assert!(days.len() > 30);
        for day in days {
            assert!(day > floor, "sample date {day} predates 2025");
        }
    }

    #[test]
    fn next_customer_id_follows_the_largest_suffix() {
        let mut catalog = Catalog::sample();
        assert_eq!(catalog.next_customer_id(), "CUS-009");
        catalog.customers[2].id = "CUS-041".into();
        assert_eq!(catalog.next_customer_id(), "CUS-042");
    }

    #[test]
    fn added_customer_appears_in_the_list() {
        let mut catalog = Catalog::sample();
        let draft = NewCustomer {
            name: "Rina Das".into(),
            phone: "+880 1711-222333".into(),
            division: "Dhaka".into(),
            district: "Gazipur".into(),
            ..NewCustomer::default()
        };
        let id = catalog.add_customer(draft).expect("valid draft").id.clone();
        assert_eq!(id, "CUS-009");
        assert_eq!(catalog.customers.len(), 9);

        let filter = CustomerFilter {
            search: TextQuery::new("rina"),
            ..CustomerFilter::default()
        };
        let visible = project(&catalog.customers, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "CUS-009");
        assert_eq!(visible[0].phone, "+8801711222333");
    }

    #[test]
    fn add_customer_with_blank_name_leaves_catalog_unchanged() {
        let mut catalog = Catalog::sample();
        let draft = NewCustomer {
            phone: "+8801711222333".into(),
            ..NewCustomer::default()
        };
        let err = catalog.add_customer(draft).expect_err("blank name");
        assert_eq!(err, ProtocolError::InvalidCustomerName);
        assert_eq!(catalog.customers.len(), 8);
        assert_eq!(catalog.next_customer_id(), "CUS-009");
    }

    #[test]
    fn customer_notes_are_appended() {
        let mut catalog = Catalog::sample();
        let customer = catalog
            .add_customer_note("CUS-001", "Asked for invoice copies")
            .expect("known customer");
        assert_eq!(customer.note_lines().count(), 2);

        assert_eq!(
            catalog.add_customer_note("CUS-002", " ").unwrap_err(),
            ProtocolError::EmptyNote
        );
        assert!(matches!(
            catalog.add_customer_note("CUS-404", "hello"),
            Err(ProtocolError::EntityNotFound { .. })
        ));
    }
}
