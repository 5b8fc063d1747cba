//! Filter state and projection.
//!
//! A filter is a set of predicates over one entity type. [`project`] keeps the
//! entities for which every active predicate holds, in catalog order. Enum
//! selectors use [`Choice`], where [`Choice::All`] disables the predicate, and
//! text search uses [`TextQuery`], where an empty query matches everything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::customer::{Customer, CustomerStatus, OrderType};
use crate::order::{Order, OrderStatus};
use crate::task::{Task, TaskCategory, TaskPriority};
use crate::variant::Variant;

/// A predicate over entities of type `T`.
pub trait Filter<T> {
    /// Returns `true` if `item` passes every active predicate.
    fn matches(&self, item: &T) -> bool;

    /// Returns `true` if no predicate is active.
    fn is_empty(&self) -> bool;
}

/// Returns the items that pass `filter`, preserving their order.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{Catalog, TaskFilter, filter::project};
///
/// let catalog = Catalog::sample();
/// let filter = TaskFilter::default().with_search("order");
/// let ids: Vec<_> = project(&catalog.tasks, &filter).iter().map(|t| t.id.as_str()).collect();
/// assert_eq!(ids, ["2", "7"]);
/// ```
pub fn project<'a, T, F>(items: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: Filter<T> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// An enum selector with an "all" sentinel.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{Choice, TaskPriority};
///
/// assert!(Choice::<TaskPriority>::All.admits(&TaskPriority::Low));
/// assert!(!Choice::Only(TaskPriority::High).admits(&TaskPriority::Low));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    /// Predicate disabled.
    #[default]
    All,
    /// Only values equal to this one.
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Returns `true` if `value` passes this selector.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Returns `true` for [`Choice::All`].
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: Clone + PartialEq> Choice<T> {
    /// Advances to the next option: `All`, then each of `options` in
    /// order, then back to `All`.
    ///
    /// A current value that is not among `options` also restarts at `All`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Choice;
    ///
    /// let options = ["Dhaka", "Sylhet"];
    /// let mut choice = Choice::All;
    /// choice = choice.cycle(&options);
    /// assert_eq!(choice, Choice::Only("Dhaka"));
    /// choice = choice.cycle(&options).cycle(&options);
    /// assert_eq!(choice, Choice::All);
    /// ```
    #[must_use]
    pub fn cycle(&self, options: &[T]) -> Self {
        let next_index = match self {
            Self::All => 0,
            Self::Only(current) => match options.iter().position(|o| o == current) {
                Some(idx) => idx + 1,
                None => options.len(),
            },
        };
        options
            .get(next_index)
            .cloned()
            .map_or(Self::All, Self::Only)
    }
}

impl<T: Variant> Choice<T> {
    /// Cycles through every variant of `T`.
    #[must_use]
    pub fn cycle_variants(&self) -> Self {
        self.cycle(T::ALL)
    }

    /// Display label; `all_label` is shown for [`Choice::All`].
    #[must_use]
    pub fn label(&self, all_label: &'static str) -> &'static str {
        match self {
            Self::All => all_label,
            Self::Only(v) => v.display_name(),
        }
    }
}

/// Case-insensitive substring search.
///
/// # Examples
///
/// ```
/// use nexus_protocol::TextQuery;
///
/// let query = TextQuery::new("ORDER");
/// assert!(query.matches("Process pending order FX-0003"));
/// assert!(TextQuery::default().matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextQuery(String);

impl TextQuery {
    /// Creates a query from raw input.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw query text as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the query is empty and matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a typed character.
    pub fn push(&mut self, ch: char) {
        self.0.push(ch);
    }

    /// Removes the last character, if any.
    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// Empties the query.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns `true` if `haystack` contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for TextQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task page filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Matched against the title.
    pub search: TextQuery,
    pub priority: Choice<TaskPriority>,
    pub category: Choice<TaskCategory>,
}

impl TaskFilter {
    /// Returns this filter with the search text replaced.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = TextQuery::new(text);
        self
    }

    /// Returns this filter restricted to one category.
    #[must_use]
    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Choice::Only(category);
        self
    }

    /// Returns this filter restricted to one priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Choice::Only(priority);
        self
    }
}

impl Filter<Task> for TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        self.search.matches(&task.title)
            && self.priority.admits(&task.priority)
            && self.category.admits(&task.category)
    }

    fn is_empty(&self) -> bool {
        self.search.is_empty() && self.priority.is_all() && self.category.is_all()
    }
}

/// Orders page filter: the active status tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    pub status: Choice<OrderStatus>,
}

impl OrderFilter {
    /// Filter for one status tab.
    #[must_use]
    pub const fn status(status: OrderStatus) -> Self {
        Self {
            status: Choice::Only(status),
        }
    }
}

impl Filter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        self.status.admits(&order.status)
    }

    fn is_empty(&self) -> bool {
        self.status.is_all()
    }
}

/// Customer list filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerFilter {
    /// Matched against name and phone.
    pub search: TextQuery,
    pub division: Choice<String>,
    pub district: Choice<String>,
    pub order_type: Choice<OrderType>,
    pub status: Choice<CustomerStatus>,
}

impl Filter<Customer> for CustomerFilter {
    fn matches(&self, customer: &Customer) -> bool {
        (self.search.matches(&customer.name) || self.search.matches(&customer.phone))
            && self.division.admits(&customer.division)
            && self.district.admits(&customer.district)
            && self.order_type.admits(&customer.order_type())
            && self.status.admits(&customer.status)
    }

    fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.division.is_all()
            && self.district.is_all()
            && self.order_type.is_all()
            && self.status.is_all()
    }
}

/// Which selector a "cycle filter" key press advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Priority,
    Category,
    Division,
    District,
    OrderType,
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use insta::assert_snapshot;

    fn task_ids(filter: &TaskFilter) -> String {
        let catalog = Catalog::sample();
        project(&catalog.tasks, filter)
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn empty_task_filter_keeps_everything_in_order() {
        let filter = TaskFilter::default();
        assert!(filter.is_empty());
        assert_snapshot!(task_ids(&filter), @"1, 2, 3, 4, 5, 6, 7, 8");
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        assert_snapshot!(task_ids(&TaskFilter::default().with_search("order")), @"2, 7");
        assert_snapshot!(task_ids(&TaskFilter::default().with_search("ORDER")), @"2, 7");
        assert_snapshot!(task_ids(&TaskFilter::default().with_search("customer")), @"1, 5, 8");
    }

    #[test]
    fn category_filter_uses_exact_equality() {
        let filter = TaskFilter::default().with_category(TaskCategory::Order);
        assert_snapshot!(task_ids(&filter), @"2, 4");
    }

    #[test]
    fn predicates_are_combined() {
        let filter = TaskFilter::default()
            .with_search("customer")
            .with_priority(TaskPriority::High);
        assert_snapshot!(task_ids(&filter), @"1, 8");
    }

    #[test]
    fn cancelled_tab_yields_one_order() {
        let catalog = Catalog::sample();
        let orders = project(&catalog.orders, &OrderFilter::status(OrderStatus::Cancelled));
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].invoice_no, "FX-0005");
    }

    #[test]
    fn customer_search_matches_name_or_phone() {
        let catalog = Catalog::sample();
        let mut filter = CustomerFilter {
            search: TextQuery::new("rahman"),
            ..CustomerFilter::default()
        };
        let ids: Vec<_> = project(&catalog.customers, &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["CUS-001"]);

        filter.search = TextQuery::new("01823");
        let ids: Vec<_> = project(&catalog.customers, &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["CUS-002"]);
    }

    #[test]
    fn customer_division_and_type_filters() {
        let catalog = Catalog::sample();
        let filter = CustomerFilter {
            division: Choice::Only("Chittagong".to_string()),
            ..CustomerFilter::default()
        };
        let ids: Vec<_> = project(&catalog.customers, &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["CUS-002", "CUS-008"]);

        let filter = CustomerFilter {
            order_type: Choice::Only(OrderType::New),
            ..CustomerFilter::default()
        };
        let ids: Vec<_> = project(&catalog.customers, &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["CUS-005", "CUS-008"]);
    }

    #[test]
    fn cycle_restarts_from_unknown_value() {
        let choice = Choice::Only("Mars".to_string());
        assert_eq!(choice.cycle(&["Dhaka".to_string()]), Choice::All);
    }

    #[test]
    fn cycle_variants_visits_all_then_returns() {
        let mut choice = Choice::<TaskCategory>::All;
        let mut seen = Vec::new();
        for _ in 0..TaskCategory::ALL.len() {
            choice = choice.cycle_variants();
            seen.push(choice.label("All"));
        }
        assert_eq!(
            seen,
            ["Order", "Customer", "Inventory", "Finance", "General"]
        );
        assert_eq!(choice.cycle_variants(), Choice::All);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    proptest! {
        /// Projection never invents or reorders tasks.
        #[test]
        fn projection_is_an_ordered_subset(query in "[a-zA-Z ]{0,6}") {
            let catalog = Catalog::sample();
            let filter = TaskFilter::default().with_search(query.clone());
            let visible = project(&catalog.tasks, &filter);

            let positions = visible
                .iter()
                .map(|t| catalog.tasks.iter().position(|c| c.id == t.id).expect("from catalog"));
            let mut last = None;
            for pos in positions {
                prop_assert!(last.is_none_or(|l| l < pos));
                last = Some(pos);
            }
            for task in &catalog.tasks {
                let expected = task.title.to_lowercase().contains(&query.to_lowercase());
                prop_assert_eq!(visible.iter().any(|t| t.id == task.id), expected);
            }
        }
    }
}
