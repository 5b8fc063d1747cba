//! Status transitions.
//!
//! A transition overwrites one entity's status and nothing else. There is no
//! state machine: any status may follow any other, including itself.

use tracing::debug;

use crate::error::{ProtocolError, Result};
use crate::order::{Order, OrderStatus};
use crate::task::{Task, TaskStatus};
use crate::variant::Variant;

/// An entity with an id and a replaceable status.
pub trait HasStatus {
    /// The status enumeration.
    type Status: Variant + std::fmt::Debug;

    /// Entity kind used in not-found errors.
    const KIND: &'static str;

    /// The entity's identifier.
    fn id(&self) -> &str;

    /// The current status.
    fn status(&self) -> Self::Status;

    /// Overwrites the status.
    fn set_status(&mut self, status: Self::Status);
}

impl HasStatus for Task {
    type Status = TaskStatus;
    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

impl HasStatus for Order {
    type Status = OrderStatus;
    const KIND: &'static str = "order";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

/// Sets the status of the entity with `id` to `to` and returns the status it
/// had before.
///
/// Every other field of that entity, and every other entity, is left as is.
///
/// # Errors
///
/// Returns [`ProtocolError::EntityNotFound`] if no entity has `id`; nothing is
/// modified in that case.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{Catalog, TaskStatus, transition::transition};
///
/// let mut catalog = Catalog::sample();
/// let previous = transition(&mut catalog.tasks, "1", TaskStatus::Completed).unwrap();
/// assert_eq!(previous, TaskStatus::ToDo);
/// assert!(transition(&mut catalog.tasks, "99", TaskStatus::Review).is_err());
/// ```
pub fn transition<T: HasStatus>(items: &mut [T], id: &str, to: T::Status) -> Result<T::Status> {
    let item = items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| ProtocolError::not_found(T::KIND, id))?;
    let previous = item.status();
    item.set_status(to);
    debug!(
        kind = T::KIND,
        id,
        from = previous.display_name(),
        to = to.display_name(),
        "status changed"
    );
    Ok(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn transition_only_touches_the_status_field() {
        let mut catalog = Catalog::sample();
        let before = catalog.tasks.clone();

        let previous =
            transition(&mut catalog.tasks, "4", TaskStatus::Completed).expect("task 4 exists");

        assert_eq!(previous, TaskStatus::InProgress);
        for (old, new) in before.iter().zip(&catalog.tasks) {
            if old.id == "4" {
                let mut expected = old.clone();
                expected.status = TaskStatus::Completed;
                assert_eq!(new, &expected);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut catalog = Catalog::sample();
        let before = catalog.orders.clone();

        let err = transition(&mut catalog.orders, "FX-9999", OrderStatus::Delivered)
            .expect_err("no such order");

        assert_eq!(err, ProtocolError::not_found("order", "FX-9999"));
        assert_eq!(catalog.orders, before);
    }

    #[test]
    fn any_status_may_follow_any_other() {
        let mut catalog = Catalog::sample();
        for from in TaskStatus::ALL {
            for to in TaskStatus::ALL {
                transition(&mut catalog.tasks, "6", *from).expect("set from");
                let previous = transition(&mut catalog.tasks, "6", *to).expect("set to");
                assert_eq!(previous, *from);
            }
        }
    }
}
