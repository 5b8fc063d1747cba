//! Shared protocol types for the nexus application.
//!
//! This crate defines the entities the ERP console works with (tasks, orders,
//! customers), the in-memory [`Catalog`] that owns them, and the pure logic
//! the UI builds on: filtering, status transitions, multi-select, and
//! navigation routes.
//!
//! # Overview
//!
//! - [`task`], [`order`], [`customer`]: entity types
//! - [`catalog`]: the sample data set and lookups
//! - [`filter`]: filter state and [`filter::project`]
//! - [`transition`]: in-place status changes
//! - [`board`]: task board columns and statistics
//! - [`selection`]: multi-select sets
//! - [`route`]: sidebar routes
//! - [`dashboard`], [`account`]: reporting and settings reference data
//! - [`message`]: TUI event messages
//! - [`error`]: error types
//!
//! # Examples
//!
//! Filtering the task board and moving a task:
//!
//! ```
//! use nexus_protocol::{Catalog, TaskFilter, TaskStatus, board::group_by_status, filter::project};
//!
//! let mut catalog = Catalog::sample();
//! catalog.set_task_status("2", TaskStatus::Completed).unwrap();
//!
//! let filter = TaskFilter::default().with_search("order");
//! let visible = project(&catalog.tasks, &filter);
//! let columns = group_by_status(&visible);
//!
//! assert_eq!(columns[3].title(), "Completed (1)");
//! ```

pub mod account;
pub mod board;
pub mod catalog;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod format;
pub mod message;
pub mod order;
pub mod route;
pub mod selection;
pub mod task;
pub mod transition;
pub mod variant;

// Re-export primary types at crate root for convenience
pub use account::AccountSettings;
pub use board::{StatusColumn, TaskStats, TaskView};
pub use catalog::Catalog;
pub use customer::{Customer, CustomerHistory, CustomerId, CustomerStatus, NewCustomer, OrderType};
pub use dashboard::DashboardData;
pub use error::{ProtocolError, Result};
pub use filter::{Choice, CustomerFilter, Filter, FilterField, OrderFilter, TaskFilter, TextQuery};
pub use message::Message;
pub use order::{Order, OrderId, OrderStatus};
pub use route::{NAV_ITEMS, Route};
pub use selection::Selection;
pub use task::{NewTask, Task, TaskCategory, TaskId, TaskPriority, TaskStatus};
pub use variant::Variant;
