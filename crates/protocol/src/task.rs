//! Task types for the task board.
//!
//! Tasks are internal to-dos (follow-ups, deliveries to chase, reports to
//! prepare). Each one sits in exactly one [`TaskStatus`] column and carries a
//! priority, a category, an assignee, and a due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::variant::{Variant, impl_display_and_from_str};

/// Identifier of a task. Sample tasks use small decimal strings (`"1"`..).
pub type TaskId = String;

/// How urgent a task is.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{TaskPriority, Variant};
///
/// assert_eq!(TaskPriority::Urgent.display_name(), "Urgent");
/// assert!(TaskPriority::Urgent > TaskPriority::Low);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Should be handled today.
    High,
    /// Drop everything.
    Urgent,
}

impl Variant for TaskPriority {
    const KIND: &'static str = "task priority";
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Urgent];

    fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

/// The board column a task lives in.
///
/// The board always shows these four columns, in this order.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{TaskStatus, Variant};
///
/// assert_eq!(TaskStatus::ALL[0], TaskStatus::ToDo);
/// assert_eq!(TaskStatus::InProgress.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    ToDo,
    /// Someone is working on it.
    InProgress,
    /// Waiting for a second pair of eyes.
    Review,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Label of the status-menu action that moves a task into this column.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Review.action_label(), "Move to Review");
    /// assert_eq!(TaskStatus::Completed.action_label(), "Mark as Completed");
    /// ```
    #[must_use]
    pub const fn action_label(self) -> &'static str {
        match self {
            Self::ToDo => "Move to To Do",
            Self::InProgress => "Move to In Progress",
            Self::Review => "Move to Review",
            Self::Completed => "Mark as Completed",
        }
    }
}

impl Variant for TaskStatus {
    const KIND: &'static str = "task status";
    const ALL: &'static [Self] = &[Self::ToDo, Self::InProgress, Self::Review, Self::Completed];

    fn display_name(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }
}

/// What area of the business a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Order,
    Customer,
    Inventory,
    Finance,
    #[default]
    General,
}

impl Variant for TaskCategory {
    const KIND: &'static str = "task category";
    const ALL: &'static [Self] = &[
        Self::Order,
        Self::Customer,
        Self::Inventory,
        Self::Finance,
        Self::General,
    ];

    fn display_name(self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Customer => "Customer",
            Self::Inventory => "Inventory",
            Self::Finance => "Finance",
            Self::General => "General",
        }
    }
}

impl_display_and_from_str!(TaskPriority, TaskStatus, TaskCategory);

/// A task on the task board.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nexus_protocol::{Task, TaskStatus};
///
/// let due = NaiveDate::from_ymd_opt(2026, 1, 25).unwrap();
/// let task = Task::new("9", "Call supplier", due);
/// assert_eq!(task.status, TaskStatus::ToDo);
/// assert!(task.tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary shown on the card.
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// How urgent the task is.
    pub priority: TaskPriority,
    /// Which board column the task is in.
    pub status: TaskStatus,
    /// Business area the task belongs to.
    pub category: TaskCategory,
    /// Name of the team member responsible.
    pub assignee: String,
    /// Day the task is due.
    pub due_date: NaiveDate,
    /// Day the task was created.
    pub created_at: NaiveDate,
    /// Invoice number or customer id this task concerns, if any.
    pub related_id: Option<String>,
    /// Free-form labels.
    pub tags: Vec<String>,
}

impl Task {
    /// Creates an unassigned `To Do` task with default priority and
    /// category, created on its due date.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            category: TaskCategory::default(),
            assignee: String::new(),
            due_date,
            created_at: due_date,
            related_id: None,
            tags: Vec::new(),
        }
    }

    /// Returns `true` if the task is still open and its due date has passed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nexus_protocol::{Task, TaskStatus};
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
    /// let mut task = Task::new("1", "Chase courier", day(20));
    /// assert!(task.is_overdue(day(24)));
    ///
    /// task.status = TaskStatus::Completed;
    /// assert!(!task.is_overdue(day(24)));
    /// ```
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date < today
    }

    /// Returns `true` if the task is still open and due on `today`.
    #[must_use]
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date == today
    }

    /// Returns `true` unless the task is completed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

/// The fields collected by the "New Task" form.
///
/// Converted into a [`Task`] by [`NewTask::into_task`], which is where the
/// title is validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub related_id: Option<String>,
    pub tags: Vec<String>,
}

impl NewTask {
    /// Builds a `To Do` task from the form fields.
    ///
    /// The title is trimmed. A missing due date defaults to `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidTaskTitle`] if the trimmed title is
    /// empty.
    pub fn into_task(self, id: impl Into<TaskId>, created_at: NaiveDate) -> Result<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ProtocolError::InvalidTaskTitle);
        }
        Ok(Task {
            id: id.into(),
            title: title.to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            priority: self.priority,
            status: TaskStatus::ToDo,
            category: self.category,
            assignee: self.assignee,
            due_date: self.due_date.unwrap_or(created_at),
            created_at,
            related_id: self.related_id.filter(|r| !r.trim().is_empty()),
            tags: self.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn defaults_match_a_fresh_task() {
        assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        assert_eq!(TaskCategory::default(), TaskCategory::General);
    }

    #[test]
    fn status_json_format() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize");
        assert_eq!(json, r#""in_progress""#);

        let json = serde_json::to_string(&TaskStatus::ToDo).expect("serialize");
        assert_eq!(json, r#""to_do""#);
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(TaskStatus::ToDo.to_string(), "To Do");
        assert_eq!(TaskCategory::Finance.to_string(), "Finance");
    }

    #[test]
    fn from_str_parses_labels() {
        assert_eq!("High".parse::<TaskPriority>(), Ok(TaskPriority::High));
        assert_eq!("review".parse::<TaskStatus>(), Ok(TaskStatus::Review));
        assert!("Shipping".parse::<TaskCategory>().is_err());
    }

    #[test]
    fn due_today_excludes_completed_tasks() {
        let mut task = Task::new("1", "Send invoice", day(24));
        assert!(task.is_due_on(day(24)));
        assert!(!task.is_overdue(day(24)));

        task.status = TaskStatus::Completed;
        assert!(!task.is_due_on(day(24)));
    }

    #[test]
    fn new_task_rejects_blank_title() {
        let draft = NewTask {
            title: "   ".into(),
            ..NewTask::default()
        };
        assert_eq!(draft.into_task("9", day(24)), Err(ProtocolError::InvalidTaskTitle));
    }

    #[test]
    fn new_task_trims_title_and_defaults_due_date() {
        let draft = NewTask {
            title: "  Restock shelf  ".into(),
            priority: TaskPriority::High,
            category: TaskCategory::Inventory,
            related_id: Some(String::new()),
            ..NewTask::default()
        };
        let task = draft.into_task("9", day(24)).expect("valid title");

        assert_eq!(task.id, "9");
        assert_eq!(task.title, "Restock shelf");
        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.category, TaskCategory::Inventory);
        assert_eq!(task.due_date, day(24));
        assert_eq!(task.related_id, None);
    }
}
