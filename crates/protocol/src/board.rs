//! Task board columns and statistics.
//!
//! The board groups a (usually filtered) list of tasks into one column per
//! [`TaskStatus`]. Column order and membership are derived on every call and
//! never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};
use crate::variant::Variant;

/// How the task page lays out tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskView {
    /// One column per status.
    #[default]
    Board,
    /// A single table with checkboxes.
    List,
}

impl TaskView {
    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Board => Self::List,
            Self::List => Self::Board,
        }
    }
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColumn<'a> {
    /// The status every task in this column has.
    pub status: TaskStatus,
    /// Tasks in their input order.
    pub tasks: Vec<&'a Task>,
}

impl StatusColumn<'_> {
    /// Number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Title shown in the column header, e.g. `"In Progress (2)"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({})", self.status.display_name(), self.len())
    }
}

/// Groups `tasks` into the four status columns, in status order.
///
/// Every column is present, even when empty.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{Catalog, TaskStatus, board::group_by_status};
///
/// let catalog = Catalog::sample();
/// let tasks: Vec<_> = catalog.tasks.iter().collect();
/// let columns = group_by_status(&tasks);
///
/// assert_eq!(columns[0].status, TaskStatus::ToDo);
/// assert_eq!(columns[0].len(), 3);
/// assert_eq!(columns[3].len(), 1);
/// ```
#[must_use]
pub fn group_by_status<'a>(tasks: &[&'a Task]) -> Vec<StatusColumn<'a>> {
    TaskStatus::ALL
        .iter()
        .map(|&status| StatusColumn {
            status,
            tasks: tasks.iter().copied().filter(|t| t.status == status).collect(),
        })
        .collect()
}

/// Headline numbers shown above the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// Open tasks due on the reference day.
    pub due_today: usize,
    /// Open tasks due before the reference day.
    pub overdue: usize,
}

impl TaskStats {
    /// Computes statistics for `tasks` as of `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nexus_protocol::{Catalog, board::TaskStats};
    ///
    /// let catalog = Catalog::sample();
    /// let stats = TaskStats::compute(&catalog.tasks, catalog.as_of);
    /// assert_eq!(stats.total, 8);
    /// assert_eq!(stats.completed, 1);
    /// ```
    #[must_use]
    pub fn compute<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            if task.status == TaskStatus::Completed {
                stats.completed += 1;
            }
            if task.is_due_on(today) {
                stats.due_today += 1;
            }
            if task.is_overdue(today) {
                stats.overdue += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::{TaskFilter, project};
    use crate::transition::transition;
    use insta::assert_snapshot;

    fn titles(columns: &[StatusColumn<'_>]) -> String {
        columns
            .iter()
            .map(StatusColumn::title)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    #[test]
    fn sample_board_column_counts() {
        let catalog = Catalog::sample();
        let tasks: Vec<_> = catalog.tasks.iter().collect();
        assert_snapshot!(
            titles(&group_by_status(&tasks)),
            @"To Do (3) | In Progress (2) | Review (2) | Completed (1)"
        );
    }

    #[test]
    fn columns_follow_the_filter() {
        let catalog = Catalog::sample();
        let filter = TaskFilter::default().with_search("order");
        let tasks = project(&catalog.tasks, &filter);
        assert_snapshot!(
            titles(&group_by_status(&tasks)),
            @"To Do (1) | In Progress (1) | Review (0) | Completed (0)"
        );
    }

    #[test]
    fn moving_a_task_moves_it_between_columns() {
        let mut catalog = Catalog::sample();
        transition(&mut catalog.tasks, "1", TaskStatus::Review).expect("task 1 exists");

        let tasks: Vec<_> = catalog.tasks.iter().collect();
        let columns = group_by_status(&tasks);

        assert!(columns[0].tasks.iter().all(|t| t.id != "1"));
        assert!(columns[2].tasks.iter().any(|t| t.id == "1"));
        assert_snapshot!(
            titles(&columns),
            @"To Do (2) | In Progress (2) | Review (3) | Completed (1)"
        );
    }

    #[test]
    fn sample_stats_as_of_snapshot_day() {
        let catalog = Catalog::sample();
        let stats = TaskStats::compute(&catalog.tasks, catalog.as_of);
        assert_eq!(
            stats,
            TaskStats {
                total: 8,
                completed: 1,
                due_today: 3,
                overdue: 0,
            }
        );
    }

    #[test]
    fn stats_count_overdue_after_snapshot_day() {
        let catalog = Catalog::sample();
        let later = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
        let stats = TaskStats::compute(&catalog.tasks, later);
        // Open tasks due Jan 24 and 25: 1, 2, 4, 5, 8.
        assert_eq!(stats.overdue, 5);
        // Task 3.
        assert_eq!(stats.due_today, 1);
    }
}
