//! Popup form state: "New Task" and "Add Customer".

use chrono::NaiveDate;
use nexus_protocol::{NewCustomer, NewTask, ProtocolError, Variant};

/// People tasks can be assigned to.
pub const ASSIGNEES: [&str; 4] = ["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"];

/// Divisions offered by the customer form.
pub const DIVISIONS: [&str; 8] = [
    "Dhaka",
    "Chittagong",
    "Sylhet",
    "Rajshahi",
    "Khulna",
    "Barisal",
    "Rangpur",
    "Mymensingh",
];

/// Districts offered by the customer form.
pub const DISTRICTS: [&str; 6] = [
    "Dhaka",
    "Gazipur",
    "Narayanganj",
    "Chittagong",
    "Comilla",
    "Sylhet",
];

/// Format typed into the due date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field value the form could not accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid due date `{0}`: expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Fields of the task form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
    Category,
    Assignee,
    DueDate,
    RelatedTo,
    Tags,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Description,
        Self::Priority,
        Self::Category,
        Self::Assignee,
        Self::DueDate,
        Self::RelatedTo,
        Self::Tags,
    ];

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Priority => "Priority",
            Self::Category => "Category",
            Self::Assignee => "Assignee",
            Self::DueDate => "Due Date",
            Self::RelatedTo => "Related To",
            Self::Tags => "Tags",
        }
    }

    /// Returns `true` for free-text fields.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Priority | Self::Category | Self::Assignee)
    }
}

/// The open "New Task" form.
///
/// # Examples
///
/// ```
/// use nexus_protocol::TaskPriority;
/// use nexus_tui::form::{FormField, TaskForm};
///
/// let mut form = TaskForm::new();
/// for ch in "Call supplier".chars() {
///     form.input(ch);
/// }
/// form.next_field();
/// form.next_field();
/// assert_eq!(form.field(), FormField::Priority);
///
/// form.cycle(true);
/// assert_eq!(form.draft().priority, TaskPriority::High);
/// assert_eq!(form.draft().title, "Call supplier");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    draft: NewTask,
    description: String,
    due_date: String,
    related: String,
    tags: String,
    field: FormField,
    assignee: usize,
    error: Option<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    /// An empty form with the title focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: NewTask {
                assignee: ASSIGNEES[0].to_string(),
                ..NewTask::default()
            },
            description: String::new(),
            due_date: String::new(),
            related: String::new(),
            tags: String::new(),
            field: FormField::Title,
            assignee: 0,
            error: None,
        }
    }

    /// The title and choice values entered so far.
    #[must_use]
    pub fn draft(&self) -> &NewTask {
        &self.draft
    }

    /// The focused field.
    #[must_use]
    pub fn field(&self) -> FormField {
        self.field
    }

    /// Text of a field as displayed.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Description => &self.description,
            FormField::Priority => self.draft.priority.display_name(),
            FormField::Category => self.draft.category.display_name(),
            FormField::Assignee => &self.draft.assignee,
            FormField::DueDate => &self.due_date,
            FormField::RelatedTo => &self.related,
            FormField::Tags => &self.tags,
        }
    }

    /// The last submit error, shown under the fields.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records a rejected submit and focuses the offending field.
    pub fn set_error(&mut self, field: FormField, message: impl Into<String>) {
        self.error = Some(message.into());
        self.field = field;
    }

    /// Records a rejected draft, focusing the field it names.
    pub fn reject(&mut self, err: &ProtocolError) {
        self.set_error(FormField::Title, err.to_string());
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.field = next_of(&FormField::ALL, self.field);
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::RelatedTo => Some(&mut self.related),
            FormField::Tags => Some(&mut self.tags),
            FormField::Priority | FormField::Category | FormField::Assignee => None,
        }
    }

    /// Types into the focused text field.
    pub fn input(&mut self, ch: char) {
        if let Some(text) = self.text_mut() {
            text.push(ch);
            self.error = None;
        }
    }

    /// Deletes the last character of the focused text field.
    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Steps the focused choice field forward or backward.
    pub fn cycle(&mut self, forward: bool) {
        match self.field {
            FormField::Priority => self.draft.priority = step(self.draft.priority, forward),
            FormField::Category => self.draft.category = step(self.draft.category, forward),
            FormField::Assignee => {
                self.assignee = step_index(self.assignee, ASSIGNEES.len(), forward);
                self.draft.assignee = ASSIGNEES[self.assignee].to_string();
            }
            _ => {}
        }
    }

    /// The task to create from the current values.
    ///
    /// A blank due date is left unset; tags are split on commas.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDueDate`] if the due date does not parse
    /// as `YYYY-MM-DD`.
    pub fn to_new_task(&self) -> Result<NewTask, FormError> {
        let due = self.due_date.trim();
        let due_date = if due.is_empty() {
            None
        } else {
            let parsed = NaiveDate::parse_from_str(due, DATE_FORMAT)
                .map_err(|_| FormError::InvalidDueDate(due.to_string()))?;
            Some(parsed)
        };
        Ok(NewTask {
            description: Some(self.description.clone()),
            due_date,
            related_id: Some(self.related.trim().to_string()),
            tags: self
                .tags
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(ToString::to_string)
                .collect(),
            ..self.draft.clone()
        })
    }
}

/// Fields of the customer form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerField {
    #[default]
    Name,
    Phone,
    Email,
    Division,
    District,
    Address,
    Notes,
}

impl CustomerField {
    /// All fields in tab order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Division,
        Self::District,
        Self::Address,
        Self::Notes,
    ];

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone *",
            Self::Email => "Email",
            Self::Division => "Division",
            Self::District => "District",
            Self::Address => "Address",
            Self::Notes => "Notes",
        }
    }

    /// Returns `true` for free-text fields.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Division | Self::District)
    }
}

/// The open "Add Customer" form.
///
/// # Examples
///
/// ```
/// use nexus_tui::form::{CustomerField, CustomerForm};
///
/// let mut form = CustomerForm::new();
/// "Rina Das".chars().for_each(|ch| form.input(ch));
/// form.next_field();
/// "01711222333".chars().for_each(|ch| form.input(ch));
///
/// let draft = form.to_new_customer();
/// assert_eq!(draft.name, "Rina Das");
/// assert_eq!(draft.division, "Dhaka");
/// assert_eq!(form.field(), CustomerField::Phone);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerForm {
    name: String,
    phone: String,
    email: String,
    address: String,
    notes: String,
    division: usize,
    district: usize,
    field: CustomerField,
    error: Option<String>,
}

impl CustomerForm {
    /// An empty form with the name focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused field.
    #[must_use]
    pub fn field(&self) -> CustomerField {
        self.field
    }

    /// Text of a field as displayed.
    #[must_use]
    pub fn value(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Phone => &self.phone,
            CustomerField::Email => &self.email,
            CustomerField::Division => DIVISIONS[self.division],
            CustomerField::District => DISTRICTS[self.district],
            CustomerField::Address => &self.address,
            CustomerField::Notes => &self.notes,
        }
    }

    /// The last submit error, shown under the fields.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records a rejected draft, focusing the field it names.
    pub fn reject(&mut self, err: &ProtocolError) {
        self.field = match err {
            ProtocolError::InvalidPhone(_) => CustomerField::Phone,
            _ => CustomerField::Name,
        };
        self.error = Some(err.to_string());
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.field = next_of(&CustomerField::ALL, self.field);
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            CustomerField::Name => Some(&mut self.name),
            CustomerField::Phone => Some(&mut self.phone),
            CustomerField::Email => Some(&mut self.email),
            CustomerField::Address => Some(&mut self.address),
            CustomerField::Notes => Some(&mut self.notes),
            CustomerField::Division | CustomerField::District => None,
        }
    }

    /// Types into the focused text field.
    pub fn input(&mut self, ch: char) {
        if let Some(text) = self.text_mut() {
            text.push(ch);
            self.error = None;
        }
    }

    /// Deletes the last character of the focused text field.
    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Steps the focused choice field forward or backward.
    pub fn cycle(&mut self, forward: bool) {
        match self.field {
            CustomerField::Division => {
                self.division = step_index(self.division, DIVISIONS.len(), forward);
            }
            CustomerField::District => {
                self.district = step_index(self.district, DISTRICTS.len(), forward);
            }
            _ => {}
        }
    }

    /// The customer to create from the current values.
    #[must_use]
    pub fn to_new_customer(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: Some(self.email.clone()),
            division: DIVISIONS[self.division].to_string(),
            district: DISTRICTS[self.district].to_string(),
            address: self.address.clone(),
            notes: Some(self.notes.clone()),
        }
    }
}

fn next_of<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let index = all.iter().position(|f| *f == current).unwrap_or(0);
    all[(index + 1) % all.len()]
}

fn step<T: Variant>(value: T, forward: bool) -> T {
    let index = step_index(value.position(), T::ALL.len(), forward);
    T::from_position(index).unwrap_or(value)
}

fn step_index(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        index.checked_sub(1).unwrap_or(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_protocol::{TaskCategory, TaskPriority};

    fn type_text(form: &mut TaskForm, text: &str) {
        for ch in text.chars() {
            form.input(ch);
        }
    }

    fn focus(form: &mut TaskForm, field: FormField) {
        while form.field() != field {
            form.next_field();
        }
    }

    #[test]
    fn new_form_defaults() {
        let form = TaskForm::new();
        assert_eq!(form.field(), FormField::Title);
        assert_eq!(form.draft().priority, TaskPriority::Medium);
        assert_eq!(form.draft().category, TaskCategory::General);
        assert_eq!(form.value(FormField::Assignee), "John Doe");
        assert!(form.error().is_none());
    }

    #[test]
    fn typing_only_affects_text_fields() {
        let mut form = TaskForm::new();
        type_text(&mut form, "Pack orders");
        form.next_field();
        type_text(&mut form, "Before 5pm");
        form.next_field();
        type_text(&mut form, "ignored");
        form.backspace();

        assert_eq!(form.value(FormField::Title), "Pack orders");
        assert_eq!(form.value(FormField::Description), "Before 5pm");
        assert_eq!(form.value(FormField::Priority), "Medium");
    }

    #[test]
    fn choices_wrap_both_ways() {
        let mut form = TaskForm::new();
        focus(&mut form, FormField::Category);
        form.cycle(false);
        assert_eq!(form.draft().category, TaskCategory::Finance);
        form.cycle(true);
        form.cycle(true);
        assert_eq!(form.draft().category, TaskCategory::Order);

        form.next_field();
        form.cycle(false);
        assert_eq!(form.value(FormField::Assignee), "Sarah Wilson");
    }

    #[test]
    fn due_date_related_and_tags_reach_the_draft() {
        let mut form = TaskForm::new();
        type_text(&mut form, "Ship FX-0009 next week");
        focus(&mut form, FormField::DueDate);
        type_text(&mut form, "2026-01-31");
        form.next_field();
        type_text(&mut form, "FX-0009");
        form.next_field();
        type_text(&mut form, "urgent, callback,, ");

        let draft = form.to_new_task().expect("valid form");
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2026, 1, 31));
        assert_eq!(draft.related_id.as_deref(), Some("FX-0009"));
        assert_eq!(draft.tags, ["urgent", "callback"]);
    }

    #[test]
    fn blank_due_date_is_unset() {
        let mut form = TaskForm::new();
        type_text(&mut form, "Restock");
        let draft = form.to_new_task().expect("valid form");
        assert_eq!(draft.due_date, None);
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let mut form = TaskForm::new();
        focus(&mut form, FormField::DueDate);
        type_text(&mut form, "31/01/2026");
        assert_eq!(
            form.to_new_task(),
            Err(FormError::InvalidDueDate("31/01/2026".into()))
        );
    }

    #[test]
    fn error_focuses_field_and_clears_on_typing() {
        let mut form = TaskForm::new();
        form.next_field();
        form.set_error(FormField::DueDate, "invalid due date");
        assert_eq!(form.field(), FormField::DueDate);
        assert!(form.error().is_some());

        form.input('2');
        assert!(form.error().is_none());
    }

    #[test]
    fn tab_order_wraps() {
        let mut form = TaskForm::new();
        for _ in 0..FormField::ALL.len() {
            form.next_field();
        }
        assert_eq!(form.field(), FormField::Title);
    }

    #[test]
    fn customer_form_collects_every_field() {
        let mut form = CustomerForm::new();
        for (field, text) in [
            (CustomerField::Name, "Rina Das"),
            (CustomerField::Phone, "+880 1711-222333"),
            (CustomerField::Email, "rina@example.com"),
            (CustomerField::Address, "House 3, Road 9"),
            (CustomerField::Notes, "Call first"),
        ] {
            while form.field() != field {
                form.next_field();
            }
            text.chars().for_each(|ch| form.input(ch));
        }
        while form.field() != CustomerField::District {
            form.next_field();
        }
        form.cycle(true);
        form.cycle(false);
        form.cycle(false);

        let draft = form.to_new_customer();
        assert_eq!(draft.name, "Rina Das");
        assert_eq!(draft.phone, "+880 1711-222333");
        assert_eq!(draft.email.as_deref(), Some("rina@example.com"));
        assert_eq!(draft.division, "Dhaka");
        assert_eq!(draft.district, "Sylhet");
        assert_eq!(draft.address, "House 3, Road 9");
        assert_eq!(draft.notes.as_deref(), Some("Call first"));
    }

    #[test]
    fn customer_rejection_focuses_the_field() {
        let mut form = CustomerForm::new();
        form.reject(&ProtocolError::InvalidPhone("123".into()));
        assert_eq!(form.field(), CustomerField::Phone);
        assert!(form.error().is_some_and(|e| e.contains("123")));

        form.reject(&ProtocolError::InvalidCustomerName);
        assert_eq!(form.field(), CustomerField::Name);

        form.input('R');
        assert!(form.error().is_none());
    }
}
