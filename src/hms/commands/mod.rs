use crate::model::RecordId;

pub mod add;
pub mod delete;
pub mod filter;
pub mod list;
pub mod overview;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command over records of type `R`.
///
/// `affected` holds records that were created, changed or removed;
/// `listed` holds query matches in collection order.
#[derive(Debug)]
pub struct CmdResult<R> {
    pub affected: Vec<R>,
    pub listed: Vec<R>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<R>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<R>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Partial edit of a doctor. `None` or an empty string leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorUpdate {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
}

impl DoctorUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Partial edit of an inventory item. `None` leaves the field as is; an
/// empty `item_name` is also skipped, but a quantity of zero is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryUpdate {
    pub item_name: Option<String>,
    pub quantity: Option<i64>,
}

impl InventoryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

pub(crate) fn id_label(key: RecordId) -> String {
    format!("id {}", key)
}
