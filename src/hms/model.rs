use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied identifier, unique within one collection.
pub type RecordId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Patient,
    Staff,
    Doctor,
    Inventory,
    Appointment,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Patient => "Patient",
            RecordKind::Staff => "Staff member",
            RecordKind::Doctor => "Doctor",
            RecordKind::Inventory => "Inventory item",
            RecordKind::Appointment => "Appointment",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A flat entity keyed by a [`RecordId`].
///
/// Every collection operation (duplicate check, delete, lookup) goes through
/// `key()`, so one generic implementation serves all five entity kinds.
pub trait Record: Clone + fmt::Debug {
    const KIND: RecordKind;

    fn key(&self) -> RecordId;

    /// Short human description used in command messages.
    fn summary(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: RecordId,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub diagnosis: String,
}

impl Patient {
    pub fn new(
        patient_id: RecordId,
        name: impl Into<String>,
        age: i64,
        gender: impl Into<String>,
        diagnosis: impl Into<String>,
    ) -> Self {
        Self {
            patient_id,
            name: name.into(),
            age,
            gender: gender.into(),
            diagnosis: diagnosis.into(),
        }
    }
}

impl Record for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn key(&self) -> RecordId {
        self.patient_id
    }

    fn summary(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: RecordId,
    pub name: String,
    pub role: String,
    pub shift: String,
}

impl Staff {
    pub fn new(
        staff_id: RecordId,
        name: impl Into<String>,
        role: impl Into<String>,
        shift: impl Into<String>,
    ) -> Self {
        Self {
            staff_id,
            name: name.into(),
            role: role.into(),
            shift: shift.into(),
        }
    }
}

impl Record for Staff {
    const KIND: RecordKind = RecordKind::Staff;

    fn key(&self) -> RecordId {
        self.staff_id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: RecordId,
    pub name: String,
    pub designation: String,
    pub phone: String,
}

impl Doctor {
    pub fn new(
        doctor_id: RecordId,
        name: impl Into<String>,
        designation: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            doctor_id,
            name: name.into(),
            designation: designation.into(),
            phone: phone.into(),
        }
    }
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn key(&self) -> RecordId {
        self.doctor_id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.designation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_id: RecordId,
    pub item_name: String,
    // Expected to be non-negative; not enforced.
    pub quantity: i64,
}

impl InventoryItem {
    pub fn new(item_id: RecordId, item_name: impl Into<String>, quantity: i64) -> Self {
        Self {
            item_id,
            item_name: item_name.into(),
            quantity,
        }
    }
}

impl Record for InventoryItem {
    const KIND: RecordKind = RecordKind::Inventory;

    fn key(&self) -> RecordId {
        self.item_id
    }

    fn summary(&self) -> String {
        format!("{} x{}", self.item_name, self.quantity)
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A booking between a patient and a doctor.
///
/// `patient_id` and `doctor_id` are plain references: nothing checks that
/// they exist, and deleting a patient or doctor leaves appointments alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: RecordId,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: String,
    pub time: String,
}

impl Appointment {
    pub fn new(
        appointment_id: RecordId,
        patient_id: RecordId,
        doctor_id: RecordId,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            appointment_id,
            patient_id,
            doctor_id,
            date: date.into(),
            time: time.into(),
        }
    }

    /// Interprets `date` (YYYY-MM-DD) and `time` (HH:MM) as a timestamp.
    ///
    /// Both fields are free text, so this is best-effort and returns `None`
    /// when either one doesn't parse.
    pub fn scheduled_for(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn key(&self) -> RecordId {
        self.appointment_id
    }

    fn summary(&self) -> String {
        format!(
            "patient {} with doctor {} on {} at {}",
            self.patient_id, self.doctor_id, self.date, self.time
        )
    }
}
