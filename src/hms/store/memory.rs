use super::Collection;
use crate::model::{Appointment, Doctor, InventoryItem, Patient, Staff};

/// The process-wide aggregate owning all five collections.
///
/// Passed by reference to every command; there are no module-level globals.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub(crate) patients: Collection<Patient>,
    pub(crate) staff: Collection<Staff>,
    pub(crate) doctors: Collection<Doctor>,
    pub(crate) inventory: Collection<InventoryItem>,
    pub(crate) appointments: Collection<Appointment>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &Collection<Patient> {
        &self.patients
    }

    pub fn staff(&self) -> &Collection<Staff> {
        &self.staff
    }

    pub fn doctors(&self) -> &Collection<Doctor> {
        &self.doctors
    }

    pub fn inventory(&self) -> &Collection<InventoryItem> {
        &self.inventory
    }

    pub fn appointments(&self) -> &Collection<Appointment> {
        &self.appointments
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
            && self.staff.is_empty()
            && self.doctors.is_empty()
            && self.inventory.is_empty()
            && self.appointments.is_empty()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: RecordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(),
            }
        }

        pub fn with_patient(mut self, id: i64, name: &str) -> Self {
            self.store.insert(Patient::new(id, name, 40, "F", "checkup")).unwrap();
            self
        }

        pub fn with_staff(mut self, id: i64, name: &str, role: &str) -> Self {
            self.store.insert(Staff::new(id, name, role, "day")).unwrap();
            self
        }

        pub fn with_doctor(mut self, id: i64, name: &str, designation: &str) -> Self {
            self.store.insert(Doctor::new(id, name, designation, "555-0100")).unwrap();
            self
        }

        pub fn with_item(mut self, id: i64, name: &str, quantity: i64) -> Self {
            self.store.insert(InventoryItem::new(id, name, quantity)).unwrap();
            self
        }

        pub fn with_appointment(mut self, id: i64, patient_id: i64, doctor_id: i64) -> Self {
            self.store
                .insert(Appointment::new(id, patient_id, doctor_id, "2024-05-01", "10:00"))
                .unwrap();
            self
        }
    }
}
