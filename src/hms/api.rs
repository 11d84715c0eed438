//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every record operation, whatever front end drives it.
//!
//! It owns the [`RecordStore`] for the lifetime of the session, dispatches
//! to `commands/*.rs`, and hands back structured results. It does no
//! formatting and no I/O; the console binary renders whatever comes back.
//!
//! API tests check dispatch and return shapes; the behaviour itself is
//! tested in the command modules.

use crate::commands::{self, overview::Overview};
use crate::error::Result;
use crate::model::{Appointment, Doctor, InventoryItem, Patient, RecordId, Staff};
use crate::store::{RecordStore, Stored};

#[derive(Debug, Default)]
pub struct HmsApi {
    store: RecordStore,
}

impl HmsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self { store }
    }

    /// Add-if-unique for any record kind.
    pub fn add<R: Stored>(&mut self, record: R) -> Result<CmdResult<R>> {
        commands::add::run(&mut self.store, record)
    }

    /// Idempotent delete-by-key for any record kind.
    pub fn delete<R: Stored>(&mut self, key: RecordId) -> Result<CmdResult<R>> {
        commands::delete::run(&mut self.store, key)
    }

    pub fn list<R: Stored>(&self) -> Result<CmdResult<R>> {
        commands::list::run(&self.store)
    }

    pub fn search_patients(&self, name: &str) -> Result<CmdResult<Patient>> {
        commands::search::patients_by_name(&self.store, name)
    }

    pub fn staff_by_role(&self, role: &str) -> Result<CmdResult<Staff>> {
        commands::filter::staff_by_role(&self.store, role)
    }

    pub fn doctors_by_designation(&self, designation: &str) -> Result<CmdResult<Doctor>> {
        commands::filter::doctors_by_designation(&self.store, designation)
    }

    pub fn edit_doctor(
        &mut self,
        doctor_id: RecordId,
        update: &DoctorUpdate,
    ) -> Result<CmdResult<Doctor>> {
        commands::update::doctor(&mut self.store, doctor_id, update)
    }

    pub fn update_inventory(
        &mut self,
        item_id: RecordId,
        update: &InventoryUpdate,
    ) -> Result<CmdResult<InventoryItem>> {
        commands::update::inventory(&mut self.store, item_id, update)
    }

    pub fn low_stock(&self, threshold: i64) -> Result<CmdResult<InventoryItem>> {
        commands::filter::low_stock(&self.store, threshold)
    }

    pub fn cancel_appointment(
        &mut self,
        appointment_id: RecordId,
    ) -> Result<CmdResult<Appointment>> {
        commands::delete::run(&mut self.store, appointment_id)
    }

    pub fn overview(&self) -> Result<Overview> {
        commands::overview::run(&self.store)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, DoctorUpdate, InventoryUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HmsError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn add_dispatches_by_record_type() {
        let mut api = HmsApi::new();
        api.add(Patient::new(1, "Amina", 30, "F", "flu")).unwrap();
        api.add(Doctor::new(1, "House", "Diagnostician", "555")).unwrap();

        assert_eq!(api.list::<Patient>().unwrap().listed.len(), 1);
        assert_eq!(api.list::<Doctor>().unwrap().listed.len(), 1);
        assert!(api.list::<Staff>().unwrap().listed.is_empty());
    }

    #[test]
    fn add_surfaces_duplicate_key() {
        let mut api = HmsApi::new();
        api.add(InventoryItem::new(1, "gauze", 5)).unwrap();
        assert!(matches!(
            api.add(InventoryItem::new(1, "gloves", 5)),
            Err(HmsError::DuplicateKey { key: 1, .. })
        ));
    }

    #[test]
    fn cancel_appointment_removes_it() {
        let store = StoreFixture::new().with_appointment(5, 1, 1).store;
        let mut api = HmsApi::with_store(store);

        let result = api.cancel_appointment(5).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert!(api.store().appointments().is_empty());
    }

    #[test]
    fn edit_doctor_returns_updated_record() {
        let store = StoreFixture::new().with_doctor(2, "Grey", "Surgeon").store;
        let mut api = HmsApi::with_store(store);

        let result = api
            .edit_doctor(2, &DoctorUpdate::new().designation("Chief"))
            .unwrap();
        assert_eq!(result.affected[0].designation, "Chief");
    }

    #[test]
    fn queries_do_not_mutate() {
        let store = StoreFixture::new()
            .with_patient(1, "Amina")
            .with_staff(1, "Joy", "nurse")
            .with_doctor(1, "Grey", "Surgeon")
            .with_item(1, "gauze", 1)
            .store;
        let api = HmsApi::with_store(store);
        let before = api.overview().unwrap();

        api.search_patients("ami").unwrap();
        api.staff_by_role("nurse").unwrap();
        api.doctors_by_designation("surgeon").unwrap();
        api.low_stock(10).unwrap();

        assert_eq!(api.overview().unwrap(), before);
    }
}
