use crate::error::Result;
use crate::model::{Appointment, Doctor, InventoryItem, Patient, Staff};
use crate::store::RecordStore;

/// A copy of every collection, for the "show all information" screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub patients: Vec<Patient>,
    pub staff: Vec<Staff>,
    pub doctors: Vec<Doctor>,
    pub inventory: Vec<InventoryItem>,
    pub appointments: Vec<Appointment>,
}

impl Overview {
    pub fn total(&self) -> usize {
        self.patients.len()
            + self.staff.len()
            + self.doctors.len()
            + self.inventory.len()
            + self.appointments.len()
    }
}

pub fn run(store: &RecordStore) -> Result<Overview> {
    Ok(Overview {
        patients: store.list::<Patient>().to_vec(),
        staff: store.list::<Staff>().to_vec(),
        doctors: store.list::<Doctor>().to_vec(),
        inventory: store.list::<InventoryItem>().to_vec(),
        appointments: store.list::<Appointment>().to_vec(),
    })
}
