use crate::commands::{id_label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::{RecordStore, Stored};
use tracing::{debug, info};

/// Deletes every record of type `R` keyed `key`.
///
/// Idempotent: a missing key is reported as an info message, never an error.
pub fn run<R: Stored>(store: &mut RecordStore, key: RecordId) -> Result<CmdResult<R>> {
    let removed = store.remove::<R>(key);
    let mut result = CmdResult::default();

    if removed.is_empty() {
        debug!(kind = %R::KIND, key, "delete matched nothing");
        result.add_message(CmdMessage::info(format!(
            "No {} with {}; nothing to delete",
            R::KIND.label().to_lowercase(),
            id_label(key)
        )));
        return Ok(result);
    }

    info!(kind = %R::KIND, key, count = removed.len(), "record deleted");
    for record in &removed {
        result.add_message(CmdMessage::success(format!(
            "{} deleted ({}): {}",
            R::KIND,
            id_label(key),
            record.summary()
        )));
    }
    Ok(result.with_affected(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Appointment, Patient};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_matching_record() {
        let mut store = StoreFixture::new()
            .with_patient(1, "Amina")
            .with_patient(2, "Bao")
            .store;

        let result = run::<Patient>(&mut store, 1).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].name, "Amina");
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let left = store.list::<Patient>();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].patient_id, 2);
    }

    #[test]
    fn second_delete_is_a_quiet_noop() {
        let mut store = StoreFixture::new().with_patient(1, "Amina").store;

        run::<Patient>(&mut store, 1).unwrap();
        let again = run::<Patient>(&mut store, 1).unwrap();

        assert!(again.affected.is_empty());
        assert_eq!(again.messages[0].level, MessageLevel::Info);
        assert!(store.list::<Patient>().is_empty());
    }

    #[test]
    fn cancels_appointment() {
        let mut store = StoreFixture::new()
            .with_appointment(10, 1, 1)
            .with_appointment(11, 2, 1)
            .store;

        run::<Appointment>(&mut store, 10).unwrap();
        let ids: Vec<_> = store
            .list::<Appointment>()
            .iter()
            .map(|a| a.appointment_id)
            .collect();
        assert_eq!(ids, vec![11]);
    }
}
