use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, Stored};

pub fn run<R: Stored>(store: &RecordStore) -> Result<CmdResult<R>> {
    let listed = store.list::<R>().to_vec();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} records",
            R::KIND.label().to_lowercase()
        )));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Appointment, InventoryItem};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new()
            .with_appointment(30, 1, 1)
            .with_appointment(10, 2, 1)
            .with_appointment(20, 3, 1)
            .store;

        let result = run::<Appointment>(&store).unwrap();
        let ids: Vec<_> = result.listed.iter().map(|a| a.appointment_id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_collection_gets_a_note() {
        let store = RecordStore::new();
        let result = run::<InventoryItem>(&store).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "No inventory item records");
    }
}
