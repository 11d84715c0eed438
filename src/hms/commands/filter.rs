use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Doctor, InventoryItem, Staff};
use crate::store::{RecordStore, Stored};
use tracing::debug;

pub fn staff_by_role(store: &RecordStore, role: &str) -> Result<CmdResult<Staff>> {
    let matches = matching(store, |s: &Staff| eq_ignore_case(&s.role, role));
    debug!(role, matches = matches.len(), "staff role filter");
    Ok(with_empty_note(
        matches,
        format!("No staff members found with role '{}'", role),
    ))
}

pub fn doctors_by_designation(
    store: &RecordStore,
    designation: &str,
) -> Result<CmdResult<Doctor>> {
    let matches = matching(store, |d: &Doctor| {
        eq_ignore_case(&d.designation, designation)
    });
    debug!(designation, matches = matches.len(), "doctor designation filter");
    Ok(with_empty_note(
        matches,
        format!("No doctors found with designation '{}'", designation),
    ))
}

/// Items whose quantity is strictly below `threshold`.
pub fn low_stock(store: &RecordStore, threshold: i64) -> Result<CmdResult<InventoryItem>> {
    let matches = matching(store, |i: &InventoryItem| i.quantity < threshold);
    debug!(threshold, matches = matches.len(), "low stock filter");
    Ok(with_empty_note(
        matches,
        format!("No items with stock below {}", threshold),
    ))
}

fn matching<R: Stored>(store: &RecordStore, pred: impl Fn(&R) -> bool) -> Vec<R> {
    store.list::<R>().iter().filter(|r| pred(*r)).cloned().collect()
}

// Full Unicode lowercasing on both sides, not ASCII-only folding.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn with_empty_note<R>(matches: Vec<R>, note: String) -> CmdResult<R> {
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(note));
    }
    result.with_listed(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn role_filter_ignores_case() {
        let store = StoreFixture::new()
            .with_staff(1, "Joy", "nurse")
            .with_staff(2, "Ade", "Porter")
            .with_staff(3, "Kim", "NURSE")
            .store;

        let result = staff_by_role(&store, "Nurse").unwrap();
        let ids: Vec<_> = result.listed.iter().map(|s| s.staff_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn role_filter_is_exact_not_substring() {
        let store = StoreFixture::new()
            .with_staff(1, "Joy", "head nurse")
            .store;
        let result = staff_by_role(&store, "nurse").unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn designation_filter_ignores_case() {
        let store = StoreFixture::new()
            .with_doctor(1, "House", "Diagnostician")
            .with_doctor(2, "Grey", "Surgeon")
            .store;

        let result = doctors_by_designation(&store, "surgeon").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Grey");
    }

    #[test]
    fn low_stock_excludes_threshold() {
        let store = StoreFixture::new()
            .with_item(1, "gauze", 5)
            .with_item(2, "saline", 10)
            .with_item(3, "gloves", 15)
            .store;

        let result = low_stock(&store, 10).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].item_id, 1);
    }

    #[test]
    fn low_stock_on_empty_inventory() {
        let store = RecordStore::new();
        let result = low_stock(&store, 10).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages[0].content.contains("below 10"));
    }
}
