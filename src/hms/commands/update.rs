use crate::commands::{id_label, CmdMessage, CmdResult, DoctorUpdate, InventoryUpdate};
use crate::error::Result;
use crate::model::{Doctor, InventoryItem, Record, RecordId};
use crate::store::RecordStore;
use tracing::{info, warn};

pub fn doctor(
    store: &mut RecordStore,
    doctor_id: RecordId,
    update: &DoctorUpdate,
) -> Result<CmdResult<Doctor>> {
    let doctor = store.get_mut::<Doctor>(doctor_id).inspect_err(|_| {
        warn!(key = doctor_id, "doctor update targets a missing key");
    })?;

    let mut changed = Vec::new();
    if apply_text(&mut doctor.name, update.name.as_deref()) {
        changed.push("name");
    }
    if apply_text(&mut doctor.designation, update.designation.as_deref()) {
        changed.push("designation");
    }
    if apply_text(&mut doctor.phone, update.phone.as_deref()) {
        changed.push("phone");
    }

    let snapshot = doctor.clone();
    Ok(finish(snapshot, doctor_id, &changed))
}

pub fn inventory(
    store: &mut RecordStore,
    item_id: RecordId,
    update: &InventoryUpdate,
) -> Result<CmdResult<InventoryItem>> {
    let item = store.get_mut::<InventoryItem>(item_id).inspect_err(|_| {
        warn!(key = item_id, "inventory update targets a missing key");
    })?;

    let mut changed = Vec::new();
    if apply_text(&mut item.item_name, update.item_name.as_deref()) {
        changed.push("item name");
    }
    if let Some(quantity) = update.quantity {
        item.quantity = quantity;
        changed.push("quantity");
    }

    let snapshot = item.clone();
    Ok(finish(snapshot, item_id, &changed))
}

/// Overwrites `field` unless `value` is absent or empty. Returns whether it wrote.
fn apply_text(field: &mut String, value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.is_empty() => {
            *field = v.to_string();
            true
        }
        _ => false,
    }
}

fn finish<R: Record>(record: R, key: RecordId, changed: &[&str]) -> CmdResult<R> {
    let message = if changed.is_empty() {
        CmdMessage::warning(format!(
            "{} unchanged ({}): {}",
            R::KIND,
            id_label(key),
            record.summary()
        ))
    } else {
        info!(kind = %R::KIND, key, fields = ?changed, "record updated");
        CmdMessage::success(format!(
            "{} updated ({}): {}",
            R::KIND,
            id_label(key),
            changed.join(", ")
        ))
    };
    CmdResult::default()
        .with_affected(vec![record])
        .with_message(message)
}
