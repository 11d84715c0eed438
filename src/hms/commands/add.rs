use crate::commands::{id_label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, Stored};
use tracing::{info, warn};

pub fn run<R: Stored>(store: &mut RecordStore, record: R) -> Result<CmdResult<R>> {
    let key = record.key();
    if let Err(e) = store.insert(record.clone()) {
        warn!(kind = %R::KIND, key, "rejected add: key already present");
        return Err(e);
    }
    info!(kind = %R::KIND, key, "record added");

    let message = CmdMessage::success(format!(
        "{} added ({}): {}",
        R::KIND,
        id_label(key),
        record.summary()
    ));
    Ok(CmdResult::default()
        .with_affected(vec![record])
        .with_message(message))
}
