use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Patient;
use crate::store::RecordStore;
use tracing::debug;

/// Patients whose name contains `term`, ignoring case.
pub fn patients_by_name(store: &RecordStore, term: &str) -> Result<CmdResult<Patient>> {
    let term_lower = term.to_lowercase();
    let matches: Vec<Patient> = store
        .list::<Patient>()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term_lower))
        .cloned()
        .collect();
    debug!(term, matches = matches.len(), "patient name search");

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No patients found matching '{}'",
            term
        )));
    }
    Ok(result.with_listed(matches))
}
