pub mod report;
pub mod search;
pub mod summary;

use std::path::Path;

use crate::ClientResult;
use crate::ledger::load_ledger;
use crate::transactions::normalize::normalize_ledger;
use crate::transactions::types::Ledger;

pub(crate) fn load_normalized(path: &Path) -> ClientResult<Ledger> {
    let raw = load_ledger(path)?;
    Ok(normalize_ledger(&raw))
}
