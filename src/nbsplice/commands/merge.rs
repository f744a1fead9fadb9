use crate::commands::{insert, select, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NotebookStore;
use std::path::Path;

use super::insert::Placement;
use super::select::Selection;

/// Copies the selected cells of `source` into `dest` and saves `dest`.
///
/// Both notebooks are loaded before anything else happens, and `dest` is
/// only written once selection and insertion have both succeeded.
pub fn run<S: NotebookStore>(
    store: &mut S,
    source: &Path,
    dest: &Path,
    selection: &Selection,
    placement: &Placement,
) -> Result<CmdResult> {
    let source_nb = store.load(source)?;
    let mut dest_nb = store.load(dest)?;

    let extracted = select::run(source_nb.cells(), selection)?;
    let merged = insert::run(dest_nb.cells(), &extracted, placement)?;
    tracing::info!(
        extracted = extracted.len(),
        dest_len = merged.len(),
        "merged cells"
    );

    let dest_len = merged.len();
    dest_nb.set_cells(merged);
    store.save(dest, &dest_nb)?;

    let mut result = CmdResult::default().with_counts(extracted.len(), dest_len);
    if extracted.is_empty() {
        result.add_message(CmdMessage::warning("No cells matched the selection"));
    }
    result.add_message(CmdMessage::success(format!(
        "Extracted cells and added to {}",
        dest.display()
    )));
    Ok(result)
}
