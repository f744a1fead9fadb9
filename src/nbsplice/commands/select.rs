//! Choosing which cells to take from the source notebook.

use crate::error::{NbspliceError, Result};
use crate::model::Cell;
use crate::reference::{resolve, CellRef};

/// Exactly one way of picking cells out of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Cells named by index or id, kept in source order.
    Cells(Vec<CellRef>),
    /// Everything before the referenced cell.
    Before(CellRef),
    /// Everything after the referenced cell.
    After(CellRef),
    All,
    /// First `n` cells; negative `n` drops that many from the end.
    Top(i64),
    /// Last `n` cells; negative `n` drops that many from the front.
    Bottom(i64),
}

/// The selection criteria as they arrive from a flag-style interface,
/// where any subset may be filled in.
#[derive(Debug, Clone, Default)]
pub struct SelectionFlags {
    pub cells: Option<Vec<CellRef>>,
    pub before: Option<CellRef>,
    pub after: Option<CellRef>,
    pub all: bool,
    pub top: Option<i64>,
    pub bottom: Option<i64>,
}

impl SelectionFlags {
    /// Converts to a single [`Selection`]; exactly one criterion must be set.
    pub fn into_selection(self) -> Result<Selection> {
        let mut chosen = Vec::new();
        if let Some(refs) = self.cells.filter(|r| !r.is_empty()) {
            chosen.push(Selection::Cells(refs));
        }
        if let Some(r) = self.before {
            chosen.push(Selection::Before(r));
        }
        if let Some(r) = self.after {
            chosen.push(Selection::After(r));
        }
        if self.all {
            chosen.push(Selection::All);
        }
        if let Some(n) = self.top {
            chosen.push(Selection::Top(n));
        }
        if let Some(n) = self.bottom {
            chosen.push(Selection::Bottom(n));
        }

        match chosen.len() {
            1 => Ok(chosen.remove(0)),
            0 => Err(NbspliceError::Usage(
                "You must specify one of cell_ids_or_indexes, before_id_or_index, \
                 after_id_or_index, all_cells, top_n, or bottom_n"
                    .to_string(),
            )),
            n => Err(NbspliceError::Usage(format!(
                "Only one selection criterion may be given, got {}",
                n
            ))),
        }
    }
}

/// Returns the selected cells, in source order.
pub fn run(cells: &[Cell], selection: &Selection) -> Result<Vec<Cell>> {
    let range = match selection {
        Selection::Cells(refs) => return pick(cells, refs),
        Selection::Before(r) => 0..resolve(cells, r)?,
        Selection::After(r) => resolve(cells, r)? + 1..cells.len(),
        Selection::All => 0..cells.len(),
        Selection::Top(n) => {
            let len = cells.len();
            let count = clamp(n.unsigned_abs(), len);
            let end = if *n >= 0 { count } else { len - count };
            0..end
        }
        Selection::Bottom(n) => {
            let len = cells.len();
            let count = clamp(n.unsigned_abs(), len);
            let start = if *n >= 0 { len - count } else { count };
            start..len
        }
    };
    tracing::debug!(?selection, ?range, "selected contiguous range");
    Ok(cells[range].to_vec())
}

fn pick(cells: &[Cell], refs: &[CellRef]) -> Result<Vec<Cell>> {
    // every reference has to name a real cell before anything is returned
    for r in refs {
        resolve(cells, r)?;
    }
    let picked: Vec<Cell> = cells
        .iter()
        .enumerate()
        .filter(|(i, cell)| refs.iter().any(|r| r.matches(*i, cell)))
        .map(|(_, cell)| cell.clone())
        .collect();
    tracing::debug!(requested = refs.len(), picked = picked.len(), "picked cells");
    Ok(picked)
}

fn clamp(n: u64, len: usize) -> usize {
    usize::try_from(n).map_or(len, |n| n.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{cell_ids, test_cells};

    fn select(ids: &[&str], selection: Selection) -> Vec<String> {
        let cells = test_cells(ids);
        let out = run(&cells, &selection).unwrap();
        cell_ids(&out).into_iter().map(String::from).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        assert_eq!(select(&["a", "b", "c"], Selection::All), ["a", "b", "c"]);
        assert!(select(&[], Selection::All).is_empty());
    }

    #[test]
    fn before_id() {
        assert_eq!(
            select(&["a", "b", "c"], Selection::Before("c".into())),
            ["a", "b"]
        );
        assert!(select(&["a", "b", "c"], Selection::Before(CellRef::Index(0))).is_empty());
    }

    #[test]
    fn after_index() {
        assert_eq!(
            select(&["a", "b", "c", "d"], Selection::After(CellRef::Index(1))),
            ["c", "d"]
        );
        assert!(select(&["a", "b"], Selection::After("b".into())).is_empty());
    }

    #[test]
    fn top_n() {
        let ids = ["a", "b", "c", "d"];
        assert_eq!(select(&ids, Selection::Top(2)), ["a", "b"]);
        assert!(select(&ids, Selection::Top(0)).is_empty());
        assert_eq!(select(&ids, Selection::Top(10)), ids);
    }

    #[test]
    fn top_negative_drops_from_the_end() {
        let ids = ["a", "b", "c", "d"];
        assert_eq!(select(&ids, Selection::Top(-1)), ["a", "b", "c"]);
        assert!(select(&ids, Selection::Top(-4)).is_empty());
        assert!(select(&ids, Selection::Top(-9)).is_empty());
    }

    #[test]
    fn bottom_n() {
        let ids = ["a", "b", "c", "d"];
        assert_eq!(select(&ids, Selection::Bottom(2)), ["c", "d"]);
        assert!(select(&ids, Selection::Bottom(0)).is_empty());
        assert_eq!(select(&ids, Selection::Bottom(10)), ids);
    }

    #[test]
    fn bottom_negative_drops_from_the_front() {
        let ids = ["a", "b", "c", "d"];
        assert_eq!(select(&ids, Selection::Bottom(-1)), ["b", "c", "d"]);
        assert!(select(&ids, Selection::Bottom(-9)).is_empty());
        assert_eq!(
            select(&ids, Selection::Bottom(i64::MIN)),
            Vec::<String>::new()
        );
    }

    #[test]
    fn explicit_list_keeps_source_order() {
        let refs = vec!["c".into(), CellRef::Index(0), "b".into()];
        assert_eq!(
            select(&["a", "b", "c", "d"], Selection::Cells(refs)),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn explicit_list_includes_each_cell_once() {
        // index 1 and id "b" name the same cell
        let refs = vec![CellRef::Index(1), "b".into(), CellRef::Index(1)];
        assert_eq!(select(&["a", "b", "c"], Selection::Cells(refs)), ["b"]);
    }

    #[test]
    fn explicit_list_with_unknown_id_fails() {
        let cells = test_cells(&["a", "b"]);
        let refs = vec!["a".into(), "nope".into()];
        let err = run(&cells, &Selection::Cells(refs)).unwrap_err();
        assert!(matches!(err, NbspliceError::CellNotFound(CellRef::Id(_))));
    }

    #[test]
    fn unresolved_references_fail() {
        let cells = test_cells(&["a", "b"]);
        assert!(run(&cells, &Selection::Before("x".into())).is_err());
        assert!(run(&cells, &Selection::After(CellRef::Index(2))).is_err());
        assert!(run(&cells, &Selection::Cells(vec![CellRef::Index(5)])).is_err());
    }

    #[test]
    fn contiguous_selection_matches_slice() {
        let cells = test_cells(&["a", "b", "c", "d", "e"]);
        for k in 0..cells.len() {
            assert_eq!(run(&cells, &Selection::Before(k.into())).unwrap(), &cells[..k]);
            assert_eq!(run(&cells, &Selection::After(k.into())).unwrap(), &cells[k + 1..]);
        }
    }

    #[test]
    fn flags_require_exactly_one() {
        let err = SelectionFlags::default().into_selection().unwrap_err();
        assert!(matches!(err, NbspliceError::Usage(_)));

        let flags = SelectionFlags {
            all: true,
            top: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            flags.into_selection(),
            Err(NbspliceError::Usage(_))
        ));
    }

    #[test]
    fn flags_convert() {
        let flags = SelectionFlags {
            bottom: Some(-3),
            ..Default::default()
        };
        assert_eq!(flags.into_selection().unwrap(), Selection::Bottom(-3));

        let flags = SelectionFlags {
            cells: Some(vec![]),
            before: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(
            flags.into_selection().unwrap(),
            Selection::Before("x".into())
        );
    }
}
