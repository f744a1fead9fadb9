//! Splicing extracted cells into the destination notebook.

use crate::error::{NbspliceError, Result};
use crate::model::Cell;
use crate::reference::{resolve, CellRef};

/// Where the extracted cells go in the destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
    Before(CellRef),
    After(CellRef),
}

/// Placement options as they arrive from a flag-style interface.
#[derive(Debug, Clone, Default)]
pub struct PlacementFlags {
    pub before: Option<CellRef>,
    pub after: Option<CellRef>,
    pub top: bool,
    pub bottom: bool,
}

impl PlacementFlags {
    /// Converts to a single [`Placement`]. No flag means [`Placement::Bottom`];
    /// more than one is a usage error.
    pub fn into_placement(self) -> Result<Placement> {
        let given = [
            self.top,
            self.bottom,
            self.before.is_some(),
            self.after.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        if given > 1 {
            return Err(NbspliceError::Usage(format!(
                "Only one placement may be given, got {}",
                given
            )));
        }
        Ok(self.into_placement_by_priority())
    }

    /// Converts to a [`Placement`], honoring the first flag present in the
    /// order top, bottom, before, after, and falling back to bottom.
    pub fn into_placement_by_priority(self) -> Placement {
        if self.top {
            Placement::Top
        } else if self.bottom {
            Placement::Bottom
        } else if let Some(r) = self.before {
            Placement::Before(r)
        } else if let Some(r) = self.after {
            Placement::After(r)
        } else {
            Placement::Bottom
        }
    }
}

/// Returns the destination cells with `inserted` spliced in.
pub fn run(dest: &[Cell], inserted: &[Cell], placement: &Placement) -> Result<Vec<Cell>> {
    let at = match placement {
        Placement::Top => 0,
        Placement::Bottom => dest.len(),
        Placement::Before(r) => resolve(dest, r)?,
        Placement::After(r) => resolve(dest, r)? + 1,
    };
    tracing::debug!(?placement, at, count = inserted.len(), "inserting cells");

    let mut cells = Vec::with_capacity(dest.len() + inserted.len());
    cells.extend_from_slice(&dest[..at]);
    cells.extend_from_slice(inserted);
    cells.extend_from_slice(&dest[at..]);
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{cell_ids, test_cells};

    fn insert(dest: &[&str], new: &[&str], placement: Placement) -> Vec<String> {
        let out = run(&test_cells(dest), &test_cells(new), &placement).unwrap();
        cell_ids(&out).into_iter().map(String::from).collect()
    }

    #[test]
    fn top_prepends() {
        assert_eq!(
            insert(&["x", "y"], &["a", "b"], Placement::Top),
            ["a", "b", "x", "y"]
        );
    }

    #[test]
    fn bottom_appends() {
        assert_eq!(
            insert(&["x", "y"], &["a"], Placement::Bottom),
            ["x", "y", "a"]
        );
        assert_eq!(insert(&[], &["a", "b"], Placement::Bottom), ["a", "b"]);
    }

    #[test]
    fn default_is_bottom() {
        assert_eq!(Placement::default(), Placement::Bottom);
    }

    #[test]
    fn before_reference() {
        assert_eq!(
            insert(&["x", "y", "z"], &["a"], Placement::Before("y".into())),
            ["x", "a", "y", "z"]
        );
        assert_eq!(
            insert(&["x", "y"], &["a"], Placement::Before(CellRef::Index(0))),
            ["a", "x", "y"]
        );
    }

    #[test]
    fn after_reference() {
        assert_eq!(
            insert(&["x", "y"], &["a", "b"], Placement::After("x".into())),
            ["x", "a", "b", "y"]
        );
    }

    #[test]
    fn after_last_index_appends() {
        let dest = test_cells(&["x", "y", "z"]);
        let new = test_cells(&["a"]);
        let out = run(&dest, &new, &Placement::After(CellRef::Index(2))).unwrap();
        let expected: Vec<Cell> = dest.iter().chain(new.iter()).cloned().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn unresolved_reference_fails() {
        let dest = test_cells(&["x"]);
        let new = test_cells(&["a"]);
        assert!(matches!(
            run(&dest, &new, &Placement::Before("nope".into())),
            Err(NbspliceError::CellNotFound(_))
        ));
        assert!(matches!(
            run(&dest, &new, &Placement::After(CellRef::Index(1))),
            Err(NbspliceError::CellNotFound(_))
        ));
    }

    #[test]
    fn flags_default_to_bottom() {
        let placement = PlacementFlags::default().into_placement().unwrap();
        assert_eq!(placement, Placement::Bottom);
    }

    #[test]
    fn flags_reject_multiple() {
        let flags = PlacementFlags {
            top: true,
            after: Some("x".into()),
            ..Default::default()
        };
        assert!(matches!(
            flags.into_placement(),
            Err(NbspliceError::Usage(_))
        ));
    }

    #[test]
    fn flags_by_priority() {
        let flags = PlacementFlags {
            before: Some("b".into()),
            after: Some("a".into()),
            bottom: true,
            top: false,
        };
        assert_eq!(flags.clone().into_placement_by_priority(), Placement::Bottom);

        let flags = PlacementFlags {
            bottom: false,
            ..flags
        };
        assert_eq!(
            flags.into_placement_by_priority(),
            Placement::Before("b".into())
        );
    }
}
