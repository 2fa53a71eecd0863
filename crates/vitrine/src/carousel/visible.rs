//! Mapping from visible positions to source rows.

use super::search::FilterFn;

/// Rows of the source list that pass the current filter, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VisibleRows {
    /// Mapping from visible position to source row index.
    visible_to_source: Vec<usize>,
}

impl VisibleRows {
    /// Recompute the mapping for `items` under `filter`.
    pub(crate) fn rebuild<T>(&mut self, items: &[T], filter: Option<&FilterFn<T>>) {
        self.visible_to_source.clear();
        match filter {
            Some(keep) => self.visible_to_source.extend(
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| keep(*item))
                    .map(|(row, _)| row),
            ),
            None => self.visible_to_source.extend(0..items.len()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.visible_to_source.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.visible_to_source.is_empty()
    }

    pub(crate) fn source_row(&self, position: usize) -> Option<usize> {
        self.visible_to_source.get(position).copied()
    }

    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.visible_to_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_identity_mapping() {
        let mut rows = VisibleRows::default();
        rows.rebuild(&["a", "b", "c"], None);
        assert_eq!(rows.as_slice(), &[0, 1, 2]);
        assert_eq!(rows.source_row(2), Some(2));
        assert_eq!(rows.source_row(3), None);
    }

    #[test]
    fn test_filtered_mapping_preserves_order() {
        let keep_even: FilterFn<u32> = Arc::new(|n: &u32| n % 2 == 0);
        let mut rows = VisibleRows::default();
        rows.rebuild(&[1, 2, 3, 4, 6, 7], Some(&keep_even));
        assert_eq!(rows.as_slice(), &[1, 3, 4]);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_rebuild_replaces_previous_mapping() {
        let none: FilterFn<u32> = Arc::new(|_: &u32| false);
        let mut rows = VisibleRows::default();
        rows.rebuild(&[1, 2, 3], None);
        rows.rebuild(&[1, 2, 3], Some(&none));
        assert!(rows.is_empty());
    }
}
