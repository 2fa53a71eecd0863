//! Read models handed to view renderers.

/// Which way the last transition moved, for slide animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    /// Toward higher indices (or wrapping from last to first).
    #[default]
    Forward,
    /// Toward lower indices (or wrapping from first to last).
    Backward,
}

impl SlideDirection {
    /// `1` for forward, `-1` for backward; handy as an offset multiplier.
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Everything a renderer needs besides the item itself.
///
/// Snapshots are emitted through `CarouselController::changed` after every
/// transition and can also be taken on demand.
// Allow excessive bools: read-only UI snapshot with orthogonal flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselSnapshot {
    /// Position within the visible items; `None` when nothing is visible.
    pub current_index: Option<usize>,
    /// Number of items passing the filter.
    pub visible_count: usize,
    /// Number of loaded items.
    pub total_count: usize,
    /// Whether autoplay is running.
    pub is_playing: bool,
    /// Direction of the last transition.
    pub direction: SlideDirection,
    /// Whether a filter is applied.
    pub filter_active: bool,
}

impl CarouselSnapshot {
    /// Whether nothing is visible (the view shows its "no results" state).
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }

    /// Whether the pagination dot at `position` is the active one.
    pub fn is_active_dot(&self, position: usize) -> bool {
        self.current_index == Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(SlideDirection::Forward.sign(), 1);
        assert_eq!(SlideDirection::Backward.sign(), -1);
        assert_eq!(SlideDirection::default(), SlideDirection::Forward);
    }

    #[test]
    fn test_active_dot() {
        let snapshot = CarouselSnapshot {
            current_index: Some(1),
            visible_count: 3,
            total_count: 3,
            ..Default::default()
        };
        assert!(snapshot.is_active_dot(1));
        assert!(!snapshot.is_active_dot(0));
        assert!(!snapshot.is_empty());
        assert!(CarouselSnapshot::default().is_empty());
    }
}
