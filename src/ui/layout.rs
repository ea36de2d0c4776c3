//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! All coordinates are zero-based cells, matching crossterm mouse events. The
//! canvas converts them to one-based ANSI cursor positions when drawing.
//!
//! ```text
//! row 0   [blank]
//! row 1   [Header]
//! row 2   [Border]
//! row 3   [margin] ┌──────────────┐ [margin]   ← search bar (3 rows)
//! row 4   [margin] │ Search: ...  │
//! row 5   [margin] └──────────────┘
//! row 6   [margin] │ name         │            ← dropdown, top = search bottom edge
//!         [margin] │ email        │               two rows per suggestion
//!         [margin] └──────────────┘
//!  ...
//! rows-3  [Status]
//! rows-2  [Border]
//! rows-1  [Footer]
//! ```

/// Horizontal margin around the search box (spaces on left and right).
pub const SEARCH_BOX_MARGIN: usize = 5;

/// Rows used by one dropdown suggestion (name, email).
pub const ROWS_PER_SUGGESTION: usize = 2;

const HEADER_ROW: usize = 1;
const SEARCH_BAR_TOP: usize = 3;
const SEARCH_BAR_HEIGHT: usize = 3;

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height
    }

    #[must_use]
    pub const fn right(&self) -> usize {
        self.left + self.width
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row < self.bottom() && col >= self.left && col < self.right()
    }
}

/// Fixed screen regions for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn header_row(&self) -> usize {
        HEADER_ROW
    }

    #[must_use]
    pub const fn search_bar(&self) -> Rect {
        Rect {
            top: SEARCH_BAR_TOP,
            left: SEARCH_BOX_MARGIN,
            width: self.cols.saturating_sub(SEARCH_BOX_MARGIN * 2),
            height: SEARCH_BAR_HEIGHT,
        }
    }

    #[must_use]
    pub const fn status_row(&self) -> usize {
        self.rows.saturating_sub(3)
    }

    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Number of suggestions that fit between the search bar and the status line.
    #[must_use]
    pub const fn dropdown_capacity(&self) -> usize {
        let top = self.search_bar().bottom();
        // One row is kept for the dropdown's bottom border.
        self.status_row().saturating_sub(top + 1) / ROWS_PER_SUGGESTION
    }

    /// Dropdown rectangle for `items` suggestions, directly below the search bar
    /// with the same left edge and width.
    #[must_use]
    pub const fn dropdown(&self, items: usize) -> Rect {
        let bar = self.search_bar();
        Rect {
            top: bar.bottom(),
            left: bar.left,
            width: bar.width,
            height: items * ROWS_PER_SUGGESTION + 1,
        }
    }

    /// Row of the first line of suggestion `index` inside `dropdown`.
    #[must_use]
    pub const fn suggestion_row(dropdown: &Rect, index: usize) -> usize {
        dropdown.top + index * ROWS_PER_SUGGESTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_sits_on_the_search_bar_bottom_edge() {
        let layout = Layout::new(24, 80);
        let bar = layout.search_bar();
        let dropdown = layout.dropdown(3);

        assert_eq!(dropdown.top, bar.bottom());
        assert_eq!(dropdown.left, bar.left);
        assert_eq!(dropdown.width, bar.width);
        assert_eq!(dropdown.height, 7);
    }

    #[test]
    fn capacity_shrinks_on_short_terminals() {
        assert_eq!(Layout::new(24, 80).dropdown_capacity(), 7);
        assert_eq!(Layout::new(12, 80).dropdown_capacity(), 1);
        assert_eq!(Layout::new(5, 80).dropdown_capacity(), 0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect {
            top: 2,
            left: 3,
            width: 4,
            height: 2,
        };
        assert!(rect.contains(2, 3));
        assert!(rect.contains(3, 6));
        assert!(!rect.contains(4, 3));
        assert!(!rect.contains(2, 7));
    }
}
