use std::ops::Range;

/// Number of pages needed for `total` matches; never less than one.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// The slice of the match list shown for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_count: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Compute the window for `page`, clamping it into range.
    #[must_use]
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = page_count(total, page_size);
        let page = page.min(page_count - 1);
        let start = (page * page_size).min(total);
        let end = start.saturating_add(page_size).min(total);
        Self {
            page,
            page_count,
            start,
            end,
        }
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_still_has_one_page() {
        assert_eq!(page_count(0, 10), 1);
        let window = PageWindow::new(0, 3, 10);
        assert_eq!(window.page, 0);
        assert!(window.is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(4, 2), 2);
        assert_eq!(page_count(1, 1), 1);
    }

    #[test]
    fn window_bounds_hold_for_small_grid() {
        for total in 0..12 {
            for size in 1..6 {
                for page in 0..8 {
                    let window = PageWindow::new(total, page, size);
                    assert_eq!(window.page_count, page_count(total, size));
                    assert!(window.page < window.page_count);
                    assert!(window.len() <= size);
                    assert!(window.end <= total);
                }
            }
        }
    }

    #[test]
    fn last_page_is_partial() {
        let window = PageWindow::new(5, 2, 2);
        assert_eq!(window.range(), 4..5);
    }
}
