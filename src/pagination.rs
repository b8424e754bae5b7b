//! Pagination Math
//!
//! Page-count derivation and the visible-page windowing used by the
//! pagination control: first and last page pinned, a window around the
//! current page, ellipses for the gaps.

/// Fixed page size for every list view
pub const PAGE_SIZE: u32 = 10;

/// Max page buttons shown before windowing kicks in
const MAX_VISIBLE: u32 = 5;

pub fn total_pages(total: u64) -> u32 {
    total.div_ceil(PAGE_SIZE as u64) as u32
}

pub fn skip_for_page(page: u32) -> u32 {
    (page.max(1) - 1) * PAGE_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Window of pages to render for the given current page.
pub fn visible_pages(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut pages = vec![PageItem::Page(1)];

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        pages.push(PageItem::Ellipsis);
    }
    for page in start..=end {
        pages.push(PageItem::Page(page));
    }
    if end < total_pages - 1 {
        pages.push(PageItem::Ellipsis);
    }

    pages.push(PageItem::Page(total_pages));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(95), 10);
    }

    #[test]
    fn test_skip_for_page() {
        assert_eq!(skip_for_page(1), 0);
        assert_eq!(skip_for_page(3), 20);
        // page 0 should never reach here, but must not underflow
        assert_eq!(skip_for_page(0), 0);
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(visible_pages(1, 0), vec![]);
        assert_eq!(
            visible_pages(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            visible_pages(1, 9),
            vec![Page(1), Page(2), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            visible_pages(5, 9),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            visible_pages(9, 9),
            vec![Page(1), Ellipsis, Page(8), Page(9)]
        );
    }
}
