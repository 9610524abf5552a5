//! Pagination bookkeeping for both list surfaces: the cursor-driven store
//! query (all published articles) and the in-memory slicing used by the
//! category view.

use crate::firestore::QueryCursor;

/// Fixed page size for the article list surfaces.
pub const PAGE_SIZE: usize = 6;

/// Cursor bookkeeping for the store-backed list.
///
/// One cursor is kept per fetched page, so "previous" replays the exact
/// query that produced the earlier page instead of restarting from page one.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPager {
    page_size: usize,
    current_page: usize,
    cursors: Vec<QueryCursor>,
    has_more: bool,
}

impl CursorPager {
    pub fn new(page_size: usize) -> Self {
        CursorPager {
            page_size: page_size.max(1),
            current_page: 1,
            cursors: Vec::new(),
            has_more: true,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 1-indexed page most recently recorded.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// True while the last fetch returned a full page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Cursor the query for `page` must start after; `None` for page one.
    pub fn cursor_for(&self, page: usize) -> Option<&QueryCursor> {
        if page <= 1 {
            None
        } else {
            self.cursors.get(page - 2)
        }
    }

    /// Record a completed fetch for `page`: how many items came back and the
    /// cursor after the page's last document.
    pub fn record_page(&mut self, page: usize, item_count: usize, last: Option<QueryCursor>) {
        self.current_page = page.max(1);
        self.has_more = item_count == self.page_size;
        self.cursors.truncate(self.current_page - 1);
        if item_count > 0 {
            if let Some(cursor) = last {
                self.cursors.push(cursor);
            }
        } else {
            self.has_more = false;
        }
    }

    pub fn reset(&mut self) {
        *self = CursorPager::new(self.page_size);
    }
}

/// Total page count for an in-memory list; an empty list still renders one
/// (empty-state) page.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if len == 0 {
        1
    } else {
        let numerator = len.saturating_add(per_page - 1);
        usize::max(numerator / per_page, 1)
    }
}

pub fn clamp_page(page: usize, total: usize) -> usize {
    page.max(1).min(total.max(1))
}

/// Half-open index bounds `[(page-1)*per_page, page*per_page)` clamped to the
/// list.
pub fn slice_bounds(len: usize, page: usize, per_page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let page = clamp_page(page, total_pages(len, per_page));
    let start = per_page.saturating_mul(page - 1).min(len);
    let end = start.saturating_add(per_page).min(len);
    (start, end)
}

/// Whether a further in-memory page exists after `page`.
pub fn has_more_pages(page: usize, len: usize, per_page: usize) -> bool {
    len > 0 && page < total_pages(len, per_page)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::firestore::cursor_from_document;

    fn cursor(n: usize) -> QueryCursor {
        let doc = json!({
            "name": format!("projects/p/databases/(default)/documents/articles/doc{n}"),
            "createTime": format!("2026-01-{:02}T00:00:00Z", n + 1),
        });
        cursor_from_document(&doc).expect("fixture cursor derives")
    }

    // Walk a simulated store of `total` items through the pager, mimicking the
    // list view's fetch loop.
    fn fetch(pager: &CursorPager, page: usize, total: usize) -> (usize, Option<QueryCursor>) {
        let start = match pager.cursor_for(page) {
            None => 0,
            Some(c) => {
                // Recover the simulated offset from the fixture doc name.
                let id = (1..=total)
                    .find(|n| cursor(*n) == *c)
                    .expect("cursor refers to a known item");
                id
            }
        };
        let count = total.saturating_sub(start).min(PAGE_SIZE);
        let last = if count > 0 { Some(cursor(start + count)) } else { None };
        (count, last)
    }

    #[test]
    fn visits_ceil_n_over_page_size_pages() {
        let total = 14; // 3 pages of 6/6/2
        let mut pager = CursorPager::new(PAGE_SIZE);
        let mut pages_visited = 0;
        let mut page = 1;
        loop {
            let (count, last) = fetch(&pager, page, total);
            pager.record_page(page, count, last);
            if count > 0 {
                pages_visited += 1;
            }
            if !pager.has_more() {
                break;
            }
            page += 1;
        }
        assert_eq!(pages_visited, 3);
        assert!(!pager.has_more());
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn exact_multiple_needs_one_empty_probe_page() {
        // 12 items: pages 1 and 2 are full, so has_more stays true until the
        // empty third fetch clears it.
        let total = 12;
        let mut pager = CursorPager::new(PAGE_SIZE);
        for page in 1..=2 {
            let (count, last) = fetch(&pager, page, total);
            pager.record_page(page, count, last);
            assert_eq!(count, PAGE_SIZE);
            assert!(pager.has_more());
        }
        let (count, last) = fetch(&pager, 3, total);
        pager.record_page(3, count, last);
        assert_eq!(count, 0);
        assert!(!pager.has_more());
    }

    #[test]
    fn empty_store_disables_forward_navigation() {
        let mut pager = CursorPager::new(PAGE_SIZE);
        let (count, last) = fetch(&pager, 1, 0);
        pager.record_page(1, count, last);
        assert!(!pager.has_more());
        assert!(!pager.has_previous());
    }

    #[test]
    fn previous_replays_the_recorded_cursor() {
        let total = 20;
        let mut pager = CursorPager::new(PAGE_SIZE);
        for page in 1..=3 {
            let (count, last) = fetch(&pager, page, total);
            pager.record_page(page, count, last);
        }
        assert_eq!(pager.current_page(), 3);
        assert!(pager.has_previous());

        // Page 2 starts after the cursor recorded for page 1.
        assert_eq!(pager.cursor_for(2), Some(&cursor(6)));
        let (count, last) = fetch(&pager, 2, total);
        assert_eq!(count, PAGE_SIZE);
        pager.record_page(2, count, last);
        assert_eq!(pager.current_page(), 2);

        // And forward again lands on the same page 3 cursor.
        assert_eq!(pager.cursor_for(3), Some(&cursor(12)));
    }

    #[test]
    fn reset_returns_to_page_one() {
        let mut pager = CursorPager::new(PAGE_SIZE);
        let (count, last) = fetch(&pager, 1, 9);
        pager.record_page(1, count, last);
        pager.reset();
        assert_eq!(pager.current_page(), 1);
        assert!(pager.cursor_for(2).is_none());
        assert!(pager.has_more());
    }

    #[test]
    fn slices_partition_without_repeats_or_gaps() {
        for total in [0usize, 1, 5, 6, 7, 12, 13, 25] {
            let items: Vec<usize> = (0..total).collect();
            let pages = total_pages(total, PAGE_SIZE);
            let expected_pages = if total == 0 { 1 } else { total.div_ceil(PAGE_SIZE) };
            assert_eq!(pages, expected_pages);

            let mut seen = Vec::new();
            for page in 1..=pages {
                let (start, end) = slice_bounds(total, page, PAGE_SIZE);
                seen.extend_from_slice(&items[start..end]);
            }
            assert_eq!(seen, items, "total={total}");
        }
    }

    #[test]
    fn has_more_pages_matches_the_ceiling_rule() {
        assert!(has_more_pages(1, 7, PAGE_SIZE));
        assert!(!has_more_pages(2, 7, PAGE_SIZE));
        assert!(!has_more_pages(1, 6, PAGE_SIZE));
        assert!(!has_more_pages(1, 0, PAGE_SIZE));
    }

    #[test]
    fn out_of_range_pages_clamp_into_the_list() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(slice_bounds(5, 99, PAGE_SIZE), (0, 5));
    }
}
