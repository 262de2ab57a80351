//! The paginated envelope returned by every list endpoint.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

fn get_pages(
    total_pages: u32,
    current_page: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page numbers to render in pagination controls; `None` marks an elided gap.
pub fn page_links(total_pages: u32, current_page: u32) -> Vec<Option<u32>> {
    get_pages(total_pages, current_page.max(1), 2, 2, 4, 2)
}

/// One page of `T` plus the position of that page in the full result set.
///
/// `has_next == (page < total_pages)` and `has_previous == (page > 1)` always
/// hold for values built through [`Page::new`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u32, size: u32, total: u64) -> Self {
        let info = PageInfo::new(page, size, total);
        Self {
            content,
            page: info.page,
            size: info.size,
            total: info.total,
            total_pages: info.total_pages,
            has_next: info.has_next,
            has_previous: info.has_previous,
        }
    }

    /// Cuts page `page` of `size` items out of an already filtered and sorted list.
    pub fn slice(items: Vec<T>, page: u32, size: u32) -> Self {
        let page = page.max(1);
        let size = size.max(1);
        let total = items.len() as u64;
        let start = (page as usize - 1).saturating_mul(size as usize);
        let content = items.into_iter().skip(start).take(size as usize).collect();
        Self::new(content, page, size, total)
    }

    /// Pagination fields without the content.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            size: self.size,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }

    pub fn into_parts(self) -> (Vec<T>, PageInfo) {
        let info = self.info();
        (self.content, info)
    }
}

/// The pagination half of a [`Page`], kept by list state between fetches.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    pub fn new(page: u32, size: u32, total: u64) -> Self {
        let page = if page == 0 { 1 } else { page };
        let size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
        let total_pages = u32::try_from(total.div_ceil(u64::from(size))).unwrap_or(u32::MAX);

        Self {
            page,
            size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// 1-based inclusive bounds of the rows on this page, `None` when empty.
    pub fn range_label(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let page = self.page.max(1);
        let first = u64::from(page - 1) * u64::from(self.size) + 1;
        if first > self.total {
            return None;
        }
        let last = (u64::from(page) * u64::from(self.size)).min(self.total);
        Some((first, last))
    }

    pub fn links(&self) -> Vec<Option<u32>> {
        page_links(self.total_pages, self.page)
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            total: 0,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_flags_follow_page_position() {
        for total in [0u64, 1, 19, 20, 21, 40, 41, 999] {
            for size in [20u32, 50] {
                let total_pages = total.div_ceil(u64::from(size)) as u32;
                for page in 1..=total_pages.max(1) + 1 {
                    let info = PageInfo::new(page, size, total);
                    assert_eq!(info.total_pages, total_pages);
                    assert_eq!(info.has_next, page < total_pages, "page {page} of {total}");
                    assert_eq!(info.has_previous, page > 1);
                }
            }
        }
    }

    #[test]
    fn slice_never_exceeds_page_size() {
        let items: Vec<u32> = (1..=45).collect();

        let first = Page::slice(items.clone(), 1, 20);
        assert_eq!(first.content, (1..=20).collect::<Vec<_>>());
        assert_eq!(first.total, 45);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let last = Page::slice(items.clone(), 3, 20);
        assert_eq!(last.content, (41..=45).collect::<Vec<_>>());
        assert!(!last.has_next);
        assert!(last.has_previous);

        let beyond = Page::slice(items, 9, 20);
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.total, 45);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page: Page<u32> = Page::slice(Vec::new(), 1, 20);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
        assert_eq!(page.info().range_label(), None);
        assert!(page.info().links().is_empty());
    }

    #[test]
    fn range_label_covers_partial_last_page() {
        assert_eq!(PageInfo::new(1, 20, 45).range_label(), Some((1, 20)));
        assert_eq!(PageInfo::new(3, 20, 45).range_label(), Some((41, 45)));
    }

    #[test]
    fn range_label_treats_page_zero_as_first_page() {
        let json = r#"{"page":0,"size":20,"total":5,"totalPages":1,"hasNext":false,"hasPrevious":false}"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.range_label(), Some((1, 5)));
    }

    #[test]
    fn page_links_elide_distant_pages() {
        assert_eq!(
            page_links(5, 1),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(
            page_links(20, 10),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn page_deserializes_backend_envelope() {
        let json = r#"{"content":[1,2],"page":2,"size":20,"total":22,"totalPages":2,"hasNext":false,"hasPrevious":true}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page, Page::new(vec![1, 2], 2, 20, 22));
    }
}
