/// Records shown per listing page.
pub const PAGE_SIZE: u32 = 20;

/// Page arithmetic for the listing view. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: PAGE_SIZE,
            total,
        }
    }

    /// Rows to skip before this page: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// `ceil(total / page_size)`, zero when there are no records.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Page count shown to the reader; never less than 1.
    pub fn display_pages(&self) -> u64 {
        self.total_pages().max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

/// Parse the `page` query value the way an integer-prefix parse would:
/// leading whitespace is skipped and the leading digits are taken.
/// Anything without leading digits, and anything below 1, is page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else { return 1 };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(page) => page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_page_size() {
        assert_eq!(Pagination::new(1, 0).offset(), 0);
        assert_eq!(Pagination::new(2, 0).offset(), 20);
        assert_eq!(Pagination::new(3, 0).offset(), 40);
        // Clamped page
        assert_eq!(Pagination::new(0, 0).offset(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 0).total_pages(), 0);
        assert_eq!(Pagination::new(1, 1).total_pages(), 1);
        assert_eq!(Pagination::new(1, 20).total_pages(), 1);
        assert_eq!(Pagination::new(1, 21).total_pages(), 2);
        assert_eq!(Pagination::new(1, 45).total_pages(), 3);
    }

    #[test]
    fn display_pages_floors_to_one() {
        assert_eq!(Pagination::new(1, 0).display_pages(), 1);
        assert_eq!(Pagination::new(1, 41).display_pages(), 3);
    }

    #[test]
    fn navigation_is_disabled_at_boundaries() {
        let first = Pagination::new(1, 45);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination::new(3, 45);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let empty = Pagination::new(1, 0);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
    }

    #[test]
    fn parse_page_defaults_and_prefixes() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 4")), 4);
        assert_eq!(parse_page(Some("5abc")), 5);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some("99999999999999")), 1);
    }
}
