// src/domain/pagination.rs
//! Page-number pagination with forgiving page lookups: a malformed page
//! number yields the first page and an out-of-range one the last page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    requested: Option<i64>,
    per_page: u32,
}

impl PageRequest {
    pub fn new(number: i64, per_page: u32) -> Self {
        Self {
            requested: Some(number),
            per_page: per_page.max(1),
        }
    }

    pub fn first(per_page: u32) -> Self {
        Self {
            requested: None,
            per_page: per_page.max(1),
        }
    }

    /// Parse a raw `?page=` value. Anything that is not an integer means page one.
    pub fn parse(raw: Option<&str>, per_page: u32) -> Self {
        Self {
            requested: raw.and_then(|value| value.trim().parse::<i64>().ok()),
            per_page: per_page.max(1),
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn resolve(&self, total: u64) -> PageWindow {
        let per_page = u64::from(self.per_page);
        let num_pages = total.div_ceil(per_page).max(1);
        let number = match self.requested {
            None => 1,
            Some(n) if n >= 1 && (n as u64) <= num_pages => n as u64,
            Some(_) => num_pages,
        };

        PageWindow {
            number: u32::try_from(number).unwrap_or(u32::MAX),
            num_pages: u32::try_from(num_pages).unwrap_or(u32::MAX),
            offset: (number - 1) * per_page,
            limit: self.per_page,
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u32,
    pub num_pages: u32,
    pub offset: u64,
    pub limit: u32,
    pub total: u64,
}

impl PageWindow {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}
