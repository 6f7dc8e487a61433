use crate::domain::pagination::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of results plus the navigation data templates need.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub num_pages: u32,
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: &PageWindow) -> Self {
        let has_previous = window.has_previous();
        let has_next = window.has_next();
        Self {
            items,
            number: window.number,
            num_pages: window.num_pages,
            total: window.total,
            has_previous,
            has_next,
            previous_page: has_previous.then(|| window.number - 1),
            next_page: has_next.then(|| window.number + 1),
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            number: 1,
            num_pages: 1,
            total: 0,
            has_previous: false,
            has_next: false,
            previous_page: None,
            next_page: None,
        }
    }
}
