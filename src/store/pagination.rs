use serde::Serialize;

use crate::player::Player;

/// One page of players plus the navigation state around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub players: Vec<Player>,
    /// 1-based page number after clamping
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
}

impl Page {
    /// Slice `records` for `page`. Pages and page sizes below 1 are clamped to 1;
    /// a page past the end yields an empty slice.
    pub fn from_records(records: Vec<Player>, page: i64, per_page: i64) -> Self {
        let page = clamp_to_positive(page);
        let per_page = clamp_to_positive(per_page);
        let total = records.len();

        let start = (page - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);

        let players: Vec<Player> = records
            .into_iter()
            .skip(start)
            .take(per_page)
            .collect();

        let has_next = end < total;
        let has_prev = start > 0;

        Self {
            players,
            page,
            per_page,
            total,
            has_next,
            has_prev,
            next_page: has_next.then(|| page + 1),
            prev_page: has_prev.then(|| page - 1),
        }
    }

    /// Number of pages needed to show every record (at least 1).
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }
}

fn clamp_to_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}
