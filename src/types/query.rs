use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Mission;

/// Field a mission listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Title,
    Reward,
    Active,
    CreatedAt,
    CreatedBy,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Title,
        SortField::Reward,
        SortField::Active,
        SortField::CreatedAt,
        SortField::CreatedBy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Reward => "reward",
            SortField::Active => "active",
            SortField::CreatedAt => "createdAt",
            SortField::CreatedBy => "createdBy",
        }
    }

    /// Ascending comparison of two missions on this field.
    #[must_use]
    pub fn compare(self, a: &Mission, b: &Mission) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Reward => a.reward.total_cmp(&b.reward),
            SortField::Active => a.active.cmp(&b.active),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::CreatedBy => a.created_by.cmp(&b.created_by),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = SortField::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown sort field '{s}' (expected one of: {})", allowed.join(", "))
            })
    }
}

/// Listing options. Filtering happens before sorting, sorting before paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<NonZeroUsize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<NonZeroUsize>,
}

impl MissionQuery {
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn sort(mut self, field: SortField) -> Self {
        self.sort = Some(field);
        self
    }

    /// Sets a 1-indexed page. Zero for either argument clears paging.
    #[must_use]
    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = NonZeroUsize::new(page);
        self.page_size = NonZeroUsize::new(page_size);
        self
    }

    /// Range of the sorted, filtered sequence to return. `None` means all of it.
    #[must_use]
    pub fn window(&self) -> Option<(usize, usize)> {
        let (page, size) = (self.page?, self.page_size?);
        let start = (page.get() - 1).saturating_mul(size.get());
        Some((start, size.get()))
    }
}
