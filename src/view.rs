use serde::{Deserialize, Serialize};

use crate::domain::{Group, Record};

/// What the attendance list is currently showing
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub group: Group,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub eligible_only: bool,
}

impl ListQuery {
    pub fn new(group: Group) -> Self {
        Self {
            group,
            search: String::new(),
            eligible_only: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub records: Vec<Record>,
    /// Eligible records among the group's name matches, before the eligible-only toggle
    pub eligible_count: usize,
    /// All of the group's name matches, before the eligible-only toggle
    pub total_count: usize,
}

pub fn filter_records(records: &[Record], query: &ListQuery) -> ListView {
    let needle = query.search.to_lowercase();
    let matched: Vec<&Record> = records
        .iter()
        .filter(|r| r.group == query.group)
        .filter(|r| r.display_name.to_lowercase().contains(&needle))
        .collect();

    let eligible_count = matched.iter().filter(|r| r.is_eligible).count();
    let total_count = matched.len();

    let records = matched
        .into_iter()
        .filter(|r| !query.eligible_only || r.is_eligible)
        .cloned()
        .collect();

    ListView {
        records,
        eligible_count,
        total_count,
    }
}
