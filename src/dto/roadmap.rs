//! DTOs for the training roadmap pages.

use serde::Deserialize;

use crate::domain::catalog::{Course, Major};
use crate::domain::roadmap::{Roadmap, RoadmapItem};
use crate::listing::Sort;
use crate::pagination::Paginated;
use crate::repository::{RoadmapFilters, RoadmapListQuery};

/// Query parameters accepted by the roadmaps page.
#[derive(Debug, Default, Deserialize)]
pub struct RoadmapListParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub sort: Option<String>,
    #[serde(default)]
    pub desc: bool,
    pub major_id: Option<i32>,
    pub is_active: Option<bool>,
}

impl RoadmapListParams {
    pub fn into_query(self) -> RoadmapListQuery {
        let mut query = RoadmapListQuery::new().apply_filters(RoadmapFilters {
            major_id: self.major_id,
            is_active: self.is_active,
        });
        if let Some(q) = self.q {
            query = query.with_search(q);
        }
        if let Some(key) = self.sort {
            query = query.with_sort(Some(Sort {
                key,
                descending: self.desc,
            }));
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

/// Data required to render the roadmaps page.
#[derive(Debug)]
pub struct RoadmapsPageData {
    pub roadmaps: Paginated<Roadmap>,
    pub majors: Vec<Major>,
    pub search_query: Option<String>,
    pub sort: Option<Sort>,
    pub filters: RoadmapFilters,
}

/// Aggregated data required to render the roadmap editor page.
#[derive(Debug)]
pub struct RoadmapPageData {
    pub roadmap: Roadmap,
    pub major: Option<Major>,
    pub items: Vec<(RoadmapItem, Course)>,
    /// All active courses available for the plan editor.
    pub courses: Vec<Course>,
}
