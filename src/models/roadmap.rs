use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::roadmap::{
    NewRoadmap as DomainNewRoadmap, Roadmap as DomainRoadmap, RoadmapItem as DomainRoadmapItem,
    UpdateRoadmap as DomainUpdateRoadmap,
};
use crate::models::catalog::Major;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Major))]
#[diesel(table_name = crate::schema::roadmaps)]
pub struct Roadmap {
    pub id: i32,
    pub major_id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::roadmaps)]
pub struct NewRoadmap<'a> {
    pub major_id: i32,
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::roadmaps)]
pub struct UpdateRoadmap<'a> {
    pub major_id: i32,
    pub name: &'a str,
}

impl From<Roadmap> for DomainRoadmap {
    fn from(row: Roadmap) -> Self {
        Self {
            id: row.id,
            major_id: row.major_id,
            name: row.name,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRoadmap> for NewRoadmap<'a> {
    fn from(value: &'a DomainNewRoadmap) -> Self {
        Self {
            major_id: value.major_id,
            name: &value.name,
        }
    }
}

impl<'a> From<&'a DomainUpdateRoadmap> for UpdateRoadmap<'a> {
    fn from(value: &'a DomainUpdateRoadmap) -> Self {
        Self {
            major_id: value.major_id,
            name: &value.name,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Roadmap))]
#[diesel(table_name = crate::schema::roadmap_items)]
pub struct RoadmapItem {
    pub id: i32,
    pub roadmap_id: i32,
    pub course_id: i32,
    pub semester_no: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::roadmap_items)]
pub struct NewRoadmapItem {
    pub roadmap_id: i32,
    pub course_id: i32,
    pub semester_no: i32,
}

impl From<RoadmapItem> for DomainRoadmapItem {
    fn from(row: RoadmapItem) -> Self {
        Self {
            id: row.id,
            roadmap_id: row.roadmap_id,
            course_id: row.course_id,
            semester_no: row.semester_no,
        }
    }
}
