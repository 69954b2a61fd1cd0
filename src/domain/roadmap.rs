//! Training roadmaps: the recommended course plan for a major, broken down
//! by semester number.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    pub id: i32,
    pub major_id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewRoadmap {
    pub major_id: i32,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct UpdateRoadmap {
    pub major_id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoadmapItem {
    pub id: i32,
    pub roadmap_id: i32,
    pub course_id: i32,
    /// 1-based position of the course within the plan.
    pub semester_no: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewRoadmapItem {
    pub course_id: i32,
    pub semester_no: i32,
}
