use serde::Deserialize;
use validator::Validate;

use crate::domain::roadmap::{NewRoadmap, NewRoadmapItem, UpdateRoadmap};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for creating a training roadmap.
pub struct AddRoadmapForm {
    pub major_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing roadmap.
pub struct SaveRoadmapForm {
    pub id: i32,
    pub major_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
}

impl From<&AddRoadmapForm> for NewRoadmap {
    fn from(form: &AddRoadmapForm) -> Self {
        Self {
            major_id: form.major_id,
            name: form.name.trim().to_string(),
        }
    }
}

impl From<&SaveRoadmapForm> for UpdateRoadmap {
    fn from(form: &SaveRoadmapForm) -> Self {
        Self {
            major_id: form.major_id,
            name: form.name.trim().to_string(),
        }
    }
}

#[derive(Deserialize)]
/// Full replacement of a roadmap's course plan. The two parallel vectors
/// come from repeated `course_id`/`semester_no` inputs on the edit page.
pub struct SaveRoadmapItemsForm {
    pub id: i32,
    #[serde(default)]
    pub course_id: Vec<i32>,
    #[serde(default)]
    pub semester_no: Vec<i32>,
}

impl SaveRoadmapItemsForm {
    pub fn to_items(&self) -> Result<Vec<NewRoadmapItem>, FormError> {
        if self.course_id.len() != self.semester_no.len() {
            return Err(FormError::Upload(
                "course and semester lists have different lengths".to_string(),
            ));
        }
        if let Some(bad) = self.semester_no.iter().find(|n| **n < 1) {
            return Err(FormError::Upload(format!("invalid semester number: {bad}")));
        }

        Ok(self
            .course_id
            .iter()
            .zip(self.semester_no.iter())
            .map(|(&course_id, &semester_no)| NewRoadmapItem {
                course_id,
                semester_no,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_zip_course_and_semester_lists() {
        let form = SaveRoadmapItemsForm {
            id: 1,
            course_id: vec![10, 11],
            semester_no: vec![1, 2],
        };
        let items = form.to_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].course_id, 11);
        assert_eq!(items[1].semester_no, 2);
    }

    #[test]
    fn mismatched_lists_are_rejected() {
        let form = SaveRoadmapItemsForm {
            id: 1,
            course_id: vec![10],
            semester_no: vec![],
        };
        assert!(form.to_items().is_err());
    }

    #[test]
    fn semester_numbers_start_at_one() {
        let form = SaveRoadmapItemsForm {
            id: 1,
            course_id: vec![10],
            semester_no: vec![0],
        };
        assert!(form.to_items().is_err());
    }
}
