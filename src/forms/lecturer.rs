use serde::Deserialize;
use validator::Validate;

use crate::domain::lecturer::{NewLecturer, UpdateLecturer};
use crate::forms::{FormError, normalize_phone};

#[derive(Deserialize, Validate)]
/// Form data for adding a lecturer.
pub struct AddLecturerForm {
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing lecturer.
pub struct SaveLecturerForm {
    pub id: i32,
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl AddLecturerForm {
    pub fn to_new_lecturer(&self) -> Result<NewLecturer, FormError> {
        self.validate()?;
        Ok(NewLecturer {
            department_id: self.department_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: normalize_phone(&self.phone)?,
        })
    }
}

impl SaveLecturerForm {
    pub fn to_update_lecturer(&self) -> Result<UpdateLecturer, FormError> {
        self.validate()?;
        Ok(UpdateLecturer {
            department_id: self.department_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: normalize_phone(&self.phone)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_normalized() {
        let form = AddLecturerForm {
            department_id: 1,
            name: "Dr. Smith".to_string(),
            email: "smith@example.edu".to_string(),
            phone: "+49 30 901820".to_string(),
        };
        let new = form.to_new_lecturer().unwrap();
        assert_eq!(new.phone, "+4930901820");
    }
}
