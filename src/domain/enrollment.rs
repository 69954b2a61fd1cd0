use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle of a student's participation in a course offering.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
    Dropped,
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Enrolled => "enrolled",
            Self::Completed => "completed",
            Self::Dropped => "dropped",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enrolled" => Ok(Self::Enrolled),
            "completed" => Ok(Self::Completed),
            "dropped" => Ok(Self::Dropped),
            other => Err(format!("unknown enrollment status: {other}")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    pub status: EnrollmentStatus,
    pub enrolled_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub semester_id: i32,
    pub status: EnrollmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            EnrollmentStatus::Enrolled,
            EnrollmentStatus::Completed,
            EnrollmentStatus::Dropped,
        ] {
            assert_eq!(status.to_string().parse::<EnrollmentStatus>(), Ok(status));
        }
        assert!("unknown".parse::<EnrollmentStatus>().is_err());
    }
}
