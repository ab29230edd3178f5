use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student record: a name and a grade. This is the same table the CLI
/// shell operates on.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100, message = "Student name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 20, message = "Grade must be 1-20 characters"))]
    pub grade: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100, message = "Student name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 20, message = "Grade must be 1-20 characters"))]
    pub grade: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_dto_validation() {
        let valid = CreateStudentDto {
            name: "Blerta Hoxha".to_string(),
            grade: "9".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateStudentDto {
            name: String::new(),
            grade: "9".to_string(),
        };
        assert!(invalid.validate().is_err());

        let invalid = CreateStudentDto {
            name: "Blerta Hoxha".to_string(),
            grade: "x".repeat(21),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_update_student_dto_empty_is_valid() {
        let dto = UpdateStudentDto {
            name: None,
            grade: None,
        };
        assert!(dto.validate().is_ok());
    }
}
