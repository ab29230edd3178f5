use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &SqlitePool,
        dto: CreateStudentDto,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, grade)
            VALUES (?, ?)
            RETURNING id, name, grade
            "#,
        )
        .bind(dto.name.trim())
        .bind(dto.grade.trim())
        .fetch_one(db)
        .await
        .context("Failed to insert student")
        .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students(db: &SqlitePool) -> Result<Vec<Student>, AppError> {
        let students =
            sqlx::query_as::<_, Student>("SELECT id, name, grade FROM students ORDER BY name")
                .fetch_all(db)
                .await
                .context("Failed to fetch students")
                .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &SqlitePool, id: i64) -> Result<Student, AppError> {
        let student =
            sqlx::query_as::<_, Student>("SELECT id, name, grade FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch student by ID")
                .map_err(AppError::database)?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &SqlitePool,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let existing = Self::get_student_by_id(db, id).await?;

        let name = dto
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(existing.name);
        let grade = dto
            .grade
            .map(|g| g.trim().to_string())
            .unwrap_or(existing.grade);

        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = ?, grade = ?
            WHERE id = ?
            RETURNING id, name, grade
            "#,
        )
        .bind(&name)
        .bind(&grade)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update student")
        .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }
}
