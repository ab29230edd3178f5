//! Implementations for the `sweetdelights-cli` binary.
//!
//! The student-record commands reuse the same service layer as the HTTP API,
//! so the CLI and the server never disagree about what a valid record is.

pub mod seeder;

use anyhow::Result;
use dialoguer::{Input, Select};
use sqlx::SqlitePool;
use validator::Validate;

use crate::modules::students::model::{CreateStudentDto, UpdateStudentDto};
use crate::modules::students::service::StudentService;

pub async fn add_student(db: &SqlitePool, name: String, grade: String) -> Result<()> {
    let dto = CreateStudentDto { name, grade };
    dto.validate()?;

    let student = StudentService::create_student(db, dto)
        .await
        .map_err(|e| e.error)?;
    println!(
        "✅ Added student #{}: {} (grade {})",
        student.id, student.name, student.grade
    );
    Ok(())
}

pub async fn list_students(db: &SqlitePool) -> Result<()> {
    let students = StudentService::get_students(db).await.map_err(|e| e.error)?;

    if students.is_empty() {
        println!("No student records yet.");
        return Ok(());
    }

    println!("{:<6} {:<30} {:<10}", "ID", "Name", "Grade");
    for student in students {
        println!("{:<6} {:<30} {:<10}", student.id, student.name, student.grade);
    }
    Ok(())
}

pub async fn update_student(
    db: &SqlitePool,
    id: i64,
    name: Option<String>,
    grade: Option<String>,
) -> Result<()> {
    let dto = UpdateStudentDto { name, grade };
    dto.validate()?;

    let student = StudentService::update_student(db, id, dto)
        .await
        .map_err(|e| e.error)?;
    println!(
        "✅ Updated student #{}: {} (grade {})",
        student.id, student.name, student.grade
    );
    Ok(())
}

pub async fn remove_student(db: &SqlitePool, id: i64) -> Result<()> {
    StudentService::delete_student(db, id)
        .await
        .map_err(|e| e.error)?;
    println!("✅ Removed student #{}", id);
    Ok(())
}

/// Interactive student-record shell: a menu loop over the same table the API
/// serves.
pub async fn student_shell(db: &SqlitePool) -> Result<()> {
    println!("📋 Student records - pick an action");

    loop {
        let choice = Select::new()
            .with_prompt("Action")
            .items(&[
                "List students",
                "Add student",
                "Update student",
                "Remove student",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => list_students(db).await?,
            1 => {
                let name: String = Input::new().with_prompt("Name").interact_text()?;
                let grade: String = Input::new().with_prompt("Grade").interact_text()?;
                if let Err(e) = add_student(db, name, grade).await {
                    eprintln!("❌ {}", e);
                }
            }
            2 => {
                let id: i64 = Input::new().with_prompt("Student ID").interact_text()?;
                let name: String = Input::new()
                    .with_prompt("New name (leave blank to keep)")
                    .allow_empty(true)
                    .interact_text()?;
                let grade: String = Input::new()
                    .with_prompt("New grade (leave blank to keep)")
                    .allow_empty(true)
                    .interact_text()?;

                let name = (!name.trim().is_empty()).then(|| name.trim().to_string());
                let grade = (!grade.trim().is_empty()).then(|| grade.trim().to_string());

                if let Err(e) = update_student(db, id, name, grade).await {
                    eprintln!("❌ {}", e);
                }
            }
            3 => {
                let id: i64 = Input::new().with_prompt("Student ID").interact_text()?;
                if let Err(e) = remove_student(db, id).await {
                    eprintln!("❌ {}", e);
                }
            }
            _ => {
                println!("Bye!");
                break;
            }
        }
    }

    Ok(())
}
