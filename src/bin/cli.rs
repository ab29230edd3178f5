use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use sweetdelights::cli::seeder::{clear_database, seed_database};
use sweetdelights::cli::{add_student, list_students, remove_student, student_shell, update_student};
use sweetdelights::config::database::DEFAULT_DATABASE_URL;
use sweetdelights::db::init_schema;

#[derive(Parser)]
#[command(name = "sweetdelights-cli")]
#[command(about = "SweetDelights CLI - Administrative tools for the shop backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage student records
    Students {
        #[command(subcommand)]
        command: StudentCommands,
    },
    /// Seed the database with fake cakes, movies and reviews
    Seed {
        /// Number of cakes to create
        #[arg(long, default_value = "12")]
        cakes: usize,

        /// Number of movies to create
        #[arg(long, default_value = "25")]
        movies: usize,

        /// Number of reviews to create
        #[arg(long, default_value = "10")]
        reviews: usize,
    },
    /// Delete all cakes, orders, reviews, and movies (keeps student records)
    ClearSeed,
}

#[derive(Subcommand)]
enum StudentCommands {
    /// Open the interactive student-record shell
    Shell,
    /// Add a student record
    Add {
        /// Student name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Grade, e.g. "A" or "7b" (prompted if not provided)
        #[arg(short = 'g', long)]
        grade: Option<String>,
    },
    /// List all student records
    List,
    /// Update a student record
    Update {
        /// ID of the student to update
        id: i64,

        /// New name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// New grade
        #[arg(short = 'g', long)]
        grade: Option<String>,
    },
    /// Remove a student record
    Remove {
        /// ID of the student to remove
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Students { command } => match command {
            StudentCommands::Shell => student_shell(&pool).await,
            StudentCommands::Add { name, grade } => {
                let name = name.unwrap_or_else(|| {
                    Input::new()
                        .with_prompt("Name")
                        .interact_text()
                        .expect("Failed to read name")
                });
                let grade = grade.unwrap_or_else(|| {
                    Input::new()
                        .with_prompt("Grade")
                        .interact_text()
                        .expect("Failed to read grade")
                });
                add_student(&pool, name, grade).await
            }
            StudentCommands::List => list_students(&pool).await,
            StudentCommands::Update { id, name, grade } => {
                update_student(&pool, id, name, grade).await
            }
            StudentCommands::Remove { id } => remove_student(&pool, id).await,
        },
        Commands::Seed {
            cakes,
            movies,
            reviews,
        } => seed_database(&pool, cakes, movies, reviews)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e)),
        Commands::ClearSeed => clear_database(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e)),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
