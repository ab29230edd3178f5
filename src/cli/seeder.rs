//! Development-data seeder.
//!
//! Fills the catalog, movie tracker and review board with plausible fake rows
//! so the API has something to serve on a fresh database. Seeded data goes
//! through the same service layer as the HTTP handlers, so slugs, price rules
//! and rating bounds all hold for seeded rows too.

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::SqlitePool;
use std::time::Instant;

use crate::modules::cakes::model::CreateCakeDto;
use crate::modules::cakes::service::CakeService;
use crate::modules::movies::model::{CreateMovieDto, Genre};
use crate::modules::movies::service::MovieService;
use crate::modules::reviews::model::CreateReviewDto;
use crate::modules::reviews::service::ReviewService;

const CAKE_FLAVORS: &[&str] = &[
    "Chocolate", "Vanilla", "Red Velvet", "Lemon", "Carrot", "Coffee", "Strawberry", "Pistachio",
    "Coconut", "Banana", "Almond", "Raspberry",
];

const CAKE_STYLES: &[&str] = &[
    "Layer Cake",
    "Cheesecake",
    "Cupcakes",
    "Roll",
    "Tart",
    "Sponge",
    "Mousse Cake",
];

pub async fn seed_database(
    db: &SqlitePool,
    num_cakes: usize,
    num_movies: usize,
    num_reviews: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Cakes: {}", num_cakes);
    println!("   - Movies: {}", num_movies);
    println!("   - Reviews: {}", num_reviews);

    let cakes = seed_cakes(db, num_cakes).await?;
    println!("   ✓ Inserted {} cakes", cakes);

    let movies = seed_movies(db, num_movies).await?;
    println!("   ✓ Inserted {} movies", movies);

    let reviews = seed_reviews(db, num_reviews).await?;
    println!("   ✓ Inserted {} reviews", reviews);

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    Ok(())
}

/// Removes seeded shop and tracker data. Student records are never seeded
/// and are left alone. Order items go first because they reference orders.
pub async fn clear_database(db: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Clearing seeded data...");

    sqlx::query("DELETE FROM order_items").execute(db).await?;
    sqlx::query("DELETE FROM orders").execute(db).await?;
    sqlx::query("DELETE FROM reviews").execute(db).await?;
    sqlx::query("DELETE FROM cakes").execute(db).await?;
    sqlx::query("DELETE FROM movies").execute(db).await?;

    println!("✅ Cakes, orders, reviews, and movies cleared");
    Ok(())
}

async fn seed_cakes(db: &SqlitePool, count: usize) -> Result<usize, Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let mut inserted = 0;

    for i in 0..count {
        // Walk the flavor/style grid so names (and therefore slugs) stay
        // unique; append a counter once the grid is exhausted.
        let flavor = CAKE_FLAVORS[i % CAKE_FLAVORS.len()];
        let style = CAKE_STYLES[(i / CAKE_FLAVORS.len()) % CAKE_STYLES.len()];
        let name = if i < CAKE_FLAVORS.len() * CAKE_STYLES.len() {
            format!("{} {}", flavor, style)
        } else {
            format!("{} {} {}", flavor, style, i)
        };

        let price = (rng.gen_range(80..=600) as f64) / 10.0;
        let dto = CreateCakeDto {
            name,
            price,
            image_url: None,
        };

        CakeService::create_cake(db, dto)
            .await
            .map_err(|e| e.error)?;
        inserted += 1;
    }

    Ok(inserted)
}

async fn seed_movies(db: &SqlitePool, count: usize) -> Result<usize, Box<dyn std::error::Error>> {
    let genres = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Musical,
        Genre::Other,
    ];

    let mut rng = rand::thread_rng();
    let mut inserted = 0;

    for i in 0..count {
        let words: Vec<String> = Words(2..4).fake();
        let mut title = words
            .iter()
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        // Titles are not unique in the schema, but a suffix keeps the seeded
        // list readable.
        if i >= 50 {
            title = format!("{} {}", title, i);
        }

        let dto = CreateMovieDto {
            title,
            director: Name().fake(),
            year: rng.gen_range(1950..=2025),
            genre: *genres.choose(&mut rng).unwrap_or(&Genre::Other),
            rating: rng.gen_range(1..=5),
        };

        MovieService::create_movie(db, dto)
            .await
            .map_err(|e| e.error)?;
        inserted += 1;
    }

    Ok(inserted)
}

async fn seed_reviews(db: &SqlitePool, count: usize) -> Result<usize, Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let mut inserted = 0;

    for _ in 0..count {
        let dto = CreateReviewDto {
            name: Name().fake(),
            comment: Sentence(4..12).fake(),
            rating: rng.gen_range(1..=5),
        };

        ReviewService::create_review(db, dto)
            .await
            .map_err(|e| e.error)?;
        inserted += 1;
    }

    Ok(inserted)
}
