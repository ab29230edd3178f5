use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, MessageResponse};
use crate::modules::cakes::model::{Cake, CreateCakeDto, PaginatedCakesResponse, UpdateCakeDto};
use crate::modules::movies::model::{
    CreateMovieDto, Genre, GenreCount, Movie, MovieStats, PaginatedMoviesResponse, UpdateMovieDto,
};
use crate::modules::orders::model::{
    CustomerDto, Order, OrderItem, OrderItemDto, OrderRecord, PaginatedOrdersResponse,
    PlaceOrderDto,
};
use crate::modules::reviews::model::{CreateReviewDto, PaginatedReviewsResponse, Review};
use crate::modules::shop::model::ShopSummary;
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_admin,
        crate::modules::cakes::controller::create_cake,
        crate::modules::cakes::controller::get_cakes,
        crate::modules::cakes::controller::get_cake,
        crate::modules::cakes::controller::update_cake,
        crate::modules::cakes::controller::delete_cake,
        crate::modules::orders::controller::place_order,
        crate::modules::orders::controller::get_orders,
        crate::modules::orders::controller::get_order,
        crate::modules::reviews::controller::create_review,
        crate::modules::reviews::controller::get_reviews,
        crate::modules::movies::controller::create_movie,
        crate::modules::movies::controller::get_movies,
        crate::modules::movies::controller::get_movie_stats,
        crate::modules::movies::controller::get_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::shop::controller::get_shop_summary,
        crate::modules::shop::controller::health,
    ),
    components(
        schemas(
            ErrorResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            Cake,
            CreateCakeDto,
            UpdateCakeDto,
            PaginatedCakesResponse,
            CustomerDto,
            OrderItemDto,
            PlaceOrderDto,
            OrderItem,
            OrderRecord,
            Order,
            PaginatedOrdersResponse,
            Review,
            CreateReviewDto,
            PaginatedReviewsResponse,
            Genre,
            Movie,
            CreateMovieDto,
            UpdateMovieDto,
            PaginatedMoviesResponse,
            GenreCount,
            MovieStats,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            ShopSummary,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin login"),
        (name = "Cakes", description = "Cake menu management"),
        (name = "Orders", description = "Customer orders and receipts"),
        (name = "Reviews", description = "Customer reviews"),
        (name = "Movies", description = "Movie tracker"),
        (name = "Students", description = "Student records"),
        (name = "Shop", description = "Shop summary and health")
    ),
    info(
        title = "SweetDelights API",
        version = "0.1.0",
        description = "Consolidated REST backend for the SweetDelights shop: cake catalog, orders, reviews, a movie tracker, and student records.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
