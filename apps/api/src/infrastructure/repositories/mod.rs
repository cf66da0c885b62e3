pub mod sqlx_aquarium_repository;
pub mod sqlx_user_repository;
