pub mod aquarium;
pub mod user;
