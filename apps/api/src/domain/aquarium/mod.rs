pub mod comment;
pub mod entity;
pub mod errors;
pub mod like;
pub mod repository;
