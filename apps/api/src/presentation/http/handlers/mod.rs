pub mod aquariums;
pub mod health;
