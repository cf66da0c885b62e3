pub mod aquariums;
