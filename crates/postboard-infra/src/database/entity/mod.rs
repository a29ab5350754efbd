//! SeaORM entities.

pub mod hash_tag;
pub mod post;
