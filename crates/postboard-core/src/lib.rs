//! # Postboard Core
//!
//! The domain layer of Postboard: posts and their hash tags, page requests,
//! pagination metadata, projection to caller-facing shapes and the post service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod command;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod projection;
pub mod service;

pub use error::DomainError;
pub use pagination::{PageInfo, PageRequest};
pub use projection::{ListingResponse, PostDetail, TagDetail};
pub use service::{ListingSettings, PostService};
