//! Domain entities - the core business objects.

mod hash_tag;
mod post;

pub use hash_tag::HashTag;
pub use post::Post;
