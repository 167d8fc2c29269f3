//! Per-user favorite marks: the local set logic and its routes.

mod handlers;
mod set;

pub use handlers::router;
pub use set::FavoriteSet;
