//! Back-office CRUD over recipes, categories, user accounts and content
//! updates. Every route is gated by the admin role.

mod handlers;

pub use handlers::router;
