//! HTTP request handlers.
//!
//! Each handler turns one request into a single storage call and maps the
//! outcome onto the JSON envelope or a redirect.

pub mod delete;
pub mod redirect;
pub mod save;

pub use delete::delete_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
