pub mod cli;
pub mod controllers;
pub mod error;
pub mod models;
pub mod views;

// Re-exports for convenience
pub use controllers::{start_app, submit_post};
pub use models::{BoardClient, BoardService, Config, PostDraft, Session};
pub use views::{Toast, ToastState};
