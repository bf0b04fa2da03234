pub mod client;
pub mod config;
pub mod draft;
pub mod post;
pub mod session;

// Re-export important structs for convenience
pub use client::{BoardClient, BoardService};
pub use config::Config;
pub use draft::PostDraft;
pub use post::{NewPost, Post, Subreddit};
pub use session::Session;
