pub mod toast;
pub mod tui;
pub mod widgets;

// Re-export key view state for convenience
pub use toast::{Toast, ToastState};
pub use widgets::FormState;
