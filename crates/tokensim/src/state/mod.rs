mod app_state;
mod modal;
mod parameters;
mod tabs;

// Re-export all types from submodules
pub use app_state::*;
pub use modal::*;
pub use parameters::*;
pub use tabs::*;
