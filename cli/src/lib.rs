pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod logging;
pub mod printer;
pub mod search;

// Re-export commonly used items
pub use app::{MazeGraphApp, resolve_endpoints};
pub use args::Args;
pub use display::format_number;
pub use search::{SearchRequest, SearchResult, execute_search};
