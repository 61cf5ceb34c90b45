pub mod browser;
pub mod categorizer;
pub mod extractor;
pub mod search_session;
pub mod term_loader;

pub use browser::*;
pub use categorizer::*;
pub use search_session::*;
