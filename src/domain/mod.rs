pub mod content_type;
pub mod search_result;
pub mod search_term;

pub use content_type::*;
pub use search_result::*;
pub use search_term::*;
