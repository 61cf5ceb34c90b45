pub mod query_db;
pub mod result_db;
pub mod term_db;
