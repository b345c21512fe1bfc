pub mod llm;
pub mod scan;
pub mod store;
pub mod user;
