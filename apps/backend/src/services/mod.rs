pub mod cache;
pub mod content;
