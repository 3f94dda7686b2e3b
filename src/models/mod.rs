//! Data models and DTOs

pub mod book;
pub mod link;
