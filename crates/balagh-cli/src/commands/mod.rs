pub mod categories;
pub mod common;
pub mod completions;
pub mod config;
pub mod list;
pub mod map;
pub mod show;
pub mod submit;
