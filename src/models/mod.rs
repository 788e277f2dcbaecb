pub mod content;
pub mod gallery;
