pub mod content;
pub mod profile;
pub mod project;
