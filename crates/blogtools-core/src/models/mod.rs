pub mod article;
pub mod style;
pub mod tool;
