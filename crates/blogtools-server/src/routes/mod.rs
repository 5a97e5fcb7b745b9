pub mod content;
pub mod extract;
pub mod health;
pub mod tools;
