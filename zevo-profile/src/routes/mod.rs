pub mod health;
pub mod help;
pub mod profile;
pub mod theme;
