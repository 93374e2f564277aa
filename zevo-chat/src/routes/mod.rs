pub mod health;
pub mod live;
pub mod messages;
pub mod rooms;
