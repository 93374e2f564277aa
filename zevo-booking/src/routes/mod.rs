pub mod arenas;
pub mod bookings;
pub mod health;
