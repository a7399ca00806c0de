pub mod health;
pub mod players;
pub mod scatter;
pub mod teams;
pub mod venues;
