pub mod booking;
pub mod chat;
pub mod home;
pub mod map;
