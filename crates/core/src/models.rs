pub mod entities;
pub mod requests;
pub mod slot;
pub mod user;
pub mod wire;
