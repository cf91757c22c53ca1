//! Core types for the follow graph.

pub mod connection;
pub mod user;

pub use connection::Connection;
pub use user::User;
