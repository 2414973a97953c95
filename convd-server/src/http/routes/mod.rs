//! Route modules

pub mod conversations;
pub mod home;
