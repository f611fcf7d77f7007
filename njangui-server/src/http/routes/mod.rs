//! Route handlers organized by resource

pub mod health;
pub mod resource;
pub mod funds;
pub mod members;

#[cfg(test)]
mod testing;
