//! Application layer - use cases and boundary DTOs

pub mod dto;
pub mod services;
