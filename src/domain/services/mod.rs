//! Domain services - Pure business logic operations

pub mod attribute_deriver;
pub mod combat_resolver;
