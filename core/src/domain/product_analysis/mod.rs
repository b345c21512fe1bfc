pub mod agents;
pub mod entities;
pub mod helpers;
pub mod instructions;
pub mod policies;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
