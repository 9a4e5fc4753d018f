//! The product manager's state store, and the actor that serialises every
//! change to it.

mod actor;
pub mod messages;
pub mod state;

pub use actor::ProductManagerActor;
pub use messages::*;
pub use state::*;
