//! Mutable view state: the result store and the headless element model.

mod dom;
mod store;

pub use dom::{Control, ControlState, ControlStatus, DisplayRegion, TextInput};
pub use store::{Generation, ResultStore};
