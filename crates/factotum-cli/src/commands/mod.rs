//! Command implementations.

mod propagate;
mod strip;

pub use propagate::{execute_check_expiry, execute_propagate};
pub use strip::execute_strip;
