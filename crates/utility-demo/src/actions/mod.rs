//! Demo Actions
//!
//! Example behaviours driven by the controller in the demo binary.

pub mod idle;
pub mod proximity;
pub mod wander;

pub use idle::IdleAction;
pub use proximity::ProximityAlertAction;
pub use wander::WanderAction;
