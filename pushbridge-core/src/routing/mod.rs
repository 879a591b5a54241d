//! Routing of inbound messages based on application lifecycle state

mod foreground;
mod router;

pub use foreground::ForegroundTracker;
pub use router::{DeliveryAction, DeliveryRouter};
