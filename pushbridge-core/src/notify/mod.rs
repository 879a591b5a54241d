//! Coalesced-notification support: the pending batch, its store, and styling

mod batch;
mod store;
mod style;

pub use batch::{PendingBatch, RenderParams};
pub use store::PayloadStore;
pub use style::NotificationStyle;
