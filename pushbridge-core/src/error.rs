//! Error types for pushbridge-core

use thiserror::Error;

/// Errors from handing events to the application boundary
///
/// The reconciliation core itself is total: routing, coalescing and the
/// store transitions have no failure path. The one thing that can go wrong
/// is the application side dropping its end of the event stream.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("application event channel closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_closed_displays_correctly() {
        let error = DeliveryError::ChannelClosed;
        assert!(error.to_string().contains("channel closed"));
    }
}
