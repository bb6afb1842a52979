//! Fetch-request collaborator interface.
//!
//! The surface layer never performs network I/O. It hands a request to
//! an external fetch collaborator, which eventually updates the store
//! asynchronously, outside this layer's control. Dispatch is
//! fire-and-forget: no retry, no backoff, no error surface here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// The query parameters handed to the fetch collaborator: the ids a
/// usage site needs populated in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest<Id> {
    /// The ids relevant to the requesting usage site.
    pub ids: Vec<Id>,
}

impl<Id> FetchRequest<Id> {
    /// Build a request for the given ids.
    pub fn new(ids: Vec<Id>) -> Self {
        Self { ids }
    }
}

/// The external data-fetch collaborator, seen from the surface layer.
///
/// Implementations must not block: dispatch happens on the thread that
/// drives rendering.
pub trait FetchRequester<Id>: Send + Sync {
    /// Ask the collaborator to populate the store for `request.ids`.
    /// Fire-and-forget; completion is observed through later snapshots.
    fn request_entities(&self, request: FetchRequest<Id>);
}

impl<Id, R: FetchRequester<Id> + ?Sized> FetchRequester<Id> for Arc<R> {
    fn request_entities(&self, request: FetchRequest<Id>) {
        (**self).request_entities(request);
    }
}

/// A requester that hands requests to an async collaborator over an
/// unbounded channel.
///
/// The channel never blocks the dispatching thread. If the collaborator
/// has gone away (receiver dropped), the request is logged and dropped;
/// the surface has nothing useful to do with that failure.
pub struct ChannelRequester<Id> {
    tx: mpsc::UnboundedSender<FetchRequest<Id>>,
}

impl<Id: Send + 'static> ChannelRequester<Id> {
    /// Create a requester and the receiving end for the collaborator.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FetchRequest<Id>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl<Id: Clone + Send + Sync + 'static> FetchRequester<Id> for ChannelRequester<Id> {
    fn request_entities(&self, request: FetchRequest<Id>) {
        if self.tx.send(request).is_err() {
            warn!("fetch collaborator gone; dropping request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_requester_delivers() {
        let (requester, mut rx) = ChannelRequester::<String>::new();
        requester.request_entities(FetchRequest::new(vec!["L1".to_string()]));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.ids, vec!["L1".to_string()]);
    }

    #[tokio::test]
    async fn test_closed_channel_is_silent() {
        let (requester, rx) = ChannelRequester::<String>::new();
        drop(rx);
        // Must not panic or error; the request is simply dropped.
        requester.request_entities(FetchRequest::new(vec!["L1".to_string()]));
    }
}
