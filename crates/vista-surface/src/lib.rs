//! # Vista Surface
//!
//! Lifecycle primitives for usage sites: the one-shot fetch gate, the
//! fetch-request collaborator interface, and the `{loading, items}` view
//! model handed to the presentation layer.
//!
//! ## Key Types
//!
//! - [`FetchGate`] / [`FetchPhase`] - The mount-once dispatch latch
//! - [`FetchRequester`] - The external fetch collaborator, fire-and-forget
//! - [`ChannelRequester`] - Channel-backed requester for async collaborators
//! - [`FeedView`] - Derived loading flag plus the item mapping
//!
//! Rendering itself is out of scope: a presentation collaborator
//! receives the [`FeedView`] and does whatever it likes with it.

pub mod gate;
pub mod requester;
pub mod view;

pub use gate::{FetchGate, FetchPhase};
pub use requester::{ChannelRequester, FetchRequest, FetchRequester};
pub use view::FeedView;
