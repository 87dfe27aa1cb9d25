//! Client-side view model for the docflow dashboard.
//!
//! Nothing in here owns document state. Each piece is a projection of, or a
//! request against, the registry: [tabs] picks the endpoint for a dashboard
//! tab, [actions] validates and submits lifecycle transitions, [cache] and
//! [relay] keep fetched collections fresh when the registry reports changes
//! over its websocket, and [ui_state] holds the handful of purely local
//! toggles the views share.

pub mod actions;
pub mod cache;
pub mod relay;
pub mod session;
pub mod tabs;
pub mod ui_state;
pub mod worker;

pub use actions::{ActionError, DocumentActions};
pub use cache::{QueryCache, QueryData, QueryKey};
pub use relay::{InvalidationRelay, ReconnectPolicy, RelayError, Trigger};
pub use session::Session;
pub use tabs::{DocumentTab, DocumentTabs, FetchError};
pub use worker::RefetchWorker;
