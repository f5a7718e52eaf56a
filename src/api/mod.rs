//! API layer
//!
//! HTTP handlers for:
//! - SocialHub REST API (auth, users, posts, social graph, messaging)
//! - Metrics (Prometheus)

mod converters;
mod dto;
mod extract;
pub mod metrics;
mod social;

pub use converters::*;
pub use dto::*;
pub use extract::ApiJson;

pub use metrics::{metrics_router, track_http_metrics};
pub use social::social_api_router;
