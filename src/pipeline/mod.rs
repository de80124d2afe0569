//! Badge request resolution.
//!
//! [`BadgeResolver`] drives the static, dynamic and predefined request
//! shapes. [`Fetcher`] is the outbound HTTP seam; [`HttpFetcher`] is the
//! production implementation.

pub mod fetch;
pub mod resolver;

pub use fetch::{default_user_agent, FetchResponse, Fetcher, HttpFetcher, DEFAULT_TIMEOUT};
pub use resolver::{BadgeResolver, RESPONSE_VARIABLE};
