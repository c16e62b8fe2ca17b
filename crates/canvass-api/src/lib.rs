//! Backend API client for Canvass
//!
//! The backend is consumed purely through its request/response contract:
//!
//! - session exchange: an [`IdentityClaim`](canvass_types::IdentityClaim)
//!   buys an opaque session token with an embedded identity payload
//! - answer write: one draft in, one server-confirmed record out
//! - scenario read: the flat, routing-tagged question list
//!
//! [`SurveyBackend`] is the seam the session and engine crates program
//! against; [`HttpBackend`] is the reqwest implementation.

#![deny(unsafe_code)]

pub mod backend;
pub mod error;
pub mod http;
pub mod token;

pub use backend::{ExchangeRequest, SessionEnvelope, SurveyBackend};
pub use error::{ApiError, ApiResult};
pub use http::{BackendConfig, HttpBackend};
pub use token::decode_identity;
