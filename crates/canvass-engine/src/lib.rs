//! Question routing and answer submission for Canvass
//!
//! Two orchestration pieces sit between the form layer and the backend:
//!
//! - [`resolve_questions`]: which subset of a scenario's questions to
//!   display for a requested (page, view, mode), with a cascading
//!   fallback to the default view/mode buckets
//! - [`submit_in_order`]: one network call per answer in strict input
//!   order, short-circuiting on the first failure
//!
//! Both uphold ordering guarantees that downstream analysis depends on;
//! see the module docs for the exact contracts.

#![deny(unsafe_code)]

pub mod routing;
pub mod submit;

pub use routing::resolve_questions;
pub use submit::{submit_in_order, SubmissionError};
