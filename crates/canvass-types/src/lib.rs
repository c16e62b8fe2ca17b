//! Core types for the Canvass data-collection engine
//!
//! Canvass presents survey scenarios to participants, collects structured
//! answers, and exchanges identity/session state with a backend. This crate
//! holds the shared data model; it performs no I/O.
//!
//! # Key Types
//!
//! - [`Scenario`] / [`Question`] / [`Choice`]: what is asked, tagged with
//!   the page/view/mode addressing scheme used by routed resolution
//! - [`AnswerDraft`] / [`AnswerRecord`]: what a participant submits and
//!   what the backend confirms
//! - [`Session`] / [`IdentityClaim`] / [`TrackerIdentity`]: who is
//!   answering, for the lifetime of one page load

#![deny(unsafe_code)]

pub mod answer;
pub mod ids;
pub mod question;
pub mod session;

pub use answer::{AnswerDraft, AnswerRecord};
pub use ids::{AnswerRecordId, ChoiceId, ClientId, QuestionId, ScenarioId, UserId};
pub use question::{Choice, Question, QuestionKind, Scenario};
pub use session::{
    IdentityClaim, IdentityPayload, Session, SessionToken, TrackerIdentity, TrackerOrigin,
};
