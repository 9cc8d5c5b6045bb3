//! Exam session flow
//!
//! The exam mechanism is deliberately process-local: starting an exam stores
//! the topic's answer key in an in-memory registry keyed by a generated
//! session id, so correct answers are never shipped to the client. Submitting
//! consumes the session and scores the answers against the stored key.
//! Sessions do not survive a restart and there is no recovery path; an
//! interrupted exam is simply restarted by the user.

pub mod registry;
pub mod scoring;

pub use registry::{ExamRegistry, ExamSession};
pub use scoring::{percentage, tally};
