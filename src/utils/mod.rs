//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{generate_secure_token, hash_password, verify_password};
pub use time::{format_display_date, now_utc};
pub use validation::{validate_question_type, validate_role};
