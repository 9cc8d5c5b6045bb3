//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default access token expiry in minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 150;

/// JWT token type markers
pub mod token_types {
    pub const ACCESS: &str = "access";
    pub const REFRESH: &str = "refresh";
}

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, USER];
}

// =============================================================================
// EXAM DEFAULTS
// =============================================================================

/// Default exam duration in minutes
pub const DEFAULT_EXAM_DURATION_MINUTES: u32 = 45;

/// Default tab-switch count at which a submission is flagged
pub const DEFAULT_MAX_TAB_SWITCHES: u32 = 3;

/// Grace period added to the exam duration before a submit is refused,
/// covering clock skew and request transit (in seconds)
pub const EXAM_SUBMIT_GRACE_SECONDS: i64 = 60;

// =============================================================================
// QUESTIONS
// =============================================================================

/// Question type identifiers
pub mod question_types {
    pub const MULTIPLE_CHOICE: &str = "multiple_choice";
    pub const TRUE_FALSE: &str = "true_false";

    /// All supported question types
    pub const ALL: &[&str] = &[MULTIPLE_CHOICE, TRUE_FALSE];
}

/// Minimum number of answer options per question
pub const MIN_QUESTION_OPTIONS: usize = 2;

/// Maximum number of answer options per question
pub const MAX_QUESTION_OPTIONS: usize = 8;

/// Maximum question text length
pub const MAX_QUESTION_TEXT_LENGTH: u64 = 2048;

/// Maximum length of a single answer option
pub const MAX_OPTION_LENGTH: usize = 512;

/// Maximum topic name length
pub const MAX_TOPIC_NAME_LENGTH: u64 = 150;

// =============================================================================
// CERTIFICATES
// =============================================================================

/// Default directory for generated certificate PDFs
pub const DEFAULT_CERTIFICATES_PATH: &str = "./certificates";

/// Grade thresholds (percentage of correct answers)
pub mod grade_thresholds {
    pub const A_MIN: f64 = 90.0;
    pub const B_MIN: f64 = 75.0;
    pub const C_MIN: f64 = 60.0;
}

// =============================================================================
// EMAIL DEFAULTS
// =============================================================================

/// Default SMTP relay host
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

// =============================================================================
// BOOTSTRAP DEFAULTS
// =============================================================================

/// Default bootstrap admin account (overridden by ADMIN_* env vars)
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@quizdeck.local";

/// Default bootstrap admin display name
pub const DEFAULT_ADMIN_NAME: &str = "Admin User";

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// REQUEST LIMITS
// =============================================================================

/// Maximum request body size in bytes (1 MB)
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024;

/// Per-request timeout in seconds (certificate issuance renders a PDF and
/// talks to SMTP inside the request)
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
