//! Input validation utilities

use crate::constants::{self, MAX_OPTION_LENGTH, MAX_QUESTION_OPTIONS, MIN_QUESTION_OPTIONS};

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate question type
pub fn validate_question_type(question_type: &str) -> Result<(), &'static str> {
    if constants::question_types::ALL.contains(&question_type) {
        Ok(())
    } else {
        Err("Unsupported question type")
    }
}

/// Validate a question's answer options and correct answer
pub fn validate_options(options: &[String], correct_answer: &str) -> Result<(), &'static str> {
    if options.len() < MIN_QUESTION_OPTIONS {
        return Err("A question needs at least two answer options");
    }
    if options.len() > MAX_QUESTION_OPTIONS {
        return Err("A question can have at most eight answer options");
    }
    if options.iter().any(|o| o.trim().is_empty()) {
        return Err("Answer options cannot be empty");
    }
    if options.iter().any(|o| o.len() > MAX_OPTION_LENGTH) {
        return Err("Answer option exceeds maximum length");
    }
    let mut seen = std::collections::HashSet::new();
    if !options.iter().all(|o| seen.insert(o.as_str())) {
        return Err("Answer options must be distinct");
    }
    if !options.iter().any(|o| o == correct_answer) {
        return Err("Correct answer must be one of the options");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a topic name
pub fn validate_topic_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Topic name cannot be empty");
    }
    if sanitized.len() > 150 {
        return Err("Topic name must be at most 150 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("user").is_ok());
        assert!(validate_role("superuser").is_err());
    }

    #[test]
    fn test_validate_question_type() {
        assert!(validate_question_type("multiple_choice").is_ok());
        assert!(validate_question_type("true_false").is_ok());
        assert!(validate_question_type("essay").is_err());
    }

    #[test]
    fn test_validate_options() {
        let options = vec!["var".to_string(), "int".to_string(), "string".to_string()];
        assert!(validate_options(&options, "var").is_ok());
        assert!(validate_options(&options, "let").is_err()); // Not among the options
        assert!(validate_options(&options[..1].to_vec(), "var").is_err()); // Too few

        let duplicated = vec!["yes".to_string(), "yes".to_string()];
        assert!(validate_options(&duplicated, "yes").is_err());
    }

    #[test]
    fn test_validate_topic_name() {
        assert_eq!(validate_topic_name("  Rust Basics ").unwrap(), "Rust Basics");
        assert!(validate_topic_name("   ").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\u{0000} world  "), "hello world");
    }
}
