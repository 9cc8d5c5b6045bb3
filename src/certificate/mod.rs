//! Certificate issuance
//!
//! Certificates are generated once per score row: a PDF is rendered into the
//! configured output directory and mailed to the recipient, then the score's
//! `certificate_issued` flag is flipped. Both steps run synchronously within
//! the publishing request.

pub mod email;
pub mod pdf;

use crate::constants::grade_thresholds;

/// Letter grade printed on certificates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Grade for a percentage of correct answers
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= grade_thresholds::A_MIN {
            Grade::A
        } else if percentage >= grade_thresholds::B_MIN {
            Grade::B
        } else if percentage >= grade_thresholds::C_MIN {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_percentage(100.0), Grade::A);
        assert_eq!(Grade::from_percentage(90.0), Grade::A);
        assert_eq!(Grade::from_percentage(89.99), Grade::B);
        assert_eq!(Grade::from_percentage(75.0), Grade::B);
        assert_eq!(Grade::from_percentage(60.0), Grade::C);
        assert_eq!(Grade::from_percentage(59.9), Grade::D);
        assert_eq!(Grade::from_percentage(0.0), Grade::D);
    }

    #[test]
    fn test_grade_letter() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::D.letter(), "D");
    }
}
