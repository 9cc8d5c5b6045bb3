//! Submission scoring

use std::collections::HashMap;

use uuid::Uuid;

/// Score a set of submitted answers against an answer key.
///
/// One point per answer whose selected text matches the stored correct
/// answer for that question id. Unknown question ids score nothing, and a
/// question answered more than once only counts its first answer.
pub fn tally(answer_key: &HashMap<Uuid, String>, answers: &[(Uuid, String)]) -> i32 {
    let mut answered: std::collections::HashSet<Uuid> = std::collections::HashSet::new();
    let mut score = 0;

    for (question_id, selected) in answers {
        if !answered.insert(*question_id) {
            continue;
        }
        if answer_key.get(question_id).is_some_and(|correct| correct == selected) {
            score += 1;
        }
    }

    score
}

/// Percentage of correct answers, rounded to two decimals
pub fn percentage(score: i32, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    let raw = f64::from(score) / total_questions as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(entries: &[(&Uuid, &str)]) -> HashMap<Uuid, String> {
        entries.iter().map(|(id, a)| (**id, a.to_string())).collect()
    }

    #[test]
    fn test_tally_counts_exact_matches() {
        let q1 = Uuid::new_v4();
        let q2 = Uuid::new_v4();
        let q3 = Uuid::new_v4();
        let answer_key = key(&[(&q1, "var"), (&q2, "object"), (&q3, "===")]);

        let answers = vec![
            (q1, "var".to_string()),
            (q2, "null".to_string()),
            (q3, "===".to_string()),
        ];

        assert_eq!(tally(&answer_key, &answers), 2);
    }

    #[test]
    fn test_tally_ignores_unknown_questions() {
        let q1 = Uuid::new_v4();
        let answer_key = key(&[(&q1, "push()")]);

        let answers = vec![
            (Uuid::new_v4(), "push()".to_string()),
            (q1, "push()".to_string()),
        ];

        assert_eq!(tally(&answer_key, &answers), 1);
    }

    #[test]
    fn test_tally_counts_first_answer_per_question() {
        let q1 = Uuid::new_v4();
        let answer_key = key(&[(&q1, "const")]);

        let answers = vec![(q1, "let".to_string()), (q1, "const".to_string())];

        assert_eq!(tally(&answer_key, &answers), 0);
    }

    #[test]
    fn test_tally_empty_submission() {
        let q1 = Uuid::new_v4();
        let answer_key = key(&[(&q1, "const")]);

        assert_eq!(tally(&answer_key, &[]), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(10, 10), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
    }
}
