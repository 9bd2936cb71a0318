use serde::{Deserialize, Serialize};

pub const ADDITIONAL_FORTUNE_ID: i32 = 0;
pub const ADDITIONAL_FORTUNE_MESSAGE: &str = "Additional fortune added at request time.";

/// Domain fortune (business view of a `fortune` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    pub id: i32,
    pub message: String,
}

impl Fortune {
    pub fn new(id: i32, message: impl Into<String>) -> Self {
        Self { id, message: message.into() }
    }

    /// The fortune synthesized on every request. Never persisted.
    pub fn additional() -> Self {
        Self::new(ADDITIONAL_FORTUNE_ID, ADDITIONAL_FORTUNE_MESSAGE)
    }
}

impl From<models::fortune::Model> for Fortune {
    fn from(m: models::fortune::Model) -> Self {
        Self { id: m.id, message: m.message }
    }
}

/// Append the request-time fortune and order everything by message.
///
/// `String` ordering compares UTF-8 bytes, which is the same as comparing
/// code points. The sort is stable: fortunes with equal messages keep the
/// order they were loaded in, and the appended fortune sorts after any
/// persisted fortune carrying the same text.
pub fn with_additional_fortune(mut fortunes: Vec<Fortune>) -> Vec<Fortune> {
    fortunes.push(Fortune::additional());
    fortunes.sort_by(|left, right| left.message.cmp(&right.message));
    fortunes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(fortunes: &[Fortune]) -> Vec<&str> {
        fortunes.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_only_additional_fortune() {
        let out = with_additional_fortune(Vec::new());
        assert_eq!(out, vec![Fortune::additional()]);
        assert_eq!(out[0].id, 0);
        assert_eq!(out[0].message, "Additional fortune added at request time.");
    }

    #[test]
    fn output_is_input_plus_one_sorted_by_message() {
        let input = vec![
            Fortune::new(1, "fortune: No such file or directory"),
            Fortune::new(2, "A computer scientist is someone who fixes things that aren't broken."),
            Fortune::new(7, "Any program that runs right is obsolete."),
            Fortune::new(9, "Feature: A bug with seniority."),
        ];
        let out = with_additional_fortune(input.clone());

        assert_eq!(out.len(), input.len() + 1);
        for f in &input {
            assert!(out.contains(f));
        }
        assert_eq!(out.iter().filter(|f| **f == Fortune::additional()).count(), 1);
        assert_eq!(
            messages(&out),
            vec![
                "A computer scientist is someone who fixes things that aren't broken.",
                "Additional fortune added at request time.",
                "Any program that runs right is obsolete.",
                "Feature: A bug with seniority.",
                "fortune: No such file or directory",
            ]
        );
    }

    #[test]
    fn ordering_is_by_code_point_not_locale() {
        let input = vec![
            Fortune::new(12, "フレームワークのベンチマーク"),
            Fortune::new(3, "b lowercase"),
            Fortune::new(4, "Z uppercase"),
            Fortune::new(11, "<script>alert(\"x\");</script>"),
        ];
        let out = with_additional_fortune(input);
        let ids: Vec<i32> = out.iter().map(|f| f.id).collect();
        // '<' (0x3C) < 'A' (0x41) < 'Z' < 'b' < katakana
        assert_eq!(ids, vec![11, 0, 4, 3, 12]);
    }

    #[test]
    fn equal_messages_keep_load_order() {
        let input = vec![
            Fortune::new(5, "same"),
            Fortune::new(2, "same"),
            Fortune::new(8, "same"),
        ];
        let out = with_additional_fortune(input);
        let ids: Vec<i32> = out.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![0, 5, 2, 8]);
    }

    #[test]
    fn persisted_duplicate_of_additional_message_is_kept() {
        let input = vec![Fortune::new(42, ADDITIONAL_FORTUNE_MESSAGE)];
        let out = with_additional_fortune(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 42);
        assert_eq!(out[1].id, ADDITIONAL_FORTUNE_ID);
    }
}
