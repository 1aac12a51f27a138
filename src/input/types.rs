//! @ai:module:intent Input records for a grading run
//! @ai:module:layer domain
//! @ai:module:public_api AnswerKey, Submission, QuestionText
//! @ai:module:stateless true

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// @ai:intent Authoritative mapping from question id to correct answer
/// @ai:invariant iteration order is the order questions appear in the key file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(IndexMap<String, String>);

impl AnswerKey {
    /// @ai:intent Wrap an ordered question map
    /// @ai:effects pure
    pub fn new(answers: IndexMap<String, String>) -> Self {
        Self(answers)
    }

    /// @ai:intent Number of questions in the key
    /// @ai:effects pure
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// @ai:intent Question ids in key order
    /// @ai:effects pure
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// @ai:intent Look up the correct answer for a question
    /// @ai:effects pure
    pub fn correct_answer(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// @ai:intent Iterate (question id, correct answer) pairs in key order
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// @ai:intent Optional display text for questions, used by feedback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionText(IndexMap<String, String>);

impl QuestionText {
    /// @ai:intent Display label for a question, falling back to "Question <id>"
    /// @ai:effects pure
    pub fn label(&self, question_id: &str) -> String {
        self.0
            .get(question_id)
            .cloned()
            .unwrap_or_else(|| default_label(question_id))
    }

    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QuestionText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// @ai:intent Synthetic label used when no question text is known
/// @ai:effects pure
pub fn default_label(question_id: &str) -> String {
    format!("Question {}", question_id)
}

/// @ai:intent One student's answers as read from a submissions file
/// @ai:invariant either field may be missing in the source document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: IndexMap<String, String>,
}

/// @ai:intent Read an explicit null answers field as an empty map
fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Submission {
    /// @ai:intent Build a submission from a student id and answer pairs
    /// @ai:effects pure
    pub fn new<I, K, V>(student_id: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            student_id: Some(student_id.into()),
            answers: answers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// @ai:intent Check the submission carries a student id and at least one answer
    /// @ai:effects pure
    pub fn is_complete(&self) -> bool {
        let has_id = self
            .student_id
            .as_deref()
            .map(|id| !id.is_empty())
            .unwrap_or(false);

        has_id && !self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_key_keeps_insertion_order() {
        let key: AnswerKey = [("3", "D"), ("1", "B"), ("2", "A")].into_iter().collect();
        let order: Vec<_> = key.questions().collect();
        assert_eq!(order, vec!["3", "1", "2"]);
        assert_eq!(key.correct_answer("1"), Some("B"));
        assert_eq!(key.correct_answer("9"), None);
    }

    #[test]
    fn test_question_text_falls_back_to_synthetic_label() {
        let text: QuestionText = [("1", "What is 2 + 2?")].into_iter().collect();
        assert_eq!(text.label("1"), "What is 2 + 2?");
        assert_eq!(text.label("2"), "Question 2");
    }

    #[test]
    fn test_submission_completeness() {
        assert!(Submission::new("S1", [("1", "B")]).is_complete());
        assert!(!Submission::new("", [("1", "B")]).is_complete());
        assert!(!Submission::new("S1", Vec::<(String, String)>::new()).is_complete());

        let missing_id = Submission {
            student_id: None,
            answers: [("1".to_string(), "B".to_string())].into_iter().collect(),
        };
        assert!(!missing_id.is_complete());
    }
}
