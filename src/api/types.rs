use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the explanation service accepts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Javascript,
    Java,
}

impl Language {
    /// Fixed selector order.
    pub const ALL: [Language; 3] = [Language::Python, Language::Javascript, Language::Java];

    /// Wire value sent in the request body.
    pub fn value(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
        }
    }

    /// Human-facing label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
            Language::Java => "Java",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::Python => Language::Javascript,
            Language::Javascript => Language::Java,
            Language::Java => Language::Python,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Language::Python => Language::Java,
            Language::Javascript => Language::Python,
            Language::Java => Language::Javascript,
        }
    }

    /// Parses a wire value, case-insensitively.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.value().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request body for `POST /explain`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Submission {
    pub code: String,
    pub language: Language,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineNote {
    pub line: i64,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuggestedTest {
    pub test_case: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Refactor {
    pub area: String,
    pub suggestion: String,
}

/// Structured result returned for one submission.
///
/// Every field is required: a body missing any of them fails to
/// deserialize instead of reaching the renderer half-formed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Explanation {
    pub summary: String,
    pub line_by_line: Vec<LineNote>,
    pub suggested_tests: Vec<SuggestedTest>,
    pub potential_refactors: Vec<Refactor>,
}

/// The four fixed views into an [`Explanation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    LineByLine,
    SuggestedTests,
    PotentialRefactors,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Summary,
        Tab::LineByLine,
        Tab::SuggestedTests,
        Tab::PotentialRefactors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::LineByLine => "Line-by-Line",
            Tab::SuggestedTests => "Suggested Tests",
            Tab::PotentialRefactors => "Potential Refactors",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Summary => 0,
            Tab::LineByLine => 1,
            Tab::SuggestedTests => 2,
            Tab::PotentialRefactors => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One list row in a non-summary tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub label: String,
    pub body: &'a str,
}

/// What a tab displays, resolved statically from the tab variant.
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent<'a> {
    Text(&'a str),
    Entries(Vec<Entry<'a>>),
}

impl Explanation {
    pub fn content(&self, tab: Tab) -> TabContent<'_> {
        match tab {
            Tab::Summary => TabContent::Text(&self.summary),
            Tab::LineByLine => TabContent::Entries(
                self.line_by_line
                    .iter()
                    .map(|note| Entry {
                        label: format!("Line {}:", note.line),
                        body: &note.explanation,
                    })
                    .collect(),
            ),
            Tab::SuggestedTests => TabContent::Entries(
                self.suggested_tests
                    .iter()
                    .map(|test| Entry {
                        label: test.test_case.clone(),
                        body: &test.description,
                    })
                    .collect(),
            ),
            Tab::PotentialRefactors => TabContent::Entries(
                self.potential_refactors
                    .iter()
                    .map(|refactor| Entry {
                        label: refactor.area.clone(),
                        body: &refactor.suggestion,
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Explanation {
        Explanation {
            summary: "Prints a greeting.".to_string(),
            line_by_line: vec![
                LineNote { line: 1, explanation: "Defines main.".to_string() },
                LineNote { line: 2, explanation: "Prints hello.".to_string() },
            ],
            suggested_tests: vec![SuggestedTest {
                test_case: "Output check".to_string(),
                description: "Captures stdout.".to_string(),
            }],
            potential_refactors: vec![],
        }
    }

    #[test]
    fn test_language_wire_values() {
        let json = serde_json::to_string(&Submission {
            code: "x = 1".to_string(),
            language: Language::Javascript,
        })
        .unwrap();
        assert_eq!(json, r#"{"code":"x = 1","language":"javascript"}"#);
    }

    #[test]
    fn test_language_labels_and_cycle() {
        let labels: Vec<_> = Language::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["Python", "JavaScript", "Java"]);
        assert_eq!(Language::default(), Language::Python);
        assert_eq!(Language::Java.next(), Language::Python);
        assert_eq!(Language::Python.prev(), Language::Java);
    }

    #[test]
    fn test_language_from_value() {
        assert_eq!(Language::from_value("JAVA"), Some(Language::Java));
        assert_eq!(Language::from_value("cobol"), None);
    }

    #[test]
    fn test_explanation_requires_all_fields() {
        let missing = r#"{"summary": "s", "line_by_line": [], "suggested_tests": []}"#;
        assert!(serde_json::from_str::<Explanation>(missing).is_err());

        let complete = r#"{
            "summary": "s",
            "line_by_line": [{"line": 3, "explanation": "e"}],
            "suggested_tests": [],
            "potential_refactors": [{"area": "a", "suggestion": "b"}]
        }"#;
        let parsed: Explanation = serde_json::from_str(complete).unwrap();
        assert_eq!(parsed.line_by_line[0].line, 3);
        assert_eq!(parsed.potential_refactors[0].area, "a");
    }

    #[test]
    fn test_tab_content_matches_fields() {
        let explanation = sample();
        assert_eq!(
            explanation.content(Tab::Summary),
            TabContent::Text("Prints a greeting.")
        );

        match explanation.content(Tab::LineByLine) {
            TabContent::Entries(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[1].label, "Line 2:");
                assert_eq!(entries[1].body, "Prints hello.");
            }
            other => panic!("Expected entries, got {other:?}"),
        }

        match explanation.content(Tab::PotentialRefactors) {
            TabContent::Entries(entries) => assert!(entries.is_empty()),
            other => panic!("Expected entries, got {other:?}"),
        }
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::default(), Tab::Summary);
        assert_eq!(Tab::PotentialRefactors.next(), Tab::Summary);
        assert_eq!(Tab::Summary.prev(), Tab::PotentialRefactors);
        assert_eq!(Tab::from_index(2), Some(Tab::SuggestedTests));
        assert_eq!(Tab::from_index(4), None);
    }
}
