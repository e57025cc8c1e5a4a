//! Similar-course recommender
//!
//! Suggests alternate courses for entries the student scored low on,
//! keyed by keywords found in the course name. The keyword table is a
//! strategy object so a different catalog can be swapped in without
//! touching the match/dedup logic.

use crate::core::models::PlannedCourse;
use std::fmt;

/// Maximum number of suggestions returned.
pub const MAX_SIMILAR_RESULTS: usize = 3;

/// Rough difficulty tier of a suggested course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Builds on first-year material
    Intermediate,
    /// Assumes solid footing in the area
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intermediate => f.write_str("intermediate"),
            Self::Advanced => f.write_str("advanced"),
        }
    }
}

/// A suggested alternate course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSuggestion {
    /// Suggested course name
    pub name: String,

    /// Department offering the course
    pub department: String,

    /// Credit hours, copied from the low-grade source course
    pub credits: f64,

    /// Why this course was suggested
    pub rationale: String,

    /// Difficulty tier
    pub difficulty: Difficulty,
}

/// One suggestion entry in a keyword rule.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionTemplate {
    /// Suggested course name
    pub name: &'static str,
    /// Department offering the course
    pub department: &'static str,
    /// Why this course helps
    pub rationale: &'static str,
    /// Difficulty tier
    pub difficulty: Difficulty,
}

impl SuggestionTemplate {
    fn instantiate(&self, credits: f64) -> CourseSuggestion {
        CourseSuggestion {
            name: self.name.to_string(),
            department: self.department.to_string(),
            credits,
            rationale: self.rationale.to_string(),
            difficulty: self.difficulty,
        }
    }
}

/// A keyword and the suggestions it contributes when matched.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Lowercase keyword matched against course names
    pub keyword: &'static str,
    /// Suggestions contributed on a match (at most two per rule)
    pub suggestions: &'static [SuggestionTemplate],
}

/// Source of keyword rules for the recommender.
pub trait SuggestionRules {
    /// The rule table, in iteration order.
    fn rules(&self) -> &[KeywordRule];
}

/// The built-in keyword catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRules;

static BUILTIN_RULES: [KeywordRule; 4] = [
    KeywordRule {
        keyword: "programming",
        suggestions: &[
            SuggestionTemplate {
                name: "Advanced Programming",
                department: "Computer Science",
                rationale: "Strengthens programming fundamentals",
                difficulty: Difficulty::Intermediate,
            },
            SuggestionTemplate {
                name: "Software Engineering",
                department: "Computer Science",
                rationale: "Design methodology for larger programs",
                difficulty: Difficulty::Intermediate,
            },
        ],
    },
    KeywordRule {
        keyword: "data",
        suggestions: &[
            SuggestionTemplate {
                name: "Data Mining",
                department: "Computer Science",
                rationale: "Deepens data analysis skills",
                difficulty: Difficulty::Advanced,
            },
            SuggestionTemplate {
                name: "Big Data Processing",
                department: "Computer Science",
                rationale: "Working with large data sets",
                difficulty: Difficulty::Advanced,
            },
        ],
    },
    KeywordRule {
        keyword: "math",
        suggestions: &[
            SuggestionTemplate {
                name: "Discrete Mathematics",
                department: "Mathematics",
                rationale: "Foundation mathematics for computer science",
                difficulty: Difficulty::Intermediate,
            },
            SuggestionTemplate {
                name: "Probability and Statistics",
                department: "Mathematics",
                rationale: "Builds statistical reasoning",
                difficulty: Difficulty::Intermediate,
            },
        ],
    },
    KeywordRule {
        keyword: "network",
        suggestions: &[
            SuggestionTemplate {
                name: "Network Security",
                department: "Computer Science",
                rationale: "Deepens network security skills",
                difficulty: Difficulty::Advanced,
            },
            SuggestionTemplate {
                name: "Cloud Computing",
                department: "Computer Science",
                rationale: "Understanding distributed systems",
                difficulty: Difficulty::Advanced,
            },
        ],
    },
];

impl SuggestionRules for BuiltinRules {
    fn rules(&self) -> &[KeywordRule] {
        &BUILTIN_RULES
    }
}

/// Suggest alternate courses for low-grade plan entries.
///
/// Each course graded C+ or below is tested against every rule in the
/// catalog with a case-insensitive substring match on the course name; a
/// course may match several rules and contribute all of their
/// suggestions. Duplicate suggestion names are then removed (first
/// occurrence wins, order preserved) and the list is cut to
/// [`MAX_SIMILAR_RESULTS`].
#[must_use]
pub fn recommend_similar(
    courses: &[PlannedCourse],
    catalog: &dyn SuggestionRules,
) -> Vec<CourseSuggestion> {
    let mut suggestions: Vec<CourseSuggestion> = Vec::new();

    for course in courses.iter().filter(|c| c.grade.is_low()) {
        let name = course.name.to_lowercase();
        for rule in catalog.rules() {
            if name.contains(rule.keyword) {
                suggestions.extend(
                    rule.suggestions
                        .iter()
                        .map(|template| template.instantiate(course.credits)),
                );
            }
        }
    }

    let mut unique: Vec<CourseSuggestion> = Vec::new();
    for suggestion in suggestions {
        if unique.len() == MAX_SIMILAR_RESULTS {
            break;
        }
        if !unique.iter().any(|s| s.name == suggestion.name) {
            unique.push(suggestion);
        }
    }
    unique
}
