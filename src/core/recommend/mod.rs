//! Course recommenders: retake ranking and similar-course suggestions

pub mod retake;
pub mod similar;

pub use retake::{recommend_retakes, RetakeCandidate, MAX_RETAKE_RESULTS};
pub use similar::{
    recommend_similar, BuiltinRules, CourseSuggestion, Difficulty, KeywordRule, SuggestionRules,
    SuggestionTemplate, MAX_SIMILAR_RESULTS,
};
