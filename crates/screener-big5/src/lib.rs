//! Big Five personality questionnaire.
//!
//! A fixed catalog of 25 statements, five per trait, and a pure scoring
//! function that turns 1–5 answers into 0–100 trait scores. Independent of
//! the resume pipeline.

pub mod catalog;
pub mod scoring;

pub use catalog::{CATALOG, QuestionnaireItem, Trait, item, items_for};
pub use scoring::{AnswerMap, TraitScoreSet, score};
