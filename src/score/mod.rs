pub mod composite;
pub mod weighted;

pub use composite::{score_traits, PathwayScore, TraitScores};
pub use weighted::{score_quiz, CategoryScore, QuizScores};
