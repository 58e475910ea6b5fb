pub mod questions;
pub mod traits;
