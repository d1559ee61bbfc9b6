pub mod evaluate;

pub use evaluate::{evaluate_reading, health};
