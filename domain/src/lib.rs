pub mod entity;
pub mod error;
pub mod feedback;
pub mod port;
pub mod report;
pub mod text;

pub use entity::*;
pub use error::DomainError;
pub use feedback::{classify, FeedbackMessage, FeedbackTier};
pub use port::*;
pub use report::ComparisonReport;
pub use text::diff::DiffEntry;
