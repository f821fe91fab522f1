pub mod calculator;
pub mod shell;

pub use crate::domain::model::{OutputFormat, VolumeBreakdown, WellGeometry, WellPresets};
pub use crate::domain::ports::{LinePrompter, Prompter};
pub use crate::utils::error::Result;
