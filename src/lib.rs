pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::calculator::{annular_volume_bbl, calculate_annular_volume, volume_breakdown};
pub use crate::core::shell::InteractiveShell;
pub use crate::domain::model::{OutputFormat, VolumeBreakdown, WellGeometry, WellPresets};
pub use crate::domain::ports::{LinePrompter, Prompter};
pub use crate::utils::error::{CalcError, Result};
