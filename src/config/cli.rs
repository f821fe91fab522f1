use crate::config::toml_config::TomlConfig;
use crate::domain::model::{OutputFormat, WellPresets};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "cement-calc")]
#[command(about = "Cement slurry volume for the casing/open-hole annulus")]
pub struct CliConfig {
    /// Well height (depth) in feet; prompted for when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Open hole (wellbore) diameter in inches
    #[arg(long, allow_hyphen_values = true)]
    pub hole_diameter: Option<String>,

    /// Casing outside diameter in inches
    #[arg(long, allow_hyphen_values = true)]
    pub casing_od: Option<String>,

    /// Excess cement percentage; blank means 0
    #[arg(long, allow_hyphen_values = true)]
    pub excess: Option<String>,

    /// Path to a TOML well profile
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format; overrides the profile
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn presets(&self) -> WellPresets {
        WellPresets {
            height: self.height.clone(),
            hole_diameter: self.hole_diameter.clone(),
            casing_od: self.casing_od.clone(),
            excess_percentage: self.excess.clone(),
        }
    }

    /// 先驗證旗標，再載入並驗證 `--config` 指向的設定檔
    pub fn load_profile(&self) -> Result<Option<TomlConfig>> {
        self.validate()?;

        let Some(path) = self.config.as_deref() else {
            return Ok(None);
        };
        let profile = TomlConfig::from_file(path)?;
        profile.validate()?;
        Ok(Some(profile))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
