use crate::domain::model::{OutputFormat, WellPresets};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_finite, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Well profile: a TOML file that pre-fills the calculator inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub well: WellProfile,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellProfile {
    pub height_ft: Option<f64>,
    pub hole_diameter_in: Option<f64>,
    pub casing_od_in: Option<f64>,
    pub excess_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WELL_DEPTH})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let well = &self.well;
        let fields = [
            ("well.height_ft", well.height_ft),
            ("well.hole_diameter_in", well.hole_diameter_in),
            ("well.casing_od_in", well.casing_od_in),
            ("well.excess_percentage", well.excess_percentage),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                validate_finite(field, value)?;
            }
        }

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    /// 轉為 shell 的預填值。數字以 `Display` 轉回文字，再走同一條解析路徑。
    pub fn presets(&self) -> WellPresets {
        WellPresets {
            height: self.well.height_ft.map(|v| v.to_string()),
            hole_diameter: self.well.hole_diameter_in.map(|v| v.to_string()),
            casing_od: self.well.casing_od_in.map(|v| v.to_string()),
            excess_percentage: self.well.excess_percentage.map(|v| v.to_string()),
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref()?.format
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_profile() {
        let toml_content = r#"
[well]
height_ft = 10000
hole_diameter_in = 12.25
casing_od_in = 9.625
excess_percentage = 20

[output]
format = "json"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.well.height_ft, Some(10000.0));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.log_level(), Some("debug"));

        let presets = config.presets();
        assert_eq!(presets.height.as_deref(), Some("10000"));
        assert_eq!(presets.casing_od.as_deref(), Some("9.625"));
        assert_eq!(presets.excess_percentage.as_deref(), Some("20"));
    }

    #[test]
    fn test_empty_profile() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.presets(), WellPresets::default());
        assert_eq!(config.output_format(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CEMENT_CALC_TEST_DEPTH", "7500");

        let toml_content = r#"
[well]
height_ft = ${CEMENT_CALC_TEST_DEPTH}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.well.height_ft, Some(7500.0));

        std::env::remove_var("CEMENT_CALC_TEST_DEPTH");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(matches!(
            TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n"),
            Err(CalcError::ConfigValidationError { ref message, .. }) if message.contains("xml")
        ));
    }

    #[test]
    fn test_text_format() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Text));
    }

    #[test]
    fn test_non_finite_well_value_rejected() {
        let config = TomlConfig::from_toml_str("[well]\nheight_ft = nan\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[well\nheight_ft = 1"),
            Err(CalcError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[well]\ncasing_od_in = 7.0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.well.casing_od_in, Some(7.0));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            TomlConfig::from_file("/nonexistent/well.toml"),
            Err(CalcError::ConfigError { .. })
        ));
    }
}
