use crate::core::calculator::{
    format_result_line, volume_breakdown, CASING_OD_FIELD, EXCESS_FIELD, HEIGHT_FIELD,
    HOLE_DIAMETER_FIELD,
};
use crate::domain::model::{OutputFormat, VolumeBreakdown, WellGeometry, WellPresets};
use crate::domain::ports::Prompter;
use crate::utils::error::{CalcError, Result};

pub const BANNER: &str = "Cement Slurry Volume Calculator";
pub const HEIGHT_PROMPT: &str = "Enter the height (depth) of the well (in feet): ";
pub const HOLE_DIAMETER_PROMPT: &str = "Enter the diameter of the open hole (wellbore) (in inches): ";
pub const CASING_OD_PROMPT: &str = "Enter the outside diameter (OD) of the casing (in inches): ";
pub const EXCESS_PROMPT: &str = "Enter the excess cement percentage (optional, default is 0): ";

/// One pass of read, compute, print. No re-prompting on bad input.
pub struct InteractiveShell<P: Prompter> {
    prompter: P,
    presets: WellPresets,
    format: OutputFormat,
}

impl<P: Prompter> InteractiveShell<P> {
    pub fn new(prompter: P) -> Self {
        Self {
            prompter,
            presets: WellPresets::default(),
            format: OutputFormat::Text,
        }
    }

    pub fn with_presets(mut self, presets: WellPresets) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    pub fn run(&mut self) -> Result<VolumeBreakdown> {
        if self.format == OutputFormat::Text {
            self.prompter.say(BANNER)?;
        }

        let geometry = self.collect_geometry()?;
        tracing::info!(
            height_ft = geometry.height_ft,
            hole_diameter_in = geometry.hole_diameter_in,
            casing_od_in = geometry.casing_od_in,
            excess_percentage = geometry.excess_percentage,
            "inputs collected"
        );

        let breakdown = volume_breakdown(&geometry);
        if geometry.casing_od_in >= geometry.hole_diameter_in {
            tracing::warn!(
                "casing OD {} in is not smaller than hole diameter {} in; volume is {:.2} bbl",
                geometry.casing_od_in,
                geometry.hole_diameter_in,
                breakdown.total_volume_bbl
            );
        }

        match self.format {
            OutputFormat::Text => {
                self.prompter.say("")?;
                self.prompter
                    .say(&format_result_line(breakdown.total_volume_bbl))?;
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&breakdown)?;
                self.prompter.say(&json)?;
            }
        }

        Ok(breakdown)
    }

    // 四個欄位都先讀完再轉換，錯誤的 height 也會看到全部提示
    fn collect_geometry(&mut self) -> Result<WellGeometry> {
        let height = self.answer(self.presets.height.clone(), HEIGHT_PROMPT, HEIGHT_FIELD)?;
        let hole = self.answer(
            self.presets.hole_diameter.clone(),
            HOLE_DIAMETER_PROMPT,
            HOLE_DIAMETER_FIELD,
        )?;
        let casing = self.answer(self.presets.casing_od.clone(), CASING_OD_PROMPT, CASING_OD_FIELD)?;
        let excess = self.answer(
            self.presets.excess_percentage.clone(),
            EXCESS_PROMPT,
            EXCESS_FIELD,
        )?;

        WellGeometry::from_text(&height, &hole, &casing, &excess)
    }

    fn answer(&mut self, preset: Option<String>, prompt: &str, field: &str) -> Result<String> {
        if let Some(value) = preset {
            tracing::debug!(field, value = %value, "using preset value");
            return Ok(value);
        }

        self.prompter
            .ask(prompt)?
            .ok_or_else(|| CalcError::InputClosed {
                field: field.to_string(),
            })
    }
}
