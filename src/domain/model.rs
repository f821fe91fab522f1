use serde::{Deserialize, Serialize};

pub const INCHES_PER_FOOT: f64 = 12.0;

/// US oilfield barrel expressed in cubic feet.
pub const CUBIC_FEET_PER_BARREL: f64 = 5.615;

/// Geometry of one cementing job: well depth in feet, diameters in inches,
/// excess as a percentage of the annular volume.
///
/// Nothing here is range checked. A casing OD larger than the hole simply
/// produces a negative volume downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellGeometry {
    pub height_ft: f64,
    pub hole_diameter_in: f64,
    pub casing_od_in: f64,
    #[serde(default)]
    pub excess_percentage: f64,
}

impl WellGeometry {
    pub fn new(height_ft: f64, hole_diameter_in: f64, casing_od_in: f64) -> Self {
        Self {
            height_ft,
            hole_diameter_in,
            casing_od_in,
            excess_percentage: 0.0,
        }
    }

    pub fn with_excess(mut self, excess_percentage: f64) -> Self {
        self.excess_percentage = excess_percentage;
        self
    }
}

/// Every intermediate of the slurry volume arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeBreakdown {
    pub geometry: WellGeometry,
    pub hole_area_ft2: f64,
    pub casing_area_ft2: f64,
    pub annular_area_ft2: f64,
    pub annular_volume_ft3: f64,
    pub excess_volume_ft3: f64,
    pub total_volume_ft3: f64,
    pub total_volume_bbl: f64,
}

/// Values already known before the shell starts asking, from flags or a
/// well profile. Fields left `None` are prompted for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WellPresets {
    pub height: Option<String>,
    pub hole_diameter: Option<String>,
    pub casing_od: Option<String>,
    pub excess_percentage: Option<String>,
}

impl WellPresets {
    /// Fill the gaps in `self` from `fallback`. Existing values win.
    pub fn or(self, fallback: WellPresets) -> WellPresets {
        WellPresets {
            height: self.height.or(fallback.height),
            hole_diameter: self.hole_diameter.or(fallback.hole_diameter),
            casing_od: self.casing_od.or(fallback.casing_od),
            excess_percentage: self.excess_percentage.or(fallback.excess_percentage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_excess_to_zero() {
        let geometry = WellGeometry::new(10000.0, 12.25, 9.625);
        assert_eq!(geometry.excess_percentage, 0.0);
        assert_eq!(geometry.with_excess(20.0).excess_percentage, 20.0);
    }

    #[test]
    fn test_presets_precedence() {
        let flags = WellPresets {
            height: Some("8000".to_string()),
            ..Default::default()
        };
        let profile = WellPresets {
            height: Some("10000".to_string()),
            casing_od: Some("9.625".to_string()),
            ..Default::default()
        };

        let merged = flags.or(profile);
        assert_eq!(merged.height.as_deref(), Some("8000"));
        assert_eq!(merged.casing_od.as_deref(), Some("9.625"));
        assert!(merged.hole_diameter.is_none());
        assert!(merged.excess_percentage.is_none());
    }

    #[test]
    fn test_geometry_deserialize_without_excess() {
        let geometry: WellGeometry = serde_json::from_str(
            r#"{"height_ft": 100.0, "hole_diameter_in": 8.5, "casing_od_in": 7.0}"#,
        )
        .unwrap();
        assert_eq!(geometry, WellGeometry::new(100.0, 8.5, 7.0));
    }
}
