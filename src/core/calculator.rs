use crate::domain::model::{VolumeBreakdown, WellGeometry, CUBIC_FEET_PER_BARREL, INCHES_PER_FOOT};
use crate::utils::error::Result;
use crate::utils::validation::{parse_optional_or, parse_required};
use std::f64::consts::PI;

pub const HEIGHT_FIELD: &str = "height";
pub const HOLE_DIAMETER_FIELD: &str = "hole diameter";
pub const CASING_OD_FIELD: &str = "casing OD";
pub const EXCESS_FIELD: &str = "excess percentage";

impl WellGeometry {
    /// 由文字輸入建立幾何資料；excess 空白時為 0
    pub fn from_text(height: &str, hole_diameter: &str, casing_od: &str, excess: &str) -> Result<Self> {
        Ok(WellGeometry::new(
            parse_required(HEIGHT_FIELD, height)?,
            parse_required(HOLE_DIAMETER_FIELD, hole_diameter)?,
            parse_required(CASING_OD_FIELD, casing_od)?,
        )
        .with_excess(parse_optional_or(EXCESS_FIELD, excess, 0.0)?))
    }
}

fn circle_area_ft2(diameter_ft: f64) -> f64 {
    PI * (diameter_ft / 2.0).powi(2)
}

/// Slurry volume needed for the annulus, with every intermediate kept.
///
/// The annular area is not clamped: `casing_od_in >= hole_diameter_in`
/// yields zero or a negative volume.
pub fn volume_breakdown(geometry: &WellGeometry) -> VolumeBreakdown {
    let hole_ft = geometry.hole_diameter_in / INCHES_PER_FOOT;
    let casing_ft = geometry.casing_od_in / INCHES_PER_FOOT;

    let hole_area_ft2 = circle_area_ft2(hole_ft);
    let casing_area_ft2 = circle_area_ft2(casing_ft);
    let annular_area_ft2 = hole_area_ft2 - casing_area_ft2;

    let annular_volume_ft3 = annular_area_ft2 * geometry.height_ft;
    let excess_volume_ft3 = annular_volume_ft3 * (geometry.excess_percentage / 100.0);
    let total_volume_ft3 = annular_volume_ft3 + excess_volume_ft3;

    let breakdown = VolumeBreakdown {
        geometry: *geometry,
        hole_area_ft2,
        casing_area_ft2,
        annular_area_ft2,
        annular_volume_ft3,
        excess_volume_ft3,
        total_volume_ft3,
        total_volume_bbl: total_volume_ft3 / CUBIC_FEET_PER_BARREL,
    };

    tracing::debug!(?breakdown, "computed slurry volume");
    breakdown
}

/// Total slurry volume in barrels.
pub fn calculate_annular_volume(geometry: &WellGeometry) -> f64 {
    volume_breakdown(geometry).total_volume_bbl
}

pub fn annular_volume_bbl(height_ft: f64, hole_diameter_in: f64, casing_od_in: f64, excess_percentage: f64) -> f64 {
    calculate_annular_volume(
        &WellGeometry::new(height_ft, hole_diameter_in, casing_od_in).with_excess(excess_percentage),
    )
}

pub fn format_result_line(volume_bbl: f64) -> String {
    format!(
        "The required amount of cement slurry is {:.2} barrels (bbl).",
        volume_bbl
    )
}
