use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Assigned by the sheet, not derived from clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Partial,
    Absent,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = "1")]
    pub id: String,

    #[schema(example = "1")]
    pub employee_id: String,

    #[schema(example = "Deepak Dash")]
    pub employee_name: String,

    #[schema(example = "deepak.dash@company.com")]
    pub employee_email: String,

    #[serde(default, deserialize_with = "optional_timestamp")]
    #[schema(example = "2024-01-15T09:00:00", value_type = Option<String>, format = "date-time")]
    pub clock_in: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "optional_timestamp")]
    #[schema(example = "2024-01-15T17:30:00", value_type = Option<String>, format = "date-time")]
    pub clock_out: Option<NaiveDateTime>,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[serde(default)]
    #[schema(example = 8.5)]
    pub total_hours: Option<f64>,

    #[schema(example = "present")]
    pub status: AttendanceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Enforces the hours invariants on data read from the sheet export:
    /// never negative, and nothing but zero while the record has no clock-out.
    pub fn normalized(mut self) -> Self {
        self.total_hours = match (self.clock_out, self.total_hours) {
            (None, Some(_)) => Some(0.0),
            (_, Some(h)) if !h.is_finite() || h < 0.0 => Some(0.0),
            (_, hours) => hours,
        };
        self
    }
}

/// Sheet exports carry timestamps as naive `2024-01-15T09:00:00`, as RFC 3339
/// with an offset, or as an empty string when the field was never filled.
fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };

    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(t.naive_utc()));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(Some)
        .map_err(serde::de::Error::custom)
}
