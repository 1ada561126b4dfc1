use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "1",
        "name": "Deepak Dash",
        "email": "deepakdash1@company.com",
        "department": "Engineering",
        "position": "Senior Developer",
        "start_date": "2023-01-15",
        "status": "active"
    })
)]
pub struct Employee {
    #[schema(example = "1")]
    pub id: String,

    #[schema(example = "Deepak Dash")]
    pub name: String,

    #[schema(example = "deepakdash1@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Senior Developer")]
    pub position: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = true)]
    pub avatar: Option<String>,

    #[schema(
        example = "2023-01-15",
        value_type = String,
        format = "date"
    )]
    pub start_date: NaiveDate,

    #[schema(example = "active")]
    pub status: EmployeeStatus,
}
