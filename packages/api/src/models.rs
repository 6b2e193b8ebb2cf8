//! Backend record shapes.
//!
//! These mirror the backend JSON verbatim; the client performs no validation
//! on them beyond optional numeric/date formatting for display.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which dashboard and operations a caller is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Member,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Member, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Title-case label for nav headers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Member => "Member",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub fee_package_id: Option<i64>,
    pub fee_package_name: Option<String>,
    pub fee_package_amount: Option<f64>,
    pub assigned_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    pub member_id: Option<i64>,
    pub member_name: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePackage {
    pub id: i64,
    pub name: String,
    pub amount: Option<f64>,
    pub duration_months: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplement {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub meal_plan: Option<String>,
    pub calories: Option<i64>,
    pub duration_weeks: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub target_audience: Option<String>,
    pub read_flag: Option<bool>,
    pub created_at: Option<String>,
}

// Request payloads. Absent optionals serialize as null, which is what the
// backend expects for cleared fields.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub join_date: Option<String>,
    pub status: String,
    pub role: String,
    pub fee_package_id: Option<i64>,
    pub fee_package_name: Option<String>,
    pub fee_package_amount: Option<f64>,
    pub assigned_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub member_id: i64,
    pub amount: f64,
    pub description: String,
    pub due_date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePackagePayload {
    pub name: String,
    pub amount: f64,
    pub duration_months: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub target_audience: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementPayload {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanPayload {
    pub title: String,
    pub description: String,
    pub meal_plan: String,
    pub category: String,
    pub calories: i64,
    pub duration_weeks: i64,
}

/// Sort key for backend `createdAt` timestamps (ISO local datetimes).
/// Unparseable or absent values sort to the epoch, i.e. last in a
/// newest-first ordering.
pub fn created_at_sort_key(created_at: Option<&str>) -> NaiveDateTime {
    created_at
        .and_then(|s| s.parse::<NaiveDateTime>().ok())
        .unwrap_or(NaiveDateTime::UNIX_EPOCH)
}

/// Date portion of a backend timestamp for table cells; falls back to the
/// raw string when the shape is unexpected, and a dash when absent.
pub fn display_date(value: Option<&str>) -> String {
    match value {
        Some(s) => match s.parse::<NaiveDateTime>() {
            Ok(dt) => dt.format("%Y-%m-%d").to_string(),
            Err(_) => s.split('T').next().unwrap_or(s).to_string(),
        },
        None => "—".to_string(),
    }
}

/// `$12.34`-style amount, `$0.00` when absent.
pub fn display_amount(amount: Option<f64>) -> String {
    format!("${:.2}", amount.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_member_tolerates_missing_optionals() {
        let member: Member = serde_json::from_str(
            r#"{"id":1,"name":"Jo","email":"jo@x.com"}"#,
        )
        .unwrap();
        assert_eq!(member.id, 1);
        assert!(member.fee_package_name.is_none());
    }

    #[test]
    fn test_notification_type_field() {
        let n: Notification = serde_json::from_str(
            r#"{"id":5,"title":"Hi","message":"Pay up","type":"warning"}"#,
        )
        .unwrap();
        assert_eq!(n.kind, "warning");
        assert!(n.read_flag.is_none());
    }

    #[test]
    fn test_created_at_ordering() {
        let newer = created_at_sort_key(Some("2024-03-01T10:00:00"));
        let older = created_at_sort_key(Some("2024-02-01T10:00:00"));
        let absent = created_at_sort_key(None);
        assert!(newer > older);
        assert!(older > absent);
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(display_date(Some("2024-03-01T10:00:00")), "2024-03-01");
        assert_eq!(display_date(Some("2024-03-01")), "2024-03-01");
        assert_eq!(display_date(None), "—");
        assert_eq!(display_amount(Some(10.5)), "$10.50");
        assert_eq!(display_amount(None), "$0.00");
    }
}
