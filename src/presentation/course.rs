/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A course as listed in the catalogue
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier
    #[serde(default)]
    pub id: Value,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Duration label, e.g. "3 месяца"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Number of enrolled students
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<u64>,
    /// Current price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Price before discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    /// Whether the course is shown with a crossed-out old price
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        matches!((self.old_price, self.price), (Some(old), Some(new)) if old > new)
    }

    /// Discount as a whole percentage of the old price
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        match (self.old_price, self.price) {
            (Some(old), Some(new)) if old > new && old > 0.0 && new >= 0.0 => {
                Some((((old - new) / old) * 100.0).round().clamp(0.0, 100.0) as u8)
            }
            _ => None,
        }
    }
}

/// A published course review
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CourseReview {
    /// Review identifier
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    /// Star rating, fractional values allowed
    #[serde(default)]
    pub rating: f64,
    /// Comment text
    #[serde(default)]
    pub comment: String,
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Headline platform counters
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformStats {
    /// Registered students
    #[serde(default)]
    pub students: u64,
    /// Published courses
    #[serde(default)]
    pub courses: u64,
    /// Satisfaction percentage
    #[serde(default)]
    pub satisfaction: f64,
}
