//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Serialize};

/// A tracked household item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// At or below this quantity the item counts as low on stock
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
}

impl InventoryItem {
    /// Low-stock check against a given (possibly optimistic) quantity
    pub fn is_low_stock(&self, quantity: i64) -> bool {
        self.low_stock_threshold
            .is_some_and(|threshold| quantity <= threshold)
    }

    /// "3 L", "12"
    pub fn format_quantity(&self, quantity: i64) -> String {
        match &self.unit {
            Some(unit) if !unit.is_empty() => format!("{} {}", quantity, unit),
            _ => quantity.to_string(),
        }
    }
}

/// Family member role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages stock directly
    Admin,
    /// Proposes changes, cannot adjust stock
    #[default]
    Suggester,
}

impl Role {
    pub fn can_adjust_stock(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Suggester => "suggester",
        }
    }
}

/// The signed-in member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct AdjustRequest {
    pub delta: i64,
}

/// Authoritative quantity after an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustResponse {
    pub new_quantity: i64,
}
