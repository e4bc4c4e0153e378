//! Reservation Record Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation wizard submission payload
///
/// `date` and `time` stay optional/free-form here because the wizard lets
/// the guest submit before selecting them; the reservation recorder
/// rejects anything outside the fixed slot grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}

/// Immutable reservation snapshot
///
/// Appended to the append-only `reservations` log with the same lifecycle
/// as order records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    /// One of the fixed time slots, e.g. "7:00 PM"
    pub time: String,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Menu item ids the guest asked to have prepared in advance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}
