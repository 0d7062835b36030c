use serde::{Deserialize, Serialize};

use crate::payment::BillingDetails;
use crate::{CoreError, CoreResult};

/// Traveler details collected on the booking screen.
///
/// Created empty when the screen is entered and mutated one field at a time as the traveler
/// types. Fields are independent; nothing here is derived or cross-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub traveler_count: u32,
    pub special_requests: Option<String>,
}

impl Default for TravelerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            traveler_count: 1,
            special_requests: None,
        }
    }
}

impl TravelerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// An empty value clears the field.
    pub fn set_special_requests(&mut self, requests: impl Into<String>) {
        let requests = requests.into();
        self.special_requests = if requests.is_empty() { None } else { Some(requests) };
    }

    pub fn set_traveler_count(&mut self, count: u32) -> CoreResult<()> {
        if count == 0 {
            return Err(CoreError::ValidationError(
                "At least one traveler is required".to_string(),
            ));
        }
        self.traveler_count = count;
        Ok(())
    }

    /// Apply the raw contents of the traveler-count text field.
    pub fn set_traveler_count_text(&mut self, text: &str) -> CoreResult<()> {
        let count = text.trim().parse::<u32>().map_err(|_| {
            CoreError::ValidationError(format!("Invalid traveler count: {:?}", text))
        })?;
        self.set_traveler_count(count)
    }

    /// Billing details exactly as entered, for the confirmation call.
    pub fn billing_details(&self) -> BillingDetails {
        BillingDetails {
            name: self.name.clone(),
            email: self.email.clone().into(),
            phone: self.phone.clone().into(),
        }
    }
}

/// Latest state reported by the card-input widget.
///
/// Only `is_complete` is read; `details` carries whatever the vendor widget sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInputState {
    #[serde(alias = "complete")]
    pub is_complete: bool,
    #[serde(default)]
    pub details: serde_json::Value,
}

impl CardInputState {
    pub fn complete() -> Self {
        Self { is_complete: true, details: serde_json::Value::Null }
    }

    pub fn incomplete() -> Self {
        Self::default()
    }
}
