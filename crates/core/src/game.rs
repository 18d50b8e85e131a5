//! Game create input: submission, draft, validation and the persistence payload.
//!
//! A [`GameSubmission`] is what the form posts. It becomes a [`DraftGame`]
//! (trimmed text plus the coerced availability flag), which either validates
//! into a [`NewGame`] or yields every violation at once.

use serde::{Deserialize, Serialize};

use crate::coerce::{coerce_int, is_numeric, is_whole_number, parse_number, parse_whole_number};
use crate::error::CoreError;
use crate::types::DbId;

pub const MSG_TITLE_REQUIRED: &str = "Title is required.";
pub const MSG_PLATFORM_REQUIRED: &str = "Platform is required.";
pub const MSG_CATEGORY_ID_INVALID: &str = "Category ID must be a whole number.";
pub const MSG_PRICE_INVALID: &str = "Price must be a valid number.";
pub const MSG_STOCK_INVALID: &str = "Stock must be a whole number.";
pub const MSG_AVAILABLE_INVALID: &str = "Available must be 0 or 1.";

/// Appended to the message list when the store refuses a valid draft.
pub const MSG_INSERT_FAILED: &str =
    "There was a problem inserting the new game. Please try again.";

/// Availability when the form does not send the flag at all.
pub const DEFAULT_AVAILABLE: i64 = 1;

/// Raw create-form fields as posted. Missing fields are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameSubmission {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub available: Option<String>,
}

/// Unvalidated create input.
///
/// Text fields are kept exactly as submitted (after trimming) so a failed
/// submission can be shown back to the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftGame {
    pub title: String,
    pub platform: String,
    pub category_id: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub available: i64,
}

/// Validated payload handed to the store for insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGame {
    pub title: String,
    pub platform: String,
    pub category_id: DbId,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub available: bool,
}

impl From<&GameSubmission> for DraftGame {
    fn from(submission: &GameSubmission) -> Self {
        let text = |field: &Option<String>| field.as_deref().unwrap_or("").trim().to_string();

        Self {
            title: text(&submission.title),
            platform: text(&submission.platform),
            category_id: text(&submission.category_id),
            description: text(&submission.description),
            price: text(&submission.price),
            stock: text(&submission.stock),
            available: submission
                .available
                .as_deref()
                .map_or(DEFAULT_AVAILABLE, coerce_int),
        }
    }
}

impl DraftGame {
    /// Check every field and collect all violations, in field order.
    ///
    /// Returns an empty list when the draft is valid.
    pub fn violations(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(MSG_TITLE_REQUIRED.to_string());
        }
        if self.platform.is_empty() {
            errors.push(MSG_PLATFORM_REQUIRED.to_string());
        }
        if !is_whole_number(&self.category_id) {
            errors.push(MSG_CATEGORY_ID_INVALID.to_string());
        }
        if !is_numeric(&self.price) {
            errors.push(MSG_PRICE_INVALID.to_string());
        }
        if !is_whole_number(&self.stock) {
            errors.push(MSG_STOCK_INVALID.to_string());
        }
        if self.available != 0 && self.available != 1 {
            errors.push(MSG_AVAILABLE_INVALID.to_string());
        }

        errors
    }

    /// Validate and convert into a [`NewGame`].
    pub fn validate(&self) -> Result<NewGame, CoreError> {
        let errors = self.violations();
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(NewGame {
            title: self.title.clone(),
            platform: self.platform.clone(),
            category_id: parse_whole_number(&self.category_id),
            description: self.description.clone(),
            price: parse_number(&self.price),
            stock: i32::try_from(parse_whole_number(&self.stock)).unwrap_or(i32::MAX),
            available: self.available == 1,
        })
    }
}
