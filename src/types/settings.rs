//! Caller-supplied grid settings.
//!
//! Settings are display-only: changing them re-renders the grid but must
//! never mutate row data.

use serde::{Deserialize, Serialize};

/// Per-column visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnVisibility {
    pub code: bool,
    pub client: bool,
    pub phone: bool,
    pub price: bool,
    pub commission: bool,
    pub comment: bool,
    pub status: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            code: true,
            client: true,
            phone: true,
            price: true,
            commission: true,
            comment: true,
            status: true,
        }
    }
}

/// Text weight applied to the whole grid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Bold,
}

/// Horizontal alignment of cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-column text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAlignment {
    pub code: TextAlign,
    pub phone: TextAlign,
    pub price: TextAlign,
    pub commission: TextAlign,
    pub comment: TextAlign,
}

/// Full settings object passed down by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSettings {
    pub column_visibility: ColumnVisibility,
    /// Body font size in CSS pixels.
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub text_alignment: TextAlignment,
    pub coordinates_visibility: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            column_visibility: ColumnVisibility::default(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            text_alignment: TextAlignment::default(),
            coordinates_visibility: false,
        }
    }
}
