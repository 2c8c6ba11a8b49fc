use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Display options for the pixel grid.
///
/// This is the document the tool is configured with, either from a JSON file
/// or assembled from command line flags. All eight fields are required and
/// the key set is closed; anything else in the document is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Fill color behind the pixel grid
    pub background_color: String,

    /// Color of the border drawn around each pixel cell
    pub border_color: String,

    /// Thickness of the border around each pixel cell (e.g. "1px")
    pub border_size: String,

    /// Number of pixel columns in the grid
    pub columns: usize,

    /// Color of a pixel in the off state
    pub pixel_off_color: String,

    /// Color of a pixel in the on state
    pub pixel_on_color: String,

    /// Edge length of a single pixel cell, in points
    pub pixel_size: f32,

    /// Number of pixel rows in the grid
    pub rows: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_string(),
            border_color: "#333333".to_string(),
            border_size: "1px".to_string(),
            columns: 8,
            pixel_off_color: "#111111".to_string(),
            pixel_on_color: "#00ff00".to_string(),
            pixel_size: 10.0,
            rows: 8,
        }
    }
}

impl Options {
    /// Check the semantic constraints the document format itself does not
    /// encode. A zero-sized grid or a non-positive pixel size deserializes
    /// fine but cannot be displayed.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.columns == 0 {
            return Err(OptionsError::ZeroDimension { field: "columns" });
        }
        if self.rows == 0 {
            return Err(OptionsError::ZeroDimension { field: "rows" });
        }
        if !self.pixel_size.is_finite() || self.pixel_size <= 0.0 {
            return Err(OptionsError::BadPixelSize {
                value: self.pixel_size,
            });
        }
        Ok(())
    }

    /// Read an options document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write this options document to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OptionsError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Unable to read or write the options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid options document: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Option '{field}' must be at least 1")]
    ZeroDimension { field: &'static str },
    #[error("Option 'pixelSize' must be a positive number (got {value})")]
    BadPixelSize { value: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r##"{
        "backgroundColor": "#000000",
        "borderColor": "#333333",
        "borderSize": "1px",
        "columns": 8,
        "pixelOffColor": "#111111",
        "pixelOnColor": "#00ff00",
        "pixelSize": 10,
        "rows": 8
    }"##;

    #[test]
    fn example_document_is_accepted() {
        let options: Options = serde_json::from_str(EXAMPLE).unwrap();
        assert_eq!(options, Options::default());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn missing_field_is_rejected() {
        let document = EXAMPLE.replace(r##""columns": 8,"##, "");
        let result = serde_json::from_str::<Options>(&document);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let document = EXAMPLE.replacen('{', r##"{ "gridColor": "#ff0000","##, 1);
        let result = serde_json::from_str::<Options>(&document);
        assert!(result.is_err());
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let text = serde_json::to_string(&Options::default()).unwrap();
        for key in [
            "backgroundColor",
            "borderColor",
            "borderSize",
            "columns",
            "pixelOffColor",
            "pixelOnColor",
            "pixelSize",
            "rows",
        ] {
            assert!(text.contains(key), "missing key {key}");
        }
    }

    #[test]
    fn zero_columns_deserialize_but_fail_validation() {
        // The document format is type-checked only; rejecting a degenerate
        // grid is validate()'s job.
        let document = EXAMPLE.replace(r##""columns": 8"##, r##""columns": 0"##);
        let options: Options = serde_json::from_str(&document).unwrap();
        assert!(matches!(
            options.validate(),
            Err(OptionsError::ZeroDimension { field: "columns" })
        ));
    }

    #[test]
    fn zero_rows_fail_validation() {
        let options = Options {
            rows: 0,
            ..Options::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::ZeroDimension { field: "rows" })
        ));
    }

    #[test]
    fn non_positive_pixel_size_fails_validation() {
        for pixel_size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            let options = Options {
                pixel_size,
                ..Options::default()
            };
            assert!(options.validate().is_err(), "accepted {pixel_size}");
        }
    }
}
