use serde::{Deserialize, Serialize};

/// Controls how a `Matrix2D` is rendered by `Display` and
/// [`crate::utils::logging::format_matrix`].
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PrintOptions {
    /// Fixed number of decimal places. `None` prints each cell with its own `Display`.
    #[serde(default)]
    pub decimal_places: Option<usize>,

    /// Number of rows shown before eliding with `...`.
    #[serde(default)]
    pub max_rows: Option<usize>,

    /// Number of leading and trailing columns shown when a row is elided.
    #[serde(default)]
    pub max_cols: Option<usize>,
}

impl PrintOptions {
    pub fn new(
        decimal_places: Option<usize>,
        max_rows: Option<usize>,
        max_cols: Option<usize>,
    ) -> Self {
        Self {
            decimal_places,
            max_rows,
            max_cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prints_everything() {
        let opts = PrintOptions::default();
        assert_eq!(opts.decimal_places, None);
        assert_eq!(opts.max_rows, None);
        assert_eq!(opts.max_cols, None);
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let opts: PrintOptions = serde_json::from_str(r#"{"decimal_places": 2}"#).unwrap();
        assert_eq!(opts, PrintOptions::new(Some(2), None, None));
    }
}
