use std::fmt::{self, Write};

use log::LevelFilter;

use crate::config::PrintOptions;
use crate::math::Matrix2D;

/// Initialise `env_logger` from `MATRIX2D_LOG`, defaulting to `error,matrix2d=info`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRIX2D_LOG", "error,matrix2d=info"))
        .try_init();
}

/// Render a matrix as nested brackets, one row per line.
///
/// Rows beyond `max_rows` are replaced by `...`. When a row has more than twice
/// `max_cols` columns, only the first and last `max_cols` cells are printed.
pub fn format_matrix<T: fmt::Display>(matrix: &Matrix2D<T>, options: &PrintOptions) -> String {
    let (nrows, ncols) = matrix.shape();
    let rows_to_print = options.max_rows.unwrap_or(nrows).min(nrows);
    let cols_to_print = options.max_cols.unwrap_or(ncols).min(ncols);

    let cell = |value: &T| match options.decimal_places {
        Some(places) => format!("{:.*}", places, value),
        None => format!("{}", value),
    };

    let mut out = String::from("[");
    for r in 0..rows_to_print {
        let row = matrix.row(r);
        let cells: Vec<String> = if cols_to_print * 2 < ncols {
            row[..cols_to_print]
                .iter()
                .map(&cell)
                .chain(std::iter::once("...".to_string()))
                .chain(row[ncols - cols_to_print..].iter().map(&cell))
                .collect()
        } else {
            row.iter().map(&cell).collect()
        };

        if r > 0 {
            out.push(' ');
        }
        // writing to a String cannot fail
        let _ = write!(out, "[{}]", cells.join(", "));
        if r + 1 < rows_to_print || rows_to_print < nrows {
            out.push_str(",\n");
        }
    }
    if rows_to_print < nrows {
        out.push_str(" ...");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_matrix_verbatim() {
        let m = Matrix2D::new(vec![vec![0, 1], vec![2, 3]]).unwrap();
        assert_eq!(format_matrix(&m, &PrintOptions::default()), "[[0, 1],\n [2, 3]]");
        assert_eq!(m.to_string(), "[[0, 1],\n [2, 3]]");
    }

    #[test]
    fn applies_decimal_places() {
        let m = Matrix2D::new(vec![vec![1.0, 2.5]]).unwrap();
        let opts = PrintOptions::new(Some(2), None, None);
        assert_eq!(format_matrix(&m, &opts), "[[1.00, 2.50]]");
    }

    #[test]
    fn truncates_rows_and_columns() {
        let m = Matrix2D::from_shape_vec((3, 5), (0..15).collect()).unwrap();
        let opts = PrintOptions::new(None, Some(1), Some(1));
        assert_eq!(format_matrix(&m, &opts), "[[0, ..., 4],\n ...]");
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
        log::info!("logger initialised twice without panicking");
    }
}
