//! Load claims triangles from CSV files
//!
//! Format: one origin period per record, oldest first, no header row.
//! Each field is a cumulative loss amount; a blank field is an unobserved
//! cell. Records may stop at the evaluation diagonal; short rows are padded
//! with unobserved cells to the width of the longest row.

use super::Triangle;
use csv::ReaderBuilder;
use std::error::Error;
use std::path::Path;

/// Load a triangle from a CSV file.
pub fn load_triangle<P: AsRef<Path>>(path: P) -> Result<Triangle, Box<dyn Error>> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    triangle_from_csv(reader)
}

/// Load a triangle from any reader (e.g., string buffer, network stream).
pub fn load_triangle_from_reader<R: std::io::Read>(reader: R) -> Result<Triangle, Box<dyn Error>> {
    let csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    triangle_from_csv(csv_reader)
}

fn triangle_from_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Triangle, Box<dyn Error>> {
    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let mut row = Vec::with_capacity(record.len());
        for (col, field) in record.iter().enumerate() {
            let field = field.trim();
            if field.is_empty() {
                row.push(None);
            } else {
                let value: f64 = field.parse().map_err(|e| {
                    format!("origin row {}, age {}: bad value {:?} ({})", index, col, field, e)
                })?;
                row.push(Some(value));
            }
        }
        rows.push(row);
    }

    // Pad short records out to the full development width
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for (index, row) in rows.iter_mut().enumerate() {
        if row.len() < width {
            log::debug!(
                "padding origin row {} from {} to {} development ages",
                index,
                row.len(),
                width
            );
            row.resize(width, None);
        }
    }

    Ok(Triangle::new(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_ragged_triangle() {
        let csv = "100,120,130\n110,140\n120\n";
        let tri = load_triangle_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(tri.rows(), 3);
        assert_eq!(tri.cols(), 3);
        assert_eq!(tri.cell(0, 2), Some(130.0));
        assert_eq!(tri.cell(1, 2), None);
        assert_eq!(tri.cell(2, 1), None);
    }

    #[test]
    fn test_blank_fields_are_unobserved() {
        let csv = "100,120,130\n110,140,\n120,,\n";
        let tri = load_triangle_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(tri.latest_observed(1), Some((1, 140.0)));
        assert_eq!(tri.latest_observed(2), Some((0, 120.0)));
    }

    #[test]
    fn test_bad_value_is_reported_with_position() {
        let csv = "100,abc\n";
        let err = load_triangle_from_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("origin row 0"), "message: {}", message);
        assert!(message.contains("abc"), "message: {}", message);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = load_triangle_from_reader("".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no origin rows"));
    }
}
