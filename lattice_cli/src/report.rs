//! JSON report envelope shared by every subcommand.

use anyhow::Result;
use chrono::Local;
use lattice_core::types::{DMatrix, Matrix3};
use serde::Serialize;

/// A command result tagged with the stamp of the run that produced it
#[derive(Debug, Serialize)]
pub struct Report<T: Serialize> {
    pub stamp: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(command: &str, body: T) -> Self {
        Report {
            stamp: execution_stamp(command),
            body,
        }
    }

    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// `lattice_cli.<command> v<version> (<timestamp>)`
pub fn execution_stamp(command: &str) -> String {
    format!(
        "lattice_cli.{command} v{} ({})",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M:%S%z")
    )
}

/// Row-major nested arrays read better in JSON than nalgebra's flat storage
pub fn rows3(m: &Matrix3) -> [[f64; 3]; 3] {
    let mut rows = [[0.0; 3]; 3];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = m[(i, j)];
        }
    }
    rows
}

pub fn rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter().map(|r| r.iter().copied().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_stamp_format() {
        let stamp = execution_stamp("shear");
        assert!(stamp.starts_with(&format!("lattice_cli.shear v{} (", env!("CARGO_PKG_VERSION"))));
        assert!(stamp.ends_with(')'));
    }

    #[test]
    fn test_rows_are_row_major() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(rows(&m), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let r = rows3(&Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
        assert_eq!(r[0], [1.0, 2.0, 3.0]);
        assert_eq!(r[2][0], 7.0);
    }

    #[test]
    fn test_report_flattens_body() {
        #[derive(Serialize)]
        struct Body {
            total: usize,
        }
        let json = serde_json::to_value(Report::new("systems", Body { total: 12 })).unwrap();
        assert_eq!(json["total"], 12);
        assert!(json["stamp"].as_str().unwrap().starts_with("lattice_cli.systems"));
    }
}
