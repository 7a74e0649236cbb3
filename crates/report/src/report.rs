//! Plain-text report tables.
//!
//! A [`Table`] renders as a title line, a header row, and one line per
//! [`Row`]. A row whose search failed prints the error in place of the
//! numbers, so one failing type never hides the others.

use std::fmt;

use macheps_search::{Error, Solution};
use num_traits::ToPrimitive;

const LABEL_WIDTH: usize = 25;

/// A finished search, widened to `f64` for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The epsilon found.
    pub epsilon: f64,
    /// `-log2(epsilon)`.
    pub bits: f64,
}

impl<S: ToPrimitive> From<Solution<S>> for Measurement {
    fn from(solution: Solution<S>) -> Self {
        Self {
            epsilon: solution.epsilon_f64(),
            bits: solution.bits(),
        }
    }
}

/// One report line: a type label, its search outcome, and the type's own
/// epsilon constant when it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Type name shown in the first column.
    pub label: &'static str,
    /// The measurement, or the error that ended the search.
    pub outcome: Result<Measurement, Error>,
    /// The type's epsilon constant, if it defines one.
    pub builtin: Option<f64>,
}

impl Row {
    /// Creates a row from a search result.
    pub fn new<S: ToPrimitive>(
        label: &'static str,
        result: Result<Solution<S>, Error>,
        builtin: Option<f64>,
    ) -> Self {
        Self {
            label,
            outcome: result.map(Measurement::from),
            builtin,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label;
        match &self.outcome {
            Ok(m) => {
                write!(
                    f,
                    "{label:<width$}: {:>13.6e}, {:>10.2}",
                    m.epsilon,
                    m.bits,
                    width = LABEL_WIDTH
                )?;
                if let Some(builtin) = self.builtin {
                    write!(f, ", {builtin:.6e}")?;
                }
                Ok(())
            }
            Err(error) => write!(f, "{label:<width$}: {error}", width = LABEL_WIDTH),
        }
    }
}

/// A titled list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    title: &'static str,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table.
    #[must_use]
    pub fn new(title: &'static str, rows: Vec<Row>) -> Self {
        Self { title, rows }
    }

    /// Returns the title line.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the rows in report order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(
            f,
            "{:<width$}: {:>13}, {:>10}, Type.Epsilon",
            "Type",
            "Machine EPS",
            "EPS=2^-n",
            width = LABEL_WIDTH
        )?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use macheps_search::Status;

    fn converged(epsilon: f64, iters: usize) -> Result<Solution<f64>, Error> {
        Ok(Solution {
            status: Status::Converged,
            epsilon,
            iters,
        })
    }

    #[test]
    fn measurement_widens_solution() {
        let measurement = Measurement::from(Solution {
            status: Status::Converged,
            epsilon: f32::EPSILON,
            iters: 23,
        });

        assert_eq!(
            measurement,
            Measurement {
                epsilon: f64::from(f32::EPSILON),
                bits: 23.0,
            }
        );
        assert_relative_eq!(measurement.bits, 23.0);
    }

    #[test]
    fn renders_converged_row() {
        let row = Row::new("`f64`", converged(f64::EPSILON, 52), Some(f64::EPSILON));

        assert_eq!(
            row.to_string(),
            "`f64`                    :  2.220446e-16,      52.00, 2.220446e-16"
        );
    }

    #[test]
    fn omits_missing_builtin() {
        let row = Row::new("`Vec2`", converged(0.5, 1), None);
        assert_eq!(
            row.to_string(),
            "`Vec2`                   :   5.000000e-1,       1.00"
        );
    }

    #[test]
    fn renders_timeout_in_place_of_numbers() {
        let row = Row::new::<f64>(
            "`Decimal`",
            Err(Error::ConvergenceTimeout { max_iters: 8 }),
            None,
        );

        assert_eq!(
            row.to_string(),
            "`Decimal`                : did not converge within 8 iterations"
        );
    }

    #[test]
    fn table_has_title_and_header() {
        let table = Table::new("title", vec![Row::new("`f64`", converged(0.25, 2), None)]);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "title");
        assert_eq!(
            lines[1],
            "Type                     :   Machine EPS,   EPS=2^-n, Type.Epsilon"
        );
        assert!(lines[2].starts_with("`f64`"));
    }
}
