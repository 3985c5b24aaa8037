//! Box-drawn text tables with per-column alignment.
//!
//! A [`Table`] is created with a fixed number of columns, populated through
//! [`Table::set_header`] and [`Table::append_row`], and rendered once. Column
//! widths are tracked incrementally on every insertion, so rendering never
//! re-scans the content.

use itertools::Itertools;
use std::fmt;

const TOP_LEFT: &str = "┌";
const TOP_MID: &str = "┬";
const TOP_RIGHT: &str = "┐";
const MID_LEFT: &str = "├";
const MID_MID: &str = "┼";
const MID_RIGHT: &str = "┤";
const BOTTOM_LEFT: &str = "└";
const BOTTOM_MID: &str = "┴";
const BOTTOM_RIGHT: &str = "┘";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

const DEFAULT_PADDING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("table must have at least one column")]
    NoColumns,
    #[error("expected {expected} column alignments, got {found}")]
    AlignmentCount { expected: usize, found: usize },
    #[error("expected {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },
}

#[derive(Debug)]
pub struct Table {
    arity: usize,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
    padding: usize,
    alignments: Vec<Alignment>,
}

impl Table {
    pub fn new(arity: usize, alignments: Vec<Alignment>) -> Result<Self, TableError> {
        if arity == 0 {
            return Err(TableError::NoColumns);
        }
        if alignments.len() != arity {
            return Err(TableError::AlignmentCount {
                expected: arity,
                found: alignments.len(),
            });
        }

        Ok(Self {
            arity,
            header: vec![String::new(); arity],
            rows: Vec::new(),
            widths: vec![0; arity],
            padding: DEFAULT_PADDING,
            alignments,
        })
    }

    pub fn set_header(&mut self, cells: Vec<String>) -> Result<(), TableError> {
        self.check_arity(&cells)?;
        self.track_widths(&cells);
        self.header = cells;
        Ok(())
    }

    pub fn append_row(&mut self, cells: Vec<String>) -> Result<(), TableError> {
        self.check_arity(&cells)?;
        self.track_widths(&cells);
        self.rows.push(cells);
        Ok(())
    }

    /// Rendered display lines: top border, header, separator, one line per
    /// row in insertion order, bottom border.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.border(TOP_LEFT, TOP_MID, TOP_RIGHT));
        // The header is always left-justified, whatever the columns are set to.
        lines.push(self.row_line(&self.header, |_| Alignment::Left));
        lines.push(self.border(MID_LEFT, MID_MID, MID_RIGHT));
        for row in &self.rows {
            lines.push(self.row_line(row, |idx| self.alignments[idx]));
        }
        lines.push(self.border(BOTTOM_LEFT, BOTTOM_MID, BOTTOM_RIGHT));

        lines
    }

    fn check_arity(&self, cells: &[String]) -> Result<(), TableError> {
        if cells.len() != self.arity {
            return Err(TableError::CellCount {
                expected: self.arity,
                found: cells.len(),
            });
        }
        Ok(())
    }

    fn track_widths(&mut self, cells: &[String]) {
        for (width, cell) in self.widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    fn border(&self, left: &str, junction: &str, right: &str) -> String {
        let runs = self
            .widths
            .iter()
            .map(|width| HORIZONTAL.repeat(width + self.padding * 2))
            .join(junction);

        format!("{left}{runs}{right}")
    }

    fn row_line(
        &self,
        cells: &[String],
        alignment_for: impl Fn(usize) -> Alignment,
    ) -> String {
        let pad = " ".repeat(self.padding);

        let cols = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let width = self.widths[idx];
                let justified = match alignment_for(idx) {
                    Alignment::Left => format!("{cell:<width$}"),
                    Alignment::Right => format!("{cell:>width$}"),
                };
                format!("{pad}{justified}{pad}")
            })
            .join(VERTICAL);

        format!("{VERTICAL}{cols}{VERTICAL}")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
