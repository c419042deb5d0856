//! Markup-to-grid parsing.
//!
//! Pure and I/O-free: takes the innerHTML snapshot of the grid container as
//! a plain string, so it can be tested offline against fixture strings. The
//! site renders one `.sodokoRow` element per row, one child element per
//! cell, and a `.fixed-value` descendant inside every cell that carries a
//! given digit.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use super::{Grid, GridError, SIZE};

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".sodokoRow").expect("static selector"));
static FIXED_VALUE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".fixed-value").expect("static selector"));

/// Structural mismatches between the captured markup and the expected
/// puzzle shape. Every variant carries the observed counts or content.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {SIZE} rows, found {0}")]
    RowCount(usize),
    #[error("expected {SIZE} cells, got {found} in {row}")]
    CellCount { row: String, found: usize },
    #[error("more than one fixed value in {0}")]
    AmbiguousCell(String),
    #[error("fixed value '{0}' is not a digit in 1..=9")]
    BadDigit(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parse the grid container's innerHTML into a validated grid, preserving
/// row and column order exactly as encountered.
pub fn parse_grid(markup: &str) -> Result<Grid, ParseError> {
    let document = Html::parse_fragment(markup);

    let rows: Vec<ElementRef<'_>> = document.select(&ROW_SELECTOR).collect();
    if rows.len() != SIZE {
        return Err(ParseError::RowCount(rows.len()));
    }

    let mut values = Vec::with_capacity(SIZE);
    for row in rows {
        let cells: Vec<ElementRef<'_>> = row.children().filter_map(ElementRef::wrap).collect();
        if cells.len() != SIZE {
            return Err(ParseError::CellCount {
                row: row.html(),
                found: cells.len(),
            });
        }

        let mut row_values = Vec::with_capacity(SIZE);
        for cell in cells {
            let fixed: Vec<ElementRef<'_>> = cell.select(&FIXED_VALUE_SELECTOR).collect();
            let value = match fixed.as_slice() {
                [] => 0,
                [given] => parse_digit(given)?,
                _ => return Err(ParseError::AmbiguousCell(cell.html())),
            };
            row_values.push(value);
        }
        values.push(row_values);
    }

    Ok(Grid::from_rows(values)?)
}

fn parse_digit(element: &ElementRef<'_>) -> Result<u8, ParseError> {
    let text: String = element.text().collect::<String>().trim().to_string();
    match text.parse::<u8>() {
        Ok(digit) if (1..=9).contains(&digit) => Ok(digit),
        _ => Err(ParseError::BadDigit(text)),
    }
}
