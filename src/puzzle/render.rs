//! ASCII rendering for diagnostic output.

use super::Grid;

/// Render the grid as nine text rows with 3×3 box rules; empty cells show
/// as `.`.
pub fn ascii(grid: &Grid) -> String {
    let mut out = String::new();
    for (r, row) in grid.cells().iter().enumerate() {
        if r > 0 && r % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        let line: Vec<String> = row
            .chunks(3)
            .map(|band| {
                band.iter()
                    .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::SIZE;

    #[test]
    fn renders_rules_and_empty_markers() {
        let mut rows = vec![vec![0u8; SIZE]; SIZE];
        rows[0][0] = 5;
        rows[4][4] = 9;
        let grid = Grid::from_rows(rows).unwrap();

        let text = ascii(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 . . | . . . | . . .");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[5], ". . . | . 9 . | . . .");
        assert_eq!(lines[7], "------+-------+------");
    }
}
