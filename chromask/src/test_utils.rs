//! Helpers shared by unit tests.

use common::Grid;

use crate::classify::BinaryMask;

/// Build a mask from ASCII rows: `#` is foreground, anything else background.
pub fn mask_from_ascii(rows: &[&str]) -> BinaryMask {
    let cols = rows.first().map_or(0, |r| r.len());
    assert!(
        rows.iter().all(|r| r.len() == cols),
        "all rows must have the same length"
    );
    Grid::from_fn(rows.len(), cols, |row, col| rows[row].as_bytes()[col] == b'#')
}

/// Render a mask back to ASCII rows, for readable assertion failures.
pub fn mask_to_ascii(mask: &BinaryMask) -> Vec<String> {
    (0..mask.rows())
        .map(|row| {
            (0..mask.cols())
                .map(|col| if mask[(row, col)] { '#' } else { '.' })
                .collect()
        })
        .collect()
}
