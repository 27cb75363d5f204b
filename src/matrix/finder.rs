/// Edge length, in modules, of a finder pattern.
pub const FINDER_EDGE: usize = 7;

/// Returns `true` when `(row, col)` lies in one of the three finder patterns of a
/// `rows` x `cols` symbol: top-left, top-right or bottom-left.
///
/// Cells in these regions are always painted as plain squares, whatever the module style.
pub fn in_finder_zone(row: usize, col: usize, rows: usize, cols: usize) -> bool {
    let top = row < FINDER_EDGE;
    let bottom = row + FINDER_EDGE >= rows;
    let left = col < FINDER_EDGE;
    let right = col + FINDER_EDGE >= cols;
    (top && left) || (top && right) || (bottom && left)
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/finder.rs"]
mod tests;
