use super::*;

#[test]
fn corners_of_21_symbol_are_finders() {
    for (r, c) in [(0, 0), (6, 6), (0, 14), (6, 20), (14, 0), (20, 6)] {
        assert!(in_finder_zone(r, c, 21, 21), "({r},{c}) should be a finder");
    }
}

#[test]
fn bottom_right_and_interior_are_not_finders() {
    for (r, c) in [(20, 20), (14, 14), (7, 7), (10, 10), (0, 7), (7, 0), (6, 13), (13, 6)] {
        assert!(!in_finder_zone(r, c, 21, 21), "({r},{c}) should not be a finder");
    }
}

#[test]
fn non_square_matrix_uses_own_dimensions() {
    assert!(in_finder_zone(0, 29, 21, 30));
    assert!(!in_finder_zone(0, 22, 21, 30));
    assert!(in_finder_zone(14, 0, 21, 30));
    assert!(!in_finder_zone(14, 29, 21, 30));
}

#[test]
fn tiny_matrix_is_entirely_finder() {
    for r in 0..3 {
        for c in 0..3 {
            assert!(in_finder_zone(r, c, 3, 3));
        }
    }
}
