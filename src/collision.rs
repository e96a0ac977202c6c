use crate::types::BoundingBox;

fn is_point_inside(area: &BoundingBox, point_row: i32, point_column: i32) -> bool {
    let rows_flag = area.row <= point_row && point_row < area.row + area.rows;
    let columns_flag = area.column <= point_column && point_column < area.column + area.columns;
    rows_flag && columns_flag
}

/// True when a corner of either box lies inside the other one.
///
/// Full containment and corner overlap are detected. Two boxes crossing
/// each other with no corner inside the other are not.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    let (a_opposite_row, a_opposite_column) = a.opposite_corner();
    let (b_opposite_row, b_opposite_column) = b.opposite_corner();

    is_point_inside(a, b.row, b.column)
        || is_point_inside(a, b_opposite_row, b_opposite_column)
        || is_point_inside(b, a.row, a.column)
        || is_point_inside(b, a_opposite_row, a_opposite_column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_inside_box() {
        let obstacle = BoundingBox::new(5, 5, 2, 2);
        assert!(overlaps(&obstacle, &BoundingBox::point(5, 5)));
        assert!(overlaps(&obstacle, &BoundingBox::point(6, 6)));
        assert!(overlaps(&obstacle, &BoundingBox::point(5, 6)));
        assert!(!overlaps(&obstacle, &BoundingBox::point(4, 4)));
        assert!(!overlaps(&obstacle, &BoundingBox::point(7, 7)));
        assert!(!overlaps(&obstacle, &BoundingBox::point(7, 5)));
    }

    #[test]
    fn test_full_containment() {
        let outer = BoundingBox::new(0, 0, 10, 10);
        let inner = BoundingBox::new(3, 3, 2, 2);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_partial_overlap() {
        let a = BoundingBox::new(0, 0, 3, 3);
        let b = BoundingBox::new(2, 2, 3, 3);
        assert!(overlaps(&a, &b));
        // Touching edges without sharing a cell
        let c = BoundingBox::new(3, 0, 3, 3);
        assert!(!overlaps(&a, &c));
    }

    fn arb_box() -> impl Strategy<Value = BoundingBox> {
        (-20..20i32, -20..20i32, 1..8i32, 1..8i32)
            .prop_map(|(row, column, rows, columns)| BoundingBox::new(row, column, rows, columns))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_itself(a in arb_box()) {
            prop_assert!(overlaps(&a, &a));
        }

        #[test]
        fn prop_disjoint_rows_never_overlap(a in arb_box(), gap in 0..5i32, column in -20..20i32, columns in 1..8i32, rows in 1..8i32) {
            let below = BoundingBox::new(a.row + a.rows + gap, column, rows, columns);
            prop_assert!(!overlaps(&a, &below));
        }

        #[test]
        fn prop_disjoint_columns_never_overlap(a in arb_box(), gap in 0..5i32, row in -20..20i32, rows in 1..8i32, columns in 1..8i32) {
            let right = BoundingBox::new(row, a.column + a.columns + gap, rows, columns);
            prop_assert!(!overlaps(&a, &right));
        }
    }
}
