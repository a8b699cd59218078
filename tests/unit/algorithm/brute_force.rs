//! Tests for the exhaustive triple scan and its admissibility rules

#[cfg(test)]
mod tests {
    use rug_triangles::RugError;
    use rug_triangles::algorithm::brute_force::{
        BruteForce, classify_triple, reduce_candidates, scan_anchor,
    };
    use rug_triangles::algorithm::{
        EnumerationOptions, NoProgress, TriangleCounter, TriangleKind, TriangleRecord,
    };
    use rug_triangles::spatial::grid::{KiteRule, Point, RugGrid};

    fn checkerboard(x: i32, y: i32) -> Point {
        Point::classified(x, y, KiteRule::Checkerboard)
    }

    // Tests a one-diagonal triangle with a single kite center is admitted
    // Verified by requiring zero kite centers for one-diagonal triangles
    #[test]
    fn test_one_diagonal_admitted() {
        let kind = classify_triple(&checkerboard(1, 1), &checkerboard(1, 2), &checkerboard(2, 2))
            .unwrap();
        assert_eq!(kind, Some(TriangleKind::OneDiagonal));
    }

    // Tests two kite centers may not share a one-diagonal triangle
    // Verified by relaxing the kite-center limit to three
    #[test]
    fn test_one_diagonal_rejects_kite_center_pairs() {
        let kind = classify_triple(&checkerboard(1, 2), &checkerboard(2, 1), &checkerboard(1, 1))
            .unwrap();
        assert_eq!(kind, None);
    }

    // Tests a two-diagonal triangle needs kite-edge vertices only
    // Verified by dropping the kite-center check for two-diagonal triangles
    #[test]
    fn test_two_diagonal_rules() {
        let a = checkerboard(1, 1);
        let b = checkerboard(2, 2);
        let c = checkerboard(3, 1);
        assert_eq!(
            classify_triple(&a, &b, &c).unwrap(),
            Some(TriangleKind::TwoDiagonal)
        );
        assert_eq!(
            classify_triple(&c, &a, &b).unwrap(),
            Some(TriangleKind::TwoDiagonal)
        );

        let kite_apex = Point::new(2, 2, true);
        assert_eq!(classify_triple(&a, &kite_apex, &c).unwrap(), None);
    }

    // Tests triples without exactly one flat and one vertical partner edge are rejected
    // Verified by accepting any one-unit triple
    #[test]
    fn test_rejects_wrong_slope_mix() {
        let collinear = classify_triple(
            &Point::new(1, 1, false),
            &Point::new(2, 1, false),
            &Point::new(3, 1, false),
        );
        assert_eq!(collinear.unwrap(), None);

        let skewed = classify_triple(
            &Point::new(1, 1, false),
            &Point::new(2, 2, false),
            &Point::new(4, 3, false),
        );
        assert_eq!(skewed.unwrap(), None);

        let diagonal_line = classify_triple(
            &Point::new(1, 1, false),
            &Point::new(2, 2, false),
            &Point::new(3, 3, false),
        );
        assert_eq!(diagonal_line.unwrap(), None);
    }

    // Tests coincident vertices abort classification instead of being skipped
    // Verified by returning Ok(None) for coincident points
    #[test]
    fn test_coincident_vertices_error() {
        let p = Point::new(2, 2, false);
        let result = classify_triple(&p, &Point::new(3, 3, false), &p);
        assert!(matches!(result, Err(RugError::CoincidentPoints { .. })));
    }

    // Tests the scan from one anchor keeps scan order and meets each triangle twice
    // Verified by skipping the third-equals-second guard
    #[test]
    fn test_scan_anchor_on_unit_rug() {
        let grid = RugGrid::build(1, 1, KiteRule::Checkerboard).unwrap();
        let candidates = scan_anchor(&grid, 0).unwrap();

        assert_eq!(candidates.len(), 4);
        let first = candidates.first().unwrap();
        assert_eq!(first.key.indices(), [0, 1, 3]);
        assert_eq!(
            first.record.vertices.map(|p| p.position()),
            [[1, 1], [1, 2], [2, 2]]
        );
        assert!(candidates.iter().all(|c| c.record.kind == TriangleKind::OneDiagonal));

        assert!(scan_anchor(&grid, 4).unwrap().is_empty());
    }

    // Tests reduction keeps the first-visited ordering of each triangle
    // Verified by reducing anchors in reverse
    #[test]
    fn test_reduce_keeps_first_occurrence() {
        let grid = RugGrid::build(1, 1, KiteRule::Checkerboard).unwrap();
        let anchors: Vec<_> = (0..grid.len())
            .map(|index| scan_anchor(&grid, index).unwrap())
            .collect();

        let (enumeration, seen) = reduce_candidates(anchors, EnumerationOptions::traced());
        assert_eq!(enumeration.count, 2);
        assert_eq!(enumeration.candidates, 12);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen.stats.repeats, 10);

        let positions: Vec<[[i32; 2]; 3]> = enumeration
            .records
            .iter()
            .map(TriangleRecord::positions)
            .collect();
        assert_eq!(
            positions,
            vec![[[1, 1], [1, 2], [2, 2]], [[1, 1], [2, 1], [2, 2]]]
        );
    }

    // Tests the worked example count and its shape breakdown
    // Verified by counting raw candidates instead of distinct keys
    #[test]
    fn test_worked_example() {
        let grid = RugGrid::build(5, 2, KiteRule::Checkerboard).unwrap();
        let enumeration = BruteForce
            .enumerate(&grid, EnumerationOptions::default(), &NoProgress)
            .unwrap();

        assert_eq!(enumeration.count, 43);
        assert_eq!(enumeration.one_diagonal, 28);
        assert_eq!(enumeration.two_diagonal, 15);
        assert!(enumeration.records.is_empty());
    }

    // Tests every triangle is met under all six vertex orderings
    // Verified by starting the third loop after the second vertex
    #[test]
    fn test_candidates_are_six_times_count() {
        for (columns, rows) in [(1, 1), (2, 2), (3, 1), (4, 3)] {
            let grid = RugGrid::build(columns, rows, KiteRule::Checkerboard).unwrap();
            let enumeration = BruteForce
                .enumerate(&grid, EnumerationOptions::default(), &NoProgress)
                .unwrap();
            assert_eq!(
                enumeration.candidates,
                6 * enumeration.count,
                "{columns}x{rows}"
            );
        }
    }

    // Tests traced enumeration records each distinct triangle once
    // Verified by recording repeats as well
    #[test]
    fn test_trace_records_match_count() {
        let grid = RugGrid::build(3, 2, KiteRule::Checkerboard).unwrap();
        let enumeration = BruteForce
            .enumerate(&grid, EnumerationOptions::traced(), &NoProgress)
            .unwrap();

        assert_eq!(enumeration.records.len() as u64, enumeration.count);
        assert_eq!(enumeration.count, 23);
        assert!(
            enumeration
                .records
                .iter()
                .all(|record| matches!(record, TriangleRecord::BruteForce(_)))
        );
    }

    // Tests rugs one lattice line wide hold no triangles
    // Verified by letting collinear triples through
    #[test]
    fn test_degenerate_rug() {
        for (columns, rows) in [(0, 0), (0, 4), (3, 0)] {
            let grid = RugGrid::build(columns, rows, KiteRule::Checkerboard).unwrap();
            assert_eq!(BruteForce.count(&grid).unwrap(), 0);
        }
    }
}
