//! Tests for trace record formatting and shape reporting

#[cfg(test)]
mod tests {
    use rug_triangles::algorithm::trace::{
        BruteForceRecord, CrystalRecord, TriangleKind, TriangleRecord,
    };
    use rug_triangles::spatial::direction::Direction;
    use rug_triangles::spatial::grid::Point;

    // Tests brute-force lines list vertices last-visited first with capitalised flags
    // Verified by printing vertices in scan order
    #[test]
    fn test_brute_force_line() {
        let record = BruteForceRecord {
            kind: TriangleKind::OneDiagonal,
            vertices: [
                Point::new(1, 1, false),
                Point::new(1, 2, true),
                Point::new(2, 2, false),
            ],
        };

        assert_eq!(
            record.to_string(),
            "one-diag triangle: (2,2), isKiteCenter = False;\t(1,2), isKiteCenter = True;\t(1,1), isKiteCenter = False"
        );
        assert_eq!(
            TriangleRecord::BruteForce(record).to_string(),
            record.to_string()
        );
    }

    // Tests crystal lines list the anchor flag, both steps and all three vertices
    // Verified by printing the second step before the first
    #[test]
    fn test_crystal_line() {
        let record = CrystalRecord {
            anchor: Point::new(3, 3, false),
            direction: Direction::from_index(4).unwrap(),
            first: [2, 2],
            second: [4, 2],
        };

        assert_eq!(
            record.to_string(),
            "New triangle:\tpKC=F\t[-1,-1]\t[1,-1]\t(3,3)\t(2,2)\t(4,2)"
        );
        assert_eq!(record.kind(), TriangleKind::TwoDiagonal);
    }

    // Tests shapes and vertex positions through the shared record type
    // Verified by reporting crystal tracers before the anchor
    #[test]
    fn test_record_accessors() {
        let crystal = TriangleRecord::Crystal(CrystalRecord {
            anchor: Point::new(2, 1, true),
            direction: Direction::from_index(0).unwrap(),
            first: [1, 1],
            second: [2, 2],
        });
        assert_eq!(crystal.kind(), TriangleKind::OneDiagonal);
        assert_eq!(crystal.positions(), [[2, 1], [1, 1], [2, 2]]);

        let brute = TriangleRecord::BruteForce(BruteForceRecord {
            kind: TriangleKind::TwoDiagonal,
            vertices: [
                Point::new(1, 1, false),
                Point::new(2, 2, false),
                Point::new(3, 1, false),
            ],
        });
        assert_eq!(brute.kind(), TriangleKind::TwoDiagonal);
        assert_eq!(brute.positions(), [[1, 1], [2, 2], [3, 1]]);
        assert_eq!(TriangleKind::TwoDiagonal.to_string(), "two-diag");
    }
}
