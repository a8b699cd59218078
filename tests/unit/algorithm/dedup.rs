//! Tests for canonical triangle keys and the deduplication set

#[cfg(test)]
mod tests {
    use rug_triangles::algorithm::dedup::{DedupStats, TriangleKey, TriangleSet};

    // Tests all six vertex orderings collapse to one key
    // Verified by keeping the input order in the key
    #[test]
    fn test_key_is_order_independent() {
        let orderings = [
            (4, 9, 2),
            (4, 2, 9),
            (9, 4, 2),
            (9, 2, 4),
            (2, 4, 9),
            (2, 9, 4),
        ];
        for (a, b, c) in orderings {
            assert_eq!(TriangleKey::new(a, b, c), TriangleKey::new(2, 4, 9));
        }
        assert_eq!(TriangleKey::new(9, 2, 4).indices(), [2, 4, 9]);
        assert_ne!(TriangleKey::new(2, 4, 9), TriangleKey::new(2, 4, 8));
    }

    // Tests the set admits a triangle once and counts later repeats
    // Verified by counting repeats as insertions
    #[test]
    fn test_set_insert_and_stats() {
        let mut set = TriangleSet::new();
        assert!(set.is_empty());

        assert!(set.insert(TriangleKey::new(0, 1, 3)));
        assert!(!set.insert(TriangleKey::new(3, 0, 1)));
        assert!(set.insert(TriangleKey::new(0, 2, 3)));
        assert!(!set.insert(TriangleKey::new(1, 3, 0)));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&TriangleKey::new(1, 0, 3)));
        assert!(!set.contains(&TriangleKey::new(1, 2, 3)));
        assert_eq!(
            set.stats,
            DedupStats {
                inserted: 2,
                repeats: 2
            }
        );
        assert_eq!(set.candidates(), 4);
    }
}
