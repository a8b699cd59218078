//! Tests for anchor-level progress tracking

#[cfg(test)]
mod tests {
    use rayon::prelude::*;
    use rug_triangles::algorithm::{Crystal, EnumerationOptions, Progress, TriangleCounter};
    use rug_triangles::io::progress::ProgressManager;
    use rug_triangles::spatial::grid::{KiteRule, RugGrid};

    // Tests ProgressManager counts units announced and completed
    // Verified by skipping the length update in start
    #[test]
    fn test_progress_manager_counts() {
        let pm = ProgressManager::hidden();
        pm.set_label("crystal");
        pm.start(10);
        for _ in 0..4 {
            pm.advance();
        }

        assert_eq!(pm.length(), Some(10));
        assert_eq!(pm.position(), 4);
        pm.finish();
    }

    // Tests ticks from many workers are all recorded
    // Verified by replacing inc with set_position
    #[test]
    fn test_progress_manager_parallel_ticks() {
        let pm = ProgressManager::hidden();
        pm.start(500);
        (0..500).into_par_iter().for_each(|_| pm.advance());
        assert_eq!(pm.position(), 500);
        pm.finish();
    }

    // Tests an enumeration ticks once per lattice point and restarts cleanly
    // Verified by ticking once per direction pattern
    #[test]
    fn test_progress_follows_enumeration() {
        let grid = RugGrid::build(3, 3, KiteRule::Checkerboard).unwrap();
        let pm = ProgressManager::default();

        Crystal
            .enumerate(&grid, EnumerationOptions::default(), &pm)
            .unwrap();
        assert_eq!(pm.length(), Some(16));

        pm.start(4);
        assert_eq!(pm.position(), 0);
        pm.finish();
    }
}
