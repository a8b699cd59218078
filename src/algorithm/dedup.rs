use std::collections::HashSet;

/// Order-independent identity of a triangle
///
/// Holds the logical grid indices of the three vertices in ascending order,
/// so all six orderings of the same vertices produce the same key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TriangleKey([usize; 3]);

impl TriangleKey {
    /// Build the canonical key for three vertex indices in any order
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut indices = [a, b, c];
        indices.sort_unstable();
        Self(indices)
    }

    /// Vertex indices in ascending order
    pub const fn indices(&self) -> [usize; 3] {
        self.0
    }
}

/// Set of triangles already counted
///
/// Tracks how many candidates were rejected as repeats so callers can
/// confirm every triangle was met under all of its vertex orderings.
#[derive(Default, Debug, Clone)]
pub struct TriangleSet {
    seen: HashSet<TriangleKey>,

    /// Deduplication statistics
    pub stats: DedupStats,
}

/// Counters for deduplication effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    /// Candidates that introduced a new triangle
    pub inserted: u64,
    /// Candidates that repeated a known triangle
    pub repeats: u64,
}

impl TriangleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate, returning `true` the first time its triangle is seen
    pub fn insert(&mut self, key: TriangleKey) -> bool {
        if self.seen.insert(key) {
            self.stats.inserted += 1;
            true
        } else {
            self.stats.repeats += 1;
            false
        }
    }

    /// Test whether a triangle has been recorded
    pub fn contains(&self, key: &TriangleKey) -> bool {
        self.seen.contains(key)
    }

    /// Number of distinct triangles
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Test if no triangle has been recorded
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Total candidates offered so far
    pub const fn candidates(&self) -> u64 {
        self.stats.inserted + self.stats.repeats
    }
}
