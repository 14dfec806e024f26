//! Level-by-level expansion of the packing.
//!
//! The gasket keeps an append-only history of accepted circles and a
//! frontier of triangles (three mutually tangent circles) still to be
//! filled. Each level:
//!
//! 1. Every frontier triangle yields four Descartes candidates.
//! 2. Each candidate runs through the validity filter against the full
//!    history, including circles accepted earlier in the same level.
//! 3. An accepted circle becomes the apex of three new triangles.
//! 4. The new triangles replace the frontier wholesale.
//!
//! Two of the four candidates per triangle are normally wrong-branch roots
//! and get rejected; all four are still computed, since choosing the branch
//! in advance is not reliable.

use tracing::{debug, info, trace, warn};

use crate::descartes::{next_circles, next_curvatures, CANDIDATES_PER_TRIANGLE};
use crate::palette::{Rgb, CIRCLE_COLORS};
use crate::{check_position_valid, Circle, Error, GasketConfig, Result, Seed};

/// Three mutually tangent circles, by index into the circle history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    #[inline]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub const fn indices(&self) -> [usize; 3] {
        self.0
    }
}

/// Why a candidate circle was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Center, radius or curvature is NaN or infinite
    NonFinite,
    /// Radius exceeds the configured maximum
    TooLarge,
    /// Center within the minimum separation of an accepted circle
    Duplicate,
    /// Not tangent to all three generating circles
    NotTangent,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::NonFinite => "non-finite",
            Rejection::TooLarge => "radius too large",
            Rejection::Duplicate => "duplicate center",
            Rejection::NotTangent => "not tangent to generators",
        };
        f.write_str(reason)
    }
}

/// Statistics for one expanded level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelStats {
    /// Level number (1 for the first expansion)
    pub level: usize,
    /// Frontier triangles expanded
    pub triangles: usize,
    /// Candidate circles computed
    pub candidates: usize,
    /// Candidates accepted into the gasket
    pub accepted: usize,
    pub non_finite: usize,
    pub too_large: usize,
    pub duplicate: usize,
    pub not_tangent: usize,
}

impl LevelStats {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::NonFinite => self.non_finite += 1,
            Rejection::TooLarge => self.too_large += 1,
            Rejection::Duplicate => self.duplicate += 1,
            Rejection::NotTangent => self.not_tangent += 1,
        }
    }

    /// Total rejected candidates.
    pub fn rejected(&self) -> usize {
        self.non_finite + self.too_large + self.duplicate + self.not_tangent
    }
}

/// Outcome of one `generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerateReport {
    /// One entry per level expanded by this call
    pub levels: Vec<LevelStats>,
}

impl GenerateReport {
    /// Circles accepted across all levels of this call.
    pub fn accepted(&self) -> usize {
        self.levels.iter().map(|l| l.accepted).sum()
    }

    /// Candidates computed across all levels of this call.
    pub fn candidates(&self) -> usize {
        self.levels.iter().map(|l| l.candidates).sum()
    }
}

/// An Apollonian gasket under construction.
///
/// Circles are only ever appended; consumers get read-only slices.
#[derive(Debug, Clone)]
pub struct Gasket {
    config: GasketConfig,
    circles: Vec<Circle>,
    lineage: Vec<Option<[usize; 3]>>,
    queue: Vec<Triangle>,
    circles_in_level: Vec<usize>,
    candidates_evaluated: usize,
}

impl Gasket {
    /// Create a gasket from the symmetric seed with default tolerances.
    pub fn new() -> Self {
        Self::seeded(Seed::default(), GasketConfig::default())
    }

    /// Create a gasket from a custom seed with default tolerances.
    pub fn with_seed(seed: Seed) -> Self {
        Self::seeded(seed, GasketConfig::default())
    }

    /// Create a gasket with custom tolerances.
    pub fn with_config(seed: Seed, config: GasketConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::seeded(seed, config))
    }

    fn seeded(seed: Seed, config: GasketConfig) -> Self {
        let mut gasket = Self {
            config,
            circles: Vec::new(),
            lineage: Vec::new(),
            queue: Vec::new(),
            circles_in_level: Vec::new(),
            candidates_evaluated: 0,
        };
        gasket.initialize(seed);
        gasket
    }

    fn initialize(&mut self, seed: Seed) {
        for circle in seed.circles() {
            self.circles.push(circle);
            self.lineage.push(None);
        }
        self.queue.push(Triangle::new(0, 1, 2));
        self.circles_in_level.push(self.circles.len());

        debug!("Seeded gasket with {} circles", self.circles.len());
    }

    /// Expand the gasket by `levels` additional levels.
    ///
    /// Calls are cumulative. Zero levels is a no-op; a negative count fails
    /// without touching the gasket.
    pub fn generate(&mut self, levels: i64) -> Result<GenerateReport> {
        let count = usize::try_from(levels).map_err(|_| Error::InvalidLevelCount(levels))?;

        let mut report = GenerateReport {
            levels: Vec::with_capacity(count),
        };
        for _ in 0..count {
            report.levels.push(self.expand_level());
        }

        info!(
            "Generated {} levels: {} candidates evaluated, {} circles in gasket",
            count,
            self.candidates_evaluated,
            self.circles.len()
        );

        Ok(report)
    }

    fn expand_level(&mut self) -> LevelStats {
        let mut stats = LevelStats {
            level: self.circles_in_level.len(),
            triangles: self.queue.len(),
            ..LevelStats::default()
        };

        let frontier = std::mem::take(&mut self.queue);
        let mut next_queue = Vec::with_capacity(frontier.len() * 3);

        for triangle in &frontier {
            let [i1, i2, i3] = triangle.indices();
            let (c1, c2, c3) = (self.circles[i1], self.circles[i2], self.circles[i3]);

            let curvatures = next_curvatures(&c1, &c2, &c3);
            let candidates = next_circles(&c1, &c2, &c3, curvatures);
            stats.candidates += CANDIDATES_PER_TRIANGLE;

            for candidate in candidates {
                if let Err(rejection) = self.classify_candidate([&c1, &c2, &c3], &candidate) {
                    trace!("Rejected candidate {}: {}", candidate, rejection);
                    stats.record(rejection);
                    continue;
                }

                let new = self.circles.len();
                self.circles.push(candidate);
                self.lineage.push(Some([i1, i2, i3]));
                stats.accepted += 1;

                next_queue.push(Triangle::new(i1, i2, new));
                next_queue.push(Triangle::new(i2, i3, new));
                next_queue.push(Triangle::new(i1, i3, new));
            }
        }

        self.candidates_evaluated += stats.candidates;
        self.circles_in_level.push(stats.accepted);
        self.queue = next_queue;

        debug!(
            "Level {}: {} triangles, {} accepted, {} rejected ({} duplicate, {} not tangent)",
            stats.level,
            stats.triangles,
            stats.accepted,
            stats.rejected(),
            stats.duplicate,
            stats.not_tangent
        );
        if stats.accepted == 0 && stats.triangles > 0 {
            warn!(
                "Level {} accepted no circles from {} triangles; expansion has stalled",
                stats.level, stats.triangles
            );
        }

        stats
    }

    /// Run the validity filter, reporting the first check that fails.
    ///
    /// Checks run in order: finiteness, radius bound, duplicate scan over
    /// every accepted circle, then tangency to each generator.
    pub fn classify_candidate(
        &self,
        generators: [&Circle; 3],
        candidate: &Circle,
    ) -> std::result::Result<(), Rejection> {
        if !candidate.is_finite() {
            return Err(Rejection::NonFinite);
        }

        if candidate.radius > self.config.max_radius {
            return Err(Rejection::TooLarge);
        }

        let min_separation = self.config.min_separation;
        if self
            .circles
            .iter()
            .any(|existing| existing.center.distance(&candidate.center) < min_separation)
        {
            return Err(Rejection::Duplicate);
        }

        if !generators
            .iter()
            .all(|generator| self.check_position_valid(generator, candidate))
        {
            return Err(Rejection::NotTangent);
        }

        Ok(())
    }

    /// Whether `candidate` would be accepted given the current history.
    pub fn is_valid_circle(&self, generators: [&Circle; 3], candidate: &Circle) -> bool {
        self.classify_candidate(generators, candidate).is_ok()
    }

    /// Tangency test using this gasket's tolerance.
    pub fn check_position_valid(&self, a: &Circle, b: &Circle) -> bool {
        check_position_valid(a, b, self.config.tangency_tolerance)
    }

    /// Every accepted circle, seeds first, in acceptance order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Accepted circle count per level; level 0 holds the seeds.
    pub fn circles_in_level(&self) -> &[usize] {
        &self.circles_in_level
    }

    /// Number of levels expanded so far.
    pub fn depth(&self) -> usize {
        self.circles_in_level.len() - 1
    }

    /// Triangles waiting to be expanded at the next level.
    pub fn queue(&self) -> &[Triangle] {
        &self.queue
    }

    /// Total Descartes candidates computed so far.
    pub fn candidates_evaluated(&self) -> usize {
        self.candidates_evaluated
    }

    pub fn config(&self) -> &GasketConfig {
        &self.config
    }

    /// Circles accepted at `level`.
    pub fn level_circles(&self, level: usize) -> Option<&[Circle]> {
        let count = *self.circles_in_level.get(level)?;
        let start: usize = self.circles_in_level[..level].iter().sum();
        Some(&self.circles[start..start + count])
    }

    /// Per-level slices of circles, level 0 first.
    pub fn levels(&self) -> impl Iterator<Item = &[Circle]> + '_ {
        let mut start = 0;
        self.circles_in_level.iter().map(move |&count| {
            let slice = &self.circles[start..start + count];
            start += count;
            slice
        })
    }

    /// Level at which the circle at `index` was accepted.
    pub fn level_of(&self, index: usize) -> Option<usize> {
        let mut end = 0;
        for (level, &count) in self.circles_in_level.iter().enumerate() {
            end += count;
            if index < end {
                return Some(level);
            }
        }
        None
    }

    /// Indices of the triangle that produced the circle at `index`.
    ///
    /// `None` for seed circles and out-of-range indices.
    pub fn parents_of(&self, index: usize) -> Option<[usize; 3]> {
        self.lineage.get(index).copied().flatten()
    }

    /// The preset color table.
    pub fn circle_colors(&self) -> &'static [Rgb] {
        &CIRCLE_COLORS
    }
}

impl Default for Gasket {
    fn default() -> Self {
        Self::new()
    }
}
