//! Terminal progress display for long enumerations

use crate::algorithm::Progress;
use crate::io::configuration::{MIN_POINTS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static ANCHOR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} anchors"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Anchor-level progress bar shared by all enumeration workers
///
/// Small rugs finish instantly, so the bar stays hidden below
/// `MIN_POINTS_FOR_PROGRESS` lattice points.
pub struct ProgressManager {
    bar: ProgressBar,
    visible: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            visible: true,
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            visible: false,
        }
    }

    /// Label shown in front of the bar
    pub fn set_label(&self, label: &'static str) {
        self.bar.set_prefix(label);
    }

    /// Anchors completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total anchors announced by the last `start`
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl Progress for ProgressManager {
    fn start(&self, units: usize) {
        self.bar.reset();
        self.bar.set_length(units as u64);
        if self.visible && units >= MIN_POINTS_FOR_PROGRESS {
            self.bar.set_style(ANCHOR_STYLE.clone());
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        }
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
        self.bar.set_draw_target(ProgressDrawTarget::hidden());
    }
}
