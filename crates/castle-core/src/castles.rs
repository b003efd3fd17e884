//! Castle placement over a one-dimensional topography.
//!
//! A castle goes on the first sample and on every peak or valley. Runs of
//! equal samples count as a single elevation level, so a peak or valley is
//! any point where the direction of change between distinct levels flips.
//! The last sample is not privileged: a trailing monotonic run ends without
//! a castle.
use serde::Serialize;

use crate::trend::Trend;

/// Why a castle sits at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SiteKind {
    /// Index 0 always hosts a castle.
    First,
    /// Rising run turns into a falling run.
    Peak,
    /// Falling run turns into a rising run.
    Valley,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastleSite {
    pub index: usize,
    pub kind: SiteKind,
}

/// Number of castles that can be built on `topography`.
///
/// Single pass, O(n) time and O(1) space. Empty input yields 0; any
/// non-empty input yields at least 1.
pub fn count_castles(topography: &[i32]) -> usize {
    if topography.is_empty() {
        return 0;
    }

    let mut count = 1;
    let mut trend = Trend::Undefined;

    for pair in topography.windows(2) {
        let Some(next) = Trend::between(pair[0], pair[1]) else {
            continue;
        };
        if trend.reverses(next) {
            count += 1;
        }
        trend = next;
    }

    count
}

/// Castle positions on `topography`, in increasing index order.
///
/// A peak or valley spanning a plateau is reported at the plateau's first
/// sample. Always agrees with [`count_castles`] on the number of sites.
pub fn castle_sites(topography: &[i32]) -> Vec<CastleSite> {
    let mut sites = Vec::new();
    if topography.is_empty() {
        return sites;
    }
    sites.push(CastleSite { index: 0, kind: SiteKind::First });

    let mut trend = Trend::Undefined;
    let mut plateau_start = 0;

    for (i, pair) in topography.windows(2).enumerate() {
        let Some(next) = Trend::between(pair[0], pair[1]) else {
            continue;
        };
        if trend.reverses(next) {
            let kind = match next {
                Trend::Falling => SiteKind::Peak,
                Trend::Rising => SiteKind::Valley,
                Trend::Undefined => unreachable!("Trend::between never yields Undefined"),
            };
            sites.push(CastleSite { index: plateau_start, kind });
        }
        trend = next;
        plateau_start = i + 1;
    }

    sites
}
