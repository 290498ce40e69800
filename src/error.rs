//! Error types for region construction and batch queries.

use thiserror::Error;

/// Errors from [`NetworkRegion`](crate::NetworkRegion) construction and
/// batch containment queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// Parallel coordinate slices must have equal length; anything else
    /// would silently truncate the shorter side.
    #[error("coordinate slice length mismatch: {lats} latitudes vs {lons} longitudes")]
    LengthMismatch { lats: usize, lons: usize },

    /// A region needs at least one station.
    #[error("cannot build a network region from zero stations")]
    Empty,
}
