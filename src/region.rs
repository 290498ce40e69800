//! Network region construction and containment queries.

use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{ConvexHull, MultiPoint, Point, Polygon};
use tracing::debug;

use crate::error::RegionError;
use crate::models::GeoPoint;
use crate::proj;

/// Convex-hull region spanned by a seismic station network.
///
/// Station coordinates are projected to a planar equal-area frame
/// ([`proj`]) and their convex hull is computed once at construction.
/// The hull is never mutated afterwards, so shared read-only queries
/// from multiple threads are safe.
///
/// Fewer than 3 distinct non-collinear stations produce a degenerate
/// hull (a point or a segment); queries against it stay well defined
/// and only exact-coincidence or on-segment points register as
/// contained.
#[derive(Debug)]
pub struct NetworkRegion {
    hull: Polygon<f64>,
}

impl NetworkRegion {
    /// Build a region from parallel station latitude/longitude slices.
    ///
    /// Hull computation is delegated to the geometry layer; hull
    /// vertices are taken as-is, with no post-processing.
    pub fn new(station_lats: &[f64], station_lons: &[f64]) -> Result<Self, RegionError> {
        if station_lats.len() != station_lons.len() {
            return Err(RegionError::LengthMismatch {
                lats: station_lats.len(),
                lons: station_lons.len(),
            });
        }
        if station_lats.is_empty() {
            return Err(RegionError::Empty);
        }

        let projected = proj::forward_seq(station_lats, station_lons);
        let points: MultiPoint<f64> = projected.into_iter().map(Point::from).collect();
        let hull = points.convex_hull();

        debug!(
            "built network region from {} stations ({} hull vertices)",
            station_lats.len(),
            hull.exterior().0.len()
        );

        Ok(Self { hull })
    }

    /// Closed-region membership test for a single point.
    ///
    /// True if the projected point lies in the interior of the hull
    /// or exactly on its boundary. Note the asymmetry with
    /// [`inside_network`](Self::inside_network), which excludes the
    /// boundary.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let c = proj::forward(lat, lon);
        self.hull.coordinate_position(&c) != CoordPos::Outside
    }

    /// Filter epicenter candidates down to those strictly inside the
    /// network region.
    ///
    /// Candidates whose projection falls exactly on the hull boundary
    /// are excluded. Returns the original geographic coordinates (not
    /// the projected ones) in input order; an empty `Vec` if none
    /// qualify.
    pub fn inside_network(
        &self,
        epi_lats: &[f64],
        epi_lons: &[f64],
    ) -> Result<Vec<GeoPoint>, RegionError> {
        if epi_lats.len() != epi_lons.len() {
            return Err(RegionError::LengthMismatch {
                lats: epi_lats.len(),
                lons: epi_lons.len(),
            });
        }

        let projected = proj::forward_seq(epi_lats, epi_lons);
        let inside: Vec<GeoPoint> = projected
            .iter()
            .enumerate()
            .filter(|(_, c)| self.hull.coordinate_position(c) == CoordPos::Inside)
            .map(|(i, _)| GeoPoint::new(epi_lats[i], epi_lons[i]))
            .collect();

        debug!(
            "{} of {} epicenter candidates inside the network",
            inside.len(),
            epi_lats.len()
        );

        Ok(inside)
    }

    /// The hull polygon, in projected planar coordinates (meters).
    pub fn hull(&self) -> &Polygon<f64> {
        &self.hull
    }
}
