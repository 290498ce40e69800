//! Lambert Azimuthal Equal-Area projection, north polar aspect.
//!
//! Fixed-parameter transform from WGS84 geographic coordinates (degrees)
//! to planar meters, equivalent to `+proj=laea +lat_0=90 +lon_0=0
//! +ellps=WGS84`. The equal-area property keeps hull construction and
//! point-in-polygon tests meaningful in the planar frame.
//!
//! Formulas follow Snyder, "Map Projections: A Working Manual" (1987),
//! polar aspect with the WGS84 ellipsoid.

use std::sync::LazyLock;

use geo_types::Coord;

/// WGS84 semi-major axis, meters
const A: f64 = 6_378_137.0;

/// WGS84 flattening
const F: f64 = 1.0 / 298.257_223_563;

/// First eccentricity squared
const E2: f64 = F * (2.0 - F);

/// Snyder's q (eq. 3-12), proportional to the authalic latitude sine.
fn authalic_q(sin_phi: f64) -> f64 {
    let e = E2.sqrt();
    let es = e * sin_phi;
    (1.0 - E2) * (sin_phi / (1.0 - E2 * sin_phi * sin_phi) - (0.5 / e) * ((1.0 - es) / (1.0 + es)).ln())
}

/// q evaluated at the pole, computed once
static Q_POLE: LazyLock<f64> = LazyLock::new(|| authalic_q(1.0));

/// Project a single (lat, lon) pair, degrees, to planar (x, y) meters.
///
/// Pure function of the input; latitudes beyond ±90° saturate through the
/// trig terms rather than erroring.
pub fn forward(lat: f64, lon: f64) -> Coord<f64> {
    let phi = lat.to_radians();
    let lam = lon.to_radians();

    // Radial distance from the pole (Snyder eq. 24-23/21-31).
    // q can exceed Q_POLE by float noise at the pole itself.
    let rho = A * (*Q_POLE - authalic_q(phi.sin())).max(0.0).sqrt();

    Coord {
        x: rho * lam.sin(),
        y: -rho * lam.cos(),
    }
}

/// Project parallel latitude/longitude slices pairwise, preserving order.
///
/// Zips the slices, so callers reject mismatched lengths before calling
/// (see [`crate::NetworkRegion`]); crate-private to keep that contract
/// from leaking into the public API.
pub(crate) fn forward_seq(lats: &[f64], lons: &[f64]) -> Vec<Coord<f64>> {
    lats.iter()
        .zip(lons.iter())
        .map(|(&lat, &lon)| forward(lat, lon))
        .collect()
}

/// Inverse projection: planar (x, y) meters back to (lat, lon) degrees.
///
/// Uses the authalic-to-geodetic latitude series (Snyder eq. 3-18),
/// accurate to well under a millimeter on the WGS84 ellipsoid.
pub fn inverse(x: f64, y: f64) -> (f64, f64) {
    let qp = *Q_POLE;
    let rho = x.hypot(y);
    if rho == 0.0 {
        return (90.0, 0.0);
    }

    let q = qp - (rho / A).powi(2);
    let beta = (q / qp).clamp(-1.0, 1.0).asin();

    let e4 = E2 * E2;
    let e6 = e4 * E2;
    let phi = beta
        + (E2 / 3.0 + 31.0 * e4 / 180.0 + 517.0 * e6 / 5040.0) * (2.0 * beta).sin()
        + (23.0 * e4 / 360.0 + 251.0 * e6 / 3780.0) * (4.0 * beta).sin()
        + (761.0 * e6 / 45360.0) * (6.0 * beta).sin();

    // North polar aspect: longitude measured from the -y axis.
    (phi.to_degrees(), x.atan2(-y).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_pole_maps_to_origin() {
        let c = forward(90.0, 0.0);
        assert_close(c.x, 0.0, 1e-6);
        assert_close(c.y, 0.0, 1e-6);

        // Longitude is irrelevant at the pole
        let c = forward(90.0, 123.0);
        assert_close(c.x, 0.0, 1e-6);
        assert_close(c.y, 0.0, 1e-6);
    }

    #[test]
    fn test_known_values() {
        // Reference values computed independently for
        // +proj=laea +lat_0=90 +lon_0=0 +ellps=WGS84
        let c = forward(0.0, 0.0);
        assert_close(c.x, 0.0, 1e-3);
        assert_close(c.y, -9_009_964.761, 1e-3);

        let c = forward(10.0, 10.0);
        assert_close(c.x, 1_422_897.377, 1e-3);
        assert_close(c.y, -8_069_652.027, 1e-3);

        let c = forward(0.0, 90.0);
        assert_close(c.x, 9_009_964.761, 1e-3);
        assert_close(c.y, 0.0, 1e-3);
    }

    #[test]
    fn test_meridian_projects_to_x_axis() {
        // lon_0 = 0: the prime meridian lands exactly on x = 0, with
        // distance from the origin growing as latitude drops
        let high = forward(60.0, 0.0);
        let low = forward(10.0, 0.0);
        assert_eq!(high.x, 0.0);
        assert_eq!(low.x, 0.0);
        assert!(high.y > low.y);
        assert!(low.y < 0.0);
    }

    #[test]
    fn test_inverse_recovers_forward() {
        for &(lat, lon) in &[(62.0, 26.0), (0.0, 10.0), (-10.0, 0.0), (50.0, 50.0)] {
            let c = forward(lat, lon);
            let (back_lat, back_lon) = inverse(c.x, c.y);
            assert_close(back_lat, lat, 1e-7);
            assert_close(back_lon, lon, 1e-7);
        }
    }

    #[test]
    fn test_forward_seq_preserves_order() {
        let lats = [0.0, 10.0, 20.0];
        let lons = [0.0, 10.0, 20.0];
        let projected = forward_seq(&lats, &lons);
        assert_eq!(projected.len(), 3);
        for (i, c) in projected.iter().enumerate() {
            let single = forward(lats[i], lons[i]);
            assert_eq!(*c, single);
        }
    }
}
