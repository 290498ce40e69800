//! netregion - convex-hull membership tests for seismic station networks
//!
//! Projects WGS84 station coordinates to a planar Lambert Azimuthal
//! Equal-Area frame (north polar aspect), builds the convex hull of the
//! network, and classifies query points (earthquake epicenters) as inside
//! or outside that region.

pub mod error;
pub mod models;
pub mod proj;
pub mod region;

pub use error::RegionError;
pub use models::GeoPoint;
pub use region::NetworkRegion;
