//! Geometry stages: rectangle union and corner smoothing

pub mod error;
pub mod ring;
pub mod smooth;
pub mod union;

pub use error::GeometryError;
pub use ring::{Polygon, Ring, Winding, EPSILON};
pub use smooth::{smooth_polygon, smooth_ring, Corner, SmoothedRing};
pub use union::{GridUnion, UnionEngine};
