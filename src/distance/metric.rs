//! TSPLIB edge weight functions.
//!
//! Both metrics round to integers exactly as TSPLIB reference
//! implementations do, so tour costs are comparable with published results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TourError;
use crate::models::{Cost, Node};

/// Earth radius in kilometres used by the `GEO` metric.
pub const EARTH_RADIUS: f64 = 6378.388;

/// Value of π used by the `GEO` metric. Truncated on purpose.
#[allow(clippy::approx_constant)]
pub const GEO_PI: f64 = 3.141592;

/// Edge weight type of a problem instance.
///
/// # Examples
///
/// ```
/// use u_tour::distance::Metric;
///
/// let m: Metric = "GEO".parse().unwrap();
/// assert_eq!(m, Metric::Geographic);
/// assert!("ATT".parse::<Metric>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// `EUC_2D`: planar Euclidean distance rounded to nearest.
    #[serde(rename = "EUC_2D")]
    Euclidean,
    /// `GEO`: great-circle distance over `DDD.MM` latitude/longitude.
    #[serde(rename = "GEO")]
    Geographic,
}

impl Metric {
    /// TSPLIB keyword for this metric.
    pub fn keyword(&self) -> &'static str {
        match self {
            Metric::Euclidean => "EUC_2D",
            Metric::Geographic => "GEO",
        }
    }

    /// Integer distance between two nodes under this metric.
    pub fn distance(&self, a: &Node, b: &Node) -> Cost {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Geographic => geographic(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "EUC_2D" => Ok(Metric::Euclidean),
            "GEO" => Ok(Metric::Geographic),
            other => Err(TourError::UnsupportedMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// `round(sqrt(dx² + dy²))`, halves rounded away from zero.
fn euclidean(a: &Node, b: &Node) -> Cost {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt().round() as Cost
}

/// Converts a packed `DDD.MM` coordinate to radians.
///
/// The integer part is degrees, the fractional part is minutes / 100.
fn to_radians(coord: f64) -> f64 {
    let deg = coord.trunc();
    let min = coord - deg;
    GEO_PI * (deg + 5.0 * min / 3.0) / 180.0
}

/// TSPLIB great-circle distance. Identical points are 1 apart, not 0.
fn geographic(a: &Node, b: &Node) -> Cost {
    let (lat_a, lon_a) = (to_radians(a.x()), to_radians(a.y()));
    let (lat_b, lon_b) = (to_radians(b.x()), to_radians(b.y()));

    let q1 = (lon_a - lon_b).cos();
    let q2 = (lat_a - lat_b).cos();
    let q3 = (lat_a + lat_b).cos();
    let arg = (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).clamp(-1.0, 1.0);

    (EARTH_RADIUS * arg.acos() + 1.0) as Cost
}
