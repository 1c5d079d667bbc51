//! The fixed route: an ordered table of landmarks, some of them rivers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ROUTE_DATA: &str = include_str!("../assets/data/route.json");

const RIVER_DEPTH_MIN: i32 = 1;
const RIVER_DEPTH_MAX: i32 = 10;

/// One named point on the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub distance_miles: i32,
    pub description: String,
    #[serde(default)]
    pub is_river: bool,
    #[serde(default)]
    pub river_depth: i32,
}

/// Errors raised when a route table violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route data parse error: {0}")]
    Parse(String),
    #[error("route must contain at least one landmark")]
    Empty,
    #[error("landmark distance for {name} must be non-negative (got {distance})")]
    NegativeDistance { name: String, distance: i32 },
    #[error("landmark distances must increase strictly ({previous} then {current} at index {index})")]
    NonIncreasing {
        index: usize,
        previous: i32,
        current: i32,
    },
    #[error("river depth for {name} must be within 1-10 (got {depth})")]
    DepthOutOfRange { name: String, depth: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct RouteData {
    landmarks: Vec<Landmark>,
}

/// Ordered, read-only landmark table for a whole journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    landmarks: Vec<Landmark>,
}

impl RouteTable {
    /// Build a table, enforcing ordering and river-depth invariants.
    ///
    /// # Errors
    ///
    /// Returns `RouteError` when the table is empty, distances are not
    /// strictly increasing, or a river carries an out-of-range depth.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, RouteError> {
        if landmarks.is_empty() {
            return Err(RouteError::Empty);
        }
        if let Some(first) = landmarks.first()
            && first.distance_miles < 0
        {
            return Err(RouteError::NegativeDistance {
                name: first.name.clone(),
                distance: first.distance_miles,
            });
        }
        for (index, pair) in landmarks.windows(2).enumerate() {
            if pair[1].distance_miles <= pair[0].distance_miles {
                return Err(RouteError::NonIncreasing {
                    index: index + 1,
                    previous: pair[0].distance_miles,
                    current: pair[1].distance_miles,
                });
            }
        }
        for landmark in &landmarks {
            if landmark.is_river
                && !(RIVER_DEPTH_MIN..=RIVER_DEPTH_MAX).contains(&landmark.river_depth)
            {
                return Err(RouteError::DepthOutOfRange {
                    name: landmark.name.clone(),
                    depth: landmark.river_depth,
                });
            }
        }
        Ok(Self { landmarks })
    }

    /// Parse and validate a route from JSON.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Parse` for malformed JSON, or any validation
    /// error from [`RouteTable::new`].
    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        let data: RouteData =
            serde_json::from_str(json).map_err(|e| RouteError::Parse(e.to_string()))?;
        Self::new(data.landmarks)
    }

    /// Parse the embedded route table.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in asset is invalid, which would be a build
    /// defect rather than a runtime condition.
    #[must_use]
    pub fn load_default() -> Self {
        Self::from_json(DEFAULT_ROUTE_DATA).expect("valid embedded route data")
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Total journey length: the distance of the final landmark.
    #[must_use]
    pub fn total_miles(&self) -> i32 {
        self.landmarks
            .last()
            .map_or(0, |landmark| landmark.distance_miles)
    }

    /// Name of the final landmark, the journey's destination.
    #[must_use]
    pub fn destination_name(&self) -> &str {
        self.landmarks
            .last()
            .map_or("the destination", |landmark| landmark.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str, distance: i32) -> Landmark {
        Landmark {
            name: name.to_string(),
            distance_miles: distance,
            description: String::new(),
            is_river: false,
            river_depth: 0,
        }
    }

    #[test]
    fn embedded_route_is_valid_and_ends_at_2040() {
        let route = RouteTable::load_default();
        assert_eq!(route.len(), 15);
        assert_eq!(route.total_miles(), 2040);
        assert_eq!(route.destination_name(), "Oregon City, Oregon");
        assert_eq!(route.get(0).unwrap().distance_miles, 0);

        let rivers: Vec<&Landmark> = route
            .landmarks()
            .iter()
            .filter(|landmark| landmark.is_river)
            .collect();
        assert_eq!(rivers.len(), 4);
        for river in rivers {
            assert!((1..=10).contains(&river.river_depth), "{}", river.name);
        }
    }

    #[test]
    fn distances_must_strictly_increase() {
        let err = RouteTable::new(vec![plain("A", 0), plain("B", 100), plain("C", 100)])
            .expect_err("duplicate distance");
        assert_eq!(
            err,
            RouteError::NonIncreasing {
                index: 2,
                previous: 100,
                current: 100
            }
        );
    }

    #[test]
    fn empty_and_negative_tables_are_rejected() {
        assert_eq!(RouteTable::new(vec![]), Err(RouteError::Empty));
        let err = RouteTable::new(vec![plain("A", -5)]).expect_err("negative distance");
        assert!(matches!(err, RouteError::NegativeDistance { .. }));
    }

    #[test]
    fn river_depth_is_bounded() {
        let mut river = plain("Deep River", 50);
        river.is_river = true;
        river.river_depth = 11;
        let err = RouteTable::new(vec![plain("A", 0), river]).expect_err("depth out of range");
        assert!(matches!(err, RouteError::DepthOutOfRange { depth: 11, .. }));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = RouteTable::from_json("not json").expect_err("parse failure");
        assert!(matches!(err, RouteError::Parse(_)));
    }
}
