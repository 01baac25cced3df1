//! JSON elevation profile input.

use anyhow::{Context, Error as AnyError};
use geo::Point;
use log::debug;
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};

/// One sample of a located profile, as printed by path profiling
/// tools.
#[derive(Debug, Clone, Deserialize)]
struct JsonEntry {
    /// `[longitude, latitude]` in degrees.
    location: [f64; 2],
    elevation: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum JsonProfile {
    /// Evenly spaced elevations.
    Elevations(Vec<f64>),
    /// Elevations at known locations, possibly unevenly spaced.
    Located(Vec<JsonEntry>),
}

/// Raw elevation samples and, when known, where along the path each
/// one was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    pub elevations: Vec<f64>,

    /// Fraction of the total path length at each sample.
    pub positions: Option<Vec<f64>>,
}

impl Samples {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AnyError> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("reading {}", path.display()))
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, AnyError> {
        let samples = match serde_json::from_reader(rdr)? {
            JsonProfile::Elevations(elevations) => Samples {
                elevations,
                positions: None,
            },
            JsonProfile::Located(entries) => {
                let points: Vec<Point> = entries
                    .iter()
                    .map(|JsonEntry { location: [lon, lat], .. }| Point::new(*lon, *lat))
                    .collect();
                let positions = profile::track_fractions(&points)?;
                let elevations = entries.iter().map(|entry| entry.elevation).collect();
                Samples {
                    elevations,
                    positions: Some(positions),
                }
            }
        };
        debug!(
            "input; samples: {}, located: {}",
            samples.elevations.len(),
            samples.positions.is_some()
        );
        Ok(samples)
    }

    /// Resamples to `n_points` evenly spaced heights and rescales them
    /// to `min_height..=min_height + multiplier`.
    pub fn heights(
        &self,
        n_points: usize,
        min_height: f64,
        multiplier: f64,
    ) -> Result<Vec<f64>, AnyError> {
        let resampled = profile::resample(&self.elevations, n_points, self.positions.as_deref())?;
        Ok(profile::normalize(&resampled, min_height, multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::Samples;
    use approx::assert_relative_eq;

    #[test]
    fn test_elevation_array() {
        let samples = Samples::from_reader(&b"[1.0, 2, 3.5]"[..]).unwrap();
        assert_eq!(samples.elevations, vec![1.0, 2.0, 3.5]);
        assert_eq!(samples.positions, None);
    }

    #[test]
    fn test_located_profile() {
        let json = br#"[
            {"location": [0.0, 0.0], "elevation": 100},
            {"location": [0.3, 0.0], "elevation": 400},
            {"location": [0.4, 0.0], "elevation": 250}
        ]"#;
        let samples = Samples::from_reader(&json[..]).unwrap();
        assert_eq!(samples.elevations, vec![100.0, 400.0, 250.0]);
        let positions = samples.positions.unwrap();
        assert_relative_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[1], 0.75, epsilon = 1e-9);
        assert_relative_eq!(positions[2], 1.0);
    }

    #[test]
    fn test_heights() {
        let samples = Samples::from_reader(&b"[1, 2, 3]"[..]).unwrap();
        let heights = samples.heights(3, 10.0, 30.0).unwrap();
        assert_relative_eq!(heights[0], 10.0);
        assert_relative_eq!(heights[1], 25.0);
        assert_relative_eq!(heights[2], 40.0);
    }

    #[test]
    fn test_empty_profile() {
        assert!(Samples::from_reader(&b"[]"[..])
            .and_then(|s| s.heights(10, 10.0, 30.0))
            .is_err());
    }
}
