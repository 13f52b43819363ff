//! Elevation profile projection.
//!
//! A [`Profile`] is a sequence of cumulative-distance/altitude samples. It is
//! projected linearly onto the plot area of a [`DrawingFrame`]: distance grows
//! to the right, altitude grows upward (towards smaller y).
//!
//! # Example
//!
//! ```
//! use paddock_core::{
//!     geometry::DrawingFrame,
//!     projection::{Profile, Sample, project},
//! };
//!
//! let profile = Profile::new(vec![
//!     Sample::new(0.0, 100.0),
//!     Sample::new(50.0, 120.0),
//!     Sample::new(120.0, 110.0),
//! ])
//! .unwrap();
//! let frame = DrawingFrame::new(1000, 600, 80).unwrap();
//!
//! let projection = project(&profile, &frame).unwrap();
//! let last = projection.points()[2];
//! assert_eq!((last.x(), last.y()), (920.0, 300.0));
//! ```

use log::debug;
use thiserror::Error;

use crate::geometry::{DrawingFrame, Point};

/// Number of tick intervals per axis when none is configured.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Errors produced while building or projecting a profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The profile has no horizontal extent to scale against.
    #[error("degenerate profile: total distance is zero")]
    DegenerateProfile,

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("invalid drawing frame: {0}")]
    InvalidFrame(String),
}

/// One point of an elevation profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    distance: f64,
    altitude: f64,
}

impl Sample {
    pub fn new(distance: f64, altitude: f64) -> Self {
        Self { distance, altitude }
    }

    /// Cumulative distance from the origin.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

/// An ordered, validated sequence of samples.
///
/// Invariants: at least one sample, the first at distance 0, distances
/// non-decreasing, every value finite. Equal consecutive distances are a
/// zero-length segment and are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    samples: Vec<Sample>,
}

impl Profile {
    /// Validates and wraps the samples.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidProfile`] when an invariant does not
    /// hold.
    pub fn new(samples: Vec<Sample>) -> Result<Self, ProjectionError> {
        let Some(first) = samples.first() else {
            return Err(ProjectionError::InvalidProfile(
                "profile has no samples".to_string(),
            ));
        };
        if first.distance != 0.0 {
            return Err(ProjectionError::InvalidProfile(format!(
                "first sample must be at distance 0, found {}",
                first.distance
            )));
        }
        if let Some(index) = samples
            .iter()
            .position(|s| !s.distance.is_finite() || !s.altitude.is_finite())
        {
            return Err(ProjectionError::InvalidProfile(format!(
                "sample {index} is not finite"
            )));
        }
        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].distance < pair[0].distance)
        {
            return Err(ProjectionError::InvalidProfile(format!(
                "distance decreases at sample {}",
                index + 1
            )));
        }
        Ok(Self { samples })
    }

    /// Builds a profile from an origin altitude and per-segment
    /// `(length, altitude)` pairs, accumulating lengths into distances.
    ///
    /// ```
    /// # use paddock_core::projection::Profile;
    /// let profile = Profile::from_segments(10.0, [(100.0, 12.0), (50.0, 11.0)]).unwrap();
    /// let distances: Vec<f64> = profile.samples().iter().map(|s| s.distance()).collect();
    /// assert_eq!(distances, [0.0, 100.0, 150.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// A negative segment length makes distances decrease and is rejected with
    /// [`ProjectionError::InvalidProfile`].
    pub fn from_segments(
        origin_altitude: f64,
        segments: impl IntoIterator<Item = (f64, f64)>,
    ) -> Result<Self, ProjectionError> {
        let mut total = 0.0;
        let mut samples = vec![Sample::new(0.0, origin_altitude)];
        for (length, altitude) in segments {
            total += length;
            samples.push(Sample::new(total, altitude));
        }
        Self::new(samples)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Distance of the last sample.
    pub fn max_distance(&self) -> f64 {
        self.samples.last().map_or(0.0, Sample::distance)
    }

    /// `(min, max)` altitude across all samples.
    pub fn altitude_bounds(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.altitude), hi.max(s.altitude))
            })
    }
}

/// A tick mark: its value in data space and its pixel position on the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    value: f64,
    position: f64,
}

impl Tick {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// x for distance ticks, y for altitude ticks.
    pub fn position(&self) -> f64 {
        self.position
    }
}

/// A profile projected onto a frame.
#[derive(Debug, Clone)]
pub struct Projection {
    frame: DrawingFrame,
    points: Vec<Point>,
    max_distance: f64,
    min_altitude: f64,
    max_altitude: f64,
}

/// Projects `profile` onto the plot area of `frame`.
///
/// A flat profile (every altitude equal) is drawn along the frame's vertical
/// center.
///
/// # Errors
///
/// Returns [`ProjectionError::DegenerateProfile`] when the profile's total
/// distance is zero.
pub fn project(profile: &Profile, frame: &DrawingFrame) -> Result<Projection, ProjectionError> {
    let max_distance = profile.max_distance();
    if max_distance == 0.0 {
        return Err(ProjectionError::DegenerateProfile);
    }
    let (min_altitude, max_altitude) = profile.altitude_bounds();
    debug!(
        samples = profile.samples().len(),
        max_distance,
        min_altitude,
        max_altitude;
        "Projecting profile"
    );

    let mut projection = Projection {
        frame: *frame,
        points: Vec::with_capacity(profile.samples().len()),
        max_distance,
        min_altitude,
        max_altitude,
    };
    let points = profile
        .samples()
        .iter()
        .map(|s| Point::new(projection.x_for(s.distance), projection.y_for(s.altitude)))
        .collect();
    projection.points = points;

    Ok(projection)
}

impl Projection {
    pub fn frame(&self) -> &DrawingFrame {
        &self.frame
    }

    /// The open polyline, one point per sample.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The polyline closed along the bottom edge of the plot area, for
    /// rendering a filled silhouette.
    pub fn closed_for_fill(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.points.len() + 2);
        points.extend_from_slice(&self.points);
        points.push(self.frame.bottom_right());
        points.push(self.frame.bottom_left());
        points
    }

    pub fn min_altitude(&self) -> f64 {
        self.min_altitude
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// `count + 1` ticks from 0 to the total distance, evenly spaced in data
    /// space, positioned by x.
    pub fn distance_ticks(&self, count: usize) -> Vec<Tick> {
        even_values(0.0, self.max_distance, count)
            .map(|value| Tick {
                value,
                position: self.x_for(value),
            })
            .collect()
    }

    /// `count + 1` ticks from the minimum to the maximum altitude, evenly
    /// spaced in data space, positioned by y.
    pub fn altitude_ticks(&self, count: usize) -> Vec<Tick> {
        even_values(self.min_altitude, self.max_altitude, count)
            .map(|value| Tick {
                value,
                position: self.y_for(value),
            })
            .collect()
    }

    fn x_for(&self, distance: f64) -> f64 {
        self.frame.left() + (distance / self.max_distance) * self.frame.plot_width()
    }

    fn y_for(&self, altitude: f64) -> f64 {
        let range = self.max_altitude - self.min_altitude;
        if range == 0.0 {
            return self.frame.center_y();
        }
        self.frame.bottom() - ((altitude - self.min_altitude) / range) * self.frame.plot_height()
    }
}

/// `count + 1` values from `start` to `end`; a single `start` when `count` is 0.
fn even_values(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count == 0 {
        0.0
    } else {
        (end - start) / count as f64
    };
    (0..=count).map(move |i| {
        if i == count && count > 0 {
            end
        } else {
            start + step * i as f64
        }
    })
}
