//! Pixel-space primitives for chart rendering.
//!
//! # Coordinate System
//!
//! Paddock uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Higher altitudes therefore map to *smaller* y values.

use crate::projection::ProjectionError;

/// A 2D point in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns a copy moved by the given offsets.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The canvas a profile is drawn into.
///
/// The plot area is the rectangle
/// `[margin, width - margin] × [margin, height - margin]`; the margin band
/// around it holds axis labels.
///
/// # Examples
///
/// ```
/// # use paddock_core::geometry::DrawingFrame;
/// let frame = DrawingFrame::new(1000, 600, 80).unwrap();
/// assert_eq!(frame.plot_width(), 840.0);
/// assert_eq!(frame.bottom(), 520.0);
///
/// // The margin must leave a non-empty plot area.
/// assert!(DrawingFrame::new(100, 100, 50).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingFrame {
    width: u32,
    height: u32,
    margin: u32,
}

impl DrawingFrame {
    /// Creates a frame, validating `margin < min(width, height) / 2`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidFrame`] for zero dimensions or a
    /// margin that leaves no plot area.
    pub fn new(width: u32, height: u32, margin: u32) -> Result<Self, ProjectionError> {
        if width == 0 || height == 0 {
            return Err(ProjectionError::InvalidFrame(format!(
                "canvas {width}x{height} has no area"
            )));
        }
        if u64::from(margin) * 2 >= u64::from(width.min(height)) {
            return Err(ProjectionError::InvalidFrame(format!(
                "margin {margin} leaves no plot area on a {width}x{height} canvas"
            )));
        }
        Ok(Self {
            width,
            height,
            margin,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Left edge of the plot area.
    pub fn left(&self) -> f64 {
        f64::from(self.margin)
    }

    /// Right edge of the plot area.
    pub fn right(&self) -> f64 {
        f64::from(self.width - self.margin)
    }

    /// Top edge of the plot area.
    pub fn top(&self) -> f64 {
        f64::from(self.margin)
    }

    /// Bottom edge of the plot area (the distance axis).
    pub fn bottom(&self) -> f64 {
        f64::from(self.height - self.margin)
    }

    pub fn plot_width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn plot_height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// Horizontal center of the canvas.
    pub fn center_x(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    /// Vertical center of the canvas.
    pub fn center_y(&self) -> f64 {
        f64::from(self.height) / 2.0
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }
}
