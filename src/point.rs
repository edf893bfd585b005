// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Value types describing a single pointer contact sample.

use crate::kurbo;

/// The geometric footprint of a pointer contact.
///
/// For standard pointers, such as a mouse or a pen, the width and height are
/// zero, while some touch pointers report the size of the contact patch or
/// even an ellipse describing the size and angle of a finger tip.
///
/// When the ellipse is defined, the width and height describe the
/// axis-aligned bounding box of the ellipse.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct PointShape {
    width: f64,
    height: f64,
    ellipse_major_axis: f64,
    ellipse_minor_axis: f64,
    ellipse_angle: f64,
}

impl PointShape {
    /// Create a shape from the bounding box of the contact.
    pub fn new(width: f64, height: f64) -> PointShape {
        PointShape {
            width,
            height,
            ..PointShape::default()
        }
    }

    /// Create a shape with a full contact ellipse.
    ///
    /// `ellipse_angle` is in degrees.
    pub fn with_ellipse(
        width: f64,
        height: f64,
        ellipse_major_axis: f64,
        ellipse_minor_axis: f64,
        ellipse_angle: f64,
    ) -> PointShape {
        PointShape {
            width,
            height,
            ellipse_major_axis,
            ellipse_minor_axis,
            ellipse_angle,
        }
    }

    /// The width of the contact's bounding box.
    #[inline]
    pub fn width(self) -> f64 {
        self.width
    }

    /// The height of the contact's bounding box.
    #[inline]
    pub fn height(self) -> f64 {
        self.height
    }

    /// The major axis of the contact ellipse, or zero if no ellipse was
    /// reported.
    #[inline]
    pub fn ellipse_major_axis(self) -> f64 {
        self.ellipse_major_axis
    }

    /// The minor axis of the contact ellipse, or zero if no ellipse was
    /// reported.
    #[inline]
    pub fn ellipse_minor_axis(self) -> f64 {
        self.ellipse_minor_axis
    }

    /// The angle of the contact ellipse in degrees, or zero if no ellipse was
    /// reported.
    #[inline]
    pub fn ellipse_angle(self) -> f64 {
        self.ellipse_angle
    }
}

/// An immutable spatial sample taken from a pointer.
///
/// A `Point` bundles the position of a contact with everything the hardware
/// reported about it: the contact [shape], pressure, stylus tilt and
/// rotation. Fields that the device does not support read as zero.
///
/// [shape]: PointShape
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Point {
    pos: kurbo::Point,
    abs_pos: kurbo::Point,
    shape: PointShape,
    pressure: f64,
    tangential_pressure: f64,
    rotation: f64,
    tilt_x: f64,
    tilt_y: f64,
}

impl Point {
    /// Create a point at `pos`, with every other field at its default.
    ///
    /// The absolute position defaults to `pos`.
    pub fn new(pos: impl Into<kurbo::Point>) -> Point {
        let pos = pos.into();
        Point {
            pos,
            abs_pos: pos,
            shape: PointShape::default(),
            pressure: 0.0,
            tangential_pressure: 0.0,
            rotation: 0.0,
            tilt_x: 0.0,
            tilt_y: 0.0,
        }
    }

    /// Builder-style method for setting the absolute (screen) position.
    pub fn with_abs_pos(mut self, abs_pos: impl Into<kurbo::Point>) -> Point {
        self.abs_pos = abs_pos.into();
        self
    }

    /// Builder-style method for setting the contact shape.
    pub fn with_shape(mut self, shape: PointShape) -> Point {
        self.shape = shape;
        self
    }

    /// Builder-style method for setting the normalized pressure.
    pub fn with_pressure(mut self, pressure: f64) -> Point {
        self.pressure = pressure;
        self
    }

    /// Builder-style method for setting the normalized tangential pressure.
    pub fn with_tangential_pressure(mut self, tangential_pressure: f64) -> Point {
        self.tangential_pressure = tangential_pressure;
        self
    }

    /// Builder-style method for setting the stylus rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Point {
        self.rotation = rotation;
        self
    }

    /// Builder-style method for setting the stylus tilt angles in degrees.
    pub fn with_tilt(mut self, tilt_x: f64, tilt_y: f64) -> Point {
        self.tilt_x = tilt_x;
        self.tilt_y = tilt_y;
        self
    }

    /// The position of the contact in relation to the originating window.
    #[inline]
    pub fn pos(&self) -> kurbo::Point {
        self.pos
    }

    /// The position of the contact in screen coordinates.
    #[inline]
    pub fn abs_pos(&self) -> kurbo::Point {
        self.abs_pos
    }

    /// The contact shape.
    #[inline]
    pub fn shape(&self) -> PointShape {
        self.shape
    }

    /// The normalized pressure of the contact, in the range `[0, 1]`.
    ///
    /// For hardware that doesn't support pressure, this is `0.5` while a
    /// button or contact is active and `0.0` otherwise.
    #[inline]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// The normalized tangential (barrel) pressure, in the range `[-1, 1]`.
    /// For hardware that does not support it, this is `0`.
    #[inline]
    pub fn tangential_pressure(&self) -> f64 {
        self.tangential_pressure
    }

    /// The clockwise rotation of a pen or stylus around its own major axis,
    /// in degrees `[0, 359]`. Zero for hardware that does not support twist.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// In degrees, the angle between the Y-Z plane and the plane containing
    /// the pen or stylus. This is in the range `[-90, 90]`; a positive tilt
    /// is to the right. Zero for hardware that does not support tilt.
    #[inline]
    pub fn tilt_x(&self) -> f64 {
        self.tilt_x
    }

    /// In degrees, the angle between the X-Z plane and the plane containing
    /// the pen or stylus. This is in the range `[-90, 90]`; a positive tilt
    /// is toward the user. Zero for hardware that does not support tilt.
    #[inline]
    pub fn tilt_y(&self) -> f64 {
        self.tilt_y
    }
}

impl Default for Point {
    fn default() -> Point {
        Point::new(kurbo::Point::ZERO)
    }
}

impl From<Point> for kurbo::Point {
    fn from(src: Point) -> kurbo::Point {
        src.pos
    }
}

impl From<kurbo::Point> for Point {
    fn from(src: kurbo::Point) -> Point {
        Point::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_zeroed() {
        let shape = PointShape::default();
        assert_eq!(shape.width(), 0.0);
        assert_eq!(shape.height(), 0.0);
        assert_eq!(shape.ellipse_major_axis(), 0.0);
        assert_eq!(shape.ellipse_minor_axis(), 0.0);
        assert_eq!(shape.ellipse_angle(), 0.0);
    }

    #[test]
    fn abs_pos_defaults_to_pos() {
        let point = Point::new((10.0, 20.0));
        assert_eq!(point.pos(), point.abs_pos());

        let point = point.with_abs_pos((110.0, 220.0));
        assert_eq!(point.pos(), kurbo::Point::new(10.0, 20.0));
        assert_eq!(point.abs_pos(), kurbo::Point::new(110.0, 220.0));
    }

    #[test]
    fn builders_leave_other_fields_alone() {
        let point = Point::new((1.0, 2.0))
            .with_pressure(0.75)
            .with_tilt(-30.0, 45.0);
        assert_eq!(point.pressure(), 0.75);
        assert_eq!(point.tilt_x(), -30.0);
        assert_eq!(point.tilt_y(), 45.0);
        assert_eq!(point.rotation(), 0.0);
        assert_eq!(point.shape(), PointShape::default());
    }

    #[test]
    fn kurbo_conversions() {
        let point = Point::new((3.0, 4.0));
        let pos: kurbo::Point = point.into();
        assert_eq!(pos, kurbo::Point::new(3.0, 4.0));
        assert_eq!(Point::from(pos), Point::new((3.0, 4.0)));
    }
}
