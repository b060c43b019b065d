// SPDX-License-Identifier: MPL-2.0
//! Coordinate math for the magnifier: tracking-zone test, lens
//! centering, and large-image panning.
//!
//! All functions are pure and operate on positions relative to the
//! thumbnail's top-left corner, so they can be tested without any
//! widget machinery.

use iced::{Point, Size, Vector};

/// Returns whether the pointer is inside the tracking zone: the
/// thumbnail rectangle grown by `expansion` pixels on every side.
///
/// The boundary is inclusive: a pointer exactly `expansion` pixels
/// past an edge still counts as inside.
#[must_use]
pub fn in_tracking_zone(position: Point, small: Size, expansion: f32) -> bool {
    !(position.x < -expansion
        || position.x > small.width + expansion
        || position.y < -expansion
        || position.y > small.height + expansion)
}

/// Top-left corner that centers a lens of the given size on the pointer.
#[must_use]
pub fn lens_top_left(position: Point, lens: Size) -> Point {
    Point::new(
        position.x - lens.width / 2.0,
        position.y - lens.height / 2.0,
    )
}

/// Offset of the large rendering inside the lens so that the magnified
/// point under the pointer sits at the lens center.
///
/// `speed` scales pointer displacement into large-image displacement.
#[must_use]
pub fn pan_offset(position: Point, speed: f32, lens: Size) -> Vector {
    Vector::new(
        -position.x * speed + lens.width / 2.0,
        -position.y * speed + lens.height / 2.0,
    )
}

/// Scales `natural` down to fit `max_width`, preserving aspect ratio.
/// Images narrower than `max_width` keep their natural size.
#[must_use]
pub fn fit_size(natural: Size, max_width: f32) -> Size {
    if natural.width <= max_width || natural.width <= 0.0 {
        return natural;
    }
    let scale = max_width / natural.width;
    Size::new(max_width, natural.height * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: Size = Size::new(200.0, 200.0);
    const LENS: Size = Size::new(50.0, 50.0);
    const EXPANSION: f32 = 30.0;

    #[test]
    fn interior_positions_are_in_zone() {
        for (x, y) in [(0.0, 0.0), (100.0, 100.0), (200.0, 200.0), (1.0, 199.0)] {
            assert!(in_tracking_zone(Point::new(x, y), SMALL, EXPANSION));
        }
    }

    #[test]
    fn zone_boundary_is_inclusive() {
        assert!(in_tracking_zone(Point::new(230.0, 100.0), SMALL, EXPANSION));
        assert!(in_tracking_zone(Point::new(-30.0, 100.0), SMALL, EXPANSION));
        assert!(in_tracking_zone(Point::new(100.0, 230.0), SMALL, EXPANSION));
        assert!(!in_tracking_zone(Point::new(231.0, 100.0), SMALL, EXPANSION));
        assert!(!in_tracking_zone(Point::new(-31.0, 100.0), SMALL, EXPANSION));
        assert!(!in_tracking_zone(Point::new(100.0, 231.0), SMALL, EXPANSION));
    }

    #[test]
    fn one_axis_out_is_out() {
        assert!(!in_tracking_zone(Point::new(100.0, 400.0), SMALL, EXPANSION));
        assert!(!in_tracking_zone(Point::new(400.0, 100.0), SMALL, EXPANSION));
    }

    #[test]
    fn lens_is_centered_on_pointer() {
        let top_left = lens_top_left(Point::new(100.0, 100.0), LENS);
        assert_eq!(top_left, Point::new(75.0, 75.0));

        let top_left = lens_top_left(Point::new(0.0, 0.0), LENS);
        assert_eq!(top_left, Point::new(-25.0, -25.0));
    }

    #[test]
    fn pan_places_magnified_point_at_lens_center() {
        let pan = pan_offset(Point::new(100.0, 100.0), 1.5, LENS);
        assert_eq!(pan, Vector::new(-125.0, -125.0));

        // The large-image pixel for the pointer lands at the lens center:
        // x * speed + pan.x == lens.width / 2
        let magnified_x = 100.0 * 1.5 + pan.x;
        assert!((magnified_x - LENS.width / 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pan_at_origin_is_half_lens() {
        let pan = pan_offset(Point::ORIGIN, 1.5, LENS);
        assert_eq!(pan, Vector::new(25.0, 25.0));
    }

    #[test]
    fn fit_size_shrinks_wide_images_only() {
        let fitted = fit_size(Size::new(1400.0, 700.0), 280.0);
        assert_eq!(fitted, Size::new(280.0, 140.0));

        let untouched = fit_size(Size::new(100.0, 400.0), 280.0);
        assert_eq!(untouched, Size::new(100.0, 400.0));
    }
}
