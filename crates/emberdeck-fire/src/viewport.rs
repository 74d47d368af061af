#![forbid(unsafe_code)]

//! Stretching the fixed-size fire surface over a viewport.

use emberdeck_core::geometry::{Affine2, Point};

/// Placement of the fire surface inside a viewport.
///
/// The surface is scaled non-uniformly: wider than the viewport by the
/// configured overshoot (centred, so both edges bleed off-screen) and as tall
/// as `height * coverage`, sitting on the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    pub scale_x: f32,
    pub scale_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ViewportFit {
    /// Compute the fit for a `grid_width × grid_height` surface.
    ///
    /// `coverage` is clamped to `[0, 1]`. Degenerate grids produce zero scale.
    pub fn compute(
        grid_width: usize,
        grid_height: usize,
        viewport_width: f32,
        viewport_height: f32,
        coverage: f32,
        overshoot: f32,
    ) -> Self {
        let coverage = if coverage.is_finite() {
            coverage.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let target_w = viewport_width.max(0.0) * overshoot;
        let target_h = viewport_height.max(0.0) * coverage;
        let scale = |target: f32, cells: usize| {
            if cells == 0 { 0.0 } else { target / cells as f32 }
        };
        Self {
            scale_x: scale(target_w, grid_width),
            scale_y: scale(target_h, grid_height),
            offset_x: (viewport_width.max(0.0) - target_w) / 2.0,
            offset_y: viewport_height.max(0.0) - target_h,
        }
    }

    /// Surface-to-viewport transform.
    pub fn transform(&self) -> Affine2 {
        Affine2::translation(self.offset_x, self.offset_y)
            * Affine2::scale(self.scale_x, self.scale_y)
    }

    /// Map a viewport point back to a grid cell, if it lands on the surface.
    pub fn cell_at(
        &self,
        point: Point,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<(usize, usize)> {
        let local = self.transform().inverse()?.apply(point);
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x as usize, local.y as usize);
        (x < grid_width && y < grid_height).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretches_with_overshoot_and_coverage() {
        let fit = ViewportFit::compute(200, 140, 1000.0, 700.0, 0.5, 1.05);
        assert!((fit.scale_x - 1050.0 / 200.0).abs() < 1e-4);
        assert!((fit.scale_y - 350.0 / 140.0).abs() < 1e-4);
        assert!((fit.offset_x - -25.0).abs() < 1e-4);
        assert!((fit.offset_y - 350.0).abs() < 1e-4);
    }

    #[test]
    fn surface_covers_bottom_of_viewport() {
        let fit = ViewportFit::compute(200, 140, 800.0, 600.0, 0.75, 1.05);
        let t = fit.transform();
        let bottom_right = t.apply(Point::new(200.0, 140.0));
        assert!((bottom_right.y - 600.0).abs() < 1e-3);
        assert!(bottom_right.x > 800.0);
        let top_left = t.apply(Point::ORIGIN);
        assert!(top_left.x < 0.0);
        assert!((top_left.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn coverage_is_clamped() {
        let full = ViewportFit::compute(10, 10, 100.0, 100.0, 3.0, 1.0);
        assert!((full.scale_y - 10.0).abs() < 1e-5);
        assert!((full.offset_y - 0.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_grid_has_zero_scale() {
        let fit = ViewportFit::compute(0, 0, 100.0, 100.0, 1.0, 1.05);
        assert_eq!(fit.scale_x, 0.0);
        assert_eq!(fit.scale_y, 0.0);
        assert_eq!(fit.cell_at(Point::new(5.0, 5.0), 0, 0), None);
    }

    #[test]
    fn cell_lookup_inverts_transform() {
        let fit = ViewportFit::compute(200, 140, 1000.0, 700.0, 1.0, 1.0);
        // scale 5 x 5: viewport (12, 27) is cell (2, 5).
        assert_eq!(fit.cell_at(Point::new(12.0, 27.0), 200, 140), Some((2, 5)));
        assert_eq!(fit.cell_at(Point::new(-1.0, 27.0), 200, 140), None);
    }
}
