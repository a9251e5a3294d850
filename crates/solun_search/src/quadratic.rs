//! Three-point quadratic interpolation over a sampling window.
//!
//! Given samples `y(-1) = h0`, `y(0) = h1`, `y(1) = h2`, the unique
//! parabola through them is `y(x) = a·x² + b·x + h1` with
//!
//! a = (h0 + h2) / 2 − h1
//! b = (h2 − h0) / 2
//!
//! Its zeros inside `[-1, 1]` approximate the crossings of the sampled
//! function within the window. Source: Montenbruck & Pfleger, *Astronomy
//! on the Personal Computer*, section 3.3 (QUAD).

/// Zeros of a fitted window parabola that lie in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowCrossings {
    /// No zero inside the window.
    Zero,
    /// Exactly one zero inside the window.
    One(f64),
    /// Two zeros inside the window, in ascending order.
    Two(f64, f64),
}

/// Parabola fitted through three equally spaced samples at x = -1, 0, 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticWindow {
    /// x² coefficient.
    pub a: f64,
    /// x coefficient.
    pub b: f64,
    /// Constant term (the middle sample).
    pub c: f64,
}

impl QuadraticWindow {
    /// Fit the parabola through `(-1, h0)`, `(0, h1)`, `(1, h2)`.
    pub fn fit(h0: f64, h1: f64, h2: f64) -> Self {
        Self {
            a: (h0 + h2) / 2.0 - h1,
            b: (h2 - h0) / 2.0,
            c: h1,
        }
    }

    /// Value of the parabola at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Abscissa of the extremum. Infinite or NaN for a straight line.
    pub fn vertex_x(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }

    /// Value at the extremum.
    pub fn vertex_y(&self) -> f64 {
        self.eval(self.vertex_x())
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Zeros of the parabola inside `[-1, 1]`.
    ///
    /// A zero exactly on the window edge counts as inside. A degenerate
    /// fit (`a == 0`, or NaN samples) yields [`WindowCrossings::Zero`].
    pub fn crossings(&self) -> WindowCrossings {
        let d = self.discriminant();
        if d.is_nan() || d < 0.0 {
            return WindowCrossings::Zero;
        }

        let xe = self.vertex_x();
        let dx = d.sqrt() / (self.a.abs() * 2.0);
        let x1 = xe - dx;
        let x2 = xe + dx;

        match (x1.abs() <= 1.0, x2.abs() <= 1.0) {
            (true, true) => WindowCrossings::Two(x1, x2),
            (true, false) => WindowCrossings::One(x1),
            // x1 fell off the left edge; the surviving zero is x2.
            (false, true) if x1 < -1.0 => WindowCrossings::One(x2),
            // only reachable when x1 is NaN; reported unchanged
            (false, true) => WindowCrossings::One(x1),
            (false, false) => WindowCrossings::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    /// Samples of `k·(x − r1)(x − r2)` at x = -1, 0, 1.
    fn samples(k: f64, r1: f64, r2: f64) -> (f64, f64, f64) {
        let y = |x: f64| k * (x - r1) * (x - r2);
        (y(-1.0), y(0.0), y(1.0))
    }

    #[test]
    fn fit_recovers_coefficients() {
        let (h0, h1, h2) = samples(1.0, 0.3, -0.5);
        let w = QuadraticWindow::fit(h0, h1, h2);
        assert!((w.a - 1.0).abs() < 1e-12);
        assert!((w.b - 0.2).abs() < 1e-12);
        assert!((w.c - -0.15).abs() < 1e-12);
    }

    #[test]
    fn two_roots_inside() {
        let (h0, h1, h2) = samples(1.0, 0.3, -0.5);
        let w = QuadraticWindow::fit(h0, h1, h2);
        match w.crossings() {
            WindowCrossings::Two(x1, x2) => {
                assert!((x1 - -0.5).abs() < EPS, "x1 = {x1}");
                assert!((x2 - 0.3).abs() < EPS, "x2 = {x2}");
            }
            other => panic!("expected two roots, got {other:?}"),
        }
        assert!(w.vertex_y() < 0.0);
        assert!((w.vertex_x() - -0.1).abs() < EPS);
    }

    #[test]
    fn two_roots_downward_parabola() {
        let (h0, h1, h2) = samples(-2.0, -0.7, 0.8);
        match QuadraticWindow::fit(h0, h1, h2).crossings() {
            WindowCrossings::Two(x1, x2) => {
                assert!((x1 - -0.7).abs() < EPS, "x1 = {x1}");
                assert!((x2 - 0.8).abs() < EPS, "x2 = {x2}");
            }
            other => panic!("expected two roots, got {other:?}"),
        }
    }

    #[test]
    fn left_root_outside_shifts_right_root_in() {
        let (h0, h1, h2) = samples(1.0, 0.25, -3.0);
        match QuadraticWindow::fit(h0, h1, h2).crossings() {
            WindowCrossings::One(x) => assert!((x - 0.25).abs() < EPS, "x = {x}"),
            other => panic!("expected one root, got {other:?}"),
        }
    }

    #[test]
    fn right_root_outside() {
        let (h0, h1, h2) = samples(-1.0, -0.6, 2.0);
        match QuadraticWindow::fit(h0, h1, h2).crossings() {
            WindowCrossings::One(x) => assert!((x - -0.6).abs() < EPS, "x = {x}"),
            other => panic!("expected one root, got {other:?}"),
        }
    }

    #[test]
    fn root_on_window_edge_counts() {
        let (h0, h1, h2) = samples(1.0, 1.0, -5.0);
        match QuadraticWindow::fit(h0, h1, h2).crossings() {
            WindowCrossings::One(x) => assert!((x - 1.0).abs() < EPS, "x = {x}"),
            other => panic!("expected one root, got {other:?}"),
        }
    }

    #[test]
    fn no_real_roots() {
        let w = QuadraticWindow::fit(2.0, 1.0, 2.0);
        assert!(w.discriminant() < 0.0);
        assert_eq!(w.crossings(), WindowCrossings::Zero);
        assert!(w.vertex_y() > 0.0);
    }

    #[test]
    fn roots_beyond_window() {
        let (h0, h1, h2) = samples(1.0, 2.0, 3.0);
        assert_eq!(QuadraticWindow::fit(h0, h1, h2).crossings(), WindowCrossings::Zero);
        let (h0, h1, h2) = samples(1.0, -2.0, -3.0);
        assert_eq!(QuadraticWindow::fit(h0, h1, h2).crossings(), WindowCrossings::Zero);
    }

    #[test]
    fn straight_line_is_degenerate() {
        let w = QuadraticWindow::fit(-0.5, 0.5, 1.5);
        assert_eq!(w.a, 0.0);
        assert_eq!(w.crossings(), WindowCrossings::Zero);
    }

    #[test]
    fn nan_samples_have_no_crossings() {
        let w = QuadraticWindow::fit(f64::NAN, 0.1, -0.1);
        assert_eq!(w.crossings(), WindowCrossings::Zero);
    }

    #[test]
    fn eval_matches_samples() {
        let w = QuadraticWindow::fit(0.4, -0.1, 0.9);
        assert!((w.eval(-1.0) - 0.4).abs() < 1e-12);
        assert!((w.eval(0.0) - -0.1).abs() < 1e-12);
        assert!((w.eval(1.0) - 0.9).abs() < 1e-12);
    }
}
