//! Test utilities for bindu-match.
//!
//! Helpers for building point sets used across the integration tests.

#![allow(dead_code)]

use bindu_match::Point2D;

/// Square grid of `n × n` points starting at the origin.
pub fn grid(n: usize, spacing: f64) -> Vec<Point2D> {
    (0..n * n)
        .map(|i| Point2D::new((i % n) as f64 * spacing, (i / n) as f64 * spacing))
        .collect()
}

/// Points on a circle, in counter-clockwise order.
pub fn circle(center: Point2D, radius: f64, count: usize) -> Vec<Point2D> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / count as f64;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Shift every point by `(dx, dy)`.
pub fn translate(points: &[Point2D], dx: f64, dy: f64) -> Vec<Point2D> {
    points
        .iter()
        .map(|p| Point2D::new(p.x + dx, p.y + dy))
        .collect()
}

/// Deterministic pseudo-random offsets bounded by `amplitude` on each axis.
pub fn jitter(points: &[Point2D], amplitude: f64) -> Vec<Point2D> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let t = i as f64;
            Point2D::new(
                p.x + (t * 0.7).sin() * amplitude,
                p.y + (t * 1.3).cos() * amplitude,
            )
        })
        .collect()
}

/// Linear reference answer for fuzzy matching.
pub fn brute_force_fuzzy(reference: &[Point2D], pattern: &[Point2D], eps: f64) -> bool {
    pattern
        .iter()
        .all(|b| reference.iter().any(|a| a.distance(b) <= eps))
}
