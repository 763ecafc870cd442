//! Variable-width outline generation for freehand strokes.
//!
//! Converts a captured centerline into a closed polygon that mimics a pen
//! whose pressure follows the drawing speed: fast segments thin out, slow
//! ones swell. The algorithm follows the perfect-freehand approach:
//!
//! 1. Streamline the raw samples (each one is pulled towards the previous
//!    accepted point) and record direction, distance and running length.
//! 2. Walk the samples, emit a left and right offset at a pressure-derived
//!    radius, and round off sharp corners.
//! 3. Close the polygon with a round start cap and a round end cap.
//!
//! Output is deterministic for identical input.

use super::stroke::Point;
use std::f64::consts::PI;

const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;
/// Slightly more than π so rotated cap points overlap instead of leaving a seam.
const FIXED_PI: f64 = PI + 0.0001;
const START_PRESSURE: f64 = 0.25;
const DEFAULT_PRESSURE: f64 = 0.5;
const CORNER_STEPS: u32 = 13;
const END_CAP_STEPS: u32 = 29;

/// Tuning knobs of the outliner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineOptions {
    /// Base diameter of the stroke
    pub size: f64,
    /// How strongly pressure affects the radius (0 = constant width)
    pub thinning: f64,
    /// Minimum spacing between emitted outline points, relative to `size`
    pub smoothing: f64,
    /// How much the raw samples are pulled towards the previous point
    pub streamline: f64,
    /// Derive pressure from sample velocity
    pub simulate_pressure: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: true,
        }
    }
}

impl OutlineOptions {
    /// Default tuning with the given pen size.
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    point: Point,
    pressure: f64,
    /// Unit vector pointing back towards the previous sample
    vector: Point,
    distance: f64,
    running_length: f64,
}

/// Outline for a stroke of the given width with default tuning.
///
/// Fewer than two input points yield an empty outline.
pub fn outline(points: &[Point], width: f64) -> Vec<Point> {
    outline_with(points, &OutlineOptions::with_size(width))
}

/// Outline with explicit tuning.
pub fn outline_with(points: &[Point], options: &OutlineOptions) -> Vec<Point> {
    if points.len() < 2 {
        return Vec::new();
    }
    let samples = streamline(points, options);
    outline_samples(&samples, options)
}

fn streamline(input: &[Point], options: &OutlineOptions) -> Vec<Sample> {
    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    // A bare two-point stroke is subdivided so the streamline has room to act.
    let points: Vec<Point> = if input.len() == 2 {
        let (first, last) = (input[0], input[1]);
        std::iter::once(first)
            .chain((1..5).map(|i| first.lerp(last, i as f64 / 4.0)))
            .collect()
    } else {
        input.to_vec()
    };

    let mut samples = vec![Sample {
        point: points[0],
        pressure: START_PRESSURE,
        vector: Point::new(1.0, 1.0),
        distance: 0.0,
        running_length: 0.0,
    }];

    let max = points.len() - 1;
    let mut running_length = 0.0;
    let mut reached_minimum = false;

    for (i, &raw) in points.iter().enumerate().skip(1) {
        let prev = samples[samples.len() - 1].point;
        let point = prev.lerp(raw, t);
        if point == prev {
            continue;
        }

        let distance = point.distance(prev);
        running_length += distance;

        if i < max && !reached_minimum {
            if running_length < options.size {
                continue;
            }
            reached_minimum = true;
        }

        samples.push(Sample {
            point,
            pressure: DEFAULT_PRESSURE,
            vector: (prev - point).unit(),
            distance,
            running_length,
        });
    }

    samples[0].vector = samples.get(1).map_or(Point::default(), |s| s.vector);
    samples
}

fn simulated_pressure(previous: f64, distance: f64, size: f64) -> f64 {
    let speed = (distance / size).min(1.0);
    let rest = (1.0 - speed).min(1.0);
    (previous + (rest - previous) * (speed * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

fn stroke_radius(size: f64, thinning: f64, pressure: f64) -> f64 {
    size * (0.5 - thinning * (0.5 - pressure))
}

fn outline_samples(samples: &[Sample], options: &OutlineOptions) -> Vec<Point> {
    let size = options.size;
    if samples.is_empty() || size <= 0.0 {
        return Vec::new();
    }

    let len = samples.len();
    let last = samples[len - 1];
    let total_length = last.running_length;
    let min_distance = (size * options.smoothing).powi(2);

    let mut left: Vec<Point> = Vec::new();
    let mut right: Vec<Point> = Vec::new();

    let mut prev_pressure = samples.iter().take(10).fold(samples[0].pressure, |acc, s| {
        let pressure = if options.simulate_pressure {
            simulated_pressure(acc, s.distance, size)
        } else {
            s.pressure
        };
        (acc + pressure) / 2.0
    });

    let mut radius = stroke_radius(size, options.thinning, last.pressure);
    let mut first_radius: Option<f64> = None;
    let mut prev_vector = samples[0].vector;
    let mut prev_left = samples[0].point;
    let mut prev_right = prev_left;
    let mut prev_was_sharp = false;

    for (i, sample) in samples.iter().enumerate() {
        let is_last = i == len - 1;

        // Samples too close to the end only add noise before the end cap.
        if !is_last && total_length - sample.running_length < 3.0 {
            continue;
        }

        let mut pressure = sample.pressure;
        if options.thinning != 0.0 {
            if options.simulate_pressure {
                pressure = simulated_pressure(prev_pressure, sample.distance, size);
            }
            radius = stroke_radius(size, options.thinning, pressure);
        } else {
            radius = size / 2.0;
        }
        first_radius.get_or_insert(radius);
        radius = radius.max(0.01);

        let next_vector = if is_last {
            sample.vector
        } else {
            samples[i + 1].vector
        };
        let next_dpr = if is_last {
            1.0
        } else {
            sample.vector.dot(next_vector)
        };
        let prev_dpr = sample.vector.dot(prev_vector);

        let is_sharp = prev_dpr < 0.0 && !prev_was_sharp;
        let next_is_sharp = next_dpr < 0.0;

        if is_sharp || next_is_sharp {
            let offset = prev_vector.perpendicular() * radius;
            for k in 0..=CORNER_STEPS {
                let t = k as f64 / CORNER_STEPS as f64;
                prev_left = (sample.point - offset).rotate_around(sample.point, FIXED_PI * t);
                left.push(prev_left);
                prev_right = (sample.point + offset).rotate_around(sample.point, -FIXED_PI * t);
                right.push(prev_right);
            }
            if next_is_sharp {
                prev_was_sharp = true;
            }
            continue;
        }

        prev_was_sharp = false;

        if is_last {
            let offset = sample.vector.perpendicular() * radius;
            left.push(sample.point - offset);
            right.push(sample.point + offset);
            continue;
        }

        let offset = next_vector.lerp(sample.vector, next_dpr).perpendicular() * radius;

        let candidate = sample.point - offset;
        if i <= 1 || prev_left.distance_squared(candidate) > min_distance {
            left.push(candidate);
            prev_left = candidate;
        }

        let candidate = sample.point + offset;
        if i <= 1 || prev_right.distance_squared(candidate) > min_distance {
            right.push(candidate);
            prev_right = candidate;
        }

        prev_pressure = pressure;
        prev_vector = sample.vector;
    }

    let first_point = samples[0].point;

    if len == 1 {
        // Everything collapsed onto one sample: draw a dot.
        let dot_radius = first_radius.unwrap_or(radius);
        let towards = first_point + Point::new(1.0, 1.0);
        let start = first_point + (first_point - towards).perpendicular().unit() * -dot_radius;
        return (1..=CORNER_STEPS)
            .map(|k| {
                let t = k as f64 / CORNER_STEPS as f64;
                start.rotate_around(first_point, FIXED_PI * 2.0 * t)
            })
            .collect();
    }

    let start_cap: Vec<Point> = right
        .first()
        .map(|&anchor| {
            (1..=CORNER_STEPS)
                .map(|k| {
                    let t = k as f64 / CORNER_STEPS as f64;
                    anchor.rotate_around(first_point, FIXED_PI * t)
                })
                .collect()
        })
        .unwrap_or_default();

    let last_point = last.point;
    let direction = (last.vector * -1.0).perpendicular();
    let end_start = last_point + direction * radius;
    let end_cap = (1..END_CAP_STEPS).map(|k| {
        let t = k as f64 / END_CAP_STEPS as f64;
        end_start.rotate_around(last_point, FIXED_PI * 3.0 * t)
    });

    let mut polygon = left;
    polygon.extend(end_cap);
    polygon.extend(right.into_iter().rev());
    polygon.extend(start_cap);
    polygon
}
