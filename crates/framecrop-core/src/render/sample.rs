//! Source-image resampling for drawing into the viewport.
//!
//! Sampling coordinates are continuous source-pixel coordinates where pixel
//! `(i, j)` has its center at `(i, j)`. Coordinates outside the image are
//! clamped to the nearest edge pixel so the image border is not darkened.
//!
//! Interpolation runs on premultiplied color so transparent pixels do not
//! bleed their (meaningless) color into opaque neighbours.

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// Interpolation filter used when drawing the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationFilter {
    /// Nearest neighbor (fastest, blocky when enlarging).
    Nearest,
    /// Bilinear interpolation over the 2x2 neighbourhood.
    #[default]
    Bilinear,
    /// Lanczos3 over the 6x6 neighbourhood (slowest, sharpest).
    Lanczos3,
}

/// Sample `image` at continuous coordinates, returning straight RGBA in
/// the 0.0-255.0 range.
pub fn sample(image: &DecodedImage, x: f64, y: f64, filter: InterpolationFilter) -> [f64; 4] {
    match filter {
        InterpolationFilter::Nearest => sample_nearest(image, x, y),
        InterpolationFilter::Bilinear => sample_bilinear(image, x, y),
        InterpolationFilter::Lanczos3 => sample_lanczos3(image, x, y),
    }
}

/// Premultiplied pixel at clamped integer coordinates.
#[inline]
fn premultiplied(image: &DecodedImage, px: i64, py: i64) -> [f64; 4] {
    let px = px.clamp(0, image.width as i64 - 1) as u32;
    let py = py.clamp(0, image.height as i64 - 1) as u32;
    let [r, g, b, a] = image.pixel(px, py);
    let alpha = a as f64 / 255.0;
    [r as f64 * alpha, g as f64 * alpha, b as f64 * alpha, a as f64]
}

#[inline]
fn unpremultiply(sum: [f64; 4]) -> [f64; 4] {
    let a = sum[3].clamp(0.0, 255.0);
    if a <= 0.0 {
        return [0.0; 4];
    }
    let inv = 255.0 / a;
    [
        (sum[0] * inv).clamp(0.0, 255.0),
        (sum[1] * inv).clamp(0.0, 255.0),
        (sum[2] * inv).clamp(0.0, 255.0),
        a,
    ]
}

fn sample_nearest(image: &DecodedImage, x: f64, y: f64) -> [f64; 4] {
    let [r, g, b, a] = image.pixel(
        (x + 0.5).floor().clamp(0.0, image.width as f64 - 1.0) as u32,
        (y + 0.5).floor().clamp(0.0, image.height as f64 - 1.0) as u32,
    );
    [r as f64, g as f64, b as f64, a as f64]
}

/// Bilinear interpolation weights the 4 nearest pixels by distance.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [f64; 4] {
    let x = x.clamp(0.0, image.width as f64 - 1.0);
    let y = y.clamp(0.0, image.height as f64 - 1.0);

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = premultiplied(image, x0, y0);
    let p10 = premultiplied(image, x0 + 1, y0);
    let p01 = premultiplied(image, x0, y0 + 1);
    let p11 = premultiplied(image, x0 + 1, y0 + 1);

    let mut sum = [0.0f64; 4];
    for i in 0..4 {
        sum[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }

    unpremultiply(sum)
}

fn sample_lanczos3(image: &DecodedImage, x: f64, y: f64) -> [f64; 4] {
    let x = x.clamp(0.0, image.width as f64 - 1.0);
    let y = y.clamp(0.0, image.height as f64 - 1.0);

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        let wy = lanczos_weight(y - (y0 + ky) as f64, 3.0);
        if wy == 0.0 {
            continue;
        }
        for kx in -2..=3 {
            let weight = lanczos_weight(x - (x0 + kx) as f64, 3.0) * wy;
            if weight == 0.0 {
                continue;
            }
            let pixel = premultiplied(image, x0 + kx, y0 + ky);
            for i in 0..4 {
                sum[i] += pixel[i] * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum.abs() < f64::EPSILON {
        return sample_bilinear(image, x, y);
    }
    for v in &mut sum {
        *v /= weight_sum;
    }
    unpremultiply(sum)
}

/// Lanczos kernel weight function.
///
/// ```text
/// L(x) = sinc(x) * sinc(x/a)  for |x| < a
/// L(x) = 0                     for |x| >= a
/// ```
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;
    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}
