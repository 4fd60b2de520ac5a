//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - measured samples: `o`
//! - fitted curve: `-` line

use crate::domain::{FitResult, SampleResidual};
use crate::models::predict;

/// Render measured samples and the chosen fitted curve.
pub fn render_ascii_plot(
    residuals: &[SampleResidual],
    fit: &FitResult,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (n_min, n_max) = size_range(residuals).unwrap_or((1.0, 999.0));
    let curve = sample_curve(fit, n_min, n_max, width);

    // Determine the time range from observed samples and curve points.
    let (t_min, t_max) = time_range(residuals, &curve).unwrap_or((0.0, 1.0));
    let (t_min, t_max) = pad_range(t_min, t_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the curve first (so points can overlay).
    draw_curve(&mut grid, &curve, n_min, n_max, t_min, t_max);

    for r in residuals {
        let x = map_x(r.size as f64, n_min, n_max, width);
        let y = map_y(r.time, t_min, t_max, height);
        grid[y][x] = 'o';
    }

    // Build the final string with a small header carrying the ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: size=[{n_min:.0}, {n_max:.0}] | time=[{t_min:.3e}, {t_max:.3e}]s | fit={}\n",
        fit.model.display_name
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn size_range(residuals: &[SampleResidual]) -> Option<(f64, f64)> {
    let mut min_n = f64::INFINITY;
    let mut max_n = f64::NEG_INFINITY;
    for r in residuals {
        min_n = min_n.min(r.size as f64);
        max_n = max_n.max(r.size as f64);
    }
    if min_n.is_finite() && max_n.is_finite() && max_n > min_n {
        Some((min_n, max_n))
    } else {
        None
    }
}

fn sample_curve(fit: &FitResult, n_min: f64, n_max: f64, cols: usize) -> Vec<(f64, f64)> {
    let cols = cols.max(2);
    let mut out = Vec::with_capacity(cols);
    for i in 0..cols {
        let u = i as f64 / (cols as f64 - 1.0);
        let n = n_min + u * (n_max - n_min);
        out.push((n, predict(fit.model.kind, n, &fit.model.coeffs)));
    }
    out
}

fn time_range(residuals: &[SampleResidual], curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;

    for r in residuals {
        min_t = min_t.min(r.time);
        max_t = max_t.max(r.time);
    }
    for &(_, t) in curve {
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }

    if min_t.is_finite() && max_t.is_finite() && max_t > min_t {
        Some((min_t, max_t))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(n: f64, n_min: f64, n_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((n - n_min) / (n_max - n_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(t: f64, t_min: f64, t_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    // t=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    n_min: f64,
    n_max: f64,
    t_min: f64,
    t_max: f64,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(n, t) in curve {
        let x = map_x(n, n_min, n_max, width);
        let y = map_y(t, t_min, t_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
