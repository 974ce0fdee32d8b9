// ---------------------------------------------------------------------------
// LOWESS trendline
// ---------------------------------------------------------------------------

/// Locally weighted scatterplot smoothing.
///
/// For each sample x position, fits a degree-1 weighted least squares line
/// over the `frac` nearest neighbours (tricube weights) and evaluates it at
/// that position. Returns the smoothed curve sorted by x. Fewer than three
/// points yield an empty curve.
pub fn lowess(points: &[[f64; 2]], frac: f64) -> Vec<[f64; 2]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a[0].total_cmp(&b[0]));

    let k = ((frac * n as f64).ceil() as usize).clamp(2, n);

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let x0 = pts[i][0];

        // Slide a k-wide window to the neighbourhood closest to x0.
        let mut lo = i.saturating_sub(k / 2).min(n - k);
        while lo > 0 && x0 - pts[lo - 1][0] < pts[lo + k - 1][0] - x0 {
            lo -= 1;
        }
        while lo + k < n && pts[lo + k][0] - x0 < x0 - pts[lo][0] {
            lo += 1;
        }
        let window = &pts[lo..lo + k];

        let dmax = window
            .iter()
            .map(|p| (p[0] - x0).abs())
            .fold(0.0_f64, f64::max);

        out.push([x0, fit_at(window, x0, dmax)]);
    }
    out
}

/// Tricube-weighted degree-1 fit of `window`, evaluated at `x0`.
fn fit_at(window: &[[f64; 2]], x0: f64, dmax: f64) -> f64 {
    if dmax <= f64::EPSILON {
        // All neighbours share one x position: plain mean.
        return window.iter().map(|p| p[1]).sum::<f64>() / window.len() as f64;
    }

    let mut sw = 0.0;
    let mut swx = 0.0;
    let mut swy = 0.0;
    let mut swxx = 0.0;
    let mut swxy = 0.0;
    for p in window {
        let u = ((p[0] - x0).abs() / dmax).min(1.0);
        let w = (1.0 - u.powi(3)).powi(3);
        sw += w;
        swx += w * p[0];
        swy += w * p[1];
        swxx += w * p[0] * p[0];
        swxy += w * p[0] * p[1];
    }

    let denom = sw * swxx - swx * swx;
    if denom.abs() < 1e-12 {
        return swy / sw;
    }
    let slope = (sw * swxy - swx * swy) / denom;
    let intercept = (swy - slope * swx) / sw;
    intercept + slope * x0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_points_give_no_curve() {
        assert!(lowess(&[[0.0, 0.0], [1.0, 1.0]], 0.5).is_empty());
    }

    #[test]
    fn reproduces_a_straight_line() {
        let points: Vec<[f64; 2]> = (0..20)
            .map(|i| {
                let x = i as f64;
                [x, 2.0 * x + 1.0]
            })
            .collect();
        let curve = lowess(&points, 0.5);
        assert_eq!(curve.len(), points.len());
        for p in &curve {
            assert!(
                (p[1] - (2.0 * p[0] + 1.0)).abs() < 1e-9,
                "fit at x={} was {}",
                p[0],
                p[1]
            );
        }
    }

    #[test]
    fn output_is_sorted_by_x() {
        let points = [[3.0, 1.0], [1.0, 2.0], [2.0, 0.5], [0.0, 1.5]];
        let curve = lowess(&points, 0.75);
        assert!(curve.windows(2).all(|w| w[0][0] <= w[1][0]));
    }

    #[test]
    fn constant_x_falls_back_to_mean() {
        let points = [[1.0, 0.0], [1.0, 2.0], [1.0, 4.0]];
        let curve = lowess(&points, 1.0);
        for p in &curve {
            assert!((p[1] - 2.0).abs() < 1e-12);
        }
    }
}
