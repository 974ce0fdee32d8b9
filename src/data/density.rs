// ---------------------------------------------------------------------------
// Kernel density estimation (ridgeline plot)
// ---------------------------------------------------------------------------

/// Gaussian kernel density estimate evaluated on a regular grid.
///
/// The grid spans the sample range padded by three bandwidths on each side,
/// so the curve tails off to near zero at both ends. Empty samples, a
/// non-positive bandwidth, or a degenerate grid yield an empty curve.
pub fn gaussian_kde(samples: &[f64], bandwidth: f64, grid_points: usize) -> Vec<[f64; 2]> {
    if samples.is_empty() || bandwidth <= 0.0 || grid_points < 2 {
        return Vec::new();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;
    let step = (hi - lo) / (grid_points - 1) as f64;

    let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..grid_points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = samples
                .iter()
                .map(|&s| {
                    let u = (x - s) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density]
        })
        .collect()
}
