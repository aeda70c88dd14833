use std::f64::consts::PI;

use crate::error::{check_len, check_stdev, Result};
use crate::source::Source;

/// Radius cap of the Box-Muller transform, in standard deviations.
///
/// Samples beyond the cap are clamped to it, not resampled.
pub const TRUNCATION_SIGMAS: f64 = 8.0;

/// Fills `res` with approximately i.i.d. Normal(0, stdev^2) values.
///
/// Each pair of slots consumes two uniforms `r1, r2` in (0, 1):
/// `theta = 2*pi*r1`, `radius = min(sqrt(-2 ln r2) * stdev, TRUNCATION_SIGMAS * stdev)`,
/// and receives `radius * cos(theta)`, `radius * sin(theta)`. An odd trailing
/// slot only gets the cosine.
pub fn fill_gaussian_f64(res: &mut [f64], stdev: f64, source: &mut Source) -> Result<()> {
    check_len(res.len(), "gaussian")?;
    check_stdev(stdev)?;

    res.chunks_mut(2).for_each(|pair| {
        let r1: f64 = source.next_open_unit();
        let r2: f64 = source.next_open_unit();
        let (c, s) = box_muller(r1, r2, stdev);
        pair[0] = c;
        if let Some(x) = pair.get_mut(1) {
            *x = s;
        }
    });
    Ok(())
}

#[inline(always)]
fn box_muller(r1: f64, r2: f64, stdev: f64) -> (f64, f64) {
    let theta: f64 = 2.0 * PI * r1;
    let radius: f64 = ((-2.0 * r2.ln()).sqrt() * stdev).min(TRUNCATION_SIGMAS * stdev);
    (radius * theta.cos(), radius * theta.sin())
}

pub fn sample_gaussian_f64(n: usize, stdev: f64, source: &mut Source) -> Result<Vec<f64>> {
    check_len(n, "gaussian")?;
    let mut res: Vec<f64> = vec![0.0; n];
    fill_gaussian_f64(&mut res, stdev, source)?;
    Ok(res)
}

/// Fills `res` with continuous Gaussians rounded to the nearest integer.
pub fn fill_gaussian(res: &mut [i64], stdev: f64, source: &mut Source) -> Result<()> {
    let dvec: Vec<f64> = sample_gaussian_f64(res.len(), stdev, source)?;
    res.iter_mut()
        .zip(dvec.iter())
        .for_each(|(x, d)| *x = d.round() as i64);
    Ok(())
}

pub fn sample_gaussian(n: usize, stdev: f64, source: &mut Source) -> Result<Vec<i64>> {
    check_len(n, "gaussian")?;
    let mut res: Vec<i64> = vec![0; n];
    fill_gaussian(&mut res, stdev, source)?;
    Ok(res)
}
