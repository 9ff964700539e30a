//! Proportion sample-size statistics.
//!
//! The standard equations for sizing a proportion estimate:
//! `n = z^2 * p * (1 - p) / E^2` and its inverse
//! `E = z * sqrt(p * (1 - p) / n)`.

use crate::error::{EstimateError, Result};

/// Returns the two-sided z-score for a `(0, 1)` confidence level.
///
/// Evaluates the standard-normal quantile at `0.5 + confidence / 2`,
/// so `0.95` yields the classical `1.959964`.
///
/// # Errors
///
/// Returns a range error when confidence is outside `(0, 1)`.
///
/// # Example
///
/// ```
/// let z = ml_sampling::z_score(0.95).unwrap();
/// assert!((z - 1.959964).abs() < 1e-4);
/// ```
pub fn z_score(confidence: f64) -> Result<f64> {
    if confidence <= 0.0 || confidence >= 1.0 {
        return Err(EstimateError::out_of_range("confidence", confidence));
    }
    Ok(normal_quantile(0.5 + confidence / 2.0))
}

/// Minimum labeled boxes for a proportion estimate at the given
/// precision: `n = z^2 * p * (1 - p) / E^2`.
///
/// Returns the unrounded value; callers apply ceiling rounding when
/// converting to a box count.
///
/// # Errors
///
/// Returns a range error when margin or `base_rate` is outside `(0, 1)`.
pub fn required_boxes(z: f64, margin: f64, base_rate: f64) -> Result<f64> {
    if margin <= 0.0 || margin >= 1.0 {
        return Err(EstimateError::out_of_range("margin", margin));
    }
    if base_rate <= 0.0 || base_rate >= 1.0 {
        return Err(EstimateError::out_of_range("base_rate", base_rate));
    }
    Ok((z * z * base_rate * (1.0 - base_rate)) / (margin * margin))
}

/// Worst-case margin of error achievable with `boxes` labeled boxes:
/// `E = z * sqrt(p * (1 - p) / n)`.
///
/// # Errors
///
/// Returns a range error when `boxes` is not positive.
pub fn margin_from_boxes(z: f64, base_rate: f64, boxes: f64) -> Result<f64> {
    if boxes <= 0.0 {
        return Err(EstimateError::NonPositiveBoxCount(boxes));
    }
    Ok(z * (base_rate * (1.0 - base_rate) / boxes).sqrt())
}

/// Standard-normal quantile (inverse CDF) via Acklam's rational
/// approximation. Relative error is below 1.15e-9 over `(0, 1)`,
/// comfortably past the 4 significant digits needed here.
fn normal_quantile(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p < 1.0);

    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.02425;

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}
