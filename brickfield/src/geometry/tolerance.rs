// Centralized tolerances for the collision and tiling kernels.
// Overlap and containment compare exactly (inclusive); these only guard
// divisions and integer rounding.

pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold
pub const EPS_CONVEX: f64 = 1e-9;         // turn slack, as a sine of the turn angle
pub const EPS_WINDING: f64 = 1e-6;        // total-turn slack (radians) for one revolution
pub const EPS_STEP: f64 = 1e-9;           // slack when counting tiles per span

/// Number of evenly spaced samples in the inclusive range `[0, span]` with
/// the given step. Negative spans (beyond slack) hold no samples. `None` when
/// the count does not fit in `usize` (reachable on 32-bit targets).
#[inline]
pub fn steps_inclusive(span: f64, step: f64) -> Option<usize> {
    if span < -EPS_STEP || step <= EPS_LEN { return Some(0); }
    let n = (span.max(0.0) / step + EPS_STEP).floor();
    if !(n < usize::MAX as f64) { return None; }
    (n as usize).checked_add(1)
}
