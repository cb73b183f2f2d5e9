// src/line.rs
//
// Per-line fit record for the lane tracking pipeline.
//
// One LineState is created per tracked lane line. The best-fit histories hold
// the A, B, C coefficients of x = A·y² + B·y + C averaged over recent frames;
// `current_fit` holds the most recent single-frame fit. Averaging and window
// trimming are the caller's job; this type only owns the storage.

use serde::{Deserialize, Serialize};

/// Most recent polynomial fit for a line.
///
/// `Unset` stands in for "no fit computed yet". Check it before treating the
/// fit as numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Fit {
    #[default]
    Unset,
    Fitted(Vec<f64>),
}

impl Fit {
    /// `true` once numeric coefficients have been stored.
    pub fn is_fitted(&self) -> bool {
        matches!(self, Fit::Fitted(_))
    }

    /// Numeric coefficients, or `None` while the sentinel is still in place.
    pub fn coefficients(&self) -> Option<&[f64]> {
        match self {
            Fit::Unset => None,
            Fit::Fitted(coeffs) => Some(coeffs),
        }
    }
}

/// Fit history and latest fit for one tracked lane line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineState {
    /// Coefficient A averaged over the last n iterations.
    pub best_fit_a: Vec<f64>,
    /// Coefficient B averaged over the last n iterations.
    pub best_fit_b: Vec<f64>,
    /// Coefficient C averaged over the last n iterations.
    pub best_fit_c: Vec<f64>,
    /// Coefficients for the most recent fit. Starts as a single `Fit::Unset`.
    pub current_fit: Vec<Fit>,
}

impl LineState {
    /// Fresh state: empty best-fit histories and a single `Fit::Unset`.
    pub fn new() -> Self {
        Self {
            best_fit_a: Vec::new(),
            best_fit_b: Vec::new(),
            best_fit_c: Vec::new(),
            current_fit: vec![Fit::Unset],
        }
    }
}

impl Default for LineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_best_fits() {
        let line = LineState::new();
        assert_eq!(line.best_fit_a.len(), 0);
        assert_eq!(line.best_fit_b.len(), 0);
        assert_eq!(line.best_fit_c.len(), 0);
    }

    #[test]
    fn test_new_current_fit_is_single_sentinel() {
        let line = LineState::new();
        assert_eq!(line.current_fit.len(), 1);
        assert_eq!(line.current_fit[0], Fit::Unset);
        assert!(!line.current_fit[0].is_fitted());
        assert!(line.current_fit[0].coefficients().is_none());
    }

    #[test]
    fn test_instances_do_not_share_storage() {
        let mut first = LineState::new();
        let second = LineState::new();

        first.best_fit_a.push(0.25);
        first.best_fit_c.push(310.0);
        first.current_fit[0] = Fit::Fitted(vec![0.25, -1.5, 310.0]);

        assert!(second.best_fit_a.is_empty());
        assert!(second.best_fit_c.is_empty());
        assert_eq!(second.current_fit, vec![Fit::Unset]);
    }

    #[test]
    fn test_best_fits_hold_floats_from_construction() {
        let mut line = LineState::new();
        line.best_fit_a.push(1.0e-4);
        line.best_fit_b.push(-0.35);
        line.best_fit_c.push(412.5);

        let sum: f64 = line.best_fit_a[0] + line.best_fit_b[0] + line.best_fit_c[0];
        assert!((sum - 412.1501).abs() < 1e-9, "unexpected sum {}", sum);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(LineState::default(), LineState::new());
        assert_eq!(Fit::default(), Fit::Unset);
    }

    #[test]
    fn test_fitted_exposes_coefficients() {
        let fit = Fit::Fitted(vec![0.5, 2.0, 300.0]);
        assert!(fit.is_fitted());
        assert_eq!(fit.coefficients(), Some(&[0.5, 2.0, 300.0][..]));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut line = LineState::new();
        line.best_fit_b.push(-0.35);
        line.current_fit.push(Fit::Fitted(vec![0.1, 0.2, 0.3]));

        let json = serde_json::to_string(&line).unwrap();
        let back: LineState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_fresh_state_serializes_sentinel_by_name() {
        let json = serde_json::to_value(LineState::new()).unwrap();
        assert_eq!(json["current_fit"], serde_json::json!(["Unset"]));
        assert_eq!(json["best_fit_a"], serde_json::json!([]));
    }
}
