//! Tolerance defaults for polygon comparisons.
//!
//! Policy
//! - `Polygon::equals` and `PartialEq` compare the radius exactly. The
//!   constants below only feed the opt-in `equals_eps` / `equals_cfg` paths
//!   and numeric checks in tests.

/// Default absolute tolerance on the circumradius for `Polygon::equals_cfg`.
pub const RADIUS_EPS: f64 = 1e-12;
/// Relative tolerance for checking derived quantities (perimeter vs n·side etc.).
pub const CHECK_EPS: f64 = 1e-9;

/// Comparison configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct PolyCfg {
    pub eps_radius: f64,
}

impl Default for PolyCfg {
    fn default() -> Self {
        Self {
            eps_radius: RADIUS_EPS,
        }
    }
}
