use std::fmt;


/// A one-dimensional potential over an inter-atom distance (nm) that can
/// be handed to PLUMED as a MATHEVAL function of `x`.
pub trait DistancePotential {
    /// Energy (kJ/mol) at distance x.
    fn value(&self, x: f64) -> f64;

    /// dE/dx at distance x.
    fn slope(&self, x: f64) -> f64;

    /// The function in lepton syntax, with `x` as the argument.
    fn expression(&self) -> String;
}

/// Quadratic well between `lower` and `upper`, continued as a linear ramp
/// beyond `upper`, zero below `lower`:
///
/// ```text
/// (K*(L-x)^2)*step(x-L)*step(U-x) + (R*(2*x-S))*step(x-U)
/// ```
///
/// The fitted constants satisfy R = K*(U-L) and S = L+U, so value and
/// slope of well and ramp agree at `upper`. Both R and S are stored as
/// printed in the fit rather than recomputed, the rendered expression has
/// to reproduce them exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HBondPotential {
    pub well: f64,
    pub lower: f64,
    pub upper: f64,
    pub ramp: f64,
    pub offset: f64,
}

impl HBondPotential {
    pub const fn new(well: f64, lower: f64, upper: f64, ramp: f64, offset: f64) -> Self {
        HBondPotential { well, lower, upper, ramp, offset }
    }

    /// Value of the well at `upper`, where the ramp takes over.
    pub fn breakpoint_value(&self) -> f64 {
        self.well * (self.lower - self.upper).powi(2)
    }

    /// Attractive terms have a negative well constant.
    pub fn is_attractive(&self) -> bool {
        self.well < 0.0
    }
}

impl DistancePotential for HBondPotential {
    fn value(&self, x: f64) -> f64 {
        if x < self.lower {
            0.0
        } else if x <= self.upper {
            self.well * (self.lower - x).powi(2)
        } else {
            self.ramp * (2.0 * x - self.offset)
        }
    }

    fn slope(&self, x: f64) -> f64 {
        if x < self.lower {
            0.0
        } else if x <= self.upper {
            2.0 * self.well * (x - self.lower)
        } else {
            2.0 * self.ramp
        }
    }

    fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HBondPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}*({}-x)^2)*step(x-{})*step({}-x)+({}*(2*x-{}))*step(x-{})",
            self.well, self.lower, self.lower, self.upper,
            self.ramp, self.offset, self.upper)
    }
}
