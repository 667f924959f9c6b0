//! Element-wise math functions applicable to vector quantities.

use core::fmt::{Display, Formatter};

/// A unary function applied to every element (in SI) of a vector.
///
/// Rounding follows the usual numeric-library conventions: [`MathFunction::Round`] rounds half
/// up (`floor(x + 0.5)`), [`MathFunction::Rint`] rounds half to even, and
/// [`MathFunction::Signum`] maps `±0.0` to itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MathFunction {
    /// `|x|`
    Abs,
    /// Arc cosine.
    Acos,
    /// Arc sine.
    Asin,
    /// Arc tangent.
    Atan,
    /// Cube root.
    Cbrt,
    /// Smallest integer `>= x`.
    Ceil,
    /// Cosine.
    Cos,
    /// Hyperbolic cosine.
    Cosh,
    /// `e^x`
    Exp,
    /// `e^x - 1`
    Expm1,
    /// Largest integer `<= x`.
    Floor,
    /// `1 / x`
    Inv,
    /// Natural logarithm.
    Log,
    /// Base-10 logarithm.
    Log10,
    /// `ln(1 + x)`
    Log1p,
    /// `-x`
    Neg,
    /// Round half to even.
    Rint,
    /// Round half up.
    Round,
    /// Sign of `x` (`-1`, `0` or `1`).
    Signum,
    /// Sine.
    Sin,
    /// Hyperbolic sine.
    Sinh,
    /// Square root.
    Sqrt,
    /// Tangent.
    Tan,
    /// Hyperbolic tangent.
    Tanh,
    /// `x^exponent`
    Pow(f64),
}

impl MathFunction {
    /// Every function except [`MathFunction::Pow`], in alphabetical order.
    pub const ALL: [MathFunction; 24] = [
        MathFunction::Abs,
        MathFunction::Acos,
        MathFunction::Asin,
        MathFunction::Atan,
        MathFunction::Cbrt,
        MathFunction::Ceil,
        MathFunction::Cos,
        MathFunction::Cosh,
        MathFunction::Exp,
        MathFunction::Expm1,
        MathFunction::Floor,
        MathFunction::Inv,
        MathFunction::Log,
        MathFunction::Log10,
        MathFunction::Log1p,
        MathFunction::Neg,
        MathFunction::Rint,
        MathFunction::Round,
        MathFunction::Signum,
        MathFunction::Sin,
        MathFunction::Sinh,
        MathFunction::Sqrt,
        MathFunction::Tan,
        MathFunction::Tanh,
    ];

    /// Evaluates the function at `x`.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            MathFunction::Abs => x.abs(),
            MathFunction::Acos => x.acos(),
            MathFunction::Asin => x.asin(),
            MathFunction::Atan => x.atan(),
            MathFunction::Cbrt => x.cbrt(),
            MathFunction::Ceil => x.ceil(),
            MathFunction::Cos => x.cos(),
            MathFunction::Cosh => x.cosh(),
            MathFunction::Exp => x.exp(),
            MathFunction::Expm1 => x.exp_m1(),
            MathFunction::Floor => x.floor(),
            MathFunction::Inv => 1.0 / x,
            MathFunction::Log => x.ln(),
            MathFunction::Log10 => x.log10(),
            MathFunction::Log1p => x.ln_1p(),
            MathFunction::Neg => -x,
            MathFunction::Rint => x.round_ties_even(),
            MathFunction::Round => (x + 0.5).floor(),
            MathFunction::Signum => {
                if x == 0.0 || x.is_nan() {
                    x
                } else {
                    x.signum()
                }
            }
            MathFunction::Sin => x.sin(),
            MathFunction::Sinh => x.sinh(),
            MathFunction::Sqrt => x.sqrt(),
            MathFunction::Tan => x.tan(),
            MathFunction::Tanh => x.tanh(),
            MathFunction::Pow(e) => x.powf(e),
        }
    }

    /// Whether the function may be applied to absolute quantities.
    ///
    /// Only rounding keeps a point on a scale meaningful; `abs` and `neg` scale by `-1`.
    pub const fn preserves_absolute(self) -> bool {
        matches!(
            self,
            MathFunction::Ceil | MathFunction::Floor | MathFunction::Rint | MathFunction::Round
        )
    }

    /// Lowercase function name.
    pub const fn name(self) -> &'static str {
        match self {
            MathFunction::Abs => "abs",
            MathFunction::Acos => "acos",
            MathFunction::Asin => "asin",
            MathFunction::Atan => "atan",
            MathFunction::Cbrt => "cbrt",
            MathFunction::Ceil => "ceil",
            MathFunction::Cos => "cos",
            MathFunction::Cosh => "cosh",
            MathFunction::Exp => "exp",
            MathFunction::Expm1 => "expm1",
            MathFunction::Floor => "floor",
            MathFunction::Inv => "inv",
            MathFunction::Log => "log",
            MathFunction::Log10 => "log10",
            MathFunction::Log1p => "log1p",
            MathFunction::Neg => "neg",
            MathFunction::Rint => "rint",
            MathFunction::Round => "round",
            MathFunction::Signum => "signum",
            MathFunction::Sin => "sin",
            MathFunction::Sinh => "sinh",
            MathFunction::Sqrt => "sqrt",
            MathFunction::Tan => "tan",
            MathFunction::Tanh => "tanh",
            MathFunction::Pow(_) => "pow",
        }
    }
}

impl Display for MathFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MathFunction::Pow(e) => write!(f, "pow({})", e),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rounding_conventions() {
        assert_eq!(MathFunction::Round.apply(2.5), 3.0);
        assert_eq!(MathFunction::Round.apply(-2.5), -2.0);
        assert_eq!(MathFunction::Rint.apply(2.5), 2.0);
        assert_eq!(MathFunction::Rint.apply(3.5), 4.0);
        assert_eq!(MathFunction::Rint.apply(-2.5), -2.0);
        assert_eq!(MathFunction::Rint.apply(2.4), 2.0);
    }

    #[test]
    fn signum_keeps_zero() {
        assert_eq!(MathFunction::Signum.apply(0.0), 0.0);
        assert_eq!(MathFunction::Signum.apply(-3.0), -1.0);
        assert_eq!(MathFunction::Signum.apply(7.0), 1.0);
    }

    #[test]
    fn selected_values() {
        assert_abs_diff_eq!(MathFunction::Inv.apply(4.0), 0.25);
        assert_abs_diff_eq!(MathFunction::Cbrt.apply(27.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(MathFunction::Log10.apply(1000.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(MathFunction::Pow(3.0).apply(2.0), 8.0);
        assert_abs_diff_eq!(MathFunction::Expm1.apply(0.0), 0.0);
    }

    #[test]
    fn absolute_whitelist() {
        let allowed: Vec<_> = MathFunction::ALL
            .iter()
            .filter(|f| f.preserves_absolute())
            .map(|f| f.name())
            .collect();
        assert_eq!(allowed, ["ceil", "floor", "rint", "round"]);
        assert!(!MathFunction::Abs.preserves_absolute());
        assert!(!MathFunction::Neg.preserves_absolute());
        assert!(!MathFunction::Pow(2.0).preserves_absolute());
    }

    #[test]
    fn display() {
        assert_eq!(MathFunction::Log1p.to_string(), "log1p");
        assert_eq!(MathFunction::Pow(0.5).to_string(), "pow(0.5)");
    }
}
