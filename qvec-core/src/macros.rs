//! Macros for stamping out the element-wise math methods.

/// Generates one method per [`MathFunction`](crate::MathFunction) variant on a vector type that
/// provides `apply`.
///
/// The `immutable` form returns a new vector; the `mutable` form transforms in place and returns
/// `&mut Self` for chaining.
macro_rules! impl_math_functions {
    (immutable) => {
        impl_math_functions!(@each immutable;
            abs => Abs, acos => Acos, asin => Asin, atan => Atan, cbrt => Cbrt, ceil => Ceil,
            cos => Cos, cosh => Cosh, exp => Exp, expm1 => Expm1, floor => Floor, inv => Inv,
            log => Log, log10 => Log10, log1p => Log1p, neg => Neg, rint => Rint, round => Round,
            signum => Signum, sin => Sin, sinh => Sinh, sqrt => Sqrt, tan => Tan, tanh => Tanh,
        );

        /// Raises every element to `exponent`.
        pub fn pow(&self, exponent: f64) -> $crate::Result<Self> {
            self.apply($crate::MathFunction::Pow(exponent))
        }
    };
    (mutable) => {
        impl_math_functions!(@each mutable;
            abs => Abs, acos => Acos, asin => Asin, atan => Atan, cbrt => Cbrt, ceil => Ceil,
            cos => Cos, cosh => Cosh, exp => Exp, expm1 => Expm1, floor => Floor, inv => Inv,
            log => Log, log10 => Log10, log1p => Log1p, neg => Neg, rint => Rint, round => Round,
            signum => Signum, sin => Sin, sinh => Sinh, sqrt => Sqrt, tan => Tan, tanh => Tanh,
        );

        /// Raises every element to `exponent`, in place.
        pub fn pow(&mut self, exponent: f64) -> $crate::Result<&mut Self> {
            self.apply($crate::MathFunction::Pow(exponent))
        }
    };
    (@each $mode:ident; $($name:ident => $func:ident),+ $(,)?) => {
        $( impl_math_functions!(@one $mode $name $func); )+
    };
    (@one immutable $name:ident $func:ident) => {
        #[doc = concat!("Applies `", stringify!($name), "` to every element, returning a new vector.")]
        pub fn $name(&self) -> $crate::Result<Self> {
            self.apply($crate::MathFunction::$func)
        }
    };
    (@one mutable $name:ident $func:ident) => {
        #[doc = concat!("Applies `", stringify!($name), "` to every element in place.")]
        pub fn $name(&mut self) -> $crate::Result<&mut Self> {
            self.apply($crate::MathFunction::$func)
        }
    };
}
