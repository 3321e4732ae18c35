//! Scalar registry and result-type deduction.
//!
//! [`Scalar`] maps every supported element type to its real counterpart
//! (`Real = Self` for `f32`/`f64`, `Real = T` for `Complex<T>`) and carries
//! the per-element kernels the operation entry points bind to. An element
//! type with no `Scalar` impl simply does not compile against those entry
//! points.
//!
//! [`UnaryFn`] is the capability "callable on `A`" with the produced type as
//! an associated type, which is what lets a functor expression name its own
//! element type without the caller spelling it out.

use std::fmt::Debug;
use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

/// Element types with a registered real counterpart.
pub trait Scalar: Copy + PartialEq + Debug + Zero + Send + Sync + 'static {
    /// Real counterpart (`Self` for reals, the component type for complex).
    type Real: RealScalar;

    /// Absolute value / modulus.
    fn modulus(self) -> Self::Real;
    /// Real part.
    fn re(self) -> Self::Real;
    /// Imaginary part (zero for reals).
    fn im(self) -> Self::Real;
    /// Phase angle, `atan2(im, re)`.
    fn arg(self) -> Self::Real;
    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// `self` raised to a real power.
    fn powf(self, exponent: Self::Real) -> Self;
    /// `2^self`.
    fn exp2(self) -> Self;
}

/// Real floating-point scalars: their own real counterpart.
pub trait RealScalar: Scalar<Real = Self> + Float + FloatConst {}

impl<T: Scalar<Real = T> + Float + FloatConst> RealScalar for T {}

/// Real counterpart of `S`.
pub type RealOf<S> = <S as Scalar>::Real;

/// Value produced by applying `F` to an `A`.
pub type ResultOf<F, A> = <F as UnaryFn<A>>::Output;

/// A side-effect-free unary callable with a fixed argument type.
pub trait UnaryFn<A> {
    type Output;
    fn invoke(&self, arg: A) -> Self::Output;
}

impl<A, R, F> UnaryFn<A> for F
where
    F: Fn(A) -> R,
{
    type Output = R;

    #[inline(always)]
    fn invoke(&self, arg: A) -> R {
        self(arg)
    }
}

macro_rules! impl_scalar_real {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { <$t>::abs(self) }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn im(self) -> $t { 0.0 }
                #[inline] fn arg(self) -> $t { <$t>::atan2(0.0, self) }
                #[inline] fn conj(self) -> $t { self }
                #[inline] fn sqrt(self) -> $t { <$t>::sqrt(self) }
                #[inline] fn exp(self) -> $t { <$t>::exp(self) }
                #[inline] fn ln(self) -> $t { <$t>::ln(self) }
                #[inline] fn powf(self, exponent: $t) -> $t { <$t>::powf(self, exponent) }
                #[inline] fn exp2(self) -> $t { <$t>::exp2(self) }
            }
        )*
    };
}

impl_scalar_real!(f32, f64);

impl<T: RealScalar> Scalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        Complex::norm(self)
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn im(self) -> T {
        self.im
    }

    #[inline]
    fn arg(self) -> T {
        Complex::arg(self)
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Complex::sqrt(self)
    }

    #[inline]
    fn exp(self) -> Self {
        Complex::exp(self)
    }

    #[inline]
    fn ln(self) -> Self {
        Complex::ln(self)
    }

    #[inline]
    fn powf(self, exponent: T) -> Self {
        Complex::powf(self, exponent)
    }

    /// `2^(a+bi) = 2^a (cos(b ln 2) + i sin(b ln 2))`
    #[inline]
    fn exp2(self) -> Self {
        let scale = Float::exp2(self.re);
        let phase = self.im * T::LN_2();
        Complex::new(scale * Float::cos(phase), scale * Float::sin(phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    fn real_of<S: Scalar>(x: S) -> RealOf<S> {
        x.modulus()
    }

    #[test]
    fn real_counterpart_of_complex_is_component() {
        let m: f64 = real_of(Complex64::new(3.0, 4.0));
        assert_abs_diff_eq!(m, 5.0, epsilon = 1e-12);
        let m: f32 = real_of(-2.5f32);
        assert_eq!(m, 2.5);
    }

    #[test]
    fn complex_exp2_matches_formula() {
        let z = Complex64::new(1.0, 2.0);
        let w = Scalar::exp2(z);
        let c1 = 2.0 * std::f64::consts::LN_2;
        assert_abs_diff_eq!(w.re, 2.0 * c1.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(w.im, 2.0 * c1.sin(), epsilon = 1e-12);
        // agrees with the generic exponential form
        let v = (z * std::f64::consts::LN_2).exp();
        assert_abs_diff_eq!(w.re, v.re, epsilon = 1e-12);
        assert_abs_diff_eq!(w.im, v.im, epsilon = 1e-12);
    }

    #[test]
    fn real_arg_follows_atan2() {
        assert_eq!(Scalar::arg(1.5f64), 0.0);
        assert_abs_diff_eq!(Scalar::arg(-1.5f64), std::f64::consts::PI, epsilon = 1e-15);
        assert_eq!(Scalar::im(7.0f64), 0.0);
    }

    #[test]
    fn closures_and_fn_pointers_are_unary_fns() {
        let f: fn(f64) -> f64 = <f64 as Scalar>::exp2;
        assert_eq!(f.invoke(3.0), 8.0);
        let offset = 1.0;
        let g = move |x: f64| x + offset;
        assert_eq!(g.invoke(1.0), 2.0);
    }
}
