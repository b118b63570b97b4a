//! Complex numbers.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use super::format_float_component;

/// A complex number with `f64` parts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Integral exponents up to this magnitude use repeated multiplication.
const MAX_EXACT_EXPONENT: f64 = 100.0;

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Magnitude.
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Phase angle in radians.
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// `self / rhs`, or `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Complex) -> Option<Complex> {
        if rhs.is_zero() {
            return None;
        }
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Some(Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        ))
    }

    /// `self ** exp`, or `None` when a zero base meets an exponent with a
    /// non-positive real part (or any imaginary part).
    pub fn checked_pow(self, exp: Complex) -> Option<Complex> {
        if exp.im == 0.0 && exp.re.fract() == 0.0 && exp.re.abs() <= MAX_EXACT_EXPONENT {
            // Integral and small, so the conversion is exact.
            #[allow(clippy::cast_possible_truncation)]
            return self.checked_powi(exp.re as i64);
        }
        if exp.is_zero() {
            return Some(Complex::ONE);
        }
        if self.is_zero() {
            return if exp.im != 0.0 || exp.re < 0.0 {
                None
            } else {
                Some(Complex::ZERO)
            };
        }

        let magnitude = self.abs();
        let angle = self.arg();
        let mut len = magnitude.powf(exp.re);
        let mut phase = angle * exp.re;
        if exp.im != 0.0 {
            len /= (angle * exp.im).exp();
            phase += exp.im * magnitude.ln();
        }
        Some(Complex::new(len * phase.cos(), len * phase.sin()))
    }

    /// Integer power by binary exponentiation.
    pub fn checked_powi(self, exp: i64) -> Option<Complex> {
        if exp == 0 {
            return Some(Complex::ONE);
        }
        if self.is_zero() && exp < 0 {
            return None;
        }

        let mut base = self;
        let mut result = Complex::ONE;
        let mut n = exp.unsigned_abs();
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }

        if exp < 0 {
            Complex::ONE.checked_div(result)
        } else {
            Some(result)
        }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Host-literal form: `3j`, `(1+2j)`, `(1.5-0j)`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im = format_float_component(self.im);
        if self.re == 0.0 && self.re.is_sign_positive() {
            return write!(f, "{im}j");
        }
        let re = format_float_component(self.re);
        if im.starts_with('-') {
            write!(f, "({re}{im}j)")
        } else {
            write!(f, "({re}+{im}j)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex, b: Complex) -> bool {
        (a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9
    }

    #[test]
    fn integral_powers_are_exact() {
        assert_eq!(
            Complex::from_real(2.0).checked_pow(Complex::from_real(10.0)),
            Some(Complex::from_real(1024.0))
        );
        assert_eq!(Complex::new(0.0, 1.0).checked_powi(2), Some(Complex::from_real(-1.0)));
        assert_eq!(Complex::from_real(2.0).checked_powi(-2), Some(Complex::from_real(0.25)));
    }

    #[test]
    fn zero_base() {
        assert_eq!(Complex::ZERO.checked_pow(Complex::ZERO), Some(Complex::ONE));
        assert_eq!(Complex::ZERO.checked_pow(Complex::from_real(-1.0)), None);
        assert_eq!(Complex::ZERO.checked_pow(Complex::from_real(0.5)), Some(Complex::ZERO));
        assert_eq!(Complex::ZERO.checked_pow(Complex::new(1.0, 1.0)), None);
    }

    #[test]
    fn fractional_power() {
        let root = Complex::from_real(-4.0).checked_pow(Complex::from_real(0.5));
        assert!(root.is_some_and(|r| close(r, Complex::new(0.0, 2.0))));
    }

    #[test]
    fn division() {
        let q = Complex::new(1.0, 2.0).checked_div(Complex::new(3.0, 4.0));
        assert!(q.is_some_and(|q| close(q, Complex::new(0.44, 0.08))));
        assert_eq!(Complex::ONE.checked_div(Complex::ZERO), None);
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(0.0, 3.0).to_string(), "3j");
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "(1+2j)");
        assert_eq!(Complex::new(1.5, -0.5).to_string(), "(1.5-0.5j)");
        assert_eq!(Complex::new(-1.0, 0.0).to_string(), "(-1+0j)");
    }
}
