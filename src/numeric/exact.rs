// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, ToPrimitive, Zero};
use rug::Rational;

use crate::error::ParseExactError;

/// Arbitrary-precision rational backed by GMP.
///
/// Every coordinate, squared distance and width in the crate is an `Exact`,
/// so comparisons never round.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exact(pub Rational);

impl Exact {
    pub fn from_num_den(num: i64, den: i64) -> Self {
        Exact(Rational::from((num, den)))
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    #[inline]
    pub fn square(&self) -> Exact {
        self * self
    }
}

impl<'a, 'b> Add<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn add(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result += &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Sub<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn sub(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result -= &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Mul<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn mul(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result *= &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Div<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn div(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result /= &rhs.0;
        Exact(result)
    }
}

impl Add for Exact {
    type Output = Exact;
    fn add(mut self, rhs: Exact) -> Exact {
        self.0 += rhs.0;
        self
    }
}

impl Sub for Exact {
    type Output = Exact;
    fn sub(mut self, rhs: Exact) -> Exact {
        self.0 -= rhs.0;
        self
    }
}

impl Mul for Exact {
    type Output = Exact;
    fn mul(mut self, rhs: Exact) -> Exact {
        self.0 *= rhs.0;
        self
    }
}

impl Div for Exact {
    type Output = Exact;
    fn div(mut self, rhs: Exact) -> Exact {
        self.0 /= rhs.0;
        self
    }
}

impl Neg for Exact {
    type Output = Exact;
    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl<'a> Neg for &'a Exact {
    type Output = Exact;
    fn neg(self) -> Exact {
        Exact(-self.0.clone())
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for Exact {
    fn one() -> Self {
        Exact(Rational::from(1))
    }
}

impl ToPrimitive for Exact {
    fn to_i64(&self) -> Option<i64> {
        if *self.0.denom() == 1 {
            self.0.numer().to_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if *self.0.denom() == 1 {
            self.0.numer().to_u64()
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for Exact {
    fn from(value: i32) -> Self {
        Exact(Rational::from(value))
    }
}

impl From<i64> for Exact {
    fn from(value: i64) -> Self {
        Exact(Rational::from(value))
    }
}

impl From<Rational> for Exact {
    fn from(value: Rational) -> Self {
        Exact(value)
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Accepts integers (`-12`), fractions (`3/4`) and plain decimals (`1.25`).
impl FromStr for Exact {
    type Err = ParseExactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseExactError(s.to_string());

        let text = match s.split_once('.') {
            None => s.to_string(),
            Some((int_part, frac_part)) => {
                // no exponents, no fraction bar mixed with a decimal point
                if !frac_part.bytes().all(|b| b.is_ascii_digit())
                    || int_part.contains('/')
                    || (int_part.trim_start_matches(['-', '+']).is_empty() && frac_part.is_empty())
                {
                    return Err(invalid());
                }
                let digits = if int_part.trim_start_matches(['-', '+']).is_empty() {
                    format!("{int_part}0{frac_part}")
                } else {
                    format!("{int_part}{frac_part}")
                };
                format!("{digits}/1{}", "0".repeat(frac_part.len()))
            }
        };

        let parsed = Rational::parse(&text).map_err(|_| invalid())?;
        Ok(Exact(Rational::from(parsed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_fractions_and_decimals() {
        assert_eq!("42".parse::<Exact>().unwrap(), Exact::from(42));
        assert_eq!("-7".parse::<Exact>().unwrap(), Exact::from(-7));
        assert_eq!("3/4".parse::<Exact>().unwrap(), Exact::from_num_den(3, 4));
        assert_eq!("1.25".parse::<Exact>().unwrap(), Exact::from_num_den(5, 4));
        assert_eq!("-.5".parse::<Exact>().unwrap(), Exact::from_num_den(-1, 2));
        assert_eq!("2.".parse::<Exact>().unwrap(), Exact::from(2));
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<Exact>().is_err());
        assert!("1e5".parse::<Exact>().is_err());
        assert!("1.2.3".parse::<Exact>().is_err());
        assert!(".".parse::<Exact>().is_err());
        assert!("".parse::<Exact>().is_err());
    }

    #[test]
    fn sign_helpers_and_square() {
        let a = Exact::from_num_den(-3, 2);
        assert!(a.is_negative());
        assert!(!a.is_positive());
        assert!(Exact::zero().is_zero());
        assert_eq!(a.square(), Exact::from_num_den(9, 4));
        assert_eq!(a.to_i64(), None);
        assert_eq!(Exact::from(9).to_i64(), Some(9));
    }

    #[test]
    fn by_value_and_by_ref_agree() {
        let a = Exact::from_num_den(1, 3);
        let b = Exact::from_num_den(1, 6);
        assert_eq!(&a + &b, a.clone() + b.clone());
        assert_eq!(&a - &b, Exact::from_num_den(1, 6));
        assert_eq!(&a * &b, Exact::from_num_den(1, 18));
        assert_eq!(&a / &b, Exact::from(2));
        assert_eq!(-&a, Exact::from_num_den(-1, 3));
    }
}
