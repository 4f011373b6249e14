use std::cmp::Ordering;

/// Tolerance-based comparisons between floating point values.
///
/// Direct comparison of floats is almost always wrong: the result of a
/// computation rarely matches the mathematically exact value, only some
/// machine-representable neighbor of it.  This trait declares two values
/// equal when they are within a combined relative and absolute tolerance
/// of each other, and derives every ordering relation from that single
/// notion of equality, so that for instance `a.fuzzy_le(b)` can never
/// disagree with `a.fuzzy_cmp(b)`.
///
/// The tolerance is controlled by two parameters:
///
///  |Parameter     |Default             |Role
///  |--------------|--------------------|------------------------------
///  |`eps`         |machine epsilon     |relative error, away from zero
///  |`min_positive`|smallest normal     |absolute floor, near zero
///
/// Two values X and Y are equal when
/// `|X - Y| < eps * max(min_positive, |X| + |Y|)`.  Near zero the sum
/// `|X| + |Y|` becomes meaninglessly small, and the `min_positive` floor
/// takes over as an absolute threshold.
///
/// NaN is never equal to anything, itself included.  An infinity is only
/// equal to the identical infinity: it is not "close" to any finite
/// value, nor to the infinity of the opposite sign.
pub trait FuzzyCmp: Copy {
    /// Default relative tolerance (the type's machine epsilon).
    const DEFAULT_EPS: Self;

    /// Default absolute floor (the type's smallest positive normal).
    const DEFAULT_MIN_POSITIVE: Self;

    /// Whether the two values are equal within the given tolerances.
    ///
    /// `eps` must be in `[machine epsilon, 1.0)` and `min_positive` must
    /// be at least the type's smallest positive normal value.  Widening
    /// either is allowed, narrowing is a contract violation and panics.
    fn fuzzy_eq_with(self, other: Self, eps: Self, min_positive: Self)
        -> bool;

    /// Same as [`FuzzyCmp::fuzzy_eq_with`] with the default tolerances.
    fn fuzzy_eq(self, other: Self) -> bool;

    /// Three-way comparison consistent with [`FuzzyCmp::fuzzy_eq_with`]:
    /// `Equal` whenever the values are within tolerance, the native
    /// order otherwise.
    ///
    /// NaN has no place in an ordering; passing one is a contract
    /// violation and panics.  Use the individual relations (which are
    /// total, and false on NaN) when the operands are not known to be
    /// numbers.
    fn fuzzy_cmp_with(self, other: Self, eps: Self, min_positive: Self)
        -> Ordering;

    /// Same as [`FuzzyCmp::fuzzy_cmp_with`] with the default tolerances.
    fn fuzzy_cmp(self, other: Self) -> Ordering;

    /// True if the values differ by more than the default tolerance.
    /// False when either operand is NaN.
    fn fuzzy_ne(self, other: Self) -> bool;

    /// True if self is less than other by more than the default
    /// tolerance.  False when either operand is NaN.
    fn fuzzy_lt(self, other: Self) -> bool;

    /// True if self is less than, or within the default tolerance of,
    /// other.  False when either operand is NaN.
    fn fuzzy_le(self, other: Self) -> bool;

    /// True if self is greater than other by more than the default
    /// tolerance.  False when either operand is NaN.
    fn fuzzy_gt(self, other: Self) -> bool;

    /// True if self is greater than, or within the default tolerance
    /// of, other.  False when either operand is NaN.
    fn fuzzy_ge(self, other: Self) -> bool;
}

macro_rules! impl_fuzzy_cmp {
    ($ty:ident) => {
        impl FuzzyCmp for $ty {
            const DEFAULT_EPS: $ty = $ty::EPSILON;
            const DEFAULT_MIN_POSITIVE: $ty = $ty::MIN_POSITIVE;

            fn fuzzy_eq_with(
                self,
                other: Self,
                eps: Self,
                min_positive: Self,
            ) -> bool {
                assert!(
                    $ty::EPSILON <= eps && eps < 1.0,
                    "eps must be in [machine epsilon, 1.0)"
                );
                assert!(
                    min_positive >= $ty::MIN_POSITIVE,
                    "min_positive must be at least the smallest normal"
                );
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                if self == other {
                    //  also covers two infinities of the same sign
                    return true;
                }
                if self.is_infinite() || other.is_infinite() {
                    return false;
                }
                let diff = (self - other).abs();
                //  |self| + |other| can overflow for values near MAX
                let norm = (self.abs() + other.abs()).min($ty::MAX);
                diff < eps * min_positive.max(norm)
            }

            fn fuzzy_eq(self, other: Self) -> bool {
                self.fuzzy_eq_with(
                    other,
                    Self::DEFAULT_EPS,
                    Self::DEFAULT_MIN_POSITIVE,
                )
            }

            fn fuzzy_cmp_with(
                self,
                other: Self,
                eps: Self,
                min_positive: Self,
            ) -> Ordering {
                assert!(
                    !self.is_nan() && !other.is_nan(),
                    "NaN cannot be ordered"
                );
                if self.fuzzy_eq_with(other, eps, min_positive) {
                    Ordering::Equal
                } else if self > other {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }

            fn fuzzy_cmp(self, other: Self) -> Ordering {
                self.fuzzy_cmp_with(
                    other,
                    Self::DEFAULT_EPS,
                    Self::DEFAULT_MIN_POSITIVE,
                )
            }

            fn fuzzy_ne(self, other: Self) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                !self.fuzzy_eq(other)
            }

            fn fuzzy_lt(self, other: Self) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                self.fuzzy_cmp(other) == Ordering::Less
            }

            fn fuzzy_le(self, other: Self) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                self.fuzzy_cmp(other) != Ordering::Greater
            }

            fn fuzzy_gt(self, other: Self) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                self.fuzzy_cmp(other) == Ordering::Greater
            }

            fn fuzzy_ge(self, other: Self) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                self.fuzzy_cmp(other) != Ordering::Less
            }
        }
    };
}

impl_fuzzy_cmp!(f32);
impl_fuzzy_cmp!(f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_eq_reflexive() {
        assert!(0.0_f64.fuzzy_eq(0.0));
        assert!(1.0_f64.fuzzy_eq(1.0));
        assert!((-5.5_f64).fuzzy_eq(-5.5));
        assert!(f64::MAX.fuzzy_eq(f64::MAX));
        assert!(f64::INFINITY.fuzzy_eq(f64::INFINITY));
        assert!(f64::NEG_INFINITY.fuzzy_eq(f64::NEG_INFINITY));

        assert!(1.0_f32.fuzzy_eq(1.0));
        assert!(f32::INFINITY.fuzzy_eq(f32::INFINITY));
    }

    #[test]
    fn test_eq_nan() {
        assert!(!f64::NAN.fuzzy_eq(f64::NAN));
        assert!(!f64::NAN.fuzzy_eq(1.0));
        assert!(!1.0_f64.fuzzy_eq(f64::NAN));
        assert!(!f64::NAN.fuzzy_eq(f64::INFINITY));

        //  The derived relations are total: false, not a panic
        assert!(!f64::NAN.fuzzy_ne(1.0));
        assert!(!f64::NAN.fuzzy_lt(f64::INFINITY));
        assert!(!f64::NAN.fuzzy_le(1.0));
        assert!(!f64::NAN.fuzzy_gt(1.0));
        assert!(!f64::NAN.fuzzy_ge(f64::NAN));
    }

    #[test]
    fn test_eq_infinities() {
        assert!(!f64::INFINITY.fuzzy_eq(f64::NEG_INFINITY));
        assert!(!f64::NEG_INFINITY.fuzzy_eq(f64::INFINITY));
        assert!(!f64::INFINITY.fuzzy_eq(1.0));
        assert!(!f64::INFINITY.fuzzy_eq(f64::MAX));
        assert!(!1.0_f64.fuzzy_eq(f64::NEG_INFINITY));

        assert!(f64::INFINITY.fuzzy_gt(1.0));
        assert!(f64::NEG_INFINITY.fuzzy_lt(f64::MAX));
    }

    #[test]
    fn test_eq_tolerance() {
        //  One ulp away from 1.0 is within the default tolerance
        assert!(1.0_f64.fuzzy_eq(1.0 + f64::EPSILON));
        assert!((1.0_f64 + f64::EPSILON).fuzzy_eq(1.0));
        assert!(!1.0_f64.fuzzy_eq(1.0 + 1e-9));

        //  The tolerance is relative: the same absolute difference that
        //  separates small values is noise between large ones
        assert!(!1.0_f64.fuzzy_eq(1.5));
        assert!(1.0e16_f64.fuzzy_eq(1.0e16 + 0.5));

        //  Callers may widen the tolerances, never narrow them
        assert!(!1e-12_f64.fuzzy_eq(0.0));
        assert!(1e-12_f64.fuzzy_eq_with(0.0, 1e-9, 1.0));
        assert!(!1e-3_f64.fuzzy_eq_with(0.0, 1e-9, 1.0));
    }

    #[test]
    fn test_cmp_consistency() {
        let values = [-10.0_f64, -1.0, 0.0, 1e-12, 0.5, 1.0, 1e16];
        for x in values {
            for y in values {
                assert_eq!(
                    x.fuzzy_cmp(y) == Ordering::Equal,
                    x.fuzzy_eq(y),
                    "cmp and eq disagree on {x} vs {y}"
                );
                assert_eq!(x.fuzzy_cmp(y), y.fuzzy_cmp(x).reverse());
            }
        }

        assert_eq!(1.0_f64.fuzzy_cmp(2.0), Ordering::Less);
        assert_eq!(2.0_f64.fuzzy_cmp(1.0), Ordering::Greater);
        assert_eq!(1.0_f64.fuzzy_cmp(1.0 + f64::EPSILON), Ordering::Equal);
        assert_eq!(
            f64::INFINITY.fuzzy_cmp(f64::NEG_INFINITY),
            Ordering::Greater
        );
    }

    #[test]
    fn test_relations() {
        assert!(1.0_f64.fuzzy_lt(2.0));
        assert!(!2.0_f64.fuzzy_lt(1.0));
        assert!(!1.0_f64.fuzzy_lt(1.0 + f64::EPSILON)); // equal, not less

        assert!(1.0_f64.fuzzy_le(2.0));
        assert!(1.0_f64.fuzzy_le(1.0 + f64::EPSILON));
        assert!(!2.0_f64.fuzzy_le(1.0));

        assert!(2.0_f64.fuzzy_gt(1.0));
        assert!(2.0_f64.fuzzy_ge(2.0));
        assert!(1.0_f64.fuzzy_ne(2.0));
        assert!(!1.0_f64.fuzzy_ne(1.0 + f64::EPSILON));

        assert!(0.5_f32.fuzzy_lt(1.5));
        assert!(1.5_f32.fuzzy_ge(1.5));
    }

    #[test]
    #[should_panic(expected = "eps must be")]
    fn test_eps_too_small() {
        let _ = 1.0_f64.fuzzy_eq_with(1.0, 0.0, f64::MIN_POSITIVE);
    }

    #[test]
    #[should_panic(expected = "eps must be")]
    fn test_eps_too_large() {
        let _ = 1.0_f64.fuzzy_eq_with(1.0, 1.0, f64::MIN_POSITIVE);
    }

    #[test]
    #[should_panic(expected = "min_positive must be")]
    fn test_min_positive_too_small() {
        let _ = 1.0_f64.fuzzy_eq_with(1.0, f64::EPSILON, 0.0);
    }

    #[test]
    #[should_panic(expected = "NaN cannot be ordered")]
    fn test_cmp_rejects_nan() {
        let _ = f64::NAN.fuzzy_cmp(1.0);
    }
}
