use crate::{RfError, RfResult};

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> RfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, e.g. a rod radius or a segment length.
pub fn ensure_positive(v: Real, what: &'static str) -> RfResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(RfError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.0, "radius").is_err());
        assert!(ensure_positive(-1.0, "radius").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "radius"),
            Err(RfError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive(0.25, "radius").unwrap(), 0.25);
    }

    #[test]
    fn checks_chain_with_question_mark() {
        fn segment(length: Real, n: Real) -> RfResult<Real> {
            Ok(ensure_positive(length, "length")? / ensure_positive(n, "count")?)
        }
        assert_eq!(segment(2.0, 4.0), Ok(0.5));
        assert_eq!(segment(2.0, 0.0), Err(RfError::InvalidArg { what: "count" }));
    }

    proptest! {
        #[test]
        fn positive_finite_values_pass_unchanged(v in 1e-300_f64..1e300) {
            prop_assert_eq!(ensure_positive(v, "v"), Ok(v));
        }

        #[test]
        fn non_positive_values_fail(v in -1e300_f64..=0.0) {
            prop_assert_eq!(ensure_positive(v, "v"), Err(RfError::InvalidArg { what: "v" }));
        }
    }
}
