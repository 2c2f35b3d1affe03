// tests/property_tests.rs

use fraction_core::{gcd, simplify_with, Rational, RawRational, SimplifiedRational, ZeroNumerator};
use num_integer::Integer;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const BOUND: i64 = 1_000_000;

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-BOUND..=-1i64, 1..=BOUND]
}

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn construct_with_zero_denominator_fails(n in any::<i64>()) {
        prop_assert!(RawRational::new(n, 0).is_err());
        prop_assert!(SimplifiedRational::new(n, 0).is_err());
    }

    #[test]
    fn construct_with_nonzero_denominator_succeeds(n in any::<i32>(), d in any::<i32>()) {
        prop_assume!(d != 0);
        prop_assert!(RawRational::new(n, d).is_ok());
        if n != i32::MIN && d != i32::MIN {
            prop_assert!(SimplifiedRational::new(n, d).is_ok());
        }
    }

    #[test]
    fn simplified_is_in_lowest_terms(n in nonzero(), d in nonzero()) {
        let r = SimplifiedRational::new(n, d).unwrap();
        prop_assert_eq!(r.numerator().abs().gcd(&r.denominator().abs()), 1);
        prop_assert_eq!(gcd(r.numerator().abs(), r.denominator().abs()), Ok(1));
    }

    #[test]
    fn simplify_keeps_component_signs(n in nonzero(), d in nonzero()) {
        let (sn, sd) = simplify_with(n, d, ZeroNumerator::Preserve).unwrap();
        prop_assert_eq!(sn.signum(), n.signum());
        prop_assert_eq!(sd.signum(), d.signum());
        prop_assert_eq!(sn * d, n * sd);
    }

    #[test]
    fn simplify_is_idempotent(n in nonzero(), d in nonzero()) {
        for policy in [ZeroNumerator::Preserve, ZeroNumerator::Canonical] {
            let once = simplify_with(n, d, policy).unwrap();
            let twice = simplify_with(once.0, once.1, policy).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn gcd_matches_num_integer(a in 1..=BOUND, b in 0..=BOUND) {
        prop_assert_eq!(gcd(a, b), Ok(a.gcd(&b)));
    }

    #[test]
    fn gcd_rejects_out_of_domain(a in -BOUND..=0i64, b in any::<i64>(), negative in -BOUND..=-1i64) {
        prop_assert!(gcd(a, b).is_err());
        prop_assert!(gcd(1, negative).is_err());
    }

    #[test]
    fn simplified_equal_under_scaling(n in nonzero(), d in nonzero(), k in prop_oneof![-1000i64..=-1, 1..=1000i64]) {
        let base = SimplifiedRational::new(n, d).unwrap();
        let scaled = SimplifiedRational::new(n * k, d * k).unwrap();
        prop_assert_eq!(base, scaled);
        prop_assert_eq!(hash_of(&base), hash_of(&scaled));
    }

    #[test]
    fn raw_equality_is_exact(n in nonzero(), d in nonzero(), k in 2..=1000i64) {
        let base = RawRational::new(n, d).unwrap();
        prop_assert_eq!(base, RawRational::new(n, d).unwrap());
        prop_assert_ne!(base, RawRational::new(n * k, d * k).unwrap());
    }

    #[test]
    fn rendering_follows_sign_rule(n in -BOUND..=BOUND, d in nonzero()) {
        let rendered = RawRational::new(n, d).unwrap().to_string();
        let body = format!("{}/{}", n.abs(), d.abs());
        if (n > 0) == (d > 0) {
            prop_assert_eq!(rendered, body);
        } else {
            prop_assert_eq!(rendered, format!("-{}", body));
        }
    }
}
