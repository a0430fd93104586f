//! Property-based tests for the group law on the demonstration curve

use monecc_algorithms::{CurveGroup, Point};
use monecc_pke::derive_shared;
use monecc_tests::all_points;
use proptest::prelude::*;

/// Any point of the curve, identity included
fn any_point() -> impl Strategy<Value = Point> {
    prop::sample::select(all_points(&CurveGroup::demo()))
}

proptest! {
    #[test]
    fn identity_is_neutral(p in any_point()) {
        let g = CurveGroup::demo();
        prop_assert_eq!(g.add(&p, &Point::Infinity).unwrap(), p);
        prop_assert_eq!(g.add(&Point::Infinity, &p).unwrap(), p);
    }

    #[test]
    fn every_point_has_an_inverse(p in any_point()) {
        let g = CurveGroup::demo();
        if let Point::Affine { x, y } = p {
            let modulus = g.params().p;
            let neg = Point::new(x, (modulus - y) % modulus);
            prop_assert!(g.contains(&neg));
            prop_assert_eq!(g.add(&p, &neg).unwrap(), Point::Infinity);
        }
    }

    #[test]
    fn addition_commutes(p in any_point(), q in any_point()) {
        let g = CurveGroup::demo();
        prop_assert_eq!(g.add(&p, &q).unwrap(), g.add(&q, &p).unwrap());
    }

    #[test]
    fn addition_associates(p in any_point(), q in any_point(), r in any_point()) {
        let g = CurveGroup::demo();
        let left = g.add(&g.add(&p, &q).unwrap(), &r).unwrap();
        let right = g.add(&p, &g.add(&q, &r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn results_stay_on_curve(p in any_point(), q in any_point(), k in any::<u64>()) {
        let g = CurveGroup::demo();
        prop_assert!(g.contains(&g.add(&p, &q).unwrap()));
        prop_assert!(g.contains(&g.double(&p).unwrap()));
        prop_assert!(g.contains(&g.scalar_mul(&p, k).unwrap()));
    }

    #[test]
    fn scalar_mul_matches_repeated_addition(p in any_point(), k in 0u64..64) {
        let g = CurveGroup::demo();
        let mut acc = Point::Infinity;
        for _ in 0..k {
            acc = g.add(&acc, &p).unwrap();
        }
        prop_assert_eq!(g.scalar_mul(&p, k).unwrap(), acc);
    }

    #[test]
    fn scalar_mul_distributes(p in any_point(), a in 0u64..1000, b in 0u64..1000) {
        let g = CurveGroup::demo();
        let sum = g.add(&g.scalar_mul(&p, a).unwrap(), &g.scalar_mul(&p, b).unwrap()).unwrap();
        prop_assert_eq!(g.scalar_mul(&p, a + b).unwrap(), sum);
    }

    #[test]
    fn key_agreement_is_symmetric(k in 1u64..=1000, r in 1u64..=1000) {
        let g = CurveGroup::demo();
        let q = g.mul_generator(k).unwrap();
        let big_r = g.mul_generator(r).unwrap();
        prop_assert_eq!(
            derive_shared(&g, r, &q).unwrap(),
            derive_shared(&g, k, &big_r).unwrap()
        );
    }
}

#[test]
fn doubling_the_generator() {
    let g = CurveGroup::demo();
    let gen = g.generator();
    let doubled = g.mul_generator(2).unwrap();
    assert_eq!(doubled, g.add(&gen, &gen).unwrap());
    assert!(g.contains(&doubled));
    let big = g.mul_generator(1000).unwrap();
    assert!(g.contains(&big));
}

#[test]
fn generator_cycles_after_its_order() {
    let g = CurveGroup::demo();
    let order = g.generator_order().unwrap();
    assert_eq!(order, 4);

    let mut acc = g.generator();
    for step in 1..order {
        assert!(!acc.is_identity(), "{}·G is the identity", step);
        acc = g.add(&acc, &g.generator()).unwrap();
    }
    assert!(acc.is_identity());
    assert_eq!(g.mul_generator(order + 1).unwrap(), g.generator());
}

#[test]
fn point_orders_divide_group_order() {
    let g = CurveGroup::demo();
    let points = all_points(&g);
    assert_eq!(points.len(), 112);
    for p in &points {
        assert_eq!(g.scalar_mul(p, 112).unwrap(), Point::Infinity, "{}", p);
    }
}
