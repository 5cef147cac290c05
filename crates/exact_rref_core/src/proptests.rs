//! Property-based tests for rationals, gcd / lcm and the solver.

use proptest::prelude::*;

use crate::integer::{gcd, lcm};
use crate::{Matrix, Rational, Solution, Solver};

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn rational() -> impl Strategy<Value = Rational> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn non_zero_rational() -> impl Strategy<Value = Rational> {
    (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

/// Small integer systems `A x = b` built from a known `x`, so they are
/// always consistent
fn consistent_system() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, unknowns)| {
        (
            prop::collection::vec(prop::collection::vec(-5i64..=5, unknowns), rows),
            prop::collection::vec(-5i64..=5, unknowns),
        )
    })
}

proptest! {
    #[test]
    fn gcd_symmetric(a in small_int(), b in small_int()) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn lcm_times_gcd(a in small_int(), b in small_int()) {
        let product = lcm(a, b).unwrap() * gcd(a, b).unwrap();
        prop_assert_eq!(product, (a * b).abs());
    }

    #[test]
    fn divide_then_multiply_round_trips(a in rational(), b in non_zero_rational()) {
        let back = a.checked_div(b).unwrap().checked_mul(b).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn add_then_subtract_round_trips(a in rational(), b in rational()) {
        let back = a.checked_add(b).unwrap().checked_sub(b).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn simplification_idempotent(n in small_int(), d in non_zero_int()) {
        let once = Rational::new(n, d).unwrap();
        let twice = Rational::new(once.numerator(), once.denominator()).unwrap();
        prop_assert_eq!(once, twice);
        prop_assert!(once.denominator() > 0);
        prop_assert_eq!(gcd(once.numerator(), once.denominator()).unwrap(), 1);
    }

    #[test]
    fn sign_carried_by_numerator(n in non_zero_int(), d in non_zero_int()) {
        let q = Rational::new(n, d).unwrap();
        prop_assert!(q.denominator() > 0);
        prop_assert_eq!(q.numerator() < 0, (n < 0) != (d < 0));
        prop_assert_eq!(Rational::new(-n, -d).unwrap(), q);
    }

    #[test]
    fn solved_system_satisfies_equations((a, x) in consistent_system()) {
        let rows: Vec<Vec<Rational>> = a
            .iter()
            .map(|coefficients| {
                let b: i64 = coefficients.iter().zip(&x).map(|(c, v)| c * v).sum();
                coefficients
                    .iter()
                    .chain(std::iter::once(&b))
                    .map(|&v| Rational::from_int(v))
                    .collect()
            })
            .collect();
        let original = Matrix::from_rows(rows).unwrap();

        let mut reduced = original.clone();
        prop_assert!(Solver::default().solve(&mut reduced).unwrap());

        // Free unknowns read as zero; the particular solution must still fit
        let solution = Solution::from_reduced(&reduced).unwrap();
        let values: Vec<Rational> = solution
            .values()
            .iter()
            .map(|v| v.unwrap_or(Rational::ZERO))
            .collect();

        for row in original.iter_rows() {
            let (rhs, coefficients) = row.split_last().unwrap();
            let mut sum = Rational::ZERO;
            for (c, v) in coefficients.iter().zip(&values) {
                sum = sum.checked_add(c.checked_mul(*v).unwrap()).unwrap();
            }
            prop_assert_eq!(sum, *rhs);
        }
    }

    #[test]
    fn integer_adapter_preserves_solution((a, x) in consistent_system()) {
        let rows: Vec<Vec<i64>> = a
            .iter()
            .map(|coefficients| {
                let b: i64 = coefficients.iter().zip(&x).map(|(c, v)| c * v).sum();
                let mut row = coefficients.clone();
                row.push(b);
                row
            })
            .collect();

        let mut fractions = Matrix::<Rational>::from_integers(&Matrix::from_rows(rows.clone()).unwrap());
        let mut integers = Matrix::from_rows(rows).unwrap();
        let solver = Solver::default();
        prop_assert!(solver.solve(&mut fractions).unwrap());
        prop_assert!(solver.solve_integer(&mut integers).unwrap());

        // Every scaled row is a positive multiple of the reduced row
        for (q_row, z_row) in fractions.iter_rows().zip(integers.iter_rows()) {
            let Some(pivot) = q_row.iter().position(|c| !c.is_zero()) else {
                prop_assert!(z_row.iter().all(|&v| v == 0));
                continue;
            };
            let scale = Rational::from_int(z_row[pivot]);
            prop_assert!(z_row[pivot] > 0);
            for (q, &z) in q_row.iter().zip(z_row) {
                prop_assert_eq!(q.checked_mul(scale).unwrap(), Rational::from_int(z));
            }
        }
    }
}
