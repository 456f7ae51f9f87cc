use num::complex::Complex64;
use num::Zero;

use crate::constants::{
    ROOT_IMAGINARY_TOLERANCE, ROOT_SOLVER_MAX_ITERATIONS, ROOT_SOLVER_TOLERANCE,
};
use crate::errors::GuidanceError;
use crate::utils::vector3d::Vector3D;

/// Coefficients, highest power first, of the energy-optimal time-to-go quartic
/// `g²/2·t⁴ − 2(v·v)·t² − 12(v·r)·t − 18(r·r) = 0`.
pub fn time_to_go_coefficients(rg: &Vector3D, vg: &Vector3D, gravity: f64) -> [f64; 5] {
    [
        gravity * gravity / 2.0,
        0.0,
        -2.0 * vg.dot(vg),
        -12.0 * vg.dot(rg),
        -18.0 * rg.dot(rg),
    ]
}

/// Time-to-go for relative position `rg`, relative velocity `vg` and gravity
/// magnitude `gravity`.
///
/// Among the roots of [`time_to_go_coefficients`] that are real (imaginary part
/// below 1e-4) and strictly positive, the smallest is returned.
pub fn time_to_go(rg: &Vector3D, vg: &Vector3D, gravity: f64) -> Result<f64, GuidanceError> {
    let coefficients = time_to_go_coefficients(rg, vg, gravity);
    let t_go = polynomial_roots(&coefficients)
        .into_iter()
        .filter(|root| root.im.abs() < ROOT_IMAGINARY_TOLERANCE && root.re > 0.0)
        .map(|root| root.re)
        .min_by(f64::total_cmp)
        .ok_or_else(|| GuidanceError::NoValidTimeToGoRoot {
            r_dot_r: rg.dot(rg),
            v_dot_v: vg.dot(vg),
            v_dot_r: vg.dot(rg),
            gravity,
        })?;
    Ok(t_go.max(0.0))
}

/// Evaluates the polynomial (highest power first) at `t` with Horner's rule.
pub fn evaluate_polynomial(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * t + c)
}

/// All complex roots of a real polynomial given highest power first.
///
/// Leading zeros lower the degree and trailing zeros contribute roots at the
/// origin. Degrees one and two are solved in closed form, higher degrees by
/// Durand-Kerner iteration from fixed starting points, so the output only
/// depends on the input. Roots are sorted by real then imaginary part.
pub fn polynomial_roots(coefficients: &[f64]) -> Vec<Complex64> {
    let first = match coefficients.iter().position(|c| *c != 0.0) {
        Some(index) => index,
        None => return Vec::new(),
    };
    let last = coefficients
        .iter()
        .rposition(|c| *c != 0.0)
        .unwrap_or(first);
    let trimmed = &coefficients[first..=last];
    let zero_roots = coefficients.len() - 1 - last;

    let mut roots = match trimmed.len() - 1 {
        0 => Vec::new(),
        1 => vec![Complex64::new(-trimmed[1] / trimmed[0], 0.0)],
        2 => quadratic_roots(trimmed[0], trimmed[1], trimmed[2]),
        _ => durand_kerner(trimmed),
    };
    roots.extend(std::iter::repeat(Complex64::zero()).take(zero_roots));
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    roots
}

fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<Complex64> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant >= 0.0 {
        // c != 0 here, so q != 0 for the cancellation-free form.
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        vec![Complex64::new(q / a, 0.0), Complex64::new(c / q, 0.0)]
    } else {
        let re = -b / (2.0 * a);
        let im = (-discriminant).sqrt() / (2.0 * a);
        vec![Complex64::new(re, im), Complex64::new(re, -im)]
    }
}

fn durand_kerner(coefficients: &[f64]) -> Vec<Complex64> {
    let degree = coefficients.len() - 1;
    let monic: Vec<f64> = coefficients.iter().map(|c| c / coefficients[0]).collect();

    // Fujiwara bound on root magnitude seeds the starting circle.
    let radius = monic
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| {
            let c = if k == degree { c / 2.0 } else { *c };
            c.abs().powf(1.0 / k as f64)
        })
        .fold(0.0, f64::max)
        * 2.0;
    let radius = if radius > 0.0 { radius } else { 1.0 };

    let mut roots: Vec<Complex64> = (0..degree)
        .map(|k| {
            let angle = 2.0 * std::f64::consts::PI * k as f64 / degree as f64 + 0.4;
            Complex64::from_polar(radius, angle)
        })
        .collect();

    for _ in 0..ROOT_SOLVER_MAX_ITERATIONS {
        let mut max_step: f64 = 0.0;
        for i in 0..degree {
            let zi = roots[i];
            let numerator = monic
                .iter()
                .fold(Complex64::zero(), |acc, c| acc * zi + Complex64::new(*c, 0.0));
            let denominator = roots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(Complex64::new(1.0, 0.0), |acc, (_, zj)| acc * (zi - zj));
            if denominator.is_zero() {
                continue;
            }
            let step = numerator / denominator;
            roots[i] = zi - step;
            max_step = max_step.max(step.norm() / (1.0 + roots[i].norm()));
        }
        if max_step <= ROOT_SOLVER_TOLERANCE {
            break;
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn relative_residual(coefficients: &[f64], t: f64) -> f64 {
        let scale: f64 = coefficients
            .iter()
            .rev()
            .enumerate()
            .map(|(k, c)| c.abs() * t.powi(k as i32))
            .sum();
        evaluate_polynomial(coefficients, t).abs() / scale
    }

    #[test]
    fn test_straight_line_without_gravity() {
        let r = Vector3D::new(100.0, 0.0, 0.0);
        let v = Vector3D::new(-10.0, 0.0, 0.0);
        let t_go = time_to_go(&r, &v, 0.0).unwrap();
        assert!(t_go >= 0.0);
        assert_relative_eq!(t_go, 30.0, epsilon = 1e-9);
        let coefficients = time_to_go_coefficients(&r, &v, 0.0);
        assert_relative_eq!(evaluate_polynomial(&coefficients, t_go), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quartic_root_satisfies_polynomial() {
        let r = Vector3D::new(1500.0, -200.0, 2000.0);
        let v = Vector3D::new(-40.0, 5.0, -70.0);
        let t_go = time_to_go(&r, &v, 3.7114).unwrap();
        assert!(t_go > 0.0);
        let coefficients = time_to_go_coefficients(&r, &v, 3.7114);
        assert!(relative_residual(&coefficients, t_go) < 1e-10);
    }

    #[test]
    fn test_randomized_states_have_a_root() {
        let mut rng = StdRng::seed_from_u64(18290);
        for _ in 0..200 {
            let r = Vector3D::new(
                rng.gen_range(-2000.0..2000.0),
                rng.gen_range(-2000.0..2000.0),
                rng.gen_range(1.0..3000.0),
            );
            let v = Vector3D::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..10.0),
            );
            let gravity = rng.gen_range(1.0..10.0);
            let t_go = time_to_go(&r, &v, gravity).unwrap();
            assert!(t_go > 0.0);
            let coefficients = time_to_go_coefficients(&r, &v, gravity);
            assert!(relative_residual(&coefficients, t_go) < 1e-9);
        }
    }

    #[test]
    fn test_receding_without_gravity_has_no_root() {
        let r = Vector3D::new(100.0, 0.0, 0.0);
        let v = Vector3D::new(10.0, 0.0, 0.0);
        match time_to_go(&r, &v, 0.0) {
            Err(GuidanceError::NoValidTimeToGoRoot {
                r_dot_r, v_dot_r, ..
            }) => {
                assert_eq!(r_dot_r, 10_000.0);
                assert_eq!(v_dot_r, 1000.0);
            }
            other => panic!("expected NoValidTimeToGoRoot, got {:?}", other),
        }
    }

    #[test]
    fn test_at_rest_on_target_has_no_root() {
        assert!(matches!(
            time_to_go(&Vector3D::zeros(), &Vector3D::zeros(), 4.0),
            Err(GuidanceError::NoValidTimeToGoRoot { .. })
        ));
    }

    #[test]
    fn test_on_target_with_velocity() {
        // 8 t⁴ - 2·25 t² = 0 → t = 2.5
        let t_go = time_to_go(&Vector3D::zeros(), &Vector3D::new(0.0, 3.0, -4.0), 4.0).unwrap();
        assert_relative_eq!(t_go, 2.5, epsilon = 1e-9);
    }

    fn positive_real_roots(coefficients: &[f64]) -> Vec<f64> {
        polynomial_roots(coefficients)
            .into_iter()
            .filter(|root| root.im.abs() < ROOT_IMAGINARY_TOLERANCE && root.re > 0.0)
            .map(|root| root.re)
            .collect()
    }

    #[test]
    fn test_smallest_of_three_positive_roots_is_chosen() {
        // 0.005 t⁴ - 200 t² + 12000 t - 180000 has roots -100 ± 40√10 and 100 ± 20√10.
        let r = Vector3D::new(100.0, 0.0, 0.0);
        let v = Vector3D::new(-10.0, 0.0, 0.0);
        let positive = positive_real_roots(&time_to_go_coefficients(&r, &v, 0.1));
        let root_10 = 10.0_f64.sqrt();
        let expected = [40.0 * root_10 - 100.0, 100.0 - 20.0 * root_10, 100.0 + 20.0 * root_10];
        assert_eq!(positive.len(), 3);
        for (found, expected) in positive.iter().zip(expected) {
            assert_relative_eq!(*found, expected, epsilon = 1e-8);
        }
        assert_relative_eq!(time_to_go(&r, &v, 0.1).unwrap(), expected[0], epsilon = 1e-8);
    }

    #[test]
    fn test_fast_vertical_approach_has_three_positive_roots() {
        let r = Vector3D::new(0.0, 0.0, 1500.0);
        let v = Vector3D::new(0.0, 0.0, -250.0);
        let coefficients = time_to_go_coefficients(&r, &v, 3.7114);
        let positive = positive_real_roots(&coefficients);
        assert_eq!(positive.len(), 3);

        let t_go = time_to_go(&r, &v, 3.7114).unwrap();
        assert_eq!(t_go, positive[0]);
        assert!(positive[1] - t_go > 5.0);
        assert_relative_eq!(t_go, 16.080575856693418, epsilon = 1e-6);
        assert!(relative_residual(&coefficients, t_go) < 1e-10);
    }

    #[test]
    fn test_quartic_roots_are_sorted() {
        // (t - 1)(t - 2)(t - 3)(t + 4) = t⁴ - 2t³ - 13t² + 38t - 24
        let roots = polynomial_roots(&[1.0, -2.0, -13.0, 38.0, -24.0]);
        let reals: Vec<f64> = roots.iter().map(|r| r.re).collect();
        assert_eq!(reals.len(), 4);
        for (found, expected) in reals.iter().zip([-4.0, 1.0, 2.0, 3.0]) {
            assert_relative_eq!(*found, expected, epsilon = 1e-9);
        }
        for root in &roots {
            assert!(root.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_polynomial_roots_degree_reduction() {
        assert!(polynomial_roots(&[0.0, 0.0, 0.0]).is_empty());
        let linear = polynomial_roots(&[0.0, 0.0, 0.0, 2.0, -4.0]);
        assert_eq!(linear, vec![Complex64::new(2.0, 0.0)]);
        let with_origin = polynomial_roots(&[1.0, 0.0, -1.0, 0.0]);
        assert_eq!(with_origin.len(), 3);
        assert_relative_eq!(with_origin[0].re, -1.0, epsilon = 1e-12);
        assert_eq!(with_origin[1], Complex64::zero());
        assert_relative_eq!(with_origin[2].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_pair() {
        let roots = polynomial_roots(&[1.0, 0.0, 4.0]);
        assert_eq!(roots, vec![Complex64::new(0.0, -2.0), Complex64::new(0.0, 2.0)]);
    }

    #[test]
    fn test_deterministic() {
        let r = Vector3D::new(-750.0, 320.0, 1800.0);
        let v = Vector3D::new(20.0, -8.0, -60.0);
        let first = time_to_go(&r, &v, 4.0).unwrap();
        let second = time_to_go(&r, &v, 4.0).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
