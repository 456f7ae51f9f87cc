use std::ops::{Add, Div, Mul};

/// One classic fourth-order Runge-Kutta step of size `h` from `(t, x)`.
///
/// `xdot` is evaluated four times at intermediate states and must be free of
/// side effects. Nothing is retained between calls.
pub fn rk4_step<S, F>(t: f64, x: &S, xdot: F, h: f64) -> S
where
    S: Clone + Add<Output = S> + Mul<f64, Output = S> + Div<f64, Output = S>,
    F: Fn(f64, &S) -> S,
{
    let k1 = xdot(t, x) * h;
    let k2 = xdot(t + h / 2.0, &(x.clone() + k1.clone() / 2.0)) * h;
    let k3 = xdot(t + h / 2.0, &(x.clone() + k2.clone() / 2.0)) * h;
    let k4 = xdot(t + h, &(x.clone() + k3.clone())) * h;

    x.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0
}
