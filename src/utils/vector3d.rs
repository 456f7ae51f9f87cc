use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    pub fn zeros() -> Self {
        Vector3D::new(0.0, 0.0, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Norm of the x/y components (down-range and cross-range).
    pub fn horizontal_magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        Vector3D::new(self * vector.x, self * vector.y, self * vector.z)
    }
}

impl Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Vector3D::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

/// Formats `v` after `prefix`, one `precision`-digit field per component.
pub fn format_vector(prefix: &str, v: &Vector3D, precision: usize) -> String {
    let fields: String = v
        .to_array()
        .iter()
        .map(|c| format!("{:>12.precision$}", c, precision = precision))
        .collect();
    format!("{}{}", prefix, fields)
}
