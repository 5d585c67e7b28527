#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use num_traits::Zero;
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector representation using 32-bit floating point coordinates.
///
/// [`Vec2`] is a plain value type: it is [`Copy`], owns no resources, and every operation
/// except the compound-assignment operators and the explicit setters returns a new value.
///
/// # Examples
///
/// ```
/// use lmath::core::prelude::*;
///
/// let v1 = Vec2::new(3.0, 4.0);
/// let v2 = Vec2::splat(1.0);
///
/// assert_eq!(v1 + v2, Vec2::new(4.0, 5.0));
/// assert_eq!(v1.length(), 5.0);
/// ```
///
/// # Equality
/// `==` compares the components exactly, with no tolerance. Use [`Vec2::is_equal`] or
/// [`Vec2::is_zero_vector`] with an explicit epsilon (usually
/// [`EPSILON`](crate::core::config::EPSILON)) for approximate comparisons.
///
/// # Preconditions
/// Component-wise division by a vector with a zero component, and normalising the zero vector,
/// are not checked: the result is whatever IEEE arithmetic produces. [`Vec2::checked_div`] and
/// [`Vec2::try_normalized`] are the guarded alternatives.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Computes the dot product of two vectors.
///
/// ```
/// use lmath::core::prelude::*;
/// assert_eq!(dot(Vec2::new(5.0, 7.0), Vec2::new(3.0, 9.0)), 78.0);
/// ```
#[must_use]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub const fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    #[must_use]
    pub const fn zero() -> Vec2 {
        Vec2::splat(0.0)
    }
    #[must_use]
    pub const fn one() -> Vec2 {
        Vec2::splat(1.0)
    }

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    /// Chainable form of `+=`.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let mut v = Vec2::new(1.0, 2.0);
    /// v.add_in_place(Vec2::splat(1.0)).mul_in_place(Vec2::splat(2.0));
    /// assert_eq!(v, Vec2::new(4.0, 6.0));
    /// ```
    pub fn add_in_place(&mut self, rhs: Vec2) -> &mut Self {
        *self += rhs;
        self
    }
    /// Chainable form of `-=`.
    pub fn sub_in_place(&mut self, rhs: Vec2) -> &mut Self {
        *self -= rhs;
        self
    }
    /// Chainable form of `*=`.
    pub fn mul_in_place(&mut self, rhs: Vec2) -> &mut Self {
        *self *= rhs;
        self
    }
    /// Chainable form of `/=`. Same precondition as [`Div`]: no zero components in `rhs`.
    pub fn div_in_place(&mut self, rhs: Vec2) -> &mut Self {
        *self /= rhs;
        self
    }

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors, i.e. the signed area of the parallelogram
    /// they span.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let v1 = Vec2::new(2.0, 0.0);
    /// assert_eq!(v1.cross(Vec2::new(0.0, 3.0)), 6.0);
    /// assert_eq!(v1.cross(Vec2::new(0.0, -3.0)), -6.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the length of the vector.
    ///
    /// If you only need to compare vector lengths, consider using [`Vec2::sqr_length`] to avoid
    /// the square root.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.sqr_length().sqrt()
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn sqr_length(&self) -> f32 {
        self.dot(*self)
    }

    /// Sum of the components.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.x + self.y
    }

    /// Mean of the components.
    #[must_use]
    pub fn avg(&self) -> f32 {
        self.sum() / 2.0
    }

    /// Population standard deviation of the components, treated as a two-element sample.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let v = Vec2::new(3.0, 5.0);
    /// assert_eq!(v.sum(), 8.0);
    /// assert_eq!(v.avg(), 4.0);
    /// assert_eq!(v.std_dev(), 1.0);
    /// ```
    #[must_use]
    pub fn std_dev(&self) -> f32 {
        let deviation = *self - Vec2::splat(self.avg());
        (deviation * deviation).avg().sqrt()
    }

    /// Returns the vector divided by its length.
    ///
    /// The zero vector has no direction: normalising it divides by zero and yields NaN
    /// components. Use [`Vec2::try_normalized`] when the input may be zero.
    #[must_use]
    pub fn get_normalized(&self) -> Vec2 {
        *self / self.length()
    }

    /// Normalises the vector in place. Same precondition as [`Vec2::get_normalized`].
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.get_normalized();
        self
    }

    /// Like [`Vec2::get_normalized`], but fails instead of producing non-finite components.
    ///
    /// # Errors
    /// If the length of the vector is zero or not finite.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// assert_eq!(Vec2::new(0.0, 2.0).try_normalized().unwrap(), Vec2::new(0.0, 1.0));
    /// assert!(Vec2::zero().try_normalized().is_err());
    /// ```
    pub fn try_normalized(&self) -> Result<Vec2> {
        let len = self.length();
        if len.is_zero() || !len.is_finite() {
            bail!("cannot normalise {self}: length is {len}");
        }
        Ok(*self / len)
    }

    /// Component-wise division that fails instead of dividing by zero.
    ///
    /// # Errors
    /// If either component of `rhs` is zero.
    pub fn checked_div(&self, rhs: Vec2) -> Result<Vec2> {
        if rhs.x.is_zero() || rhs.y.is_zero() {
            bail!("cannot divide {self} by {rhs}: zero component");
        }
        Ok(*self / rhs)
    }

    /// Returns the component-wise minimum of two vectors.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let v = Vec2::new(3.0, 5.0);
    /// assert_eq!(v.get_min_vector(Vec2::new(2.0, 6.0)), Vec2::new(2.0, 5.0));
    /// assert_eq!(v.get_max_vector(Vec2::new(2.0, 6.0)), Vec2::new(3.0, 6.0));
    /// ```
    #[must_use]
    pub fn get_min_vector(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Returns the component-wise maximum of two vectors.
    #[must_use]
    pub fn get_max_vector(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Returns a vector perpendicular to this one: the original rotated a quarter turn
    /// counter-clockwise, `(-y, x)`.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let v = Vec2::new(10.0, -5.0);
    /// assert_eq!(v.get_orthogonal_vector(), Vec2::new(5.0, 10.0));
    /// assert_eq!(dot(v, v.get_orthogonal_vector()), 0.0);
    /// ```
    #[must_use]
    pub fn get_orthogonal_vector(&self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// True if the magnitude of both components is at most `eps`.
    ///
    /// Pass [`EPSILON`](crate::core::config::EPSILON) for the default tolerance.
    pub fn is_zero_vector(&self, eps: f32) -> bool {
        gg_float::is_within(self.x, eps) && gg_float::is_within(self.y, eps)
    }

    /// True if each component differs from `other` by at most `eps`.
    pub fn is_equal(&self, other: Vec2, eps: f32) -> bool {
        (*self - other).is_zero_vector(eps)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Clamps each component into `[0, 1]`.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// assert_eq!(Vec2::new(-128.0, 128.0).saturate(), Vec2::new(0.0, 1.0));
    /// ```
    #[must_use]
    pub fn saturate(&self) -> Vec2 {
        Vec2 {
            x: gg_float::saturate(self.x),
            y: gg_float::saturate(self.y),
        }
    }

    /// Clamps each component into the range given by the matching components of `min` and
    /// `max`.
    ///
    /// # Panics
    /// If `min.x > max.x` or `min.y > max.y`, as [`f32::clamp`] does.
    #[must_use]
    pub fn clamp(&self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Swizzle: returns the vector with its components swapped.
    ///
    /// ```
    /// use lmath::core::prelude::*;
    /// let v = Vec2::new(1.0, 2.0);
    /// assert_eq!(v.yx(), Vec2::new(2.0, 1.0));
    /// assert_eq!(v.yx().yx(), v);
    /// ```
    #[must_use]
    pub fn yx(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: self.x,
        }
    }

    /// Linearly interpolates between this vector and `to`. `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: gg_float::lerp(self.x, to.x, t),
            y: gg_float::lerp(self.y, to.y, t),
        }
    }

    /// Computes the Euclidean distance between two points.
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (other - *self).length()
    }

    #[must_use]
    pub fn sqr_dist(&self, other: Vec2) -> f32 {
        (other - *self).sqr_length()
    }

    /// Compares two vectors based on their squared length.
    ///
    /// If either length is NaN, [`partial_cmp()`](f32::partial_cmp) fails; this falls back to
    /// [`total_cmp()`](f32::total_cmp) and logs a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.sqr_length();
        let other_len = other.sqr_length();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero_vector(EPSILON)
    }
}

impl From<f32> for Vec2 {
    fn from(value: f32) -> Self {
        Vec2::splat(value)
    }
}
impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2 { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds: Vec2 has 2 components but the index is {index}"),
        }
    }
}
impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds: Vec2 has 2 components but the index is {index}"),
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}
impl MulAssign<Vec2> for Vec2 {
    fn mul_assign(&mut self, rhs: Vec2) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}
impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<Vec2> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}
impl DivAssign<Vec2> for Vec2 {
    fn div_assign(&mut self, rhs: Vec2) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}
impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
