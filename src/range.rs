use super::*;

//
// Range
//

/// Two boundaries of the same shape.
///
/// Nothing is normalized on construction: `min` may exceed `max` on any axis.
/// Interpolation follows the stored order while clamping, containment and
/// sampling use the numerically smaller boundary as the lower bound. The
/// fields are public so hosts can read, edit and persist them by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

pub type IntRange = Range<i32>;
pub type FloatRange = Range<f32>;
pub type Vec2iRange = Range<Vec2i>;
pub type Vec2fRange = Range<Vec2f>;
pub type Vec3iRange = Range<Vec3i>;
pub type Vec3fRange = Range<Vec3f>;

impl<T> Range<T> {
    #[inline]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Boundary> Default for Range<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> From<(T, T)> for Range<T> {
    fn from((min, max): (T, T)) -> Self {
        Self::new(min, max)
    }
}

impl<T> From<RangeInclusive<T>> for Range<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

impl<T: Boundary> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("min=")?;
        fmt::Display::fmt(&Axes(self.min), f)?;
        f.write_str(", max=")?;
        fmt::Display::fmt(&Axes(self.max), f)
    }
}

/// Displays a single boundary value: a bare number, or `(x, y[, z])` for vectors.
#[derive(Clone, Copy, Debug)]
pub struct Axes<T>(pub T);

impl<T: Boundary> fmt::Display for Axes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if T::AXES == 1 {
            return write_component(f, self.0.axis(0));
        }
        f.write_str("(")?;
        for index in 0..T::AXES {
            if index > 0 {
                f.write_str(", ")?;
            }
            write_component(f, self.0.axis(index))?;
        }
        f.write_str(")")
    }
}

fn write_component<C: Component>(f: &mut fmt::Formatter<'_>, value: C) -> fmt::Result {
    if let Some(precision) = f.precision() {
        write!(f, "{value:.precision$}")
    } else {
        write!(f, "{value}")
    }
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_boundaries_verbatim() {
        let range = IntRange::new(168, 12);
        assert_eq!(range.min, 168);
        assert_eq!(range.max, 12);

        let mut range = range;
        range.min = -1;
        assert_eq!(range, Range::new(-1, 12));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(IntRange::default(), Range::new(0, 0));
        assert_eq!(FloatRange::default(), Range::new(0.0, 0.0));
        assert_eq!(
            Vec2iRange::default(),
            Range::new(Vec2i::zeros(), Vec2i::zeros())
        );
        assert_eq!(
            Vec3fRange::default(),
            Range::new(Vec3f::zeros(), Vec3f::zeros())
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(IntRange::from(1..=5), Range::new(1, 5));
        assert_eq!(IntRange::from(5..=1), Range::new(5, 1));
        assert_eq!(FloatRange::from((0.5, -0.5)), Range::new(0.5, -0.5));
    }

    #[test]
    fn display() {
        assert_eq!(IntRange::new(12, 168).to_string(), "min=12, max=168");
        assert_eq!(
            format!("{:.2}", Range::new(0.5_f32, -1.0)),
            "min=0.50, max=-1.00"
        );
        let range: Vec2iRange = Range::new(vector![10, -100], vector![100, 100]);
        assert_eq!(range.to_string(), "min=(10, -100), max=(100, 100)");
        let range: Vec3fRange = Range::new(vector![0.0, 1.5, -2.0], vector![1.0, 1.0, 1.0]);
        assert_eq!(format!("{range:.1}"), "min=(0.0, 1.5, -2.0), max=(1.0, 1.0, 1.0)");
        assert_eq!(format!("{:.3}", Axes(range.center())), "(0.500, 1.250, -0.500)");
        assert_eq!(Axes(-7_i32).to_string(), "-7");
    }
}
