use super::*;

//
// Reorder
//

impl<T: Component> Range<T> {
    /// Swaps the boundaries if `max` is smaller than `min`.
    pub fn reorder(self) -> Self {
        if self.max < self.min {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }
}

impl<T: Boundary> Range<T> {
    /// Sorts every axis independently.
    ///
    /// For vectors the resulting corners need not equal either stored corner:
    /// `(1, 5)..(3, 2)` becomes `(1, 2)..(3, 5)`.
    pub fn reorder_per_component(self) -> Self {
        Self::new(
            T::from_axes(|index| self.axis_bounds(index).0),
            T::from_axes(|index| self.axis_bounds(index).1),
        )
    }

    #[inline]
    fn axis_bounds(&self, index: usize) -> (T::Component, T::Component) {
        ordered(self.min.axis(index), self.max.axis(index))
    }

    #[inline]
    fn real_bounds(&self) -> (T::Real, T::Real) {
        (self.min.to_real(), self.max.to_real())
    }

    //
    // Random
    //

    /// Draws every axis uniformly from its closed interval, regardless of the
    /// stored order. Integer axes include both boundaries.
    pub fn random<S: UniformSource + ?Sized>(self, source: &mut S) -> T {
        T::from_axes(|index| {
            let (lo, hi) = self.axis_bounds(index);
            <T::Component as Component>::uniform(&mut *source, lo, hi)
        })
    }

    //
    // Interpolation
    //

    /// Interpolates from the stored `min` to the stored `max`. `t` is clamped to `0..=1`.
    pub fn lerp(self, t: f32) -> T::Real {
        let (min, max) = self.real_bounds();
        T::Real::from_axes(|index| lerp_scalar(min.axis(index), max.axis(index), t))
    }

    /// Per axis ratio of `value` between the stored `min` and `max`, in `0..=1`.
    ///
    /// Follows the stored order, so on a descending axis the ratio grows from
    /// `max` towards `min`. Degenerate axes yield 0.
    pub fn inverse_lerp(self, value: T) -> T::Real {
        self.inverse_lerp_real(value.to_real())
    }

    /// Same as [`Range::inverse_lerp`] with a fractional probe.
    pub fn inverse_lerp_real(self, value: T::Real) -> T::Real {
        let (min, max) = self.real_bounds();
        T::Real::from_axes(|index| {
            inverse_lerp_scalar(min.axis(index), max.axis(index), value.axis(index))
        })
    }

    pub fn smooth_step(self, t: f32) -> T::Real {
        let (min, max) = self.real_bounds();
        T::Real::from_axes(|index| smooth_step_scalar(min.axis(index), max.axis(index), t))
    }

    pub fn center(self) -> T::Real {
        self.lerp(0.5)
    }

    //
    // Measures
    //

    /// `max - min` as stored. Negative on descending axes.
    ///
    /// Integer overflow for boundaries further apart than `i32::MAX` is not handled.
    pub fn delta(self) -> T {
        T::from_axes(|index| self.max.axis(index) - self.min.axis(index))
    }

    pub fn size(self) -> T {
        let delta = self.delta();
        T::from_axes(|index| num::abs(delta.axis(index)))
    }

    pub fn spread(self) -> T {
        self.size()
    }

    //
    // Clamp
    //

    pub fn clamp(self, value: T) -> T {
        T::from_axes(|index| {
            clamp_ordered(
                value.axis(index),
                self.min.axis(index),
                self.max.axis(index),
            )
        })
    }

    pub fn clamp_real(self, value: T::Real) -> T::Real {
        let (min, max) = self.real_bounds();
        T::Real::from_axes(|index| {
            clamp_ordered(value.axis(index), min.axis(index), max.axis(index))
        })
    }

    //
    // Contains
    //

    /// Whether every axis of `value` lies in the closed interval between the boundaries.
    pub fn contains(self, value: T) -> bool {
        (0..T::AXES).all(|index| {
            contains_ordered(
                value.axis(index),
                self.min.axis(index),
                self.max.axis(index),
            )
        })
    }

    pub fn contains_real(self, value: T::Real) -> bool {
        let (min, max) = self.real_bounds();
        (0..T::AXES).all(|index| {
            contains_ordered(value.axis(index), min.axis(index), max.axis(index))
        })
    }
}

//
// Tests
//
