use super::*;

//
// Component
//

/// A single axis of a range boundary.
pub trait Component: na::Scalar + Copy + PartialOrd + num::Signed + fmt::Display {
    fn as_f32(self) -> f32;

    /// Draws from the closed interval `lo..=hi`. Callers guarantee `lo <= hi`.
    fn uniform<S: UniformSource + ?Sized>(source: &mut S, lo: Self, hi: Self) -> Self;
}

impl Component for i32 {
    #[inline]
    fn as_f32(self) -> f32 {
        self as f32
    }

    fn uniform<S: UniformSource + ?Sized>(source: &mut S, lo: Self, hi: Self) -> Self {
        source.uniform_i32(lo, hi)
    }
}

impl Component for f32 {
    #[inline]
    fn as_f32(self) -> f32 {
        self
    }

    fn uniform<S: UniformSource + ?Sized>(source: &mut S, lo: Self, hi: Self) -> Self {
        source.uniform_f32(lo, hi)
    }
}

//
// Boundary
//

/// The shape of a range boundary: a bare [`Component`] or a vector of them.
///
/// Range operations are written once against this trait and visit every axis
/// independently. `Real` is the floating counterpart of the shape, used for
/// interpolation results and fractional probes.
pub trait Boundary: Copy + PartialEq + fmt::Debug {
    type Component: Component;
    type Real: Boundary<Component = f32>;

    const AXES: usize;

    fn axis(&self, index: usize) -> Self::Component;

    fn from_axes<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Component;

    fn zero() -> Self {
        Self::from_axes(|_| num::zero())
    }

    fn to_real(&self) -> Self::Real {
        Self::Real::from_axes(|index| self.axis(index).as_f32())
    }
}

macro_rules! impl_scalar_boundary {
    ($($ty:ident),*) => {
        $(
            impl Boundary for $ty {
                type Component = $ty;
                type Real = f32;

                const AXES: usize = 1;

                #[inline]
                fn axis(&self, _index: usize) -> Self::Component {
                    *self
                }

                #[inline]
                fn from_axes<F>(mut f: F) -> Self
                where
                    F: FnMut(usize) -> Self::Component,
                {
                    f(0)
                }
            }
        )*
    };
}

impl_scalar_boundary!(i32, f32);

impl<T, const D: usize> Boundary for na::SVector<T, D>
where
    T: Component,
{
    type Component = T;
    type Real = na::SVector<f32, D>;

    const AXES: usize = D;

    #[inline]
    fn axis(&self, index: usize) -> Self::Component {
        self[index]
    }

    #[inline]
    fn from_axes<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> Self::Component,
    {
        Self::from_fn(|row, _| f(row))
    }
}

//
// Tests
//
