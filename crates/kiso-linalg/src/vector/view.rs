//! Named field access (`v.x`, `v.y`, ...) for small vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

macro_rules! field_view {
    ($n:literal => $view:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Vector` is a `repr(transparent)` array, `$view` is `repr(C)` with the
                // same number of `T` fields followed by a ZST.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

field_view!(2 => XY);
field_view!(3 => XYZ);
field_view!(4 => XYZW);
