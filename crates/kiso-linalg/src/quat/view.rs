use std::ops::{Deref, DerefMut};

use crate::{vector::view::XYZW, Quat};

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.vec
    }
}
