use bit_vec::BitVec;
use core::mem::MaybeUninit;

/// `VecOption` is a collection that is semantically similar to `Vec<Option<T>>` but which
/// uses a different memory representation.
///
/// The items live in one fixed-length allocation of `MaybeUninit<T>`, and a bitmap records
/// which slots are present. Compared to `Vec<Option<T>>`:
///
/// * the bitmap costs one bit per slot, rather than a discriminant (plus alignment padding)
///   for those `T` which cannot rely on a niche for `Option<T>`.
///
/// * "absent" is never encoded as a special value of `T`, so every value of `T` can be
///   stored, including `T::default()`.
///
/// The length is fixed when the `VecOption` is created.
pub struct VecOption<T> {
    /// Slot `i` is initialized if and only if `present[i]` is set. All reads go through
    /// `present` first.
    slots: Vec<MaybeUninit<T>>,
    present: BitVec,
}

impl<T> VecOption<T> {
    /// Creates a `VecOption` with `len` slots, all of them absent.
    pub fn new_repeat_none(len: usize) -> Self {
        let mut slots: Vec<MaybeUninit<T>> = Vec::with_capacity(len);
        slots.resize_with(len, MaybeUninit::uninit);
        Self {
            slots,
            present: BitVec::from_elem(len, false),
        }
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    /// Returns true if `index` is in bounds and the slot holds a value.
    pub fn is_some(&self, index: usize) -> bool {
        self.present.get(index).unwrap_or(false)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if self.is_some(index) {
            Some(unsafe { &*self.slots[index].as_ptr() })
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.is_some(index) {
            Some(unsafe { &mut *self.slots[index].as_mut_ptr() })
        } else {
            None
        }
    }

    /// Moves the value out of slot `index`, leaving it absent.
    pub fn take(&mut self, index: usize) -> Option<T> {
        if self.is_some(index) {
            self.present.set(index, false);
            Some(unsafe { core::ptr::read(self.slots[index].as_ptr()) })
        } else {
            None
        }
    }

    /// Stores `value` in slot `index` and returns the previous value, if any.
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_some(&mut self, index: usize, value: T) -> Option<T> {
        assert!(index < self.len(), "VecOption index {} out of bounds", index);
        let old_value = self.take(index);
        self.slots[index] = MaybeUninit::new(value);
        self.present.set(index, true);
        old_value
    }

    pub fn set_none(&mut self, index: usize) -> Option<T> {
        self.take(index)
    }

    /// Drops every present value. The length is unchanged.
    pub fn clear(&mut self) {
        for i in 0..self.len() {
            drop(self.take(i));
        }
    }

    pub fn iter_present(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|&(_, is_present)| is_present)
            .map(move |(i, _)| (i, unsafe { &*self.slots[i].as_ptr() }))
    }
}

impl<T: Clone> Clone for VecOption<T> {
    fn clone(&self) -> Self {
        let mut clone = Self::new_repeat_none(self.len());
        for (i, value) in self.iter_present() {
            clone.set_some(i, value.clone());
        }
        clone
    }
}

impl<T> Drop for VecOption<T> {
    fn drop(&mut self) {
        if core::mem::needs_drop::<T>() {
            self.clear();
        }
    }
}
