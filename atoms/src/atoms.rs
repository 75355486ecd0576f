use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::AtomsError;
use crate::growth::GrowthStrategy;
use crate::iter::{AtomsIntoIter, AtomsIter, AtomsIterMut};

/// A growable, index-addressable sequence that permits duplicates.
///
/// The buffer is resized by a [`GrowthStrategy`]; `capacity()` reports the
/// capacity that strategy settled on.
///
/// `Atoms` is not internally synchronized. Sharing it across threads for
/// mutation needs an external lock, which the borrow checker enforces.
pub struct Atoms<T> {
    slots: Vec<T>,
    capacity: usize,
    strategy: GrowthStrategy,
}

impl<T> Atoms<T> {
    /// Creates an empty sequence with amortized growth and no allocation.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_strategy(GrowthStrategy::Amortized)
    }

    /// Creates an empty sequence using the given growth strategy.
    #[must_use]
    pub const fn with_strategy(strategy: GrowthStrategy) -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
            strategy,
        }
    }

    /// Creates an empty amortized sequence with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            strategy: GrowthStrategy::Amortized,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn strategy(&self) -> GrowthStrategy {
        self.strategy
    }

    fn set_capacity(&mut self, capacity: usize) {
        log::trace!(
            "atoms capacity {} -> {} (len {})",
            self.capacity,
            capacity,
            self.slots.len()
        );
        if capacity > self.slots.capacity() {
            self.slots.reserve_exact(capacity - self.slots.len());
        } else {
            self.slots.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    fn reserve_for(&mut self, additional: usize) {
        let required = self.slots.len().saturating_add(additional);
        let capacity = self.strategy.grow(self.capacity, required);
        if capacity != self.capacity {
            self.set_capacity(capacity);
        }
    }

    fn release(&mut self) {
        let capacity = self.strategy.shrink(self.capacity, self.slots.len());
        if capacity != self.capacity {
            self.set_capacity(capacity);
        }
    }

    fn check_index(&self, index: usize) -> Result<(), AtomsError> {
        if index >= self.slots.len() {
            return Err(AtomsError::IndexOutOfBounds {
                index,
                length: self.slots.len(),
            });
        }
        Ok(())
    }

    fn check_insert(&self, index: usize) -> Result<(), AtomsError> {
        if index > self.slots.len() {
            return Err(AtomsError::InsertOutOfBounds {
                index,
                length: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Gets the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, AtomsError> {
        self.check_index(index)?;
        Ok(&self.slots[index])
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, AtomsError> {
        self.check_index(index)?;
        Ok(&mut self.slots[index])
    }

    /// Returns the number of elements satisfying `predicate`.
    pub fn count_if<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.slots.iter().filter(|&atom| predicate(atom)).count()
    }

    /// Appends an element.
    pub fn add(&mut self, value: T) {
        self.reserve_for(1);
        self.slots.push(value);
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::InsertOutOfBounds` if `index > len()`. The
    /// sequence is left untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), AtomsError> {
        self.check_insert(index)?;
        self.reserve_for(1);
        self.slots.insert(index, value);
        Ok(())
    }

    /// Appends every element of `values`, preserving their order.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        self.reserve_for(values.size_hint().0);
        for value in values {
            self.add(value);
        }
    }

    /// Inserts every element of `values` as a block starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::InsertOutOfBounds` if `index > len()`. The bound
    /// is checked before `values` is consumed.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<(), AtomsError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert(index)?;
        let block: Vec<T> = values.into_iter().collect();
        self.reserve_for(block.len());
        self.slots.splice(index..index, block);
        Ok(())
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, AtomsError> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, AtomsError> {
        self.check_index(index)?;
        let removed = self.slots.remove(index);
        self.release();
        Ok(removed)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn remove_last(&mut self) -> Option<T> {
        let removed = self.slots.pop()?;
        self.release();
        Some(removed)
    }

    /// Removes every element satisfying `predicate` and returns how many
    /// were removed.
    ///
    /// Each element is tested exactly once, front to back, and survivors keep
    /// their relative order.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.slots.len();
        self.slots.retain(|atom| !predicate(atom));
        let removed = before - self.slots.len();
        if removed > 0 {
            self.release();
        }
        removed
    }

    /// Removes every element and resets the capacity to the strategy baseline.
    pub fn clear(&mut self) {
        self.slots.clear();
        let baseline = self.strategy.baseline();
        if baseline != self.capacity {
            self.set_capacity(baseline);
        }
    }

    /// Calls `action` on every element in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.slots.iter().for_each(action);
    }

    /// Calls `action` on every element in order, allowing it to modify them
    /// in place.
    pub fn for_each_mut<F>(&mut self, action: F)
    where
        F: FnMut(&mut T),
    {
        self.slots.iter_mut().for_each(action);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> AtomsIter<'_, T> {
        AtomsIter::new(&self.slots)
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<AtomsIter<'_, T>> {
        self.iter().rev()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> AtomsIterMut<'_, T> {
        AtomsIterMut::new(&mut self.slots)
    }
}

impl<T: PartialEq> Atoms<T> {
    /// Returns the number of elements equal to `value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.slots.iter().filter(|atom| *atom == value).count()
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.slots.contains(value)
    }

    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.slots.iter().position(|atom| atom == value)
    }

    /// Returns the position of the last element equal to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.slots.iter().rposition(|atom| atom == value)
    }

    /// Replaces the first element equal to `value`.
    ///
    /// Returns the index that was replaced, or `None` if nothing matched.
    pub fn replace_first(&mut self, value: &T, replacement: T) -> Option<usize> {
        let index = self.index_of(value)?;
        self.slots[index] = replacement;
        Some(index)
    }

    /// Replaces the last element equal to `value`.
    ///
    /// Returns the index that was replaced, or `None` if nothing matched.
    pub fn replace_last(&mut self, value: &T, replacement: T) -> Option<usize> {
        let index = self.last_index_of(value)?;
        self.slots[index] = replacement;
        Some(index)
    }

    /// Removes the first element equal to `value`. Returns whether one was
    /// found.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.slots.remove(index);
                self.release();
                true
            }
            None => false,
        }
    }

    /// Removes the last element equal to `value`. Returns whether one was
    /// found.
    pub fn remove_last_item(&mut self, value: &T) -> bool {
        match self.last_index_of(value) {
            Some(index) => {
                self.slots.remove(index);
                self.release();
                true
            }
            None => false,
        }
    }

    /// Removes every element equal to `value` and returns how many were
    /// removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.remove_if(|atom| atom == value)
    }
}

impl<T: PartialEq + Clone> Atoms<T> {
    /// Replaces every element equal to `value` with a clone of `replacement`
    /// and returns how many were replaced.
    pub fn replace_all(&mut self, value: &T, replacement: T) -> usize {
        let mut replaced = 0;
        for slot in self.slots.iter_mut().filter(|atom| **atom == *value) {
            *slot = replacement.clone();
            replaced += 1;
        }
        replaced
    }
}

impl<T: Clone> Atoms<T> {
    /// Copies `count` elements starting at `start` into a new sequence.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::InvalidRange` if the range does not lie within
    /// the sequence.
    pub fn get_range(&self, start: usize, count: usize) -> Result<Atoms<T>, AtomsError> {
        let end = start
            .checked_add(count)
            .ok_or(AtomsError::InvalidRange {
                start,
                end: usize::MAX,
                length: self.slots.len(),
            })?;
        self.sub_list(start, end)
    }

    /// Copies the elements in `from..to` into a new sequence with the same
    /// growth strategy.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::InvalidRange` if `from > to` or `to > len()`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Atoms<T>, AtomsError> {
        let selected = self.slots.get(from..to).ok_or(AtomsError::InvalidRange {
            start: from,
            end: to,
            length: self.slots.len(),
        })?;
        let mut atoms = Atoms::with_strategy(self.strategy);
        atoms.add_all(selected.iter().cloned());
        Ok(atoms)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.slots.clone()
    }
}

impl<T> Default for Atoms<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Atoms<T> {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend_from_slice(&self.slots);
        Self {
            slots,
            capacity: self.capacity,
            strategy: self.strategy,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Atoms<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.slots).finish()
    }
}

/// One element per line.
impl<T: fmt::Display> fmt::Display for Atoms<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, atom) in self.slots.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Atoms<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq> Eq for Atoms<T> {}

impl<T> From<Vec<T>> for Atoms<T> {
    fn from(slots: Vec<T>) -> Self {
        let capacity = slots.len();
        Self {
            slots,
            capacity,
            strategy: GrowthStrategy::Amortized,
        }
    }
}

impl<T: Clone> From<&[T]> for Atoms<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Atoms<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> FromIterator<T> for Atoms<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for Atoms<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> Index<usize> for Atoms<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.slots.len(),
            "Index {} out of bounds for atoms of length {}",
            index,
            self.slots.len()
        );
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for Atoms<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.slots.len(),
            "Index {} out of bounds for atoms of length {}",
            index,
            self.slots.len()
        );
        &mut self.slots[index]
    }
}

impl<'a, T> IntoIterator for &'a Atoms<T> {
    type Item = &'a T;
    type IntoIter = AtomsIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Atoms<T> {
    type Item = &'a mut T;
    type IntoIter = AtomsIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Atoms<T> {
    type Item = T;
    type IntoIter = AtomsIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AtomsIntoIter::new(self.slots)
    }
}
