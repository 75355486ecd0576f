use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

use crate::atoms::Atoms;

/// Iterator over elements in an `Atoms`
///
/// This iterator implements `Clone`, so an iteration can be restarted from
/// any point.
pub struct AtomsIter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> AtomsIter<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self {
            inner: slots.iter(),
        }
    }
}

impl<T> Clone for AtomsIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for AtomsIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for AtomsIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for AtomsIter<'_, T> {}

/// Mutable iterator over elements in an `Atoms`
pub struct AtomsIterMut<'a, T> {
    inner: core::slice::IterMut<'a, T>,
}

impl<'a, T> AtomsIterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [T]) -> Self {
        Self {
            inner: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for AtomsIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for AtomsIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for AtomsIterMut<'_, T> {}

/// Owning iterator over elements of an `Atoms`
pub struct AtomsIntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> AtomsIntoIter<T> {
    pub(crate) fn new(slots: Vec<T>) -> Self {
        Self {
            inner: slots.into_iter(),
        }
    }
}

impl<T> Iterator for AtomsIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for AtomsIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for AtomsIntoIter<T> {}

/// Renders each element of an `Atoms<Option<T>>` as a line of text.
///
/// Absent elements render as the placeholder given to [`Atoms::lines`].
/// This iterator implements `Clone`.
pub struct AtomsLines<'a, T> {
    iter: AtomsIter<'a, Option<T>>,
    placeholder: &'a str,
}

impl<T> Clone for AtomsLines<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            placeholder: self.placeholder,
        }
    }
}

impl<T: Display> Iterator for AtomsLines<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let atom = self.iter.next()?;
        Some(match atom {
            Some(value) => value.to_string(),
            None => String::from(self.placeholder),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: Display> ExactSizeIterator for AtomsLines<'_, T> {}

impl<T: Display> Atoms<Option<T>> {
    /// Returns a lazy rendering of every element, one `String` per element,
    /// with `placeholder` standing in for absent ones.
    ///
    /// ```
    /// # use atoms::Atoms;
    /// let atoms = Atoms::from(vec![Some(1), None, Some(3)]);
    /// let lines: Vec<String> = atoms.lines("-").collect();
    /// assert_eq!(lines, ["1", "-", "3"]);
    /// ```
    #[must_use]
    pub fn lines<'a>(&'a self, placeholder: &'a str) -> AtomsLines<'a, T> {
        AtomsLines {
            iter: self.iter(),
            placeholder,
        }
    }
}
