use crate::atoms::Atoms;
use crate::error::AtomsError;
use crate::growth::GrowthStrategy;

/// Chainable front end over a single [`Atoms`].
///
/// Mutating methods return `&mut Self` so calls can be chained. Methods that
/// can fail on a bad index return `Result<&mut Self, AtomsError>`, so chains
/// continue with `?`. Reads return plain values and end the chain.
///
/// ```
/// # use atoms::AtomsBuilder;
/// # fn main() -> Result<(), atoms::AtomsError> {
/// let mut builder = AtomsBuilder::new();
/// builder
///     .add("b")
///     .add("c")
///     .insert(0, "a")?
///     .replace_last(&"c", "z");
/// assert_eq!(builder.build().as_slice(), &["a", "b", "z"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomsBuilder<T> {
    atoms: Atoms<T>,
}

impl<T> AtomsBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atoms: Atoms::new(),
        }
    }

    #[must_use]
    pub const fn with_strategy(strategy: GrowthStrategy) -> Self {
        Self {
            atoms: Atoms::with_strategy(strategy),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            atoms: Atoms::with_capacity(capacity),
        }
    }

    /// Finishes the chain and returns the built sequence.
    #[must_use]
    pub fn build(self) -> Atoms<T> {
        self.atoms
    }

    #[must_use]
    pub fn as_atoms(&self) -> &Atoms<T> {
        &self.atoms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, AtomsError> {
        self.atoms.get(index)
    }

    pub fn count_if<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.atoms.count_if(predicate)
    }

    pub fn add(&mut self, value: T) -> &mut Self {
        self.atoms.add(value);
        self
    }

    /// # Errors
    ///
    /// Returns `AtomsError::InsertOutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut Self, AtomsError> {
        self.atoms.insert(index, value)?;
        Ok(self)
    }

    pub fn add_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.atoms.add_all(values);
        self
    }

    /// # Errors
    ///
    /// Returns `AtomsError::InsertOutOfBounds` if `index > len()`.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<&mut Self, AtomsError>
    where
        I: IntoIterator<Item = T>,
    {
        self.atoms.insert_all(index, values)?;
        Ok(self)
    }

    /// Replaces the element at `index`, dropping the previous one.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self, AtomsError> {
        self.atoms.set(index, value)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `AtomsError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<&mut Self, AtomsError> {
        self.atoms.remove(index)?;
        Ok(self)
    }

    pub fn remove_last(&mut self) -> &mut Self {
        self.atoms.remove_last();
        self
    }

    pub fn remove_if<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&T) -> bool,
    {
        self.atoms.remove_if(predicate);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.atoms.clear();
        self
    }

    pub fn for_each<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut(&T),
    {
        self.atoms.for_each(action);
        self
    }

    pub fn for_each_mut<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut(&mut T),
    {
        self.atoms.for_each_mut(action);
        self
    }
}

impl<T: PartialEq> AtomsBuilder<T> {
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.atoms.count(value)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.atoms.contains(value)
    }

    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.atoms.index_of(value)
    }

    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.atoms.last_index_of(value)
    }

    /// Replaces the first element equal to `value`; a no-op if none matches.
    pub fn replace_first(&mut self, value: &T, replacement: T) -> &mut Self {
        self.atoms.replace_first(value, replacement);
        self
    }

    /// Replaces the last element equal to `value`; a no-op if none matches.
    pub fn replace_last(&mut self, value: &T, replacement: T) -> &mut Self {
        self.atoms.replace_last(value, replacement);
        self
    }

    pub fn remove_item(&mut self, value: &T) -> &mut Self {
        self.atoms.remove_item(value);
        self
    }

    pub fn remove_last_item(&mut self, value: &T) -> &mut Self {
        self.atoms.remove_last_item(value);
        self
    }

    pub fn remove_all(&mut self, value: &T) -> &mut Self {
        self.atoms.remove_all(value);
        self
    }
}

impl<T: PartialEq + Clone> AtomsBuilder<T> {
    pub fn replace_all(&mut self, value: &T, replacement: T) -> &mut Self {
        self.atoms.replace_all(value, replacement);
        self
    }
}

impl<T: Clone> AtomsBuilder<T> {
    /// Copies `count` elements starting at `start` into a new builder.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::InvalidRange` if the range does not lie within
    /// the sequence.
    pub fn get_range(&self, start: usize, count: usize) -> Result<AtomsBuilder<T>, AtomsError> {
        self.atoms.get_range(start, count).map(Self::from)
    }

    /// Copies the elements in `from..to` into a new builder.
    ///
    /// # Errors
    ///
    /// Returns `AtomsError::InvalidRange` if `from > to` or `to > len()`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<AtomsBuilder<T>, AtomsError> {
        self.atoms.sub_list(from, to).map(Self::from)
    }
}

impl<T> Default for AtomsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Atoms<T>> for AtomsBuilder<T> {
    fn from(atoms: Atoms<T>) -> Self {
        Self { atoms }
    }
}

impl<T> From<AtomsBuilder<T>> for Atoms<T> {
    fn from(builder: AtomsBuilder<T>) -> Self {
        builder.atoms
    }
}
