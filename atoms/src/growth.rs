/// Smallest capacity an amortized sequence shrinks to, and the capacity it
/// jumps to on its first allocation.
pub const MIN_CAPACITY: usize = 10;

/// How an `Atoms` sequence sizes its backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthStrategy {
    /// Capacity doubles when exceeded and halves when less than half used,
    /// never dropping below `MIN_CAPACITY`. Appends are amortized O(1).
    #[default]
    Amortized,
    /// Capacity always equals the length once a mutation completes. Every
    /// mutation reallocates.
    ExactFit,
}

impl GrowthStrategy {
    /// Returns the capacity needed to hold `required` elements when the
    /// buffer currently holds `capacity` slots.
    #[must_use]
    pub fn grow(self, capacity: usize, required: usize) -> usize {
        match self {
            Self::Amortized => {
                if required <= capacity {
                    capacity
                } else {
                    capacity
                        .saturating_mul(2)
                        .max(MIN_CAPACITY)
                        .max(required)
                }
            }
            Self::ExactFit => required.max(capacity),
        }
    }

    /// Returns the capacity to keep after the length dropped to `len`.
    #[must_use]
    pub fn shrink(self, capacity: usize, len: usize) -> usize {
        match self {
            Self::Amortized => {
                let mut capacity = capacity;
                while len < capacity / 2 && capacity / 2 >= MIN_CAPACITY {
                    capacity /= 2;
                }
                capacity
            }
            Self::ExactFit => len,
        }
    }

    /// Capacity of a cleared sequence.
    #[must_use]
    pub fn baseline(self) -> usize {
        match self {
            Self::Amortized => MIN_CAPACITY,
            Self::ExactFit => 0,
        }
    }
}
