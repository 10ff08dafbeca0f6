use core::mem;

use crate::{BinaryHeap, Comparator, HeapError};

/// Number of slots a heap reserves at construction unless configured otherwise.
pub const DEFAULT_INITIAL_CAPACITY: usize = 20;

/// Multiplier applied to the capacity of a full heap unless configured otherwise.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// How a full heap obtains more slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    /// A full heap rejects further pushes.
    Disabled,
    /// A full heap multiplies its capacity by the given factor, which must be at least 2.
    Factor(usize),
}

impl Default for Growth {
    fn default() -> Self {
        Growth::Factor(DEFAULT_GROWTH_FACTOR)
    }
}

/// Construction-time knobs of a [`BinaryHeap`].
///
/// ```
/// use prioheap::{Growth, HeapConfig};
///
/// let config = HeapConfig::default().with_initial_capacity(4).with_growth(Growth::Disabled);
/// assert_eq!(config.initial_capacity(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    initial_capacity: usize,
    growth: Growth,
    max_capacity: Option<usize>,
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth: Growth::default(),
            max_capacity: None,
        }
    }
}

impl HeapConfig {
    /// Sets the number of slots reserved at construction.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth policy.
    #[must_use]
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Caps the number of slots the heap may ever hold.
    ///
    /// The cap can only lower the limit implied by the element size; it never
    /// raises it.
    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Number of slots reserved at construction.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// The growth policy.
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// The configured cap, if any.
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// The largest slot count a heap of `T` may reach: the configured cap or the
    /// largest count whose storage fits in `isize::MAX` bytes, whichever is smaller.
    pub(crate) fn effective_max_capacity<T>(&self) -> usize {
        let addressable = match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        };
        self.max_capacity.map_or(addressable, |cap| cap.min(addressable))
    }

    pub(crate) fn validate<T>(&self) -> Result<(), HeapError> {
        if let Growth::Factor(factor) = self.growth {
            if factor < 2 {
                return Err(HeapError::invalid_argument("growth factor must be at least 2"));
            }
        }
        if self.initial_capacity > self.effective_max_capacity::<T>() {
            return Err(HeapError::invalid_argument(
                "initial capacity exceeds the maximum capacity",
            ));
        }
        Ok(())
    }
}

/// Assembles a [`BinaryHeap`] from an optional comparator and a [`HeapConfig`].
///
/// Building without a comparator is an error rather than a heap with some
/// implied order.
///
/// ```
/// use prioheap::{Builder, HeapErrorKind};
///
/// let missing = Builder::<fn(&i32, &i32) -> core::cmp::Ordering>::new().build::<i32>();
/// assert!(matches!(missing.unwrap_err().kind(), HeapErrorKind::InvalidArgument(_)));
///
/// let mut heap = Builder::new()
///     .comparator(|a: &i32, b: &i32| b.cmp(a))
///     .initial_capacity(2)
///     .build::<i32>()
///     .unwrap();
/// heap.push(1).unwrap();
/// heap.push(3).unwrap();
/// assert_eq!(heap.peek(), Some(&3));
/// ```
#[derive(Clone, Debug)]
pub struct Builder<C> {
    comparator: Option<C>,
    config: HeapConfig,
}

impl<C> Default for Builder<C> {
    fn default() -> Self {
        Builder { comparator: None, config: HeapConfig::default() }
    }
}

impl<C> Builder<C> {
    /// A builder with no comparator and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comparator.
    #[must_use]
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Sets the comparator from an optional value, replacing any set before.
    #[must_use]
    pub fn maybe_comparator(mut self, comparator: Option<C>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replaces the whole config.
    #[must_use]
    pub fn config(mut self, config: HeapConfig) -> Self {
        self.config = config;
        self
    }

    /// See [`HeapConfig::with_initial_capacity`].
    #[must_use]
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.config = self.config.with_initial_capacity(initial_capacity);
        self
    }

    /// See [`HeapConfig::with_growth`].
    #[must_use]
    pub fn growth(mut self, growth: Growth) -> Self {
        self.config = self.config.with_growth(growth);
        self
    }

    /// See [`HeapConfig::with_max_capacity`].
    #[must_use]
    pub fn max_capacity(mut self, max_capacity: usize) -> Self {
        self.config = self.config.with_max_capacity(max_capacity);
        self
    }

    /// Builds the heap.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if no comparator was given or the config is
    /// inconsistent, [`ResourceExhaustion`] if the initial storage could not be
    /// reserved.
    ///
    /// [`InvalidArgument`]: crate::HeapErrorKind::InvalidArgument
    /// [`ResourceExhaustion`]: crate::HeapErrorKind::ResourceExhaustion
    pub fn build<T>(self) -> Result<BinaryHeap<T, C>, HeapError>
    where
        C: Comparator<T>,
    {
        let comparator = self
            .comparator
            .ok_or_else(|| HeapError::invalid_argument("a comparator is required"))?;
        BinaryHeap::with_config(comparator, self.config)
    }
}
