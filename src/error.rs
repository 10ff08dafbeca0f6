use alloc::collections::TryReserveError;
use cfg_if::cfg_if;
use core::fmt::{self, Debug, Display};

/// The error type for fallible heap construction and insertion.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HeapError {
    kind: HeapErrorKind,
}

/// Details of what caused a [`HeapError`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HeapErrorKind {
    /// A construction argument was missing or inconsistent.
    InvalidArgument(&'static str),

    /// The memory allocator could not provide the requested storage.
    ResourceExhaustion(TryReserveError),

    /// The element count or capacity would exceed the heap's maximum, or the
    /// heap is full and not allowed to grow.
    CapacityOverflow,
}

impl HeapError {
    /// Details about what caused the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &HeapErrorKind {
        &self.kind
    }

    pub(crate) fn invalid_argument(reason: &'static str) -> Self {
        HeapErrorKind::InvalidArgument(reason).into()
    }

    pub(crate) fn capacity_overflow() -> Self {
        HeapErrorKind::CapacityOverflow.into()
    }
}

impl From<HeapErrorKind> for HeapError {
    #[inline]
    fn from(kind: HeapErrorKind) -> Self {
        Self { kind }
    }
}

impl From<TryReserveError> for HeapError {
    #[inline]
    fn from(err: TryReserveError) -> Self {
        HeapErrorKind::ResourceExhaustion(err).into()
    }
}

impl Display for HeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            HeapErrorKind::InvalidArgument(reason) => write!(fmt, "invalid argument: {reason}"),
            HeapErrorKind::ResourceExhaustion(err) => write!(fmt, "heap storage unavailable: {err}"),
            HeapErrorKind::CapacityOverflow => {
                fmt.write_str("heap capacity would exceed the configured maximum")
            }
        }
    }
}

/// A push that failed, returning the rejected element to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    element: T,
    error: HeapError,
}

impl<T> PushError<T> {
    pub(crate) fn new(element: T, error: HeapError) -> Self {
        PushError { element, error }
    }

    /// Details about what caused the failure.
    #[must_use]
    pub fn kind(&self) -> &HeapErrorKind {
        self.error.kind()
    }

    /// The underlying error.
    #[must_use]
    pub fn error(&self) -> &HeapError {
        &self.error
    }

    /// Takes back the element that could not be pushed.
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Splits into the rejected element and the error.
    pub fn into_parts(self) -> (T, HeapError) {
        (self.element, self.error)
    }
}

// The element is left out so that `T` need not be `Debug`.
impl<T> Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError").field("error", &self.error).finish_non_exhaustive()
    }
}

impl<T> Display for PushError<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "push rejected: {}", self.error)
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        use std::error::Error;
    } else if #[cfg(feature = "error_in_core")] {
        use core::error::Error;
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl Error for HeapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            HeapErrorKind::ResourceExhaustion(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl<T> Error for PushError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
