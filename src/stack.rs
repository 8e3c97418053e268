use core::fmt;

use crate::array::DynArray;
use crate::error::{Error, Result};

/// A last-in-first-out adapter over [`DynArray`].
///
/// Every operation delegates to the internally owned array; the only state
/// the adapter adds is a cached `top_index` with `-1` as the empty sentinel.
/// [`is_empty`](Stack::is_empty) consults that sentinel rather than asking
/// the array.
///
/// # Examples
///
/// ```
/// use lineal::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.top(), Ok(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    items: DynArray<T>,
    /// Index of the top element; -1 when the stack is empty.
    top_index: isize,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: DynArray::new(),
            top_index: -1,
        }
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Time complexity
    /// Amortized O(1).
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.top_index = self.items.len() as isize - 1;
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    /// [`Error::Empty`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::{Error, Stack};
    /// let mut stack: Stack<i32> = Stack::new();
    /// assert_eq!(stack.pop(), Err(Error::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let value = self.items.pop()?;
        self.top_index = self.items.len() as isize - 1;
        Ok(value)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    /// [`Error::Empty`] if the stack is empty.
    pub fn top(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.items.get(self.top_index as usize)
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    ///
    /// Answered from the cached top-index sentinel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top_index == -1
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("top_index", &self.top_index)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    /// Human-readable listing, top element first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[size: {}]:", self.len())?;
        for item in self.items.iter().rev() {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
