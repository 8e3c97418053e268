use core::fmt;

use crate::array::DynArray;
use crate::error::{Error, Result};

/// A first-in-first-out adapter over [`DynArray`].
///
/// Elements are appended at the rear and removed from the front. Because
/// the backing storage is one contiguous buffer, a dequeue is the array's
/// front removal: every remaining element shifts one slot left, making
/// [`dequeue`](Queue::dequeue) O(n). That cost is the accepted price of
/// reusing the array's `remove` instead of keeping a ring layout.
///
/// The adapter's own state is index bookkeeping only: `front_index` (always
/// 0 for this layout) and `rear_index` with `-1` as the empty sentinel,
/// which is what [`is_empty`](Queue::is_empty) consults.
///
/// # Examples
///
/// ```
/// use lineal::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(10);
/// queue.enqueue(20);
/// queue.enqueue(30);
///
/// assert_eq!(queue.dequeue(), Ok(10));
/// assert_eq!(queue.dequeue(), Ok(20));
/// assert_eq!(queue.front(), Ok(&30));
/// assert_eq!(queue.rear(), Ok(&30));
/// ```
pub struct Queue<T> {
    items: DynArray<T>,
    /// Index of the front element. Stays 0 in this contiguous layout; kept
    /// as explicit bookkeeping so the delegation below reads literally.
    front_index: usize,
    /// Index of the rear element; -1 when the queue is empty.
    rear_index: isize,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue`.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: DynArray::new(),
            front_index: 0,
            rear_index: -1,
        }
    }

    /// Appends an element at the rear of the queue.
    ///
    /// # Time complexity
    /// Amortized O(1).
    pub fn enqueue(&mut self, value: T) {
        self.items.push(value);
        self.rear_index = self.items.len() as isize - 1;
    }

    /// Removes the front element and returns it.
    ///
    /// # Errors
    /// [`Error::Empty`] if the queue is empty.
    ///
    /// # Time complexity
    /// O(n): removing the front of a contiguous buffer shifts every
    /// remaining element left.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::{Error, Queue};
    /// let mut queue: Queue<i32> = Queue::new();
    /// assert_eq!(queue.dequeue(), Err(Error::Empty));
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let value = self.items.remove(self.front_index)?;
        self.rear_index = self.items.len() as isize - 1;
        Ok(value)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    /// [`Error::Empty`] if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.items.get(self.front_index)
    }

    /// Returns a reference to the rear element without removing it.
    ///
    /// # Errors
    /// [`Error::Empty`] if the queue is empty.
    pub fn rear(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.items.get(self.rear_index as usize)
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no elements.
    ///
    /// Answered from the cached rear-index sentinel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rear_index == -1
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("items", &self.items)
            .field("front_index", &self.front_index)
            .field("rear_index", &self.rear_index)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    /// Human-readable listing, front element first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[size: {}]:", self.len())?;
        for item in self.items.iter() {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        for value in [1, 2, 3, 4] {
            queue.enqueue(value);
        }
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
        assert_eq!(queue.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn front_and_rear_after_partial_drain() {
        let mut queue = Queue::new();
        queue.enqueue(10);
        queue.enqueue(20);
        queue.enqueue(30);

        assert_eq!(queue.dequeue(), Ok(10));
        assert_eq!(queue.dequeue(), Ok(20));
        assert_eq!(queue.front(), Ok(&30));
        assert_eq!(queue.rear(), Ok(&30));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_sentinel_tracks_enqueues_and_dequeues() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.front(), Err(Error::Empty));
        assert_eq!(queue.rear(), Err(Error::Empty));

        queue.enqueue(1);
        assert!(!queue.is_empty());

        queue.dequeue().unwrap();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3);
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.rear(), Ok(&4));
        assert_eq!(queue.dequeue(), Ok(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn display_prints_front_first() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(format!("{queue}"), "[size: 3]: 1 2 3");
    }
}
