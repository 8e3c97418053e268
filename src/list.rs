use alloc::boxed::Box;
use core::{fmt, iter::FusedIterator, mem, ptr};

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list built from an owned chain of heap nodes.
///
/// Each node exclusively owns its successor, so the `head` box transitively
/// owns the whole chain. A raw, non-owning `tail` cursor points at the
/// terminal node purely to make appends O(1); it never outlives the node it
/// points to because the chain is only mutated through `&mut self`.
///
/// Positional operations (`get`, `insert_at`, `remove_at`, ...) walk the
/// chain from the head, costing O(index). There are no back-pointers, which
/// is why [`pop_back`](LinkedList::pop_back) is O(n): the second-to-last
/// node has to be found by walking.
///
/// Fallible operations return [`Error`](crate::Error) and check their
/// preconditions before relinking anything, so a failed call never leaves
/// the chain half-spliced.
///
/// # Examples
///
/// ```
/// use lineal::LinkedList;
///
/// let mut list: LinkedList<i32> = LinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0), Ok(&0));
///
/// list.reverse();
/// let values: Vec<_> = list.iter().copied().collect();
/// assert_eq!(values, [2, 1, 0]);
/// ```
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    /// Non-owning cursor to the terminal node. Null iff the list is empty.
    tail: *mut Node<T>,
    count: usize,
}

unsafe impl<T> Send for LinkedList<T> where T: Send {}
unsafe impl<T> Sync for LinkedList<T> where T: Sync {}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList`.
    ///
    /// No allocation happens until the first insertion.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            count: 0,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the list contains no nodes.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts an element at the front of the list.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.get(0), Ok(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let was_empty = self.head.is_none();
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        if was_empty {
            // The first node is also the terminal one.
            if let Some(node) = self.head.as_deref_mut() {
                self.tail = node as *mut Node<T>;
            }
        }
        self.count += 1;
    }

    /// Appends an element at the back of the list.
    ///
    /// Delegates to [`push_front`](LinkedList::push_front) when the list is
    /// empty; otherwise the cached tail cursor makes this O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.get(1), Ok(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.head.is_none() {
            self.push_front(value);
            return;
        }
        let node = Box::new(Node { value, next: None });
        // SAFETY: the list is non-empty, so `tail` points at the live
        // terminal node of the chain this `&mut self` exclusively owns.
        unsafe {
            let tail = &mut *self.tail;
            tail.next = Some(node);
            if let Some(next) = tail.next.as_deref_mut() {
                self.tail = next as *mut Node<T>;
            }
        }
        self.count += 1;
    }

    /// Inserts an element at position `index`, splicing a new node between
    /// the predecessor and its former successor.
    ///
    /// Index 0 delegates to [`push_front`](LinkedList::push_front);
    /// `index == len` appends.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if the walk to the predecessor runs off the
    /// chain (`index > len`).
    ///
    /// # Time complexity
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
    /// list.insert_at(1, 2).unwrap();
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        let count = self.count;
        let new_tail: *mut Node<T> = {
            let prev = match self.node_at_mut(index - 1) {
                Some(node) => node,
                None => return Err(Error::OutOfBounds { index, len: count }),
            };
            let node = Box::new(Node {
                value,
                next: prev.next.take(),
            });
            prev.next = Some(node);
            match prev.next.as_deref_mut() {
                Some(node) if node.next.is_none() => node as *mut Node<T>,
                _ => ptr::null_mut(),
            }
        };
        if !new_tail.is_null() {
            // The spliced node became terminal.
            self.tail = new_tail;
        }
        self.count += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Time complexity
    /// O(index)
    pub fn get(&self, index: usize) -> Result<&T> {
        match self.node_ref(index) {
            Some(node) => Ok(&node.value),
            None => Err(Error::OutOfBounds {
                index,
                len: self.count,
            }),
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let count = self.count;
        match self.node_at_mut(index) {
            Some(node) => Ok(&mut node.value),
            None => Err(Error::OutOfBounds { index, len: count }),
        }
    }

    /// Overwrites the element at `index`, dropping the previous value.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Detaches the head node and returns its value.
    ///
    /// # Errors
    /// [`Error::Empty`] if the list is empty.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::{Error, LinkedList};
    /// let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::Empty)?;
        let Node { value, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.count -= 1;
        Ok(value)
    }

    /// Detaches the terminal node and returns its value.
    ///
    /// Singly linked means no back-pointers: the second-to-last node has to
    /// be found by walking from the head before the tail can be relinked.
    ///
    /// # Errors
    /// [`Error::Empty`] if the list is empty.
    ///
    /// # Time complexity
    /// O(n)
    pub fn pop_back(&mut self) -> Result<T> {
        if self.count <= 1 {
            // Covers the empty case (Err) and the single-node case, where
            // front and back coincide.
            return self.pop_front();
        }
        let prev: *mut Node<T> = match self.node_at_mut(self.count - 2) {
            Some(node) => node as *mut Node<T>,
            None => return Err(Error::Empty),
        };
        // SAFETY: `prev` is a live node reached by walking the exclusively
        // borrowed chain; with count >= 2 it has a successor.
        unsafe {
            let prev = &mut *prev;
            let node = match prev.next.take() {
                Some(node) => node,
                None => return Err(Error::Empty),
            };
            self.tail = prev as *mut Node<T>;
            self.count -= 1;
            Ok(node.value)
        }
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// Index 0 delegates to [`pop_front`](LinkedList::pop_front). When the
    /// removed node was terminal, the tail cursor moves back to its
    /// predecessor.
    ///
    /// # Errors
    /// [`Error::Empty`] if the list is empty, [`Error::OutOfBounds`] if
    /// `index >= len`.
    ///
    /// # Time complexity
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 3]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if index == 0 {
            return self.pop_front();
        }
        let count = self.count;
        let prev: *mut Node<T> = match self.node_at_mut(index - 1) {
            Some(node) => node as *mut Node<T>,
            None => return Err(Error::OutOfBounds { index, len: count }),
        };
        // SAFETY: `prev` is a live node in the exclusively borrowed chain;
        // the target node is detached before any relinking.
        unsafe {
            let prev = &mut *prev;
            let node = match prev.next.take() {
                Some(node) => node,
                None => return Err(Error::OutOfBounds { index, len: count }),
            };
            let Node { value, next } = *node;
            prev.next = next;
            if prev.next.is_none() {
                self.tail = prev as *mut Node<T>;
            }
            self.count -= 1;
            Ok(value)
        }
    }

    /// Scans from the head and returns the positional index of the first
    /// element equal to `value`, or `None` if there is no match.
    ///
    /// # Time complexity
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let list: LinkedList<i32> = [5, 3, 8, 3].into_iter().collect();
    /// assert_eq!(list.linear_search(&3), Some(1));
    /// assert_eq!(list.linear_search(&9), None);
    /// ```
    pub fn linear_search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Sorts the list ascending by repeated adjacent value swaps.
    ///
    /// Only values move between consecutive nodes; the nodes themselves are
    /// never relinked, so the tail cursor stays valid throughout. A pass
    /// with no swap terminates the sort.
    ///
    /// # Time complexity
    /// O(n²) worst case, O(n) best case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let mut list: LinkedList<i32> = [5, 3, 8, 1].into_iter().collect();
    /// list.bubble_sort();
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 3, 5, 8]);
    /// ```
    pub fn bubble_sort(&mut self)
    where
        T: Ord,
    {
        if self.count < 2 {
            return;
        }
        loop {
            let mut swapped = false;
            let mut current = self.head.as_deref_mut();
            while let Some(node) = current {
                if let Some(next) = node.next.as_deref_mut() {
                    if node.value > next.value {
                        mem::swap(&mut node.value, &mut next.value);
                        swapped = true;
                    }
                }
                current = node.next.as_deref_mut();
            }
            if !swapped {
                break;
            }
        }
    }

    /// Reverses the list in place with a single walk, rewiring each node's
    /// successor to its predecessor.
    ///
    /// The head becomes the former tail and the tail cursor is repointed at
    /// the former head, which is the new terminal node, so appends keep
    /// working after a reversal.
    ///
    /// # Time complexity
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::LinkedList;
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// list.reverse();
    /// list.push_back(0);
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [3, 2, 1, 0]);
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: Option<Box<Node<T>>> = None;
        let mut current = self.head.take();
        let mut new_tail: *mut Node<T> = ptr::null_mut();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
            if new_tail.is_null() {
                // The first node processed is the former head, which ends
                // up terminal.
                if let Some(node) = prev.as_deref_mut() {
                    new_tail = node as *mut Node<T>;
                }
            }
        }
        self.head = prev;
        self.tail = new_tail;
    }

    /// Drops every node, leaving the list empty.
    ///
    /// The chain is drained iteratively; dropping node N's box never
    /// recurses into node N+1, so arbitrarily long chains cannot overflow
    /// the stack.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.count = 0;
    }

    /// Returns an iterator over references to the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            remaining: self.count,
        }
    }

    /// Shared walk to the node at `index`, or `None` past the end.
    fn node_ref(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    /// Mutable walk to the node at `index`, or `None` past the end.
    ///
    /// The walk advances a raw cursor so the returned borrow covers only
    /// the final node rather than every predecessor on the path.
    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current: *mut Node<T> = match self.head.as_deref_mut() {
            Some(node) => node as *mut Node<T>,
            None => return None,
        };
        for _ in 0..index {
            // SAFETY: `current` came from the exclusively borrowed chain;
            // following the owned `next` box stays within it.
            current = match unsafe { (*current).next.as_deref_mut() } {
                Some(node) => node as *mut Node<T>,
                None => return None,
            };
        }
        // SAFETY: `current` is a live node; the borrow is tied to `self`.
        Some(unsafe { &mut *current })
    }
}

/// Iterator over a [`LinkedList`], yielding `&T` from head to tail.
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Space-separated listing of the current contents, head to tail.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    fn collect<T: Copy>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn push_front_prepends() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        assert_eq!(collect(&list), [1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn push_back_appends_through_tail() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(collect(&list), [1, 2, 3]);
    }

    #[test]
    fn insert_at_splices() {
        let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
        list.insert_at(1, 2).unwrap();
        assert_eq!(collect(&list), [1, 2, 3]);

        // Insertion at len appends and must move the tail cursor.
        list.insert_at(3, 4).unwrap();
        list.push_back(5);
        assert_eq!(collect(&list), [1, 2, 3, 4, 5]);

        assert_eq!(
            list.insert_at(7, 9),
            Err(Error::OutOfBounds { index: 7, len: 5 })
        );
        assert_eq!(collect(&list), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_at_zero_on_empty_list() {
        let mut list = LinkedList::new();
        list.insert_at(0, 1).unwrap();
        list.push_back(2);
        assert_eq!(collect(&list), [1, 2]);
    }

    #[test]
    fn get_and_set_walk_by_index() {
        let mut list: LinkedList<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(2), Ok(&30));
        assert_eq!(list.get(3), Err(Error::OutOfBounds { index: 3, len: 3 }));

        list.set(1, 21).unwrap();
        assert_eq!(collect(&list), [10, 21, 30]);
        assert_eq!(
            list.set(3, 0),
            Err(Error::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn pop_front_relinks_and_clears_tail() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert!(list.is_empty());

        // Tail was cleared with the last node, so appends restart cleanly.
        list.push_back(7);
        assert_eq!(collect(&list), [7]);
    }

    #[test]
    fn pop_back_walks_to_predecessor() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_back(), Ok(2));
        // Tail moved back each time; appending still works.
        list.push_back(9);
        assert_eq!(collect(&list), [1, 9]);

        assert_eq!(list.pop_back(), Ok(9));
        assert_eq!(list.pop_back(), Ok(1));
        assert_eq!(list.pop_back(), Err(Error::Empty));
    }

    #[test]
    fn remove_at_updates_tail_when_terminal() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.remove_at(1), Ok(2));
        assert_eq!(collect(&list), [1, 3]);

        assert_eq!(list.remove_at(1), Ok(3));
        list.push_back(4);
        assert_eq!(collect(&list), [1, 4]);

        assert_eq!(
            list.remove_at(2),
            Err(Error::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(collect(&list), [1, 4]);
    }

    #[test]
    fn remove_at_on_empty_signals_empty() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.remove_at(0), Err(Error::Empty));
        assert_eq!(list.remove_at(5), Err(Error::Empty));
    }

    #[test]
    fn linear_search_finds_first_match() {
        let list: LinkedList<i32> = [5, 3, 8, 3].into_iter().collect();
        assert_eq!(list.linear_search(&3), Some(1));
        assert_eq!(list.linear_search(&5), Some(0));
        assert_eq!(list.linear_search(&9), None);
    }

    #[test]
    fn bubble_sort_orders_values() {
        let mut list: LinkedList<i32> = [5, 3, 8, 1].into_iter().collect();
        list.bubble_sort();
        assert_eq!(collect(&list), [1, 3, 5, 8]);

        // Tail still valid: nodes were never relinked.
        list.push_back(9);
        assert_eq!(collect(&list), [1, 3, 5, 8, 9]);

        let mut sorted: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        sorted.bubble_sort();
        assert_eq!(collect(&sorted), [1, 2, 3]);

        let mut single: LinkedList<i32> = [1].into_iter().collect();
        single.bubble_sort();
        assert_eq!(collect(&single), [1]);
    }

    #[test]
    fn reverse_rewires_and_repoints_tail() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        list.reverse();
        assert_eq!(collect(&list), [3, 2, 1]);

        // The former head is the new terminal node.
        list.push_back(0);
        assert_eq!(collect(&list), [3, 2, 1, 0]);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let mut list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        list.reverse();
        list.reverse();
        assert_eq!(collect(&list), [1, 2, 3, 4]);

        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
        empty.push_back(1);
        assert_eq!(collect(&empty), [1]);

        let mut single: LinkedList<i32> = [1].into_iter().collect();
        single.reverse();
        assert_eq!(collect(&single), [1]);
    }

    #[test]
    fn long_chain_drops_iteratively() {
        let mut list: LinkedList<u32> = LinkedList::new();
        for i in 0..100_000 {
            list.push_back(i);
        }
        assert_eq!(list.len(), 100_000);
        // Dropping here must not recurse through 100k nested boxes.
    }

    #[test]
    fn drops_every_node_exactly_once() {
        struct Counted(Rc<Cell<usize>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        {
            let mut list: LinkedList<Counted> = LinkedList::new();
            for _ in 0..8 {
                list.push_back(Counted(Rc::clone(&drops)));
            }
            drop(list.remove_at(4).unwrap());
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn iterator_is_sized_and_fused() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn clone_eq_debug_display() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(format!("{list}"), "1 2 3");

        let mut other = copy;
        other.set(0, 9).unwrap();
        assert_ne!(list, other);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        list.push_back(1);
        assert_eq!(collect(&list), [1]);
    }
}
