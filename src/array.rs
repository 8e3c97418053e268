use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::{cmp::Ordering, fmt, mem, mem::ManuallyDrop, ptr, ptr::NonNull, slice};

use crate::error::{Error, Result};

/// Number of slots a [`DynArray`] allocates up front.
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous growable array built directly on raw allocations.
///
/// `DynArray` manages its own buffer with explicit capacity and length
/// tracking instead of delegating to [`Vec`](alloc::vec::Vec): the backing
/// storage is requested from the global allocator via [`Layout`], elements
/// are placed with raw pointer writes, and every insertion or removal in the
/// middle shifts the tail with a single `memmove`. The point is to make the
/// classic complexity trade-offs visible rather than to outperform `Vec`.
///
/// The buffer starts at [`DEFAULT_CAPACITY`] slots and strictly doubles
/// whenever an insertion would overflow it; it never shrinks. Elements at
/// positions `[0, len)` are always initialized, anything beyond is not.
///
/// Fallible operations return [`Error`](crate::Error) instead of panicking,
/// and check their preconditions before touching the buffer, so a failed
/// call never leaves the array half-mutated.
///
/// # Examples
///
/// ```
/// use lineal::DynArray;
///
/// let mut arr: DynArray<i32> = DynArray::new();
/// assert_eq!(arr.capacity(), 10);
///
/// arr.push(5);
/// arr.push(3);
/// arr.push(8);
/// arr.push(1);
///
/// arr.quick_sort();
/// assert_eq!(arr, [1, 3, 5, 8]);
/// assert_eq!(arr.binary_search(&5), Some(2));
/// ```
///
/// # ZST support
///
/// Zero sized types never allocate; only the length and capacity
/// bookkeeping is maintained for them.
pub struct DynArray<T> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
}

unsafe impl<T> Send for DynArray<T> where T: Send {}
unsafe impl<T> Sync for DynArray<T> where T: Sync {}

impl<T> Drop for DynArray<T> {
    // The buffer holds raw slots, so live elements are dropped manually
    // before the single dealloc.
    fn drop(&mut self) {
        unsafe {
            // SAFETY: positions [0, len) are initialized.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            // SAFETY: `ptr`/`cap` describe the live allocation, released here
            // exactly once.
            self.dealloc_buffer();
        }
    }
}

/// Creates a [`DynArray`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
///
/// # Examples
///
/// ```
/// # use lineal::{dynarray, DynArray};
/// let arr: DynArray<i32> = dynarray![];
/// let arr = dynarray![7; 3]; // Needs to support Clone.
/// let arr = dynarray![1, 2, 3, 4];
/// assert_eq!(arr, [1, 2, 3, 4]);
/// ```
#[macro_export]
macro_rules! dynarray {
    [] => { $crate::DynArray::new() };
    [$elem:expr; $n:expr] => { $crate::DynArray::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::DynArray::from([ $($item),+ ]) };
}

impl<T> DynArray<T> {
    /// Constructs a new, empty `DynArray` with [`DEFAULT_CAPACITY`] slots
    /// already allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::DynArray;
    /// let arr: DynArray<String> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `DynArray` with at least `capacity` slots.
    ///
    /// A requested capacity of zero is clamped to [`DEFAULT_CAPACITY`]; the
    /// buffer invariant is that capacity is always non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::DynArray;
    /// let arr: DynArray<u8> = DynArray::with_capacity(64);
    /// assert_eq!(arr.capacity(), 64);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            ptr: Self::allocate(cap),
            len: 0,
            cap,
        }
    }

    /// Constructs a `DynArray` holding `n` clones of `elem`.
    ///
    /// This is what `dynarray![elem; n]` expands to.
    pub fn from_elem(elem: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut arr = Self::with_capacity(n);
        for _ in 0..n {
            arr.push(elem.clone());
        }
        arr
    }

    /// Requests a fresh buffer of `capacity` slots from the global allocator.
    ///
    /// ZSTs get a dangling pointer; the capacity bookkeeping alone is enough
    /// for them.
    fn allocate(capacity: usize) -> NonNull<T> {
        debug_assert!(capacity > 0, "buffer capacity is never zero");

        if mem::size_of::<T>() == 0 {
            return NonNull::dangling();
        }
        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow in DynArray"),
        };
        // SAFETY: T is not a ZST and capacity > 0, so the layout is non-zero
        // sized.
        let raw = unsafe { alloc(layout) } as *mut T;
        match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    /// Releases the current buffer.
    ///
    /// # Safety
    /// - `self.cap` still describes the allocation behind `self.ptr`.
    /// - No element is read through `self.ptr` afterwards.
    unsafe fn dealloc_buffer(&mut self) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        // SAFETY: the buffer was allocated with this exact layout.
        unsafe {
            dealloc(
                self.ptr.as_ptr() as *mut u8,
                Layout::from_size_align_unchecked(
                    mem::size_of::<T>() * self.cap,
                    mem::align_of::<T>(),
                ),
            );
        }
    }

    /// Doubles the capacity: allocate a larger buffer, move the elements
    /// over, release the old buffer. The capacity never shrinks.
    #[inline(never)]
    fn grow(&mut self) {
        let new_cap = self.cap * 2;

        if mem::size_of::<T>() == 0 {
            self.cap = new_cap;
            return;
        }

        let new_ptr = Self::allocate(new_cap);
        // SAFETY: both buffers are distinct allocations of sufficient size;
        // the old one is released after the move with its original layout.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            self.dealloc_buffer();
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Returns the number of elements in the array.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the total number of slots currently allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::DynArray;
    /// let mut arr: DynArray<i32> = DynArray::new();
    /// for i in 0..11 {
    ///     arr.push(i);
    /// }
    /// // The eleventh push doubled the initial capacity.
    /// assert_eq!(arr.capacity(), 20);
    /// ```
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if the array contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts a slice containing the entire array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: positions [0, len) are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: positions [0, len) are initialized.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Appends an element to the back of the array.
    ///
    /// # Time complexity
    /// Amortized O(1); a push at `len == capacity` relocates every element
    /// into a doubled buffer first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![1, 2];
    /// arr.push(3);
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }
        // SAFETY: len < cap after the growth check, the slot is in bounds.
        unsafe {
            ptr::write(self.ptr.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    /// [`Error::Empty`] if the array is empty.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::{dynarray, Error};
    /// let mut arr = dynarray![1, 2];
    /// assert_eq!(arr.pop(), Ok(2));
    /// assert_eq!(arr.pop(), Ok(1));
    /// assert_eq!(arr.pop(), Err(Error::Empty));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        // SAFETY: the position at the new len held an initialized element,
        // which is moved out and no longer reachable through the buffer.
        Ok(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Inserts an element at position `index`, shifting everything at
    /// `[index, len)` one slot to the right.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index > len`. Inserting at `index == len`
    /// is a plain append.
    ///
    /// # Time complexity
    /// O(n - index), plus a relocation when the array is at capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![1, 3, 5, 8];
    /// arr.insert(0, 57).unwrap();
    /// assert_eq!(arr, [57, 1, 3, 5, 8]);
    /// assert_eq!(arr.len(), 5);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.cap {
            self.grow();
        }
        // SAFETY: index <= len < cap, so the shifted range and the written
        // slot stay inside the buffer.
        unsafe {
            let ptr = self.ptr.as_ptr().add(index);
            if index < self.len {
                ptr::copy(ptr, ptr.add(1), self.len - index);
            }
            ptr::write(ptr, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at position `index` and returns it, shifting
    /// everything at `[index + 1, len)` one slot to the left.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Time complexity
    /// O(n - index)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![57, 1, 3, 5, 8];
    /// assert_eq!(arr.remove(2), Ok(3));
    /// assert_eq!(arr, [57, 1, 5, 8]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len; the element is moved out before its slot is
        // overwritten by the shift.
        unsafe {
            let ptr = self.ptr.as_ptr().add(index);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len.
        Ok(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len.
        Ok(unsafe { &mut *self.ptr.as_ptr().add(index) })
    }

    /// Overwrites the element at `index`, dropping the previous value.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![1, 2, 3];
    /// arr.set(1, 20).unwrap();
    /// assert_eq!(arr, [1, 20, 3]);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero the length first so a panicking Drop impl cannot expose
        // half-dropped elements.
        self.len = 0;
        // SAFETY: positions [0, len) were initialized.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len));
        }
    }

    /// Scans left to right and returns the index of the first element equal
    /// to `value`, or `None` if there is no match.
    ///
    /// # Time complexity
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let arr = dynarray![5, 3, 8, 3];
    /// assert_eq!(arr.linear_search(&3), Some(1));
    /// assert_eq!(arr.linear_search(&9), None);
    /// ```
    pub fn linear_search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|item| item == value)
    }

    /// Bisects an **ascending-sorted** array for `value` and returns a
    /// matching index, or `None` if the value is absent.
    ///
    /// The sortedness precondition is documented, not checked; on an
    /// unsorted array the result is meaningless. With duplicate elements
    /// any one of the matching indices may be returned.
    ///
    /// # Time complexity
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let arr = dynarray![1, 3, 5, 8];
    /// assert_eq!(arr.binary_search(&5), Some(2));
    /// assert_eq!(arr.binary_search(&4), None);
    /// ```
    pub fn binary_search(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let items = self.as_slice();
        let mut low = 0;
        let mut high = items.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match items[mid].cmp(value) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }

    /// Sorts the array ascending by repeated adjacent-pair swap passes.
    ///
    /// A pass that performs no swap terminates the sort, so already-sorted
    /// input costs a single O(n) pass.
    ///
    /// # Time complexity
    /// O(n²) worst and average case, O(n) best case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![5, 3, 8, 1];
    /// arr.bubble_sort();
    /// assert_eq!(arr, [1, 3, 5, 8]);
    /// ```
    pub fn bubble_sort(&mut self)
    where
        T: Ord,
    {
        bubble_sort(self.as_mut_slice());
    }

    /// Sorts the array ascending by insertion: each element from the second
    /// onward is taken out, larger predecessors are shifted one slot right,
    /// and the key lands in its sorted position.
    ///
    /// # Time complexity
    /// O(n²) worst case, O(n) best case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![5, 3, 8, 1];
    /// arr.insertion_sort();
    /// assert_eq!(arr, [1, 3, 5, 8]);
    /// ```
    pub fn insertion_sort(&mut self)
    where
        T: Ord,
    {
        insertion_sort(self.as_mut_slice());
    }

    /// Sorts the array ascending with a recursive quicksort using the
    /// Lomuto partition scheme and the last element as pivot.
    ///
    /// The pivot choice is deterministic, so behavior is reproducible, at
    /// the cost of the classic O(n²) degradation on already-sorted or
    /// reverse-sorted input. Recursion depth is bounded by the length.
    ///
    /// # Time complexity
    /// O(n log n) average, O(n²) worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![5, 3, 8, 1];
    /// arr.quick_sort();
    /// assert_eq!(arr, [1, 3, 5, 8]);
    /// ```
    pub fn quick_sort(&mut self)
    where
        T: Ord,
    {
        let len = self.len;
        if len > 1 {
            quick_sort_range(self.as_mut_slice(), 0, len - 1);
        }
    }

    /// Reverses the array in place by swapping from both ends inward.
    ///
    /// # Time complexity
    /// O(n), performing n/2 swaps.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::dynarray;
    /// let mut arr = dynarray![1, 2, 3, 4];
    /// arr.reverse();
    /// assert_eq!(arr, [4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let items = self.as_mut_slice();
        if items.is_empty() {
            return;
        }
        let mut left = 0;
        let mut right = items.len() - 1;
        while left < right {
            items.swap(left, right);
            left += 1;
            right -= 1;
        }
    }
}

fn bubble_sort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    loop {
        let mut swapped = false;
        for i in 0..items.len() - 1 {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

fn insertion_sort<T: Ord>(items: &mut [T]) {
    // Shifts are raw one-slot copies; the key lives outside the buffer while
    // its hole moves left, and `InsertionHole` moves it back in even if a
    // comparison panics.
    let base = items.as_mut_ptr();
    for i in 1..items.len() {
        // SAFETY: i < len; `hole` restores the moved-out key into a valid
        // slot on every exit path, so all positions stay initialized.
        unsafe {
            let key = ManuallyDrop::new(ptr::read(base.add(i)));
            let mut hole = InsertionHole {
                src: &*key,
                dest: base.add(i),
            };
            let mut j = i;
            while j > 0 && *base.add(j - 1) > *hole.src {
                ptr::copy_nonoverlapping(base.add(j - 1), base.add(j), 1);
                j -= 1;
                hole.dest = base.add(j);
            }
        }
    }
}

/// Fills the hole left by a key taken out of the buffer when it goes out of
/// scope, on both the normal and the unwinding path.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` still holds the element taken out of `dest`'s slot.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

fn quick_sort_range<T: Ord>(items: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(items, low, high);
    if pivot > low {
        quick_sort_range(items, low, pivot - 1);
    }
    quick_sort_range(items, pivot + 1, high);
}

/// Lomuto partition over `items[low..=high]` with `items[high]` as pivot.
///
/// `boundary` tracks the next slot for an element smaller than the pivot;
/// the pivot is swapped into that slot at the end, which is its final
/// sorted position.
fn partition<T: Ord>(items: &mut [T], low: usize, high: usize) -> usize {
    let mut boundary = low;
    for j in low..high {
        if items[j] < items[high] {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, high);
    boundary
}

crate::utils::impl_common_traits!(DynArray<T>);

impl<T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.cap);
        arr.extend(self.as_slice().iter().cloned());
        arr
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(buf: [T; N]) -> Self {
        let mut arr = Self::with_capacity(N);
        arr.extend(buf);
        arr
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    /// Human-readable listing of the current contents, in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[size: {}, capacity: {}]:", self.len, self.cap)?;
        for item in self {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
