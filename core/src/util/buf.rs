//! Owned 2D buffers.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut};

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to the element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use rasterfall_core::util::buf::Buf2;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new((4, 4));
/// // Indexing with [x, y] yields the element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// assert_eq!(buf[1usize][2], 123);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Buf2<T> {
    dims: (u32, u32),
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer of the given size, with every element initialized
    /// to `T::default()`.
    pub fn new(dims: (u32, u32)) -> Self
    where
        T: Clone + Default,
    {
        let len = dims.0 as usize * dims.1 as usize;
        Self { dims, data: vec![T::default(); len] }
    }

    /// Returns a buffer of the given size, initializing every element
    /// with `init_fn(x, y)`.
    pub fn new_with<F>(dims: (u32, u32), mut init_fn: F) -> Self
    where
        F: FnMut(u32, u32) -> T,
    {
        let (w, h) = dims;
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                data.push(init_fn(x, y));
            }
        }
        Self { dims, data }
    }

    /// The width and height of `self`.
    pub fn dims(&self) -> (u32, u32) {
        self.dims
    }
    /// The width of `self`.
    pub fn width(&self) -> u32 {
        self.dims.0
    }
    /// The height of `self`.
    pub fn height(&self) -> u32 {
        self.dims.1
    }

    /// The elements of `self` as a flat slice, in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// The elements of `self` as a flat mutable slice.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Fills `self` with clones of `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }

    /// Returns an iterator over the rows of `self` as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width().max(1) as usize)
    }

    fn index_of(&self, [x, y]: [u32; 2]) -> usize {
        let (w, h) = self.dims;
        assert!(x < w && y < h, "position ({x}, {y}) out of bounds ({w}, {h})");
        (y * w + x) as usize
    }
}

impl<T> Index<[u32; 2]> for Buf2<T> {
    type Output = T;
    /// Returns the element at position `[x, y]`.
    ///
    /// # Panics
    /// If the position is out of bounds.
    #[inline]
    fn index(&self, pos: [u32; 2]) -> &T {
        &self.data[self.index_of(pos)]
    }
}

impl<T> IndexMut<[u32; 2]> for Buf2<T> {
    #[inline]
    fn index_mut(&mut self, pos: [u32; 2]) -> &mut T {
        let i = self.index_of(pos);
        &mut self.data[i]
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];
    /// Returns row `row` of `self` as a slice.
    ///
    /// # Panics
    /// If `row >= self.height()`.
    #[inline]
    fn index(&self, row: usize) -> &[T] {
        assert!(
            (row as u32) < self.height(),
            "row {row} out of bounds ({})",
            self.height()
        );
        let w = self.width() as usize;
        &self.data[row * w..(row + 1) * w]
    }
}

impl<T: Debug> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dims;
        write!(f, "Buf2({w}x{h})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let buf = Buf2::new_with((3, 2), |x, y| 10 * y + x);
        assert_eq!(buf.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(buf[[2, 0]], 2);
        assert_eq!(buf[[0, 1]], 10);
        assert_eq!(&buf[1usize], &[10, 11, 12]);
    }

    #[test]
    fn write_through_index() {
        let mut buf = Buf2::<u32>::new((4, 4));
        buf[[2, 1]] = 123;
        assert_eq!(buf.data()[6], 123);
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut buf = Buf2::new_with((2, 2), |x, _| x);
        buf.fill(9);
        assert_eq!(buf.data(), &[9, 9, 9, 9]);
    }

    #[test]
    fn rows_iterate_top_down() {
        let buf = Buf2::new_with((2, 3), |_, y| y);
        let rows: Vec<_> = buf.rows().collect();
        assert_eq!(rows, [&[0, 0], &[1, 1], &[2, 2]]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_x_panics() {
        let buf = Buf2::<u32>::new((4, 4));
        _ = buf[[4, 0]];
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_row_panics() {
        let buf = Buf2::<u32>::new((4, 4));
        _ = &buf[4usize];
    }
}
