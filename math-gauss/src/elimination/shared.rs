//! Shared mutable view of a [`LinearSystem`] for the worker pool
//!
//! Workers read and write `a`, `b` and `y` concurrently without locks. This is
//! sound only under the engine's discipline: within a phase every worker
//! writes a disjoint set of indices, and any read of a value written by
//! another worker is separated from that write by a barrier rendezvous.

use crate::system::LinearSystem;
use std::cell::UnsafeCell;

pub(crate) struct SharedSystem {
    n: usize,
    a: *mut f64,
    b: *mut f64,
    y: *mut f64,
    // Owns the buffers the pointers above refer to. Never accessed through a
    // reference while workers are running.
    inner: UnsafeCell<LinearSystem>,
}

// Safe: access is coordinated by the barrier protocol described above.
unsafe impl Send for SharedSystem {}
unsafe impl Sync for SharedSystem {}

impl SharedSystem {
    pub(crate) fn new(mut system: LinearSystem) -> Self {
        let n = system.n();
        // Standard layout is established by LinearSystem's constructors.
        debug_assert!(system.a.is_standard_layout());
        let a = system.a.as_mut_ptr();
        let b = system.b.as_mut_ptr();
        let y = system.y.as_mut_ptr();
        Self {
            n,
            a,
            b,
            y,
            inner: UnsafeCell::new(system),
        }
    }

    pub(crate) fn n(&self) -> usize {
        self.n
    }

    /// Read `a[i][j]`
    ///
    /// # Safety
    /// No other worker may write `a[i][j]` concurrently.
    #[inline]
    pub(crate) unsafe fn a(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n && j < self.n);
        unsafe { self.a.add(i * self.n + j).read() }
    }

    /// Write `a[i][j]`
    ///
    /// # Safety
    /// The caller must be the only worker accessing `a[i][j]` in this phase.
    #[inline]
    pub(crate) unsafe fn set_a(&self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.n && j < self.n);
        unsafe { self.a.add(i * self.n + j).write(value) }
    }

    /// Read `b[i]`
    ///
    /// # Safety
    /// No other worker may write `b[i]` concurrently.
    #[inline]
    pub(crate) unsafe fn b(&self, i: usize) -> f64 {
        debug_assert!(i < self.n);
        unsafe { self.b.add(i).read() }
    }

    /// Write `b[i]`
    ///
    /// # Safety
    /// The caller must be the only worker accessing `b[i]` in this phase.
    #[inline]
    pub(crate) unsafe fn set_b(&self, i: usize, value: f64) {
        debug_assert!(i < self.n);
        unsafe { self.b.add(i).write(value) }
    }

    /// Read `y[i]`
    ///
    /// # Safety
    /// No other worker may write `y[i]` concurrently.
    #[inline]
    pub(crate) unsafe fn y(&self, i: usize) -> f64 {
        debug_assert!(i < self.n);
        unsafe { self.y.add(i).read() }
    }

    /// Write `y[i]`
    ///
    /// # Safety
    /// The caller must be the only worker accessing `y[i]` in this phase.
    #[inline]
    pub(crate) unsafe fn set_y(&self, i: usize, value: f64) {
        debug_assert!(i < self.n);
        unsafe { self.y.add(i).write(value) }
    }

    /// Give the system back once every worker has been joined
    pub(crate) fn into_inner(self) -> LinearSystem {
        self.inner.into_inner()
    }
}
