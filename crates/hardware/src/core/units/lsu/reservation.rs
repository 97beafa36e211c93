//! Load-reserved / store-conditional reservation tracking.
//!
//! A hart holds at most one reservation, the `(address, width)` pair placed
//! by its most recent `lr.w`/`lr.d`. Every store-conditional releases it,
//! and any store whose bytes overlap it invalidates it.

use tracing::debug;

use crate::common::MemWidth;

/// A single load-reserved address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reservation {
    /// Reserved address, aligned to `width`.
    pub addr: u64,
    /// Width of the `lr` that placed it.
    pub width: MemWidth,
}

impl Reservation {
    const fn end(self) -> u64 {
        self.addr.wrapping_add(self.width.bytes())
    }

    const fn overlaps(self, addr: u64, width: MemWidth) -> bool {
        addr < self.end() && self.addr < addr.wrapping_add(width.bytes())
    }
}

/// The hart's load-reserved state.
#[derive(Clone, Debug, Default)]
pub struct ReservationSet {
    current: Option<Reservation>,
}

impl ReservationSet {
    /// Creates an empty reservation set.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Places a reservation, replacing whatever the hart held before.
    pub fn reserve(&mut self, addr: u64, width: MemWidth) {
        if let Some(old) = self.current.replace(Reservation { addr, width }) {
            debug!("reservation at {:#x} superseded", old.addr);
        }
        debug!(%width, "reservation placed at {addr:#x}");
    }

    /// Releases the reservation for a store-conditional to `addr`.
    ///
    /// Returns `true` (store-conditional succeeds) only if the held
    /// reservation has this address and width. The set is empty afterwards
    /// in every case.
    pub fn take(&mut self, addr: u64, width: MemWidth) -> bool {
        let hit = self
            .current
            .take()
            .is_some_and(|r| r.addr == addr && r.width == width);
        debug!(%width, hit, "reservation consumed at {addr:#x}");
        hit
    }

    /// Drops the reservation if it overlaps the bytes `[addr, addr + width)`.
    pub fn invalidate(&mut self, addr: u64, width: MemWidth) {
        if self.current.is_some_and(|r| r.overlaps(addr, width)) {
            self.current = None;
            debug!(%width, "store to {addr:#x} invalidated the reservation");
        }
    }

    /// Drops the reservation (trap taken, context switch).
    pub const fn clear(&mut self) {
        self.current = None;
    }

    /// The reservation currently held, if any.
    pub const fn current(&self) -> Option<Reservation> {
        self.current
    }

    /// Returns `true` if `addr` is currently reserved at any width.
    pub fn is_reserved(&self, addr: u64) -> bool {
        self.current.is_some_and(|r| r.addr == addr)
    }

    /// Returns `true` when nothing is reserved.
    pub const fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
