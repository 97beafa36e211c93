//! DRAM Buffer Implementation.
//!
//! Backing storage for system RAM. On Unix the buffer is an anonymous private
//! `mmap`, so the host only commits pages the guest actually touches; a
//! 128 MiB guest that runs a few kilobytes of code costs a few pages. Other
//! platforms (and zero-sized buffers) fall back to a zeroed heap allocation.

use std::io;
#[cfg(unix)]
use std::ptr::NonNull;

enum Storage {
    #[cfg(unix)]
    Mapped { ptr: NonNull<u8>, size: usize },
    Heap(Box<[u8]>),
}

/// Zero-initialised, byte-addressable RAM contents.
pub struct DramBuffer {
    storage: Storage,
}

// SAFETY: the mapping is exclusively owned by this value and only reachable
// through `&self`/`&mut self`, so moving it to another thread is sound.
unsafe impl Send for DramBuffer {}

impl std::fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DramBuffer")
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}

impl DramBuffer {
    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the anonymous mapping cannot be created.
    pub fn new(size: usize) -> io::Result<Self> {
        #[cfg(unix)]
        if size > 0 {
            // SAFETY: anonymous private mapping with no fixed address; the
            // kernel picks the placement and zero-fills the pages.
            let raw = unsafe {
                libc::mmap(
                    std::ptr::null_mut(),
                    size,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };
            if raw == libc::MAP_FAILED {
                return Err(io::Error::last_os_error());
            }
            let ptr = NonNull::new(raw.cast::<u8>()).ok_or_else(io::Error::last_os_error)?;
            return Ok(Self {
                storage: Storage::Mapped { ptr, size },
            });
        }

        Ok(Self {
            storage: Storage::Heap(vec![0u8; size].into_boxed_slice()),
        })
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        match &self.storage {
            #[cfg(unix)]
            Storage::Mapped { size, .. } => *size,
            Storage::Heap(data) => data.len(),
        }
    }

    /// Returns `true` for a zero-sized buffer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when backed by `mmap`.
    pub const fn is_mapped(&self) -> bool {
        match self.storage {
            #[cfg(unix)]
            Storage::Mapped { .. } => true,
            Storage::Heap(_) => false,
        }
    }

    /// Returns the contents as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            #[cfg(unix)]
            // SAFETY: `ptr` is a live mapping of exactly `size` readable bytes
            // owned by `self`; the borrow of `self` bounds the slice lifetime.
            Storage::Mapped { ptr, size } => unsafe {
                std::slice::from_raw_parts(ptr.as_ptr(), *size)
            },
            Storage::Heap(data) => data,
        }
    }

    /// Returns the contents as a mutable byte slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.storage {
            #[cfg(unix)]
            // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
            Storage::Mapped { ptr, size } => unsafe {
                std::slice::from_raw_parts_mut(ptr.as_ptr(), *size)
            },
            Storage::Heap(data) => data,
        }
    }
}

impl Drop for DramBuffer {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Storage::Mapped { ptr, size } = self.storage {
            // SAFETY: the mapping was created by `new` with this exact length
            // and no slice borrowed from it can outlive `self`.
            let _ = unsafe { libc::munmap(ptr.as_ptr().cast(), size) };
        }
    }
}
