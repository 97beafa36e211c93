//! Image Loader.
//!
//! This module places a guest program into RAM before execution. It performs:
//! 1. **Detection:** An image starting with the ELF magic is parsed as ELF,
//!    anything else is a flat binary.
//! 2. **Flat binaries:** Copied verbatim to the RAM base, which is also the entry point.
//! 3. **ELF64:** Every loadable segment is copied to its virtual address (`p_vaddr`)
//!    and its `.bss` tail zeroed; the entry point comes from the ELF header.
//!    There is no MMU, so `p_paddr` is ignored.
//!
//! Images are bounds-checked against the configured RAM window before any
//! byte is written.

use std::fs;
use std::path::Path;

use object::read::elf::ElfFile64;
use object::{Architecture, Endianness, Object, ObjectSegment};
use tracing::{debug, info};

use crate::common::SimError;
use crate::config::SystemConfig;
use crate::soc::System;

/// First four bytes of every ELF file.
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// Reads an image file into memory.
///
/// # Errors
///
/// `SimError::Io` naming the path if the file cannot be read.
pub fn read_image(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Returns `true` if `image` starts with the ELF magic.
pub fn is_elf(image: &[u8]) -> bool {
    image.starts_with(&ELF_MAGIC)
}

/// Loads `image` into `system` and returns its entry point.
///
/// # Errors
///
/// * `SimError::ImageOutOfRange` if the image or a segment leaves RAM.
/// * `SimError::Elf` / `SimError::UnsupportedElf` for malformed or
///   non-RV64 ELF files.
/// * `SimError::Bus` if the bus rejects a write.
pub fn load_image(
    system: &mut System,
    image: &[u8],
    layout: &SystemConfig,
) -> Result<u64, SimError> {
    if is_elf(image) {
        load_elf(system, image, layout)
    } else {
        load_flat(system, image, layout)
    }
}

fn check_range(start: u64, len: u64, layout: &SystemConfig) -> Result<(), SimError> {
    let end = start.checked_add(len).ok_or(SimError::ImageOutOfRange {
        start,
        end: u64::MAX,
    })?;
    if start < layout.ram_base || end > layout.ram_end() {
        return Err(SimError::ImageOutOfRange { start, end });
    }
    Ok(())
}

fn load_flat(system: &mut System, image: &[u8], layout: &SystemConfig) -> Result<u64, SimError> {
    let base = layout.ram_base;
    check_range(base, image.len() as u64, layout)?;
    system.load_binary_at(image, base)?;
    info!(bytes = image.len(), "loaded flat image at {base:#x}");
    Ok(base)
}

fn load_elf(system: &mut System, image: &[u8], layout: &SystemConfig) -> Result<u64, SimError> {
    let elf = ElfFile64::<Endianness>::parse(image)?;
    if elf.architecture() != Architecture::Riscv64 {
        return Err(SimError::UnsupportedElf("not a RISC-V 64-bit image"));
    }
    if !elf.is_little_endian() {
        return Err(SimError::UnsupportedElf("big-endian image"));
    }

    for segment in elf.segments() {
        let addr = segment.address();
        let size = segment.size();
        if size == 0 {
            continue;
        }
        check_range(addr, size, layout)?;

        let data = segment.data()?;
        system.load_binary_at(data, addr)?;
        let bss = size.saturating_sub(data.len() as u64);
        if bss > 0 {
            let zeros = vec![0u8; bss as usize];
            system.load_binary_at(&zeros, addr + data.len() as u64)?;
        }
        debug!(file = data.len(), mem = size, "segment at {addr:#x}");
    }

    let entry = elf.entry();
    info!("loaded ELF image, entry {entry:#x}");
    Ok(entry)
}
