use rv64emu_core::common::MemWidth;
use rv64emu_core::soc::devices::Device;
use rv64emu_core::soc::memory::Memory;
use rv64emu_core::soc::memory::buffer::DramBuffer;

#[test]
fn buffers_start_zeroed() {
    let buf = DramBuffer::new(0x4000).expect("allocation");
    assert_eq!(buf.len(), 0x4000);
    assert!(buf.as_slice().iter().all(|&b| b == 0));
    #[cfg(unix)]
    assert!(buf.is_mapped());
}

#[test]
fn empty_buffer_uses_heap() {
    let buf = DramBuffer::new(0).expect("allocation");
    assert!(buf.is_empty());
    assert!(!buf.is_mapped());
}

#[test]
fn memory_reads_back_little_endian() {
    let mut mem = Memory::new(0x8000_0000, 0x100).expect("allocation");
    assert_eq!(mem.address_range(), (0x8000_0000, 0x100));
    mem.write(0x10, 0x0102_0304_0506_0708, MemWidth::Double);
    assert_eq!(mem.as_slice()[0x10], 0x08);
    assert_eq!(mem.read(0x10, MemWidth::Half), 0x0708);
    assert_eq!(mem.read(0x13, MemWidth::Word), 0x0203_0405);
}

#[test]
fn bulk_writes_land_at_offset() {
    let mut mem = Memory::new(0, 0x20).expect("allocation");
    mem.write_bytes(0x1E, &[0xAB, 0xCD]);
    assert_eq!(mem.read(0x1E, MemWidth::Half), 0xCDAB);
}
