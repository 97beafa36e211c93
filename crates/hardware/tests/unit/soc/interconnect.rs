//! Bus routing against `mockall` devices.

use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rv64emu_core::common::{BusFault, MemWidth, SimError};
use rv64emu_core::config::UnmappedAccess;
use rv64emu_core::soc::Bus;

use crate::common::mocks::bus::MockDevice;

const BASE: u64 = 0x1000;
const SIZE: u64 = 0x100;

fn bus_with(policy: UnmappedAccess, dev: MockDevice) -> Bus {
    let mut bus = Bus::new(policy);
    bus.add_device(Box::new(dev)).expect("single device registers");
    bus
}

#[test]
fn reads_are_routed_with_device_offsets() {
    let mut dev = MockDevice::new("mock", BASE, SIZE);
    let _ = dev
        .port
        .expect_read()
        .with(eq(0x10), eq(MemWidth::Word))
        .times(1)
        .return_const(0xDEAD_BEEF_u64);
    let mut bus = bus_with(UnmappedAccess::Fault, dev);
    assert_eq!(bus.read(BASE + 0x10, MemWidth::Word), Ok(0xDEAD_BEEF));
}

#[test]
fn writes_are_masked_to_width() {
    let mut dev = MockDevice::new("mock", BASE, SIZE);
    let _ = dev
        .port
        .expect_write()
        .with(eq(0), eq(0xFF), eq(MemWidth::Byte))
        .times(1)
        .return_const(());
    let mut bus = bus_with(UnmappedAccess::Fault, dev);
    assert_eq!(bus.write(BASE, 0x1FF, MemWidth::Byte), Ok(()));
}

#[test]
fn access_straddling_window_end_is_unmapped() {
    let mut dev = MockDevice::new("mock", BASE, SIZE);
    let _ = dev.port.expect_read().never();
    let mut bus = bus_with(UnmappedAccess::Fault, dev);
    let addr = BASE + SIZE - 4;
    assert_eq!(
        bus.read(addr, MemWidth::Double),
        Err(BusFault { addr })
    );
}

#[test]
fn ignore_policy_reads_zero_and_drops_writes() {
    let mut dev = MockDevice::new("mock", BASE, SIZE);
    let _ = dev.port.expect_write().never();
    let mut bus = bus_with(UnmappedAccess::Ignore, dev);
    assert_eq!(bus.read(0x10, MemWidth::Double), Ok(0));
    assert_eq!(bus.write(0x10, 1, MemWidth::Double), Ok(()));
    assert_eq!(bus.policy(), UnmappedAccess::Ignore);
}

#[test]
fn fault_policy_reports_address() {
    let mut bus = Bus::new(UnmappedAccess::Fault);
    assert_eq!(bus.read(0x42, MemWidth::Byte), Err(BusFault { addr: 0x42 }));
    assert_eq!(
        bus.write(0x43, 0, MemWidth::Byte),
        Err(BusFault { addr: 0x43 })
    );
}

#[test]
fn each_device_receives_only_its_accesses() {
    let mut low = MockDevice::new("low", BASE, SIZE);
    let mut high = MockDevice::new("high", BASE + SIZE, SIZE);
    let _ = low.port.expect_read().times(2).return_const(1_u64);
    let _ = high
        .port
        .expect_read()
        .with(eq(0), eq(MemWidth::Half))
        .times(1)
        .return_const(2_u64);

    let mut bus = Bus::new(UnmappedAccess::Fault);
    bus.add_device(Box::new(high)).expect("high registers");
    bus.add_device(Box::new(low)).expect("low registers");

    assert_eq!(bus.device_names().collect::<Vec<_>>(), ["low", "high"]);
    assert_eq!(bus.read(BASE, MemWidth::Byte), Ok(1));
    assert_eq!(bus.read(BASE + SIZE, MemWidth::Half), Ok(2));
    assert_eq!(bus.read(BASE + SIZE - 1, MemWidth::Byte), Ok(1));
}

#[test]
fn overlapping_windows_are_rejected() {
    let mut bus = Bus::new(UnmappedAccess::Fault);
    bus.add_device(Box::new(MockDevice::new("first", BASE, SIZE)))
        .expect("first registers");
    let err = bus
        .add_device(Box::new(MockDevice::new("second", BASE + SIZE - 1, SIZE)))
        .expect_err("overlap must be rejected");
    assert!(matches!(
        err,
        SimError::DeviceOverlap { ref device, ref existing }
            if device == "second" && existing == "first"
    ));
    assert_eq!(bus.device_names().count(), 1);
}

#[test]
fn address_validity_follows_windows() {
    let bus = bus_with(UnmappedAccess::Fault, MockDevice::new("mock", BASE, SIZE));
    assert!(bus.is_valid_address(BASE));
    assert!(bus.is_valid_address(BASE + SIZE - 1));
    assert!(!bus.is_valid_address(BASE + SIZE));
    assert!(!bus.is_valid_address(BASE - 1));
}

#[test]
fn blobs_split_across_devices_are_written_bytewise() {
    let mut low = MockDevice::new("low", BASE, SIZE);
    let mut high = MockDevice::new("high", BASE + SIZE, SIZE);
    let _ = low
        .port
        .expect_write()
        .with(eq(SIZE - 1), eq(0xAA), eq(MemWidth::Byte))
        .times(1)
        .return_const(());
    let _ = high
        .port
        .expect_write()
        .with(eq(0), eq(0xBB), eq(MemWidth::Byte))
        .times(1)
        .return_const(());

    let mut bus = Bus::new(UnmappedAccess::Fault);
    bus.add_device(Box::new(low)).expect("low registers");
    bus.add_device(Box::new(high)).expect("high registers");
    assert_eq!(bus.load_binary_at(&[0xAA, 0xBB], BASE + SIZE - 1), Ok(()));
}
