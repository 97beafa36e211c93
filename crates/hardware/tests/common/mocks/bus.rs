use mockall::automock;
use rv64emu_core::common::MemWidth;
use rv64emu_core::soc::devices::Device;

/// The data path of a device: what the bus forwards once it has routed an access.
#[automock]
pub trait Port {
    fn read(&mut self, offset: u64, width: MemWidth) -> u64;
    fn write(&mut self, offset: u64, value: u64, width: MemWidth);
}

/// A bus device with a fixed window whose accesses go to a `MockPort`.
#[derive(Debug)]
pub struct MockDevice {
    name: &'static str,
    base: u64,
    size: u64,
    pub port: MockPort,
}

impl MockDevice {
    pub fn new(name: &'static str, base: u64, size: u64) -> Self {
        Self {
            name,
            base,
            size,
            port: MockPort::new(),
        }
    }
}

impl Device for MockDevice {
    fn name(&self) -> &str {
        self.name
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base, self.size)
    }

    fn read(&mut self, offset: u64, width: MemWidth) -> u64 {
        self.port.read(offset, width)
    }

    fn write(&mut self, offset: u64, value: u64, width: MemWidth) {
        self.port.write(offset, value, width);
    }
}
