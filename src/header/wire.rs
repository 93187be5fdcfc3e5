// Host order <-> wire order.
//
// Every number in an NHD header is little endian. On a little endian host these
// are all no-ops, on a big endian host they swap. Swapping twice is a no-op, so
// encode and decode are the same operation.

/// Convert a host order u16 to wire order.
pub const fn to_wire16(host: u16) -> u16 {
    host.to_le()
}

/// Convert a wire order u16 back to host order.
pub const fn from_wire16(wire: u16) -> u16 {
    u16::from_le(wire)
}

/// Convert a host order u32 to wire order.
pub const fn to_wire32(host: u32) -> u32 {
    host.to_le()
}

/// Convert a wire order u32 back to host order.
pub const fn from_wire32(wire: u32) -> u32 {
    u32::from_le(wire)
}

/// A u16 that is already in wire order.
///
/// Keeping wire values in their own type means the only way to do math on
/// one is to go through [`WireU16::to_host`] first, and the only way to store
/// a host value is through [`WireU16::from_host`]. Forgetting to convert, or
/// converting twice, does not type check.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WireU16(u16);

/// A u32 that is already in wire order. See [`WireU16`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WireU32(u32);

impl WireU16 {
    pub const fn from_host(host: u16) -> Self {
        Self(to_wire16(host))
    }
    pub const fn to_host(self) -> u16 {
        from_wire16(self.0)
    }
    /// Take two bytes straight off the disk. No conversion happens, the bytes
    /// are already in wire order.
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_ne_bytes(bytes))
    }
    /// The two bytes that go on disk.
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_ne_bytes()
    }
}

impl WireU32 {
    pub const fn from_host(host: u32) -> Self {
        Self(to_wire32(host))
    }
    pub const fn to_host(self) -> u32 {
        from_wire32(self.0)
    }
    pub const fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_ne_bytes(bytes))
    }
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }
}
