use std::fmt;

use thiserror::Error;

/// Things that can go wrong inside the emulated machine.
///
/// Every variant here is fatal to the running instance: real hardware that
/// executes garbage locks up, and there is no well-defined way to resume a
/// CPU mid-instruction. The host's only recovery is building a fresh machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Read from an address no component has claimed.
    #[error("read access violation at {addr:04X}")]
    ReadAccessViolation { addr: u16 },

    /// Write to an address no component has claimed, or to a component that
    /// forbids the operation (e.g. the boot-ROM unmapper register).
    #[error("write access violation at {addr:04X}")]
    WriteAccessViolation { addr: u16 },

    /// Read outside a storage device's declared window.
    #[error("out of range read at {addr:04X}")]
    ReadOutOfRange { addr: u16 },

    /// Write outside a storage device's declared window.
    #[error("out of range write at {addr:04X}")]
    WriteOutOfRange { addr: u16 },

    /// Window offset beyond the end of a storage device's backing buffer.
    #[error("window offset out of range ({offset})")]
    WindowOutOfRange { offset: usize },

    /// Invalid bus mapping request.
    #[error("invalid mapping from {from:04X} to {to:04X}")]
    InvalidMapping { from: u16, to: u16 },

    /// Opcode with no table entry.
    #[error("no such instruction {opcode:02X}")]
    UnknownOpcode { opcode: u8 },

    /// Cartridge header names a bank controller this core does not support.
    #[error("cartridge type not supported ({code:02X})")]
    UnsupportedCartridge { code: u8 },

    /// Cartridge header carries an unknown RAM size code.
    #[error("cartridge RAM size not supported ({code:02X})")]
    UnsupportedRamSize { code: u8 },

    /// Cartridge image too small to contain a header.
    #[error("cartridge image truncated ({len} bytes)")]
    TruncatedCartridge { len: usize },

    /// Sprite coordinate that falls outside every visible range. The
    /// selection pass filters these out, so hitting this means the filter
    /// and the renderer disagree.
    #[error("sprite coordinate {coord} outside any visible range")]
    SpriteCoordinate { coord: u8 },
}

/// Full CPU register context captured at the point of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshot {
    pub a: u8,
    pub f: u8,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
    pub ime: bool,
    pub ie: u8,
    pub r#if: u8,
}

impl fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[A: {:02x}] [BC: {:04x}] [DE: {:04x}] [HL: {:04x}] [SP: {:04x}] [PC: {:04x}] [ZNHC: {:04b}] [IME: {}] [IE: {:02x}] [IF: {:02x}]",
            self.a,
            self.bc,
            self.de,
            self.hl,
            self.sp,
            self.pc,
            self.f >> 4,
            self.ime,
            self.ie,
            self.r#if,
        )
    }
}

/// A fatal failure of the running machine: the underlying error plus the CPU
/// state at the moment it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {cause} ({registers})")]
pub struct Fault {
    pub context: &'static str,
    #[source]
    pub cause: Error,
    pub registers: RegisterSnapshot,
}
