use std::io;

use log::debug;

use crate::apu::Apu;
use crate::cartridge::Cartridge;
use crate::error::Error;
use crate::input::Joypad;
use crate::memory::{Ram, Rom};
use crate::ppu::Ppu;
use crate::timer::Timer;

const WRAM_SIZE: usize = 8192;
const HRAM_SIZE: usize = 127;
const IO_STUB_SIZE: usize = 128;

/// Owning component for one bus address. The dispatch table maps every
/// address to at most one of these; several addresses alias the same
/// component (VRAM and OAM both route to the PPU).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    BootRom,
    Cart,
    Vram,
    Oam,
    Wram,
    /// Echo RAM: forwards to the address 0x2000 below.
    Echo,
    /// FEA0-FEFF: reads zero, writes vanish.
    Unusable,
    /// Plain RAM behind otherwise-unhandled I/O addresses.
    IoStub,
    Joypad,
    Timer,
    IfReg,
    Apu,
    PpuReg,
    /// One-shot FF50 register that unmaps the boot ROM.
    BootUnmap,
    Hram,
    IeReg,
}

/// The bus: a 64K-entry address-to-owner table plus the owned peripherals.
/// Dispatch is a direct table lookup; an unmapped address is an access
/// violation, not a silent zero.
pub struct Mmu {
    map: Box<[Option<Slot>; 0x10000]>,
    pub ppu: Ppu,
    pub apu: Apu,
    pub timer: Timer,
    pub joypad: Joypad,
    pub cart: Option<Cartridge>,
    boot_rom: Option<Rom>,
    wram: Ram,
    hram: Ram,
    io_stub: Ram,
    pub if_reg: u8,
    pub ie_reg: u8,
}

impl Mmu {
    pub fn new() -> Self {
        Self::with_io(Apu::new(None), Joypad::new(None))
    }

    /// Build the bus around a pre-wired sound unit and joypad and install
    /// the standard DMG memory map. Cartridge windows stay unmapped until
    /// [`Self::load_cart`].
    pub fn with_io(apu: Apu, joypad: Joypad) -> Self {
        let mut mmu = Self {
            map: Box::new([None; 0x10000]),
            ppu: Ppu::new(),
            apu,
            timer: Timer::new(),
            joypad,
            cart: None,
            boot_rom: None,
            wram: Ram::new(WRAM_SIZE, 0xC000),
            hram: Ram::new(HRAM_SIZE, 0xFF80),
            io_stub: Ram::new(IO_STUB_SIZE, 0xFF00),
            if_reg: 0,
            ie_reg: 0,
        };

        // Later mappings overwrite earlier ones, so the catch-all I/O stub
        // goes in first and the real registers overlay it.
        let wired = mmu
            .map(Slot::Vram, 0x8000, 0x9FFF)
            .and_then(|()| mmu.map(Slot::Wram, 0xC000, 0xDFFF))
            .and_then(|()| mmu.map(Slot::Echo, 0xE000, 0xFDFF))
            .and_then(|()| mmu.map(Slot::Oam, 0xFE00, 0xFE9F))
            .and_then(|()| mmu.map(Slot::Unusable, 0xFEA0, 0xFEFF))
            .and_then(|()| mmu.map(Slot::IoStub, 0xFF00, 0xFF7F))
            .and_then(|()| mmu.map(Slot::Joypad, 0xFF00, 0xFF00))
            .and_then(|()| mmu.map(Slot::Timer, 0xFF04, 0xFF07))
            .and_then(|()| mmu.map(Slot::IfReg, 0xFF0F, 0xFF0F))
            .and_then(|()| mmu.map(Slot::Apu, 0xFF10, 0xFF14))
            .and_then(|()| mmu.map(Slot::Apu, 0xFF16, 0xFF1E))
            .and_then(|()| mmu.map(Slot::Apu, 0xFF20, 0xFF26))
            .and_then(|()| mmu.map(Slot::Apu, 0xFF30, 0xFF3F))
            .and_then(|()| mmu.map(Slot::PpuReg, 0xFF40, 0xFF4B))
            .and_then(|()| mmu.map(Slot::BootUnmap, 0xFF50, 0xFF50))
            .and_then(|()| mmu.map(Slot::Hram, 0xFF80, 0xFFFE))
            .and_then(|()| mmu.map(Slot::IeReg, 0xFFFF, 0xFFFF));
        debug_assert!(wired.is_ok());

        mmu
    }

    /// Assign every address in `from..=to` to `slot`, overwriting prior
    /// claims. Last mapping wins; this is how the boot ROM is unmapped and
    /// how tests carve out custom layouts.
    pub fn map(&mut self, slot: Slot, from: u16, to: u16) -> Result<(), Error> {
        if from > to {
            return Err(Error::InvalidMapping { from, to });
        }
        for addr in from..=to {
            self.map[usize::from(addr)] = Some(slot);
        }
        Ok(())
    }

    /// Remove every claim in `from..=to`; accesses there become violations.
    pub fn unmap(&mut self, from: u16, to: u16) -> Result<(), Error> {
        if from > to {
            return Err(Error::InvalidMapping { from, to });
        }
        for addr in from..=to {
            self.map[usize::from(addr)] = None;
        }
        Ok(())
    }

    /// Install a cartridge and expose its ROM/RAM windows.
    pub fn load_cart(&mut self, cart: Cartridge) -> Result<(), Error> {
        self.cart = Some(cart);
        self.map(Slot::Cart, 0x0000, 0x7FFF)?;
        self.map(Slot::Cart, 0xA000, 0xBFFF)
    }

    /// Overlay a 256-byte boot ROM at the bottom of the address space. A
    /// write of 01 to FF50 hands the range back to the cartridge.
    pub fn load_boot_rom(&mut self, data: Vec<u8>) -> Result<(), Error> {
        self.boot_rom = Some(Rom::new(data, 0x0000));
        self.map(Slot::BootRom, 0x0000, 0x00FF)
    }

    pub fn read(&mut self, addr: u16) -> Result<u8, Error> {
        match self.map[usize::from(addr)] {
            None => Err(Error::ReadAccessViolation { addr }),
            Some(slot) => self.read_slot(slot, addr),
        }
    }

    fn read_slot(&mut self, slot: Slot, addr: u16) -> Result<u8, Error> {
        match slot {
            Slot::BootRom => match self.boot_rom.as_ref() {
                Some(rom) => rom.read(addr),
                None => Err(Error::ReadAccessViolation { addr }),
            },
            Slot::Cart => match self.cart.as_ref() {
                Some(cart) => cart.read(addr),
                None => Err(Error::ReadAccessViolation { addr }),
            },
            Slot::Vram | Slot::Oam => self.ppu.read(addr),
            Slot::Wram => self.wram.read(addr),
            Slot::Echo => self.read(addr - 0x2000),
            Slot::Unusable => Ok(0),
            Slot::IoStub => self.io_stub.read(addr),
            Slot::Joypad => Ok(self.joypad.read(&mut self.if_reg)),
            Slot::Timer => Ok(self.timer.read(addr)),
            Slot::IfReg => Ok(self.if_reg),
            Slot::Apu => Ok(self.apu.read_reg(addr)),
            Slot::PpuReg => {
                if addr == 0xFF46 {
                    Ok(0)
                } else {
                    Ok(self.ppu.read_reg(addr))
                }
            }
            Slot::BootUnmap => Err(Error::ReadAccessViolation { addr }),
            Slot::Hram => self.hram.read(addr),
            Slot::IeReg => Ok(self.ie_reg),
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) -> Result<(), Error> {
        match self.map[usize::from(addr)] {
            None => Err(Error::WriteAccessViolation { addr }),
            Some(slot) => self.write_slot(slot, addr, val),
        }
    }

    fn write_slot(&mut self, slot: Slot, addr: u16, val: u8) -> Result<(), Error> {
        match slot {
            // The boot ROM shadows the cartridge; writes land nowhere.
            Slot::BootRom => Ok(()),
            Slot::Cart => match self.cart.as_mut() {
                Some(cart) => cart.write(addr, val),
                None => Err(Error::WriteAccessViolation { addr }),
            },
            Slot::Vram | Slot::Oam => self.ppu.write(addr, val),
            Slot::Wram => self.wram.write(addr, val),
            Slot::Echo => self.write(addr - 0x2000, val),
            Slot::Unusable => Ok(()),
            Slot::IoStub => self.io_stub.write(addr, val),
            Slot::Joypad => {
                self.joypad.write(val);
                Ok(())
            }
            Slot::Timer => {
                self.timer.write(addr, val);
                Ok(())
            }
            Slot::IfReg => {
                self.if_reg = val;
                Ok(())
            }
            Slot::Apu => {
                self.apu.write_reg(addr, val);
                Ok(())
            }
            Slot::PpuReg => {
                if addr == 0xFF46 {
                    self.oam_dma(val)
                } else {
                    self.ppu.write_reg(addr, val);
                    Ok(())
                }
            }
            Slot::BootUnmap => {
                if val == 0x01 {
                    debug!("boot ROM unmapped, cartridge visible at 0000");
                    self.boot_rom = None;
                    self.map(Slot::Cart, 0x0000, 0x00FF)?;
                }
                Ok(())
            }
            Slot::Hram => self.hram.write(addr, val),
            Slot::IeReg => {
                self.ie_reg = val;
                Ok(())
            }
        }
    }

    /// OAM DMA: copy 160 bytes from `source << 8` into the sprite
    /// attribute table.
    fn oam_dma(&mut self, source: u8) -> Result<(), Error> {
        let src = u16::from(source) << 8;
        for i in 0..0xA0u16 {
            let byte = self.read(src + i)?;
            self.ppu.oam_write(usize::from(i), byte);
        }
        Ok(())
    }

    /// Hex-dump the entire mapped address space for diagnostics.
    pub fn dump(&mut self, out: &mut dyn io::Write) -> io::Result<()> {
        for addr in 0..=0xFFFFu16 {
            if self.map[usize::from(addr)].is_none() {
                writeln!(out, "${addr:04x}: not mapped")?;
                continue;
            }
            match self.read(addr) {
                Ok(val) => writeln!(out, "${addr:04x}: {val:02x}")?,
                Err(e) => writeln!(out, "${addr:04x}: {e}")?,
            }
        }
        Ok(())
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}
