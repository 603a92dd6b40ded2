use std::sync::Arc;

use log::info;

use crate::CLOCK_HZ;
use crate::error::Error;
use crate::memory::{Ram, Rom};

const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// MBC2 carries 512x4 bits of internal RAM regardless of the header.
const MBC2_RAM_SIZE: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcType {
    NoMbc,
    Mbc1,
    Mbc2,
    Mbc3,
}

/// Bank-controller state. Control-register writes below 0x8000 never touch
/// ROM content; they reconfigure this state and slide the storage windows.
#[derive(Debug)]
enum MbcState {
    NoMbc,
    Mbc1 {
        /// 5-bit ROM bank register (00 coerced to 01).
        rom_bank: u8,
        /// Dual-purpose 2-bit register: upper ROM-bank bits in mode 0,
        /// RAM bank in mode 1.
        secondary: u8,
        mode: u8,
        ram_enable: bool,
    },
    Mbc2 {
        rom_bank: u8,
        ram_enable: bool,
    },
    Mbc3 {
        rom_bank: u8,
        /// Raw 4000-5FFF register: 00-03 selects a RAM bank, 08-0C an RTC
        /// register.
        ram_select: u8,
        ram_enable: bool,
        rtc: Rtc,
        latch_pending: bool,
    },
}

/// MBC3 real-time clock: five live registers advanced from the CPU clock,
/// plus a latched copy presented on reads so multi-byte reads see one
/// consistent instant.
#[derive(Debug)]
struct Rtc {
    regs: [u8; 5],
    latched: [u8; 5],
    cycles: u32,
}

impl Rtc {
    fn new() -> Self {
        Self {
            regs: [0; 5],
            latched: [0; 5],
            cycles: 0,
        }
    }

    fn halted(&self) -> bool {
        self.regs[4] & 0x40 != 0
    }

    fn days(&self) -> u16 {
        u16::from(self.regs[3]) | (u16::from(self.regs[4] & 0x01) << 8)
    }

    fn set_days(&mut self, days: u16) {
        self.regs[3] = (days & 0x00FF) as u8;
        self.regs[4] = (self.regs[4] & 0xFE) | ((days >> 8) & 0x0001) as u8;
    }

    fn latch(&mut self) {
        self.latched = self.regs;
    }

    fn read(&self, reg: u8) -> u8 {
        self.latched[usize::from(reg - 0x08)]
    }

    fn write(&mut self, reg: u8, val: u8) {
        self.regs[usize::from(reg - 0x08)] = val;
    }

    /// Advance the live clock from propagated CPU cycles; one emulated
    /// second per `CLOCK_HZ` cycles. The remainder carries across calls.
    fn step(&mut self, cycles: u32) {
        self.cycles += cycles;

        while self.cycles >= CLOCK_HZ {
            self.cycles -= CLOCK_HZ;

            if self.halted() {
                continue;
            }

            self.regs[0] += 1;
            if self.regs[0] == 60 {
                self.regs[0] = 0;
                self.regs[1] += 1;
                if self.regs[1] == 60 {
                    self.regs[1] = 0;
                    self.regs[2] += 1;
                    if self.regs[2] == 24 {
                        self.regs[2] = 0;
                        let days = (self.days() + 1) & 0x01FF;
                        self.set_days(days);
                        if days == 0 {
                            // Day-counter overflow latches the carry bit
                            // until software clears it.
                            self.regs[4] |= 0x80;
                        }
                    }
                }
            }
        }
    }
}

/// A loaded cartridge: ROM (fixed bank 0 plus a switchable window), optional
/// external RAM, and the bank controller the header named.
#[derive(Debug)]
pub struct Cartridge {
    rom: Rom,
    upper: Rom,
    ram: Ram,
    mbc: MbcState,
    mbc_type: MbcType,
    pub title: String,
}

impl Cartridge {
    /// Build a cartridge from a raw ROM image, deriving the controller type
    /// and RAM size from the header. Unknown codes are load-time errors.
    pub fn load(data: Vec<u8>) -> Result<Self, Error> {
        if data.len() < 0x150 {
            return Err(Error::TruncatedCartridge { len: data.len() });
        }

        let mbc_code = data[0x0147];
        let ram_code = data[0x0149];

        let mbc_type = match mbc_code {
            0x00 => MbcType::NoMbc,
            0x01..=0x03 => MbcType::Mbc1,
            0x05 | 0x06 => MbcType::Mbc2,
            0x0F..=0x13 => MbcType::Mbc3,
            _ => return Err(Error::UnsupportedCartridge { code: mbc_code }),
        };

        let ram_size = if mbc_type == MbcType::Mbc2 {
            MBC2_RAM_SIZE
        } else {
            match ram_code {
                0x00 => 0,
                0x01 => 0x800,
                0x02 => 0x2000,
                0x03 => 0x8000,
                _ => return Err(Error::UnsupportedRamSize { code: ram_code }),
            }
        };

        let title_bytes = &data[0x0134..0x0143];
        let end = title_bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(title_bytes.len());
        let title = String::from_utf8_lossy(&title_bytes[..end]).trim().to_string();

        let mbc = match mbc_type {
            MbcType::NoMbc => MbcState::NoMbc,
            MbcType::Mbc1 => MbcState::Mbc1 {
                rom_bank: 1,
                secondary: 0,
                mode: 0,
                ram_enable: false,
            },
            MbcType::Mbc2 => MbcState::Mbc2 {
                rom_bank: 1,
                ram_enable: false,
            },
            MbcType::Mbc3 => MbcState::Mbc3 {
                rom_bank: 1,
                ram_select: 0,
                ram_enable: false,
                rtc: Rtc::new(),
                latch_pending: false,
            },
        };

        let data: Arc<[u8]> = data.into();
        let rom = Rom::new(Arc::clone(&data), 0x0000);
        let mut upper = Rom::new(data, 0x4000);
        if upper.len() > ROM_BANK_SIZE {
            upper.set_window(ROM_BANK_SIZE)?;
        }

        info!("loaded cartridge {title:?} (mbc: {mbc_type:?}, ram: {ram_size} bytes)");

        Ok(Self {
            rom,
            upper,
            ram: Ram::new(ram_size, 0xA000),
            mbc,
            mbc_type,
            title,
        })
    }

    pub fn mbc_type(&self) -> MbcType {
        self.mbc_type
    }

    /// Advance the MBC3 real-time clock. No-op for the other controllers.
    pub fn step_rtc(&mut self, cycles: u32) {
        if let MbcState::Mbc3 { rtc, .. } = &mut self.mbc {
            rtc.step(cycles);
        }
    }

    pub fn read(&self, addr: u16) -> Result<u8, Error> {
        match (&self.mbc, addr) {
            (MbcState::NoMbc, 0x0000..=0x7FFF) => self.rom.read(addr),

            (_, 0x0000..=0x3FFF) => self.rom.read(addr),
            (_, 0x4000..=0x7FFF) => self.upper.read(addr),

            (MbcState::NoMbc, 0xA000..=0xBFFF) => self.ram.read(addr),
            (MbcState::Mbc1 { .. }, 0xA000..=0xBFFF) => self.ram.read(addr),
            (MbcState::Mbc2 { .. }, 0xA000..=0xA1FF) => {
                Ok(self.ram.read(addr)? & 0x0F)
            }
            (
                MbcState::Mbc3 {
                    ram_select, rtc, ..
                },
                0xA000..=0xBFFF,
            ) => match *ram_select {
                0x00..=0x03 => self.ram.read(addr),
                0x08..=0x0C => Ok(rtc.read(*ram_select)),
                _ => Ok(0),
            },

            _ => Err(Error::ReadOutOfRange { addr }),
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) -> Result<(), Error> {
        // Register arms flag `remap` instead of sliding the windows inline so
        // the controller-state borrow is released first.
        let mut remap = false;

        let result = match (&mut self.mbc, addr) {
            // ROM-only: writes below 0x8000 are silently ignored.
            (MbcState::NoMbc, 0x0000..=0x7FFF) => Ok(()),
            (MbcState::NoMbc, 0xA000..=0xBFFF) => self.ram.write(addr, val),

            (MbcState::Mbc1 { ram_enable, .. }, 0x0000..=0x1FFF) => {
                *ram_enable = val & 0x0F == 0x0A;
                Ok(())
            }
            (MbcState::Mbc1 { rom_bank, .. }, 0x2000..=0x3FFF) => {
                let val = if val == 0 { 1 } else { val };
                *rom_bank = val & 0x1F;
                remap = true;
                Ok(())
            }
            (MbcState::Mbc1 { secondary, .. }, 0x4000..=0x5FFF) => {
                *secondary = val & 0x03;
                remap = true;
                Ok(())
            }
            (MbcState::Mbc1 { mode, .. }, 0x6000..=0x7FFF) => {
                *mode = val & 0x01;
                remap = true;
                Ok(())
            }
            (MbcState::Mbc1 { ram_enable, .. }, 0xA000..=0xBFFF) => {
                if *ram_enable {
                    self.ram.write(addr, val)
                } else {
                    Ok(())
                }
            }

            (MbcState::Mbc2 { ram_enable, .. }, 0x0000..=0x1FFF) => {
                if addr & 0x0100 == 0 {
                    *ram_enable = val & 0x0F == 0x0A;
                }
                Ok(())
            }
            (MbcState::Mbc2 { rom_bank, .. }, 0x2000..=0x3FFF) => {
                if addr & 0x0100 != 0 {
                    let val = if val == 0 { 1 } else { val };
                    *rom_bank = val & 0x0F;
                    remap = true;
                }
                Ok(())
            }
            (MbcState::Mbc2 { ram_enable, .. }, 0xA000..=0xA1FF) => {
                if *ram_enable {
                    self.ram.write(addr, val & 0x0F)
                } else {
                    Ok(())
                }
            }

            (MbcState::Mbc3 { ram_enable, .. }, 0x0000..=0x1FFF) => {
                *ram_enable = val & 0x0F == 0x0A;
                Ok(())
            }
            (MbcState::Mbc3 { rom_bank, .. }, 0x2000..=0x3FFF) => {
                let val = if val == 0 { 1 } else { val };
                *rom_bank = val & 0x7F;
                remap = true;
                Ok(())
            }
            (MbcState::Mbc3 { ram_select, .. }, 0x4000..=0x5FFF) => {
                *ram_select = val;
                remap = true;
                Ok(())
            }
            (
                MbcState::Mbc3 {
                    latch_pending, rtc, ..
                },
                0x6000..=0x7FFF,
            ) => {
                // Writing 00 then 01 freezes a snapshot of the live clock.
                if val == 0x00 {
                    *latch_pending = true;
                } else {
                    if val == 0x01 && *latch_pending {
                        rtc.latch();
                    }
                    *latch_pending = false;
                }
                Ok(())
            }
            (
                MbcState::Mbc3 {
                    ram_enable,
                    ram_select,
                    rtc,
                    ..
                },
                0xA000..=0xBFFF,
            ) => {
                if !*ram_enable {
                    Ok(())
                } else {
                    match *ram_select {
                        0x00..=0x03 => self.ram.write(addr, val),
                        0x08..=0x0C => {
                            rtc.write(*ram_select, val);
                            Ok(())
                        }
                        _ => Ok(()),
                    }
                }
            }

            _ => Err(Error::WriteOutOfRange { addr }),
        };

        if result.is_ok() && remap {
            self.update_windows()?;
        }
        result
    }

    /// Recompute the switchable ROM/RAM window offsets from the controller
    /// registers.
    fn update_windows(&mut self) -> Result<(), Error> {
        match &self.mbc {
            MbcState::NoMbc => Ok(()),
            MbcState::Mbc1 {
                rom_bank,
                secondary,
                mode,
                ..
            } => {
                // Mode 0: the 2-bit register supplies the upper ROM-bank
                // bits. Mode 1: it selects the RAM bank and the ROM window
                // follows the 5-bit register alone.
                let bank = if *mode == 0 {
                    usize::from(*rom_bank) | (usize::from(*secondary) << 5)
                } else {
                    usize::from(*rom_bank)
                };
                self.upper.set_window(bank * ROM_BANK_SIZE)?;

                if !self.ram.is_empty() {
                    let ram_bank = if *mode == 1 {
                        usize::from(*secondary)
                    } else {
                        0
                    };
                    if ram_bank * RAM_BANK_SIZE < self.ram.len() {
                        self.ram.set_window(ram_bank * RAM_BANK_SIZE)?;
                    }
                }
                Ok(())
            }
            MbcState::Mbc2 { rom_bank, .. } => {
                self.upper.set_window(usize::from(*rom_bank) * ROM_BANK_SIZE)
            }
            MbcState::Mbc3 {
                rom_bank,
                ram_select,
                ..
            } => {
                self.upper.set_window(usize::from(*rom_bank) * ROM_BANK_SIZE)?;
                if *ram_select <= 0x03 && !self.ram.is_empty() {
                    let offset = usize::from(*ram_select) * RAM_BANK_SIZE;
                    if offset < self.ram.len() {
                        self.ram.set_window(offset)?;
                    }
                }
                Ok(())
            }
        }
    }
}
