use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::apu::{Apu, AudioSink};
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::{Error, Fault};
use crate::input::{InputSource, Joypad};
use crate::mmu::Mmu;
use crate::ppu::Frame;

/// How long a paused run loop sleeps between checks of the control flags.
const PAUSE_POLL: Duration = Duration::from_millis(10);

/// Consumer of completed frames, handed one grid of 2-bit color indices per
/// emulated frame.
pub trait VideoSink: Send {
    fn draw(&mut self, frame: &Frame);
}

/// Machine options. File loading and persistence are host concerns; this
/// carries only what the core consumes directly.
pub struct Config {
    /// Frame pacing target; the run loop sleeps at v-blank to hold this.
    pub frame_rate: u32,
    /// Optional 256-byte boot ROM image, mapped at 0x0000 until software
    /// writes FF50.
    pub boot_rom: Option<Vec<u8>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            boot_rom: None,
        }
    }
}

/// Cross-thread run-loop controls: a pause flag polled at each instruction
/// boundary and a stop flag that ends the loop after the current
/// instruction. Clone freely; all handles share the same flags.
#[derive(Clone, Default)]
pub struct Controls {
    pause: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&self) {
        self.pause.store(true, Ordering::Release);
    }

    pub fn resume(&self) {
        self.pause.store(false, Ordering::Release);
    }

    pub fn is_paused(&self) -> bool {
        self.pause.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}

/// The assembled console: CPU plus bus, with the host-facing sinks wired
/// in. There is no partial reset; restarting means building a fresh
/// machine.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    video: Option<Box<dyn VideoSink>>,
    frame_rate: u32,
    last_frame: Instant,
}

impl GameBoy {
    /// Wire a machine around a loaded cartridge. With a boot ROM the CPU
    /// starts at 0x0000 from power-on state; otherwise at 0x0100 with the
    /// post-boot register file. Assembly errors are load-time failures,
    /// raised before any instruction executes.
    pub fn new(
        cart: Cartridge,
        config: Config,
        video: Option<Box<dyn VideoSink>>,
        audio: Option<Box<dyn AudioSink>>,
        input: Option<Box<dyn InputSource>>,
    ) -> Result<Self, Error> {
        let apu = Apu::new(audio);
        let joypad = Joypad::new(input);

        let mut mmu = Mmu::with_io(apu, joypad);
        mmu.load_cart(cart)?;

        let cpu = if let Some(boot) = config.boot_rom {
            mmu.load_boot_rom(boot)?;
            Cpu::new_power_on()
        } else {
            Cpu::new()
        };

        Ok(Self {
            cpu,
            mmu,
            video,
            frame_rate: config.frame_rate.max(1),
            last_frame: Instant::now(),
        })
    }

    /// One instruction boundary: consume pending input, execute a single
    /// instruction (peripheral clocks and interrupt servicing included),
    /// and present a frame if one completed.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.mmu.joypad.poll(&mut self.mmu.if_reg);
        self.cpu.step(&mut self.mmu)?;

        if self.mmu.ppu.frame_ready() {
            self.present_frame();
        }

        Ok(())
    }

    /// Hand the completed frame to the sink, pacing to the configured
    /// frame rate. This sleep is the core's only wall-clock dependency.
    fn present_frame(&mut self) {
        let target = Duration::from_secs(1) / self.frame_rate;
        let elapsed = self.last_frame.elapsed();
        if elapsed < target {
            thread::sleep(target - elapsed);
        }

        if let Some(video) = self.video.as_mut() {
            video.draw(self.mmu.ppu.frame());
        }

        self.mmu.ppu.clear_frame_flag();
        self.last_frame = Instant::now();
    }

    /// Drive the machine until the stop flag is raised. The pause flag
    /// parks the loop without advancing any peripheral clock.
    pub fn run(&mut self, controls: &Controls) -> Result<(), Fault> {
        while !controls.is_stopped() {
            if controls.is_paused() {
                thread::sleep(PAUSE_POLL);
                continue;
            }
            self.step()?;
        }
        Ok(())
    }

    pub fn set_audio_muted(&mut self, muted: bool) {
        self.mmu.apu.set_muted(muted);
    }
}
