//! Shared helpers for the integration tests: ROM image builders and
//! recording sink implementations.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dotmatrix_core::apu::AudioSink;
use dotmatrix_core::gameboy::VideoSink;
use dotmatrix_core::ppu::Frame;

/// Minimal ROM image: `banks` 16 KiB banks, the given controller and RAM
/// size codes, and each bank's first byte stamped with its index.
pub fn rom_image(mbc_code: u8, ram_code: u8, banks: usize) -> Vec<u8> {
    let mut data = vec![0u8; banks.max(2) * 0x4000];
    data[0x0147] = mbc_code;
    data[0x0149] = ram_code;
    for bank in 0..banks {
        data[bank * 0x4000] = bank as u8;
    }
    data
}

/// Audio sink that records queued samples and reports a scripted queue
/// depth.
#[derive(Clone)]
pub struct RecordingAudio {
    pub samples: Arc<Mutex<Vec<(u8, u8)>>>,
    pub queued: Arc<Mutex<u32>>,
    pub muted: Arc<Mutex<bool>>,
    pub rate: u32,
    pub buffer: u32,
}

impl RecordingAudio {
    pub fn new(rate: u32, buffer: u32) -> Self {
        Self {
            samples: Arc::new(Mutex::new(Vec::new())),
            queued: Arc::new(Mutex::new(0)),
            muted: Arc::new(Mutex::new(false)),
            rate,
            buffer,
        }
    }
}

impl AudioSink for RecordingAudio {
    fn queue(&mut self, left: u8, right: u8) {
        self.samples.lock().unwrap().push((left, right));
    }

    fn sample_rate(&self) -> u32 {
        self.rate
    }

    fn buffer_size(&self) -> u32 {
        self.buffer
    }

    fn queued(&self) -> u32 {
        *self.queued.lock().unwrap()
    }

    fn set_muted(&mut self, muted: bool) {
        *self.muted.lock().unwrap() = muted;
    }
}

/// Video sink that counts frames and keeps the most recent one.
#[derive(Clone)]
pub struct RecordingVideo {
    pub frames: Arc<Mutex<u32>>,
    pub last: Arc<Mutex<Option<Box<Frame>>>>,
}

impl RecordingVideo {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(0)),
            last: Arc::new(Mutex::new(None)),
        }
    }
}

impl VideoSink for RecordingVideo {
    fn draw(&mut self, frame: &Frame) {
        *self.frames.lock().unwrap() += 1;
        *self.last.lock().unwrap() = Some(Box::new(*frame));
    }
}
