// Firmware for an eight-line GPIO seven-segment display (ESP32-C3)

#![no_std]

extern crate alloc;

pub mod board;
pub mod drivers;
pub mod net;
pub mod status;
pub mod tasks;
