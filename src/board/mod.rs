//! Board Support Package for the display unit.
//!
//! This module provides hardware abstraction for the seven-segment board.
//! It maps physical hardware to named subsystems so that driver and task
//! code doesn't need to know GPIO numbers or peripheral details.

pub mod button;
pub mod pins;

pub use button::Button;

use esp_hal::{
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::{Peripherals, WIFI},
};
use sevseg_core::SegmentDriver;

// Type Aliases
pub type Display = SegmentDriver<Output<'static>>;

/// Input subsystem hardware: the three panel buttons.
pub struct InputHw {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub mode: Input<'static>,
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub display: Display,
    pub input: InputHw,
    pub wifi: WIFI<'static>,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        // Segment lines start low: every segment dark until the first
        // pattern is applied. Array order is the SegmentSet bit order.
        let segments = [
            Output::new(p.GPIO0, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO1, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO2, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO3, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO4, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO5, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO6, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO7, Level::Low, OutputConfig::default()),
        ];

        let input = InputHw {
            up: Input::new(p.GPIO9, InputConfig::default().with_pull(Pull::Up)),
            down: Input::new(p.GPIO20, InputConfig::default().with_pull(Pull::Up)),
            mode: Input::new(p.GPIO21, InputConfig::default().with_pull(Pull::Up)),
        };

        Board {
            display: SegmentDriver::new(segments),
            input,
            wifi: p.WIFI,
        }
    }
}
