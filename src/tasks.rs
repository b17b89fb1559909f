// Embassy spawned tasks — button polling and display control
//
//   • `input_task`   — owns InputDriver and the button GPIOs, polls every
//                      10 ms, publishes debounced events through
//                      INPUT_EVENTS.
//
//   • `control_task` — owns the segment driver and the authoritative
//                      DisplayState. Consumes button events and validated
//                      requests from the attribute service, applies the
//                      resulting pattern (clear before set), and publishes
//                      the new state for readers.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Ticker};
use log::{info, warn};
use sevseg_core::{DisplayState, Mode, SegmentSet};

use crate::board::{Button, Display};
use crate::drivers::input::{Event, InputDriver};
use crate::status;

/// Capacity of the input event channel.
///
/// At 10 ms polling the control task drains events every tick; 8 slots
/// absorbs a worst-case press/release burst.
pub const INPUT_CHANNEL_CAP: usize = 8;

/// Channel carrying debounced button events from the input task to the
/// control task.
pub static INPUT_EVENTS: Channel<CriticalSectionRawMutex, Event, INPUT_CHANNEL_CAP> =
    Channel::new();

/// A validated write from the attribute service.
///
/// Range-checked again by `DisplayState` on receipt, same as every other
/// path into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    SetDigit(u8),
    SetMode(Mode),
}

pub const CONTROL_CHANNEL_CAP: usize = 4;

/// Writes from the attribute service to the control task.
pub static CONTROL: Channel<CriticalSectionRawMutex, Request, CONTROL_CHANNEL_CAP> =
    Channel::new();

/// The button polling task.
#[embassy_executor::task]
pub async fn input_task(mut input: InputDriver) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(10));

    loop {
        ticker.next().await;

        // try_send: if the channel is full we drop the event. In practice
        // the control task drains faster than events arrive.
        if let Some(ev) = input.poll() {
            let _ = INPUT_EVENTS.try_send(ev);
        }
    }
}

/// The display control task. Single owner of the segment pins, so every
/// state change funnels through here and pin writes never interleave.
#[embassy_executor::task]
pub async fn control_task(mut display: Display) -> ! {
    let mut state = DisplayState::new();

    // Boot: digit 0, active.
    display.apply(state.pattern()).unwrap();
    status::publish(state);
    info!("display: ready (digit 0, active)");

    loop {
        let pattern = match select(CONTROL.receive(), INPUT_EVENTS.receive()).await {
            Either::First(req) => handle_request(&mut state, req),
            Either::Second(ev) => handle_button(&mut state, ev),
        };

        if let Some(pattern) = pattern {
            display.apply(pattern).unwrap();
            status::publish(state);
        }
    }
}

fn handle_request(state: &mut DisplayState, req: Request) -> Option<SegmentSet> {
    match req {
        Request::SetDigit(digit) => match state.set_digit(digit) {
            Ok(pattern) => {
                info!("display: digit {}", digit);
                Some(pattern)
            }
            Err(e) => {
                warn!("display: {}", e);
                None
            }
        },
        Request::SetMode(mode) => {
            info!("display: mode {}", mode);
            Some(state.set_mode(mode))
        }
    }
}

/// Map a debounced button event onto the display state. Up/Down step on
/// press and keep stepping on autorepeat while held; Mode toggles on
/// press only.
fn handle_button(state: &mut DisplayState, ev: Event) -> Option<SegmentSet> {
    match ev {
        Event::Press(Button::Mode) => {
            let mode = state.mode().toggled();
            info!("display: mode {} (button)", mode);
            Some(state.set_mode(mode))
        }
        Event::Press(btn @ (Button::Up | Button::Down))
        | Event::LongPress(btn @ (Button::Up | Button::Down))
        | Event::Repeat(btn @ (Button::Up | Button::Down)) => {
            let digit = match btn {
                Button::Up => state.next_digit(),
                _ => state.prev_digit(),
            };
            info!("display: digit {} ({} button)", digit, btn);
            state.set_digit(digit).ok()
        }
        _ => None,
    }
}
