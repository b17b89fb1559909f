// Last-published display state, shared with the attribute service.
//
// The control task is the only writer; the net task reads it when serving
// `digit` / `mode` queries. Critical-section cell: riscv32imc has no
// atomic RMW wide enough for the digit/mode pair.

use core::cell::Cell;

use critical_section::Mutex;
use sevseg_core::DisplayState;

static CURRENT: Mutex<Cell<DisplayState>> = Mutex::new(Cell::new(DisplayState::new()));

/// Publish the authoritative state. Control task only.
pub fn publish(state: DisplayState) {
    critical_section::with(|cs| CURRENT.borrow(cs).set(state));
}

/// Read the last published state.
pub fn read() -> DisplayState {
    critical_section::with(|cs| CURRENT.borrow(cs).get())
}
