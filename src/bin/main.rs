// sevseg-fw entry point
//
// Boot sequence: logger -> HAL -> heap -> scheduler -> board -> tasks
//
// The control task owns the segment driver and all display state; the
// input task feeds it debounced button events; the net task feeds it
// validated attribute writes and reads back the published state. The
// display comes up showing digit 0 in active mode.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use log::info;
use static_cell::StaticCell;

use sevseg_fw::board::Board;
use sevseg_fw::drivers::input::InputDriver;
use sevseg_fw::net;
use sevseg_fw::tasks;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

static EXECUTOR: StaticCell<esp_rtos::embassy::Executor> = StaticCell::new();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // the radio stack allocates from this heap
    esp_alloc::heap_allocator!(size: 96 * 1024);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    esp_rtos::start(timg0.timer0);
    info!("scheduler started.");

    let board = Board::init(peripherals);
    let input = InputDriver::new(board.input);
    info!("hardware initialized.");

    let executor = EXECUTOR.init(esp_rtos::embassy::Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(tasks::control_task(board.display));
        spawner.must_spawn(tasks::input_task(input));
        spawner.must_spawn(net::net_task(board.wifi));
    })
}
