// WiFi attribute service — the remote control surface
//
// ┌────────────────────────────────────────────────────────────┐
// │  SET YOUR WIFI CREDENTIALS IN THE CONSTANTS BELOW          │
// └────────────────────────────────────────────────────────────┘
//
// Joins the configured network and serves the attribute line protocol on
// CONTROL_PORT, one command per line:
//
//     digit            read the displayed digit
//     digit 5          set it
//     mode             read "active" or "sleep"
//     mode a|active    wake the display
//     mode s|sleep     dark, digit retained
//
// Replies are a single line: the value, "ok", or "err: <reason>". An
// invalid write is reported to the client and dropped; the display
// state is untouched.
//
// No embassy task is spawned for the network runner — it is multiplexed
// with the socket future via `select`, so one task owns the whole stack.

use alloc::string::String;
use core::fmt::Write as FmtWrite;

use embassy_futures::select::{Either, select};
use embassy_net::IpListenEndpoint;
use embassy_net::tcp::TcpSocket;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write as AsyncWrite;
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{ClientConfig, Config, ModeConfig};
use log::{info, warn};
use sevseg_core::{Command, command};

use crate::status;
use crate::tasks::{CONTROL, Request};

// ── WiFi credentials (edit these!) ──────────────────────────────────

const SSID: &str = "workshop_2g";
const PASSWORD: &str = "changeme123";

/// TCP port of the attribute service.
pub const CONTROL_PORT: u16 = 7777;

const RETRY_DELAY_SECS: u64 = 10;

/// Longest accepted command line; anything bigger is dropped whole.
const LINE_MAX: usize = 64;
const REPLY_MAX: usize = 32;

/// Bring up WiFi, then serve attribute clients forever. Unrecoverable
/// bring-up failures end the task; the button surface keeps working.
#[embassy_executor::task]
pub async fn net_task(wifi: WIFI<'static>) {
    info!("net: initialising radio");

    let radio = match esp_radio::init() {
        Ok(r) => r,
        Err(e) => {
            warn!("net: radio init failed: {:?}", e);
            return;
        }
    };

    let (mut wifi_ctrl, interfaces) = match esp_radio::wifi::new(&radio, wifi, Config::default()) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("net: wifi init failed: {:?}", e);
            return;
        }
    };

    let client_cfg = ClientConfig::default()
        .with_ssid(String::from(SSID))
        .with_password(String::from(PASSWORD));

    if let Err(e) = wifi_ctrl.set_config(&ModeConfig::Client(client_cfg)) {
        warn!("net: wifi config failed: {:?}", e);
        return;
    }

    if let Err(e) = wifi_ctrl.start_async().await {
        warn!("net: wifi start failed: {:?}", e);
        return;
    }

    while let Err(e) = wifi_ctrl.connect_async().await {
        warn!(
            "net: connect to '{}' failed: {:?}, retrying in {}s",
            SSID, e, RETRY_DELAY_SECS
        );
        Timer::after(Duration::from_secs(RETRY_DELAY_SECS)).await;
    }
    info!("net: connected to '{}'", SSID);

    let net_config = embassy_net::Config::dhcpv4(Default::default());
    let seed = {
        let rng = esp_hal::rng::Rng::new();
        (rng.random() as u64) << 32 | rng.random() as u64
    };

    let mut resources = embassy_net::StackResources::<3>::new();
    let (stack, mut runner) = embassy_net::new(interfaces.sta, net_config, &mut resources, seed);

    // Poll the network runner while waiting for DHCP.
    match select(runner.run(), stack.wait_config_up()).await {
        Either::Second(()) => {}
        // runner.run() returns `!` — this arm is unreachable
        _ => unreachable!(),
    }

    if let Some(cfg) = stack.config_v4() {
        info!("net: listening on {}:{}", cfg.address.address(), CONTROL_PORT);
    }

    let mut rx_buf = [0u8; 512];
    let mut tx_buf = [0u8; 512];

    loop {
        match select(
            runner.run(),
            serve_one_client(stack, &mut rx_buf, &mut tx_buf),
        )
        .await
        {
            Either::Second(()) => continue, // client gone, accept the next
            _ => unreachable!(),
        }
    }
}

// ── Attribute serving ───────────────────────────────────────────────

/// Accept one connection and serve attribute lines until the peer closes.
async fn serve_one_client(stack: embassy_net::Stack<'_>, rx_buf: &mut [u8], tx_buf: &mut [u8]) {
    let mut socket = TcpSocket::new(stack, rx_buf, tx_buf);
    socket.set_timeout(Some(Duration::from_secs(30)));

    if socket
        .accept(IpListenEndpoint {
            addr: None,
            port: CONTROL_PORT,
        })
        .await
        .is_err()
    {
        Timer::after(Duration::from_millis(200)).await;
        return;
    }

    let mut line = [0u8; LINE_MAX];
    let mut len = 0usize;
    let mut reply = [0u8; REPLY_MAX];

    'conn: loop {
        match socket.read(&mut line[len..]).await {
            Ok(0) => break,
            Ok(n) => {
                len += n;

                // handle every complete line in the buffer
                while let Some(nl) = line[..len].iter().position(|&b| b == b'\n') {
                    let text = core::str::from_utf8(&line[..nl]).unwrap_or("");
                    let reply_len = respond(text, &mut reply).await;
                    line.copy_within(nl + 1..len, 0);
                    len -= nl + 1;

                    if socket.write_all(&reply[..reply_len]).await.is_err() {
                        break 'conn;
                    }
                }

                if len == line.len() {
                    warn!("net: oversized line dropped");
                    len = 0;
                }
            }
            Err(_) => break,
        }
    }

    let _ = socket.flush().await;
    Timer::after(Duration::from_millis(50)).await;
    socket.close();
    Timer::after(Duration::from_millis(50)).await;
    socket.abort();
}

/// Execute one attribute line, format the reply, return its length.
///
/// Reads answer from the last published state; writes go through the
/// CONTROL channel so the control task stays the only state owner.
async fn respond(line: &str, reply: &mut [u8]) -> usize {
    match command::parse_line(line) {
        Ok(Command::GetDigit) => stack_fmt(reply, |w| {
            let _ = write!(w, "{}\n", status::read().digit());
        }),
        Ok(Command::GetMode) => stack_fmt(reply, |w| {
            let _ = write!(w, "{}\n", status::read().mode());
        }),
        Ok(Command::SetDigit(digit)) => {
            CONTROL.send(Request::SetDigit(digit)).await;
            ok_reply(reply)
        }
        Ok(Command::SetMode(mode)) => {
            CONTROL.send(Request::SetMode(mode)).await;
            ok_reply(reply)
        }
        Err(e) => {
            warn!("net: {}", e);
            stack_fmt(reply, |w| {
                let _ = write!(w, "err: {}\n", e);
            })
        }
    }
}

fn ok_reply(reply: &mut [u8]) -> usize {
    stack_fmt(reply, |w| {
        let _ = write!(w, "ok\n");
    })
}

// ── Stack-based fmt helper ──────────────────────────────────────────

/// Format into a stack buffer, return the number of bytes written.
fn stack_fmt(buf: &mut [u8], f: impl FnOnce(&mut StackWriter<'_>)) -> usize {
    let mut w = StackWriter { buf, pos: 0 };
    f(&mut w);
    w.pos
}

struct StackWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl core::fmt::Write for StackWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let room = self.buf.len() - self.pos;
        let n = bytes.len().min(room);
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        Ok(())
    }
}
