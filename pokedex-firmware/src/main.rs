//! Pokedex - Handheld Kanto Dex Firmware
//!
//! Main firmware binary for RP2040-based builds. Two buttons step a
//! cursor through the 151-entry catalog, a pot sets the volume, the
//! selected entry is drawn on a 128x64 SSD1306 OLED and its cry is
//! played through a DFPlayer Mini.
//!
//! Everything runs in one cooperative loop: a navigation event always
//! completes fully (cursor step, render, flush, playback trigger)
//! before the next input sample is taken.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::{I2C1, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use embassy_time::{with_timeout, Duration, Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pokedex_core::input::InputSampler;
use pokedex_core::session::Session;
use pokedex_core::{catalog, render};
use pokedex_drivers::{DfPlayer, Ssd1306};

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// UART buffers for the audio module link (must live forever)
static TX_BUF: StaticCell<[u8; 32]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 32]> = StaticCell::new();

/// Main loop poll tick
const POLL_TICK_MS: u64 = 10;

/// Spacing between audio module boot attempts
const AUDIO_RETRY_MS: u64 = 800;

/// The retry dot counter wraps after this many attempts so the
/// progress line never runs off the screen
const AUDIO_RETRY_DOTS: u8 = 14;

/// Volume level set right after the audio module comes up
const BOOT_VOLUME: u8 = 20;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Pokedex firmware starting...");

    let p = embassy_rp::init(Default::default());

    // OLED on I2C1 (SDA GPIO2, SCL GPIO3)
    let i2c = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c::Config::default());
    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init().await {
        // Fatal: without the display the device is useless, and the
        // log line is the only signal that ever gets out
        error!("OLED init failed: {:?}", e);
        core::future::pending::<()>().await;
    }
    info!("OLED initialized");

    let _ = render::draw_boot(&mut display, 0);
    display.flush().await.ok();

    // DFPlayer Mini on UART1 (TX GPIO8, RX GPIO9, 9600 8N1)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 9600;
    let tx_buf = TX_BUF.init([0u8; 32]);
    let rx_buf = RX_BUF.init([0u8; 32]);
    let uart = BufferedUart::new(p.UART1, Irqs, p.PIN_8, p.PIN_9, tx_buf, rx_buf, uart_config);
    let mut player = DfPlayer::new(uart);

    // Block until the module reports in. There is no retry budget: the
    // device has nothing useful to do before audio is up, so we keep
    // knocking with a visible dot counter that wraps.
    let mut attempts: u8 = 0;
    loop {
        match with_timeout(Duration::from_millis(AUDIO_RETRY_MS), player.begin()).await {
            Ok(Ok(storage)) => {
                info!("Audio module online, storage {=u16:#x}", storage);
                break;
            }
            Ok(Err(e)) => warn!("Audio module error: {:?}", e),
            Err(_) => debug!("Audio module not responding yet"),
        }
        attempts += 1;
        if attempts > AUDIO_RETRY_DOTS {
            attempts = 0;
        }
        let _ = render::draw_boot(&mut display, attempts);
        display.flush().await.ok();
    }

    let _ = render::draw_boot_ok(&mut display);
    display.flush().await.ok();
    Timer::after_millis(500).await;
    player.set_volume(BOOT_VOLUME).await.ok();

    // Buttons are active-low with internal pull-ups; the pot sits on
    // ADC0 (GPIO26)
    let btn_next = Input::new(p.PIN_14, Pull::Up);
    let btn_previous = Input::new(p.PIN_15, Pull::Up);
    let mut adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let mut pot = Channel::new_pin(p.PIN_26, Pull::None);

    let mut session = Session::new();
    let mut sampler = InputSampler::new();

    // First entry on screen plus its cry
    show_entry(&mut display, &mut player, session.cursor()).await;
    info!("Entering main loop");

    loop {
        let now = Instant::now().as_millis();

        // Each navigation event completes fully (render + playback)
        // before the next sample
        for direction in sampler.poll_buttons(now, btn_next.is_low(), btn_previous.is_low()) {
            let id = session.advance(direction);
            debug!("Cursor -> {}", id);
            show_entry(&mut display, &mut player, id).await;
        }

        if sampler.volume_due(now) {
            match adc.read(&mut pot).await {
                Ok(raw) => {
                    if let Some(level) = session.apply_volume(raw) {
                        debug!("Volume -> {}", level);
                        player.set_volume(level).await.ok();
                    }
                }
                Err(e) => warn!("Pot read failed: {:?}", e),
            }
        }

        Timer::after_millis(POLL_TICK_MS).await;
    }
}

/// Render one catalog entry and trigger its track
///
/// Render errors cannot occur (framebuffer writes are infallible) and
/// flush/playback are fire-and-forget, matching the device's "no
/// runtime error handling" posture.
async fn show_entry<I2C, U>(display: &mut Ssd1306<I2C>, player: &mut DfPlayer<U>, id: u16)
where
    I2C: embedded_hal_async::i2c::I2c,
    U: embedded_io_async::Read + embedded_io_async::Write,
{
    let name = catalog::name(id);
    let sprite = pokedex_assets::sprite(id);
    let _ = render::draw_entry(display, id, name, sprite);
    display.flush().await.ok();
    player.play(catalog::track(id)).await.ok();
}
