#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

mod board;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::board::{AlarmTicker, Buttons, LedPin, LinePin};
    use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};
    use rp_pico::hal::{
        clocks::init_clocks_and_plls,
        fugit::{ExtU32, MicrosDurationU32},
        sio::Sio,
        timer::{Alarm, Alarm0, Alarm1, Timer},
        watchdog::Watchdog,
    };
    use wokwi_stopwatch::{Config, Multiplexer, PinBank, Stopwatch};

    const CONFIG: Config = Config::DEFAULT;

    type Display = Multiplexer<PinBank<LinePin>, Timer>;

    // Every path to the clock value goes through this one lock
    #[shared]
    struct Shared {
        stopwatch: Stopwatch<AlarmTicker<Alarm0>>,
        buttons: Buttons,
    }

    #[local]
    struct Local {
        display: Display,
        refresh_alarm: Alarm1,
        refresh_period: MicrosDurationU32,
        led: LedPin,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let select = [
            pins.gpio0.into_push_pull_output().into_dyn_pin(),
            pins.gpio1.into_push_pull_output().into_dyn_pin(),
            pins.gpio2.into_push_pull_output().into_dyn_pin(),
            pins.gpio3.into_push_pull_output().into_dyn_pin(),
            pins.gpio4.into_push_pull_output().into_dyn_pin(),
            pins.gpio5.into_push_pull_output().into_dyn_pin(),
        ];
        let bcd = [
            pins.gpio6.into_push_pull_output().into_dyn_pin(),
            pins.gpio7.into_push_pull_output().into_dyn_pin(),
            pins.gpio8.into_push_pull_output().into_dyn_pin(),
            pins.gpio9.into_push_pull_output().into_dyn_pin(),
        ];
        let bank = PinBank::new(select, bcd).unwrap();

        // The level stays latched after the pin handle goes away
        let mut decoder_enable = pins.gpio10.into_push_pull_output();
        decoder_enable.set_high().unwrap();

        let buttons = Buttons::new(
            pins.gpio11.into_pull_up_input(),
            pins.gpio12.into_pull_up_input(),
            pins.gpio13.into_pull_down_input(),
        );

        let led = pins.led.into_push_pull_output();

        let tick_alarm = timer.alarm_0().unwrap();
        let mut refresh_alarm = timer.alarm_1().unwrap();

        // Timer is Copy: the ticker reads its counter, the display delays on it
        let display = Multiplexer::new(bank, timer, CONFIG.settle_us);

        let refresh_period = CONFIG.refresh_period_us.micros();
        refresh_alarm.schedule(refresh_period).unwrap();
        refresh_alarm.enable_interrupt();

        let ticker = AlarmTicker::new(tick_alarm, timer, CONFIG.tick_period_us);
        let stopwatch = Stopwatch::new(ticker, &CONFIG).unwrap();

        defmt::info!("stopwatch running from {}", stopwatch.snapshot());

        (
            Shared { stopwatch, buttons },
            Local {
                display,
                refresh_alarm,
                refresh_period,
                led,
            },
            init::Monotonics(),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    // Hardware Task: Timer Interrupt (1Hz)
    #[task(binds = TIMER_IRQ_0, priority = 2, shared = [stopwatch, buttons], local = [led])]
    fn tick(ctx: tick::Context) {
        let mut stopwatch = ctx.shared.stopwatch;
        let mut buttons = ctx.shared.buttons;
        let led = ctx.local.led;

        buttons.lock(|b| {
            stopwatch.lock(|sw| {
                // Edges that landed together with this tick
                match sw.on_tick(b.pending()) {
                    Ok(applied) => b.clear(applied),
                    Err(_) => defmt::warn!("tick alarm could not be re-armed"),
                }
                if sw.is_running() {
                    led.toggle().ok();
                }
            })
        });
    }

    // Hardware Task: GPIO Interrupt (reset / pause / resume edges)
    #[task(binds = IO_IRQ_BANK0, priority = 2, shared = [stopwatch, buttons])]
    fn control(ctx: control::Context) {
        let mut stopwatch = ctx.shared.stopwatch;
        let mut buttons = ctx.shared.buttons;

        let edges = buttons.lock(|b| {
            let edges = b.pending();
            b.clear(edges);
            edges
        });
        if edges.is_empty() {
            return;
        }

        stopwatch.lock(|sw| {
            if sw.apply(edges).is_err() {
                defmt::warn!("tick alarm rejected {}", edges);
            }
        });
    }

    // Hardware Task: Display refresh (~5ms), lowest priority so ticks and edges preempt it
    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [stopwatch], local = [display, refresh_alarm, refresh_period])]
    fn refresh(mut ctx: refresh::Context) {
        let alarm = ctx.local.refresh_alarm;
        alarm.clear_interrupt();
        // Re-armed before drawing, so the next firing follows right after this one
        if alarm.schedule(*ctx.local.refresh_period).is_err() {
            defmt::warn!("refresh alarm could not be re-armed");
        }

        let clock = ctx.shared.stopwatch.lock(|sw| sw.snapshot());

        if ctx.local.display.refresh(&clock).is_err() {
            defmt::warn!("display lines could not be driven");
        }
    }
}
