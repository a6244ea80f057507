//! Shooting Gallery Firmware
//!
//! A player sprite near the top of a 128x64 SSD1306 OLED fires bullets
//! down at an enemy bouncing across the lower half. Three hits win the game.
//!
//! Runs on an STM32F401RE Nucleo board with the OLED on I2C1 (PB8=SCL,
//! PB9=SDA). The renderer, spawner and victory tasks run on an interrupt
//! executor so frame pushes preempt the blinker, which runs in thread mode.

#![no_std]
#![no_main]

mod channels;
mod tasks;

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_stm32::bind_interrupts;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::peripherals::I2C1;
use embassy_stm32::time::Hertz;
use embassy_time::Duration;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use gallery_display::{I2cConfig, Ssd1306};

bind_interrupts!(struct Irqs {
    I2C1_EV => i2c::EventInterruptHandler<I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<I2C1>;
});

/// Game tasks
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

/// Blinker
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

// USART6 is unused on this board; its vector drives the high priority executor
#[interrupt]
unsafe fn USART6() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("Shooting gallery starting...");

    let p = embassy_stm32::init(Default::default());

    // Setup I2C for OLED (PB8=SCL, PB9=SDA on the Arduino header)
    let bus = I2cConfig::default();
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(bus.frequency);
    i2c_config.scl_pullup = true;
    i2c_config.sda_pullup = true;
    i2c_config.timeout = Duration::from_millis(100);

    let i2c = I2c::new(
        p.I2C1, p.PB8, p.PB9, Irqs, p.DMA1_CH6, p.DMA1_CH0, i2c_config,
    );
    info!("I2C initialized at {} Hz", bus.frequency);

    let display = Ssd1306::new(i2c);

    interrupt::USART6.set_priority(Priority::P6);
    let spawner = EXECUTOR_HIGH.start(interrupt::USART6);
    spawner.spawn(tasks::renderer_task(display)).unwrap();
    spawner.spawn(tasks::spawner_task()).unwrap();
    spawner.spawn(tasks::victory_task()).unwrap();

    info!("All tasks spawned");

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(tasks::blinker_task()).unwrap();
    })
}
