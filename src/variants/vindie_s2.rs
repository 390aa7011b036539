//! Adafruit Vindie S2.
//!
//! Two hardware revisions ship under the same board name. Each keeps its own
//! table; `rev_b` is current. Revision A has no external SPI header, so its
//! module defines no SPI names and code that needs them fails to build:
//!
//! ```compile_fail
//! let _cs = esp32s2_variants::variants::vindie_s2::rev_a::SS;
//! ```
//!
//! ```
//! use esp32s2_variants::variants::vindie_s2::rev_b;
//! assert_eq!((rev_b::SS, rev_b::MOSI, rev_b::SCK, rev_b::MISO), (4, 5, 6, 7));
//! ```

pub const BOARD_NAME: &str = "adafruit_vindie_s2";

/// Bindings identical on both revisions.
mod common {
    use crate::chip;
    use crate::pin::GpioNum;

    pub const BOARD_NAME: &str = super::BOARD_NAME;

    pub const USB_VID: u16 = 0x239A;
    pub const USB_PID: u16 = 0x815F;
    pub const USB_MANUFACTURER: &str = "Adafruit";
    pub const USB_PRODUCT: &str = "Vindie S2";
    /// Empty: serial comes from the MAC address
    pub const USB_SERIAL: &str = "";

    pub const EXTERNAL_NUM_INTERRUPTS: u8 = chip::EXTERNAL_NUM_INTERRUPTS;
    pub const NUM_DIGITAL_PINS: u8 = chip::NUM_DIGITAL_PINS;
    pub const NUM_ANALOG_INPUTS: u8 = chip::NUM_ANALOG_INPUTS;

    pub const fn analog_input_to_digital_pin(p: u8) -> GpioNum {
        chip::adc_channel_to_gpio(p, NUM_ANALOG_INPUTS)
    }

    pub const fn digital_pin_to_interrupt(p: u8) -> GpioNum {
        chip::pin_to_interrupt(p, NUM_DIGITAL_PINS)
    }

    pub const fn digital_pin_has_pwm(p: u8) -> bool {
        p < chip::PWM_PIN_LIMIT
    }

    pub const LED_BUILTIN: u8 = 18;
    /// Older name kept for sketches that still use it.
    pub const BUILTIN_LED: u8 = LED_BUILTIN;

    /// Brightness `neopixelWrite()`/`digitalWrite(RGB_BUILTIN)` use.
    pub const RGB_BRIGHTNESS: u8 = 64;
    pub const NEOPIXEL_NUM: u8 = 1;

    /// BOOT0 switch
    pub const PIN_BUTTON1: u8 = 0;

    pub const TX: u8 = 45;
    pub const RX: u8 = 21;
    pub const TX1: u8 = TX;
    pub const RX1: u8 = RX;
}

/// First revision: I2C on 41/42, fan on 33, no SPI header.
pub mod rev_a {
    pub use super::common::*;

    use crate::chip;
    use crate::pin::PinBinding;
    use crate::variant::{BoardVariant, Capabilities, UsbIdentity};

    pub const REVISION: &str = "A";

    pub const PIN_NEOPIXEL: u8 = 26;
    /// Logical pin selecting the NeoPixel in `digitalWrite()`.
    pub const RGB_BUILTIN: u8 = PIN_NEOPIXEL + chip::SOC_GPIO_PIN_COUNT;

    pub const SDA: u8 = 41;
    pub const SCL: u8 = 42;

    pub const FAN: u8 = 33;

    static BINDINGS: &[PinBinding] = &[
        PinBinding::signal("LED_BUILTIN", LED_BUILTIN),
        PinBinding::alias("BUILTIN_LED", BUILTIN_LED, "LED_BUILTIN"),
        PinBinding::signal("PIN_NEOPIXEL", PIN_NEOPIXEL),
        PinBinding::virtual_pin("RGB_BUILTIN", RGB_BUILTIN, "PIN_NEOPIXEL"),
        PinBinding::signal("PIN_BUTTON1", PIN_BUTTON1),
        PinBinding::signal("TX", TX),
        PinBinding::signal("RX", RX),
        PinBinding::alias("TX1", TX1, "TX"),
        PinBinding::alias("RX1", RX1, "RX"),
        PinBinding::signal("SDA", SDA),
        PinBinding::signal("SCL", SCL),
        PinBinding::signal("FAN", FAN),
    ];

    pub static VARIANT: BoardVariant = BoardVariant {
        name: BOARD_NAME,
        revision: Some(REVISION),
        usb: UsbIdentity {
            vid: USB_VID,
            pid: USB_PID,
            manufacturer: USB_MANUFACTURER,
            product: USB_PRODUCT,
            serial: USB_SERIAL,
        },
        capabilities: Capabilities::ESP32S2,
        adc_to_gpio: &chip::ADC_TO_GPIO,
        bindings: BINDINGS,
    };
}

/// Current revision: I2C moved to 11/12, SPI header on 4-7.
pub mod rev_b {
    pub use super::common::*;

    use crate::chip;
    use crate::pin::PinBinding;
    use crate::variant::{BoardVariant, Capabilities, UsbIdentity};

    pub const REVISION: &str = "B";

    pub const PIN_NEOPIXEL: u8 = 33;
    /// Logical pin selecting the NeoPixel in `digitalWrite()`.
    pub const RGB_BUILTIN: u8 = PIN_NEOPIXEL + chip::SOC_GPIO_PIN_COUNT;

    pub const SDA: u8 = 11;
    pub const SCL: u8 = 12;

    pub const SS: u8 = 4;
    pub const MOSI: u8 = 5;
    pub const SCK: u8 = 6;
    pub const MISO: u8 = 7;

    pub const FAN: u8 = 34;

    static BINDINGS: &[PinBinding] = &[
        PinBinding::signal("LED_BUILTIN", LED_BUILTIN),
        PinBinding::alias("BUILTIN_LED", BUILTIN_LED, "LED_BUILTIN"),
        PinBinding::signal("PIN_NEOPIXEL", PIN_NEOPIXEL),
        PinBinding::virtual_pin("RGB_BUILTIN", RGB_BUILTIN, "PIN_NEOPIXEL"),
        PinBinding::signal("PIN_BUTTON1", PIN_BUTTON1),
        PinBinding::signal("TX", TX),
        PinBinding::signal("RX", RX),
        PinBinding::alias("TX1", TX1, "TX"),
        PinBinding::alias("RX1", RX1, "RX"),
        PinBinding::signal("SDA", SDA),
        PinBinding::signal("SCL", SCL),
        PinBinding::signal("SS", SS),
        PinBinding::signal("MOSI", MOSI),
        PinBinding::signal("SCK", SCK),
        PinBinding::signal("MISO", MISO),
        PinBinding::signal("FAN", FAN),
    ];

    pub static VARIANT: BoardVariant = BoardVariant {
        name: BOARD_NAME,
        revision: Some(REVISION),
        usb: UsbIdentity {
            vid: USB_VID,
            pid: USB_PID,
            manufacturer: USB_MANUFACTURER,
            product: USB_PRODUCT,
            serial: USB_SERIAL,
        },
        capabilities: Capabilities::ESP32S2,
        adc_to_gpio: &chip::ADC_TO_GPIO,
        bindings: BINDINGS,
    };
}
