/// Adafruit Camera ESP32-S2.
///
/// TFT, microSD and speaker share the SPI bus; the OV-series camera sits on
/// the parallel DVP port with its power-down and reset lines behind the
/// on-board I/O expander.
use crate::chip;
use crate::pin::{GpioNum, PinBinding, NOT_CONNECTED};
use crate::variant::{BoardVariant, Capabilities, UsbIdentity};

pub const BOARD_NAME: &str = "adafruit_camera_esp32s2";

// ── USB identity ────────────────────────────────────────────────────

pub const USB_VID: u16 = 0x239A;
pub const USB_PID: u16 = 0x8117;
pub const USB_MANUFACTURER: &str = "Adafruit";
pub const USB_PRODUCT: &str = "Camera ESP32-S2";
/// Empty: serial comes from the MAC address
pub const USB_SERIAL: &str = "";

// ── Capabilities ────────────────────────────────────────────────────

pub const EXTERNAL_NUM_INTERRUPTS: u8 = 46;
pub const NUM_DIGITAL_PINS: u8 = 48;
pub const NUM_ANALOG_INPUTS: u8 = 20;

pub const fn analog_input_to_digital_pin(p: u8) -> GpioNum {
    chip::adc_channel_to_gpio(p, NUM_ANALOG_INPUTS)
}

pub const fn digital_pin_to_interrupt(p: u8) -> GpioNum {
    chip::pin_to_interrupt(p, NUM_DIGITAL_PINS)
}

pub const fn digital_pin_has_pwm(p: u8) -> bool {
    p < 46
}

// ── Pins ────────────────────────────────────────────────────────────

pub const LED_BUILTIN: u8 = 1;

pub const PIN_NEOPIXEL: u8 = 21;

pub const TFT_BACKLIGHT: u8 = 41;
pub const TFT_DC: u8 = 40;
pub const TFT_CS: u8 = 39;
pub const TFT_RESET: u8 = 38;
pub const TFT_RST: u8 = TFT_RESET;

pub const SD_CS: u8 = 2;
pub const SD_CHIP_SELECT: u8 = SD_CS;
/// Same pad as `TFT_BACKLIGHT`.
pub const SPEAKER: u8 = 41;

pub const SDA: u8 = 33;
pub const SCL: u8 = 34;

/// Default SPI chip select is the TFT's.
pub const SS: u8 = TFT_CS;
pub const MOSI: u8 = 35;
pub const SCK: u8 = 36;
pub const MISO: u8 = 37;

pub const A0: u8 = 17;
pub const A1: u8 = 18;

pub const TX: u8 = 43;
pub const RX: u8 = 44;

pub const DAC1: u8 = A0;
pub const DAC2: u8 = A1;

// ── Camera (DVP) ────────────────────────────────────────────────────

pub const PWDN_GPIO_NUM: GpioNum = NOT_CONNECTED; // expander
pub const RESET_GPIO_NUM: GpioNum = NOT_CONNECTED; // expander
pub const XCLK_GPIO_NUM: GpioNum = 8;
pub const SIOD_GPIO_NUM: GpioNum = SDA as GpioNum;
pub const SIOC_GPIO_NUM: GpioNum = SCL as GpioNum;

pub const Y9_GPIO_NUM: GpioNum = 7;
pub const Y8_GPIO_NUM: GpioNum = 9;
pub const Y7_GPIO_NUM: GpioNum = 10;
pub const Y6_GPIO_NUM: GpioNum = 12;
pub const Y5_GPIO_NUM: GpioNum = 14;
pub const Y4_GPIO_NUM: GpioNum = 16;
pub const Y3_GPIO_NUM: GpioNum = 15;
pub const Y2_GPIO_NUM: GpioNum = 13;
pub const VSYNC_GPIO_NUM: GpioNum = 5;
pub const HREF_GPIO_NUM: GpioNum = 6;
pub const PCLK_GPIO_NUM: GpioNum = 11;

/// Camera interface wiring, grouped the way a DVP driver config wants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPins {
    /// Data lines D0..D7 (`Y2`..`Y9`).
    pub data: [GpioNum; 8],
    pub xclk: GpioNum,
    pub pclk: GpioNum,
    pub vsync: GpioNum,
    pub href: GpioNum,
    pub sccb_sda: GpioNum,
    pub sccb_scl: GpioNum,
    pub pwdn: GpioNum,
    pub reset: GpioNum,
}

impl CameraPins {
    /// Power-down GPIO, `None` when the expander owns it.
    pub const fn pwdn_direct(&self) -> Option<u8> {
        crate::pin::direct(self.pwdn)
    }

    /// Reset GPIO, `None` when the expander owns it.
    pub const fn reset_direct(&self) -> Option<u8> {
        crate::pin::direct(self.reset)
    }

    /// True if power-down or reset must go through the I/O expander.
    pub const fn needs_expander(&self) -> bool {
        self.pwdn < 0 || self.reset < 0
    }
}

pub const CAMERA: CameraPins = CameraPins {
    data: [
        Y2_GPIO_NUM,
        Y3_GPIO_NUM,
        Y4_GPIO_NUM,
        Y5_GPIO_NUM,
        Y6_GPIO_NUM,
        Y7_GPIO_NUM,
        Y8_GPIO_NUM,
        Y9_GPIO_NUM,
    ],
    xclk: XCLK_GPIO_NUM,
    pclk: PCLK_GPIO_NUM,
    vsync: VSYNC_GPIO_NUM,
    href: HREF_GPIO_NUM,
    sccb_sda: SIOD_GPIO_NUM,
    sccb_scl: SIOC_GPIO_NUM,
    pwdn: PWDN_GPIO_NUM,
    reset: RESET_GPIO_NUM,
};

// ── Descriptor ──────────────────────────────────────────────────────

static BINDINGS: &[PinBinding] = &[
    PinBinding::signal("LED_BUILTIN", LED_BUILTIN),
    PinBinding::signal("PIN_NEOPIXEL", PIN_NEOPIXEL),
    PinBinding::signal("TFT_BACKLIGHT", TFT_BACKLIGHT),
    PinBinding::signal("TFT_DC", TFT_DC),
    PinBinding::signal("TFT_CS", TFT_CS),
    PinBinding::signal("TFT_RESET", TFT_RESET),
    PinBinding::alias("TFT_RST", TFT_RST, "TFT_RESET"),
    PinBinding::signal("SD_CS", SD_CS),
    PinBinding::alias("SD_CHIP_SELECT", SD_CHIP_SELECT, "SD_CS"),
    PinBinding::signal("SPEAKER", SPEAKER),
    PinBinding::signal("SDA", SDA),
    PinBinding::signal("SCL", SCL),
    PinBinding::alias("SS", SS, "TFT_CS"),
    PinBinding::signal("MOSI", MOSI),
    PinBinding::signal("SCK", SCK),
    PinBinding::signal("MISO", MISO),
    PinBinding::signal("A0", A0),
    PinBinding::signal("A1", A1),
    PinBinding::signal("TX", TX),
    PinBinding::signal("RX", RX),
    PinBinding::alias("DAC1", DAC1, "A0"),
    PinBinding::alias("DAC2", DAC2, "A1"),
    PinBinding::routed("PWDN_GPIO_NUM", PWDN_GPIO_NUM),
    PinBinding::routed("RESET_GPIO_NUM", RESET_GPIO_NUM),
    PinBinding::routed("XCLK_GPIO_NUM", XCLK_GPIO_NUM),
    PinBinding::alias("SIOD_GPIO_NUM", SDA, "SDA"),
    PinBinding::alias("SIOC_GPIO_NUM", SCL, "SCL"),
    PinBinding::routed("Y9_GPIO_NUM", Y9_GPIO_NUM),
    PinBinding::routed("Y8_GPIO_NUM", Y8_GPIO_NUM),
    PinBinding::routed("Y7_GPIO_NUM", Y7_GPIO_NUM),
    PinBinding::routed("Y6_GPIO_NUM", Y6_GPIO_NUM),
    PinBinding::routed("Y5_GPIO_NUM", Y5_GPIO_NUM),
    PinBinding::routed("Y4_GPIO_NUM", Y4_GPIO_NUM),
    PinBinding::routed("Y3_GPIO_NUM", Y3_GPIO_NUM),
    PinBinding::routed("Y2_GPIO_NUM", Y2_GPIO_NUM),
    PinBinding::routed("VSYNC_GPIO_NUM", VSYNC_GPIO_NUM),
    PinBinding::routed("HREF_GPIO_NUM", HREF_GPIO_NUM),
    PinBinding::routed("PCLK_GPIO_NUM", PCLK_GPIO_NUM),
];

pub static VARIANT: BoardVariant = BoardVariant {
    name: BOARD_NAME,
    revision: None,
    usb: UsbIdentity {
        vid: USB_VID,
        pid: USB_PID,
        manufacturer: USB_MANUFACTURER,
        product: USB_PRODUCT,
        serial: USB_SERIAL,
    },
    capabilities: Capabilities {
        num_digital_pins: NUM_DIGITAL_PINS,
        num_analog_inputs: NUM_ANALOG_INPUTS,
        external_num_interrupts: EXTERNAL_NUM_INTERRUPTS,
        pwm_pin_limit: 46,
    },
    adc_to_gpio: &chip::ADC_TO_GPIO,
    bindings: BINDINGS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::SharedGpio;

    #[test]
    fn aliases_share_values() {
        assert_eq!(TFT_RST, TFT_RESET);
        assert_eq!(TFT_RST, 38);
        assert_eq!(DAC1, A0);
        assert_eq!(DAC1, 17);
        assert_eq!(DAC2, A1);
        assert_eq!(DAC2, 18);
        assert_eq!(SD_CHIP_SELECT, SD_CS);
        assert_eq!(SIOD_GPIO_NUM, SDA as GpioNum);
        assert_eq!(SIOC_GPIO_NUM, SCL as GpioNum);
    }

    #[test]
    fn dac_names_sit_on_dac_pads() {
        assert!(chip::has_dac(DAC1));
        assert!(chip::has_dac(DAC2));
    }

    #[test]
    fn powerdown_and_reset_go_through_expander() {
        assert_eq!(PWDN_GPIO_NUM, -1);
        assert_eq!(RESET_GPIO_NUM, -1);
        assert_eq!(CAMERA.pwdn_direct(), None);
        assert_eq!(CAMERA.reset_direct(), None);
        assert!(CAMERA.needs_expander());

        let routed: heapless::Vec<&str, 4> =
            VARIANT.expander_bindings().map(|b| b.name).collect();
        assert_eq!(routed.as_slice(), &["PWDN_GPIO_NUM", "RESET_GPIO_NUM"]);
    }

    #[test]
    fn camera_data_lines_are_ordered_d0_to_d7() {
        assert_eq!(CAMERA.data, [13, 15, 16, 14, 12, 10, 9, 7]);
        for gpio in CAMERA.data {
            assert!(chip::is_valid_gpio(gpio as u8));
        }
    }

    #[test]
    fn descriptor_mirrors_constants() {
        assert_eq!(VARIANT.pin("SDA"), Some(33));
        assert_eq!(VARIANT.pin("TFT_RST"), Some(38));
        assert_eq!(VARIANT.pin("PWDN_GPIO_NUM"), Some(-1));
        assert_eq!(VARIANT.direct_pin("SS"), Some(TFT_CS));
        assert_eq!(VARIANT.usb.pid, USB_PID);
        assert!(!VARIANT.has("NEOPIXEL_NUM"));
    }

    #[test]
    fn table_is_valid() {
        assert_eq!(VARIANT.validate(), Ok(()));
    }

    #[test]
    fn speaker_and_backlight_share_gpio41() {
        let shared = VARIANT.shared_gpios();
        assert_eq!(
            shared.as_slice(),
            &[SharedGpio {
                gpio: 41,
                first: "TFT_BACKLIGHT",
                second: "SPEAKER"
            }]
        );
    }

    #[test]
    fn const_helpers_match_descriptor() {
        for p in 0..=u8::MAX {
            assert_eq!(
                analog_input_to_digital_pin(p),
                VARIANT.analog_input_to_digital_pin(p)
            );
            assert_eq!(
                digital_pin_to_interrupt(p),
                VARIANT.digital_pin_to_interrupt(p)
            );
            assert_eq!(digital_pin_has_pwm(p), VARIANT.digital_pin_has_pwm(p));
        }
    }
}
