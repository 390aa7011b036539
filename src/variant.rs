/// Runtime descriptor of a board variant and its consistency checks.
///
/// Every variant module builds one `BoardVariant` from its own `pub const`
/// items, so the descriptor can never drift from the constants firmware
/// compiles against.
use core::fmt::Write;

use heapless::{String, Vec};
use serde::Serialize;

use crate::chip;
use crate::pin::{BindingKind, GpioNum, PinBinding, NOT_CONNECTED};

/// Descriptor serial, long enough for a MAC-derived value.
pub type SerialString = String<32>;

/// Upper bound on shared-GPIO findings reported per board.
pub const MAX_SHARED: usize = 8;

/// USB device identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsbIdentity {
    pub vid: u16,
    pub pid: u16,
    pub manufacturer: &'static str,
    pub product: &'static str,
    /// Empty string: derive from the MAC address at runtime.
    pub serial: &'static str,
}

/// Where the USB serial number comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialSource {
    /// Generated from the hardware MAC address.
    MacAddress,
    Fixed(&'static str),
}

impl UsbIdentity {
    pub const fn serial_source(&self) -> SerialSource {
        if self.serial.is_empty() {
            SerialSource::MacAddress
        } else {
            SerialSource::Fixed(self.serial)
        }
    }

    /// Serial string the USB stack should put in the device descriptor.
    pub fn resolve_serial(&self, mac: &[u8; 6]) -> SerialString {
        let mut buf = SerialString::new();
        match self.serial_source() {
            SerialSource::Fixed(serial) => {
                let _ = buf.push_str(serial);
            }
            SerialSource::MacAddress => format_mac_serial(mac, &mut buf),
        }
        buf
    }
}

/// Format a 6-byte MAC address as 12 upper-case hex digits ("AABBCCDDEEFF")
pub fn format_mac_serial(mac: &[u8; 6], buf: &mut SerialString) {
    let _ = write!(
        buf,
        "{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
}

/// Pin-count capabilities the HAL validates requests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub num_digital_pins: u8,
    pub num_analog_inputs: u8,
    pub external_num_interrupts: u8,
    /// `digital_pin_has_pwm(p)` is `p < pwm_pin_limit`.
    pub pwm_pin_limit: u8,
}

impl Capabilities {
    /// ESP32-S2 core defaults.
    pub const ESP32S2: Self = Self {
        num_digital_pins: chip::NUM_DIGITAL_PINS,
        num_analog_inputs: chip::NUM_ANALOG_INPUTS,
        external_num_interrupts: chip::EXTERNAL_NUM_INTERRUPTS,
        pwm_pin_limit: chip::PWM_PIN_LIMIT,
    };
}

/// Hard inconsistencies in a pin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    #[error("{name} is bound more than once")]
    DuplicateName { name: &'static str },
    #[error("USB {field} must not be empty")]
    EmptyUsbField { field: &'static str },
    #[error("{name} is bound to GPIO{gpio}, which the ESP32-S2 does not have")]
    InvalidGpio { name: &'static str, gpio: GpioNum },
    #[error("{name} aliases {target}, which is not in the table")]
    UnknownTarget {
        name: &'static str,
        target: &'static str,
    },
    #[error("{name} = {gpio} but its alias target {target} = {expected}")]
    AliasMismatch {
        name: &'static str,
        gpio: GpioNum,
        target: &'static str,
        expected: GpioNum,
    },
    #[error("{name} = {gpio}, expected {base} + SOC_GPIO_PIN_COUNT = {expected}")]
    VirtualMismatch {
        name: &'static str,
        gpio: GpioNum,
        base: &'static str,
        expected: i16,
    },
    #[error("{name} is on GPIO{gpio}, which cannot drive an output")]
    NotOutputCapable { name: &'static str, gpio: u8 },
    #[error("analog input {channel} maps to {gpio}, outside the digital pin range")]
    AnalogOutOfRange { channel: u8, gpio: GpioNum },
}

/// Two distinct functions bound to one GPIO without an alias between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedGpio {
    pub gpio: u8,
    pub first: &'static str,
    pub second: &'static str,
}

/// Bindings that must be able to drive their pin.
const OUTPUT_NAMES: [&str; 2] = ["LED_BUILTIN", "PIN_NEOPIXEL"];

/// A board variant: identity, capabilities and the complete pin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardVariant {
    /// Variant directory name, e.g. `adafruit_vindie_s2`.
    pub name: &'static str,
    /// Hardware revision when one board name has several tables.
    pub revision: Option<&'static str>,
    pub usb: UsbIdentity,
    pub capabilities: Capabilities,
    /// ADC channel index to GPIO.
    pub adc_to_gpio: &'static [GpioNum],
    pub bindings: &'static [PinBinding],
}

impl BoardVariant {
    /// Look up a binding by name.
    pub fn binding(&self, name: &str) -> Option<&'static PinBinding> {
        self.bindings.iter().find(|b| b.name == name)
    }

    /// Raw value bound to `name` (may be [`NOT_CONNECTED`]).
    pub fn pin(&self, name: &str) -> Option<GpioNum> {
        self.binding(name).map(|b| b.gpio)
    }

    /// GPIO the controller drives for `name`; `None` when the name is absent,
    /// expander-routed or virtual.
    pub fn direct_pin(&self, name: &str) -> Option<u8> {
        self.binding(name).and_then(|b| b.direct())
    }

    pub fn has(&self, name: &str) -> bool {
        self.binding(name).is_some()
    }

    /// `analogInputToDigitalPin`: GPIO for ADC channel `p`, or the sentinel.
    pub fn analog_input_to_digital_pin(&self, p: u8) -> GpioNum {
        if p < self.capabilities.num_analog_inputs {
            self.adc_to_gpio
                .get(p as usize)
                .copied()
                .unwrap_or(NOT_CONNECTED)
        } else {
            NOT_CONNECTED
        }
    }

    /// `digitalPinToInterrupt`: every digital pin is its own interrupt.
    pub fn digital_pin_to_interrupt(&self, p: u8) -> GpioNum {
        chip::pin_to_interrupt(p, self.capabilities.num_digital_pins)
    }

    /// `digitalPinHasPWM`
    pub fn digital_pin_has_pwm(&self, p: u8) -> bool {
        p < self.capabilities.pwm_pin_limit
    }

    /// Bindings routed through the I/O expander.
    pub fn expander_bindings(&self) -> impl Iterator<Item = &'static PinBinding> {
        self.bindings
            .iter()
            .filter(|b| b.kind == BindingKind::Expander)
    }

    /// Check the table for hard inconsistencies, stopping at the first one.
    pub fn validate(&self) -> Result<(), VariantError> {
        for (i, b) in self.bindings.iter().enumerate() {
            if self.bindings[..i].iter().any(|prev| prev.name == b.name) {
                return Err(VariantError::DuplicateName { name: b.name });
            }
        }

        if self.usb.manufacturer.is_empty() {
            return Err(VariantError::EmptyUsbField {
                field: "manufacturer",
            });
        }
        if self.usb.product.is_empty() {
            return Err(VariantError::EmptyUsbField { field: "product" });
        }

        for b in self.bindings {
            self.check_binding(b)?;
        }

        for name in OUTPUT_NAMES {
            if let Some(gpio) = self.direct_pin(name) {
                if !chip::is_output_capable(gpio) {
                    return Err(VariantError::NotOutputCapable { name, gpio });
                }
            }
        }

        for channel in 0..self.capabilities.num_analog_inputs {
            let gpio = self.analog_input_to_digital_pin(channel);
            if gpio == NOT_CONNECTED {
                log::debug!("{}: analog input {channel} has no GPIO", self.name);
                continue;
            }
            if gpio < 0 || gpio as u8 >= self.capabilities.num_digital_pins {
                return Err(VariantError::AnalogOutOfRange { channel, gpio });
            }
        }

        log::debug!("{}: {} bindings valid", self.name, self.bindings.len());
        Ok(())
    }

    fn check_binding(&self, b: &PinBinding) -> Result<(), VariantError> {
        match b.kind {
            BindingKind::Signal => {
                if b.gpio < 0 || !chip::is_valid_gpio(b.gpio as u8) {
                    return Err(VariantError::InvalidGpio {
                        name: b.name,
                        gpio: b.gpio,
                    });
                }
            }
            BindingKind::Expander => {
                if b.gpio != NOT_CONNECTED {
                    return Err(VariantError::InvalidGpio {
                        name: b.name,
                        gpio: b.gpio,
                    });
                }
            }
            BindingKind::Alias(target) => {
                let expected = self.pin(target).ok_or(VariantError::UnknownTarget {
                    name: b.name,
                    target,
                })?;
                if expected != b.gpio {
                    return Err(VariantError::AliasMismatch {
                        name: b.name,
                        gpio: b.gpio,
                        target,
                        expected,
                    });
                }
            }
            BindingKind::Virtual { base } => {
                let base_gpio = self.pin(base).ok_or(VariantError::UnknownTarget {
                    name: b.name,
                    target: base,
                })?;
                let expected = base_gpio as i16 + chip::SOC_GPIO_PIN_COUNT as i16;
                if b.gpio as i16 != expected {
                    return Err(VariantError::VirtualMismatch {
                        name: b.name,
                        gpio: b.gpio,
                        base,
                        expected,
                    });
                }
            }
        }
        Ok(())
    }

    /// Distinct wired signals sharing one GPIO. Aliases never count.
    pub fn shared_gpios(&self) -> Vec<SharedGpio, MAX_SHARED> {
        let mut shared = Vec::new();
        let signals = || {
            self.bindings
                .iter()
                .filter(|b| b.kind == BindingKind::Signal && b.gpio >= 0)
        };
        for (i, a) in signals().enumerate() {
            for b in signals().skip(i + 1) {
                if a.gpio == b.gpio {
                    let found = SharedGpio {
                        gpio: a.gpio as u8,
                        first: a.name,
                        second: b.name,
                    };
                    log::warn!(
                        "{}: {} and {} both on GPIO{}",
                        self.name,
                        found.first,
                        found.second,
                        found.gpio
                    );
                    if shared.push(found).is_err() {
                        return shared;
                    }
                }
            }
        }
        shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USB: UsbIdentity = UsbIdentity {
        vid: 0x239A,
        pid: 0x8000,
        manufacturer: "Adafruit",
        product: "Test Board",
        serial: "",
    };

    fn board(bindings: &'static [PinBinding]) -> BoardVariant {
        BoardVariant {
            name: "test_board",
            revision: None,
            usb: USB,
            capabilities: Capabilities::ESP32S2,
            adc_to_gpio: &chip::ADC_TO_GPIO,
            bindings,
        }
    }

    // ── USB identity ────────────────────────────────────────────────

    #[test]
    fn empty_serial_means_mac_address() {
        assert_eq!(USB.serial_source(), SerialSource::MacAddress);
        let serial = USB.resolve_serial(&[0x7C, 0xDF, 0xA1, 0x00, 0x0B, 0xFE]);
        assert_eq!(serial.as_str(), "7CDFA1000BFE");
    }

    #[test]
    fn fixed_serial_is_used_verbatim() {
        let usb = UsbIdentity {
            serial: "SN-0001",
            ..USB
        };
        assert_eq!(usb.serial_source(), SerialSource::Fixed("SN-0001"));
        assert_eq!(usb.resolve_serial(&[0; 6]).as_str(), "SN-0001");
    }

    // ── Lookups ─────────────────────────────────────────────────────

    static LOOKUP: &[PinBinding] = &[
        PinBinding::signal("SDA", 3),
        PinBinding::alias("SDA1", 3, "SDA"),
        PinBinding::routed("PWDN", NOT_CONNECTED),
    ];

    #[test]
    fn pin_and_direct_pin() {
        let b = board(LOOKUP);
        assert_eq!(b.pin("SDA"), Some(3));
        assert_eq!(b.direct_pin("SDA1"), Some(3));
        assert_eq!(b.pin("PWDN"), Some(NOT_CONNECTED));
        assert_eq!(b.direct_pin("PWDN"), None);
        assert_eq!(b.pin("MOSI"), None);
        assert!(!b.has("MOSI"));
        assert_eq!(b.expander_bindings().count(), 1);
    }

    #[test]
    fn derived_helpers_are_range_checked() {
        let b = board(LOOKUP);
        assert_eq!(b.analog_input_to_digital_pin(0), 1);
        assert_eq!(b.analog_input_to_digital_pin(20), NOT_CONNECTED);
        assert_eq!(b.digital_pin_to_interrupt(12), 12);
        assert_eq!(b.digital_pin_to_interrupt(48), NOT_CONNECTED);
        assert!(b.digital_pin_has_pwm(45));
        assert!(!b.digital_pin_has_pwm(46));
    }

    #[test]
    fn short_adc_map_yields_sentinel() {
        let b = BoardVariant {
            adc_to_gpio: &[1, 2],
            ..board(LOOKUP)
        };
        assert_eq!(b.analog_input_to_digital_pin(1), 2);
        assert_eq!(b.analog_input_to_digital_pin(2), NOT_CONNECTED);
    }

    #[test]
    fn unmapped_analog_inputs_pass_validation() {
        static ADC: [GpioNum; 3] = [1, NOT_CONNECTED, 3];
        let b = BoardVariant {
            adc_to_gpio: &ADC,
            ..board(LOOKUP)
        };
        assert_eq!(b.analog_input_to_digital_pin(1), NOT_CONNECTED);
        // Channels past the short map fall back to the sentinel too
        assert_eq!(b.analog_input_to_digital_pin(5), NOT_CONNECTED);
        assert_eq!(b.validate(), Ok(()));
    }

    // ── Validation ──────────────────────────────────────────────────

    #[test]
    fn valid_table_passes() {
        assert_eq!(board(LOOKUP).validate(), Ok(()));
    }

    #[test]
    fn duplicate_name_rejected() {
        static T: &[PinBinding] = &[PinBinding::signal("SDA", 3), PinBinding::signal("SDA", 4)];
        assert_eq!(
            board(T).validate(),
            Err(VariantError::DuplicateName { name: "SDA" })
        );
    }

    #[test]
    fn missing_gpio_rejected() {
        static T: &[PinBinding] = &[PinBinding::signal("FAN", 23)];
        assert_eq!(
            board(T).validate(),
            Err(VariantError::InvalidGpio {
                name: "FAN",
                gpio: 23
            })
        );
    }

    #[test]
    fn alias_must_match_target() {
        static T: &[PinBinding] = &[
            PinBinding::signal("RX", 21),
            PinBinding::alias("RX1", 20, "RX"),
        ];
        assert_eq!(
            board(T).validate(),
            Err(VariantError::AliasMismatch {
                name: "RX1",
                gpio: 20,
                target: "RX",
                expected: 21
            })
        );
    }

    #[test]
    fn alias_target_must_exist() {
        static T: &[PinBinding] = &[PinBinding::alias("TX1", 45, "TX")];
        assert_eq!(
            board(T).validate(),
            Err(VariantError::UnknownTarget {
                name: "TX1",
                target: "TX"
            })
        );
    }

    #[test]
    fn virtual_pin_offset_checked() {
        static T: &[PinBinding] = &[
            PinBinding::signal("PIN_NEOPIXEL", 26),
            PinBinding::virtual_pin("RGB_BUILTIN", 72, "PIN_NEOPIXEL"),
        ];
        assert_eq!(
            board(T).validate(),
            Err(VariantError::VirtualMismatch {
                name: "RGB_BUILTIN",
                gpio: 72,
                base: "PIN_NEOPIXEL",
                expected: 73
            })
        );
    }

    #[test]
    fn led_on_input_only_pin_rejected() {
        static T: &[PinBinding] = &[PinBinding::signal("LED_BUILTIN", 46)];
        assert_eq!(
            board(T).validate(),
            Err(VariantError::NotOutputCapable {
                name: "LED_BUILTIN",
                gpio: 46
            })
        );
    }

    #[test]
    fn empty_product_rejected() {
        let b = BoardVariant {
            usb: UsbIdentity { product: "", ..USB },
            ..board(LOOKUP)
        };
        assert_eq!(
            b.validate(),
            Err(VariantError::EmptyUsbField { field: "product" })
        );
    }

    #[test]
    fn analog_map_outside_digital_range_rejected() {
        static ADC: [GpioNum; 2] = [1, 60];
        let b = BoardVariant {
            adc_to_gpio: &ADC,
            ..board(LOOKUP)
        };
        assert_eq!(
            b.validate(),
            Err(VariantError::AnalogOutOfRange {
                channel: 1,
                gpio: 60
            })
        );
    }

    // ── Shared GPIOs ────────────────────────────────────────────────

    #[test]
    fn shared_gpio_reported_aliases_ignored() {
        static T: &[PinBinding] = &[
            PinBinding::signal("TFT_BACKLIGHT", 41),
            PinBinding::signal("TFT_RESET", 38),
            PinBinding::alias("TFT_RST", 38, "TFT_RESET"),
            PinBinding::signal("SPEAKER", 41),
        ];
        let shared = board(T).shared_gpios();
        assert_eq!(shared.len(), 1);
        assert_eq!(
            shared[0],
            SharedGpio {
                gpio: 41,
                first: "TFT_BACKLIGHT",
                second: "SPEAKER"
            }
        );
    }

    #[test]
    fn error_messages_name_the_binding() {
        let mut msg: String<96> = String::new();
        let _ = write!(
            msg,
            "{}",
            VariantError::InvalidGpio {
                name: "FAN",
                gpio: 23
            }
        );
        assert_eq!(
            msg.as_str(),
            "FAN is bound to GPIO23, which the ESP32-S2 does not have"
        );
    }
}
