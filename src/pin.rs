/// Pin bindings: a symbolic name bound to a GPIO number.
///
/// Downstream code consumes the raw `pub const` values; the `PinBinding`
/// entries mirror them so a whole table can be walked, checked and reported.
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// GPIO number as the Arduino core sees it. Negative means "no direct pin".
pub type GpioNum = i8;

/// Sentinel for signals that are not wired to the controller (for example,
/// lines behind an I/O expander) and for out-of-range lookups.
pub const NOT_CONNECTED: GpioNum = -1;

/// Convert a raw pin value into a directly drivable GPIO.
///
/// Returns `None` for [`NOT_CONNECTED`]; callers must not touch the pin
/// themselves in that case.
pub const fn direct(gpio: GpioNum) -> Option<u8> {
    if gpio < 0 {
        None
    } else {
        Some(gpio as u8)
    }
}

/// How a binding relates to the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Wired straight to the GPIO in `PinBinding::gpio`.
    Signal,
    /// Second name for the binding called `.0`; same value.
    Alias(&'static str),
    /// Routed through an I/O expander; `gpio` is [`NOT_CONNECTED`].
    Expander,
    /// Logical number past the pad matrix (`base` + `SOC_GPIO_PIN_COUNT`),
    /// selecting a peripheral feature on the `base` pin.
    Virtual { base: &'static str },
}

impl BindingKind {
    fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Signal => "signal",
            BindingKind::Alias(_) => "alias",
            BindingKind::Expander => "expander",
            BindingKind::Virtual { .. } => "virtual",
        }
    }

    fn target(&self) -> Option<&'static str> {
        match *self {
            BindingKind::Alias(target) => Some(target),
            BindingKind::Virtual { base } => Some(base),
            BindingKind::Signal | BindingKind::Expander => None,
        }
    }
}

/// One entry of a board's pin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinBinding {
    pub name: &'static str,
    pub gpio: GpioNum,
    pub kind: BindingKind,
}

impl PinBinding {
    pub const fn signal(name: &'static str, gpio: u8) -> Self {
        Self {
            name,
            gpio: gpio as GpioNum,
            kind: BindingKind::Signal,
        }
    }

    pub const fn alias(name: &'static str, gpio: u8, of: &'static str) -> Self {
        Self {
            name,
            gpio: gpio as GpioNum,
            kind: BindingKind::Alias(of),
        }
    }

    /// Signal that is either wired directly or sits behind the expander,
    /// depending on whether `gpio` is the sentinel.
    pub const fn routed(name: &'static str, gpio: GpioNum) -> Self {
        let kind = if gpio < 0 {
            BindingKind::Expander
        } else {
            BindingKind::Signal
        };
        Self { name, gpio, kind }
    }

    pub const fn virtual_pin(name: &'static str, value: u8, base: &'static str) -> Self {
        Self {
            name,
            gpio: value as GpioNum,
            kind: BindingKind::Virtual { base },
        }
    }

    /// GPIO the controller drives for this name, if any.
    pub const fn direct(&self) -> Option<u8> {
        match self.kind {
            BindingKind::Signal | BindingKind::Alias(_) => direct(self.gpio),
            BindingKind::Expander | BindingKind::Virtual { .. } => None,
        }
    }
}

impl Serialize for PinBinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let target = self.kind.target();
        let mut s = serializer.serialize_struct("PinBinding", 4)?;
        s.serialize_field("name", self.name)?;
        s.serialize_field("gpio", &self.gpio)?;
        s.serialize_field("kind", self.kind.as_str())?;
        match target {
            Some(of) => s.serialize_field("of", of)?,
            None => s.skip_field("of")?,
        }
        s.end()
    }
}
