/// Pin table of the board being built for.
///
/// The board is selected at compile time via feature flags; firmware uses
/// `board::SDA`, `board::LED_BUILTIN` etc. without naming the variant. If
/// several board features are enabled the first match below wins.

#[cfg(feature = "camera-esp32s2")]
mod hw {
    pub use crate::variants::camera_esp32s2::*;
}

#[cfg(all(feature = "vindie-s2-rev-a", not(feature = "camera-esp32s2")))]
mod hw {
    pub use crate::variants::vindie_s2::rev_a::*;
}

#[cfg(all(
    feature = "vindie-s2",
    not(any(feature = "camera-esp32s2", feature = "vindie-s2-rev-a"))
))]
mod hw {
    pub use crate::variants::vindie_s2::rev_b::*;
}

#[cfg(not(any(
    feature = "camera-esp32s2",
    feature = "vindie-s2-rev-a",
    feature = "vindie-s2"
)))]
mod hw {
    pub const BOARD_NAME: &str = "unknown";
}

pub use hw::*;

#[cfg(test)]
mod tests {
    #[cfg(any(
        feature = "camera-esp32s2",
        feature = "vindie-s2-rev-a",
        feature = "vindie-s2"
    ))]
    #[test]
    fn selected_board_is_consistent() {
        use super::*;
        assert_eq!(VARIANT.name, BOARD_NAME);
        assert_eq!(VARIANT.pin("SDA"), Some(SDA as i8));
        assert_eq!(VARIANT.pin("LED_BUILTIN"), Some(LED_BUILTIN as i8));
        assert_eq!(VARIANT.usb.pid, USB_PID);
        assert_eq!(VARIANT.validate(), Ok(()));
    }

    #[cfg(all(
        feature = "vindie-s2",
        not(any(feature = "camera-esp32s2", feature = "vindie-s2-rev-a"))
    ))]
    #[test]
    fn default_board_is_current_vindie() {
        assert_eq!(super::BOARD_NAME, "adafruit_vindie_s2");
        assert_eq!(super::VARIANT.revision, Some("B"));
        assert_eq!(super::SCK, 6);
    }

    #[cfg(not(any(
        feature = "camera-esp32s2",
        feature = "vindie-s2-rev-a",
        feature = "vindie-s2"
    )))]
    #[test]
    fn no_board_selected() {
        assert_eq!(super::BOARD_NAME, "unknown");
    }
}
