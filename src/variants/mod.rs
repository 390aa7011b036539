/// Pin tables for every supported board.
///
/// Each module exposes the raw `pub const` names firmware compiles against
/// plus a `VARIANT` descriptor built from them.
use crate::variant::BoardVariant;

pub mod camera_esp32s2;
pub mod vindie_s2;

/// All tables, oldest revision first within a board name.
pub static ALL: &[&BoardVariant] = &[
    &camera_esp32s2::VARIANT,
    &vindie_s2::rev_a::VARIANT,
    &vindie_s2::rev_b::VARIANT,
];

/// Canonical table for a board name: its latest revision.
pub fn find(name: &str) -> Option<&'static BoardVariant> {
    ALL.iter().rev().find(|v| v.name == name).copied()
}

/// Table for one specific revision of a board (case-insensitive).
pub fn find_revision(name: &str, revision: &str) -> Option<&'static BoardVariant> {
    ALL.iter()
        .find(|v| {
            v.name == name
                && v
                    .revision
                    .is_some_and(|r| r.eq_ignore_ascii_case(revision))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::NOT_CONNECTED;

    #[test]
    fn find_returns_latest_revision() {
        let v = find("adafruit_vindie_s2").unwrap();
        assert_eq!(v.revision, Some("B"));
        assert_eq!(find("adafruit_camera_esp32s2").unwrap().revision, None);
        assert!(find("adafruit_feather_esp32s2").is_none());
    }

    #[test]
    fn find_revision_is_case_insensitive() {
        let v = find_revision("adafruit_vindie_s2", "a").unwrap();
        assert_eq!(v.pin("SDA"), Some(41));
        assert!(find_revision("adafruit_vindie_s2", "C").is_none());
        assert!(find_revision("adafruit_camera_esp32s2", "A").is_none());
    }

    // ── Properties every table must hold ────────────────────────────

    #[test]
    fn analog_inputs_map_into_digital_range() {
        for v in ALL {
            let caps = v.capabilities;
            for p in 0..caps.num_analog_inputs {
                let gpio = v.analog_input_to_digital_pin(p);
                assert!(
                    gpio == NOT_CONNECTED || (gpio >= 0 && (gpio as u8) < caps.num_digital_pins),
                    "{}: channel {p} -> {gpio}",
                    v.name
                );
            }
            for p in caps.num_analog_inputs..=u8::MAX {
                assert_eq!(v.analog_input_to_digital_pin(p), NOT_CONNECTED);
            }
        }
    }

    #[test]
    fn interrupts_are_identity_in_range() {
        for v in ALL {
            let caps = v.capabilities;
            for p in 0..caps.num_digital_pins {
                assert_eq!(v.digital_pin_to_interrupt(p), p as i8);
            }
            for p in caps.num_digital_pins..=u8::MAX {
                assert_eq!(v.digital_pin_to_interrupt(p), NOT_CONNECTED);
            }
        }
    }

    #[test]
    fn every_table_validates() {
        for v in ALL {
            assert_eq!(v.validate(), Ok(()), "{}", v.name);
        }
    }

    #[test]
    fn usb_serial_derives_from_mac() {
        for v in ALL {
            assert!(v.usb.serial.is_empty());
            assert_eq!(v.usb.resolve_serial(&[1, 2, 3, 4, 5, 6]).len(), 12);
        }
    }
}
