//! Board variant definitions for ESP32-S2 boards in the Arduino core.
//!
//! Each supported board gets a pin table: symbolic names (`SDA`, `LED_BUILTIN`,
//! camera bus lines...) bound to GPIO numbers, the board's USB identity, and
//! the capability helpers the core's HAL calls (`analog_input_to_digital_pin`,
//! `digital_pin_to_interrupt`, `digital_pin_has_pwm`). Tables are plain
//! `pub const` items so firmware resolves pins at compile time; each one also
//! carries a `BoardVariant` descriptor that can be validated and reported.
//!
//! - `chip`, `pin`, `variant`: silicon facts, binding model, validation.
//! - `variants`: the tables themselves; `board` re-exports the one selected
//!   by Cargo feature.
//! - `protocol`: NDJSON reports of tables and findings.
//! - `boards_txt`, `defaults`, `tinyuf2`: `boards.txt` generation and
//!   TinyUF2 bootloader asset naming for the board-support package.
//!
//! `no_std`, no allocator; tests run on the host with `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod boards_txt;
pub mod chip;
pub mod defaults;
pub mod pin;
pub mod protocol;
pub mod tinyuf2;
pub mod variant;
pub mod variants;

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../Cargo.toml");

    fn dependency_line(name: &str) -> &'static str {
        MANIFEST
            .lines()
            .find(|l| l.starts_with(name) && l[name.len()..].trim_start().starts_with('='))
            .unwrap_or_else(|| panic!("{name} not in Cargo.toml"))
    }

    #[test]
    fn host_tool_crates_stay_out_of_firmware_builds() {
        for name in ["anyhow", "clap", "env_logger"] {
            assert!(
                dependency_line(name).contains("optional = true"),
                "{name} must be optional"
            );
        }
        assert!(MANIFEST.contains(r#"cli = ["dep:anyhow", "dep:clap", "dep:env_logger"]"#));
        assert!(MANIFEST.contains(r#"required-features = ["cli"]"#));
        assert!(!MANIFEST.contains(r#"default = ["vindie-s2", "cli"]"#));
    }

    #[test]
    fn library_dependencies_are_no_std() {
        assert!(dependency_line("thiserror").contains("default-features = false"));
        assert!(dependency_line("serde ").contains("default-features = false"));
    }
}
