/// JSON reports describing board variants.
///
/// All messages are newline-delimited JSON (NDJSON).
/// Uses `heapless` types for no_std/no-alloc operation.
use core::fmt::Write;

use heapless::String;
use serde::Serialize;

use crate::pin::PinBinding;
use crate::variant::{BoardVariant, Capabilities, SharedGpio, UsbIdentity, VariantError};

/// Maximum length for validation error text
pub type DetailString = String<128>;

/// Messages describing a board table
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum VariantMessage<'a> {
    /// Complete pin table
    #[serde(rename = "board")]
    Board {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        revision: Option<&'a str>,
        usb: &'a UsbIdentity,
        #[serde(rename = "caps")]
        capabilities: &'a Capabilities,
        pins: &'a [PinBinding],
    },
    /// Two signals wired to one GPIO
    #[serde(rename = "shared_gpio")]
    SharedGpio {
        board: &'a str,
        gpio: u8,
        first: &'a str,
        second: &'a str,
    },
    /// Table failed validation
    #[serde(rename = "invalid")]
    Invalid {
        board: &'a str,
        detail: DetailString,
    },
}

impl<'a> VariantMessage<'a> {
    pub fn board(variant: &'a BoardVariant) -> Self {
        VariantMessage::Board {
            name: variant.name,
            revision: variant.revision,
            usb: &variant.usb,
            capabilities: &variant.capabilities,
            pins: variant.bindings,
        }
    }

    pub fn shared_gpio(variant: &'a BoardVariant, shared: &SharedGpio) -> Self {
        VariantMessage::SharedGpio {
            board: variant.name,
            gpio: shared.gpio,
            first: shared.first,
            second: shared.second,
        }
    }

    /// Error text is truncated at the detail capacity.
    pub fn invalid(variant: &'a BoardVariant, err: &VariantError) -> Self {
        let mut detail = DetailString::new();
        let _ = write!(detail, "{err}");
        VariantMessage::Invalid {
            board: variant.name,
            detail,
        }
    }
}

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum size of a serialized JSON message
pub const MAX_MSG_LEN: usize = 4096;

/// Serialize a message to JSON bytes followed by the NDJSON newline.
/// Returns the number of bytes written, or None if it does not fit.
pub fn serialize_message(msg: &VariantMessage, buf: &mut [u8]) -> Option<usize> {
    match serde_json_core::to_slice(msg, buf) {
        Ok(len) if len < buf.len() => {
            buf[len] = b'\n';
            Some(len + 1)
        }
        Ok(_) => None,
        Err(e) => {
            log::debug!("serialize failed: {e:?}");
            None
        }
    }
}
