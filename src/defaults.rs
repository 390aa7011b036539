/// Compiled-in data for `boards.txt` generation.
///
/// Chip profiles for the four Espressif targets the Arduino core builds for,
/// and the Adafruit ESP32 board registry. PID lists follow the Adafruit
/// convention: application, bootloader, then the UF2 (TinyUF2) PID, where
/// the board has native USB.
use crate::boards_txt::{BoardDefinition, Mcu, McuProfile, PsramType};

/// Per-chip build and upload settings.
pub static MCU_PROFILES: &[McuProfile] = &[
    McuProfile {
        mcu: Mcu::Esp32,
        maximum_data_size: 327680,
        tarch: "xtensa",
        target: "esp32",
        dual_core: true,
        bootloader_addr: "0x1000",
        f_cpu: 240_000_000,
        touch1200: None,
        usb_otg_mode: false,
        native_usb: false,
        cdc_on_boot: None,
        spi_mode: "dio",
        psram_opi: false,
    },
    McuProfile {
        mcu: Mcu::Esp32s2,
        maximum_data_size: 327680,
        tarch: "xtensa",
        target: "esp32s2",
        dual_core: false,
        bootloader_addr: "0x1000",
        f_cpu: 240_000_000,
        touch1200: Some(true),
        usb_otg_mode: false,
        native_usb: true,
        cdc_on_boot: Some(1),
        spi_mode: "qio",
        psram_opi: false,
    },
    McuProfile {
        mcu: Mcu::Esp32s3,
        maximum_data_size: 327680,
        tarch: "xtensa",
        target: "esp32s3",
        dual_core: true,
        bootloader_addr: "0x0",
        f_cpu: 240_000_000,
        touch1200: Some(true),
        usb_otg_mode: true,
        native_usb: true,
        cdc_on_boot: Some(1),
        spi_mode: "qio",
        psram_opi: true,
    },
    McuProfile {
        mcu: Mcu::Esp32c3,
        maximum_data_size: 327680,
        tarch: "riscv32",
        target: "esp",
        dual_core: false,
        bootloader_addr: "0x0",
        f_cpu: 160_000_000,
        touch1200: Some(false),
        usb_otg_mode: false,
        native_usb: false,
        cdc_on_boot: Some(1),
        spi_mode: "qio",
        psram_opi: false,
    },
];

/// Shorthand for the common registry entry shape.
const fn adafruit(
    mcu: Mcu,
    name: &'static str,
    define: &'static str,
    flash_size_mb: u8,
    psram_size_mb: u8,
    product: &'static str,
    pids: &'static [u16],
) -> BoardDefinition {
    BoardDefinition {
        mcu,
        name,
        variant: None,
        define,
        flash_size_mb,
        psram_size_mb,
        psram_type: PsramType::Default,
        noota_first: false,
        vendor: "Adafruit",
        product,
        vid: if pids.is_empty() { None } else { Some(0x239A) },
        pids,
    }
}

/// Boards rendered into `boards.txt`, in output order.
pub static BOARDS: &[BoardDefinition] = &[
    // ── Metro ───────────────────────────────────────────────────────
    adafruit(Mcu::Esp32s2, "adafruit_metro_esp32s2", "METRO_ESP32S2", 4, 2,
        "Metro ESP32-S2", &[0x80DF, 0x00DF, 0x80E0]),
    BoardDefinition {
        psram_type: PsramType::Opi,
        ..adafruit(Mcu::Esp32s3, "adafruit_metro_esp32s3", "METRO_ESP32S3", 16, 8,
            "Metro ESP32-S3", &[0x8145, 0x0145, 0x8146])
    },
    adafruit(Mcu::Esp32s2, "adafruit_magtag29_esp32s2", "MAGTAG29_ESP32S2", 4, 2,
        "MagTag 2.9\"", &[0x80E5, 0x00E5, 0x80E6]),
    adafruit(Mcu::Esp32s2, "adafruit_funhouse_esp32s2", "FUNHOUSE_ESP32S2", 4, 2,
        "FunHouse", &[0x80F9, 0x00F9, 0x80FA]),
    // ── Feather ─────────────────────────────────────────────────────
    BoardDefinition {
        variant: Some("feather_esp32"),
        ..adafruit(Mcu::Esp32, "featheresp32", "FEATHER_ESP32", 4, 0, "ESP32 Feather", &[])
    },
    BoardDefinition {
        variant: Some("adafruit_feather_esp32_v2"),
        ..adafruit(Mcu::Esp32, "adafruit_feather_esp32_v2", "ADAFRUIT_FEATHER_ESP32_V2", 8, 2,
            "Feather ESP32 V2", &[])
    },
    adafruit(Mcu::Esp32s2, "adafruit_feather_esp32s2", "ADAFRUIT_FEATHER_ESP32S2", 4, 2,
        "Feather ESP32-S2", &[0x80EB, 0x00EB, 0x80EC]),
    adafruit(Mcu::Esp32s2, "adafruit_feather_esp32s2_tft", "ADAFRUIT_FEATHER_ESP32S2_TFT", 4, 2,
        "Feather ESP32-S2 TFT", &[0x810F, 0x010F, 0x8110]),
    adafruit(Mcu::Esp32s2, "adafruit_feather_esp32s2_reversetft", "ADAFRUIT_FEATHER_ESP32S2_REVTFT", 4, 2,
        "Feather ESP32-S2 Reverse TFT", &[0x80ED, 0x00ED, 0x80EE]),
    adafruit(Mcu::Esp32s3, "adafruit_feather_esp32s3", "ADAFRUIT_FEATHER_ESP32S3", 4, 2,
        "Feather ESP32-S3 2MB PSRAM", &[0x811B, 0x011B, 0x811C]),
    adafruit(Mcu::Esp32s3, "adafruit_feather_esp32s3_nopsram", "ADAFRUIT_FEATHER_ESP32S3_NOPSRAM", 8, 0,
        "Feather ESP32-S3 No PSRAM", &[0x8113, 0x0113, 0x8114]),
    adafruit(Mcu::Esp32s3, "adafruit_feather_esp32s3_tft", "ADAFRUIT_FEATHER_ESP32S3_TFT", 4, 2,
        "Feather ESP32-S3 TFT", &[0x811D, 0x011D, 0x811E]),
    adafruit(Mcu::Esp32s3, "adafruit_feather_esp32s3_reversetft", "ADAFRUIT_FEATHER_ESP32S3_REVTFT", 4, 2,
        "Feather ESP32-S3 Reverse TFT", &[0x8123, 0x0123, 0x8124]),
    // ── QT Py ───────────────────────────────────────────────────────
    BoardDefinition {
        variant: Some("adafruit_qtpy_esp32"),
        ..adafruit(Mcu::Esp32, "adafruit_qtpy_esp32_pico", "ADAFRUIT_QTPY_ESP32_PICO", 8, 2,
            "QT Py ESP32", &[])
    },
    BoardDefinition {
        vid: Some(0x303A),
        ..adafruit(Mcu::Esp32c3, "adafruit_qtpy_esp32c3", "ADAFRUIT_QTPY_ESP32C3", 4, 0,
            "QT Py ESP32-C3", &[0x1001])
    },
    adafruit(Mcu::Esp32s2, "adafruit_qtpy_esp32s2", "ADAFRUIT_QTPY_ESP32S2", 4, 2,
        "QT Py ESP32-S2", &[0x8111, 0x0111, 0x8112]),
    adafruit(Mcu::Esp32s3, "adafruit_qtpy_esp32s3_nopsram", "ADAFRUIT_QTPY_ESP32S3_NOPSRAM", 8, 0,
        "QT Py ESP32-S3 No PSRAM", &[0x8119, 0x0119, 0x811A]),
    adafruit(Mcu::Esp32s3, "adafruit_qtpy_esp32s3_n4r2", "ADAFRUIT_QTPY_ESP32S3_N4R2", 4, 2,
        "QT Py ESP32-S3 (4M Flash 2M PSRAM)", &[0x8143, 0x0143, 0x8144]),
    // ── Other ───────────────────────────────────────────────────────
    adafruit(Mcu::Esp32, "adafruit_itsybitsy_esp32", "ADAFRUIT_ITSYBITSY_ESP32", 8, 2,
        "ItsyBitsy ESP32", &[]),
    adafruit(Mcu::Esp32s3, "adafruit_matrixportal_esp32s3", "ADAFRUIT_MATRIXPORTAL_ESP32S3", 8, 2,
        "MatrixPortal ESP32-S3", &[0x8125, 0x0125, 0x8126]),
    BoardDefinition {
        psram_type: PsramType::Qspi,
        noota_first: true,
        ..adafruit(Mcu::Esp32s3, "adafruit_camera_esp32s3", "ADAFRUIT_CAMERA_ESP32S3", 4, 2,
            "pyCamera S3", &[0x0117, 0x8117, 0x8118])
    },
    BoardDefinition {
        psram_type: PsramType::Opi,
        ..adafruit(Mcu::Esp32s3, "adafruit_qualia_s3_rgb666", "QUALIA_S3_RGB666", 16, 8,
            "Qualia ESP32-S3 RGB666", &[0x8147, 0x0147, 0x8148])
    },
    adafruit(Mcu::Esp32s2, "adafruit_vindie_s2", "ADAFRUIT_VINDIE_S2", 4, 0,
        "Vindie S2", &[0x815F]),
];

/// Registry entry by board name.
pub fn board(name: &str) -> Option<&'static BoardDefinition> {
    BOARDS.iter().find(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mcu_has_one_profile() {
        for mcu in [Mcu::Esp32, Mcu::Esp32s2, Mcu::Esp32s3, Mcu::Esp32c3] {
            assert_eq!(MCU_PROFILES.iter().filter(|p| p.mcu == mcu).count(), 1);
            assert_eq!(mcu.profile().unwrap().mcu, mcu);
        }
    }

    #[test]
    fn board_names_are_unique() {
        for (i, b) in BOARDS.iter().enumerate() {
            assert!(
                BOARDS[i + 1..].iter().all(|other| other.name != b.name),
                "duplicate board {}",
                b.name
            );
        }
    }

    #[test]
    fn usb_boards_list_vid() {
        for b in BOARDS {
            assert_eq!(b.vid.is_some(), !b.pids.is_empty(), "{}", b.name);
        }
    }

    #[test]
    fn vindie_entry_matches_pin_table() {
        use crate::variants::vindie_s2::rev_b;
        let entry = board(rev_b::BOARD_NAME).unwrap();
        assert_eq!(entry.mcu, Mcu::Esp32s2);
        assert_eq!(entry.vid, Some(rev_b::USB_VID));
        assert_eq!(entry.pids, &[rev_b::USB_PID]);
        assert_eq!(entry.psram_size_mb, 0);
        assert_eq!(entry.product, rev_b::USB_PRODUCT);
        assert_eq!(entry.variant_dir(), rev_b::BOARD_NAME);
    }

    #[test]
    fn explicit_variant_dirs() {
        assert_eq!(board("featheresp32").unwrap().variant_dir(), "feather_esp32");
        assert_eq!(
            board("adafruit_qtpy_esp32_pico").unwrap().variant_dir(),
            "adafruit_qtpy_esp32"
        );
        assert_eq!(
            board("adafruit_feather_esp32s2").unwrap().variant_dir(),
            "adafruit_feather_esp32s2"
        );
    }
}
