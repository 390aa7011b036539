//! TinyUF2 bootloader release assets.
//!
//! Names the release archive for each native-USB variant and maps the archive
//! members onto the files the variant directory expects. Fetching and
//! unpacking is left to the caller.
use core::fmt::{self, Write};

use heapless::String;

pub const TINYUF2_VERSION: &str = "0.16.0";

const RELEASE_BASE: &str = "https://github.com/adafruit/tinyuf2/releases/download";

pub type AssetName = String<96>;
pub type AssetUrl = String<192>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tinyuf2Variant {
    /// Variant directory name in the Arduino core.
    pub variant: &'static str,
    /// Board name used by the TinyUF2 release when it differs.
    pub download_name: Option<&'static str>,
}

impl Tinyuf2Variant {
    const fn same(variant: &'static str) -> Self {
        Self {
            variant,
            download_name: None,
        }
    }

    const fn renamed(variant: &'static str, download_name: &'static str) -> Self {
        Self {
            variant,
            download_name: Some(download_name),
        }
    }

    pub fn download_name(&self) -> &'static str {
        self.download_name.unwrap_or(self.variant)
    }

    /// `tinyuf2-<board>-<version>.zip`
    pub fn asset_name(&self) -> Result<AssetName, fmt::Error> {
        let mut name = AssetName::new();
        write!(name, "tinyuf2-{}-{}.zip", self.download_name(), TINYUF2_VERSION)?;
        Ok(name)
    }

    pub fn release_url(&self) -> Result<AssetUrl, fmt::Error> {
        let mut url = AssetUrl::new();
        write!(
            url,
            "{RELEASE_BASE}/{TINYUF2_VERSION}/tinyuf2-{}-{TINYUF2_VERSION}.zip",
            self.download_name()
        )?;
        Ok(url)
    }

    /// Install directory, relative to the core root.
    pub fn variant_dir(&self) -> Result<AssetName, fmt::Error> {
        let mut dir = AssetName::new();
        write!(dir, "variants/{}", self.variant)?;
        Ok(dir)
    }
}

/// Native-USB variants that ship a TinyUF2 bootloader.
pub static VARIANTS: &[Tinyuf2Variant] = &[
    // Feather
    Tinyuf2Variant::same("adafruit_feather_esp32s2"),
    Tinyuf2Variant::renamed(
        "adafruit_feather_esp32s2_reversetft",
        "adafruit_feather_esp32s2_reverse_tft",
    ),
    Tinyuf2Variant::same("adafruit_feather_esp32s2_tft"),
    Tinyuf2Variant::same("adafruit_feather_esp32s3"),
    Tinyuf2Variant::same("adafruit_feather_esp32s3_nopsram"),
    Tinyuf2Variant::renamed(
        "adafruit_feather_esp32s3_reversetft",
        "adafruit_feather_esp32s3_reverse_tft",
    ),
    Tinyuf2Variant::same("adafruit_feather_esp32s3_tft"),
    // FunHouse, MagTag, Metro
    Tinyuf2Variant::same("adafruit_funhouse_esp32s2"),
    Tinyuf2Variant::renamed("adafruit_magtag29_esp32s2", "adafruit_magtag_29gray"),
    Tinyuf2Variant::same("adafruit_metro_esp32s2"),
    Tinyuf2Variant::same("adafruit_metro_esp32s3"),
    // QT Py
    Tinyuf2Variant::same("adafruit_qtpy_esp32s2"),
    Tinyuf2Variant::renamed("adafruit_qtpy_esp32s3_nopsram", "adafruit_qtpy_esp32s3"),
    Tinyuf2Variant::same("adafruit_qtpy_esp32s3_n4r2"),
];

pub fn find(variant: &str) -> Option<&'static Tinyuf2Variant> {
    VARIANTS.iter().find(|v| v.variant == variant)
}

/// Where an archive member ends up inside the variant directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstalledName<'a> {
    /// Fixed file name.
    File(&'static str),
    /// Partition table: `<stem>-tinyuf2.csv`.
    PartitionTable { stem: &'a str },
}

impl fmt::Display for InstalledName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstalledName::File(name) => f.write_str(name),
            InstalledName::PartitionTable { stem } => write!(f, "{stem}-tinyuf2.csv"),
        }
    }
}

/// Installed name for an archive member, or `None` if it is not installed.
pub fn installed_name(member: &str) -> Option<InstalledName<'_>> {
    match member {
        "bootloader.bin" => Some(InstalledName::File("bootloader-tinyuf2.bin")),
        "tinyuf2.bin" => Some(InstalledName::File("tinyuf2.bin")),
        _ => member
            .strip_suffix(".csv")
            .map(|stem| InstalledName::PartitionTable { stem }),
    }
}

/// Images every release archive carries.
pub const IMAGE_MEMBERS: [&str; 2] = ["bootloader.bin", "tinyuf2.bin"];

/// One line naming the asset and its URL, then one indented line per
/// archive member with its install path (or `skipped`).
pub fn write_install_plan<W: Write + ?Sized>(
    out: &mut W,
    variant: &Tinyuf2Variant,
    members: &[&str],
) -> fmt::Result {
    writeln!(
        out,
        "{}\t{}\t{}",
        variant.variant,
        variant.asset_name()?,
        variant.release_url()?
    )?;
    let dir = variant.variant_dir()?;
    for member in members {
        match installed_name(member) {
            Some(name) => writeln!(out, "  {member} -> {dir}/{name}")?,
            None => writeln!(out, "  {member} skipped")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::defaults;
    use std::string::ToString;

    #[test]
    fn default_download_name_is_variant() {
        let v = find("adafruit_metro_esp32s3").unwrap();
        assert_eq!(v.download_name(), "adafruit_metro_esp32s3");
        assert_eq!(v.asset_name().unwrap().as_str(), "tinyuf2-adafruit_metro_esp32s3-0.16.0.zip");
        assert_eq!(
            v.release_url().unwrap().as_str(),
            "https://github.com/adafruit/tinyuf2/releases/download/0.16.0/tinyuf2-adafruit_metro_esp32s3-0.16.0.zip"
        );
        assert_eq!(v.variant_dir().unwrap().as_str(), "variants/adafruit_metro_esp32s3");
    }

    #[test]
    fn renamed_downloads() {
        let v = find("adafruit_magtag29_esp32s2").unwrap();
        assert_eq!(v.asset_name().unwrap().as_str(), "tinyuf2-adafruit_magtag_29gray-0.16.0.zip");
        // Installed under the core's name, not the release's
        assert_eq!(v.variant_dir().unwrap().as_str(), "variants/adafruit_magtag29_esp32s2");

        let v = find("adafruit_qtpy_esp32s3_nopsram").unwrap();
        assert_eq!(v.download_name(), "adafruit_qtpy_esp32s3");
    }

    #[test]
    fn unknown_variant() {
        assert!(find("featheresp32").is_none());
    }

    #[test]
    fn every_variant_is_a_native_usb_board() {
        for v in VARIANTS {
            let board = defaults::board(v.variant)
                .unwrap_or_else(|| panic!("{} not in registry", v.variant));
            assert!(board.mcu.profile().unwrap().native_usb, "{}", v.variant);
            assert!(v.release_url().is_ok());
        }
    }

    #[test]
    fn archive_members() {
        assert_eq!(
            installed_name("bootloader.bin").unwrap().to_string(),
            "bootloader-tinyuf2.bin"
        );
        assert_eq!(installed_name("tinyuf2.bin").unwrap().to_string(), "tinyuf2.bin");
        assert_eq!(
            installed_name("partitions-4MB.csv").unwrap().to_string(),
            "partitions-4MB-tinyuf2.csv"
        );
        assert_eq!(
            installed_name("partitions-4MB.csv"),
            Some(InstalledName::PartitionTable { stem: "partitions-4MB" })
        );
        assert_eq!(installed_name("combined.bin"), None);
        assert_eq!(installed_name("update-tinyuf2.uf2"), None);
    }

    #[test]
    fn install_plan_lists_asset_and_paths() {
        let v = find("adafruit_feather_esp32s2_reversetft").unwrap();
        let mut out = std::string::String::new();
        let members = ["bootloader.bin", "tinyuf2.bin", "partitions-4MB.csv", "combined.bin"];
        write_install_plan(&mut out, v, &members).unwrap();
        let lines: std::vec::Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "adafruit_feather_esp32s2_reversetft\ttinyuf2-adafruit_feather_esp32s2_reverse_tft-0.16.0.zip\thttps://github.com/adafruit/tinyuf2/releases/download/0.16.0/tinyuf2-adafruit_feather_esp32s2_reverse_tft-0.16.0.zip",
                "  bootloader.bin -> variants/adafruit_feather_esp32s2_reversetft/bootloader-tinyuf2.bin",
                "  tinyuf2.bin -> variants/adafruit_feather_esp32s2_reversetft/tinyuf2.bin",
                "  partitions-4MB.csv -> variants/adafruit_feather_esp32s2_reversetft/partitions-4MB-tinyuf2.csv",
                "  combined.bin skipped",
            ]
        );
    }

    #[test]
    fn install_plan_overflow_is_an_error() {
        let v = find("adafruit_metro_esp32s3").unwrap();
        let mut out: String<32> = String::new();
        assert!(write_install_plan(&mut out, v, &IMAGE_MEMBERS).is_err());
    }
}
