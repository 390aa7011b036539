/// Arduino `boards.txt` generator for the Espressif board family.
///
/// Renders one section per board: identity and USB ids, upload and build
/// settings derived from the chip profile, then the Tools-menu entries
/// (USB, PSRAM, partitions, CPU/flash frequency, upload speed, debug level,
/// erase, Zigbee). Output goes to any `core::fmt::Write`, so the same code
/// fills a `heapless::String` on target or a `std::String` on the host.
use core::fmt::Write;

use crate::defaults::MCU_PROFILES;

/// Espressif chip families the core builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mcu {
    Esp32,
    Esp32s2,
    Esp32s3,
    Esp32c3,
}

impl Mcu {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mcu::Esp32 => "esp32",
            Mcu::Esp32s2 => "esp32s2",
            Mcu::Esp32s3 => "esp32s3",
            Mcu::Esp32c3 => "esp32c3",
        }
    }

    pub fn profile(&self) -> Option<&'static McuProfile> {
        MCU_PROFILES.iter().find(|p| p.mcu == *self)
    }
}

/// Chip-level build and upload settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McuProfile {
    pub mcu: Mcu,
    pub maximum_data_size: u32,
    pub tarch: &'static str,
    pub target: &'static str,
    pub dual_core: bool,
    pub bootloader_addr: &'static str,
    pub f_cpu: u32,
    /// 1200-bps touch reset before upload; `None` when the setting is not
    /// emitted at all (UART-only boards).
    pub touch1200: Option<bool>,
    /// Chip offers the USB-OTG / hardware CDC mode switch.
    pub usb_otg_mode: bool,
    pub native_usb: bool,
    /// Default "USB CDC On Boot"; `None` hides the menu.
    pub cdc_on_boot: Option<u8>,
    pub spi_mode: &'static str,
    pub psram_opi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsramType {
    /// Let the chip profile decide.
    Default,
    Qspi,
    Opi,
}

/// One board entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDefinition {
    pub mcu: Mcu,
    /// `boards.txt` key prefix.
    pub name: &'static str,
    /// Variant directory; defaults to `name`.
    pub variant: Option<&'static str>,
    /// `ARDUINO_<define>` board macro.
    pub define: &'static str,
    pub flash_size_mb: u8,
    pub psram_size_mb: u8,
    pub psram_type: PsramType,
    /// List the no-OTA TinyUF2 partition scheme first (makes it the default).
    pub noota_first: bool,
    pub vendor: &'static str,
    pub product: &'static str,
    pub vid: Option<u16>,
    pub pids: &'static [u16],
}

impl BoardDefinition {
    pub fn variant_dir(&self) -> &'static str {
        self.variant.unwrap_or(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardsTxtError {
    #[error("no chip profile for {0}")]
    NoProfile(&'static str),
    #[error("output buffer full")]
    Format(#[from] core::fmt::Error),
}

/// Render every board in `boards`, in order.
pub fn write_boards<W: Write + ?Sized>(
    out: &mut W,
    boards: &[BoardDefinition],
) -> Result<(), BoardsTxtError> {
    for board in boards {
        write_board(out, board)?;
    }
    Ok(())
}

/// Render one board section.
pub fn write_board<W: Write + ?Sized>(
    out: &mut W,
    board: &BoardDefinition,
) -> Result<(), BoardsTxtError> {
    let info = board
        .mcu
        .profile()
        .ok_or(BoardsTxtError::NoProfile(board.mcu.as_str()))?;
    log::debug!("rendering {} ({})", board.name, board.mcu.as_str());

    write_header(out, board)?;
    write_upload(out, board.name, info)?;
    write_build(out, board, info)?;
    write_loop_core(out, board.name, info)?;
    write_menu_usb(out, board.name, info)?;
    write_menu_psram(out, board, info)?;
    write_menu_partition(out, board, info)?;
    write_menu_freq(out, board.name, info)?;
    write_menu_flash(out, board, info)?;
    write_lines(out, board.name, UPLOAD_SPEED_MENU)?;
    write_lines(out, board.name, DEBUG_LEVEL_MENU)?;
    write_lines(out, board.name, ERASE_FLASH_MENU)?;
    write_lines(out, board.name, ZIGBEE_MENU)?;
    Ok(())
}

fn write_header<W: Write + ?Sized>(out: &mut W, board: &BoardDefinition) -> core::fmt::Result {
    let name = board.name;
    let vendor = board.vendor;
    let product = board.product;
    writeln!(out, "##############################################################")?;
    writeln!(out, "# {vendor} {product}")?;
    writeln!(out)?;
    writeln!(out, "{name}.name={vendor} {product}")?;
    if let Some(vid) = board.vid {
        for (i, pid) in board.pids.iter().enumerate() {
            writeln!(out, "{name}.vid.{i}=0x{vid:04X}")?;
            writeln!(out, "{name}.pid.{i}=0x{pid:04X}")?;
        }
    }
    writeln!(out)
}

fn write_upload<W: Write + ?Sized>(out: &mut W, name: &str, info: &McuProfile) -> core::fmt::Result {
    writeln!(out, "{name}.bootloader.tool=esptool_py")?;
    writeln!(out, "{name}.bootloader.tool.default=esptool_py")?;
    writeln!(out)?;
    writeln!(out, "{name}.upload.tool=esptool_py")?;
    writeln!(out, "{name}.upload.tool.default=esptool_py")?;
    writeln!(out, "{name}.upload.tool.network=esp_ota")?;
    writeln!(out)?;
    writeln!(out, "{name}.upload.maximum_size=1310720")?;
    writeln!(out, "{name}.upload.maximum_data_size={}", info.maximum_data_size)?;
    writeln!(out, "{name}.upload.flags=")?;
    writeln!(out, "{name}.upload.extra_flags=")?;

    match info.touch1200 {
        Some(touch) => {
            writeln!(out, "{name}.upload.use_1200bps_touch={touch}")?;
            writeln!(out, "{name}.upload.wait_for_upload_port={touch}")?;
            writeln!(out)?;
            writeln!(out, "{name}.serial.disableDTR=false")?;
            writeln!(out, "{name}.serial.disableRTS=false")?;
        }
        None => {
            writeln!(out)?;
            writeln!(out, "{name}.serial.disableDTR=true")?;
            writeln!(out, "{name}.serial.disableRTS=true")?;
        }
    }
    writeln!(out)
}

fn write_build<W: Write + ?Sized>(
    out: &mut W,
    board: &BoardDefinition,
    info: &McuProfile,
) -> core::fmt::Result {
    let name = board.name;
    writeln!(out, "{name}.build.tarch={}", info.tarch)?;
    writeln!(out, "{name}.build.bootloader_addr={}", info.bootloader_addr)?;
    writeln!(out, "{name}.build.target={}", info.target)?;
    writeln!(out, "{name}.build.mcu={}", board.mcu.as_str())?;
    writeln!(out, "{name}.build.core=esp32")?;
    writeln!(out, "{name}.build.variant={}", board.variant_dir())?;
    writeln!(out, "{name}.build.board={}", board.define)?;
    writeln!(out)?;

    if info.usb_otg_mode {
        writeln!(out, "{name}.build.usb_mode=0")?;
    }
    if let Some(cdc) = info.cdc_on_boot {
        writeln!(out, "{name}.build.cdc_on_boot={cdc}")?;
    }
    if info.native_usb {
        writeln!(out, "{name}.build.msc_on_boot=0")?;
        writeln!(out, "{name}.build.dfu_on_boot=0")?;
    }
    writeln!(out, "{name}.build.f_cpu={}L", info.f_cpu)?;
    writeln!(out, "{name}.build.flash_size={}MB", board.flash_size_mb)?;
    writeln!(out, "{name}.build.flash_freq=80m")?;
    writeln!(out, "{name}.build.flash_mode=dio")?;
    writeln!(out, "{name}.build.boot={}", info.spi_mode)?;
    writeln!(out, "{name}.build.partitions=default")?;
    writeln!(out, "{name}.build.defines=")?;

    if info.dual_core {
        writeln!(out, "{name}.build.loop_core=")?;
        writeln!(out, "{name}.build.event_core=")?;
    }

    if info.psram_opi {
        writeln!(out, "{name}.build.flash_type=qio")?;
        if board.psram_type == PsramType::Opi {
            writeln!(out, "{name}.build.psram_type=opi")?;
        } else {
            writeln!(out, "{name}.build.psram_type=qspi")?;
        }
        writeln!(out, "{name}.build.memory_type={{build.flash_type}}_{{build.psram_type}}")?;
    }

    writeln!(out)
}

fn write_loop_core<W: Write + ?Sized>(out: &mut W, name: &str, info: &McuProfile) -> core::fmt::Result {
    if !info.dual_core {
        return Ok(());
    }
    writeln!(out, "{name}.menu.LoopCore.1=Core 1")?;
    writeln!(out, "{name}.menu.LoopCore.1.build.loop_core=-DARDUINO_RUNNING_CORE=1")?;
    writeln!(out, "{name}.menu.LoopCore.0=Core 0")?;
    writeln!(out, "{name}.menu.LoopCore.0.build.loop_core=-DARDUINO_RUNNING_CORE=0")?;
    writeln!(out)?;

    writeln!(out, "{name}.menu.EventsCore.1=Core 1")?;
    writeln!(out, "{name}.menu.EventsCore.1.build.event_core=-DARDUINO_EVENT_RUNNING_CORE=1")?;
    writeln!(out, "{name}.menu.EventsCore.0=Core 0")?;
    writeln!(out, "{name}.menu.EventsCore.0.build.event_core=-DARDUINO_EVENT_RUNNING_CORE=0")?;
    writeln!(out)
}

fn write_menu_usb<W: Write + ?Sized>(out: &mut W, name: &str, info: &McuProfile) -> core::fmt::Result {
    let (require_otg, upload_cdc, upload_uart) = if info.usb_otg_mode {
        (" (Requires USB-OTG Mode)", "USB-OTG CDC (TinyUSB)", "UART0 / Hardware CDC")
    } else {
        ("", "Internal USB", "UART0")
    };

    if info.usb_otg_mode {
        writeln!(out, "{name}.menu.USBMode.default=USB-OTG (TinyUSB)")?;
        writeln!(out, "{name}.menu.USBMode.default.build.usb_mode=0")?;
        writeln!(out, "{name}.menu.USBMode.hwcdc=Hardware CDC and JTAG")?;
        writeln!(out, "{name}.menu.USBMode.hwcdc.build.usb_mode=1")?;
        writeln!(out)?;
    }

    if info.cdc_on_boot.is_some() {
        writeln!(out, "{name}.menu.CDCOnBoot.cdc=Enabled")?;
        writeln!(out, "{name}.menu.CDCOnBoot.cdc.build.cdc_on_boot=1")?;
        writeln!(out, "{name}.menu.CDCOnBoot.default=Disabled")?;
        writeln!(out, "{name}.menu.CDCOnBoot.default.build.cdc_on_boot=0")?;
        writeln!(out)?;
    }

    if info.native_usb {
        writeln!(out, "{name}.menu.MSCOnBoot.default=Disabled")?;
        writeln!(out, "{name}.menu.MSCOnBoot.default.build.msc_on_boot=0")?;
        writeln!(out, "{name}.menu.MSCOnBoot.msc=Enabled{require_otg}")?;
        writeln!(out, "{name}.menu.MSCOnBoot.msc.build.msc_on_boot=1")?;
        writeln!(out)?;

        writeln!(out, "{name}.menu.DFUOnBoot.default=Disabled")?;
        writeln!(out, "{name}.menu.DFUOnBoot.default.build.dfu_on_boot=0")?;
        writeln!(out, "{name}.menu.DFUOnBoot.dfu=Enabled{require_otg}")?;
        writeln!(out, "{name}.menu.DFUOnBoot.dfu.build.dfu_on_boot=1")?;
        writeln!(out)?;

        writeln!(out, "{name}.menu.UploadMode.cdc={upload_cdc}")?;
        writeln!(out, "{name}.menu.UploadMode.cdc.upload.use_1200bps_touch=true")?;
        writeln!(out, "{name}.menu.UploadMode.cdc.upload.wait_for_upload_port=true")?;
        writeln!(out, "{name}.menu.UploadMode.default={upload_uart}")?;
        writeln!(out, "{name}.menu.UploadMode.default.upload.use_1200bps_touch=false")?;
        writeln!(out, "{name}.menu.UploadMode.default.upload.wait_for_upload_port=false")?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_menu_psram<W: Write + ?Sized>(
    out: &mut W,
    board: &BoardDefinition,
    info: &McuProfile,
) -> core::fmt::Result {
    if board.psram_size_mb == 0 {
        return Ok(());
    }
    let name = board.name;
    let cache_fix = if board.mcu == Mcu::Esp32 {
        " -mfix-esp32-psram-cache-issue -mfix-esp32-psram-cache-strategy=memw"
    } else {
        ""
    };

    if info.psram_opi {
        if board.psram_type == PsramType::Opi {
            writeln!(out, "{name}.menu.PSRAM.opi=OPI PSRAM")?;
            writeln!(out, "{name}.menu.PSRAM.opi.build.defines=-DBOARD_HAS_PSRAM")?;
            writeln!(out, "{name}.menu.PSRAM.opi.build.psram_type=opi")?;
            writeln!(out, "{name}.menu.PSRAM.disabled=Disabled")?;
            writeln!(out, "{name}.menu.PSRAM.disabled.build.defines=")?;
            writeln!(out, "{name}.menu.PSRAM.disabled.build.psram_type=opi")?;
        } else {
            writeln!(out, "{name}.menu.PSRAM.enabled=QSPI PSRAM")?;
            writeln!(out, "{name}.menu.PSRAM.enabled.build.defines=-DBOARD_HAS_PSRAM{cache_fix}")?;
            writeln!(out, "{name}.menu.PSRAM.enabled.build.psram_type=qspi")?;
            writeln!(out, "{name}.menu.PSRAM.disabled=Disabled")?;
            writeln!(out, "{name}.menu.PSRAM.disabled.build.defines=")?;
            writeln!(out, "{name}.menu.PSRAM.disabled.build.psram_type=qspi")?;
            writeln!(out, "{name}.menu.PSRAM.opi=OPI PSRAM")?;
            writeln!(out, "{name}.menu.PSRAM.opi.build.defines=-DBOARD_HAS_PSRAM")?;
            writeln!(out, "{name}.menu.PSRAM.opi.build.psram_type=opi")?;
        }
    } else {
        writeln!(out, "{name}.menu.PSRAM.enabled=Enabled")?;
        writeln!(out, "{name}.menu.PSRAM.enabled.build.defines=-DBOARD_HAS_PSRAM{cache_fix}")?;
        writeln!(out, "{name}.menu.PSRAM.disabled=Disabled")?;
        writeln!(out, "{name}.menu.PSRAM.disabled.build.defines=")?;
    }
    writeln!(out)
}

/// A TinyUF2 partition scheme: bootloader-tinyuf2 plus the UF2 app image.
struct Tinyuf2Scheme {
    key: &'static str,
    label: &'static str,
    partitions: &'static str,
    maximum_size: u32,
    /// Flash offset the `tinyuf2.bin` image is written to.
    offset: u32,
}

/// Regular partition scheme: key, menu label, partition table, app size limit.
type Scheme = (&'static str, &'static str, &'static str, Option<u32>);

/// TinyUF2 schemes (with OTA, without OTA) and the regular schemes per flash size.
fn partition_schemes(flash_size_mb: u8) -> Option<([Tinyuf2Scheme; 2], &'static [Scheme])> {
    match flash_size_mb {
        4 => Some((
            [
                Tinyuf2Scheme {
                    key: "tinyuf2",
                    label: "TinyUF2 4MB (1.3MB APP/960KB FATFS)",
                    partitions: "tinyuf2-partitions-4MB",
                    maximum_size: 1441792,
                    offset: 0x2d0000,
                },
                Tinyuf2Scheme {
                    key: "tinyuf2_noota",
                    label: "TinyUF2 4MB No OTA (2.7MB APP/960KB FATFS)",
                    partitions: "tinyuf2-partitions-4MB-noota",
                    maximum_size: 2883584,
                    offset: 0x2d0000,
                },
            ],
            SCHEMES_4MB,
        )),
        8 => Some((
            [
                Tinyuf2Scheme {
                    key: "tinyuf2",
                    label: "TinyUF2 8MB (2MB APP/3.7MB FATFS)",
                    partitions: "tinyuf2-partitions-8MB",
                    maximum_size: 2097152,
                    offset: 0x410000,
                },
                Tinyuf2Scheme {
                    key: "tinyuf2_noota",
                    label: "TinyUF2 8MB No OTA (4MB APP/3.7MB FATFS)",
                    partitions: "tinyuf2-partitions-8MB-noota",
                    maximum_size: 4194304,
                    offset: 0x410000,
                },
            ],
            SCHEMES_8MB,
        )),
        16 => Some((
            [
                Tinyuf2Scheme {
                    key: "tinyuf2",
                    label: "TinyUF2 16MB (2MB APP/11.6MB FATFS)",
                    partitions: "tinyuf2-partitions-16MB",
                    maximum_size: 2097152,
                    offset: 0x410000,
                },
                Tinyuf2Scheme {
                    key: "tinyuf2_noota",
                    label: "TinyUF2 16MB No OTA(4MB APP/11.6MB FATFS)",
                    partitions: "tinyuf2-partitions-16MB-noota",
                    maximum_size: 4194304,
                    offset: 0x410000,
                },
            ],
            SCHEMES_16MB,
        )),
        _ => None,
    }
}

static SCHEMES_4MB: &[Scheme] = &[
    ("default", "Default 4MB with spiffs (1.2MB APP/1.5MB SPIFFS)", "default", None),
    ("defaultffat", "Default 4MB with ffat (1.2MB APP/1.5MB FATFS)", "default_ffat", None),
    ("minimal", "Minimal (1.3MB APP/700KB SPIFFS)", "minimal", None),
    ("no_ota", "No OTA (2MB APP/2MB SPIFFS)", "no_ota", Some(2097152)),
    ("noota_3g", "No OTA (1MB APP/3MB SPIFFS)", "noota_3g", Some(1048576)),
    ("noota_ffat", "No OTA (2MB APP/2MB FATFS)", "noota_ffat", Some(2097152)),
    ("noota_3gffat", "No OTA (1MB APP/3MB FATFS)", "noota_3gffat", Some(1048576)),
    ("huge_app", "Huge APP (3MB No OTA/1MB SPIFFS)", "huge_app", Some(3145728)),
    ("min_spiffs", "Minimal SPIFFS (1.9MB APP with OTA/190KB SPIFFS)", "min_spiffs", Some(1966080)),
];

static SCHEMES_8MB: &[Scheme] = &[
    ("default_8MB", "Default (3MB APP/1.5MB SPIFFS)", "default_8MB", Some(3342336)),
];

static SCHEMES_16MB: &[Scheme] = &[
    ("default_16MB", "Default (6.25MB APP/3.43MB SPIFFS)", "default_16MB", Some(6553600)),
    ("large_spiffs", "Large SPIFFS (4.5MB APP/6.93MB SPIFFS)", "large_spiffs_16MB", Some(4718592)),
    ("app3M_fat9M_16MB", "16M Flash (3MB APP/9MB FATFS)", "app3M_fat9M_16MB", Some(3145728)),
    ("fatflash", "16M Flash (2MB APP/12.5MB FAT)", "ffat", Some(2097152)),
];

fn write_tinyuf2_scheme<W: Write + ?Sized>(out: &mut W, name: &str, s: &Tinyuf2Scheme) -> core::fmt::Result {
    let key = s.key;
    writeln!(out, "{name}.menu.PartitionScheme.{key}={}", s.label)?;
    writeln!(out, "{name}.menu.PartitionScheme.{key}.build.custom_bootloader=bootloader-tinyuf2")?;
    writeln!(out, "{name}.menu.PartitionScheme.{key}.build.partitions={}", s.partitions)?;
    writeln!(out, "{name}.menu.PartitionScheme.{key}.upload.maximum_size={}", s.maximum_size)?;
    writeln!(
        out,
        "{name}.menu.PartitionScheme.{key}.upload.extra_flags={:#x} \"{{runtime.platform.path}}/variants/{{build.variant}}/tinyuf2.bin\"",
        s.offset
    )
}

fn write_menu_partition<W: Write + ?Sized>(
    out: &mut W,
    board: &BoardDefinition,
    info: &McuProfile,
) -> core::fmt::Result {
    let name = board.name;
    let Some(([with_ota, no_ota], schemes)) = partition_schemes(board.flash_size_mb) else {
        log::warn!(
            "{name}: no partition schemes for {}MB flash",
            board.flash_size_mb
        );
        return writeln!(out);
    };

    if info.native_usb {
        let (first, second) = if board.noota_first {
            (&no_ota, &with_ota)
        } else {
            (&with_ota, &no_ota)
        };
        write_tinyuf2_scheme(out, name, first)?;
        write_tinyuf2_scheme(out, name, second)?;
    }

    for &(key, label, partitions, maximum_size) in schemes {
        writeln!(out, "{name}.menu.PartitionScheme.{key}={label}")?;
        writeln!(out, "{name}.menu.PartitionScheme.{key}.build.partitions={partitions}")?;
        if let Some(size) = maximum_size {
            writeln!(out, "{name}.menu.PartitionScheme.{key}.upload.maximum_size={size}")?;
        }
    }
    writeln!(out)
}

fn write_menu_freq<W: Write + ?Sized>(out: &mut W, name: &str, info: &McuProfile) -> core::fmt::Result {
    let radio = if info.mcu == Mcu::Esp32 {
        "(WiFi/BT)"
    } else {
        "(WiFi)"
    };

    if info.f_cpu == 240_000_000 {
        writeln!(out, "{name}.menu.CPUFreq.240=240MHz {radio}")?;
        writeln!(out, "{name}.menu.CPUFreq.240.build.f_cpu=240000000L")?;
    }
    writeln!(out, "{name}.menu.CPUFreq.160=160MHz {radio}")?;
    writeln!(out, "{name}.menu.CPUFreq.160.build.f_cpu=160000000L")?;
    writeln!(out, "{name}.menu.CPUFreq.80=80MHz {radio}")?;
    writeln!(out, "{name}.menu.CPUFreq.80.build.f_cpu=80000000L")?;
    for mhz in [40, 20, 10] {
        writeln!(out, "{name}.menu.CPUFreq.{mhz}={mhz}MHz")?;
        writeln!(out, "{name}.menu.CPUFreq.{mhz}.build.f_cpu={mhz}000000L")?;
    }
    writeln!(out)
}

/// ESP32-S3 flash modes: key, label, flash_mode, boot, boot_freq.
static S3_FLASH_MODES: &[(&str, &str, &str, &str, &str)] = &[
    ("qio", "QIO 80MHz", "dio", "qio", "80m"),
    ("qio120", "QIO 120MHz", "dio", "qio", "120m"),
    ("dio", "DIO 80MHz", "dio", "dio", "80m"),
    ("opi", "OPI 80MHz", "dout", "opi", "80m"),
];

fn write_menu_flash<W: Write + ?Sized>(
    out: &mut W,
    board: &BoardDefinition,
    info: &McuProfile,
) -> core::fmt::Result {
    let name = board.name;
    if board.mcu == Mcu::Esp32s3 {
        for &(key, label, flash_mode, boot, boot_freq) in S3_FLASH_MODES {
            writeln!(out, "{name}.menu.FlashMode.{key}={label}")?;
            writeln!(out, "{name}.menu.FlashMode.{key}.build.flash_mode={flash_mode}")?;
            writeln!(out, "{name}.menu.FlashMode.{key}.build.boot={boot}")?;
            writeln!(out, "{name}.menu.FlashMode.{key}.build.boot_freq={boot_freq}")?;
            writeln!(out, "{name}.menu.FlashMode.{key}.build.flash_freq=80m")?;
        }
    } else {
        if info.spi_mode == "qio" {
            writeln!(out, "{name}.menu.FlashMode.qio=QIO")?;
            writeln!(out, "{name}.menu.FlashMode.qio.build.flash_mode=dio")?;
            writeln!(out, "{name}.menu.FlashMode.qio.build.boot=qio")?;
            writeln!(out, "{name}.menu.FlashMode.dio=DIO")?;
            writeln!(out, "{name}.menu.FlashMode.dio.build.flash_mode=dio")?;
            writeln!(out, "{name}.menu.FlashMode.dio.build.boot=dio")?;
            writeln!(out)?;
        }
        writeln!(out, "{name}.menu.FlashFreq.80=80MHz")?;
        writeln!(out, "{name}.menu.FlashFreq.80.build.flash_freq=80m")?;
        writeln!(out, "{name}.menu.FlashFreq.40=40MHz")?;
        writeln!(out, "{name}.menu.FlashFreq.40.build.flash_freq=40m")?;
    }

    let size = board.flash_size_mb;
    let megabits = size as u32 * 8;
    writeln!(out)?;
    writeln!(out, "{name}.menu.FlashSize.{size}M={size}MB ({megabits}Mb)")?;
    writeln!(out, "{name}.menu.FlashSize.{size}M.build.flash_size={size}MB")?;
    writeln!(out)
}

static UPLOAD_SPEED_MENU: &[&str] = &[
    "menu.UploadSpeed.921600=921600",
    "menu.UploadSpeed.921600.upload.speed=921600",
    "menu.UploadSpeed.115200=115200",
    "menu.UploadSpeed.115200.upload.speed=115200",
    "menu.UploadSpeed.256000.windows=256000",
    "menu.UploadSpeed.256000.upload.speed=256000",
    "menu.UploadSpeed.230400.windows.upload.speed=256000",
    "menu.UploadSpeed.230400=230400",
    "menu.UploadSpeed.230400.upload.speed=230400",
    "menu.UploadSpeed.460800.linux=460800",
    "menu.UploadSpeed.460800.macosx=460800",
    "menu.UploadSpeed.460800.upload.speed=460800",
    "menu.UploadSpeed.512000.windows=512000",
    "menu.UploadSpeed.512000.upload.speed=512000",
];

static DEBUG_LEVEL_MENU: &[&str] = &[
    "menu.DebugLevel.none=None",
    "menu.DebugLevel.none.build.code_debug=0",
    "menu.DebugLevel.error=Error",
    "menu.DebugLevel.error.build.code_debug=1",
    "menu.DebugLevel.warn=Warn",
    "menu.DebugLevel.warn.build.code_debug=2",
    "menu.DebugLevel.info=Info",
    "menu.DebugLevel.info.build.code_debug=3",
    "menu.DebugLevel.debug=Debug",
    "menu.DebugLevel.debug.build.code_debug=4",
    "menu.DebugLevel.verbose=Verbose",
    "menu.DebugLevel.verbose.build.code_debug=5",
];

static ERASE_FLASH_MENU: &[&str] = &[
    "menu.EraseFlash.none=Disabled",
    "menu.EraseFlash.none.upload.erase_cmd=",
    "menu.EraseFlash.all=Enabled",
    "menu.EraseFlash.all.upload.erase_cmd=-e",
];

static ZIGBEE_MENU: &[&str] = &[
    "menu.ZigbeeMode.default=Disabled",
    "menu.ZigbeeMode.default.build.zigbee_mode=",
    "menu.ZigbeeMode.default.build.zigbee_libs=",
    "menu.ZigbeeMode.zczr=Zigbee ZCZR (coordinator)",
    "menu.ZigbeeMode.zczr.build.zigbee_mode=-DZIGBEE_MODE_ZCZR",
    "menu.ZigbeeMode.zczr.build.zigbee_libs=-lesp_zb_api_zczr -lesp_zb_cli_command -lzboss_stack.zczr.trace -lzboss_stack.zczr -lzboss_port",
];

/// Fixed menu block: every line prefixed with the board name, then a blank line.
fn write_lines<W: Write + ?Sized>(out: &mut W, name: &str, lines: &[&str]) -> core::fmt::Result {
    for line in lines {
        writeln!(out, "{name}.{line}")?;
    }
    writeln!(out)
}
