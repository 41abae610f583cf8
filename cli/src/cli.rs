//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_num::maybe_hex;
use ota_core::constants::{
    DEFAULT_HEADER_STRING, DEFAULT_MAX_HARDWARE_VERSION, DEFAULT_MIN_HARDWARE_VERSION,
    DEFAULT_STACK_VERSION,
};
use ota_core::headers::{EncodingMode, OtaImageParams};

const AFTER_HELP: &str = "Examples:
  Create OTA (Zigbee spec compliant):
    zigbee-ota create -i firmware.bin -o firmware.ota \\
      --manufacturer-code 0x1049 --image-type 0x0001 \\
      --file-version 0x00000002

  Create OTA (Espressif-compatible):
    zigbee-ota create -i firmware.bin -o firmware.ota \\
      --manufacturer-code 0x1049 --image-type 0x0001 \\
      --file-version 0x00000002 --espressif-compatible

  Parse OTA file:
    zigbee-ota parse firmware.ota";

#[derive(Parser, Debug)]
#[command(
    name = "zigbee-ota",
    version,
    about = "Zigbee OTA File Generator & Parser",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create OTA file
    Create(CreateArgs),
    /// Parse OTA file
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Input .bin file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output .ota file
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    #[arg(long, value_parser = maybe_hex::<u16>)]
    pub manufacturer_code: u16,

    #[arg(long, value_parser = maybe_hex::<u16>)]
    pub image_type: u16,

    #[arg(long, value_parser = maybe_hex::<u32>)]
    pub file_version: u32,

    #[arg(long, value_parser = maybe_hex::<u16>, default_value_t = DEFAULT_STACK_VERSION)]
    pub stack_version: u16,

    #[arg(long, value_parser = maybe_hex::<u16>, default_value_t = DEFAULT_MIN_HARDWARE_VERSION)]
    pub min_hardware_version: u16,

    #[arg(long, value_parser = maybe_hex::<u16>, default_value_t = DEFAULT_MAX_HARDWARE_VERSION)]
    pub max_hardware_version: u16,

    #[arg(long, default_value = DEFAULT_HEADER_STRING)]
    pub header_string: String,

    /// Use Espressif-compatible format (includes header in Total Image Size)
    #[arg(long, alias = "vendor-compatible", action = ArgAction::SetTrue)]
    pub espressif_compatible: bool,
}

impl CreateArgs {
    pub fn mode(&self) -> EncodingMode {
        if self.espressif_compatible {
            EncodingMode::VendorCompatible
        } else {
            EncodingMode::SpecCompliant
        }
    }

    pub fn to_params(&self) -> OtaImageParams {
        OtaImageParams {
            manufacturer_code: self.manufacturer_code,
            image_type: self.image_type,
            file_version: self.file_version,
            stack_version: self.stack_version,
            min_hardware_version: self.min_hardware_version,
            max_hardware_version: self.max_hardware_version,
            header_string: Some(self.header_string.clone()),
            mode: self.mode(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// OTA file to parse
    pub file: PathBuf,

    /// Emit the report as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}
