//! `create` and `parse` over the file system.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use ota_core::constants::HEADER_STRING_LEN;
use ota_core::report::ImageReport;
use ota_core::utils::fmt_bytes;
use ota_core::{decode, encode, EncodedImage};

use crate::cli::{CreateArgs, ParseArgs};
use crate::render::{group_digits, render_created, render_report};

/// Read the firmware, build the OTA file and write it out.
pub fn run_create(args: &CreateArgs) -> Result<EncodedImage> {
    if !args.input.exists() {
        bail!("❌ Input not found: {}", args.input.display());
    }

    let firmware = fs::read(&args.input)
        .with_context(|| format!("failed to read firmware {}", args.input.display()))?;

    let params = args.to_params();
    println!("📦 Input binary: {}", args.input.display());
    println!("   Size: {} bytes", group_digits(firmware.len() as u64));
    println!("   Mode: {}", params.mode.label());

    let label_len = params.header_string_or_default().len();
    if label_len > HEADER_STRING_LEN {
        warn!("header string is {} bytes; only the first {} are kept", label_len, HEADER_STRING_LEN);
    }
    debug!("encode params: {:?}", params);

    let image = encode(&params, &firmware).context("failed to build OTA image")?;

    fs::write(&args.output, image.as_bytes())
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {} bytes to {}", image.len(), args.output.display());

    print!("{}", render_created(&args.output.display().to_string(), &image));
    Ok(image)
}

/// Read an OTA file and print what it contains.
pub fn run_parse(args: &ParseArgs) -> Result<ImageReport> {
    let report = inspect_file(&args.file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(report)
}

/// Decode `path` into a report without printing it.
pub fn inspect_file(path: &Path) -> Result<ImageReport> {
    if !path.exists() {
        bail!("❌ File not found: {}", path.display());
    }

    let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!("read {} bytes from {}", data.len(), path.display());

    let image = decode(&data).with_context(|| format!("{} is not an OTA image", path.display()))?;
    debug!("raw header string: {}", fmt_bytes(&image.header.header_string));
    let report = ImageReport::from_image(&image);

    for w in &report.warnings {
        warn!("{}: {}", path.display(), w);
    }
    Ok(report)
}
