//! Human-readable rendering of create/parse results.

use std::fmt::Write as _;

use ota_core::constants::OTA_HEADER_LEN_MIN;
use ota_core::headers::EncodingMode;
use ota_core::report::ImageReport;
use ota_core::EncodedImage;

const RULE_WIDTH: usize = 60;

/// Thousands separators, as in `12,345`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn detected_format(mode: Option<EncodingMode>) -> &'static str {
    match mode {
        Some(EncodingMode::VendorCompatible) => "Espressif-style (includes header)",
        Some(EncodingMode::SpecCompliant) => "Zigbee spec compliant",
        None => "Non-standard",
    }
}

/// Summary printed after `create`.
pub fn render_created(output: &str, image: &EncodedImage) -> String {
    let mut s = String::new();
    let h = &image.header;
    let _ = writeln!(s, "\n✅ OTA file generated: {}", output);
    let _ = writeln!(s, "   Header: {} bytes", h.encoded_len());
    let _ = writeln!(s, "   Total Image Size field: {} bytes", group_digits(u64::from(h.total_image_size)));
    let _ = writeln!(s, "   Actual OTA file size: {} bytes", group_digits(image.len() as u64));
    let _ = writeln!(s, "   SHA512: {}", image.sha512_hex());
    s
}

/// Full text report for `parse`.
pub fn render_report(r: &ImageReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut s = String::new();

    let _ = writeln!(s, "\n{}", rule);
    let _ = writeln!(s, "📋 ZIGBEE OTA FILE INFORMATION");
    let _ = writeln!(s, "{}", rule);
    let _ = writeln!(s, "Magic Number:      0x{:08X} ✅", r.magic);
    let _ = writeln!(s, "Header Version:    0x{:04X}", r.header_version);
    let extended = if usize::from(r.header_length) > OTA_HEADER_LEN_MIN { " (Extended)" } else { "" };
    let _ = writeln!(s, "Header Length:     {} bytes{}", r.header_length, extended);
    let _ = writeln!(s, "Field Control:     0x{:04X}", r.field_control);
    let _ = writeln!(s, "Manufacturer Code: 0x{:04X} ({})", r.manufacturer_code, r.manufacturer_code);
    let _ = writeln!(s, "Image Type:        0x{:04X} ({})", r.image_type, r.image_type);
    let _ = writeln!(s, "File Version:      0x{:08X}", r.file_version);
    let _ = writeln!(s, "Stack Version:     0x{:04X}", r.stack_version);
    let _ = writeln!(s, "Header String:     '{}'", r.header_string);
    let _ = writeln!(s, "Total Image Size:  {} bytes (in header)", group_digits(u64::from(r.total_image_size)));

    if let Some(hw) = r.hardware_versions {
        let _ = writeln!(s, "Min HW Version:    {}", hw.min);
        let _ = writeln!(s, "Max HW Version:    {}", hw.max);
    }

    let _ = writeln!(s, "Total File Size:   {} bytes", group_digits(r.file_size as u64));
    let _ = writeln!(s, "Format detected:   {}", detected_format(r.detected_mode));
    let _ = writeln!(s, "\nSHA512 (for Z2M):  {}", r.sha512);

    let _ = writeln!(s, "\n📦 SUB-ELEMENTS:");
    for el in &r.sub_elements {
        let _ = writeln!(s, "   • {} (Tag 0x{:04X})", el.name, el.tag_id);
        let _ = writeln!(s, "     Length: {} bytes", group_digits(u64::from(el.length)));
        if el.truncated {
            let _ = writeln!(s, "     ⚠️  only {} bytes present", group_digits(el.available as u64));
        }
    }

    if !r.warnings.is_empty() {
        let _ = writeln!(s, "\n⚠️  WARNINGS:");
        for w in &r.warnings {
            let _ = writeln!(s, "   • {}", w);
        }
    }

    let _ = writeln!(s, "{}", rule);
    let _ = writeln!(s, "✅ OTA file is valid!");
    let _ = writeln!(s, "{}", rule);
    s
}
