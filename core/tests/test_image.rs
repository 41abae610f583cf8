// Whole-file suite: reference images, decode diagnostics and the report.

#[cfg(test)]
mod tests {
    use ota_core::{
        decode, encode,
        headers::{EncodingMode, OtaImageParams},
        report::ImageReport,
        subelements::{encode_sub_element_header, SubElementTag},
        ImageWarning, OtaError,
    };

    fn esp_params(mode: EncodingMode) -> OtaImageParams {
        OtaImageParams {
            manufacturer_code: 0x1049,
            image_type: 0x0001,
            file_version: 0x0000_0002,
            mode,
            ..Default::default()
        }
    }

// ## 📦 Reference images

    #[test]
    fn spec_compliant_reference_image() {
        let firmware = vec![0u8; 100];
        let image = encode(&esp_params(EncodingMode::SpecCompliant), &firmware).unwrap();
        let bytes = image.as_bytes();

        assert_eq!(bytes.len(), 166);
        assert_eq!(&bytes[52..56], &106u32.to_le_bytes());
        assert_eq!(&bytes[20..36], b"ESP32 Zigbee OTA");
        assert!(bytes[36..52].iter().all(|&b| b == 0xFF));
        // Upgrade Image record header, then the firmware verbatim
        assert_eq!(&bytes[60..66], &[0x00, 0x00, 100, 0, 0, 0]);
        assert_eq!(&bytes[66..], &firmware[..]);
    }

    #[test]
    fn vendor_compatible_reference_image() {
        let image = encode(&esp_params(EncodingMode::VendorCompatible), &[0u8; 100]).unwrap();
        let bytes = image.as_bytes();

        assert_eq!(bytes.len(), 166);
        assert_eq!(&bytes[52..56], &166u32.to_le_bytes());
        assert_eq!(&bytes[20..36], b"ESP32 Zigbee OTA");
        assert!(bytes[36..52].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn reference_image_has_one_upgrade_record() {
        let image = encode(&esp_params(EncodingMode::SpecCompliant), &[0u8; 100]).unwrap();
        let parsed = decode(image.as_bytes()).unwrap();

        let records: Vec<_> = parsed.sub_elements().collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag_id, 0x0000);
        assert_eq!(records[0].tag(), Some(SubElementTag::UpgradeImage));
        assert_eq!(records[0].describe(), "Upgrade Image");
        assert_eq!(records[0].length, 100);
        assert_eq!(parsed.detected_mode, Some(EncodingMode::SpecCompliant));
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn vendor_image_is_detected() {
        let image = encode(&esp_params(EncodingMode::VendorCompatible), b"fw").unwrap();
        let parsed = decode(image.as_bytes()).unwrap();
        assert_eq!(parsed.detected_mode, Some(EncodingMode::VendorCompatible));
    }

    #[test]
    fn encoding_is_deterministic() {
        let params = esp_params(EncodingMode::SpecCompliant);
        let a = encode(&params, b"same bytes").unwrap();
        let b = encode(&params, b"same bytes").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.sha512_hex(), b.sha512_hex());
    }

    #[test]
    fn empty_firmware_is_accepted() {
        let image = encode(&OtaImageParams::default(), &[]).unwrap();
        assert_eq!(image.len(), 66);
        assert_eq!(image.header.total_image_size, 6);
        let parsed = decode(image.as_bytes()).unwrap();
        let records: Vec<_> = parsed.sub_elements().collect();
        assert_eq!(records.len(), 1);
        assert!(records[0].payload.is_empty());
    }

    #[test]
    fn custom_header_string_roundtrips() {
        let params = OtaImageParams {
            header_string: Some("Router v2 – build 7".into()),
            ..esp_params(EncodingMode::VendorCompatible)
        };
        let image = encode(&params, b"x").unwrap();
        let parsed = decode(image.as_bytes()).unwrap();
        assert_eq!(parsed.header.header_string_text(), "Router v2 – build 7");
    }

// ## ❌ Fatal decode errors

    #[test]
    fn decode_too_short() {
        let err = decode(&[0u8; 55]).unwrap_err();
        assert_eq!(err, OtaError::TooShort { have: 55, need: 56 });
    }

    #[test]
    fn decode_invalid_magic() {
        let mut bytes = encode(&OtaImageParams::default(), b"fw").unwrap().into_bytes();
        bytes[0..4].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(OtaError::InvalidMagic { have: 0xDEAD_BEEF, .. })));
    }

// ## ⚠️ Diagnostics

    #[test]
    fn appended_records_make_size_non_standard() {
        let mut bytes = encode(&OtaImageParams::default(), b"fw").unwrap().into_bytes();
        bytes.extend_from_slice(&encode_sub_element_header(0x0001, 4));
        bytes.extend_from_slice(b"sig!");

        let parsed = decode(&bytes).unwrap();
        assert_eq!(parsed.detected_mode, None);
        assert_eq!(parsed.sub_elements().count(), 2);
        assert_eq!(
            parsed.warnings(),
            vec![ImageWarning::NonStandardImageSize {
                declared: 8,
                file_size: bytes.len(),
                header_length: 60,
            }]
        );
    }

    #[test]
    fn truncated_file_is_reported_not_rejected() {
        let bytes = encode(&OtaImageParams::default(), &[7u8; 50]).unwrap().into_bytes();
        let cut = &bytes[..80];

        let parsed = decode(cut).unwrap();
        let records: Vec<_> = parsed.sub_elements().collect();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_truncated());
        assert!(parsed.warnings().contains(&ImageWarning::TruncatedSubElement {
            offset: 60,
            tag_id: 0x0000,
            declared: 50,
            available: 14,
        }));
    }

    #[test]
    fn unknown_tag_and_trailing_bytes_are_reported() {
        let mut bytes = encode(&OtaImageParams::default(), b"fw").unwrap().into_bytes();
        bytes.extend_from_slice(&encode_sub_element_header(0xF00D, 0));
        bytes.extend_from_slice(&[0xEE; 3]);

        let warnings = decode(&bytes).unwrap().warnings();
        assert!(warnings.contains(&ImageWarning::UnknownTag { offset: 68, tag_id: 0xF00D }));
        assert!(warnings.contains(&ImageWarning::TrailingBytes { offset: 74, count: 3 }));
    }

    #[test]
    fn minimal_header_file_scans_from_56() {
        let mut bytes = encode(&OtaImageParams::default(), b"abcd").unwrap().into_bytes();
        // Rewrite as a 56-byte header without the hardware range
        bytes.drain(56..60);
        bytes[6..8].copy_from_slice(&56u16.to_le_bytes());
        bytes[8..10].copy_from_slice(&0u16.to_le_bytes());

        let parsed = decode(&bytes).unwrap();
        assert_eq!(parsed.header.hardware_versions, None);
        let records: Vec<_> = parsed.sub_elements().collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 56);
        assert_eq!(records[0].payload, b"abcd");
        assert_eq!(parsed.detected_mode, Some(EncodingMode::SpecCompliant));
    }

    #[test]
    fn flag_without_range_is_warned() {
        let bytes = encode(&OtaImageParams::default(), b"").unwrap().into_bytes();
        let parsed = decode(&bytes[..58]).unwrap();
        assert!(parsed.warnings().contains(&ImageWarning::MissingHardwareVersions {
            header_length: 60,
            file_size: 58,
        }));
    }

    #[test]
    fn decode_does_not_mutate_input() {
        let bytes = encode(&OtaImageParams::default(), &[1, 2, 3]).unwrap().into_bytes();
        let before = bytes.clone();
        let parsed = decode(&bytes).unwrap();
        let _ = parsed.warnings();
        let _ = parsed.sub_elements().count();
        assert_eq!(bytes, before);
    }

// ## 🧾 Report

    #[test]
    fn report_captures_header_and_records() {
        let image = encode(&esp_params(EncodingMode::SpecCompliant), &[0u8; 100]).unwrap();
        let parsed = decode(image.as_bytes()).unwrap();
        let report = ImageReport::from_image(&parsed);

        assert_eq!(report.manufacturer_code, 0x1049);
        assert_eq!(report.header_string, "ESP32 Zigbee OTA");
        assert_eq!(report.file_size, 166);
        assert_eq!(report.sha512, image.sha512_hex());
        assert_eq!(report.sub_elements.len(), 1);
        assert_eq!(report.sub_elements[0].name, "Upgrade Image");
        assert!(!report.sub_elements[0].truncated);
    }

    #[test]
    fn report_serializes_to_json() {
        let image = encode(&esp_params(EncodingMode::VendorCompatible), b"fw").unwrap();
        let parsed = decode(image.as_bytes()).unwrap();
        let report = ImageReport::from_image(&parsed);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["detected_mode"], "vendor_compatible");
        assert_eq!(json["hardware_versions"]["min"], 1);
        assert_eq!(json["sub_elements"][0]["length"], 2);

        let back: ImageReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
