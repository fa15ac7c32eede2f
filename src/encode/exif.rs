//! EXIF metadata embedding for JPEG outputs.
//!
//! Builds a raw Exif block from the run's metadata fields and splices it
//! into the encoded JPEG as an APP1 segment right after SOI. Only JPGs
//! carry metadata; PNG has no equivalent standard slot used here.
//!
//! A fixed Software tag identifies the generator; Artist, Copyright and
//! ImageDescription are written only when supplied.

use crate::error::BannerError;
use crate::request::ExifFields;
use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use std::io::Cursor;

/// Value of the Software tag written into every EXIF block.
const SOFTWARE_TAG: &str = "make_banner";

/// APP1 payload limit: segment length is a 16-bit big-endian count that
/// includes the two length bytes and the 6-byte Exif identifier.
const MAX_APP1_PAYLOAD: usize = 65535 - 2 - 6;

fn ascii_field(tag: Tag, value: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![value.as_bytes().to_vec()]),
    }
}

/// Serialize the metadata fields into a raw Exif (TIFF) block.
pub fn build_exif(fields: &ExifFields) -> Result<Vec<u8>, BannerError> {
    let mut owned = vec![ascii_field(Tag::Software, SOFTWARE_TAG)];
    if let Some(artist) = &fields.artist {
        owned.push(ascii_field(Tag::Artist, artist));
    }
    if let Some(copyright) = &fields.copyright {
        owned.push(ascii_field(Tag::Copyright, copyright));
    }
    if let Some(description) = &fields.description {
        owned.push(ascii_field(Tag::ImageDescription, description));
    }

    let mut writer = Writer::new();
    for field in &owned {
        writer.push_field(field);
    }

    let mut buf = Cursor::new(Vec::new());
    writer
        .write(&mut buf, false)
        .map_err(|e| BannerError::encode_failed("exif", e.to_string()))?;

    Ok(buf.into_inner())
}

/// Splice a raw Exif block into a JPEG as an APP1 segment.
pub fn embed_exif_jpeg(jpeg: &[u8], exif_payload: &[u8]) -> Result<Vec<u8>, BannerError> {
    if jpeg.len() < 2 || jpeg[0] != 0xFF || jpeg[1] != 0xD8 {
        return Err(BannerError::encode_failed("exif", "not a JPEG stream"));
    }
    if exif_payload.len() > MAX_APP1_PAYLOAD {
        return Err(BannerError::encode_failed(
            "exif",
            format!("metadata block too large: {} bytes", exif_payload.len()),
        ));
    }

    let segment_len = (exif_payload.len() + 2 + 6) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + exif_payload.len() + 10);
    out.extend_from_slice(&jpeg[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]); // APP1 marker
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(exif_payload);
    out.extend_from_slice(&jpeg[2..]);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encoder::encode_jpeg;
    use image::{Rgba, RgbaImage};

    fn sample_fields() -> ExifFields {
        ExifFields {
            artist: Some("WSS Studio Art".to_string()),
            copyright: Some("© 2025 WSS Studio Art".to_string()),
            description: Some("Conecta Libras banner".to_string()),
        }
    }

    fn sample_jpeg() -> Vec<u8> {
        let image = RgbaImage::from_pixel(8, 8, Rgba([120, 40, 200, 255]));
        encode_jpeg(&image, 92).unwrap()
    }

    fn read_ascii(parsed: &exif::Exif, tag: Tag) -> Option<String> {
        let field = parsed.get_field(tag, In::PRIMARY)?;
        match &field.value {
            Value::Ascii(parts) => Some(String::from_utf8_lossy(&parts[0]).into_owned()),
            _ => None,
        }
    }

    #[test]
    fn test_embedded_fields_round_trip() {
        let payload = build_exif(&sample_fields()).unwrap();
        let jpeg = embed_exif_jpeg(&sample_jpeg(), &payload).unwrap();

        let parsed = exif::Reader::new()
            .read_from_container(&mut Cursor::new(&jpeg))
            .unwrap();

        assert_eq!(read_ascii(&parsed, Tag::Artist).as_deref(), Some("WSS Studio Art"));
        assert_eq!(
            read_ascii(&parsed, Tag::Copyright).as_deref(),
            Some("© 2025 WSS Studio Art")
        );
        assert_eq!(
            read_ascii(&parsed, Tag::ImageDescription).as_deref(),
            Some("Conecta Libras banner")
        );
        assert_eq!(read_ascii(&parsed, Tag::Software).as_deref(), Some(SOFTWARE_TAG));
    }

    #[test]
    fn test_partial_fields_omit_the_rest() {
        let fields = ExifFields {
            artist: Some("WSS Studio Art".to_string()),
            ..Default::default()
        };
        let payload = build_exif(&fields).unwrap();
        let jpeg = embed_exif_jpeg(&sample_jpeg(), &payload).unwrap();

        let parsed = exif::Reader::new()
            .read_from_container(&mut Cursor::new(&jpeg))
            .unwrap();

        assert!(parsed.get_field(Tag::Artist, In::PRIMARY).is_some());
        assert!(parsed.get_field(Tag::Copyright, In::PRIMARY).is_none());
        assert!(parsed.get_field(Tag::ImageDescription, In::PRIMARY).is_none());
    }

    #[test]
    fn test_embedded_jpeg_still_decodes() {
        let payload = build_exif(&sample_fields()).unwrap();
        let jpeg = embed_exif_jpeg(&sample_jpeg(), &payload).unwrap();

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_non_jpeg_input_rejected() {
        let payload = build_exif(&sample_fields()).unwrap();
        let err = embed_exif_jpeg(b"\x89PNG", &payload).unwrap_err();
        assert!(matches!(err, BannerError::Encode { .. }));
    }

    #[test]
    fn test_plain_jpeg_has_no_exif() {
        let jpeg = sample_jpeg();
        assert!(exif::Reader::new()
            .read_from_container(&mut Cursor::new(&jpeg))
            .is_err());
    }
}
