//! QR code confirmation of a successful registration.
//!
//! The confirmation document is serialized to JSON, encoded into a QR code and rendered as
//! a greyscale PNG. The PNG is handed to the page as a `data:` URL so it can be shown in an
//! `<img>` and downloaded through an `<a download>` without any server round trip.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::{error::ConfirmationError, model::registration::ConfirmationDto};

/// Minimum width and height of the rendered QR code, quiet zone included.
pub const QR_CODE_SIZE_PX: u32 = 256;

/// Rendered confirmation ready for display and download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationImage {
    pub file_name: String,
    pub data_url: String,
}

/// Download file name for the QR code of `registration_id`.
pub fn confirmation_file_name(registration_id: &str) -> String {
    format!("brainium-registration-{}.png", registration_id)
}

/// Encodes `confirmation` as a QR code PNG.
///
/// # Returns
/// - `Ok(Vec<u8>)` - PNG bytes of a square image at least [`QR_CODE_SIZE_PX`] wide
/// - `Err(ConfirmationError)` - Serialization, QR encoding or PNG writing failed
pub fn render_qr_png(confirmation: &ConfirmationDto) -> Result<Vec<u8>, ConfirmationError> {
    let payload = serde_json::to_string(confirmation)?;
    let code = QrCode::new(payload.as_bytes())?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(QR_CODE_SIZE_PX, QR_CODE_SIZE_PX)
        .build();

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(png)
}

pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

pub fn render_confirmation(
    confirmation: &ConfirmationDto,
) -> Result<ConfirmationImage, ConfirmationError> {
    let png = render_qr_png(confirmation)?;

    Ok(ConfirmationImage {
        file_name: confirmation_file_name(&confirmation.registration_id),
        data_url: png_data_url(&png),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn confirmation() -> ConfirmationDto {
        ConfirmationDto {
            registration_id: "BRA-MGXHR6O0-4K2ZQ".to_string(),
            event_title: "AI Innovation Summit 2026".to_string(),
            team_name: "Team Alpha".to_string(),
            leader_name: "John Smith".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_file_name_embeds_registration_id() {
        assert_eq!(
            confirmation_file_name("BRA-1-2"),
            "brainium-registration-BRA-1-2.png"
        );
    }

    #[test]
    fn test_rendered_png_is_square_and_large_enough() {
        let png = render_qr_png(&confirmation()).unwrap();

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert_eq!(decoded.width(), decoded.height());
        assert!(decoded.width() >= QR_CODE_SIZE_PX);
    }

    #[test]
    fn test_render_confirmation_produces_png_data_url() {
        let image = render_confirmation(&confirmation()).unwrap();

        assert_eq!(
            image.file_name,
            "brainium-registration-BRA-MGXHR6O0-4K2ZQ.png"
        );
        assert!(image.data_url.starts_with("data:image/png;base64,"));

        let encoded = image.data_url.trim_start_matches("data:image/png;base64,");
        let bytes = STANDARD.decode(encoded).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_confirmation_json_uses_camel_case_keys() {
        let value = serde_json::to_value(confirmation()).unwrap();
        for key in [
            "registrationId",
            "eventTitle",
            "teamName",
            "leaderName",
            "timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
