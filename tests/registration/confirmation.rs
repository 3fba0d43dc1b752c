//! Tests for rendering the registration confirmation
//!
//! These tests verify that the QR code PNG produced for a confirmation decodes back into
//! an image of the expected size and that the download metadata carries the registration ID.

use brainium::registration::confirmation::{render_confirmation, render_qr_png, QR_CODE_SIZE_PX};

use super::*;

#[test]
fn test_confirmation_png_meets_minimum_size() -> Result<(), TestError> {
    let confirmation = factory::confirmation_dto("BRA-MGXHR6O0-4K2ZQ");

    let png = render_qr_png(&confirmation)?;

    let decoded = image_size(&png);
    assert_eq!(decoded.0, decoded.1, "QR code should be square");
    assert!(decoded.0 >= QR_CODE_SIZE_PX);

    Ok(())
}

#[test]
fn test_confirmation_download_metadata() -> Result<(), TestError> {
    let confirmation = factory::confirmation_dto("BRA-MGXHR6O0-4K2ZQ");

    let image = render_confirmation(&confirmation)?;

    assert_eq!(
        image.file_name,
        "brainium-registration-BRA-MGXHR6O0-4K2ZQ.png"
    );
    assert!(image.data_url.starts_with("data:image/png;base64,"));

    Ok(())
}

#[test]
fn test_confirmation_document_matches_registration() -> Result<(), TestError> {
    let confirmation = factory::confirmation_dto("BRA-1-2");

    let json = serde_json::to_value(&confirmation)?;

    assert_eq!(json["registrationId"], "BRA-1-2");
    assert_eq!(json["teamName"], factory::TEAM_NAME);
    assert_eq!(json["leaderName"], "John Smith");
    assert_eq!(json["eventTitle"], factory::EVENT_TITLE);

    Ok(())
}

/// Width and height read from the PNG IHDR chunk.
fn image_size(png: &[u8]) -> (u32, u32) {
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n", "Not a PNG");
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (width, height)
}
