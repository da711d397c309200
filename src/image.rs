//! Image metadata carried by finger image records.
//!
//! Pixel decompression is out of scope; this module only decodes the
//! descriptive fields (size, resolution, bit depth, compression
//! algorithm) and keeps the compressed payload as raw bytes for whatever
//! codec the caller plugs in downstream.

use crate::error::An2kError;
use crate::record::{fields, Record, RecordKind, Transaction};
use tracing::debug;

/// Minimum scan resolution defined by the standard, pixels per mm.
pub const MINIMUM_SCAN_RESOLUTION_PPMM: f64 = 19.69;
/// Half of the minimum, used by the low-resolution Types 3 and 5.
pub const HALF_MINIMUM_SCAN_RESOLUTION_PPMM: f64 = 9.84;

/// Binary capture records are always 8 bits per pixel.
const FIXED_RESOLUTION_BIT_DEPTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionUnits {
    NotApplicable,
    PixelsPerInch,
    PixelsPerCentimeter,
    PixelsPerMillimeter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub units: ResolutionUnits,
    pub x: f64,
    pub y: f64,
}

/// Compression algorithm named by a record, per-family code tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionAlgorithm {
    None,
    Facsimile,
    Wsq20,
    JpegB,
    JpegL,
    Jp2,
    Jp2L,
    Png,
}

impl CompressionAlgorithm {
    /// Textual CGA codes of the tagged family (Types 13-15).
    pub fn from_tagged_code(code: &str) -> Result<CompressionAlgorithm, An2kError> {
        match code {
            "NONE" => Ok(CompressionAlgorithm::None),
            "WSQ20" => Ok(CompressionAlgorithm::Wsq20),
            "JPEGB" => Ok(CompressionAlgorithm::JpegB),
            "JPEGL" => Ok(CompressionAlgorithm::JpegL),
            "JP2" => Ok(CompressionAlgorithm::Jp2),
            "JP2L" => Ok(CompressionAlgorithm::Jp2L),
            "PNG" => Ok(CompressionAlgorithm::Png),
            other => Err(An2kError::MalformedData(format!(
                "invalid compression algorithm {other:?}"
            ))),
        }
    }

    /// Numeric GCA codes of the binary family. Types 3 and 4 allow only
    /// uncompressed or facsimile data; Types 5 and 6 use the wider table.
    pub fn from_binary_code(
        kind: RecordKind,
        code: u32,
    ) -> Result<CompressionAlgorithm, An2kError> {
        match kind {
            RecordKind::Type3 | RecordKind::Type4 => match code {
                0 => Ok(CompressionAlgorithm::None),
                1 => Ok(CompressionAlgorithm::Facsimile),
                other => Err(An2kError::MalformedData(format!(
                    "invalid compression algorithm code {other}"
                ))),
            },
            RecordKind::Type5 | RecordKind::Type6 => match code {
                0 => Ok(CompressionAlgorithm::None),
                1 => Ok(CompressionAlgorithm::Wsq20),
                2 => Ok(CompressionAlgorithm::JpegB),
                3 => Ok(CompressionAlgorithm::JpegL),
                4 => Ok(CompressionAlgorithm::Jp2),
                5 => Ok(CompressionAlgorithm::Jp2L),
                6 => Ok(CompressionAlgorithm::Png),
                other => Err(An2kError::MalformedData(format!(
                    "invalid compression algorithm code {other}"
                ))),
            },
            other => Err(An2kError::InvalidArgument(format!(
                "Type-{} is not a binary capture record",
                other.code()
            ))),
        }
    }
}

/// Descriptive image data shared by every finger image record.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    /// Image designation character linking this record to others.
    pub idc: u32,
    /// Horizontal line length, pixels.
    pub width: u32,
    /// Vertical line length, pixels.
    pub height: u32,
    pub resolution: Resolution,
    pub scan_resolution: Resolution,
    /// Bits per pixel.
    pub depth: u32,
    pub compression: CompressionAlgorithm,
    /// Compressed image payload, exactly as carried by the record.
    pub data: Vec<u8>,
}

/// Extract image metadata from a binary capture record (Types 3-6).
///
/// The image resolution equals the scan resolution for these types and is
/// derived from the ISR flag and the Type-1 header's native scanning
/// resolution, with the standard minimum as the fallback.
pub(crate) fn extract_binary(
    transaction: &Transaction,
    record: &Record,
) -> Result<ImageInfo, An2kError> {
    let header = transaction.header()?;
    let nsr = header
        .require_field(fields::NSR, "NSR")?
        .first_item()?
        .as_f64()?;

    let isr = record
        .require_field(fields::BIN_ISR, "ISR")?
        .first_item()?
        .as_u32()?;

    let ppmm = match record.kind() {
        RecordKind::Type3 | RecordKind::Type5 => {
            if isr == 0 {
                HALF_MINIMUM_SCAN_RESOLUTION_PPMM
            } else {
                0.5 * nsr
            }
        }
        _ => {
            if isr == 0 {
                MINIMUM_SCAN_RESOLUTION_PPMM
            } else {
                nsr
            }
        }
    };
    let resolution = Resolution {
        units: ResolutionUnits::PixelsPerMillimeter,
        x: ppmm,
        y: ppmm,
    };

    let compression = CompressionAlgorithm::from_binary_code(
        record.kind(),
        record
            .require_field(fields::BIN_CA, "GCA")?
            .first_item()?
            .as_u32()?,
    )?;

    let data = record
        .require_field(fields::BIN_IMAGE, "DATA")?
        .first_item()?
        .value()
        .to_vec();

    let info = ImageInfo {
        idc: record.require_field(fields::IDC, "IDC")?.first_item()?.as_u32()?,
        width: record.require_field(fields::BIN_HLL, "HLL")?.first_item()?.as_u32()?,
        height: record.require_field(fields::BIN_VLL, "VLL")?.first_item()?.as_u32()?,
        resolution,
        scan_resolution: resolution,
        depth: FIXED_RESOLUTION_BIT_DEPTH,
        compression,
        data,
    };
    debug!(
        idc = info.idc,
        width = info.width,
        height = info.height,
        "binary image record decoded"
    );
    Ok(info)
}

/// Extract image metadata from a tagged variable-resolution record
/// (Types 13-15). SLC gives the scale units; SHPS/SVPS are optional and
/// reuse those units, reading as zero when absent.
pub(crate) fn extract_tagged(record: &Record) -> Result<ImageInfo, An2kError> {
    let units = match record
        .require_field(fields::SLC, "SLC")?
        .first_item()?
        .as_u32()?
    {
        0 => ResolutionUnits::NotApplicable,
        1 => ResolutionUnits::PixelsPerInch,
        2 => ResolutionUnits::PixelsPerCentimeter,
        other => {
            return Err(An2kError::MalformedData(format!(
                "invalid scale units indicator {other}"
            )))
        }
    };

    let resolution = Resolution {
        units,
        x: record.require_field(fields::HPS, "HPS")?.first_item()?.as_f64()?,
        y: record.require_field(fields::VPS, "VPS")?.first_item()?.as_f64()?,
    };

    let mut scan_resolution = Resolution { units, x: 0.0, y: 0.0 };
    if let Some(field) = record.field(fields::SHPS) {
        scan_resolution.x = field.first_item()?.as_f64()?;
    }
    if let Some(field) = record.field(fields::SVPS) {
        scan_resolution.y = field.first_item()?.as_f64()?;
    }

    let compression = CompressionAlgorithm::from_tagged_code(
        record
            .require_field(fields::TAG_CA, "CGA")?
            .first_item()?
            .as_text()?,
    )?;

    let info = ImageInfo {
        idc: record.require_field(fields::IDC, "IDC")?.first_item()?.as_u32()?,
        width: record.require_field(fields::HLL, "HLL")?.first_item()?.as_u32()?,
        height: record.require_field(fields::VLL, "VLL")?.first_item()?.as_u32()?,
        resolution,
        scan_resolution,
        depth: record.require_field(fields::BPX, "BPX")?.first_item()?.as_u32()?,
        compression,
        data: record
            .require_field(fields::DAT2, "DAT2")?
            .first_item()?
            .value()
            .to_vec(),
    };
    debug!(
        idc = info.idc,
        width = info.width,
        height = info.height,
        "tagged image record decoded"
    );
    Ok(info)
}
