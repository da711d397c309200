//! Association of Type-9 minutiae data records with finger views.
//!
//! Point geometry is not interpreted here; this is a typed handle that
//! downstream feature tooling can unpack.

use crate::error::An2kError;
use crate::record::{fields, Record, RecordKind};

/// A tokenized Type-9 record linked to a finger view by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinutiaeDataRecord {
    idc: u32,
    record: Record,
}

impl MinutiaeDataRecord {
    pub fn new(record: Record) -> Result<Self, An2kError> {
        if record.kind() != RecordKind::Type9 {
            return Err(An2kError::InvalidArgument(format!(
                "expected a Type-9 record, got Type-{}",
                record.kind().code()
            )));
        }
        let idc = record
            .require_field(fields::IDC, "IDC")?
            .first_item()?
            .as_u32()?;
        Ok(MinutiaeDataRecord { idc, record })
    }

    /// Image designation character naming the image record this minutiae
    /// data belongs to.
    pub fn idc(&self) -> u32 {
        self.idc
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}
