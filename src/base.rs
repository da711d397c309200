//! Base finger view over the plain capture record family (Types 3-6).

use crate::error::An2kError;
use crate::finger::{positions_from_field, Impression, Position};
use crate::image::{self, ImageInfo};
use crate::minutiae::MinutiaeDataRecord;
use crate::record::{fields, Record, RecordKind, Transaction, TransactionCodec};
use std::path::Path;
use tracing::debug;

/// Impression type and ordered finger position list, the two mandatory
/// fields every finger image record carries. Embedded by each view type
/// in place of the original's inheritance chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FingerCore {
    pub impression: Impression,
    pub positions: Vec<Position>,
}

impl FingerCore {
    /// Decode IMP and FGP from a record. The FGP field number differs
    /// between the binary and tagged families, so the caller names it.
    pub fn from_record(record: &Record, fgp_field: u32) -> Result<Self, An2kError> {
        let imp = record.require_field(fields::IMP, "IMP")?;
        let impression = Impression::from_code(imp.first_item()?.as_u32()?)?;
        let fgp = record.require_field(fgp_field, "FGP")?;
        let positions = positions_from_field(fgp)?;
        Ok(FingerCore {
            impression,
            positions,
        })
    }
}

/// Read a whole file into memory, mapping I/O failures to
/// [`An2kError::ResourceFailure`]. The one blocking read of file-based
/// construction.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, An2kError> {
    std::fs::read(path).map_err(|e| {
        An2kError::ResourceFailure(format!("could not read {}: {e}", path.display()))
    })
}

/// A decoded plain capture finger image record (Type 3, 4, 5 or 6).
///
/// Immutable once constructed, except for the append-only minutiae record
/// set used to link separately parsed Type-9 records to this image.
#[derive(Debug, Clone)]
pub struct BaseFingerView {
    kind: RecordKind,
    finger: FingerCore,
    image: ImageInfo,
    minutiae: Vec<MinutiaeDataRecord>,
}

impl BaseFingerView {
    /// Decode the nth record (1-based) of the given plain capture type.
    ///
    /// Any type outside {3,4,5,6} is rejected before a field is read.
    pub fn from_transaction(
        transaction: &Transaction,
        kind: RecordKind,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        match kind {
            RecordKind::Type3 | RecordKind::Type4 | RecordKind::Type5 | RecordKind::Type6 => {}
            other => {
                return Err(An2kError::InvalidArgument(format!(
                    "Type-{} is not a plain capture record type",
                    other.code()
                )))
            }
        }
        let record = transaction.record_occurrence(kind, occurrence)?;
        debug!(kind = kind.code(), occurrence, "decoding plain capture record");

        let finger = FingerCore::from_record(record, fields::BIN_FGP)?;
        let image = image::extract_binary(transaction, record)?;
        Ok(BaseFingerView {
            kind,
            finger,
            image,
            minutiae: Vec::new(),
        })
    }

    /// Decode from a raw transaction buffer using the external codec.
    pub fn from_buffer<C: TransactionCodec>(
        codec: &C,
        buf: &[u8],
        kind: RecordKind,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        let transaction = codec.decode(buf)?;
        Self::from_transaction(&transaction, kind, occurrence)
    }

    /// Decode from a transaction file. The file is read whole, up front.
    pub fn from_file<C: TransactionCodec>(
        codec: &C,
        path: &Path,
        kind: RecordKind,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        let buf = read_file(path)?;
        Self::from_buffer(codec, &buf, kind, occurrence)
    }

    pub fn record_kind(&self) -> RecordKind {
        self.kind
    }

    pub fn impression_type(&self) -> Impression {
        self.finger.impression
    }

    /// Positions in record order, multiplicity preserved.
    pub fn positions(&self) -> &[Position] {
        &self.finger.positions
    }

    pub fn image_info(&self) -> &ImageInfo {
        &self.image
    }

    /// Minutiae records attached by the caller after construction.
    pub fn minutiae_data_records(&self) -> &[MinutiaeDataRecord] {
        &self.minutiae
    }

    /// Link a separately parsed Type-9 record to this view. Append-only.
    pub fn add_minutiae_data_record(&mut self, record: MinutiaeDataRecord) {
        self.minutiae.push(record);
    }
}
