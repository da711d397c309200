//! Variable-resolution image record layer (Types 13-15).
//!
//! Holds the fields shared by the whole tagged family: source agency,
//! capture date, comment, the per-type quality metric set, tagged image
//! metadata, and the lazily resolved user-defined fields. The capture and
//! latent views embed this value instead of inheriting from it.

use crate::error::An2kError;
use crate::image::{self, ImageInfo};
use crate::quality::{self, QualityMetric};
use crate::record::{fields, Record, RecordKind, Transaction, TransactionCodec};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Resolution state of one user-defined field number. A resolved entry,
/// present or absent, is never rescanned.
#[derive(Debug, Clone)]
enum UdfEntry {
    Present(Vec<u8>),
    Absent,
}

/// A decoded variable-resolution image record (Type 13, 14 or 15).
///
/// Palmprint (Type-15) records can be used through this type directly;
/// the finger-specific Types 13 and 14 are normally reached through
/// [`LatentView`](crate::latent::LatentView) and
/// [`CaptureView`](crate::capture::CaptureView), which embed one of these.
#[derive(Debug, Clone)]
pub struct VariableResolutionView {
    kind: RecordKind,
    source_agency: String,
    capture_date: String,
    comment: Option<String>,
    quality: Vec<QualityMetric>,
    image: ImageInfo,
    record: Record,
    udf: HashMap<u16, UdfEntry>,
}

impl VariableResolutionView {
    /// Decode the nth record (1-based) of the given variable-resolution
    /// type. Any type outside {13,14,15} is rejected before a field is
    /// read.
    pub fn from_transaction(
        transaction: &Transaction,
        kind: RecordKind,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        match kind {
            RecordKind::Type13 | RecordKind::Type14 | RecordKind::Type15 => {}
            other => {
                return Err(An2kError::InvalidArgument(format!(
                    "Type-{} is not a variable-resolution record type",
                    other.code()
                )))
            }
        }
        let record = transaction.record_occurrence(kind, occurrence)?;
        debug!(kind = kind.code(), occurrence, "decoding variable-resolution record");

        let source_agency = record
            .require_field(fields::SRC, "SRC")?
            .first_item()?
            .as_text()?
            .to_string();
        let capture_date = record
            .require_field(fields::CD, "CD")?
            .first_item()?
            .as_text()?
            .to_string();

        let comment = match record.field(fields::COM) {
            Some(field) => Some(field.first_item()?.as_text()?.to_string()),
            None => None,
        };

        // LQM for Type-13, FQM for Type-14/15; same field number.
        let quality = match record.field(fields::LQM_FQM) {
            Some(field) => quality::extract_quality(field)?,
            None => Vec::new(),
        };

        let image = image::extract_tagged(record)?;

        Ok(VariableResolutionView {
            kind,
            source_agency,
            capture_date,
            comment,
            quality,
            image,
            record: record.clone(),
            udf: HashMap::new(),
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
        let buf = crate::base::read_file(path)?;
        Self::from_buffer(codec, &buf, kind, occurrence)
    }

    pub fn record_kind(&self) -> RecordKind {
        self.kind
    }

    pub fn source_agency(&self) -> &str {
        &self.source_agency
    }

    pub fn capture_date(&self) -> &str {
        &self.capture_date
    }

    /// The optional comment; empty when the record carries none.
    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Quality metric set; empty when the field is absent.
    pub fn quality_metric(&self) -> &[QualityMetric] {
        &self.quality
    }

    pub fn image_info(&self) -> &ImageInfo {
        &self.image
    }

    /// The decoded record backing this view, for user-defined lookups
    /// and downstream tooling.
    pub(crate) fn record(&self) -> &Record {
        &self.record
    }

    /// Canonical bytes of a user-defined field.
    ///
    /// The first request for a field number scans the record once and
    /// caches the outcome, found or confirmed absent; later requests are
    /// served from the cache without rescanning. Taking `&mut self`
    /// serializes access per instance, so the check-then-populate
    /// sequence cannot interleave.
    pub fn user_defined_field(&mut self, number: u16) -> Result<&[u8], An2kError> {
        let number_u32 = u32::from(number);
        if !(fields::UDF_MIN..=fields::UDF_MAX).contains(&number_u32) {
            return Err(An2kError::InvalidArgument(format!(
                "field {number} is outside the user-defined range {}-{}",
                fields::UDF_MIN,
                fields::UDF_MAX
            )));
        }

        if !self.udf.contains_key(&number) {
            let entry = match self.record.field(number_u32) {
                Some(field) => UdfEntry::Present(field.canonical_bytes()),
                None => UdfEntry::Absent,
            };
            debug!(
                field = number,
                present = matches!(entry, UdfEntry::Present(_)),
                "user-defined field resolved"
            );
            self.udf.insert(number, entry);
        }

        match self.udf.get(&number) {
            Some(UdfEntry::Present(bytes)) => Ok(bytes),
            Some(UdfEntry::Absent) => Err(An2kError::NotFound(format!(
                "field {number} does not exist"
            ))),
            None => Err(An2kError::ResourceFailure(format!(
                "field {number} could not be cached"
            ))),
        }
    }
}
