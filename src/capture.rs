//! Capture view over Type-14 fingerprint and segmentation records.

use crate::error::An2kError;
use crate::base::FingerCore;
use crate::finger::{AmputatedBandaged, DeviceMonitoringMode, Impression, Position};
use crate::image::ImageInfo;
use crate::quality::{self, QualityMetric};
use crate::record::{fields, Record, RecordKind, Transaction, TransactionCodec};
use crate::segment::{
    self, FingerSegmentPosition, PositionDescriptor, PrintPositionCoordinate,
};
use crate::varres::VariableResolutionView;
use std::path::Path;
use tracing::debug;

/// A decoded Type-14 fingerprint capture record.
///
/// Everything beyond the shared variable-resolution fields is optional in
/// the standard; absence is reported by the individual accessor, never as
/// a construction failure.
#[derive(Debug, Clone)]
pub struct CaptureView {
    varres: VariableResolutionView,
    finger: FingerCore,
    descriptors: Vec<PositionDescriptor>,
    coordinates: Vec<PrintPositionCoordinate>,
    amputated_bandaged: AmputatedBandaged,
    segments: Vec<FingerSegmentPosition>,
    alternate_segments: Vec<FingerSegmentPosition>,
    national_quality: Vec<QualityMetric>,
    segmentation_quality: Vec<QualityMetric>,
    monitoring_mode: DeviceMonitoringMode,
}

impl CaptureView {
    /// Decode the nth Type-14 record (1-based) of a transaction.
    pub fn from_transaction(
        transaction: &Transaction,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        let varres =
            VariableResolutionView::from_transaction(transaction, RecordKind::Type14, occurrence)?;
        let record = varres.record();

        let finger = FingerCore::from_record(record, fields::FGP)?;
        let (descriptors, coordinates) = segment::eji_features(record, &finger.positions)?;

        let amputated_bandaged = match record.field(fields::AMP) {
            Some(field) => AmputatedBandaged::from_code(field.first_item()?.as_text()?)?,
            None => AmputatedBandaged::NotSpecified,
        };

        let segments = Self::decode_segments(record)?;
        let alternate_segments = Self::decode_alternate_segments(record)?;

        let national_quality = match record.field(fields::NQM) {
            Some(field) => quality::extract_national_quality(field)?,
            None => Vec::new(),
        };
        let segmentation_quality = match record.field(fields::SQM) {
            Some(field) => quality::extract_quality(field)?,
            None => Vec::new(),
        };

        let monitoring_mode = match record.field(fields::DMM) {
            Some(field) => DeviceMonitoringMode::from_code(field.first_item()?.as_text()?)?,
            None => DeviceMonitoringMode::NotSpecified,
        };

        debug!(
            segments = segments.len(),
            alternate_segments = alternate_segments.len(),
            "capture record decoded"
        );
        Ok(CaptureView {
            varres,
            finger,
            descriptors,
            coordinates,
            amputated_bandaged,
            segments,
            alternate_segments,
            national_quality,
            segmentation_quality,
            monitoring_mode,
        })
    }

    /// Decode from a raw transaction buffer using the external codec.
    pub fn from_buffer<C: TransactionCodec>(
        codec: &C,
        buf: &[u8],
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        let transaction = codec.decode(buf)?;
        Self::from_transaction(&transaction, occurrence)
    }

    /// Decode from a transaction file. The file is read whole, up front.
    pub fn from_file<C: TransactionCodec>(
        codec: &C,
        path: &Path,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        let buf = crate::base::read_file(path)?;
        Self::from_buffer(codec, &buf, occurrence)
    }

    fn decode_segments(record: &Record) -> Result<Vec<FingerSegmentPosition>, An2kError> {
        let mut segments = Vec::new();
        if let Some(field) = record.field(fields::SEG) {
            for subfield in field.subfields() {
                segments.push(segment::convert_segment(subfield)?);
            }
        }
        Ok(segments)
    }

    fn decode_alternate_segments(
        record: &Record,
    ) -> Result<Vec<FingerSegmentPosition>, An2kError> {
        let mut segments = Vec::new();
        if let Some(field) = record.field(fields::ASEG) {
            for subfield in field.subfields() {
                segments.push(segment::convert_alternate_segment(subfield)?);
            }
        }
        Ok(segments)
    }

    pub fn impression_type(&self) -> Impression {
        self.finger.impression
    }

    /// Positions in record order, multiplicity preserved.
    pub fn positions(&self) -> &[Position] {
        &self.finger.positions
    }

    pub fn source_agency(&self) -> &str {
        self.varres.source_agency()
    }

    pub fn capture_date(&self) -> &str {
        self.varres.capture_date()
    }

    /// The optional comment; empty when the record carries none.
    pub fn comment(&self) -> &str {
        self.varres.comment()
    }

    pub fn image_info(&self) -> &ImageInfo {
        self.varres.image_info()
    }

    /// Fingerprint quality metric set (FQM); empty when absent.
    pub fn fingerprint_quality_metric(&self) -> &[QualityMetric] {
        self.varres.quality_metric()
    }

    /// National quality metric set (NQM). Vendor id and product code are
    /// always undefined here, never zero.
    pub fn national_quality_metric(&self) -> &[QualityMetric] {
        &self.national_quality
    }

    /// Segmentation quality metric set (SQM); empty when absent.
    pub fn segmentation_quality_metric(&self) -> &[QualityMetric] {
        &self.segmentation_quality
    }

    pub fn amputated_bandaged(&self) -> AmputatedBandaged {
        self.amputated_bandaged
    }

    /// Rectangular finger segment positions (SEG); empty when absent.
    pub fn finger_segment_positions(&self) -> &[FingerSegmentPosition] {
        &self.segments
    }

    /// Polygonal finger segment positions (ASEG); empty when absent.
    pub fn alternate_finger_segment_positions(&self) -> &[FingerSegmentPosition] {
        &self.alternate_segments
    }

    /// Print position descriptors (PPD), present only for EJI captures.
    pub fn print_position_descriptors(&self) -> &[PositionDescriptor] {
        &self.descriptors
    }

    /// Print position coordinates (PPC), present only for EJI captures.
    pub fn print_position_coordinates(&self) -> &[PrintPositionCoordinate] {
        &self.coordinates
    }

    pub fn device_monitoring_mode(&self) -> DeviceMonitoringMode {
        self.monitoring_mode
    }

    /// Canonical bytes of a user-defined field; see
    /// [`VariableResolutionView::user_defined_field`].
    pub fn user_defined_field(&mut self, number: u16) -> Result<&[u8], An2kError> {
        self.varres.user_defined_field(number)
    }
}
