//! Latent view over Type-13 records.
//!
//! Carries no fields of its own: the variable-resolution layer already
//! holds everything a latent record exposes. This type exists so latent
//! callers get latent naming without duplicated parsing.

use crate::error::An2kError;
use crate::base::FingerCore;
use crate::finger::{Impression, Position};
use crate::image::ImageInfo;
use crate::quality::QualityMetric;
use crate::record::{fields, RecordKind, Transaction, TransactionCodec};
use crate::segment::{self, PositionDescriptor, PrintPositionCoordinate};
use crate::varres::VariableResolutionView;
use std::path::Path;

/// A decoded Type-13 latent image record.
#[derive(Debug, Clone)]
pub struct LatentView {
    varres: VariableResolutionView,
    finger: FingerCore,
    descriptors: Vec<PositionDescriptor>,
    coordinates: Vec<PrintPositionCoordinate>,
}

impl LatentView {
    /// Decode the nth Type-13 record (1-based) of a transaction.
    pub fn from_transaction(
        transaction: &Transaction,
        occurrence: u32,
    ) -> Result<Self, An2kError> {
        let varres =
            VariableResolutionView::from_transaction(transaction, RecordKind::Type13, occurrence)?;
        let finger = FingerCore::from_record(varres.record(), fields::FGP)?;
        let (descriptors, coordinates) =
            segment::eji_features(varres.record(), &finger.positions)?;
        Ok(LatentView {
            varres,
            finger,
            descriptors,
            coordinates,
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

    /// Latent quality metric set (LQM); empty when absent.
    pub fn latent_quality_metric(&self) -> &[QualityMetric] {
        self.varres.quality_metric()
    }

    /// Search position descriptors (SPD), present only for EJI images.
    pub fn search_position_descriptors(&self) -> &[PositionDescriptor] {
        &self.descriptors
    }

    /// Print position coordinates (PPC), present only for EJI images.
    pub fn print_position_coordinates(&self) -> &[PrintPositionCoordinate] {
        &self.coordinates
    }

    /// Canonical bytes of a user-defined field; see
    /// [`VariableResolutionView::user_defined_field`].
    pub fn user_defined_field(&mut self, number: u16) -> Result<&[u8], An2kError> {
        self.varres.user_defined_field(number)
    }
}
