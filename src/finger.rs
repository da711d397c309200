//! Coded-value translation for finger image records.
//!
//! Pure lookups over the standard code tables. Every conversion is an
//! exhaustive match whose default arm reports the offending value, so the
//! only observable states are the enumerated variants.

use crate::error::An2kError;
use crate::record::Field;

/// Standard finger position codes 0-15 plus 19 (EJI or tip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Unknown,
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightLittle,
    LeftThumb,
    LeftIndex,
    LeftMiddle,
    LeftRing,
    LeftLittle,
    PlainRightThumb,
    PlainLeftThumb,
    PlainRightFourFingers,
    PlainLeftFourFingers,
    LeftRightThumbs,
    Eji,
}

impl Position {
    pub fn from_code(code: u32) -> Result<Position, An2kError> {
        match code {
            0 => Ok(Position::Unknown),
            1 => Ok(Position::RightThumb),
            2 => Ok(Position::RightIndex),
            3 => Ok(Position::RightMiddle),
            4 => Ok(Position::RightRing),
            5 => Ok(Position::RightLittle),
            6 => Ok(Position::LeftThumb),
            7 => Ok(Position::LeftIndex),
            8 => Ok(Position::LeftMiddle),
            9 => Ok(Position::LeftRing),
            10 => Ok(Position::LeftLittle),
            11 => Ok(Position::PlainRightThumb),
            12 => Ok(Position::PlainLeftThumb),
            13 => Ok(Position::PlainRightFourFingers),
            14 => Ok(Position::PlainLeftFourFingers),
            15 => Ok(Position::LeftRightThumbs),
            19 => Ok(Position::Eji),
            other => Err(An2kError::MalformedData(format!(
                "invalid position code {other}"
            ))),
        }
    }
}

/// Impression type codes 0-8 and 20-29. The palm impression codes 9-15
/// belong to the palm record family and are rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impression {
    LiveScanPlain,
    LiveScanRolled,
    NonLiveScanPlain,
    NonLiveScanRolled,
    LatentImpression,
    LatentTracing,
    LatentPhoto,
    LatentLift,
    LiveScanVerticalSwipe,
    LiveScanOpticalContactPlain,
    LiveScanOpticalContactRolled,
    LiveScanNonOpticalContactPlain,
    LiveScanNonOpticalContactRolled,
    LiveScanOpticalContactlessPlain,
    LiveScanOpticalContactlessRolled,
    LiveScanNonOpticalContactlessPlain,
    LiveScanNonOpticalContactlessRolled,
    Other,
    Unknown,
}

impl Impression {
    pub fn from_code(code: u32) -> Result<Impression, An2kError> {
        match code {
            0 => Ok(Impression::LiveScanPlain),
            1 => Ok(Impression::LiveScanRolled),
            2 => Ok(Impression::NonLiveScanPlain),
            3 => Ok(Impression::NonLiveScanRolled),
            4 => Ok(Impression::LatentImpression),
            5 => Ok(Impression::LatentTracing),
            6 => Ok(Impression::LatentPhoto),
            7 => Ok(Impression::LatentLift),
            8 => Ok(Impression::LiveScanVerticalSwipe),
            20 => Ok(Impression::LiveScanOpticalContactPlain),
            21 => Ok(Impression::LiveScanOpticalContactRolled),
            22 => Ok(Impression::LiveScanNonOpticalContactPlain),
            23 => Ok(Impression::LiveScanNonOpticalContactRolled),
            24 => Ok(Impression::LiveScanOpticalContactlessPlain),
            25 => Ok(Impression::LiveScanOpticalContactlessRolled),
            26 => Ok(Impression::LiveScanNonOpticalContactlessPlain),
            27 => Ok(Impression::LiveScanNonOpticalContactlessRolled),
            28 => Ok(Impression::Other),
            29 => Ok(Impression::Unknown),
            other => Err(An2kError::MalformedData(format!(
                "invalid impression code {other}"
            ))),
        }
    }
}

/// Anatomical extent of a segmented finger image, matched from the
/// fixed textual tags of the standard. Matching is exact, not prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerImageCode {
    Eji,
    RolledTip,
    FullFingerRolled,
    FullFingerPlainLeft,
    FullFingerPlainCenter,
    FullFingerPlainRight,
    ProximalSegment,
    DistalSegment,
    MedialSegment,
    NotApplicable,
}

impl FingerImageCode {
    pub fn from_tag(tag: &str) -> Result<FingerImageCode, An2kError> {
        match tag {
            "EJI" => Ok(FingerImageCode::Eji),
            "TIP" => Ok(FingerImageCode::RolledTip),
            "FV1" => Ok(FingerImageCode::FullFingerRolled),
            "FV2" => Ok(FingerImageCode::FullFingerPlainLeft),
            "FV3" => Ok(FingerImageCode::FullFingerPlainCenter),
            "FV4" => Ok(FingerImageCode::FullFingerPlainRight),
            "PRX" => Ok(FingerImageCode::ProximalSegment),
            "DST" => Ok(FingerImageCode::DistalSegment),
            "MED" => Ok(FingerImageCode::MedialSegment),
            "NA" => Ok(FingerImageCode::NotApplicable),
            other => Err(An2kError::MalformedData(format!(
                "invalid finger image code {other:?}"
            ))),
        }
    }
}

/// Reason a capture could not be made. `NotSpecified` stands for the
/// absent optional field and is mapped by the caller, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmputatedBandaged {
    Amputated,
    Bandaged,
    NotSpecified,
}

impl AmputatedBandaged {
    pub fn from_code(code: &str) -> Result<AmputatedBandaged, An2kError> {
        match code {
            "XX" => Ok(AmputatedBandaged::Amputated),
            "UP" => Ok(AmputatedBandaged::Bandaged),
            other => Err(An2kError::MalformedData(format!(
                "invalid amputated/bandaged code {other:?}"
            ))),
        }
    }
}

/// Capture device monitoring mode from the optional DMM field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMonitoringMode {
    Controlled,
    Assisted,
    Observed,
    Unattended,
    Unknown,
    NotSpecified,
}

impl DeviceMonitoringMode {
    pub fn from_code(code: &str) -> Result<DeviceMonitoringMode, An2kError> {
        match code {
            "CONTROLLED" => Ok(DeviceMonitoringMode::Controlled),
            "ASSISTED" => Ok(DeviceMonitoringMode::Assisted),
            "OBSERVED" => Ok(DeviceMonitoringMode::Observed),
            "UNATTENDED" => Ok(DeviceMonitoringMode::Unattended),
            "UNKNOWN" => Ok(DeviceMonitoringMode::Unknown),
            other => Err(An2kError::MalformedData(format!(
                "invalid device monitoring mode {other:?}"
            ))),
        }
    }
}

/// Decode an FGP field into the ordered position list. Order and
/// multiplicity are preserved; a slap capture may list several positions.
pub(crate) fn positions_from_field(field: &Field) -> Result<Vec<Position>, An2kError> {
    let mut positions = Vec::with_capacity(field.subfields().len());
    for subfield in field.subfields() {
        let code = subfield.item(0)?.as_u32()?;
        positions.push(Position::from_code(code)?);
    }
    Ok(positions)
}
