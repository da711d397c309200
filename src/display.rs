//! Human-readable rendering for logging and diagnostics.
//!
//! The output is stable and intended for people, not for parsing.

use core::fmt;

use crate::finger::{
    AmputatedBandaged, DeviceMonitoringMode, FingerImageCode, Impression, Position,
};
use crate::image::{CompressionAlgorithm, ResolutionUnits};
use crate::quality::QualityMetric;
use crate::segment::{
    Coordinate, FingerSegmentPosition, PositionDescriptor, PrintPositionCoordinate,
};

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Position::*;

        f.write_str(match self {
            Unknown => "Unknown",
            RightThumb => "Right Thumb",
            RightIndex => "Right Index",
            RightMiddle => "Right Middle",
            RightRing => "Right Ring",
            RightLittle => "Right Little",
            LeftThumb => "Left Thumb",
            LeftIndex => "Left Index",
            LeftMiddle => "Left Middle",
            LeftRing => "Left Ring",
            LeftLittle => "Left Little",
            PlainRightThumb => "Plain Right Thumb",
            PlainLeftThumb => "Plain Left Thumb",
            PlainRightFourFingers => "Plain Right Four Fingers",
            PlainLeftFourFingers => "Plain Left Four Fingers",
            LeftRightThumbs => "Left & Right Thumbs",
            Eji => "EJI or tip",
        })
    }
}

impl fmt::Display for Impression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Impression::*;

        f.write_str(match self {
            LiveScanPlain => "Live Scan Plain",
            LiveScanRolled => "Live Scan Rolled",
            NonLiveScanPlain => "Non-Live Scan Plain",
            NonLiveScanRolled => "Non-Live Scan Rolled",
            LatentImpression => "Latent Impression",
            LatentTracing => "Latent Tracing",
            LatentPhoto => "Latent Photo",
            LatentLift => "Latent Lift",
            LiveScanVerticalSwipe => "Live Scan Vertical Swipe",
            LiveScanOpticalContactPlain => "Live Scan Optical Contact Plain",
            LiveScanOpticalContactRolled => "Live Scan Optical Contact Rolled",
            LiveScanNonOpticalContactPlain => "Live Scan Non-Optical Contact Plain",
            LiveScanNonOpticalContactRolled => "Live Scan Non-Optical Contact Rolled",
            LiveScanOpticalContactlessPlain => "Live Scan Optical Contactless Plain",
            LiveScanOpticalContactlessRolled => "Live Scan Optical Contactless Rolled",
            LiveScanNonOpticalContactlessPlain => "Live Scan Non-Optical Contactless Plain",
            LiveScanNonOpticalContactlessRolled => "Live Scan Non-Optical Contactless Rolled",
            Other => "Other",
            Unknown => "Unknown",
        })
    }
}

impl fmt::Display for FingerImageCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FingerImageCode::*;

        f.write_str(match self {
            Eji => "Entire Joint Image",
            RolledTip => "Rolled Tip",
            FullFingerRolled => "Full Finger Rolled Image",
            FullFingerPlainLeft => "Full Finger Plain Image -- Left Side",
            FullFingerPlainCenter => "Full Finger Plain Image -- Center",
            FullFingerPlainRight => "Full Finger Plain Image -- Right Side",
            ProximalSegment => "Proximal Segment",
            DistalSegment => "Distal Segment",
            MedialSegment => "Medial Segment",
            NotApplicable => "Not Applicable",
        })
    }
}

impl fmt::Display for AmputatedBandaged {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AmputatedBandaged::Amputated => "Amputated",
            AmputatedBandaged::Bandaged => "Unable to print (e.g., bandaged)",
            AmputatedBandaged::NotSpecified => "(optional field -- not specified)",
        })
    }
}

impl fmt::Display for DeviceMonitoringMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DeviceMonitoringMode::*;

        f.write_str(match self {
            Controlled => "Controlled",
            Assisted => "Assisted",
            Observed => "Observed",
            Unattended => "Unattended",
            Unknown => "Unknown",
            NotSpecified => "(optional field -- not specified)",
        })
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use CompressionAlgorithm::*;

        f.write_str(match self {
            None => "None",
            Facsimile => "Facsimile",
            Wsq20 => "WSQ20",
            JpegB => "JPEGB",
            JpegL => "JPEGL",
            Jp2 => "JP2",
            Jp2L => "JP2L",
            Png => "PNG",
        })
    }
}

impl fmt::Display for ResolutionUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ResolutionUnits::*;

        f.write_str(match self {
            NotApplicable => "NA",
            PixelsPerInch => "ppi",
            PixelsPerCentimeter => "ppcm",
            PixelsPerMillimeter => "ppmm",
        })
    }
}

impl fmt::Display for QualityMetric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} (", self.position, self.score)?;
        match self.vendor_id {
            Some(vendor) => write!(f, "{vendor}")?,
            None => f.write_str("undefined")?,
        }
        f.write_str(", ")?;
        match self.product_code {
            Some(product) => write!(f, "{product}")?,
            None => f.write_str("undefined")?,
        }
        f.write_str(")")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for FingerSegmentPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.position)?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coordinate}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PrintPositionCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.finger_view)?;
        if self.segment != FingerImageCode::NotApplicable {
            write!(f, " - {}", self.segment)?;
        }
        f.write_str(": ")?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coordinate}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PositionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.segment)
    }
}
