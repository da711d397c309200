//! Segmentation geometry of composite finger captures.

use crate::error::An2kError;
use crate::finger::{FingerImageCode, Position};
use crate::record::{fields, Field, Record, Subfield};

/// A 2-D pixel coordinate within the captured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

/// Boundary of an individual finger image within a slap capture.
///
/// Rectangular segments always carry exactly 4 boundary points in corner
/// order (top-left, top-right, bottom-right, bottom-left); alternate
/// segments carry a polygon of 3 or more points. The named position is
/// not cross-checked against the record's position list: a segment may
/// describe an anatomical region that is not separately scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerSegmentPosition {
    pub position: Position,
    pub coordinates: Vec<Coordinate>,
}

/// Location of a full-finger view or segment within an EJI image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintPositionCoordinate {
    pub finger_view: FingerImageCode,
    pub segment: FingerImageCode,
    pub coordinates: Vec<Coordinate>,
}

/// Pairing of a finger position with the image extent it was taken from,
/// used for search indexing of EJI records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDescriptor {
    pub position: Position,
    pub segment: FingerImageCode,
}

/// Decode one rectangular segment subfield (SEG): position code followed
/// by the left/right horizontal and top/bottom vertical limits.
pub(crate) fn convert_segment(subfield: &Subfield) -> Result<FingerSegmentPosition, An2kError> {
    if subfield.len() != 5 {
        return Err(An2kError::MalformedData(format!(
            "finger segment subfield has {} items, expected 5",
            subfield.len()
        )));
    }
    let position = Position::from_code(subfield.item(0)?.as_u32()?)?;
    let left = subfield.item(1)?.as_u32()?;
    let right = subfield.item(2)?.as_u32()?;
    let top = subfield.item(3)?.as_u32()?;
    let bottom = subfield.item(4)?.as_u32()?;
    Ok(FingerSegmentPosition {
        position,
        coordinates: vec![
            Coordinate { x: left, y: top },
            Coordinate { x: right, y: top },
            Coordinate { x: right, y: bottom },
            Coordinate { x: left, y: bottom },
        ],
    })
}

/// Decode one alternate (polygonal) segment subfield (ASEG): position
/// code, point count, then x/y pairs. At least 3 vertices.
pub(crate) fn convert_alternate_segment(
    subfield: &Subfield,
) -> Result<FingerSegmentPosition, An2kError> {
    if subfield.len() < 8 || subfield.len() % 2 != 0 {
        return Err(An2kError::MalformedData(format!(
            "alternate finger segment subfield has {} items, expected an even count of 8 or more",
            subfield.len()
        )));
    }
    let position = Position::from_code(subfield.item(0)?.as_u32()?)?;
    let mut coordinates = Vec::with_capacity((subfield.len() - 2) / 2);
    let mut index = 2;
    while index < subfield.len() {
        coordinates.push(Coordinate {
            x: subfield.item(index)?.as_u32()?,
            y: subfield.item(index + 1)?.as_u32()?,
        });
        index += 2;
    }
    Ok(FingerSegmentPosition {
        position,
        coordinates,
    })
}

/// Decode one print position coordinate subfield (PPC): two finger image
/// codes and two coordinate pairs.
pub(crate) fn convert_print_position_coordinate(
    subfield: &Subfield,
) -> Result<PrintPositionCoordinate, An2kError> {
    if subfield.len() != 6 {
        return Err(An2kError::MalformedData(format!(
            "print position coordinate subfield has {} items, expected 6",
            subfield.len()
        )));
    }
    Ok(PrintPositionCoordinate {
        finger_view: FingerImageCode::from_tag(subfield.item(0)?.as_text()?)?,
        segment: FingerImageCode::from_tag(subfield.item(1)?.as_text()?)?,
        coordinates: vec![
            Coordinate {
                x: subfield.item(2)?.as_u32()?,
                y: subfield.item(3)?.as_u32()?,
            },
            Coordinate {
                x: subfield.item(4)?.as_u32()?,
                y: subfield.item(5)?.as_u32()?,
            },
        ],
    })
}

/// Decode the SPD/PPD field into position descriptors: two items per
/// subfield, a position code and a finger image tag.
pub(crate) fn convert_position_descriptors(
    field: &Field,
) -> Result<Vec<PositionDescriptor>, An2kError> {
    let mut descriptors = Vec::with_capacity(field.subfields().len());
    for subfield in field.subfields() {
        if subfield.len() != 2 {
            return Err(An2kError::MalformedData(format!(
                "position descriptor subfield has {} items, expected 2",
                subfield.len()
            )));
        }
        descriptors.push(PositionDescriptor {
            position: Position::from_code(subfield.item(0)?.as_u32()?)?,
            segment: FingerImageCode::from_tag(subfield.item(1)?.as_text()?)?,
        });
    }
    Ok(descriptors)
}

/// Decode the EJI-only features of a variable-resolution finger record:
/// position descriptors and print position coordinates, both optional and
/// only looked up when the position list names an EJI image.
pub(crate) fn eji_features(
    record: &Record,
    positions: &[Position],
) -> Result<(Vec<PositionDescriptor>, Vec<PrintPositionCoordinate>), An2kError> {
    if !positions.contains(&Position::Eji) {
        return Ok((Vec::new(), Vec::new()));
    }

    let descriptors = match record.field(fields::SPD_PPD) {
        Some(field) => convert_position_descriptors(field)?,
        None => Vec::new(),
    };

    let mut coordinates = Vec::new();
    if let Some(field) = record.field(fields::PPC) {
        for subfield in field.subfields() {
            coordinates.push(convert_print_position_coordinate(subfield)?);
        }
    }
    Ok((descriptors, coordinates))
}
