//! Quality-metric extraction.
//!
//! A quality field is a sequence of subfields, each scoring one finger
//! position. The national quality metric carries no vendor or product
//! data; those stay `None`, which keeps "not applicable" distinguishable
//! from an explicit zero code.

use crate::error::An2kError;
use crate::finger::Position;
use crate::record::Field;
use tracing::trace;

/// One automated image-quality assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityMetric {
    pub position: Position,
    /// 0-100 by standard convention.
    pub score: u8,
    pub vendor_id: Option<u16>,
    pub product_code: Option<u16>,
}

/// Decode a vendor quality field (FQM, LQM, SQM): four items per
/// subfield. The whole field fails atomically on any malformed subfield.
pub fn extract_quality(field: &Field) -> Result<Vec<QualityMetric>, An2kError> {
    let mut metrics = Vec::with_capacity(field.subfields().len());
    for subfield in field.subfields() {
        if subfield.len() != 4 {
            return Err(An2kError::MalformedData(format!(
                "quality metric subfield has {} items, expected 4",
                subfield.len()
            )));
        }
        let metric = QualityMetric {
            position: Position::from_code(subfield.item(0)?.as_u32()?)?,
            score: subfield.item(1)?.as_u8()?,
            vendor_id: Some(subfield.item(2)?.as_u16()?),
            product_code: Some(subfield.item(3)?.as_u16()?),
        };
        trace!(position = ?metric.position, score = metric.score, "quality metric decoded");
        metrics.push(metric);
    }
    Ok(metrics)
}

/// Decode the national quality metric field (NQM): two items per
/// subfield, vendor and product undefined by the standard.
pub fn extract_national_quality(field: &Field) -> Result<Vec<QualityMetric>, An2kError> {
    let mut metrics = Vec::with_capacity(field.subfields().len());
    for subfield in field.subfields() {
        if subfield.len() != 2 {
            return Err(An2kError::MalformedData(format!(
                "national quality metric subfield has {} items, expected 2",
                subfield.len()
            )));
        }
        metrics.push(QualityMetric {
            position: Position::from_code(subfield.item(0)?.as_u32()?)?,
            score: subfield.item(1)?.as_u8()?,
            vendor_id: None,
            product_code: None,
        });
    }
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Subfield};

    #[test]
    fn test_extract_quality() {
        let field = Field::new(
            24,
            vec![
                Subfield::from_texts(&["2", "61", "18", "1"]),
                Subfield::from_texts(&["3", "42", "0", "0"]),
            ],
        );
        let metrics = extract_quality(&field).unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].position, Position::RightIndex);
        assert_eq!(metrics[0].score, 61);
        assert_eq!(metrics[0].vendor_id, Some(18));
        assert_eq!(metrics[0].product_code, Some(1));
        // Zero is a legitimate vendor code, not an absence marker.
        assert_eq!(metrics[1].vendor_id, Some(0));
        assert_eq!(metrics[1].product_code, Some(0));
    }

    #[test]
    fn test_duplicate_positions_are_allowed() {
        let field = Field::new(
            24,
            vec![
                Subfield::from_texts(&["2", "61", "18", "1"]),
                Subfield::from_texts(&["2", "55", "21", "4"]),
            ],
        );
        let metrics = extract_quality(&field).unwrap();
        assert_eq!(metrics[0].position, metrics[1].position);
    }

    #[test]
    fn test_extract_quality_fails_atomically() {
        let field = Field::new(
            24,
            vec![
                Subfield::from_texts(&["2", "61", "18", "1"]),
                Subfield::from_texts(&["3", "42"]),
            ],
        );
        assert!(matches!(
            extract_quality(&field),
            Err(An2kError::MalformedData(_))
        ));
    }

    #[test]
    fn test_extract_quality_rejects_bad_values() {
        let bad_score = Field::new(24, vec![Subfield::from_texts(&["2", "300", "18", "1"])]);
        assert!(matches!(
            extract_quality(&bad_score),
            Err(An2kError::MalformedData(_))
        ));
        let bad_position = Field::new(24, vec![Subfield::from_texts(&["17", "61", "18", "1"])]);
        assert!(matches!(
            extract_quality(&bad_position),
            Err(An2kError::MalformedData(_))
        ));
    }

    #[test]
    fn test_national_quality_leaves_vendor_undefined() {
        let field = Field::new(
            22,
            vec![
                Subfield::from_texts(&["2", "61"]),
                Subfield::from_texts(&["3", "254"]),
            ],
        );
        let metrics = extract_national_quality(&field).unwrap();
        for metric in &metrics {
            assert_eq!(metric.vendor_id, None);
            assert_eq!(metric.product_code, None);
        }
        assert_eq!(metrics[1].score, 254);
    }

    #[test]
    fn test_national_quality_rejects_vendor_items() {
        let field = Field::new(22, vec![Subfield::from_texts(&["2", "61", "18", "1"])]);
        assert!(matches!(
            extract_national_quality(&field),
            Err(An2kError::MalformedData(_))
        ));
    }
}
