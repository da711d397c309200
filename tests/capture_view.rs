mod common;

use an2k_view::record::{fields, Field, Record, RecordKind, Subfield};
use an2k_view::{
    AmputatedBandaged, An2kError, CaptureView, Coordinate, DeviceMonitoringMode, FingerImageCode,
    Impression, Position,
};
use common::{tagged_mandatory_fields, transaction_with};
use pretty_assertions::assert_eq;

fn type14_record(extra: Vec<Field>) -> Record {
    let mut all = tagged_mandatory_fields("0", &["13"]);
    all.extend(extra);
    Record::new(RecordKind::Type14, all)
}

#[test]
fn test_minimal_type14_record_decodes() {
    let txn = transaction_with(vec![type14_record(vec![])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    assert_eq!(view.impression_type(), Impression::LiveScanPlain);
    assert_eq!(view.positions(), &[Position::PlainRightFourFingers]);
    assert_eq!(view.source_agency(), "MDNISTIMG");
    assert_eq!(view.capture_date(), "20090728");
    assert_eq!(view.image_info().width, 800);
    assert_eq!(view.image_info().depth, 8);
}

#[test]
fn test_optional_fields_default_when_absent() {
    let txn = transaction_with(vec![type14_record(vec![])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    assert_eq!(view.comment(), "");
    assert_eq!(view.amputated_bandaged(), AmputatedBandaged::NotSpecified);
    assert_eq!(view.device_monitoring_mode(), DeviceMonitoringMode::NotSpecified);
    assert!(view.fingerprint_quality_metric().is_empty());
    assert!(view.national_quality_metric().is_empty());
    assert!(view.segmentation_quality_metric().is_empty());
    assert!(view.finger_segment_positions().is_empty());
    assert!(view.alternate_finger_segment_positions().is_empty());
    assert!(view.print_position_descriptors().is_empty());
    assert!(view.print_position_coordinates().is_empty());
}

#[test]
fn test_missing_source_agency_is_malformed() {
    let fields_without_src: Vec<Field> = tagged_mandatory_fields("0", &["13"])
        .into_iter()
        .filter(|f| f.number() != fields::SRC)
        .collect();
    let txn = transaction_with(vec![Record::new(RecordKind::Type14, fields_without_src)]);

    let err = CaptureView::from_transaction(&txn, 1).unwrap_err();
    assert!(matches!(err, An2kError::MalformedData(_)));
    assert!(err.to_string().contains("SRC"));
}

#[test]
fn test_missing_impression_is_malformed_but_missing_comment_is_not() {
    let fields_without_imp: Vec<Field> = tagged_mandatory_fields("0", &["13"])
        .into_iter()
        .filter(|f| f.number() != fields::IMP)
        .collect();
    let txn = transaction_with(vec![Record::new(RecordKind::Type14, fields_without_imp)]);
    assert!(matches!(
        CaptureView::from_transaction(&txn, 1),
        Err(An2kError::MalformedData(_))
    ));

    // No COM field in the record built by type14_record: constructs fine.
    let txn = transaction_with(vec![type14_record(vec![])]);
    assert_eq!(CaptureView::from_transaction(&txn, 1).unwrap().comment(), "");
}

#[test]
fn test_comment_is_returned_when_present() {
    let txn = transaction_with(vec![type14_record(vec![Field::text(
        fields::COM,
        "left slap retake",
    )])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();
    assert_eq!(view.comment(), "left slap retake");
}

#[test]
fn test_amputated_and_bandaged_codes() {
    let txn = transaction_with(vec![type14_record(vec![Field::text(fields::AMP, "XX")])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();
    assert_eq!(view.amputated_bandaged(), AmputatedBandaged::Amputated);

    let txn = transaction_with(vec![type14_record(vec![Field::text(fields::AMP, "UP")])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();
    assert_eq!(view.amputated_bandaged(), AmputatedBandaged::Bandaged);

    let txn = transaction_with(vec![type14_record(vec![Field::text(fields::AMP, "ZZ")])]);
    assert!(matches!(
        CaptureView::from_transaction(&txn, 1),
        Err(An2kError::MalformedData(_))
    ));
}

#[test]
fn test_rectangular_segments_decode_to_four_corners() {
    let seg = Field::new(
        fields::SEG,
        vec![
            Subfield::from_texts(&["2", "10", "110", "20", "220"]),
            Subfield::from_texts(&["3", "120", "230", "20", "220"]),
        ],
    );
    let txn = transaction_with(vec![type14_record(vec![seg])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    let segments = view.finger_segment_positions();
    assert_eq!(segments.len(), 2);
    for segment in segments {
        assert_eq!(segment.coordinates.len(), 4);
    }
    assert_eq!(segments[0].position, Position::RightIndex);
    assert_eq!(segments[0].coordinates[0], Coordinate { x: 10, y: 20 });
    assert_eq!(segments[1].position, Position::RightMiddle);
}

#[test]
fn test_alternate_segments_accept_polygons() {
    let aseg = Field::new(
        fields::ASEG,
        vec![Subfield::from_texts(&[
            "2", "4", "0", "0", "90", "10", "80", "200", "5", "190",
        ])],
    );
    let txn = transaction_with(vec![type14_record(vec![aseg])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    let segments = view.alternate_finger_segment_positions();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].coordinates.len(), 4);
}

#[test]
fn test_segment_position_outside_record_positions_is_accepted() {
    // The record lists only the slap; a segment naming an individual
    // finger is accepted without cross-checking.
    let seg = Field::new(
        fields::SEG,
        vec![Subfield::from_texts(&["5", "10", "110", "20", "220"])],
    );
    let txn = transaction_with(vec![type14_record(vec![seg])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();
    assert_eq!(view.finger_segment_positions()[0].position, Position::RightLittle);
    assert!(!view.positions().contains(&Position::RightLittle));
}

#[test]
fn test_national_quality_metric_reports_undefined_vendor() {
    let nqm = Field::new(
        fields::NQM,
        vec![
            Subfield::from_texts(&["2", "61"]),
            Subfield::from_texts(&["3", "42"]),
        ],
    );
    let txn = transaction_with(vec![type14_record(vec![nqm])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    let metrics = view.national_quality_metric();
    assert_eq!(metrics.len(), 2);
    for metric in metrics {
        assert_eq!(metric.vendor_id, None);
        assert_eq!(metric.product_code, None);
    }
    assert_eq!(metrics[0].score, 61);
}

#[test]
fn test_vendor_quality_metrics_keep_explicit_zero() {
    let fqm = Field::new(
        fields::LQM_FQM,
        vec![Subfield::from_texts(&["2", "61", "0", "0"])],
    );
    let sqm = Field::new(
        fields::SQM,
        vec![Subfield::from_texts(&["3", "50", "18", "7"])],
    );
    let txn = transaction_with(vec![type14_record(vec![fqm, sqm])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    assert_eq!(view.fingerprint_quality_metric()[0].vendor_id, Some(0));
    assert_eq!(view.segmentation_quality_metric()[0].vendor_id, Some(18));
    assert_eq!(view.segmentation_quality_metric()[0].product_code, Some(7));
}

#[test]
fn test_eji_capture_exposes_descriptors_and_coordinates() {
    let mut all = tagged_mandatory_fields("0", &["19"]);
    all.push(Field::new(
        fields::SPD_PPD,
        vec![
            Subfield::from_texts(&["2", "PRX"]),
            Subfield::from_texts(&["2", "DST"]),
        ],
    ));
    all.push(Field::new(
        fields::PPC,
        vec![Subfield::from_texts(&["FV1", "NA", "0", "0", "400", "600"])],
    ));
    let txn = transaction_with(vec![Record::new(RecordKind::Type14, all)]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();

    assert_eq!(view.positions(), &[Position::Eji]);
    let descriptors = view.print_position_descriptors();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].segment, FingerImageCode::ProximalSegment);

    let coordinates = view.print_position_coordinates();
    assert_eq!(coordinates.len(), 1);
    assert_eq!(coordinates[0].finger_view, FingerImageCode::FullFingerRolled);
}

#[test]
fn test_descriptor_fields_are_ignored_without_eji() {
    // SPD/PPD present but the position list has no EJI entry: the field
    // is not read.
    let spd = Field::new(fields::SPD_PPD, vec![Subfield::from_texts(&["2", "PRX"])]);
    let txn = transaction_with(vec![type14_record(vec![spd])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();
    assert!(view.print_position_descriptors().is_empty());
}

#[test]
fn test_device_monitoring_mode() {
    let txn = transaction_with(vec![type14_record(vec![Field::text(
        fields::DMM,
        "UNATTENDED",
    )])]);
    let view = CaptureView::from_transaction(&txn, 1).unwrap();
    assert_eq!(view.device_monitoring_mode(), DeviceMonitoringMode::Unattended);
}

#[test]
fn test_construction_is_atomic_on_malformed_optional_field() {
    // A present-but-broken optional field fails the whole construction;
    // no partially initialized view is observable.
    let bad_seg = Field::new(fields::SEG, vec![Subfield::from_texts(&["2", "10"])]);
    let txn = transaction_with(vec![type14_record(vec![bad_seg])]);
    assert!(matches!(
        CaptureView::from_transaction(&txn, 1),
        Err(An2kError::MalformedData(_))
    ));
}
