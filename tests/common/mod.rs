#![allow(dead_code)]

use an2k_view::record::{fields, Field, Item, Record, RecordKind, Subfield, Transaction};
use an2k_view::{An2kError, TransactionCodec};

/// Codec stub standing in for the external binary tokenizer: hands back a
/// pre-built record tree for any buffer.
pub struct StubCodec {
    pub transaction: Transaction,
}

impl TransactionCodec for StubCodec {
    fn decode(&self, _buf: &[u8]) -> Result<Transaction, An2kError> {
        Ok(self.transaction.clone())
    }
}

/// Minimal Type-1 header with the native scanning resolution field.
pub fn type1_header() -> Record {
    Record::new(
        RecordKind::Type1,
        vec![
            Field::text(fields::IDC, "0"),
            Field::text(fields::NSR, "19.69"),
        ],
    )
}

/// FGP field listing the given position codes in order.
pub fn fgp_field(number: u32, codes: &[&str]) -> Field {
    Field::new(
        number,
        codes.iter().map(|code| Subfield::from_texts(&[code])).collect(),
    )
}

/// A well-formed binary capture record (Types 3-6).
pub fn binary_capture_record(kind: RecordKind, imp: &str, fgp_codes: &[&str]) -> Record {
    Record::new(
        kind,
        vec![
            Field::text(fields::IDC, "1"),
            Field::text(fields::IMP, imp),
            fgp_field(fields::BIN_FGP, fgp_codes),
            Field::text(fields::BIN_ISR, "1"),
            Field::text(fields::BIN_HLL, "512"),
            Field::text(fields::BIN_VLL, "480"),
            Field::text(fields::BIN_CA, "0"),
            Field::new(
                fields::BIN_IMAGE,
                vec![Subfield::new(vec![Item::new(vec![0u8; 16])])],
            ),
        ],
    )
}

/// Mandatory fields of a well-formed tagged record (Types 13-15),
/// without the optional ones. IMP and FGP are included since every test
/// record here is a finger record.
pub fn tagged_mandatory_fields(imp: &str, fgp_codes: &[&str]) -> Vec<Field> {
    vec![
        Field::text(fields::IDC, "1"),
        Field::text(fields::IMP, imp),
        Field::text(fields::SRC, "MDNISTIMG"),
        Field::text(fields::CD, "20090728"),
        Field::text(fields::HLL, "800"),
        Field::text(fields::VLL, "750"),
        Field::text(fields::SLC, "1"),
        Field::text(fields::HPS, "500"),
        Field::text(fields::VPS, "500"),
        Field::text(fields::TAG_CA, "WSQ20"),
        Field::text(fields::BPX, "8"),
        fgp_field(fields::FGP, fgp_codes),
        Field::new(
            fields::DAT2,
            vec![Subfield::new(vec![Item::new(vec![0u8; 16])])],
        ),
    ]
}

/// A transaction holding the Type-1 header plus the given records.
pub fn transaction_with(records: Vec<Record>) -> Transaction {
    let mut all = vec![type1_header()];
    all.extend(records);
    Transaction::new(all)
}
