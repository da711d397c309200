//! Tokenizer boundary: the hierarchical record tree consumed by every view.
//!
//! The binary wire format is split into this tree by an external low-level
//! codec. This crate only requires "find field by numeric id" and
//! "enumerate subfields/items in encoded order" from that codec, expressed
//! here as plain data plus the [`TransactionCodec`] trait.

use crate::error::An2kError;
use std::str::FromStr;

/// Separator octets of the tagged-record encoding, used when
/// reconstructing the canonical byte image of a field.
const US: u8 = 0x1F;
const RS: u8 = 0x1E;
const GS: u8 = 0x1D;

/// Standard AN2K record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Type6,
    Type7,
    Type8,
    Type9,
    Type10,
    Type11,
    Type12,
    Type13,
    Type14,
    Type15,
    Type16,
    Type17,
    Type99,
}

impl RecordKind {
    /// Numeric record-type code as written in the transaction.
    pub fn code(&self) -> u32 {
        match self {
            RecordKind::Type1 => 1,
            RecordKind::Type2 => 2,
            RecordKind::Type3 => 3,
            RecordKind::Type4 => 4,
            RecordKind::Type5 => 5,
            RecordKind::Type6 => 6,
            RecordKind::Type7 => 7,
            RecordKind::Type8 => 8,
            RecordKind::Type9 => 9,
            RecordKind::Type10 => 10,
            RecordKind::Type11 => 11,
            RecordKind::Type12 => 12,
            RecordKind::Type13 => 13,
            RecordKind::Type14 => 14,
            RecordKind::Type15 => 15,
            RecordKind::Type16 => 16,
            RecordKind::Type17 => 17,
            RecordKind::Type99 => 99,
        }
    }

    pub fn from_code(code: u32) -> Result<RecordKind, An2kError> {
        match code {
            1 => Ok(RecordKind::Type1),
            2 => Ok(RecordKind::Type2),
            3 => Ok(RecordKind::Type3),
            4 => Ok(RecordKind::Type4),
            5 => Ok(RecordKind::Type5),
            6 => Ok(RecordKind::Type6),
            7 => Ok(RecordKind::Type7),
            8 => Ok(RecordKind::Type8),
            9 => Ok(RecordKind::Type9),
            10 => Ok(RecordKind::Type10),
            11 => Ok(RecordKind::Type11),
            12 => Ok(RecordKind::Type12),
            13 => Ok(RecordKind::Type13),
            14 => Ok(RecordKind::Type14),
            15 => Ok(RecordKind::Type15),
            16 => Ok(RecordKind::Type16),
            17 => Ok(RecordKind::Type17),
            99 => Ok(RecordKind::Type99),
            other => Err(An2kError::InvalidArgument(format!(
                "invalid record type code {other}"
            ))),
        }
    }
}

/// Field numbers used by the finger image record families.
///
/// Binary capture records (Types 3-6) and tagged variable-resolution
/// records (Types 13-15) number their fields differently; both tables are
/// kept here so the views never carry magic numbers.
pub mod fields {
    /// Image designation character, all record types.
    pub const IDC: u32 = 2;
    /// Impression type, both families.
    pub const IMP: u32 = 3;

    /* Binary capture family (Types 3-6). */
    pub const BIN_FGP: u32 = 4;
    pub const BIN_ISR: u32 = 5;
    pub const BIN_HLL: u32 = 6;
    pub const BIN_VLL: u32 = 7;
    pub const BIN_CA: u32 = 8;
    pub const BIN_IMAGE: u32 = 9;

    /* Tagged variable-resolution family (Types 13-15). */
    pub const SRC: u32 = 4;
    pub const CD: u32 = 5;
    pub const HLL: u32 = 6;
    pub const VLL: u32 = 7;
    pub const SLC: u32 = 8;
    pub const HPS: u32 = 9;
    pub const VPS: u32 = 10;
    pub const TAG_CA: u32 = 11;
    pub const BPX: u32 = 12;
    pub const FGP: u32 = 13;
    /// Search (Type-13) / print (Type-14) position descriptors share a number.
    pub const SPD_PPD: u32 = 14;
    pub const PPC: u32 = 15;
    pub const SHPS: u32 = 16;
    pub const SVPS: u32 = 17;
    pub const AMP: u32 = 18;
    pub const COM: u32 = 20;
    pub const SEG: u32 = 21;
    pub const NQM: u32 = 22;
    pub const SQM: u32 = 23;
    /// Latent (Type-13) / fingerprint (Type-14) quality metric share a number.
    pub const LQM_FQM: u32 = 24;
    pub const ASEG: u32 = 25;
    pub const DMM: u32 = 30;
    pub const UDF_MIN: u32 = 200;
    pub const UDF_MAX: u32 = 998;
    pub const DAT2: u32 = 999;

    /// Native scanning resolution in the Type-1 header record.
    pub const NSR: u32 = 11;
}

/// Raw payload of a single item, the leaf of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    value: Vec<u8>,
}

impl Item {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Item {
            value: value.into(),
        }
    }

    pub fn text(value: &str) -> Self {
        Item {
            value: value.as_bytes().to_vec(),
        }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Item payload as text. Tagged-record items are ASCII by standard.
    pub fn as_text(&self) -> Result<&str, An2kError> {
        std::str::from_utf8(&self.value)
            .map_err(|_| An2kError::MalformedData("item value is not valid text".to_string()))
    }

    fn parse<T: FromStr>(&self) -> Result<T, An2kError> {
        let text = self.as_text()?;
        text.trim().parse::<T>().map_err(|_| {
            An2kError::MalformedData(format!("item value {text:?} is not a valid number"))
        })
    }

    pub fn as_u32(&self) -> Result<u32, An2kError> {
        self.parse()
    }

    pub fn as_u16(&self) -> Result<u16, An2kError> {
        self.parse()
    }

    pub fn as_u8(&self) -> Result<u8, An2kError> {
        self.parse()
    }

    pub fn as_f64(&self) -> Result<f64, An2kError> {
        self.parse()
    }
}

/// One subfield: a sequence of items in encoded order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfield {
    items: Vec<Item>,
}

impl Subfield {
    pub fn new(items: Vec<Item>) -> Self {
        Subfield { items }
    }

    /// Convenience constructor for tagged text items.
    pub fn from_texts(texts: &[&str]) -> Self {
        Subfield {
            items: texts.iter().map(|t| Item::text(t)).collect(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Result<&Item, An2kError> {
        self.items.get(index).ok_or_else(|| {
            An2kError::MalformedData(format!("subfield has no item at index {index}"))
        })
    }
}

/// One field: a numbered group of subfields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    number: u32,
    subfields: Vec<Subfield>,
}

impl Field {
    pub fn new(number: u32, subfields: Vec<Subfield>) -> Self {
        Field { number, subfields }
    }

    /// A field holding a single text value.
    pub fn text(number: u32, value: &str) -> Self {
        Field {
            number,
            subfields: vec![Subfield::from_texts(&[value])],
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn subfields(&self) -> &[Subfield] {
        &self.subfields
    }

    /// First item of the first subfield, where the standard allows only one.
    pub fn first_item(&self) -> Result<&Item, An2kError> {
        self.subfields
            .first()
            .and_then(|sf| sf.items().first())
            .ok_or_else(|| {
                An2kError::MalformedData(format!("field {} is empty", self.number))
            })
    }

    /// Byte image of the field as it would appear in a tagged record:
    /// items joined by US, subfields joined by RS, GS terminator.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for (s, subfield) in self.subfields.iter().enumerate() {
            if s > 0 {
                buf.push(RS);
            }
            for (i, item) in subfield.items().iter().enumerate() {
                if i > 0 {
                    buf.push(US);
                }
                buf.extend_from_slice(item.value());
            }
        }
        buf.push(GS);
        buf
    }
}

/// One record of the transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    fields: Vec<Field>,
}

impl Record {
    pub fn new(kind: RecordKind, fields: Vec<Field>) -> Self {
        Record { kind, fields }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by numeric id, or report not-found.
    pub fn field(&self, number: u32) -> Option<&Field> {
        self.fields.iter().find(|f| f.number() == number)
    }

    /// Mandatory-field lookup; absence is a standard violation.
    pub fn require_field(&self, number: u32, name: &str) -> Result<&Field, An2kError> {
        self.field(number)
            .ok_or_else(|| An2kError::MalformedData(format!("field {name} not found")))
    }
}

/// A complete tokenized transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    records: Vec<Record>,
}

impl Transaction {
    pub fn new(records: Vec<Record>) -> Self {
        Transaction { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The Type-1 header record every transaction leads with.
    pub fn header(&self) -> Result<&Record, An2kError> {
        match self.records.first() {
            Some(record) if record.kind() == RecordKind::Type1 => Ok(record),
            _ => Err(An2kError::MalformedData(
                "transaction does not start with a Type-1 record".to_string(),
            )),
        }
    }

    /// Find the nth record of the requested type, 1-based. The leading
    /// Type-1 header is never counted.
    pub fn record_occurrence(
        &self,
        kind: RecordKind,
        occurrence: u32,
    ) -> Result<&Record, An2kError> {
        if occurrence == 0 {
            return Err(An2kError::InvalidArgument(
                "record occurrence index is 1-based".to_string(),
            ));
        }
        self.records
            .iter()
            .skip(1)
            .filter(|r| r.kind() == kind)
            .nth(occurrence as usize - 1)
            .ok_or_else(|| {
                An2kError::MalformedData(format!(
                    "could not find occurrence {occurrence} of a Type-{} record",
                    kind.code()
                ))
            })
    }
}

/// The external low-level codec plugs in here. Splitting a raw transaction
/// buffer into the record tree is outside this crate; anything that can
/// produce a [`Transaction`] can back the buffer/file entry points.
pub trait TransactionCodec {
    fn decode(&self, buf: &[u8]) -> Result<Transaction, An2kError>;
}
