#![forbid(unsafe_code)]

//! # an2k-view
//!
//! Typed read-only views over ANSI/NIST-ITL (AN2K) finger image records.
//!
//! This crate provides:
//! - Decoding of plain capture (Type 3-6), latent (Type-13), fingerprint
//!   capture (Type-14) and variable-resolution (Type-15) records into
//!   immutable view objects
//! - The standard code tables for finger positions, impression types,
//!   finger image codes and amputation/bandage status
//! - Quality-metric and segmentation-geometry extraction
//! - Lazily cached access to user-defined fields
//!
//! The binary wire tokenizer stays external: anything implementing
//! [`TransactionCodec`] can back the buffer and file entry points, and
//! views can also be built straight from a [`Transaction`] tree.

pub mod error;
pub mod record;

// Code tables and field-level extraction
pub mod finger;
pub mod image;
pub mod quality;
pub mod segment;

// View hierarchy
pub mod base;
pub mod capture;
pub mod latent;
pub mod minutiae;
pub mod varres;

// Display implementations for domain types
mod display;

// Re-export main types for convenience
pub use base::BaseFingerView;
pub use capture::CaptureView;
pub use error::An2kError;
pub use finger::{
    AmputatedBandaged, DeviceMonitoringMode, FingerImageCode, Impression, Position,
};
pub use image::{CompressionAlgorithm, ImageInfo, Resolution, ResolutionUnits};
pub use latent::LatentView;
pub use minutiae::MinutiaeDataRecord;
pub use quality::QualityMetric;
pub use record::{
    Field, Item, Record, RecordKind, Subfield, Transaction, TransactionCodec,
};
pub use segment::{
    Coordinate, FingerSegmentPosition, PositionDescriptor, PrintPositionCoordinate,
};
pub use varres::VariableResolutionView;
