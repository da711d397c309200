use thiserror::Error;

/// Error handling during AN2K record decoding and view construction.
#[derive(Error, Debug)]
pub enum An2kError {
    /// A caller-supplied construction parameter is out of contract.
    ///
    /// This variant is used for unsupported record-type identifiers,
    /// user-defined field numbers outside the legal range, and invalid
    /// record occurrence indices.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The tokenized record does not conform to the standard.
    ///
    /// This variant is used when a mandatory field is absent, a subfield
    /// carries the wrong number of items, or a coded value has no
    /// corresponding enumeration entry.
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// A legitimately optional element is absent.
    ///
    /// Raised only from the accessor that asked for the element; never a
    /// parsing failure and never aborts construction.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing file or buffer could not be read, or a cache scan
    /// failed for reasons unrelated to data correctness.
    #[error("Resource failure: {0}")]
    ResourceFailure(String),
}
