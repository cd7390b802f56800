use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a payload that does not fit into the carrier under the chosen strategy
    #[error("Capacity error: the payload needs {required} bits but the carrier only offers {available}")]
    CapacityError { required: usize, available: usize },

    /// Represents two images of different dimensions passed to an operation that needs them equal
    #[error("Dimension mismatch: left image is {left_width}x{left_height}, right image is {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    /// Represents malformed strategy or codec parameters, e.g. a zero block size
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Represents a failure of the QR collaborator to encode the payload text
    #[error("QR payload could not be encoded")]
    QrEncodingError(#[from] qrcode::types::QrError),

    /// Represents an unsupported carrier media, e.g. a JPEG whose recompression would destroy the LSBs
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media, e.g. a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No payload set")]
    PayloadNotSet,
}
