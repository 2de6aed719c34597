use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can be wrong with a landscape description.
///
/// These are fatal: the search never starts on malformed input. The line
/// numbers are 1-based positions in the input text.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("line {line}: unknown section header `{token}`")]
    UnknownSection { line: usize, token: String },
    #[error("line {line}: unexpected token `{token}`")]
    BadToken { line: usize, token: String },
    #[error("line {line}: marker `{token}` is outside categories 1..=4")]
    UnknownCategory { line: usize, token: String },
    #[error("landscape is {width}x{height}; both sides must be a positive multiple of 4")]
    BadDimensions { width: usize, height: usize },
    #[error("missing `{0}` section")]
    MissingSection(&'static str),
    #[error("line {line}: tile kind `{token}` declared twice")]
    DuplicateTile { line: usize, token: String },
    #[error("line {line}: region {region} does not exist")]
    UnknownRegion { line: usize, region: usize },
    #[error("line {line}: region {region} needs one target count per category")]
    ShortTargets { line: usize, region: usize },
    #[error("line {line}: targets for region {region} given twice")]
    DuplicateTarget { line: usize, region: usize },
    #[error("no targets given for region {0}")]
    MissingTarget(usize),
    #[error("{declared} tiles declared for {regions} regions")]
    TileCountMismatch { declared: usize, regions: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Format: {inner}\n{backtrace}")]
    Format {
        inner: Box<FormatError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<FormatError> for Error {
    fn from(inner: FormatError) -> Self {
        Error::Format {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
