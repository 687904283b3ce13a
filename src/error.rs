use thiserror::Error;

/// Failure to get a JSON document out of the remote endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to '{url}' returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not valid JSON.
    #[error("response from '{url}' is not valid JSON: {message}")]
    Decode { url: String, message: String },
}

/// Failure to persist the spreadsheet.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The batch does not fit in a worksheet.
    #[error("{what} count {count} exceeds the worksheet limit of {limit}")]
    Limit {
        what: &'static str,
        count: usize,
        limit: usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
