use std::{io, path::PathBuf};

/// Utility enum to package errors that can occur while loading or running a script.
#[derive(Debug)]
pub enum Error {
    /// The script could not be read.
    Read {
        /// Where the script was read from, or [`None`] for stdin.
        path: Option<PathBuf>,

        /// The underlying I/O error.
        err: io::Error,
    },

    /// An error that occurred while parsing or evaluating the script.
    Script(mat_error::Error),
}

impl Error {
    /// Report this error to stderr. Script errors are rendered against the given source.
    ///
    /// Reports are written straight to stderr; if that fails, the plain message is printed
    /// instead.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        match self {
            Self::Read { path: Some(path), err } => {
                eprintln!("error: could not read `{}`: {}", path.display(), err);
            },
            Self::Read { path: None, err } => eprintln!("error: could not read stdin: {}", err),
            Self::Script(err) => {
                if err.report_to_stderr(src_id, input).is_err() {
                    eprintln!("{}", err);
                }
            },
        }
    }
}

impl From<mat_error::Error> for Error {
    fn from(err: mat_error::Error) -> Self {
        Self::Script(err)
    }
}
