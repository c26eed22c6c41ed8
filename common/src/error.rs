use std::io;

#[derive(thiserror::Error, Debug)]
pub enum VlsError {
    /// Writing to an output sink failed.
    #[error("Failed to write {what}: {source}")]
    Output {
        what: &'static str,
        #[source]
        source: io::Error,
    },
}

impl VlsError {
    pub fn output(what: &'static str) -> impl FnOnce(io::Error) -> VlsError {
        move |source| VlsError::Output { what, source }
    }
}
