use thiserror::Error;

/// The kernels cannot fail on their fixed inputs; the only fallible
/// operation in a run is writing the report to stdout.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
