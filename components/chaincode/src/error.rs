use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Error, Debug)]
pub enum ChaincodeError {
    #[error("Incorrect number of arguments. Expecting {expected}{usage}, got {given}")]
    ArgumentCount { expected: usize, given: usize, usage: &'static str },
    #[error("CsvError: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),
    // the ledger message goes to the caller as is
    #[error("{0}")]
    Ledger(#[from] LedgerError),
    #[error("SerializationError: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid chaincode function name: {0:?}")]
    UnknownFunction(String),
}
