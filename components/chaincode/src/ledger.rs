use thiserror::Error;

pub mod memory;

pub use memory::MemoryLedger;

/// Failure reported by the ledger itself. The message is kept verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct LedgerError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Key-value state owned by the host ledger.
pub trait Ledger {
    /// Returns `Ok(None)` if nothing was ever written under `key`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Cursor over keys in `[start_key, end_key)`, in lexical order.
    ///
    /// An empty `start_key` or `end_key` leaves that side of the range unbounded.
    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + '_>, LedgerError>;
}

/// Cursor returned by a range scan. It has to be closed once the caller is done with it.
pub trait StateIterator {
    fn has_next(&self) -> bool;
    fn next_entry(&mut self) -> Result<KeyValue, LedgerError>;
    fn close(&mut self) -> Result<(), LedgerError>;
}

/// Closes the wrapped cursor when dropped, so every exit path releases it exactly once.
pub(crate) struct ScopedIterator<'a> {
    inner: Box<dyn StateIterator + 'a>,
}

impl<'a> ScopedIterator<'a> {
    pub(crate) fn new(inner: Box<dyn StateIterator + 'a>) -> Self {
        Self { inner }
    }

    pub(crate) fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub(crate) fn next_entry(&mut self) -> Result<KeyValue, LedgerError> {
        self.inner.next_entry()
    }
}

impl Drop for ScopedIterator<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.inner.close() {
            log::warn!("Failed to close state iterator: {e}");
        }
    }
}
