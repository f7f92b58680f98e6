use std::{
    collections::{BTreeMap, VecDeque},
    ops::Bound,
};

use crate::ledger::{KeyValue, Ledger, LedgerError, StateIterator};

/// Ledger state kept in memory. Keys are ordered, so range scans come out in lexical order.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for MemoryLedger {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { state: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl Ledger for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        if key.is_empty() {
            return Err(LedgerError("key must not be an empty string".to_string()));
        }
        self.state.insert(key.to_string(), value);
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + '_>, LedgerError> {
        let start = match start_key {
            "" => Bound::Unbounded,
            key => Bound::Included(key),
        };
        let end = match end_key {
            "" => Bound::Unbounded,
            key => Bound::Excluded(key),
        };

        // BTreeMap::range panics on an inverted range
        let entries = if !start_key.is_empty() && !end_key.is_empty() && start_key > end_key {
            VecDeque::new()
        } else {
            self.state
                .range::<str, _>((start, end))
                .map(|(key, value)| KeyValue { key: key.clone(), value: value.clone() })
                .collect()
        };

        Ok(Box::new(MemoryIterator { entries, closed: false }))
    }
}

/// Snapshot of the entries matched by a range scan.
struct MemoryIterator {
    entries: VecDeque<KeyValue>,
    closed: bool,
}

impl StateIterator for MemoryIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next_entry(&mut self) -> Result<KeyValue, LedgerError> {
        if self.closed {
            return Err(LedgerError("iterator is closed".to_string()));
        }
        self.entries.pop_front().ok_or_else(|| LedgerError("no more entries".to_string()))
    }

    fn close(&mut self) -> Result<(), LedgerError> {
        self.closed = true;
        self.entries.clear();
        Ok(())
    }
}
