use std::str::FromStr;

use crate::{
    ledger::{Ledger, ScopedIterator},
    ChaincodeError, Record,
};

pub type Payload = Vec<u8>;

/// Functions the contract answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    GetRecord,
    AppendRecord,
    GetAllRecords,
}

impl FromStr for Function {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getRecord" => Ok(Function::GetRecord),
            "appendRecord" => Ok(Function::AppendRecord),
            "getAllRecords" => Ok(Function::GetAllRecords),
            _ => Err(ChaincodeError::UnknownFunction(s.to_string())),
        }
    }
}

/// Energy production/consumption records, one per house, kept in the injected ledger.
///
/// The key of a record is the house id alone, so a new record for a house replaces the old one.
pub struct EnergyRecords<L: Ledger> {
    ledger: L,
}

impl<L: Ledger> EnergyRecords<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Called once when the chaincode is instantiated. Nothing to set up.
    pub fn init(&mut self) -> Result<Payload, ChaincodeError> {
        Ok(Payload::new())
    }

    pub fn invoke(&mut self, function: &str, args: &[String]) -> Result<Payload, ChaincodeError> {
        log::info!("{function} with {} argument(s)", args.len());

        match function.parse::<Function>()? {
            Function::GetRecord => self.get_record(args),
            Function::AppendRecord => self.append_record(args),
            Function::GetAllRecords => {
                if !args.is_empty() {
                    log::debug!("getAllRecords ignores its arguments: {args:?}");
                }
                self.get_all_records()
            },
        }
    }

    /// An absent house is not an error: the payload is just empty.
    fn get_record(&self, args: &[String]) -> Result<Payload, ChaincodeError> {
        let [house] = args else {
            return Err(ChaincodeError::ArgumentCount { expected: 1, given: args.len(), usage: "" });
        };

        let Some(bytes) = self.ledger.get_state(house)? else {
            log::debug!("No record for house {house}");
            return Ok(Payload::new());
        };

        match Record::from_bytes(&bytes) {
            Ok(record) => log::debug!("{record:?}"),
            Err(e) => log::warn!("Stored value for house {house} is not a record: {e}"),
        }

        Ok(bytes)
    }

    fn append_record(&mut self, args: &[String]) -> Result<Payload, ChaincodeError> {
        let [house, time, amount] = args else {
            return Err(ChaincodeError::ArgumentCount {
                expected: 3,
                given: args.len(),
                usage: " (1 -- house id, 2 -- date and time, 3 -- energy amount)",
            });
        };

        let record = Record::new(house, time, amount);
        let bytes = record.to_bytes()?;
        self.ledger.put_state(house, bytes)?;

        Ok(Payload::new())
    }

    fn get_all_records(&self) -> Result<Payload, ChaincodeError> {
        let mut iter = ScopedIterator::new(self.ledger.get_state_by_range("", "")?);

        let mut buffer = Payload::from(b"[".as_slice());
        let mut first = true;
        while iter.has_next() {
            let entry = iter.next_entry()?;

            if !first {
                buffer.push(b',');
            }
            buffer.extend_from_slice(b"{\"Key\":");
            // keys are plain strings and get escaped
            serde_json::to_writer(&mut buffer, &entry.key)?;
            buffer.extend_from_slice(b", \"Record\":");
            // stored values are already JSON objects, their bytes go out untouched
            buffer.extend_from_slice(&entry.value);
            buffer.push(b'}');
            first = false;
        }
        buffer.push(b']');

        log::debug!("getAllRecords:\n{}", String::from_utf8_lossy(&buffer));
        Ok(buffer)
    }
}
