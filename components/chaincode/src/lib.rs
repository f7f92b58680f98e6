use csv::Trim;

pub use crate::{
    contract::{EnergyRecords, Function, Payload},
    error::ChaincodeError,
    ledger::{KeyValue, Ledger, LedgerError, MemoryLedger, StateIterator},
    record::Record,
};

mod contract;
mod error;
pub mod ledger;
mod record;

/// Replays the invocations listed in the csv file at `path` against a fresh in-memory ledger.
pub fn process_file<W: std::io::Write>(path: &str, io_writer: W) -> Result<(), ChaincodeError> {
    let file = std::fs::File::open(path)?;
    process_invocations(file, io_writer)
}

/// Each input row is `function,arg1,arg2,...`. For every row one result row
/// `function,status,payload` is written, where status is either `ok` or `error`.
pub fn process_invocations<R: std::io::Read, W: std::io::Write>(
    io_reader: R,
    io_writer: W,
) -> Result<(), ChaincodeError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(io_reader);
    let mut wtr = csv::Writer::from_writer(io_writer);
    wtr.write_record(["function", "status", "payload"])?;

    let mut contract = EnergyRecords::new(MemoryLedger::new());
    contract.init()?;

    // invocations are applied in file order, a failed one doesn't stop the run
    for result in rdr.records() {
        let row = result?;
        let mut fields = row.iter();
        let function = fields.next().unwrap_or_default();
        let args = fields.map(str::to_string).collect::<Vec<String>>();

        match contract.invoke(function, &args) {
            Ok(payload) => {
                let payload = String::from_utf8_lossy(&payload);
                wtr.write_record([function, "ok", payload.as_ref()])?
            },
            Err(e) => {
                log::error!("{function} failed: {e}");
                let message = e.to_string();
                wtr.write_record([function, "error", message.as_str()])?
            },
        }
    }

    wtr.flush()?;
    Ok(())
}
