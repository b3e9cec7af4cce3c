//! Multi-record FASTA reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::debug;
use needletail::{parse_fastx_reader, FastxReader};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub name: String,
    pub sequence: String,
}

/// Records in file order, looked up by name.
///
/// A repeated header resets the earlier record's sequence but keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastaRecords {
    records: Vec<FastaRecord>,
}

impl FastaRecords {
    pub fn from_pairs<N, S>(pairs: impl IntoIterator<Item = (N, S)>) -> FastaRecords
    where
        N: Into<String>,
        S: Into<String>,
    {
        let mut records = FastaRecords::default();
        for (name, sequence) in pairs {
            let index = records.start_record(name.into());
            records.records[index].sequence = sequence.into();
        }
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.sequence.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FastaRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.sequence.as_str())
    }

    fn start_record(&mut self, name: String) -> usize {
        match self.records.iter().position(|record| record.name == name) {
            Some(index) => {
                self.records[index].sequence.clear();
                index
            }
            None => {
                self.records.push(FastaRecord { name, sequence: String::new() });
                self.records.len() - 1
            }
        }
    }
}

impl<'a> IntoIterator for &'a FastaRecords {
    type Item = &'a FastaRecord;
    type IntoIter = std::slice::Iter<'a, FastaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn malformed(e: impl std::fmt::Display) -> Error {
    Error::MalformedInput(e.to_string())
}

fn collect_records(mut reader: Box<dyn FastxReader + '_>) -> Result<FastaRecords> {
    let mut records = FastaRecords::default();

    while let Some(record) = reader.next() {
        let record = record.map_err(malformed)?;
        let name = std::str::from_utf8(record.id()).map_err(malformed)?;
        let sequence: Vec<u8> = record
            .seq()
            .iter()
            .copied()
            .filter(|base| !base.is_ascii_whitespace())
            .collect();
        let sequence = String::from_utf8(sequence).map_err(malformed)?;

        let index = records.start_record(name.trim().to_string());
        records.records[index].sequence = sequence;
    }

    Ok(records)
}

/// Parse FASTA text from any buffered reader, gzipped or plain.
///
/// Empty input yields no records. Anything before the first `>` header is
/// malformed.
pub fn parse_fasta<R: BufRead + Send>(mut reader: R) -> Result<FastaRecords> {
    // an empty stream is an error to needletail, but an empty mapping here
    if reader.fill_buf()?.is_empty() {
        return Ok(FastaRecords::default());
    }

    let fastx = parse_fastx_reader(reader).map_err(malformed)?;
    collect_records(fastx)
}

/// Read a multi-record FASTA file; gzip input is detected and decompressed.
pub fn read_multifasta(path: impl AsRef<Path>) -> Result<FastaRecords> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let records = parse_fasta(BufReader::new(file))?;
    debug!("Read {} FASTA records from {:?}", records.len(), path);
    Ok(records)
}
