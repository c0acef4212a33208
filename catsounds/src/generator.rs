use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenError;
use crate::format::{ArrayWriter, Format, LinesWriter, RecordSink};
use crate::record::Record;

pub const DEFAULT_COUNT: u64 = 1_000_000;

const WRITE_BUFFER_CAPACITY: usize = 64 * 1024;

/// Produces records with sequential ids and sounds drawn from its own random source.
#[derive(Debug)]
pub struct Generator<R> {
    rng: R,
}

/// Exact-size iterator over records `0..count`, see [`Generator::records`].
#[derive(Debug)]
pub struct Records<'a, R> {
    rng: &'a mut R,
    next_id: u64,
    count: u64,
}

impl Generator<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Generator::new(StdRng::from_entropy())
    }

    /// The same seed always yields the same sequence of sounds.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Generator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Generator { rng }
    }

    pub fn records(&mut self, count: u64) -> Records<'_, R> {
        Records {
            rng: &mut self.rng,
            next_id: 0,
            count,
        }
    }

    /// Streams `count` records into `sink` and closes it.
    ///
    /// # Errors
    /// Errors when `count` is zero or when the sink fails to write
    pub fn write_to<S: RecordSink>(
        &mut self,
        mut sink: S,
        count: u64,
    ) -> Result<S::Output, GenError> {
        if count == 0 {
            return Err(GenError::EmptyCount);
        }
        for record in self.records(count) {
            sink.write_record(&record)?;
        }
        sink.finish()
    }

    /// Creates or truncates the file at `path` and fills it with `count` records.
    ///
    /// # Errors
    /// Errors when `count` is zero, or on any I/O failure (bad path, permissions, disk full).
    /// A zero count is rejected before the file is touched.
    pub fn generate_file(
        &mut self,
        path: impl AsRef<Path>,
        format: Format,
        count: u64,
    ) -> Result<(), GenError> {
        let path = path.as_ref();
        if count == 0 {
            return Err(GenError::EmptyCount);
        }
        debug!(
            "Generating {} records as {:?} into {}",
            count,
            format,
            path.display()
        );

        let file = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, File::create(path)?);
        match format {
            Format::Array => self.write_to(ArrayWriter::new(file), count)?,
            Format::Lines => self.write_to(LinesWriter::new(file), count)?,
        };

        info!("Wrote {} records to {}", count, path.display());
        Ok(())
    }
}

impl<R: Rng> Iterator for Records<'_, R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.next_id >= self.count {
            return None;
        }
        let record = Record::new(self.next_id, self.rng.gen());
        self.next_id += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next_id).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl<R: Rng> ExactSizeIterator for Records<'_, R> {}

/// Writes `count` records as one JSON array to `path`, overwriting it.
///
/// # Errors
/// See [`Generator::generate_file`]
pub fn generate_array_json(path: impl AsRef<Path>, count: u64) -> Result<(), GenError> {
    Generator::from_entropy().generate_file(path, Format::Array, count)
}

/// Writes `count` records as JSON Lines to `path`, overwriting it.
///
/// # Errors
/// See [`Generator::generate_file`]
pub fn generate_json_lines(path: impl AsRef<Path>, count: u64) -> Result<(), GenError> {
    Generator::from_entropy().generate_file(path, Format::Lines, count)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sound::Sound;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_records_are_sequential() {
        let mut generator = Generator::seeded(42);
        let records: Vec<Record> = generator.records(100).collect();
        assert_eq!(records.len(), 100);
        for (expected, record) in (0..).zip(&records) {
            assert_eq!(record.id, expected);
            assert!(Sound::ALL.contains(&record.sound));
        }
    }

    #[test]
    fn test_records_size_hint() {
        let mut generator = Generator::seeded(1);
        let mut records = generator.records(3);
        assert_eq!(records.len(), 3);
        records.next();
        assert_eq!(records.len(), 2);
        records.next();
        records.next();
        assert_eq!(records.len(), 0);
        assert!(records.next().is_none());
    }

    #[test]
    fn test_same_seed_same_sounds() {
        let first: Vec<Record> = Generator::seeded(9).records(500).collect();
        let second: Vec<Record> = Generator::seeded(9).records(500).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_to_rejects_zero_count() {
        let mut generator = Generator::new(StepRng::new(0, 0));
        let res = generator.write_to(LinesWriter::new(Vec::new()), 0);
        assert!(matches!(res, Err(GenError::EmptyCount)));
    }

    #[test]
    fn test_write_to_lines() {
        let mut generator = Generator::new(StepRng::new(0, 0));
        let out = generator.write_to(LinesWriter::new(Vec::new()), 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"id\": 0, \"sound\": \"meow\"}\n{\"id\": 1, \"sound\": \"meow\"}\n"
        );
    }
}
