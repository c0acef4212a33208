#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod generator;
pub mod record;
pub mod sound;

pub use error::GenError;
pub use format::{ArrayWriter, Format, LinesWriter, RecordSink};
pub use generator::{generate_array_json, generate_json_lines, Generator, DEFAULT_COUNT};
pub use record::Record;
pub use sound::Sound;
