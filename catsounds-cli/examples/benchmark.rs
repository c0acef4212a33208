use std::error::Error;
use std::io;
use std::time::Instant;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use catsounds::{ArrayWriter, Generator, LinesWriter, DEFAULT_COUNT};


fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut generator = Generator::new(StdRng::seed_from_u64(0));

    let start = Instant::now();
    generator.write_to(ArrayWriter::new(io::sink()), DEFAULT_COUNT)?;
    let elapsed_array = start.elapsed();
    warn!("Array format took: {:.2?}", elapsed_array);

    let start_lines = Instant::now();
    generator.write_to(LinesWriter::new(io::sink()), DEFAULT_COUNT)?;
    let elapsed_lines = start_lines.elapsed();
    warn!("Lines format took: {:.2?}", elapsed_lines);


    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
