use anyhow::{bail, Result};
use condensed_iupac::*;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input_csv, output_csv, log_level) = match &args[..] {
        [input, output] => (input, output, "info"),
        [input, output, flag, level] if flag == "--log" => (input, output, level.as_str()),
        _ => bail!("usage: iupac-batch <input.csv> <output.csv> [--log LEVEL]"),
    };
    init_logging(log_level);

    name_csv_file(input_csv, output_csv)?;
    Ok(())
}
