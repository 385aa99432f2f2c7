use anyhow::{bail, Context, Result};
use condensed_iupac::*;
use std::io::BufRead;
use tracing::warn;

struct Options {
    log_level: String,
    dot: Option<String>,
    quiet: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        log_level: "warn".to_string(),
        dot: None,
        quiet: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log" => options.log_level = args.next().context("--log needs a level")?,
            "--dot" => options.dot = Some(args.next().context("--dot needs a file name")?),
            "--quiet" => options.quiet = true,
            other => bail!("Unknown argument {other}; usage: iupac [--log LEVEL] [--dot FILE] [--quiet]"),
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    let options = parse_args()?;
    init_logging(&options.log_level);

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read formula from stdin")?;
    let line = line.trim();

    let ether = split_ether(line);
    if let Some(dot) = &options.dot {
        match ether {
            Some(_) => warn!("--dot is only supported for single molecules"),
            None => visualize_graph(&parse_formula(line), dot, None)?,
        }
    }

    let mut report = TraceReport::new();
    let result = match ether {
        Some((first, second)) => name_ether(first, second, &mut report),
        None => name_molecule(line, FragmentRole::Molecule, &mut report),
    };
    if !options.quiet {
        println!("{}", report.as_str());
    }

    // Naming failures are reported, not propagated: the exit code stays 0.
    match result {
        Ok(name) if ether.is_some() => println!("IUPAC NAME: {}", name),
        Ok(name) => println!("IUPAC Name: {}", name),
        Err(e) => warn!("{}: {}", line, e),
    }
    Ok(())
}
