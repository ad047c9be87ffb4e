//! Demo schedule snapshot generator.
//!
//! Writes a deterministic one-day apron snapshot to a `.json` (or Brotli
//! `.json.br`) file that `apron-gui` can open. Useful for demos and for
//! exercising the reader with larger datasets.

use anyhow::Result;
use rapron::{generate_demo_schedule, ScheduleWriter};

struct GenConfig {
    /// Filler flights generated beneath the curated set
    extra_flights: usize,
    seed: u64,
    output: String,
    use_brotli: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            extra_flights: 14,
            seed: 42,
            output: "schedule.json".to_string(),
            use_brotli: false,
        }
    }
}

fn print_usage() {
    println!("Usage: apron-schedgen [options]");
    println!();
    println!("Options:");
    println!("  -flights <N>   Number of random filler flights (default: 14)");
    println!("  -seed <N>      RNG seed for the filler flights (default: 42)");
    println!("  -o <path>      Output path (default: schedule.json)");
    println!("  -brotli        Write compressed snapshot (output: *.json.br)");
    println!("  -h, --help     Show this help");
}

fn parse_args() -> Result<Option<GenConfig>> {
    let mut config = GenConfig::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-flights" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("-flights requires a value"))?;
                config.extra_flights = value.parse()?;
            }
            "-seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("-seed requires a value"))?;
                config.seed = value.parse()?;
            }
            "-o" => {
                config.output = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("-o requires a value"))?;
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            other => {
                anyhow::bail!("Unknown option: {} (try --help)", other);
            }
        }
    }

    Ok(Some(config))
}

fn main() -> Result<()> {
    let Some(mut config) = parse_args()? else {
        return Ok(());
    };

    if config.use_brotli && !config.output.ends_with(".br") {
        config.output.push_str(".br");
    }

    let data = generate_demo_schedule(config.seed, config.extra_flights);

    let mut writer = ScheduleWriter::new(&config.output)?;
    writer.write_header(
        &data.metadata.airport,
        &data.metadata.date,
        data.metadata.day_start_hour,
    )?;
    for flight in &data.flights {
        writer.write_flight(flight)?;
    }
    writer.write_footer()?;
    writer.finish()?;

    println!(
        "Wrote {} flights ({} events) to {}",
        data.flights.len(),
        data.total_events(),
        config.output
    );

    Ok(())
}
