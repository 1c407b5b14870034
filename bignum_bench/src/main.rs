use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rusty_bignum::numtheory::{extended_euclid, gcd, gcd_naive};
use rusty_bignum::rand::XorShift32;
use std::fs::OpenOptions;
use std::io::{self, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

mod demo;
mod pow_mod;
mod test_data;
mod timer;

use pow_mod::pow_mod_recursive;
use test_data::TestData;
use timer::{Elapsed, Timer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// seed for the random number generator, read from /dev/urandom when not given
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    seed: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// walk through the Bignum API, printing every result
    Demo,

    /// print the generated test data
    TestData(DataArgs),

    /// time x[i]^y[i] mod m[i] for every index of three sets of test data
    PowMod {
        #[command(flatten)]
        timing: TimingArgs,

        /// time the recursive exponent halving algorithm instead of the iterative one
        #[arg(short, long, default_value_t = false)]
        recursive: bool,
    },

    /// time gcd(a[i], b[i]) for every index of two sets of test data
    Gcd {
        #[command(flatten)]
        timing: TimingArgs,

        /// time the extended Euclid's algorithm instead
        #[arg(short, long, default_value_t = false)]
        extended: bool,

        /// time trial division instead, only feasible for small numbers:
        /// try -n 22 --min-bits 1 --step-bits 1
        #[arg(long, default_value_t = false, conflicts_with = "extended")]
        naive: bool,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// amount of numbers in each set
    #[arg(short = 'n', long, default_value_t = 64)]
    count: usize,

    /// bit length of the first number
    #[arg(long, default_value_t = 16)]
    min_bits: usize,

    /// number of bits to add each step
    #[arg(long, default_value_t = 16)]
    step_bits: usize,
}

impl DataArgs {
    fn generate(&self, rng: &mut XorShift32) -> Result<TestData> {
        TestData::generate(self.count, self.min_bits, self.step_bits, rng)
            .context("Generating test data, --min-bits must be at least 1.")
    }
}

#[derive(Args, Debug)]
struct TimingArgs {
    #[command(flatten)]
    data: DataArgs,

    /// file to write the "<bits> <ms>" lines to, -o=- => stdout
    ///
    /// the milliseconds are processor time, the wall time only goes to the log
    #[arg(short, long, default_value_t = String::from("timings.data"))]
    output: String,

    /// force writing to the output file, even if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

/// Append one "<bits> <ms>" row
fn record(out: &mut dyn Write, bits: usize, elapsed: Elapsed) -> Result<()> {
    let cpu_ms = elapsed.cpu.as_millis();
    let wall_ms = elapsed.wall.as_millis();
    writeln!(out, "{bits} {cpu_ms}")?;
    info!(bits, cpu_ms, wall_ms, "timed");
    Ok(())
}

impl TimingArgs {
    fn open_output(&self) -> Result<Box<dyn Write>> {
        Ok(match self.output.as_str() {
            "-" => Box::new(io::stdout()),
            fname => Box::new(
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .create_new(!self.force)
                    .open(fname)
                    .with_context(|| format!("Opening {fname:?} for writing timings."))?,
            ),
        })
    }
}

#[instrument(skip_all)]
fn print_test_data(args: &DataArgs, rng: &mut XorShift32) -> Result<()> {
    let data = args.generate(rng)?;
    let mut out = io::stdout().lock();
    for i in 0..data.len() {
        writeln!(out, "[{i}]\t= {} ({} bits)", data.get(i), data.bits(i))?;
    }

    Ok(())
}

#[instrument(skip(args, rng))]
fn time_pow_mod(args: &TimingArgs, recursive: bool, rng: &mut XorShift32) -> Result<()> {
    let x = args.data.generate(rng)?;
    let y = args.data.generate(rng)?;
    let m = args.data.generate(rng)?;
    let mut out = args.open_output()?;

    for i in 0..x.len() {
        let timer = Timer::start().context("Reading the process CPU time.")?;
        let z = if recursive {
            pow_mod_recursive(x.get(i), y.get(i), m.get(i))?
        } else {
            let mut z = x.get(i).clone();
            z.pow_mod(y.get(i), m.get(i))?;
            z
        };
        let elapsed = timer.stop().context("Reading the process CPU time.")?;

        record(&mut out, x.bits(i), elapsed)?;
        debug!("{}^{} mod {} = {z}", x.get(i), y.get(i), m.get(i));
    }

    Ok(())
}

#[instrument(skip(args, rng))]
fn time_gcd(args: &TimingArgs, extended: bool, naive: bool, rng: &mut XorShift32) -> Result<()> {
    let a = args.data.generate(rng)?;
    let b = args.data.generate(rng)?;
    let mut out = args.open_output()?;

    for i in 0..a.len() {
        let timer = Timer::start().context("Reading the process CPU time.")?;
        let d = if extended {
            extended_euclid(a.get(i), b.get(i))?.gcd
        } else if naive {
            gcd_naive(a.get(i), b.get(i))
        } else {
            gcd(a.get(i), b.get(i))
        };
        let elapsed = timer.stop().context("Reading the process CPU time.")?;

        record(&mut out, a.bits(i), elapsed)?;
        debug!("gcd({}, {}) = {d}", a.get(i), b.get(i));
    }

    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => XorShift32::from_seed(seed),
        None => XorShift32::from_urandom().context("Seeding from /dev/urandom.")?,
    };
    debug!(?rng, "seeded");

    match cli.command {
        Command::Demo => demo::run(&mut io::stdout().lock(), &mut rng)?,
        Command::TestData(args) => print_test_data(&args, &mut rng)?,
        Command::PowMod { timing, recursive } => time_pow_mod(&timing, recursive, &mut rng)?,
        Command::Gcd {
            timing,
            extended,
            naive,
        } => time_gcd(&timing, extended, naive, &mut rng)?,
    }

    Ok(())
}
