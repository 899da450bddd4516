use {
    crate::common::{debug_println, DEBUG},
    clap::Parser,
    primes::Count,
    std::sync::atomic::Ordering,
};

/// Print the first COUNT prime numbers
#[derive(Debug, Parser)]
pub struct Cli {
    /// How many primes to print
    #[arg(default_value_t = Count::DEFAULT, allow_negative_numbers = true)]
    count: Count,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_println!("{:?}", cli.count);
    let primes = primes::enumerate(cli.count);
    // Candidates run from 2 up to the last prime found.
    debug_println!(
        "tested {} candidates",
        primes.last().map_or(0, |last| last - 1)
    );
    println!("{primes:?}");
    Ok(())
}
