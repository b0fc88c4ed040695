mod timer;

use std::str::FromStr;

use clap::{value_t, App, AppSettings, Arg};
use log::{debug, info, warn};

use inv_sqrt::{estimate, inv_sqrt};

// ----------------------------------------------------------------

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_VALUE: &str = "3.4";
const DEFAULT_EVALUATIONS: &str = "10000000";

fn main() {
    env_logger::init();

    // Parse command line arguments.
    let args = App::new("rsqrt")
        .version(VERSION)
        .setting(AppSettings::AllowNegativeNumbers)
        .about("Approximate square roots via the fast inverse square root trick")
        .arg(
            Arg::with_name("VALUE")
                .help("Positive number to take the root of")
                .default_value(DEFAULT_VALUE)
                .validator(|s| {
                    f32::from_str(&s)
                        .and(Ok(()))
                        .or(Err("must be a number".to_string()))
                }),
        )
        .arg(
            Arg::with_name("inverse")
                .short("i")
                .long("inverse")
                .help("Print the reciprocal square root instead of the square root"),
        )
        .arg(
            Arg::with_name("compare")
                .short("c")
                .long("compare")
                .help("Also print the exact result and the relative error"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("Time a batch of evaluations and print the throughput"),
        )
        .arg(
            Arg::with_name("evaluations")
                .long("evaluations")
                .value_name("N")
                .help("Number of evaluations to time with --stats")
                .takes_value(true)
                .default_value(DEFAULT_EVALUATIONS)
                .validator(|s| {
                    u32::from_str(&s)
                        .and(Ok(()))
                        .or(Err("must be an integer".to_string()))
                }),
        )
        .get_matches();

    let n = value_t!(args, "VALUE", f32).unwrap_or_else(|e| e.exit());
    debug!("input: {:e} (bits: {:#010x})", n, n.to_bits());

    if !(n > 0.0 && n.is_normal()) {
        warn!(
            "{} is not a positive normal number, the result is meaningless",
            n
        );
    }

    debug!("raw estimate: {:e}", estimate(n));
    let r = inv_sqrt(n);
    info!("inv_sqrt({}) = {:e}", n, r);

    let (approx, exact) = if args.is_present("inverse") {
        (r, 1.0 / (n as f64).sqrt())
    } else {
        (1.0 / r, (n as f64).sqrt())
    };

    println!("{:.6}", approx);

    if args.is_present("compare") {
        let err = (approx as f64 - exact) / exact;
        println!("exact:          {:.6}", exact);
        println!("relative error: {:.4}%", err * 100.0);
    }

    if args.is_present("stats") {
        let count = value_t!(args, "evaluations", u32).unwrap_or_else(|e| e.exit());
        let fast = timer::time_batch(n, count, inv_sqrt);
        let reference = timer::time_batch(n, count, |x| 1.0 / x.sqrt());
        debug!("checksums: {} / {}", fast.checksum, reference.checksum);

        println!(
            "inv_sqrt:     {} evaluations in {:.3}s ({:.1}M/s)",
            fast.evaluations,
            fast.seconds,
            fast.evaluations_per_second() / 1_000_000.0
        );
        println!(
            "1.0 / sqrt(): {} evaluations in {:.3}s ({:.1}M/s)",
            reference.evaluations,
            reference.seconds,
            reference.evaluations_per_second() / 1_000_000.0
        );
    }
}
