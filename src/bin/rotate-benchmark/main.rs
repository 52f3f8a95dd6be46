use everybit::bit_array::BitArray;
use everybit::ops::{BitAccess, Rotate};
use everybit::{internal, reference};

use std::time::{Duration, Instant};
use std::{env, process};

use getopts::Options;
use log::{info, LevelFilter};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use simple_logger::SimpleLogger;

mod utils;

//-----------------------------------------------------------------------------

fn main() {
    let config = Config::new();
    if let Err(err) = SimpleLogger::new().with_level(config.log_level).init() {
        eprintln!("Cannot initialize the logger: {}", err);
    }

    info!("Generating a random {}-bit array with seed {}", config.bit_len, config.seed);
    let array = internal::random_array(config.bit_len, config.seed);
    println!("Bits:     {} ({} ones)", array.len(), array.count_ones());
    println!("");

    info!("Generating {} random rotations", config.rotations);
    let rotations = generate_rotations(config.rotations, config.bit_len, config.seed);
    println!("");

    let fast = rotate_fast(&array, &rotations);
    if config.verify {
        let truth = rotate_reference(&array, &rotations);
        match fast.first_difference(&truth) {
            Some(index) => {
                eprintln!("Verification failed: the results differ at bit {}", index);
                process::exit(1);
            },
            None => {
                println!("Verification passed");
                println!("");
            },
        }
    }

    utils::report_memory_usage();
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub bit_len: usize,
    pub rotations: usize,
    pub seed: u64,
    pub verify: bool,
    pub log_level: LevelFilter,
}

impl Config {
    const BIT_LEN: usize = 1 << 20;
    const ROTATIONS: usize = 1000;
    const SEED: u64 = 0;

    pub fn new() -> Config {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optopt("l", "bit-len", "use arrays of INT bits (default 1048576)", "INT");
        opts.optopt("n", "rotations", "number of rotations (default 1000)", "INT");
        opts.optopt("s", "seed", "seed for the random generator (default 0)", "INT");
        opts.optflag("v", "verify", "compare the results with the bit-by-bit rotation");
        opts.optflag("q", "quiet", "only log warnings and errors");
        opts.optflag("h", "help", "print this help");
        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(f) => {
                eprintln!("{}", f.to_string());
                process::exit(1);
            }
        };

        let mut config = Config {
            bit_len: Self::BIT_LEN,
            rotations: Self::ROTATIONS,
            seed: Self::SEED,
            verify: false,
            log_level: LevelFilter::Info,
        };
        if matches.opt_present("h") {
            let header = format!("Usage: {} [options]", program);
            print!("{}", opts.usage(&header));
            process::exit(0);
        }
        if let Some(s) = matches.opt_str("l") {
            match s.parse::<usize>() {
                Ok(n) => {
                    if n == 0 {
                        eprintln!("Invalid bit length: {}", n);
                        process::exit(1);
                    }
                    config.bit_len = n;
                },
                Err(f) => {
                    eprintln!("--bit-len: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("n") {
            match s.parse::<usize>() {
                Ok(n) => {
                    if n == 0 {
                        eprintln!("Invalid rotation count: {}", n);
                        process::exit(1);
                    }
                    config.rotations = n;
                },
                Err(f) => {
                    eprintln!("--rotations: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("s") {
            match s.parse::<u64>() {
                Ok(n) => config.seed = n,
                Err(f) => {
                    eprintln!("--seed: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        config.verify = matches.opt_present("v");
        if matches.opt_present("q") {
            config.log_level = LevelFilter::Warn;
        }

        config
    }
}

//-----------------------------------------------------------------------------

// A rotation of `len` bits at `offset` to the right by `amount`.
#[derive(Clone, Copy, Debug)]
struct Rotation {
    offset: usize,
    len: usize,
    amount: isize,
}

fn generate_rotations(n: usize, bit_len: usize, seed: u64) -> Vec<Rotation> {
    let mut result: Vec<Rotation> = Vec::with_capacity(n);

    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    for _ in 0..n {
        let offset = rng.gen_range(0, bit_len);
        let len = rng.gen_range(1, bit_len - offset + 1);
        let magnitude = rng.gen_range(0, len) as isize;
        let amount = if rng.gen() { magnitude } else { -magnitude };
        result.push(Rotation { offset, len, amount });
    }

    result
}

fn rotate_fast(array: &BitArray, rotations: &[Rotation]) -> BitArray {
    info!("Running {} rotations with word-level reversals", rotations.len());
    let mut result = array.clone();
    let now = Instant::now();
    for rotation in rotations.iter() {
        result.rotate(rotation.offset, rotation.len, rotation.amount);
    }
    report_results(rotations, now.elapsed());
    result
}

fn rotate_reference(array: &BitArray, rotations: &[Rotation]) -> BitArray {
    info!("Running {} rotations with bit-by-bit reversals", rotations.len());
    let mut result = array.clone();
    let now = Instant::now();
    for rotation in rotations.iter() {
        if rotation.len == 0 {
            continue;
        }
        let left_amount = everybit::ops::modulo(-(rotation.amount as i128), rotation.len);
        reference::rotate_left_by_reversal(&mut result, rotation.offset, rotation.len, left_amount);
    }
    report_results(rotations, now.elapsed());
    result
}

fn report_results(rotations: &[Rotation], duration: Duration) {
    let bits: usize = rotations.iter().map(|rotation| rotation.len).sum();
    utils::report_results(rotations.len(), bits, duration);
}

//-----------------------------------------------------------------------------
