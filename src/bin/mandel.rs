// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use mandelbrot::{render, utils, Antialias, Interior, RenderConfig, RenderError, Viewport};
use num::Complex;
use std::str::FromStr;

/// Splits `s` at the first `separator` and parses both halves.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let index = s.find(separator)?;
    let left = s[..index].parse().ok()?;
    let right = s[index + 1..].parse().ok()?;
    Some((left, right))
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    parse_pair::<T>(s, separator)
        .map(|_| ())
        .ok_or_else(|| err.to_string())
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    nan_err: &str,
    range_err: &str,
) -> Result<(), String> {
    let value = s.parse::<T>().map_err(|_| nan_err.to_string())?;
    if value < low || value > high {
        return Err(range_err.to_string());
    }
    Ok(())
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const SAMPLES: &str = "samples";
const INTERIOR: &str = "interior";
const CATEGORIZER: &str = "categorizer";
const QUIET: &str = "quiet";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Supersampled Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.bmp")
                .help("Output file (BMP)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("5120x2880")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.5,-1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the complex plane"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1,1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the complex plane"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1024,
                        "Could not parse thread count",
                        "Thread count must be between 1 and 1024",
                    )
                })
                .help("Number of worker threads (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap per point"),
        )
        .arg(
            Arg::with_name(SAMPLES)
                .required(false)
                .long(SAMPLES)
                .short("a")
                .takes_value(true)
                .default_value("20")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        1024,
                        "Could not parse sample count",
                        "Sample count must be between 0 and 1024",
                    )
                })
                .help("Anti-aliasing samples per pixel, 0 to turn it off"),
        )
        .arg(
            Arg::with_name(INTERIOR)
                .required(false)
                .long(INTERIOR)
                .takes_value(true)
                .possible_values(&["zebra", "continuous"])
                .default_value("zebra")
                .help("How to shade points inside the set"),
        )
        .arg(
            Arg::with_name(CATEGORIZER)
                .required(false)
                .long(CATEGORIZER)
                .short("c")
                .takes_value(true)
                .default_value("100")
                .validator(|s| validate_positive(&s, "Categorizer must be a positive number"))
                .help("Zebra bands per unit of modulus"),
        )
        .arg(
            Arg::with_name(QUIET)
                .long(QUIET)
                .short("q")
                .help("Do not print progress"),
        )
        .get_matches()
}

fn config(matches: &ArgMatches) -> Result<RenderConfig, RenderError> {
    let size = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .ok_or_else(|| RenderError::InvalidViewport("could not parse image size".to_string()))?;
    let leftlower = matches
        .value_of(LEFTLOWER)
        .and_then(parse_complex)
        .ok_or_else(|| RenderError::InvalidViewport("could not parse left lower corner".to_string()))?;
    let rightupper = matches
        .value_of(RIGHTUPPER)
        .and_then(parse_complex)
        .ok_or_else(|| {
            RenderError::InvalidViewport("could not parse right upper corner".to_string())
        })?;

    let interior = match matches.value_of(INTERIOR) {
        Some("continuous") => Interior::continuous(),
        _ => Interior::Zebra {
            categorizer: value_t!(matches, CATEGORIZER, f64).unwrap_or_else(|e| e.exit()),
        },
    };
    let antialias = match value_t!(matches, SAMPLES, usize).unwrap_or_else(|e| e.exit()) {
        0 => Antialias::Off,
        samples => Antialias::Jitter { samples },
    };

    Ok(RenderConfig {
        viewport: Viewport::new(size.0, size.1, leftlower, rightupper)?,
        iterations: value_t!(matches, ITERATIONS, usize).unwrap_or_else(|e| e.exit()),
        interior,
        antialias,
        threads: value_t!(matches, THREADS, usize).unwrap_or_else(|_| num_cpus::get()),
        progress: !matches.is_present(QUIET),
    })
}

fn run(matches: &ArgMatches) -> Result<(), RenderError> {
    utils::self_check()?;
    let config = config(matches)?;
    let output = matches.value_of(OUTPUT).unwrap_or("mandelbrot.bmp");

    println!("starting render");
    let bitmap = render(&config)?;
    println!("\x1b[1K\rfinished");

    bitmap.write(output)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
