extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate nebulabrot;
extern crate rand;

use clap::{App, Arg, ArgMatches};
use nebulabrot::output;
use nebulabrot::{Band, Config, Renderer, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    T::from_str(s).map(|_| ()).map_err(|_| err.to_string())
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const SAMPLES: &str = "samples";
const MIN_LENGTH: &str = "min-length";
const MAX_LENGTH: &str = "max-length";
const RED: &str = "red";
const GREEN: &str = "green";
const BLUE: &str = "blue";
const RADIUS: &str = "radius";
const EXCLUSION: &str = "exclusion";
const SEED: &str = "seed";
const TICKER: &str = "ticker";

fn band_arg<'a>(name: &'a str, default: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .required(false)
        .long(name)
        .takes_value(true)
        .value_name("MIN,MAX")
        .default_value(default)
        .validator(|s| validate_pair::<usize>(&s, ',', "Could not parse orbit length band"))
}

fn args<'a>() -> ArgMatches<'a> {
    App::new("nebulabrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Nebulabrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.bmp, .png, .ppm); defaults to <timestamp>.bmp"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("900x900")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(SAMPLES)
                .required(false)
                .long(SAMPLES)
                .short("n")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse sample count",
                        "Sample count must be positive",
                    )
                })
                .help("Number of orbits to trace"),
        )
        .arg(
            Arg::with_name(MIN_LENGTH)
                .required(false)
                .long(MIN_LENGTH)
                .takes_value(true)
                .default_value("500")
                .validator(|s| validate_number::<usize>(&s, "Could not parse orbit length"))
                .help("Trace only orbits longer than this"),
        )
        .arg(
            Arg::with_name(MAX_LENGTH)
                .required(false)
                .long(MAX_LENGTH)
                .takes_value(true)
                .default_value("8000")
                .validator(|s| {
                    validate_range(
                        &s,
                        2,
                        usize::max_value(),
                        "Could not parse orbit length",
                        "Maximum orbit length must be at least 2",
                    )
                })
                .help("Trace only orbits shorter than this; also the iteration cap"),
        )
        .arg(band_arg(RED, "2000,8000").help("Orbit lengths plotted in red"))
        .arg(band_arg(GREEN, "1300,5000").help("Orbit lengths plotted in green"))
        .arg(band_arg(BLUE, "1000,2000").help("Orbit lengths plotted in blue"))
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("2.0")
                .validator(|s| {
                    validate_range(
                        &s,
                        1.25,
                        1.0e6,
                        "Could not parse sampling radius",
                        "Sampling radius must be between 1.25 and 1000000",
                    )
                })
                .help("Half-width of the square candidates are drawn from"),
        )
        .arg(
            Arg::with_name(EXCLUSION)
                .required(false)
                .long(EXCLUSION)
                .short("x")
                .takes_value(true)
                .possible_values(&["cardioid", "boxes", "none"])
                .default_value("cardioid")
                .help("Which provably-trapped points to skip"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .takes_value(true)
                .validator(|s| validate_number::<u64>(&s, "Could not parse seed"))
                .help("Seed for the random number generator"),
        )
        .arg(
            Arg::with_name(TICKER)
                .required(false)
                .long(TICKER)
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse progress interval",
                        "Progress interval must be positive",
                    )
                })
                .help("Report progress every this many traced orbits"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, String> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| format!("Could not parse --{}", name))
}

fn band(matches: &ArgMatches, name: &str) -> Result<Band, String> {
    matches
        .value_of(name)
        .and_then(|s| parse_pair::<usize>(s, ','))
        .map(|(min, max)| Band::new(min, max))
        .ok_or_else(|| format!("Could not parse --{}", name))
}

fn configure(matches: &ArgMatches) -> Result<Config, String> {
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .ok_or_else(|| "Error parsing image dimensions".to_string())?;
    let seed = match matches.value_of(SEED) {
        Some(_) => Some(value::<u64>(matches, SEED)?),
        None => None,
    };
    Ok(Config {
        width,
        height,
        min_length: value(matches, MIN_LENGTH)?,
        max_length: value(matches, MAX_LENGTH)?,
        red: band(matches, RED)?,
        green: band(matches, GREEN)?,
        blue: band(matches, BLUE)?,
        samples: value(matches, SAMPLES)?,
        sample_radius: value(matches, RADIUS)?,
        exclusion: value::<Strategy>(matches, EXCLUSION)?,
        ticker: value(matches, TICKER)?,
        seed,
    })
}

fn output_path(matches: &ArgMatches) -> PathBuf {
    match matches.value_of(OUTPUT) {
        Some(path) => PathBuf::from(path),
        None => {
            let stamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            PathBuf::from(format!("{}.bmp", stamp))
        }
    }
}

fn run(matches: &ArgMatches) -> Result<PathBuf, String> {
    let config = configure(matches)?;
    let path = output_path(matches);
    // Fail on a bad extension before spending minutes on the render.
    output::Format::from_path(&path).map_err(|e| e.to_string())?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut renderer = Renderer::new(config).map_err(|e| e.to_string())?;

    println!("Processing points");
    let stats = renderer.run(rng, |done, total| {
        println!("{:6} / {}", done, total);
        let _ = io::stdout().flush();
    });
    debug!("{:?}", stats);

    println!("Rendering image");
    let image = renderer.image();

    println!("Saving to {}", path.display());
    output::save(&path, &image).map_err(|e| e.to_string())?;
    Ok(path)
}

fn main() {
    env_logger::init();
    let matches = args();
    match run(&matches) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(path) => info!("wrote {}", path.display()),
    }
}
