extern crate clap;
extern crate sparselife;

use clap::{App, Arg, ArgMatches};
use sparselife::data::Generation;
use sparselife::rendering;
use std::error::Error;
use std::fmt::Display;
use std::process::exit;
use std::str::FromStr;

fn main() {
    exit(match inner_main() {
        Ok(_) => 0,
        Err(err) => {
            println!("{}", err);
            1
        }
    })
}

fn inner_main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("Sparse Life")
        .version(version().as_ref())
        .about("Conway's Game of Life on an unbounded grid, in your terminal!")
        .arg(
            Arg::with_name("grid-width")
                .short("w")
                .long("grid-width")
                .default_value("40")
                .help("Width of the randomly seeded starting area"),
        )
        .arg(
            Arg::with_name("grid-height")
                .short("h")
                .long("grid-height")
                .default_value("30")
                .help("Height of the randomly seeded starting area"),
        )
        .arg(
            Arg::with_name("fill")
                .short("f")
                .long("fill")
                .default_value("0.3")
                .help("Probability that a starting cell is alive"),
        )
        .arg(
            Arg::with_name("update-rate")
                .short("u")
                .long("update-rate")
                .default_value("5")
                .help("Number of generations shown per second"),
        )
        .arg(
            Arg::with_name("max-generations")
                .short("m")
                .long("max-generations")
                .default_value("1000")
                .help("Stop after this many generations even if the game continues"),
        )
        .get_matches();

    let grid_width = get_number("grid-width", Some(0), &matches);
    let grid_height = get_number("grid-height", Some(0), &matches);
    let fill = get_number::<f64>("fill", None, &matches);
    let updates_per_second = get_number("update-rate", Some(0), &matches);
    let max_generations = get_number::<u64>("max-generations", None, &matches);

    let generation = Generation::random(grid_width, grid_height, fill);
    let app = rendering::App::new(generation, updates_per_second, max_generations);
    let status = app.run()?;
    println!("{}", status);
    Ok(())
}

fn version() -> String {
    let (maj, min, pat) = (
        option_env!("CARGO_PKG_VERSION_MAJOR"),
        option_env!("CARGO_PKG_VERSION_MINOR"),
        option_env!("CARGO_PKG_VERSION_PATCH"),
    );
    match (maj, min, pat) {
        (Some(maj), Some(min), Some(pat)) => format!("{}.{}.{}", maj, min, pat),
        _ => "".to_owned(),
    }
}

fn get_number<A>(name: &str, maybe_min: Option<A>, matches: &ArgMatches<'_>) -> A
where
    A: FromStr + PartialOrd + Display + Copy,
    <A as FromStr>::Err: std::fmt::Debug,
{
    matches
        .value_of(name)
        .and_then(|s| s.parse::<A>().ok())
        .and_then(|u| match maybe_min {
            Some(min) => {
                if u > min {
                    Some(u)
                } else {
                    None
                }
            }
            _ => Some(u),
        })
        .expect(
            &{
                if let Some(min) = maybe_min {
                    format!("{} should be a positive number greater than {}.", name, min)
                } else {
                    format!("{} should be a positive number.", name)
                }
            }[..],
        )
}
