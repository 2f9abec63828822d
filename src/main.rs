use clap::{arg, command, value_parser, ArgMatches, Command};
use colored::*;
use lanczos_fvm as fvm;
use num_complex::Complex64;
use rayon::ThreadPoolBuilder;
use std::process;

fn main() {
    let matches = command!()
        .arg(
            arg!(
                -n --number_of_threads <NUMBER_OF_THREADS> "Sets the number of threads"
            )
            .required(false)
            .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(
                -l --log_level <LOG_LEVEL> "Sets the log level: error, warn, info, debug or trace"
            )
            .required(false)
            .default_value(fvm::logger::DEFAULT_LOG_LEVEL),
        )
        .subcommand(
            Command::new("gamma")
                .about("Evaluates the gamma function at a complex point")
                .arg(
                    arg!(--re <RE> "Real part of the argument")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    arg!(--im <IM> "Imaginary part of the argument")
                        .required(false)
                        .allow_hyphen_values(true)
                        .default_value("0.0")
                        .value_parser(value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Writes the gamma function over a real range")
                .arg(
                    arg!(--start <START> "First argument")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    arg!(--end <END> "Last argument")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    arg!(--step <STEP> "Spacing between arguments")
                        .required(false)
                        .default_value("0.1")
                        .value_parser(value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Checks the gamma function against factorials, sqrt(pi) and the reflection formula"),
        )
        .subcommand(
            Command::new("mesh")
                .about("Builds the grid and writes the case parameters, post-processing and vtk files"),
        )
        .get_matches();

    fvm::logger::init_logging(matches.get_one::<String>("log_level").map(String::as_str));

    if let Some(&num_threads) = matches.get_one::<usize>("number_of_threads") {
        if let Err(e) = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            eprintln!("Error while building the thread pool: {e}.");
            process::exit(1);
        }
    }

    match matches.subcommand() {
        Some(("gamma", sub_matches)) => run_gamma(sub_matches),
        Some(("table", sub_matches)) => run_table(sub_matches),
        Some(("check", _)) => run_check(),
        Some(("mesh", _)) => {
            if let Err(e) = fvm::mesh::run() {
                eprintln!("Error while building the mesh: {e}.");
                process::exit(1);
            }
        }
        _ => {}
    }
}

fn get_float(matches: &ArgMatches, id: &str) -> f64 {
    matches.get_one::<f64>(id).copied().unwrap_or_default()
}

fn run_gamma(matches: &ArgMatches) {
    let z = Complex64::new(get_float(matches, "re"), get_float(matches, "im"));
    match fvm::try_gamma(z) {
        Ok(value) => println!("{} {}", format!("gamma({z}) =").cyan().bold(), value),
        Err(e) => {
            eprintln!("Error while evaluating the gamma function: {e}.");
            process::exit(1);
        }
    }
}

fn run_table(matches: &ArgMatches) {
    let start = get_float(matches, "start");
    let end = get_float(matches, "end");
    let step = get_float(matches, "step");
    let result = fvm::io::create_case_directories().and_then(|_| {
        let table = fvm::gamma::table::GammaTable::build(start, end, step)?;
        table.write_to_post_processing()
    });
    if let Err(e) = result {
        eprintln!("Error while writing the gamma table: {e}.");
        process::exit(1);
    }
}

fn run_check() {
    let checks = fvm::gamma::self_checks();
    let mut failures = 0;
    println!(
        "\n{:<32} {:>16} {:>8}\n",
        "check".cyan().bold(),
        "error".cyan().bold(),
        "status".cyan().bold()
    );
    for check in &checks {
        let status = if check.passed() {
            "ok".green().bold()
        } else {
            failures += 1;
            "failed".red().bold()
        };
        println!("{:<32} {:>16.8e} {:>8}", check.label, check.error, status);
    }
    if failures > 0 {
        eprintln!("\nError: {failures} of {} checks failed.", checks.len());
        process::exit(1);
    }
}
