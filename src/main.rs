use std::{
    convert::TryFrom,
    io::{self, Read, Write},
};

use clap::{App, Arg, ArgMatches};
use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::EnvFilter;

use glenumgen::{
    gen::{DEFAULT_COMMENT, DEFAULT_EXCLUSION, DEFAULT_PACKAGE, DEFAULT_VAR_NAME},
    GenOptions, Style,
};

fn init_tracing() {
    // stdout carries the generated source
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn app() -> App<'static, 'static> {
    App::new("glenumgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads `<hex value>:<NAME>` lines on stdin and prints a Go enum name table")
        .arg(
            Arg::with_name("package")
                .help("Package of the generated file")
                .long("package")
                .short("p")
                .value_name("NAME")
                .default_value(DEFAULT_PACKAGE),
        )
        .arg(
            Arg::with_name("var")
                .help("Name of the generated map variable")
                .long("var")
                .value_name("NAME")
                .default_value(DEFAULT_VAR_NAME),
        )
        .arg(
            Arg::with_name("comment")
                .help("Comment placed above the declaration")
                .long("comment")
                .value_name("TEXT")
                .default_value(DEFAULT_COMMENT),
        )
        .arg(
            Arg::with_name("exclude")
                .help("Enum name to leave out of the table [default: TIMEOUT_IGNORED]")
                .long("exclude")
                .short("x")
                .value_name("NAME")
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("style")
                .help("Output style")
                .long("style")
                .value_name("style")
                .possible_values(&["preferred", "legacy"])
                .default_value("preferred"),
        )
}

fn options_from(matches: &ArgMatches) -> Result<GenOptions> {
    let value = |name: &str| matches.value_of(name).unwrap_or_default().to_string();
    let exclusions = match matches.values_of("exclude") {
        Some(names) => names.map(String::from).collect(),
        None => vec![DEFAULT_EXCLUSION.to_string()],
    };
    Ok(GenOptions {
        package: value("package"),
        var_name: value("var"),
        comment: value("comment"),
        exclusions,
        style: Style::try_from(matches.value_of("style").unwrap_or("preferred"))?,
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let matches = app().get_matches();
    let options = options_from(&matches)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .wrap_err("failed to read enum listing from stdin")?;

    let output = match glenumgen::generate(&input, &options) {
        Ok(output) => output,
        Err(e) => {
            e.report(&input)?;
            return Err(e).wrap_err("failed to generate enum table");
        }
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
