use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::process::ExitCode;
use subnet_calc::cli::Cli;
use subnet_calc::output::{render_cheatsheet, render_json, Presenter};
use subnet_calc::processing::evaluate;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    log::debug!("#Start main()");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // usage errors exit 1, not clap's default 2
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let color = !cli.no_color;
    let presenter = Presenter::new(color);

    if cli.cheatsheet {
        println!("{}", render_cheatsheet(color));
        return ExitCode::SUCCESS;
    }

    let token = cli.token.as_deref().unwrap_or_default();
    let eval = match evaluate(token, cli.base.as_deref()) {
        Ok(eval) => eval,
        Err(e) => {
            eprintln!("{}", presenter.render_error(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match render_json(&eval) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{}", presenter.render_error(&e.to_string()));
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", presenter.render(&eval));
    }

    ExitCode::SUCCESS
}

/// Console logging to stderr so stdout stays clean for `--json`.
/// Level comes from SUBNET_CALC_LOG (error|warn|info|debug|trace), default warn.
fn init_logging() {
    let level = std::env::var("SUBNET_CALC_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            let _ = log4rs::init_config(config);
        }
        Err(e) => eprintln!("Error initializing log4rs: {e}"),
    }
}
