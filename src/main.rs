// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use icongen::generate;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match collect_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e.to_string());
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let icon_dir = Path::new("public/icons");
    let backend = generate::default_backend();

    generate::run(
        icon_dir,
        generate::DEFAULT_LABEL,
        &generate::ICON_SIZES,
        backend.as_deref(),
    )?;

    Ok(())
}

const HELP: &str = "\
icongen generates the PNG icon set for the web app manifest.

USAGE:
  icongen [OPTIONS]

Renders public/icons/icon.svg into public/icons/icon-<size>x<size>.png
for every size the manifest expects, drawing a placeholder icon when
SVG rasterization is unavailable.

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version
      --quiet                   Disables warnings
";

struct Args {
    quiet: bool,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(Args {
        quiet: input.contains("--quiet"),
    })
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, record.args()),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}
