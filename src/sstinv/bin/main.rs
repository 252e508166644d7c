//-- sstinv

#[macro_use]
extern crate log; //info/debug/error

mod winding;

use clap::Parser;
use num_format::{Locale, ToFormattedString};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sstinv")]
#[command(about = "streaming startin -- invert the winding order of the faces [sstinv]")]
#[command(author, version)]
struct Cli {
    /// OBJ file to read ('-' or nothing for stdin)
    input: Option<PathBuf>,
    /// OBJ file to write ('-' or nothing for stdout)
    output: Option<PathBuf>,
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    info!("===== sstinv =====");

    let input = cli.input.filter(|p| p.as_os_str() != "-");
    let output = cli.output.filter(|p| p.as_os_str() != "-");

    let re = match (&input, &output) {
        (Some(i), Some(o)) => winding::invert(i, o),
        (Some(i), None) => winding::open_input(i)
            .and_then(|r| winding::invert_stream(r, io::stdout().lock())),
        (None, Some(o)) => winding::create_output(o)
            .and_then(|w| winding::invert_stream(io::stdin().lock(), w)),
        (None, None) => winding::invert_stream(io::stdin().lock(), io::stdout().lock()),
    };
    let summary = match re {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };

    info!("# lines: {}", summary.lines.to_formatted_string(&Locale::en));
    info!(
        "# faces inverted: {}",
        summary.faces.to_formatted_string(&Locale::en)
    );
    match output {
        Some(o) => println!("Inverted winding order saved to {}", o.display()),
        None => info!("Inverted winding order written to stdout"),
    }
    info!("✅");
    Ok(())
}
