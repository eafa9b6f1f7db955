use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordfreq::WordCountError;

#[derive(Parser, Debug)]
#[command(version, about = "Report the most frequent words in a text", long_about = None)]
struct Args {
    /// Text file to analyze; reads stdin when omitted
    file: Option<PathBuf>,

    /// Minimum word length; shorter words are ignored
    #[arg(long, default_value_t = 6)]
    min_length: usize,

    /// Number of words to report
    #[arg(long, default_value_t = 50)]
    top: usize,
}

fn run(args: Args) -> Result<(), WordCountError> {
    let started = Instant::now();
    let mut stdout = io::stdout().lock();

    match args.file {
        Some(path) => {
            wordfreq::report_word_counts_in_file(&path, &mut stdout, args.min_length, args.top)?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| WordCountError::InputUnavailable {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            wordfreq::report_word_counts(&text, &mut stdout, args.min_length, args.top)?
        }
    }

    writeln!(stdout)?;
    writeln!(stdout, "Execution Time: {} ms", started.elapsed().as_millis())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wordfreq: {err}");
            ExitCode::FAILURE
        }
    }
}
