mod error;

use error::Error;
use mat_compute::{numerical::{ctxt::Ctxt, value::Value}, run_script};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};
use tracing::debug;

/// Installs a tracing subscriber writing to stderr, if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Reads the whole script from the given file, or from stdin if there is none.
fn read_source(path: Option<PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) => fs::read_to_string(&path)
            .map_err(|err| Error::Read { path: Some(path), err }),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|err| Error::Read { path: None, err })?;
            Ok(input)
        },
    }
}

/// Runs a whole script in a new context. Only `print` produces output; the value of the last
/// statement is discarded.
fn execute(src_id: &str, path: Option<PathBuf>) -> ExitCode {
    let input = match read_source(path) {
        Ok(input) => input,
        Err(err) => {
            err.report_to_stderr(src_id, "");
            return ExitCode::FAILURE;
        },
    };

    debug!(src_id, bytes = input.len(), "running script");
    let mut ctxt = Ctxt::default();
    match run_script(&input, &mut ctxt) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            Error::from(err).report_to_stderr(src_id, &input);
            ExitCode::FAILURE
        },
    }
}

/// Evaluates one line of the REPL, printing its value unless it is `()`.
fn repl_execute(input: &str, ctxt: &mut Ctxt) {
    match run_script(input, ctxt) {
        Ok(Value::Unit) => (), // intentionally print nothing
        Ok(res) => println!("{}", res),
        Err(err) => Error::from(err).report_to_stderr("input", input),
    }
}

/// Runs the interactive REPL until end of input. Declarations persist between lines, including
/// those made before an error.
fn repl() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: could not start the editor: {}", err);
            return ExitCode::FAILURE;
        },
    };
    let mut ctxt = Ctxt::default();

    fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        repl_execute(&input, ctxt);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, &mut ctxt) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args_os();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        let path = PathBuf::from(filename);
        let src_id = path.display().to_string();
        execute(&src_id, Some(path))
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        execute("stdin", None)
    } else {
        // run the repl / interactive mode
        repl()
    }
}
