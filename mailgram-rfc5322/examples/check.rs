use std::io::BufRead;

use mailgram_rfc5322::{default_grammar, Entry};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = main_err() {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

/// Checks each line of stdin against the entry point named by the first argument (default:
/// `mailbox`) and prints whether it matched.
fn main_err() -> Result<(), Box<dyn std::error::Error>> {
    let entry = match std::env::args().nth(1) {
        Some(name) => name.parse::<Entry>()?,
        None => Entry::Mailbox,
    };
    let grammar = default_grammar();

    let mut rejected = 0usize;
    for line in std::io::stdin().lock().split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        match grammar.validate(entry, &line) {
            Ok(matched) => println!("ok {matched}"),
            Err(err) => {
                rejected += 1;
                println!("err {err}");
            }
        }
    }

    if rejected > 0 {
        return Err(Box::new(Rejected(rejected)));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
#[error("{0} line(s) rejected")]
struct Rejected(usize);

