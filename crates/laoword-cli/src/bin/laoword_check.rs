// laoword-check: Segment Lao text from stdin and check every word.
//
// Each span is printed with OK or ERR. Incorrect words also show the
// first rule they break. The exit status does not depend on the verdicts.
//
// Usage:
//   laoword-check [OPTIONS]
//
// Options:
//   --max-consonants N   Most consonants allowed in one word (default 4)
//   --reject-non-lao     Report words starting with a non-Lao character
//   --errors-only        Print incorrect spans only
//   --json               Print a JSON array of check results
//   -h, --help           Print help

use std::io::{self, Write};

use laoword_cli::SpanRecord;

fn main() {
    laoword_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if laoword_cli::wants_help(&args) {
        println!("laoword-check: Check the structure of Lao words.");
        println!();
        println!("Usage: laoword-check [OPTIONS]");
        println!();
        println!("Reads text from stdin, segments it and prints one line per span:");
        println!("  OK  [start..end]: <text>");
        println!("  ERR [start..end]: <text> (<reason>)");
        println!();
        println!("Options:");
        println!("  --max-consonants N   Most consonants allowed in one word (default 4)");
        println!("                       Also read from {}", laoword_cli::MAX_CONSONANTS_ENV);
        println!("  --reject-non-lao     Report words starting with a non-Lao character");
        println!("  --errors-only        Print incorrect spans only");
        println!("  --json               Print results as a JSON array");
        println!("  -h, --help           Print this help");
        return;
    }

    let (handle, args) =
        laoword_cli::parse_options(&args).unwrap_or_else(|e| laoword_cli::fatal(&e));

    let mut json = false;
    let mut errors_only = false;
    for arg in &args {
        match arg.as_str() {
            "--json" => json = true,
            "--errors-only" => errors_only = true,
            other => laoword_cli::fatal(&format!("unknown argument: {other}")),
        }
    }

    let input = laoword_cli::read_stdin();
    let results: Vec<_> = handle
        .check(&input)
        .into_iter()
        .filter(|r| !errors_only || !r.grammar_correct)
        .collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let records: Vec<SpanRecord<'_>> = results.iter().map(SpanRecord::from).collect();
        let _ = writeln!(out, "{}", laoword_cli::to_json(&records));
        return;
    }

    for result in &results {
        let text = laoword_cli::display_text(result.word());
        let range = format!("[{:>4}..{:>4}]", result.start_index(), result.end_index());
        if result.grammar_correct {
            let _ = writeln!(out, "OK  {range}: {text}");
        } else {
            let reason = handle
                .diagnose(result.word())
                .map(|v| v.description())
                .unwrap_or("invalid");
            let _ = writeln!(out, "ERR {range}: {text} ({reason})");
        }
    }
}
