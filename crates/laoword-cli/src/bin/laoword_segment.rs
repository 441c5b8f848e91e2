// laoword-segment: Segment Lao text from stdin.
//
// Reads text from stdin and prints one line per span with its kind and
// inclusive code point range.
//
// Usage:
//   laoword-segment [OPTIONS]
//
// Options:
//   --json        Print a JSON array of {word, startIndex, endIndex}
//   -h, --help    Print help

use std::io::{self, Write};

use laoword_cli::SpanRecord;

fn main() {
    laoword_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if laoword_cli::wants_help(&args) {
        println!("laoword-segment: Split Lao text into word spans.");
        println!();
        println!("Usage: laoword-segment [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints spans with kinds:");
        println!("  LAO        [start..end]: <text>");
        println!("  SPACE      [start..end]: <text>");
        println!("  REPETITION [start..end]: <text>");
        println!("  NON_LAO    [start..end]: <text>");
        println!();
        println!("Positions count code points after zero width spaces are removed.");
        println!();
        println!("Options:");
        println!("  --json        Print spans as a JSON array");
        println!("  -h, --help    Print this help");
        return;
    }

    let json = args.iter().any(|a| a == "--json");
    if let Some(unknown) = args.iter().find(|a| a.as_str() != "--json") {
        laoword_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let input = laoword_cli::read_stdin();
    let spans = laoword_lo::segment(&input);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let records: Vec<SpanRecord<'_>> = spans.iter().map(SpanRecord::from).collect();
        let _ = writeln!(out, "{}", laoword_cli::to_json(&records));
        return;
    }

    for span in &spans {
        let _ = writeln!(
            out,
            "{:10} [{:>4}..{:>4}]: {}",
            span.kind().label(),
            span.start_index,
            span.end_index,
            laoword_cli::display_text(&span.text)
        );
    }
}
