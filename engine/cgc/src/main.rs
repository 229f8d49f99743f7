//! Card-game enum CLI
//!
//! Inspects the enum registry, tag dispatch, and card-details files.

use cgc::commands::{check_cards, print_enums, print_tag, CommandError, EnumFormat};

fn main() {
    cgc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "enums" => {
            let mut format = EnumFormat::default();
            for arg in args.iter().skip(2) {
                let parsed = arg
                    .strip_prefix("--format=")
                    .and_then(EnumFormat::from_flag);
                let Some(parsed) = parsed else {
                    eprintln!("error: unknown option `{arg}`");
                    eprintln!("Usage: cgc enums [--format=json|ts|cs]");
                    std::process::exit(1);
                };
                format = parsed;
            }
            print_enums(format)
        }
        "tag" => {
            if args.len() != 4 {
                eprintln!("Usage: cgc tag <TAG> <VALUE>");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  cgc tag ZONE 3");
                eprintln!("  cgc tag card_type 5");
                std::process::exit(1);
            }
            print_tag(&args[2], &args[3])
        }
        "cards" => {
            if args.len() != 3 {
                eprintln!("Usage: cgc cards <card_details.json>");
                std::process::exit(1);
            }
            check_cards(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}

fn report(err: &CommandError) {
    eprintln!("error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn print_usage() {
    eprintln!("cgc - card-game enum tools");
    eprintln!();
    eprintln!("Usage: cgc <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  enums [--format=json|ts|cs]  Print every registered enum");
    eprintln!("  tag <TAG> <VALUE>            Describe a value held by a tag");
    eprintln!("  cards <file>                 Check a card-details file");
    eprintln!("  help                         Show this message");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=cg_enums=debug) for diagnostics.");
}
