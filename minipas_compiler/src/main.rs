use minipas_compiler::config::{build_info, RuntimeConfig};
use minipas_compiler::{logging, pipeline};
use std::env;

fn main() {
    let config = match RuntimeConfig::load() {
        Ok(config) => config,
        Err(error) => {
            logging::safe_log_error(error.error_code(), &error.to_string());
            std::process::exit(1);
        }
    };

    // Initialize global logging system
    if let Err(error) = logging::init_global_logging(config.logging.clone()) {
        eprintln!("Warning: {}", error);
    }

    if let Err(error) = pipeline::validate_pipeline() {
        logging::safe_log_error(logging::codes::system::INTERNAL_ERROR, &error);
        std::process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    if args.get(1).map(String::as_str) == Some("--help") {
        print_help(&args[0]);
        return;
    }

    if args.len() != 2 {
        println!("You should enter the name of source code.");
    }

    let Some(source) = args.get(1) else {
        std::process::exit(1);
    };

    match pipeline::process_file(source, &config) {
        Ok(result) => {
            println!("{}", result.summary());
        }
        Err(error) => {
            eprintln!("FAILED at {}: {}", error.stage(), error);
            std::process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    println!("minipas {}", build_info::source_info());
    println!("Scanner and syntax analyzer for minipas programs");
    println!();
    println!("USAGE:");
    println!("    {} <source-file>", program_name);
    println!("    {} --help", program_name);
    println!();
    println!("OUTPUT (written to the output directory):");
    println!("    <stem>.dyd          Token stream, one record per line");
    println!("    lexicalError.err    Lexical diagnostics, appended per run");
    println!("    grammarError.err    Syntax diagnostics, appended per run");
    println!("    variableList.var    Variable table");
    println!("    processList.pro     Procedure table");
    println!("    <stem>.json         Run summary, when enabled");
    println!();
    println!("ENVIRONMENT:");
    println!("    MINIPAS_CONFIG          TOML file with [file_processor], [output] and [logging] tables");
    println!("    MINIPAS_OUTPUT_DIR      Output directory (default: current directory)");
    println!("    MINIPAS_PERSIST_HANDOFF Write the .dyd file (default: true)");
    println!("    MINIPAS_EMIT_JSON_SUMMARY Write the JSON summary (default: false)");
    println!("    MINIPAS_LOGGING_MIN_LEVEL error, warning, info or debug");
}
