use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, clap::ValueEnum)]
enum EmitStage {
    Report,
    Declarations,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "spp",
    version,
    about = "Sketch Prototype Preprocessor — synthesizes forward declarations for Arduino-style sketches"
)]
struct Cli {
    /// Tag-record stream (JSON array) produced by the extraction step
    tags: PathBuf,

    /// Path of the primary sketch translation unit
    #[arg(short, long)]
    main_file: PathBuf,

    /// Output stage
    #[arg(long, value_enum, default_value_t = EmitStage::Report)]
    emit: EmitStage,

    /// Print pass progress
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("spp: tags      = {}", cli.tags.display());
        eprintln!("spp: main file = {}", cli.main_file.display());
        eprintln!("spp: emit      = {:?}", cli.emit);
    }

    // ── Load the tag stream ──
    let raw = match std::fs::read_to_string(&cli.tags) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("spp: error: {}: {}", cli.tags.display(), e);
            std::process::exit(2);
        }
    };
    let tags = match spp::input::parse_tags(&raw) {
        Ok(tags) => tags,
        Err(e) => {
            eprintln!("spp: error: {}: malformed tag stream: {}", cli.tags.display(), e);
            std::process::exit(2);
        }
    };

    if cli.verbose {
        eprintln!("spp: {} tags loaded", tags.len());
    }

    // ── Synthesize ──
    let unit = spp::unit::SketchUnit::new(tags, &cli.main_file);
    let result = spp::synthesis::synthesize(&unit);

    if cli.verbose {
        eprintln!(
            "spp: {} prototypes, insertion line {}",
            result.prototypes.len(),
            result.insertion_line
        );
    }

    match cli.emit {
        EmitStage::Report => {
            for proto in &result.prototypes {
                println!("{}", proto);
            }
            println!("insertion line: {}", result.insertion_line);
        }
        EmitStage::Declarations => {
            print!("{}", result.declaration_block());
        }
        EmitStage::Json => {
            let report = serde_json::json!({
                "insertion_line": result.insertion_line,
                "prototypes": result.prototypes,
                "tags_fingerprint": spp::input::stream_fingerprint(&raw),
            });
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("spp: error: {}", e);
                    std::process::exit(2);
                }
            }
        }
    }
}
