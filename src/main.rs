use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use symptom_checker_lib::checker::report::{self, DISCLAIMER};
use symptom_checker_lib::checker::{CheckOutcome, CheckerError, ReferenceData, SymptomChecker};
use symptom_checker_lib::config::{self, CheckerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "symptom-check",
    version,
    about = "Match symptoms against a small demo knowledge base (not medical advice)"
)]
struct Args {
    /// Known symptom to include (repeatable), e.g. --select "sore throat"
    #[arg(short, long = "select", value_name = "SYMPTOM")]
    selections: Vec<String>,

    /// Comma-separated symptoms, e.g. "fever, cough, headache"
    #[arg(short, long, default_value = "")]
    text: String,

    /// Number of matches to show
    #[arg(long, default_value_t = config::DEFAULT_TOP_N)]
    top: usize,

    /// Directory holding knowledge_base.json and disease_info.json
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long, conflicts_with = "show_kb")]
    json: bool,

    /// Print the full knowledge base
    #[arg(long)]
    show_kb: bool,

    /// List every known symptom and exit
    #[arg(long)]
    list_symptoms: bool,
}

fn main() -> ExitCode {
    symptom_checker_lib::init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, CheckerError> {
    let reference = match args.resources.clone().or_else(config::resources_dir) {
        Some(dir) => ReferenceData::load(&dir)?,
        None => {
            tracing::debug!("No resources directory; using built-in demo data");
            ReferenceData::demo()
        }
    };

    if args.list_symptoms {
        for symptom in reference.knowledge_base.all_symptoms() {
            println!("{symptom}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let checker = SymptomChecker::with_config(reference, CheckerConfig::new(args.top)?);
    let outcome = checker.check(&args.selections, &args.text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
        if args.show_kb {
            println!("\nKnowledge base (demo)\n");
            println!("{}", report::format_knowledge_base(checker.reference()));
        }
        println!("\n{DISCLAIMER}");
    }

    Ok(match outcome {
        CheckOutcome::NoSymptoms => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    })
}

fn print_outcome(outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::NoSymptoms => {
            eprintln!("{}", report::NO_SYMPTOMS_MESSAGE);
        }
        CheckOutcome::NoMatches { symptoms } => {
            println!("Your symptoms: {}\n", symptoms.joined(", "));
            println!("{}", report::NO_MATCHES_MESSAGE);
        }
        CheckOutcome::Matches(r) => {
            println!("Your symptoms: {}\n", r.symptoms.joined(", "));
            println!("Top matches\n");
            println!("{}\n", report::format_table(&r.top_matches));

            let best = &r.most_likely.candidate;
            println!(
                "Most likely: {} ({:.1}% match)",
                best.disease,
                report::confidence_percent(best)
            );
            if let Some(info) = &r.most_likely.info {
                println!("Description: {}", info.description);
                println!("Advice / next steps: {}", info.advice);
            }
        }
    }
}
