use clap::{Parser, Subcommand};
use symptom_core::{rules, SymptomError, SymptomService, Trigger};

#[derive(Parser)]
#[command(name = "symptom")]
#[command(about = "Educational symptom checker CLI (mock classifier)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a symptom description and print the advice as JSON
    Check {
        /// Symptom description (at least 3 words); unquoted words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        symptoms: Vec<String>,
    },
    /// Print the service health payload
    Health,
    /// List classifier rules in evaluation order
    Rules,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { symptoms }) => {
            let text = symptoms.join(" ");
            match SymptomService::new().check(&text) {
                Ok(resp) => println!("{}", serde_json::to_string_pretty(&resp)?),
                Err(e @ SymptomError::InsufficientDetail { .. }) => {
                    eprintln!("{}", e);
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Health) => {
            let health = api_shared::HealthService::check_health();
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Some(Commands::Rules) => {
            for (i, rule) in rules().iter().enumerate() {
                println!(
                    "{}. {} [{}]: {}",
                    i + 1,
                    rule.name,
                    describe_trigger(&rule.trigger),
                    rule.conditions.join(", ")
                );
            }
        }
        None => {
            println!("Use 'symptom --help' for commands");
        }
    }

    Ok(())
}

fn describe_trigger(trigger: &Trigger) -> String {
    match trigger {
        Trigger::AllOf(keywords) => format!("all of: {}", keywords.join(", ")),
        Trigger::AnyOf(keywords) => format!("any of: {}", keywords.join(", ")),
        Trigger::Always => "fallback".to_string(),
    }
}
