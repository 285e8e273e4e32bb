use sentinel_assess::adapters::outbound::console::{StderrProgressReporter, TerminalPrompter};
use sentinel_assess::adapters::outbound::network::SentinelApiClient;
use sentinel_assess::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sentinel_assess::application::use_cases::{AssessmentSession, SessionOutcome};
use sentinel_assess::cli::Args;
use sentinel_assess::config::{self, Settings};
use sentinel_assess::intake::domain::Role;
use sentinel_assess::logging;
use sentinel_assess::navigation::{Location, Route};
use sentinel_assess::shared::error::ExitCode;
use sentinel_assess::shared::Result;
use std::io::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    logging::init(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(&args, config_file)?;
    tracing::debug!(?settings, "settings resolved");

    let start = apply_default_role(Location::parse(args.location_or_default())?, settings.default_role);

    let repository = SentinelApiClient::new(&settings.api_url, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();
    let prompter = TerminalPrompter::new(settings.color && std::io::stderr().is_terminal());

    let writes_to_file = settings.output.is_some();
    let color = FormatterFactory::use_color(
        settings.format,
        settings.color && std::io::stdout().is_terminal(),
        writes_to_file,
    );
    let formatter = FormatterFactory::create(settings.format, color);
    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));

    let session = AssessmentSession::new(
        repository,
        progress_reporter,
        prompter,
        formatter,
        presenter,
        settings.status_interval,
    );

    let outcome = session.run(start).await?;
    Ok(report_outcome(&outcome))
}

/// Adds the configured role to a results location that has none.
fn apply_default_role(location: Location, default_role: Option<Role>) -> Location {
    match (Route::resolve(&location), default_role) {
        (Route::Assessment { id, role: None }, Some(role)) => {
            Route::assessment_location(&id, Some(role.id()))
        }
        _ => location,
    }
}

fn report_outcome(outcome: &SessionOutcome) -> ExitCode {
    match outcome {
        SessionOutcome::Rendered(_) => ExitCode::Success,
        SessionOutcome::Incomplete(location) => {
            eprintln!();
            eprintln!("Resume with: sentinel \"{}\"", location);
            ExitCode::Incomplete
        }
        SessionOutcome::Failed { location, message } => {
            eprintln!();
            eprintln!("❌ {}", message);
            eprintln!("   at {}", location);
            ExitCode::ApplicationError
        }
    }
}
