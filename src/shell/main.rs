use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use course_registrations::modules::course_registrations::adapters::outbound::source_json_file::JsonFileRegistrationSource;
use course_registrations::modules::course_registrations::use_cases::list_current_valid_participants::handler::ListCurrentValidParticipantsHandler;
use course_registrations::shell::config::Config;
use course_registrations::shell::output::render_names;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(path = %config.registrations_path.display(), "reading registrations");

    let source = Arc::new(JsonFileRegistrationSource::new(&config.registrations_path));
    let handler = ListCurrentValidParticipantsHandler::new(source);
    let names = handler.handle().await?;

    println!("{}", render_names(&names, config.pretty_output)?);
    Ok(())
}
