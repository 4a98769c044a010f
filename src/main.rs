use anyhow::Result;
use emptrack::commands::Cli;
use emptrack::libs::logging;
use emptrack::libs::messages::Message;
use emptrack::msg_warning;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    if let Err(err) = logging::init_tracing() {
        msg_warning!(Message::TracingInitFailed(err.to_string()));
    }

    Cli::menu()
}
