// shellcomplete CLI entry point

use shellcomplete_cli::{output, router::CommandRouter};

fn main() {
    if let Err(e) = CommandRouter::route() {
        tracing::debug!(details = %e.technical_details(), "Command failed");
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
