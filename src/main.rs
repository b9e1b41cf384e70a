use hotelbook::commands::Cli;
use hotelbook::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
