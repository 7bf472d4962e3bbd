use ChemHelpers::Examples::chem_examples::chem_examples;
use ChemHelpers::settings::{DEFAULT_CONFIG_FILE, Settings};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    let settings = Settings::load_or_default(DEFAULT_CONFIG_FILE).unwrap_or_else(|e| {
        eprintln!("cannot read {}: {}, using defaults", DEFAULT_CONFIG_FILE, e);
        Settings::default()
    });
    let _ = TermLogger::init(
        settings.level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    //
    let task: usize = 2;
    chem_examples(task);
}
