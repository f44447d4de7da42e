use regression_playground::{run_playground, AppError, InteractionMode, RegressionConfig};

const USAGE: &str = "usage: regression_playground [--declarative] [config.yaml]";

fn run() -> Result<(), AppError> {
    let mut cfg = RegressionConfig::default();
    let mut declarative = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--declarative" | "-d" => declarative = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            path => {
                cfg.load_yaml(path)?;
                log::info!("loaded config from {path}");
            }
        }
    }
    // Command line wins over the config file.
    if declarative {
        cfg.mode = InteractionMode::DeclarativeControl;
    }
    run_playground(cfg)
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
