use ip_range_kit::cmd;
use ip_range_kit::config::{self, Config};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;

fn init_logging(log_config_path: &str) -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(log_config_path, Default::default()).is_ok() {
        return Ok(());
    }
    // No usable log4rs.yml, warnings to stderr only.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let log_config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let vars = config::load_env();
    init_logging(&config::log_config_path(&vars))?;
    log::info!("#Start main()");
    let config = Config::from_vars(&vars);

    let args: Vec<String> = std::env::args().skip(1).collect();
    for line in cmd::run(&args, &config)? {
        println!("{line}");
    }
    Ok(())
}
