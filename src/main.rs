/* crate use */
use clap::Parser;

/* project use */
use fqstat::cli::Command;

fn main() {
    let params = Command::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(params.log_level()))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = params.run(&mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
