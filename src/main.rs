use log::{error, info};
use nanolyse::{cli, commands, config::Config, utils::logging, VERSION};

fn main() {
    let args = cli::Args::parse_cli();
    let config = Config::load();

    logging::init(&config.logfile(args.logfile.as_deref()));
    info!("NanoLyse {} started with arguments {:?}", VERSION, args);

    if let Err(e) = commands::run(&args, &config) {
        error!("{:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("NanoLyse finished.");
}
