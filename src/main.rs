use clap::Parser;
use seat_organizer::app;
use seat_organizer::utils::logger;
use seat_organizer::CliConfig;

fn main() {
    let args = CliConfig::parse();

    let file_config = match app::load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let verbose = args.verbose || file_config.verbose();
    if args.json_logs || file_config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting seat-organizer");
    tracing::debug!("CLI config: {:?}", args);

    let result = app::organize(&args, &file_config)
        .and_then(|partition| Ok(app::render(&partition, args.pretty)?));

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Seat organization failed: {:#}", e);

            match e.downcast_ref::<seat_organizer::SeatError>() {
                Some(seat_error) => {
                    eprintln!("❌ {}", seat_error.user_friendly_message());
                    eprintln!("💡 {}", seat_error.recovery_suggestion());
                }
                None => eprintln!("❌ {:#}", e),
            }

            std::process::exit(app::exit_code(&e));
        }
    }
}
