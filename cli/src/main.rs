mod commands;
mod terminal;

use commands::CommandLine;
use terminal::logging;
use vls_common::car::Car;
use vls_common::config::Config;
use vls_core::garage;

fn main() -> anyhow::Result<()> {
    let cfg: Config = CommandLine::parse_args().into_config();

    logging::init_logging(&cfg)?;

    let car: Car = Car::new(cfg.name);
    if cfg.drive {
        car.drive();
    }

    garage::print_name(car);
    Ok(())
}
