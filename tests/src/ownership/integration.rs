use vls_common::car::Car;
use vls_common::config::Config;
use vls_core::garage;

/// Builds the car the way the entry point does and hands it to the garage.
#[test]
fn default_config_car_prints_honda() -> anyhow::Result<()> {
    let cfg: Config = Config::default();
    let car: Car = Car::new(cfg.name);

    let mut out: Vec<u8> = Vec::new();
    garage::print_name_to(car, &mut out)?;

    assert_eq!(String::from_utf8(out)?, "Honda\n");
    Ok(())
}

#[test]
fn name_borrow_ends_before_move() {
    let car: Car = Car::new("Honda");
    let name: &str = car.get_name();
    assert_eq!(name, "Honda");

    // the borrow ends above, so the car can move
    let mut out: Vec<u8> = Vec::new();
    garage::print_name_to(car, &mut out).unwrap();
    assert_eq!(out, b"Honda\n");
}

#[test]
fn drive_then_hand_off() -> anyhow::Result<()> {
    let car: Car = Car::new("Honda");

    let mut out: Vec<u8> = Vec::new();
    car.drive_to(&mut out)?;
    garage::print_name_to(car, &mut out)?;

    assert_eq!(String::from_utf8(out)?, "vroooom\nHonda\n");
    Ok(())
}

#[test]
fn independent_cars_keep_their_names() -> anyhow::Result<()> {
    let cars: Vec<Car> = vec![Car::new("Honda"), Car::new("Civic"), Car::new("")];

    let mut out: Vec<u8> = Vec::new();
    for car in cars {
        garage::print_name_to(car, &mut out)?;
    }

    assert_eq!(String::from_utf8(out)?, "Honda\nCivic\n\n");
    Ok(())
}
