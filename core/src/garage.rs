//! # Garage
//!
//! Operations that take a [`Car`] over for good.
//!
//! Every function here receives the car by value. Once a car is handed in,
//! the caller's binding is moved out and the compiler rejects any later use:
//!
//! ```compile_fail,E0382
//! use vls_common::car::Car;
//! use vls_core::garage::print_name;
//!
//! let car = Car::new("Honda");
//! print_name(car);
//! car.drive(); // error[E0382]: borrow of moved value: `car`
//! ```

use std::io::{self, Write};

use tracing::{info, warn};
use vls_common::car::Car;
use vls_common::error::VlsError;

/// Prints the car's name to stdout, then drops the car.
///
/// A failed write is logged and otherwise ignored.
pub fn print_name(car: Car) {
    if let Err(err) = print_name_to(car, &mut io::stdout().lock()) {
        warn!("{err}");
    }
}

/// Writes the car's name and a line break to `out`.
///
/// The car is dropped when this returns, whether or not the write succeeded.
pub fn print_name_to<W: Write>(car: Car, out: &mut W) -> Result<(), VlsError> {
    info!(name = %car.get_name(), "took ownership of car");
    writeln!(out, "{}", car.get_name()).map_err(VlsError::output("car name"))
}
