use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace, warn};

use crate::error::VlsError;

pub const DRIVE_SOUND: &str = "vroooom";

/// A named vehicle.
///
/// A `Car` is neither `Clone` nor `Copy`, so it always has exactly one owner.
/// The name is fixed at construction.
#[derive(Debug)]
pub struct Car {
    name: String,
}

impl Car {
    /// Builds a car with the given name. Any text is accepted, including "".
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        debug!(name = %name, "car built");
        Car { name }
    }

    /// Prints the drive sound to stdout.
    pub fn drive(&self) {
        if let Err(err) = self.drive_to(&mut io::stdout().lock()) {
            warn!("{err}");
        }
    }

    /// Writes the drive sound and a line break to `out`.
    pub fn drive_to<W: Write>(&self, out: &mut W) -> Result<(), VlsError> {
        writeln!(out, "{}", DRIVE_SOUND).map_err(VlsError::output("drive sound"))
    }

    /// Borrowed view of the name, valid for as long as the car is.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Drop for Car {
    fn drop(&mut self) {
        trace!(name = %self.name, "car dropped");
    }
}
