//! Riders and their ride history.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::report::write_ride_lines;
use crate::ride::SharedRide;

pub type RiderId = u32;

/// A rider with the rides they requested, in request order.
#[derive(Debug, Clone)]
pub struct Rider {
    id: RiderId,
    name: String,
    requested_rides: Vec<SharedRide>,
}

impl Rider {
    pub fn new(id: RiderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            requested_rides: Vec::new(),
        }
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_ride(&mut self, ride: SharedRide) {
        debug!(rider_id = self.id, ride_id = ride.id(), "ride requested");
        self.requested_rides.push(ride);
    }

    pub fn rides(&self) -> impl Iterator<Item = &SharedRide> {
        self.requested_rides.iter()
    }

    pub fn ride_count(&self) -> usize {
        self.requested_rides.len()
    }

    pub fn write_history<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Rider ID: {} | Name: {}", self.id, self.name)?;
        writeln!(out, "Requested rides: {}", self.requested_rides.len())?;
        write_ride_lines(out, &self.requested_rides)
    }

    /// Print the ride history to stdout.
    pub fn report_history(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_history(&mut out)
    }
}
