//! The fixed sample scenario printed by `ride_report`: four rides, one driver
//! holding rides 101 and 103, one rider holding rides 102 and 104.

use std::io::Write;

use crate::driver::Driver;
use crate::error::Result;
use crate::report::{format_money, write_ride_lines, ALL_RIDES_HEADER, DRIVER_HEADER, RIDER_HEADER};
use crate::ride::{RideId, RideKind, RideRegistry};
use crate::rider::Rider;

const SAMPLE_RIDES: [(RideId, RideKind, &str, &str, f64); 4] = [
    (101, RideKind::Standard, "Downtown", "Airport", 12.3),
    (102, RideKind::Premium, "Home", "Office", 5.5),
    (103, RideKind::Standard, "Mall", "Train Station", 3.2),
    (104, RideKind::Premium, "Hotel", "Beach", 8.75),
];

const DRIVER_RIDES: [RideId; 2] = [101, 103];
const RIDER_RIDES: [RideId; 2] = [102, 104];

/// Registry holding the four sample rides in creation order.
pub fn sample_registry() -> Result<RideRegistry> {
    let mut registry = RideRegistry::new();
    for (id, kind, pickup, dropoff, distance) in SAMPLE_RIDES {
        registry.create(id, kind, pickup, dropoff, distance)?;
    }
    Ok(registry)
}

/// Everything the report binary prints.
#[derive(Debug)]
pub struct DemoReport {
    pub registry: RideRegistry,
    pub driver: Driver,
    pub rider: Rider,
}

impl DemoReport {
    pub fn build() -> Result<Self> {
        Self::from_registry(sample_registry()?, &DRIVER_RIDES, &RIDER_RIDES)
    }

    /// Assign `driver_rides` to the sample driver and request `rider_rides`
    /// for the sample rider. Every id must be in `registry`.
    pub fn from_registry(
        registry: RideRegistry,
        driver_rides: &[RideId],
        rider_rides: &[RideId],
    ) -> Result<Self> {
        let mut driver = Driver::new(1, "Asha Kumar", 4.92);
        for &id in driver_rides {
            driver.assign_ride(registry.require(id)?);
        }

        let mut rider = Rider::new(5001, "Jordan Reddy");
        for &id in rider_rides {
            rider.request_ride(registry.require(id)?);
        }

        Ok(Self {
            registry,
            driver,
            rider,
        })
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{ALL_RIDES_HEADER}")?;
        write_ride_lines(out, self.registry.iter())?;

        writeln!(out)?;
        writeln!(out, "{DRIVER_HEADER}")?;
        self.driver.write_report(out)?;
        writeln!(
            out,
            "Average earnings per ride: {}",
            format_money(self.driver.average_earnings())
        )?;

        writeln!(out)?;
        writeln!(out, "{RIDER_HEADER}")?;
        self.rider.write_history(out)
    }
}
