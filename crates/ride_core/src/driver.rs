//! Drivers and the rides assigned to them.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::report::write_ride_lines;
use crate::ride::SharedRide;

pub type DriverId = u32;

/// A driver with the rides assigned to them, in assignment order. The ride
/// list only grows through [`Driver::assign_ride`].
#[derive(Debug, Clone)]
pub struct Driver {
    id: DriverId,
    name: String,
    rating: f64,
    assigned_rides: Vec<SharedRide>,
}

impl Driver {
    pub fn new(id: DriverId, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            assigned_rides: Vec::new(),
        }
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn assign_ride(&mut self, ride: SharedRide) {
        debug!(driver_id = self.id, ride_id = ride.id(), "ride assigned");
        self.assigned_rides.push(ride);
    }

    pub fn rides(&self) -> impl Iterator<Item = &SharedRide> {
        self.assigned_rides.iter()
    }

    pub fn ride_count(&self) -> usize {
        self.assigned_rides.len()
    }

    /// Sum of fares over all assigned rides.
    pub fn total_earnings(&self) -> f64 {
        self.assigned_rides.iter().map(|ride| ride.compute_fare()).sum()
    }

    /// Mean fare per assigned ride; 0 when nothing is assigned.
    pub fn average_earnings(&self) -> f64 {
        if self.assigned_rides.is_empty() {
            return 0.0;
        }
        self.total_earnings() / self.assigned_rides.len() as f64
    }

    /// Header lines followed by one line per assigned ride.
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "Driver ID: {} | Name: {} | Rating: {:.2}",
            self.id, self.name, self.rating
        )?;
        writeln!(out, "Assigned rides: {}", self.assigned_rides.len())?;
        write_ride_lines(out, &self.assigned_rides)
    }

    /// Print the driver report to stdout.
    pub fn report_info(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::ride::Ride;

    fn ride(id: u32, distance: f64) -> SharedRide {
        Rc::new(Ride::standard(id, "A", "B", distance).expect("ride"))
    }

    #[test]
    fn average_earnings_without_rides_is_zero() {
        let driver = Driver::new(1, "Nobody", 5.0);
        assert_eq!(driver.average_earnings(), 0.0);
        assert_eq!(driver.total_earnings(), 0.0);
    }

    #[test]
    fn average_earnings_is_mean_of_fares() {
        let mut driver = Driver::new(1, "Asha Kumar", 4.92);
        driver.assign_ride(ride(101, 12.3));
        driver.assign_ride(ride(103, 3.2));
        assert!((driver.average_earnings() - 15.95).abs() < 1e-9);
        assert_eq!(format!("{:.2}", driver.average_earnings()), "15.95");
    }

    #[test]
    fn assignment_order_is_kept() {
        let mut driver = Driver::new(1, "D", 4.0);
        for id in [3, 1, 2] {
            driver.assign_ride(ride(id, 1.0));
        }
        let ids: Vec<u32> = driver.rides().map(|r| r.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(driver.ride_count(), 3);
    }

    #[test]
    fn report_info_prints_to_stdout() {
        let mut driver = Driver::new(1, "Asha Kumar", 4.92);
        driver.assign_ride(ride(101, 12.3));
        driver.report_info().expect("report to stdout");
    }

    #[test]
    fn report_lists_header_and_each_ride() {
        let mut driver = Driver::new(1, "Asha Kumar", 4.92);
        driver.assign_ride(ride(101, 12.3));
        driver.assign_ride(ride(103, 3.2));

        let mut out = Vec::new();
        driver.write_report(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Driver ID: 1 | Name: Asha Kumar | Rating: 4.92");
        assert_eq!(lines[1], "Assigned rides: 2");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Ride ID: 101"));
        assert!(lines[3].contains("Ride ID: 103"));
    }
}
