//! Ride records, their fare policies, and the registry that owns them.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::{Result, RideError};
use crate::fare::FareSchedule;
use crate::report::{format_distance, format_money};

pub type RideId = u32;

/// Shared, read-only handle to a ride. Drivers and riders hold clones of the
/// same handle; the ride lives as long as any holder does.
pub type SharedRide = Rc<Ride>;

/// Fare policy of a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideKind {
    /// Per-mile rate only, used when no specific kind was requested.
    Flat,
    Standard,
    Premium,
}

impl RideKind {
    /// Label printed in front of a ride line; flat rides have none.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            RideKind::Flat => None,
            RideKind::Standard => Some("[Standard]"),
            RideKind::Premium => Some("[Premium]"),
        }
    }
}

/// One trip. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: RideId,
    kind: RideKind,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
}

impl Ride {
    /// Build a ride, rejecting negative or non-finite distances.
    pub fn new(
        id: RideId,
        kind: RideKind,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self> {
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            warn!(ride_id = id, distance_miles, "rejecting ride with invalid distance");
            return Err(RideError::InvalidRideData {
                id,
                distance: distance_miles,
            });
        }
        // Normalizes -0.0 so it never prints as a negative distance or fare.
        let distance_miles = distance_miles + 0.0;
        let ride = Self {
            id,
            kind,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
        };
        debug!(ride_id = id, kind = ?kind, distance_miles, "ride created");
        Ok(ride)
    }

    pub fn flat(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self> {
        Self::new(id, RideKind::Flat, pickup, dropoff, distance_miles)
    }

    pub fn standard(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self> {
        Self::new(id, RideKind::Standard, pickup, dropoff, distance_miles)
    }

    pub fn premium(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<Self> {
        Self::new(id, RideKind::Premium, pickup, dropoff, distance_miles)
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn kind(&self) -> RideKind {
        self.kind
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    /// Fare under the default rate table.
    pub fn compute_fare(&self) -> f64 {
        self.compute_fare_with(&FareSchedule::default())
    }

    pub fn compute_fare_with(&self, schedule: &FareSchedule) -> f64 {
        schedule.fare(self.kind, self.distance_miles)
    }

    /// Write this ride's summary line, newline included.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{self}")?;
        Ok(())
    }

    /// Print this ride's summary line to stdout.
    pub fn describe(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = self.kind.tag() {
            // Padded to the widest tag so ride columns line up.
            write!(f, "{tag:<10} ")?;
        }
        write!(
            f,
            "Ride ID: {} | Pickup: {} | Dropoff: {} | Distance: {} miles | Fare: {}",
            self.id,
            self.pickup,
            self.dropoff,
            format_distance(self.distance_miles),
            format_money(self.compute_fare())
        )
    }
}

/// Owns every ride created for a session, in creation order, and hands out
/// shared handles to them.
#[derive(Debug, Default)]
pub struct RideRegistry {
    rides: Vec<SharedRide>,
    by_id: BTreeMap<RideId, usize>,
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ride. Ride ids must be unique within the registry.
    pub fn insert(&mut self, ride: Ride) -> Result<SharedRide> {
        let id = ride.id();
        if self.by_id.contains_key(&id) {
            warn!(ride_id = id, "duplicate ride id");
            return Err(RideError::DuplicateRideId(id));
        }
        let handle = Rc::new(ride);
        self.by_id.insert(id, self.rides.len());
        self.rides.push(Rc::clone(&handle));
        Ok(handle)
    }

    /// Construct and register a ride in one step.
    pub fn create(
        &mut self,
        id: RideId,
        kind: RideKind,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Result<SharedRide> {
        let ride = Ride::new(id, kind, pickup, dropoff, distance_miles)?;
        self.insert(ride)
    }

    pub fn get(&self, id: RideId) -> Option<SharedRide> {
        self.by_id.get(&id).map(|&index| Rc::clone(&self.rides[index]))
    }

    /// Like [`RideRegistry::get`], but a missing id is an error.
    pub fn require(&self, id: RideId) -> Result<SharedRide> {
        self.get(id).ok_or(RideError::UnknownRideId(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedRide> {
        self.rides.iter()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::FareRates;

    #[test]
    fn standard_line_matches_report_format() {
        let ride = Ride::standard(101, "Downtown", "Airport", 12.3).expect("ride");
        assert_eq!(
            ride.to_string(),
            "[Standard] Ride ID: 101 | Pickup: Downtown | Dropoff: Airport | Distance: 12.3 miles | Fare: $24.14"
        );
    }

    #[test]
    fn premium_tag_is_padded() {
        let ride = Ride::premium(102, "Home", "Office", 5.5).expect("ride");
        assert_eq!(
            ride.to_string(),
            "[Premium]  Ride ID: 102 | Pickup: Home | Dropoff: Office | Distance: 5.5 miles | Fare: $27.89"
        );
    }

    #[test]
    fn flat_ride_has_no_tag() {
        let ride = Ride::flat(1, "A", "B", 10.0).expect("ride");
        let line = ride.to_string();
        assert!(line.starts_with("Ride ID: 1 |"), "line: {line}");
        assert!(line.ends_with("Fare: $15.00"), "line: {line}");
    }

    #[test]
    fn fare_is_deterministic() {
        let ride = Ride::premium(104, "Hotel", "Beach", 8.75).expect("ride");
        assert_eq!(ride.compute_fare(), ride.compute_fare());
    }

    #[test]
    fn zero_distance_is_accepted() {
        let ride = Ride::standard(9, "Here", "Here", 0.0).expect("zero distance is valid");
        assert!((ride.compute_fare() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn negative_zero_distance_is_stored_as_zero() {
        let ride = Ride::flat(1, "A", "B", -0.0).expect("negative zero is zero");
        assert!(ride.distance_miles().is_sign_positive());
        assert!(ride.compute_fare().is_sign_positive());
        let line = ride.to_string();
        assert!(line.contains("Distance: 0 miles"), "line: {line}");
        assert!(line.ends_with("Fare: $0.00"), "line: {line}");
    }

    #[test]
    fn accumulated_float_noise_is_not_printed() {
        let ride = Ride::standard(3, "A", "B", 0.1 + 0.2).expect("ride");
        assert!(ride.to_string().contains("Distance: 0.3 miles"));
    }

    #[test]
    fn write_to_emits_one_line() {
        let ride = Ride::standard(101, "Downtown", "Airport", 12.3).expect("ride");
        let mut out = Vec::new();
        ride.write_to(&mut out).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), format!("{ride}\n"));
    }

    #[test]
    fn describe_prints_to_stdout() {
        let ride = Ride::premium(102, "Home", "Office", 5.5).expect("ride");
        ride.describe().expect("describe");
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = Ride::standard(5, "A", "B", -3.0).expect_err("negative distance");
        assert!(matches!(err, RideError::InvalidRideData { id: 5, .. }));
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        assert!(Ride::premium(6, "A", "B", f64::NAN).is_err());
        assert!(Ride::premium(6, "A", "B", f64::INFINITY).is_err());
    }

    #[test]
    fn custom_schedule_changes_fare() {
        let ride = Ride::standard(1, "A", "B", 10.0).expect("ride");
        let schedule = FareSchedule::try_from(FareRates {
            standard_base_fee: 0.0,
            standard_per_mile: 1.0,
            ..Default::default()
        })
        .expect("valid rates");
        assert!((ride.compute_fare_with(&schedule) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn registry_keeps_creation_order_and_shares_handles() {
        let mut registry = RideRegistry::new();
        let first = registry
            .create(2, RideKind::Standard, "A", "B", 1.0)
            .expect("first");
        registry
            .create(1, RideKind::Premium, "C", "D", 2.0)
            .expect("second");

        let ids: Vec<RideId> = registry.iter().map(|ride| ride.id()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(registry.len(), 2);

        let looked_up = registry.get(2).expect("ride 2");
        assert!(Rc::ptr_eq(&first, &looked_up));
        assert!(registry.get(3).is_none());
        assert!(matches!(registry.require(3), Err(RideError::UnknownRideId(3))));
    }

    #[test]
    fn registry_rejects_duplicate_ids() {
        let mut registry = RideRegistry::new();
        registry
            .create(1, RideKind::Standard, "A", "B", 1.0)
            .expect("first");
        let err = registry
            .create(1, RideKind::Premium, "C", "D", 2.0)
            .expect_err("duplicate");
        assert!(matches!(err, RideError::DuplicateRideId(1)));
        assert_eq!(registry.len(), 1);
    }
}
