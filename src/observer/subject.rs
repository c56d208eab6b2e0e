//! The observable weather data subject.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use super::{Measurement, Observer, ObserverHandle};

/// Holds the latest [`Measurement`] and pushes it to registered observers.
///
/// Observers are held as [`Weak`] handles in registration order. Duplicates
/// are allowed and each entry is notified separately. The random source is
/// injected so that generated readings are reproducible in tests.
pub struct WeatherData<R = StdRng> {
    observers: Vec<Weak<RefCell<dyn Observer>>>,
    measurement: Measurement,
    rng: R,
}

impl WeatherData<StdRng> {
    /// Creates a subject with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a subject whose readings are reproducible for `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for WeatherData<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WeatherData<R> {
    /// Creates a subject drawing readings from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            observers: Vec::new(),
            measurement: Measurement::default(),
            rng,
        }
    }

    /// Appends `observer` to the notification list.
    ///
    /// Only a weak handle is kept; the caller remains the owner.
    pub fn register_observer(&mut self, observer: ObserverHandle) {
        self.observers.push(Rc::downgrade(&observer));
        debug!(observers = self.observers.len(), "registered observer");
    }

    /// Removes the first registration of `observer`, matched by identity.
    ///
    /// Does nothing if `observer` is not registered.
    pub fn remove_observer<O: Observer + ?Sized>(&mut self, observer: &Rc<RefCell<O>>) {
        let target = Rc::as_ptr(observer).cast::<()>();
        if let Some(index) = self
            .observers
            .iter()
            .position(|weak| weak.as_ptr().cast::<()>() == target)
        {
            self.observers.remove(index);
            debug!(index, observers = self.observers.len(), "removed observer");
        } else {
            trace!("remove_observer: observer not registered");
        }
    }

    /// Pushes the current measurement to every live observer in order.
    ///
    /// Handles whose observer has been dropped are pruned. An observer that is
    /// already borrowed (a notification triggered from inside its own update)
    /// is skipped for this round.
    pub fn notify_observers(&mut self) {
        let Measurement {
            temperature,
            humidity,
            pressure,
        } = self.measurement;

        let before = self.observers.len();
        self.observers.retain(|weak| {
            let Some(observer) = weak.upgrade() else {
                return false;
            };
            match observer.try_borrow_mut() {
                Ok(mut observer) => observer.update(temperature, humidity, pressure),
                Err(_) => warn!("observer is already borrowed, skipping notification"),
            }
            true
        });

        let pruned = before - self.observers.len();
        if pruned > 0 {
            debug!(pruned, "pruned dropped observers");
        }
    }

    /// Generates a fresh random measurement and notifies observers.
    pub fn measurements_changed(&mut self) {
        self.measurement = Measurement::random(&mut self.rng);
        trace!(measurement = ?self.measurement, "measurements changed");
        self.notify_observers();
    }

    /// Stores an externally supplied measurement and notifies observers.
    pub fn set_measurements(&mut self, measurement: Measurement) {
        self.measurement = measurement;
        self.notify_observers();
    }

    /// Returns the most recent measurement.
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Number of registrations, including any not yet pruned.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
