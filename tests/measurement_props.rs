//! Property tests for generated measurements.
//!
//! To run these tests:
//! ```bash
//! cargo test --test measurement_props
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use pattern_demos::observer::measurement::{HUMIDITY_RANGE, PRESSURE_RANGE, TEMPERATURE_RANGE};
use pattern_demos::observer::{Observer, WeatherData};
use proptest::prelude::*;

#[derive(Default)]
struct Collector(Vec<(f64, f64, f64)>);

impl Observer for Collector {
    fn update(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.0.push((temperature, humidity, pressure));
    }
}

proptest! {
    #[test]
    fn generated_values_stay_in_range(seed in any::<u64>(), cycles in 1usize..20) {
        let mut weather_data = WeatherData::with_seed(seed);
        let collector = Rc::new(RefCell::new(Collector::default()));
        weather_data.register_observer(collector.clone());

        for _ in 0..cycles {
            weather_data.measurements_changed();
        }

        let seen = collector.borrow();
        prop_assert_eq!(seen.0.len(), cycles);
        for &(temperature, humidity, pressure) in &seen.0 {
            prop_assert!(TEMPERATURE_RANGE.contains(&temperature));
            prop_assert!(HUMIDITY_RANGE.contains(&humidity));
            prop_assert!(PRESSURE_RANGE.contains(&pressure));
        }
    }

    #[test]
    fn each_observer_notified_once_per_cycle(observers in 1usize..8, cycles in 0usize..10) {
        let mut weather_data = WeatherData::with_seed(0);
        let collectors: Vec<_> = (0..observers)
            .map(|_| Rc::new(RefCell::new(Collector::default())))
            .collect();
        for collector in &collectors {
            weather_data.register_observer(collector.clone());
        }

        for _ in 0..cycles {
            weather_data.measurements_changed();
        }

        for collector in &collectors {
            prop_assert_eq!(collector.borrow().0.len(), cycles);
        }
    }
}
