pub mod model;

pub use model::{PrayerEntry, PrayerGoal};
