pub mod fake_pdns;
pub mod fixtures;

pub use fake_pdns::FakePowerDns;
pub use fixtures::{record_json, zone_json, API_KEY};
