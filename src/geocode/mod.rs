mod client;
mod types;

pub use client::{Geocoder, NominatimClient};
pub use types::{Coordinates, ReverseGeocodeResponse};

#[cfg(test)]
pub use client::MockGeocoder;
