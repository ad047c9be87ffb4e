//! Flight search filtering.
//!
//! Case-insensitive substring match on the flight number and the codeshare
//! number. The date picker is a pass-through for the single selected
//! operational day.

use rapron::Flight;

/// Whether a flight matches the search query. An empty query matches all.
pub fn flight_matches(flight: &Flight, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    if flight.flight_no.to_lowercase().contains(&needle) {
        return true;
    }
    flight
        .codeshare
        .as_deref()
        .map(|cs| cs.to_lowercase().contains(&needle))
        .unwrap_or(false)
}

/// Applies the query to a flight list, preserving order.
pub fn filter_flights<'a>(flights: &'a [Flight], query: &str) -> Vec<&'a Flight> {
    flights.iter().filter(|f| flight_matches(f, query)).collect()
}
