//! SL Transport integration.
//!
//! The departures feed for one site, plus the pure filter/sort/partition
//! pipeline the board applies to it. Key characteristics:
//! - the feed shape IS the domain shape; fields pass through verbatim
//! - `direction_code` is binary (1 or 2), one per platform direction
//! - departures are fetched fresh per request, never cached

mod client;
mod pipeline;
mod types;

pub use client::{TransitClient, TransitConfig};
pub use pipeline::{
    DirectionDepartures, InvalidSortOption, InvalidSortOrder, ModeGroup, SortConfig, SortOption,
    SortOrder, filter_by_direction, filter_by_transport_mode, group_by_transport_mode,
    partition_by_direction, sort_departures,
};
pub use types::{
    Departure, DeparturesResponse, Deviation, InvalidTransportMode, Journey, Line, StopArea,
    StopPoint, TransportMode,
};
