//! Departure filtering, sorting and partitioning.
//!
//! Pure functions the serving layer applies in a fixed order: filter by
//! transport mode, filter by direction, sort, then partition into the
//! two platform directions. Nothing here touches the network or mutates
//! shared state.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use super::types::{Departure, TransportMode};

/// What to sort departures by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Parsed `expected` timestamp.
    #[default]
    Time,
    /// Line designation, natural order ("9" before "10").
    Line,
    /// Raw transport-mode string, lexical.
    Transport,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Error from parsing a sort option token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option: {0}")]
pub struct InvalidSortOption(pub String);

/// Error from parsing a sort order token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct InvalidSortOrder(pub String);

impl SortOption {
    /// Parse a sort option token, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, InvalidSortOption> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Ok(SortOption::Time),
            "line" => Ok(SortOption::Line),
            "transport" => Ok(SortOption::Transport),
            _ => Err(InvalidSortOption(s.to_string())),
        }
    }
}

impl SortOrder {
    /// Parse a sort order token, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, InvalidSortOrder> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(InvalidSortOrder(s.to_string())),
        }
    }

    fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Active sort selection: what to sort by, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub option: SortOption,
    pub direction: SortOrder,
}

impl SortConfig {
    /// Apply a sort-header selection: re-selecting the active option
    /// flips the direction, selecting a new option starts it ascending.
    pub fn toggle(self, option: SortOption) -> Self {
        if self.option == option {
            Self {
                option,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                option,
                direction: SortOrder::Asc,
            }
        }
    }
}

/// The filtered, sorted departures split into the two platform
/// directions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectionDepartures {
    /// Departures with `direction_code == 1`.
    pub direction1: Vec<Departure>,

    /// Departures with `direction_code == 2`.
    pub direction2: Vec<Departure>,
}

/// Departures sharing a transport mode, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeGroup {
    /// Uppercased transport-mode token.
    pub mode: String,

    pub departures: Vec<Departure>,
}

/// Keep departures of one transport mode (case-insensitive exact match
/// on the feed token). `None` keeps everything.
pub fn filter_by_transport_mode(
    departures: Vec<Departure>,
    mode: Option<TransportMode>,
) -> Vec<Departure> {
    let Some(mode) = mode else {
        return departures;
    };

    departures
        .into_iter()
        .filter(|d| d.line.transport_mode.eq_ignore_ascii_case(mode.as_str()))
        .collect()
}

/// Keep departures whose direction label or destination contains the
/// needle (case-sensitive substring). `None` keeps everything.
pub fn filter_by_direction(departures: Vec<Departure>, needle: Option<&str>) -> Vec<Departure> {
    let Some(needle) = needle else {
        return departures;
    };

    departures
        .into_iter()
        .filter(|d| d.direction.contains(needle) || d.destination.contains(needle))
        .collect()
}

/// Sort departures by the active selection. The sort is stable, so equal
/// keys keep the feed order.
///
/// For time sorting, departures whose `expected` timestamp does not
/// parse go last regardless of direction.
pub fn sort_departures(mut departures: Vec<Departure>, config: SortConfig) -> Vec<Departure> {
    match config.option {
        SortOption::Time => {
            departures.sort_by(|a, b| match (a.expected_time(), b.expected_time()) {
                (Some(ta), Some(tb)) => config.direction.apply(ta.cmp(&tb)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SortOption::Line => {
            departures.sort_by(|a, b| {
                config
                    .direction
                    .apply(natural_cmp(&a.line.designation, &b.line.designation))
            });
        }
        SortOption::Transport => {
            departures.sort_by(|a, b| {
                config
                    .direction
                    .apply(a.line.transport_mode.cmp(&b.line.transport_mode))
            });
        }
    }

    departures
}

/// Split departures into the two platform directions. Entries whose
/// `direction_code` is neither 1 nor 2 are dropped, so the board never
/// shows a third column.
pub fn partition_by_direction(departures: Vec<Departure>) -> DirectionDepartures {
    let mut partitioned = DirectionDepartures::default();

    for departure in departures {
        match departure.direction_code {
            1 => partitioned.direction1.push(departure),
            2 => partitioned.direction2.push(departure),
            _ => {}
        }
    }

    partitioned
}

/// Group departures by case-normalized transport mode, groups ordered by
/// first appearance. Every departure lands in exactly one group.
pub fn group_by_transport_mode(departures: Vec<Departure>) -> Vec<ModeGroup> {
    let mut groups: Vec<ModeGroup> = Vec::new();

    for departure in departures {
        let mode = departure.line.transport_mode.to_uppercase();
        match groups.iter_mut().find(|g| g.mode == mode) {
            Some(group) => group.departures.push(departure),
            None => groups.push(ModeGroup {
                mode,
                departures: vec![departure],
            }),
        }
    }

    groups
}

/// Natural string comparison: consecutive digit runs compare as numbers,
/// everything else by character, so "9" < "10" and "17" < "17A".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let na = take_number(&mut a);
                    let nb = take_number(&mut b);
                    match na.cmp(&nb) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                } else {
                    match x.cmp(&y) {
                        Ordering::Equal => {
                            a.next();
                            b.next();
                        }
                        ord => return ord,
                    }
                }
            }
        }
    }
}

/// Consume a run of ASCII digits, returning its numeric value.
fn take_number(chars: &mut Peekable<Chars<'_>>) -> u64 {
    let mut n = 0u64;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = n.saturating_mul(10).saturating_add(u64::from(d));
        chars.next();
    }
    n
}
