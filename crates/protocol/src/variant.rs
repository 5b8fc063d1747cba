//! Closed enumerations with display names.
//!
//! Every status, priority, and category in the catalog is a small closed set
//! that the UI lists in a fixed order (board columns, tab strips, status
//! menus, filter cycles). [`Variant`] captures that shape once so filters and
//! menus can be written generically.

use crate::error::{ProtocolError, Result};

/// A closed enumeration with a fixed display order.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{TaskStatus, Variant};
///
/// assert_eq!(TaskStatus::ALL.len(), 4);
/// assert_eq!(TaskStatus::Review.display_name(), "Review");
/// assert_eq!(TaskStatus::Completed.position(), 3);
/// ```
pub trait Variant: Copy + Eq + 'static {
    /// Human-readable name of the enumeration, used in error messages.
    const KIND: &'static str;

    /// All variants in display order.
    const ALL: &'static [Self];

    /// Returns the label shown to users.
    fn display_name(self) -> &'static str;

    /// Returns the index of this variant in [`Variant::ALL`].
    #[must_use]
    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Returns the variant at `index`, if any.
    #[must_use]
    fn from_position(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Parses a variant from its display name or its snake_case identifier.
///
/// Matching ignores ASCII case, spaces, dashes, and underscores, so
/// `"In Progress"`, `"in_progress"`, and `"in-progress"` all parse.
///
/// # Errors
///
/// Returns [`ProtocolError::UnknownVariant`] if nothing matches.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{OrderStatus, variant::parse_variant};
///
/// let status: OrderStatus = parse_variant("ready to ship").unwrap();
/// assert_eq!(status, OrderStatus::ReadyToShip);
/// assert!(parse_variant::<OrderStatus>("lost").is_err());
/// ```
pub fn parse_variant<T: Variant>(input: &str) -> Result<T> {
    let wanted = normalize(input);
    T::ALL
        .iter()
        .copied()
        .find(|v| normalize(v.display_name()) == wanted)
        .ok_or_else(|| ProtocolError::UnknownVariant {
            kind: T::KIND,
            value: input.to_string(),
        })
}

/// Implements `Display` (via [`Variant::display_name`]) and `FromStr` (via
/// [`parse_variant`]) for one or more [`Variant`] types.
macro_rules! impl_display_and_from_str {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::variant::Variant::display_name(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ProtocolError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                $crate::variant::parse_variant(s)
            }
        }
    )+};
}

pub(crate) use impl_display_and_from_str;

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
