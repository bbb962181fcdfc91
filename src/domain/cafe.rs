//! The cafe record and the coercion rules for its amenity flags.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `cafes` table.
///
/// `id` is assigned by the store and never reused. Every field except
/// `coffee_price` is immutable after creation; `coffee_price` changes only
/// through the dedicated price-update route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Cafe {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Free-form capacity descriptor, e.g. "10-20".
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Free-form currency text, e.g. "£2.50".
    pub coffee_price: Option<String>,
}

/// Payload for creating a cafe; the store assigns the `id`.
#[derive(Debug, Clone)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Checkbox coercion for the amenity fields of the add form.
///
/// Presence of the key decides the value, not its content: a submitted field
/// is `true` whatever string it carries (even the literal `"false"`), and an
/// absent field is `false`. This is how HTML checkboxes post.
pub fn checkbox_set(value: Option<&str>) -> bool {
    value.is_some()
}

#[cfg(test)]
mod tests {
    use super::checkbox_set;

    #[test]
    fn present_key_is_true_regardless_of_value() {
        assert!(checkbox_set(Some("1")));
        assert!(checkbox_set(Some("on")));
        assert!(checkbox_set(Some("false")));
        assert!(checkbox_set(Some("")));
    }

    #[test]
    fn absent_key_is_false() {
        assert!(!checkbox_set(None));
    }
}
