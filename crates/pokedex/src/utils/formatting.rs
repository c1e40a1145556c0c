//! Formatting utilities for human-readable output.
//!
//! This module provides consistent formatting for names, measurements and
//! name lists across the list, gallery and detail pages.

/// Uppercase the first character, leave the rest untouched.
///
/// # Examples
///
/// ```ignore
/// use pokedex::utils::formatting::capitalize;
///
/// assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
/// assert_eq!(capitalize("mr-mime"), "Mr-mime");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a height in metres, e.g. `"1.7 m"`.
pub fn format_height(metres: f64) -> String {
    format!("{} m", metres)
}

/// Format a weight in kilograms, e.g. `"90.5 kg"`.
pub fn format_weight(kilograms: f64) -> String {
    format!("{} kg", kilograms)
}

/// Join names with `", "` in their original order.
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("Mew"), "Mew");
        assert_eq!(capitalize("nidoran-f"), "Nidoran-f");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_format_measurements() {
        assert_eq!(format_height(0.7), "0.7 m");
        assert_eq!(format_height(2.0), "2 m");
        assert_eq!(format_weight(90.5), "90.5 kg");
        assert_eq!(format_weight(0.1), "0.1 kg");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(["fire", "flying"]), "fire, flying");
        assert_eq!(join_names(["water"]), "water");
        assert_eq!(join_names(Vec::<&str>::new()), "");
    }
}
