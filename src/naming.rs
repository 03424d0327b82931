//! Centralized filename conversions.
//!
//! Meet CSVs use underscores where their display titles have spaces
//! (`Rock_Creek_Invite.csv` → "Rock Creek Invite"), and runner profile
//! photos invert the convention (`Jane Doe` → `Jane_Doe.jpg`). Both
//! directions live here so the scanner and the renderer agree on them.

/// Display title for a meet, from its CSV file stem.
///
/// - `"Rock_Creek_Invite"` → `"Rock Creek Invite"`
/// - `"Sectionals"` → `"Sectionals"` (no underscores)
pub fn meet_title(stem: &str) -> String {
    stem.replace('_', " ")
}

/// Profile photo filename for a runner name.
///
/// - `"Jane Doe"` → `"Jane_Doe.jpg"`
/// - `"Mary Ann Lee"` → `"Mary_Ann_Lee.jpg"`
pub fn profile_image(name: &str) -> String {
    format!("{}.jpg", name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_replaces_underscores() {
        assert_eq!(meet_title("Rock_Creek_Invite"), "Rock Creek Invite");
    }

    #[test]
    fn title_without_underscores_unchanged() {
        assert_eq!(meet_title("Sectionals"), "Sectionals");
    }

    #[test]
    fn title_consecutive_underscores() {
        assert_eq!(meet_title("City__Championships"), "City  Championships");
    }

    #[test]
    fn profile_image_single_space() {
        assert_eq!(profile_image("Jane Doe"), "Jane_Doe.jpg");
    }

    #[test]
    fn profile_image_multi_word_name() {
        assert_eq!(profile_image("Mary Ann Lee"), "Mary_Ann_Lee.jpg");
    }

    #[test]
    fn profile_image_single_word_name() {
        assert_eq!(profile_image("Cher"), "Cher.jpg");
    }
}
