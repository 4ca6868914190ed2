/// Position identifiers have the shape `ICAO_TYPE`: four uppercase letters,
/// an underscore, then a two or three letter facility type.
pub fn normalize_position(text: &str) -> Option<String> {
    let cleaned = text.trim().to_ascii_uppercase();
    let (icao, kind) = cleaned.split_once('_')?;
    let well_formed = icao.len() == 4
        && (2..=3).contains(&kind.len())
        && icao.chars().all(|c| c.is_ascii_uppercase())
        && kind.chars().all(|c| c.is_ascii_uppercase());
    well_formed.then_some(cleaned)
}

pub fn is_valid_position(text: &str) -> bool {
    normalize_position(text).is_some()
}

/// VIDs are 6-digit numbers in [100000, 999999].
pub fn is_valid_vid(vid: &str) -> bool {
    let cleaned = vid.trim();
    cleaned.len() == 6
        && cleaned.chars().all(|c| c.is_ascii_digit())
        && cleaned
            .parse::<u32>()
            .is_ok_and(|n| (100_000..=999_999).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_positions() {
        assert!(is_valid_position("SBGR_APP"));
        assert!(is_valid_position("SBBR_TWR"));
        assert!(is_valid_position("KJFK_GND"));
        assert!(is_valid_position("EGLL_CTR"));
        // two-letter facility type
        assert!(is_valid_position("SBCT_FS"));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_position("  sbgr_app "), Some("SBGR_APP".into()));
    }

    #[test]
    fn rejects_malformed_positions() {
        assert!(!is_valid_position(""));
        assert!(!is_valid_position("SBGR"));
        assert!(!is_valid_position("SBGRAPP"));
        assert!(!is_valid_position("SBG_APP"));
        assert!(!is_valid_position("SBGRX_APP"));
        assert!(!is_valid_position("SBGR_A"));
        assert!(!is_valid_position("SBGR_APPR"));
        assert!(!is_valid_position("SB1R_APP"));
        assert!(!is_valid_position("SBGR_AP1"));
        assert!(!is_valid_position("SBGR_APP_X"));
        assert!(!is_valid_position("SBGR_"));
        assert!(!is_valid_position("_APP"));
    }

    #[test]
    fn accepts_six_digit_vids_in_range() {
        assert!(is_valid_vid("100000"));
        assert!(is_valid_vid("485573"));
        assert!(is_valid_vid("999999"));
        assert!(is_valid_vid(" 123456 "));
    }

    #[test]
    fn rejects_out_of_shape_vids() {
        assert!(!is_valid_vid(""));
        assert!(!is_valid_vid("12345"));
        assert!(!is_valid_vid("1234567"));
        assert!(!is_valid_vid("099999"));
        assert!(!is_valid_vid("12a456"));
        assert!(!is_valid_vid("-12345"));
    }
}
