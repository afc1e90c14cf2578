//! US-state abbreviation vocabulary.

/// Two-letter abbreviations of the 50 US states.
const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS",
    "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK",
    "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

/// Case-insensitive membership test against the US-state vocabulary.
pub fn is_us_state(code: &str) -> bool {
    code.len() == 2 && US_STATES.iter().any(|state| state.eq_ignore_ascii_case(code))
}
