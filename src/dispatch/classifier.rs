const DIRECTION_KEYWORDS: [&str; 2] = ["direction", "to haloocom"];

/// Keyword match for messages asking the way to the office.
pub fn is_directions_request(message: &str) -> bool {
    let lowered = message.to_lowercase();
    DIRECTION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
