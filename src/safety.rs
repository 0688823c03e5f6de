/// Phrases that trigger the local safety layer. Matching any of these
/// short-circuits the exchange before the backend is contacted.
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "self harm",
    "self-harm",
    "harm myself",
    "want to die",
    "die",
    "end it all",
];

/// Case-insensitive substring check against the crisis keyword list.
pub fn contains_crisis_language(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Fixed response shown when the local filter matches. No normal
/// conversation happens once this is triggered.
pub fn crisis_response() -> &'static str {
    "It sounds like you might be going through something very serious and painful right now. \
     I am not a crisis service or a substitute for professional care. \
     If you are in immediate danger or thinking about harming yourself, please contact your local emergency number right away. \
     You can also reach out to a trusted person in your life or a licensed mental health professional as soon as possible. \
     If available in your country, you may also contact a suicide prevention or mental health crisis hotline."
}

/// Shown after a backend reply that carries the crisis flag.
pub fn emergency_resources() -> &'static str {
    "If you are in immediate danger, please contact your local emergency number or a crisis helpline right now."
}

/// Shown when the backend is unreachable or returns something unusable.
pub fn backend_unavailable() -> &'static str {
    "Sorry, something went wrong while connecting to the server. Make sure the backend is running!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_crisis_keyword() {
        assert!(contains_crisis_language("I want to kill myself"));
        assert!(contains_crisis_language("thinking about suicide lately"));
        assert!(contains_crisis_language("I keep wanting to end it all"));
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert!(contains_crisis_language("KILL MYSELF"));
        assert!(contains_crisis_language("Suicide"));
        assert!(contains_crisis_language("Self-Harm"));
    }

    #[test]
    fn test_matches_inside_longer_text() {
        assert!(contains_crisis_language(
            "honestly some days I just want to die and I don't know why"
        ));
    }

    #[test]
    fn test_ordinary_messages_pass() {
        assert!(!contains_crisis_language("I had a rough day at work"));
        assert!(!contains_crisis_language("feeling a bit anxious about exams"));
        assert!(!contains_crisis_language(""));
    }
}
