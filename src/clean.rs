use regex::Regex;

/// Clean transcript text for summarization.
///
/// Strips bracketed/parenthesized/braced annotations and a fixed set of
/// filler words, then collapses whitespace runs to single spaces and trims,
/// repeating until the text stops changing. Pure and idempotent; empty input
/// yields empty output.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Annotations like [Music], (laughs), {inaudible}. Lazy matches, so
    // unbalanced delimiters are left alone.
    let annotations = Regex::new(r"\[.*?\]|\(.*?\)|\{.*?\}").unwrap();
    // Whole-word fillers; multi-word fillers tolerate any whitespace run
    // between their words (caption segments break lines mid-phrase).
    let fillers =
        Regex::new(r"(?i)\b(uh|um|ah|like|you\s+know|actually|basically|literally|I\s+mean)\b")
            .unwrap();
    let whitespace = Regex::new(r"\s+").unwrap();

    // One deletion can expose another match: "you like know" leaves
    // "you know", and collapsing "[ \n ]" leaves "[ ]", which the annotation
    // pattern only sees once it sits on a single line. Repeat the whole
    // sequence until the text stops changing.
    let mut text = text.to_string();
    loop {
        let pass = {
            let stripped = annotations.replace_all(&text, "");
            let stripped = fillers.replace_all(&stripped, "");
            whitespace.replace_all(&stripped, " ").trim().to_string()
        };
        if pass == text {
            break;
        }
        text = pass;
    }
    text
}
