use regex::Regex;

/// One styled run of text inside a detail-note line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSpan {
    Text(String),
    Bold(String),
}

/// One display line of a detail note. `bullet` lines were written with a
/// leading "- " and render with a bullet mark instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLine {
    pub bullet: bool,
    pub spans: Vec<NoteSpan>,
}

impl NoteLine {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

const ESCAPES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

/// Escape user input the way the API expects detail text to be stored.
pub fn escape_detail(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match ESCAPES.iter().find(|(from, _)| *from == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Reverse of `escape_detail`. `&amp;` is decoded last so stored text like
/// `&amp;lt;` comes back as the literal `&lt;` the user typed.
pub fn unescape_detail(escaped: &str) -> String {
    let mut out = escaped.to_string();
    for (c, entity) in ESCAPES.iter().rev() {
        out = out.replace(entity, &c.to_string());
    }
    out
}

/// Parse stored detail text into display lines: entities are decoded,
/// "- " prefixes become bullets, and `**bold**` runs are split out.
pub fn parse_detail(stored: &str) -> Vec<NoteLine> {
    let text = unescape_detail(stored);
    let bold = Regex::new(r"\*\*(.*?)\*\*").unwrap();

    text.split('\n')
        .map(|line| {
            let (bullet, rest) = match line.strip_prefix("- ") {
                Some(rest) => (true, rest),
                None => (false, line),
            };

            let mut spans = Vec::new();
            let mut last = 0;
            for caps in bold.captures_iter(rest) {
                let m = caps.get(0).unwrap();
                if m.start() > last {
                    spans.push(NoteSpan::Text(rest[last..m.start()].to_string()));
                }
                let inner = caps.get(1).unwrap().as_str();
                if !inner.is_empty() {
                    spans.push(NoteSpan::Bold(inner.to_string()));
                }
                last = m.end();
            }
            if last < rest.len() {
                spans.push(NoteSpan::Text(rest[last..].to_string()));
            }

            NoteLine { bullet, spans }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_runs_are_split_out() {
        let lines = parse_detail("a **b** c");
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].spans,
            vec![
                NoteSpan::Text("a ".to_string()),
                NoteSpan::Bold("b".to_string()),
                NoteSpan::Text(" c".to_string()),
            ]
        );
    }

    #[test]
    fn dash_prefix_becomes_bullet() {
        let lines = parse_detail("- first\nplain\n- second");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].bullet);
        assert!(!lines[1].bullet);
        assert!(lines[2].bullet);
        assert_eq!(lines[2].spans, vec![NoteSpan::Text("second".to_string())]);
    }

    #[test]
    fn blank_lines_are_preserved() {
        let lines = parse_detail("one\n\ntwo");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn escape_round_trips() {
        let raw = "a < b & \"c\" > 'd'";
        assert_eq!(unescape_detail(&escape_detail(raw)), raw);
        assert_eq!(escape_detail("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn stored_entities_are_decoded_for_display() {
        let lines = parse_detail("x &amp; y");
        assert_eq!(lines[0].spans, vec![NoteSpan::Text("x & y".to_string())]);
    }
}
