//! Terminal rendering of release notes
//!
//! Release bodies are GitHub-flavored markdown. Only the parts that read
//! badly as raw text are touched: headings, list bullets and bare links.

use std::ops::Range;

use console::Style;

const BULLET: &str = "•";

/// Render a release body for the terminal
pub fn render(markdown: &str) -> String {
    let heading = Style::new().bold();
    let mut out = Vec::new();
    let mut in_code = false;

    for raw in markdown.lines() {
        let line = raw.trim_end();

        if line.trim_start().starts_with("```") {
            in_code = !in_code;
            continue;
        }
        if in_code {
            out.push(format!("    {}", Style::new().dim().apply_to(line)));
            continue;
        }

        if let Some(text) = heading_text(line) {
            out.push(heading.apply_to(highlight_links(text)).to_string());
        } else if let Some((indent, text)) = bullet_item(line) {
            out.push(format!("{}{BULLET} {}", "  ".repeat(indent + 1), highlight_links(text)));
        } else {
            out.push(highlight_links(line));
        }
    }

    // drop trailing blank lines but keep paragraph breaks
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }
    out.join("\n")
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ').map(|text| text.trim_end_matches('#').trim())
}

/// Nesting level and text of a list item
fn bullet_item(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let indent = (line.len() - trimmed.len()) / 2;
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some('*' | '-' | '+'), Some(' ')) => Some((indent, trimmed[2..].trim_start())),
        _ => None,
    }
}

fn highlight_links(line: &str) -> String {
    let link = Style::new().cyan().underlined();
    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    for range in find_links(line) {
        out.push_str(&line[last..range.start]);
        out.push_str(&link.apply_to(&line[range.clone()]).to_string());
        last = range.end;
    }
    out.push_str(&line[last..]);
    out
}

/// Byte ranges of bare `http(s)://` and `www.` links
///
/// Trailing punctuation belongs to the sentence, not the link. A closing
/// parenthesis is kept only when the link opened one.
pub fn find_links(line: &str) -> Vec<Range<usize>> {
    let mut links = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let Some(start) = next_link_start(line, pos) else {
            break;
        };
        let end = line[start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '`'))
            .map_or(line.len(), |offset| start + offset);
        let end = trim_trailing(&line[start..end]) + start;

        if end > start {
            links.push(start..end);
        }
        pos = end.max(start + 1);
    }

    links
}

fn next_link_start(line: &str, from: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    for prefix in ["https://", "http://", "www."] {
        let mut search = from;
        while let Some(offset) = line[search..].find(prefix) {
            let start = search + offset;
            let preceded_by_word = line[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '/' || c == '.');
            if !preceded_by_word {
                best = Some(best.map_or(start, |b| b.min(start)));
                break;
            }
            search = start + prefix.len();
        }
    }
    best
}

/// Length of `candidate` without sentence punctuation at its end
fn trim_trailing(candidate: &str) -> usize {
    let mut end = candidate.len();
    loop {
        let Some(c) = candidate[..end].chars().next_back() else {
            return 0;
        };
        let strip = match c {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '*' | '_' | ']' => true,
            ')' => {
                let body = &candidate[..end];
                body.matches('(').count() < body.matches(')').count()
            }
            _ => false,
        };
        if !strip {
            return end;
        }
        end -= c.len_utf8();
    }
}
