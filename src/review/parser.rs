use crate::review::FeedbackItem;

/// Which reply section the scanner is currently accumulating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    PositiveRephrasing,
    Why,
    Suggestion,
    ResourceLinks,
}

/// Recognized heading markers, checked in order; the first substring match
/// on a line wins. Matching is case-sensitive containment, not exact line
/// equality, to tolerate formatting drift around the heading text.
const MARKERS: [(&str, Section); 4] = [
    ("Positive Rephrasing", Section::PositiveRephrasing),
    ("The 'Why'", Section::Why),
    ("Suggested Improvement", Section::Suggestion),
    ("Resource Links", Section::ResourceLinks),
];

/// Extracts the four feedback fields from a raw generated reply.
///
/// Scans line by line, switching sections whenever a line contains one of
/// the recognized markers and buffering everything else into the open
/// section. Headings may be missing, reordered, or repeated; absent
/// sections stay empty and a repeated heading overwrites the earlier
/// segment. Never fails; worst case every field stays empty.
pub fn parse_response(raw_text: &str) -> FeedbackItem {
    let mut item = FeedbackItem::default();
    let mut current = Section::None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in raw_text.lines() {
        if let Some(next) = match_marker(line) {
            flush(current, &buffer, &mut item);
            current = next;
            buffer.clear();
        } else if current != Section::None {
            buffer.push(line);
        }
    }
    flush(current, &buffer, &mut item);

    item
}

fn match_marker(line: &str) -> Option<Section> {
    MARKERS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|&(_, section)| section)
}

/// Moves the buffered lines into the field for `section`. A flush with an
/// empty buffer leaves the field's previous value in place, so a repeated
/// heading with no content between it and the next heading does not clear
/// what an earlier segment wrote.
fn flush(section: Section, buffer: &[&str], item: &mut FeedbackItem) {
    if buffer.is_empty() {
        return;
    }
    match section {
        Section::None => {}
        Section::PositiveRephrasing => item.positive_rephrasing = joined(buffer),
        Section::Why => item.why = joined(buffer),
        Section::Suggestion => item.suggestion = joined(buffer),
        Section::ResourceLinks => {
            item.resource_links = buffer
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
        }
    }
}

fn joined(buffer: &[&str]) -> String {
    buffer.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverse-renders an item with the same headings the parser recognizes,
    /// for the idempotence check.
    fn render_sections(item: &FeedbackItem) -> String {
        format!(
            "Positive Rephrasing\n{}\nThe 'Why'\n{}\nSuggested Improvement\n{}\nResource Links\n{}\n",
            item.positive_rephrasing,
            item.why,
            item.suggestion,
            item.resource_links.join("\n"),
        )
    }

    #[test]
    fn empty_input_yields_empty_item() {
        let item = parse_response("");
        assert_eq!(item, FeedbackItem::default());
    }

    #[test]
    fn extracts_all_four_sections() {
        let reply = "\
* **Positive Rephrasing:**
Nice start on the loop structure!
* **The 'Why':**
List comprehensions avoid repeated appends.
* **Suggested Improvement:**
result = [x * 2 for x in items]
* **Resource Links:**
https://docs.python.org/3/tutorial/datastructures.html
https://peps.python.org/pep-0008/
";
        let item = parse_response(reply);
        assert_eq!(item.positive_rephrasing, "Nice start on the loop structure!");
        assert_eq!(item.why, "List comprehensions avoid repeated appends.");
        assert_eq!(item.suggestion, "result = [x * 2 for x in items]");
        assert_eq!(
            item.resource_links,
            vec![
                "https://docs.python.org/3/tutorial/datastructures.html",
                "https://peps.python.org/pep-0008/",
            ]
        );
    }

    #[test]
    fn heading_match_is_substring_containment() {
        let reply = "### 1. Positive Rephrasing (rewritten)\ngood effort\n";
        let item = parse_response(reply);
        assert_eq!(item.positive_rephrasing, "good effort");
    }

    #[test]
    fn reversed_heading_order_still_attributes_correctly() {
        let reply = "\
Resource Links
https://example.com/guide
Suggested Improvement
let x = 1;
The 'Why'
Because clarity matters.
Positive Rephrasing
Great naming already!
";
        let item = parse_response(reply);
        assert_eq!(item.resource_links, vec!["https://example.com/guide"]);
        assert_eq!(item.suggestion, "let x = 1;");
        assert_eq!(item.why, "Because clarity matters.");
        assert_eq!(item.positive_rephrasing, "Great naming already!");
    }

    #[test]
    fn lines_before_any_heading_are_discarded() {
        let reply = "Here is my review:\nsome preamble\nThe 'Why'\nreasons\n";
        let item = parse_response(reply);
        assert_eq!(item.why, "reasons");
        assert_eq!(item.positive_rephrasing, "");
    }

    #[test]
    fn repeated_heading_overwrites_with_later_segment() {
        let reply = "\
The 'Why'
first explanation
The 'Why'
second explanation
";
        let item = parse_response(reply);
        assert_eq!(item.why, "second explanation");
    }

    #[test]
    fn repeated_heading_without_content_keeps_earlier_segment() {
        let reply = "Positive Rephrasing\nkept text\nPositive Rephrasing\n";
        let item = parse_response(reply);
        assert_eq!(item.positive_rephrasing, "kept text");
    }

    #[test]
    fn resource_links_drop_blank_lines_and_trim() {
        let reply = "Resource Links\n\n  https://a.example  \n\nhttps://b.example\n";
        let item = parse_response(reply);
        assert_eq!(item.resource_links, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn missing_sections_stay_empty() {
        let reply = "Suggested Improvement\nfn fixed() {}\n";
        let item = parse_response(reply);
        assert_eq!(item.suggestion, "fn fixed() {}");
        assert_eq!(item.positive_rephrasing, "");
        assert_eq!(item.why, "");
        assert!(item.resource_links.is_empty());
    }

    #[test]
    fn reparse_of_reverse_render_is_idempotent() {
        let original = FeedbackItem {
            positive_rephrasing: "Solid foundation here!".to_string(),
            why: "Allocating once is cheaper.\nIt also reads better.".to_string(),
            suggestion: "let mut out = Vec::with_capacity(n);".to_string(),
            resource_links: vec![
                "https://doc.rust-lang.org/std/vec/struct.Vec.html".to_string(),
            ],
        };
        let reparsed = parse_response(&render_sections(&original));
        assert_eq!(reparsed, original);
    }
}
