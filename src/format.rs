//! Text rendering of listings and search results.

use crate::decl::{Declaration, EntityAggregate};
use crate::search::{Category, Score};
use std::fmt::Write as _;

const RULE: &str = "==================================";
const MATCHES_HEADER: &str = "======== Best matches ========";

/// Every declaration of every category, one banner per category.
pub fn listing(aggregate: &EntityAggregate) -> String {
    let mut output = String::new();
    for category in Category::ALL {
        let lines: Vec<String> = match category {
            Category::Functions => located(aggregate.functions()),
            Category::Typedefs => located(aggregate.typedefs()),
            Category::Structs => located(aggregate.structs()),
            Category::Classes => located(aggregate.classes()),
        };
        section(&mut output, category.header(), &lines);
    }
    output
}

fn located<D: Declaration>(declarations: &[D]) -> Vec<String> {
    declarations
        .iter()
        .map(Declaration::full_display_form)
        .collect()
}

fn section(output: &mut String, header: &str, lines: &[String]) {
    let _ = writeln!(output, "{}", RULE);
    let _ = writeln!(output, "              {}           ", header);
    let _ = writeln!(output, "{}", RULE);
    for line in lines {
        let _ = writeln!(output, "{}", line);
    }
    output.push('\n');
}

/// Ranked results under the "Best matches" banner.
pub fn matches(scores: &[Score], show_scores: bool) -> String {
    let mut output = format!("{}\n", MATCHES_HEADER);
    for entry in scores {
        output.push_str(&single(entry, show_scores));
    }
    output
}

/// One result line.
pub fn single(entry: &Score, show_scores: bool) -> String {
    if show_scores {
        format!("{}  [{}]\n", entry.id, entry.score)
    } else {
        format!("{}\n", entry.id)
    }
}
