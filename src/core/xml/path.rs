//! Relative location paths over a [`Document`](super::Document).
//!
//! Supported syntax, all relative to the context element:
//!
//! - `A/B` child steps, `*` matches any name
//! - `A//B` descendant step, `.` self (ignored)
//! - `A[@Name='value']` or `A[@Name]` attribute predicates
//!
//! Names are local names; the namespace comes from the element the query is
//! evaluated on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Predicate<'p> {
    pub(crate) attribute: &'p str,
    pub(crate) value: Option<&'p str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step<'p> {
    pub(crate) axis: Axis,
    pub(crate) name: &'p str,
    pub(crate) predicate: Option<Predicate<'p>>,
}

impl Step<'_> {
    pub(crate) fn matches_name(&self, name: &str) -> bool {
        self.name == "*" || self.name == name
    }
}

pub(crate) fn parse(path: &str) -> Vec<Step<'_>> {
    let mut steps = Vec::new();
    let mut axis = Axis::Child;
    for (index, segment) in split_segments(path).into_iter().enumerate() {
        match segment {
            // a leading '/' is treated like "./"
            "" if index == 0 => {}
            "" => axis = Axis::Descendant,
            "." => {}
            segment => {
                let (name, predicate) = parse_segment(segment);
                steps.push(Step {
                    axis,
                    name,
                    predicate,
                });
                axis = Axis::Child;
            }
        }
    }
    steps
}

/// Split on '/' outside of `[...]`
fn split_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                segments.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }
    segments
}

fn parse_segment(segment: &str) -> (&str, Option<Predicate<'_>>) {
    let Some(open) = segment.find('[') else {
        return (segment.trim(), None);
    };
    let name = segment[..open].trim();
    let inner = segment[open + 1..].trim_end_matches(']').trim();
    let Some(inner) = inner.strip_prefix('@') else {
        return (name, None);
    };

    let predicate = match inner.split_once('=') {
        Some((attribute, value)) => Predicate {
            attribute: attribute.trim(),
            value: Some(value.trim().trim_matches(|c| c == '\'' || c == '"')),
        },
        None => Predicate {
            attribute: inner,
            value: None,
        },
    };
    (name, Some(predicate))
}
