//! Topic classification over problem text.
//!
//! Scans titles and descriptions against a bilingual (English and
//! Vietnamese) keyword table and unions the hits with the problem's
//! explicit topic tags. The table is data: a new topic or spelling is a
//! row change, not a code change.

use std::collections::HashMap;

use im::HashSet;

use crate::core::Problem;

/// Built-in keyword rows: canonical topic name, then the substrings that
/// imply it in lower-cased text.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("Array", &["array", "mảng", "list", "danh sách"]),
    ("String", &["string", "chuỗi", "text", "văn bản"]),
    ("Tree", &["tree", "cây", "binary tree", "cây nhị phân"]),
    ("Graph", &["graph", "đồ thị", "node", "edge"]),
    ("Dynamic Programming", &["dynamic programming", "quy hoạch động", "dp"]),
    ("Sorting", &["sort", "sắp xếp", "order", "thứ tự"]),
    ("Searching", &["search", "tìm kiếm", "find", "tìm"]),
    ("Math", &["math", "toán", "calculation", "tính toán"]),
    ("Recursion", &["recursion", "đệ quy", "recursive"]),
    ("Hash Table", &["hash", "băm", "dictionary", "từ điển"]),
];

/// Deduplicated topics for a problem: explicit tags plus keyword matches
/// over the description and the title. `None` yields the empty set.
pub fn extract_topics(problem: Option<&Problem>) -> HashSet<String> {
    extract_topics_with(problem, &HashMap::new())
}

/// Like [`extract_topics`], with caller-supplied keyword rows merged in
/// (topic name to keyword list, as configuration data).
pub fn extract_topics_with(
    problem: Option<&Problem>,
    extra_keywords: &HashMap<String, Vec<String>>,
) -> HashSet<String> {
    let Some(problem) = problem else {
        return HashSet::new();
    };

    let mut topics = HashSet::new();

    if let Some(direct) = &problem.topics {
        for topic in direct {
            topics.insert(topic.clone());
        }
    }
    if let Some(description) = &problem.description {
        scan_text(description, extra_keywords, &mut topics);
    }
    if let Some(title) = &problem.title {
        scan_text(title, extra_keywords, &mut topics);
    }

    topics
}

fn scan_text(
    text: &str,
    extra_keywords: &HashMap<String, Vec<String>>,
    topics: &mut HashSet<String>,
) {
    let lowered = text.to_lowercase();

    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            topics.insert((*topic).to_string());
        }
    }
    for (topic, keywords) in extra_keywords {
        if keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
        {
            topics.insert(topic.clone());
        }
    }
}
