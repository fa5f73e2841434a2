use std::sync::LazyLock;

use regex::Regex;

static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"def\s+(\w+)\s*\(self").unwrap());
static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"def\s+(\w+)\s*\(").unwrap());

const CONSTRUCTOR: &str = "__init__";

/// Best-effort function-name inference from a starter-code snippet.
///
/// Textual pattern matching, not a parser: an instance-method definition
/// beats a free function, `__init__` never counts, and anything that yields
/// no usable identifier returns `None` rather than erroring.
pub fn function_name(starter_code: Option<&str>) -> Option<String> {
    let code = starter_code?;
    if code.is_empty() {
        return None;
    }
    first_usable(&METHOD_RE, code).or_else(|| first_usable(&FUNCTION_RE, code))
}

// Leftmost match whose identifier is not the constructor.
fn first_usable(re: &Regex, code: &str) -> Option<String> {
    re.captures_iter(code)
        .map(|caps| caps[1].to_string())
        .find(|name| name != CONSTRUCTOR)
}
