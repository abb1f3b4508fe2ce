use regex::Regex;

use super::types::CommandPlan;

/// Classifies a free-text utterance into a [`CommandPlan`].
///
/// Rules are tried top to bottom and the first match wins. The ordering is
/// part of the wire contract: clients rely on, for example, an embedded URL
/// beating a later verb rule, so reordering rules is a breaking change.
#[derive(Debug)]
pub struct CommandPlanner {
    url_anywhere: Regex,
    open_app: Regex,
    open_to: Regex,
    go_to: Regex,
    search: Regex,
    bare_domain: Regex,
}

impl CommandPlanner {
    pub fn new() -> Self {
        Self {
            // Optional scheme and www prefix, hostname-like token, dot, 2+
            // letter suffix, optional path/query/fragment with no whitespace.
            url_anywhere: Regex::new(
                r"(?i)\b((?:https?://)?(?:www\.)?[a-z0-9][a-z0-9\-]+\.[a-z]{2,}(?:[/?#][^\s]*)?)",
            )
            .expect("url pattern"),
            open_app: Regex::new(r"(?i)^(?:open|launch)\s+([a-z0-9 .+\-&]+)$")
                .expect("open pattern"),
            open_to: Regex::new(r"(?i)^open\s+([a-z0-9 .+\-&]+)\s+to\s+(.+)$")
                .expect("open-to pattern"),
            go_to: Regex::new(r"(?i)^(?:go to|visit)\s+(.+)$").expect("go-to pattern"),
            search: Regex::new(r"(?i)^(?:search|google)\s+(.+)$").expect("search pattern"),
            bare_domain: Regex::new(r"(?i)^[a-z0-9][a-z0-9\-]+\.[a-z]{2,}(/.*)?$")
                .expect("domain pattern"),
        }
    }

    /// Plan a single utterance. Total and deterministic: every input maps to
    /// some plan, worst case `unknown`. Pure, so safe to call from any number
    /// of concurrent requests.
    pub fn plan(&self, text: &str) -> CommandPlan {
        let trimmed = text.trim();

        // 1) explicit URL anywhere in the text
        if let Some(found) = self
            .url_anywhere
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
        {
            return CommandPlan::open_url(normalize_url(found.as_str()), trimmed);
        }

        // 2) "open <app>" or "launch <app>"
        if let Some(caps) = self.open_app.captures(trimmed) {
            return CommandPlan::open_app(caps[1].trim(), trimmed);
        }

        // 3) "open <app> to <destination>"
        if let Some(caps) = self.open_to.captures(trimmed) {
            return CommandPlan::open_url(normalize_url(caps[2].trim()), trimmed);
        }

        // 4) "go to <destination>" or "visit <destination>"
        if let Some(caps) = self.go_to.captures(trimmed) {
            return CommandPlan::open_url(normalize_url(caps[1].trim()), trimmed);
        }

        // 5) "search <query>" or "google <query>"
        if let Some(caps) = self.search.captures(trimmed) {
            return CommandPlan::search(caps[1].trim(), trimmed);
        }

        // 6) bareword that looks like a domain
        if self.bare_domain.is_match(trimmed) {
            return CommandPlan::open_url(normalize_url(trimmed), trimmed);
        }

        CommandPlan::unknown(trimmed)
    }
}

impl Default for CommandPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensure a URL-like string carries an explicit scheme.
///
/// Empty input stays empty; input that already starts with `<letters>://` is
/// returned unchanged; anything else gets `https://` prepended.
pub fn normalize_url(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return String::new();
    }
    if has_scheme(s) {
        s.to_string()
    } else {
        format!("https://{s}")
    }
}

fn has_scheme(s: &str) -> bool {
    match s.split_once("://") {
        Some((scheme, _)) => !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}
