/// Key binding table: `("", "")` is a blank line, `("", title)` a section header
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("Ctrl+C / Ctrl+Q", "Quit"),
    ("Esc", "Dismiss notification"),
    ("F5", "Check server status"),
    ("", ""),
    ("", "VIEWS"),
    ("Alt+1..5", "Open view by number"),
    ("Ctrl+N / Ctrl+P", "Next / previous view"),
    ("", "Switching views clears the form and the answer"),
    ("", ""),
    ("", "FORM"),
    ("Tab / Shift+Tab", "Next / previous field"),
    ("Ctrl+S", "Submit the form"),
    ("Enter", "Submit (single-line fields)"),
    ("Enter", "New line (multi-line fields)"),
    ("Enter", "Add problem area (area list)"),
    ("Backspace", "Remove last area (empty area input)"),
    ("←/→ Space", "Change detail level"),
    ("", "Analysis view: submit from the image field to upload it"),
    ("", ""),
    ("", "ANSWER"),
    ("Ctrl+D / Ctrl+U", "Scroll half page down / up"),
    ("PageDown / PageUp", "Scroll half page down / up"),
    ("Ctrl+Y", "Copy answer to clipboard"),
];

pub const HELP_FOOTER: &str = "j/k: scroll | g/G: top/bottom | q: close";

#[cfg(test)]
#[path = "help_content_tests.rs"]
mod help_content_tests;
