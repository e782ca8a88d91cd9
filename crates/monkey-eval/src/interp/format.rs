// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Rendering helpers for host-facing output.

/// Render a parser's collected error strings as the classic Monkey REPL
/// banner, for hosts that want to print them before giving up on a line.
pub fn format_parse_errors(errors: &[String]) -> String {
    let mut out = String::from("Woops! We ran into some monkey business here!\n");
    out.push_str(" parser errors:\n");
    for err in errors {
        out.push('\t');
        out.push_str(err);
        out.push('\n');
    }
    out
}
