//! HTML for the planner form and result page

use pulldown_cmark::{html, Event, Parser};
use std::fmt::Write;

use crate::planner::Provider;

pub const DEFAULT_DESCRIPTION: &str = "50 VMs, 2 databases, 10TB storage";

/// What to show under the form after a submit
pub enum Outcome<'a> {
    Plan(&'a str),
    Error(&'a str),
}

pub struct PageInput<'a> {
    pub provider: Provider,
    pub description: &'a str,
    pub outcome: Option<Outcome<'a>>,
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;min-height:6rem}\
.error{background:#fdecea;color:#611a15;padding:.75rem 1rem;border-radius:4px}\
.hint{color:#666;font-size:.9rem}\
footer{margin-top:3rem;color:#888;font-size:.85rem}";

pub fn render(input: &PageInput<'_>) -> String {
    let mut out = String::with_capacity(4096);

    // Writing into a String can't fail
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Cloud Migration Planner</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Cloud Migration Planner</h1>\n\
         <h2>Describe Your On-Premises Setup</h2>\n\
         <form method=\"post\" action=\"/plan\">\n\
         <label for=\"provider\">Select Cloud Provider</label>\n\
         <select id=\"provider\" name=\"provider\">\n"
    );

    for provider in Provider::ALL {
        let selected = if provider == input.provider { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{provider}\"{selected}>{provider}</option>");
    }

    let _ = write!(
        out,
        "</select>\n\
         <p><label for=\"description\">Enter details (e.g., '10 VMs, 2 databases, 5TB storage'):</label></p>\n\
         <textarea id=\"description\" name=\"description\">{}</textarea>\n\
         <p class=\"hint\">Specify number of VMs, databases, and storage (e.g., '5 VMs, 1 DB, 2TB').</p>\n\
         <button type=\"submit\">Generate Migration Plan</button>\n\
         </form>\n",
        escape_html(input.description)
    );

    match &input.outcome {
        Some(Outcome::Plan(markdown)) => {
            out.push_str("<hr>\n<h2>Your Migration Plan</h2>\n<section class=\"plan\">\n");
            // Raw HTML in the plan (remote output) is shown as text
            let events = Parser::new(markdown).map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            });
            html::push_html(&mut out, events);
            out.push_str("</section>\n");
            let _ = write!(
                out,
                "<form method=\"post\" action=\"/plan/download\">\n\
                 <input type=\"hidden\" name=\"provider\" value=\"{}\">\n\
                 <input type=\"hidden\" name=\"description\" value=\"{}\">\n\
                 <button type=\"submit\">Download Plan</button>\n\
                 </form>\n",
                input.provider,
                escape_html(input.description)
            );
        }
        Some(Outcome::Error(message)) => {
            let _ = write!(
                out,
                "<hr>\n<h2>Your Migration Plan</h2>\n<div class=\"error\" role=\"alert\">{}</div>\n",
                escape_html(message)
            );
        }
        None => {}
    }

    out.push_str("<footer>Powered by migration-planner</footer>\n</body>\n</html>\n");
    out
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
