use feedback_types::{Feedback, Pagination};

const STYLE: &str = "\
body{margin:0;background:#f9fafb;color:#111827;font-family:system-ui,sans-serif}\
main{max-width:72rem;margin:0 auto;padding:2rem}\
header{display:flex;justify-content:space-between;align-items:center;margin-bottom:2rem}\
h1{font-size:1.875rem;margin:0}\
.muted{color:#6b7280;font-size:.875rem}\
ul{list-style:none;margin:0;padding:0;background:#fff;border-radius:.375rem;box-shadow:0 1px 2px rgba(0,0,0,.08)}\
li{padding:1rem 1.5rem;border-top:1px solid #e5e7eb}\
li:first-child{border-top:none}\
.row{display:flex;justify-content:space-between;align-items:center}\
.app{color:#4f46e5;font-weight:600;font-size:.875rem}\
.badge{padding:0 .5rem;border-radius:9999px;font-size:.75rem;font-weight:600}\
.pending{background:#fef9c3;color:#854d0e}\
.processed{background:#dcfce7;color:#166534}\
.content{margin-top:.5rem;font-size:.875rem;white-space:pre-wrap}\
.meta{margin-top:1rem}\
.empty{text-align:center;color:#6b7280}\
nav{margin-top:1.5rem;display:flex;justify-content:space-between;align-items:center}\
nav a{padding:.5rem 1rem;border:1px solid #d1d5db;border-radius:.375rem;background:#fff;color:#374151;text-decoration:none}\
";

/// Full listing page: header with total, one entry per feedback, pagination.
pub fn feedback_page(feedbacks: &[Feedback], pagination: &Pagination) -> String {
    let mut items = String::new();
    if feedbacks.is_empty() {
        items.push_str("<li class=\"empty\">No feedbacks found.</li>");
    } else {
        for feedback in feedbacks {
            items.push_str(&feedback_item(feedback));
        }
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>App Feedbacks</title><style>{}</style></head><body><main>\
<header><h1>App Feedbacks</h1><div class=\"muted\">Total: {}</div></header>\
<ul>{}</ul>{}</main></body></html>",
        STYLE,
        pagination.total,
        items,
        navigation(pagination),
    )
}

fn feedback_item(feedback: &Feedback) -> String {
    let version = feedback
        .version
        .as_deref()
        .map(|v| format!(" <span class=\"muted\">v{}</span>", escape(v)))
        .unwrap_or_default();

    let contact = feedback
        .contact
        .as_deref()
        .map(|c| format!("<span class=\"muted\">Contact: {}</span> ", escape(c)))
        .unwrap_or_default();

    let created = feedback
        .created_at_utc()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".into());

    format!(
        "<li><div class=\"row\"><div class=\"app\">{}{}</div>\
<span class=\"badge {}\">{}</span></div>\
<div class=\"content\">{}</div>\
<div class=\"row meta\"><div>{}<span class=\"muted\">{}</span></div>\
<div class=\"muted\">ID: {}</div></div></li>",
        escape(&feedback.app_id),
        version,
        feedback.status,
        feedback.status,
        escape(&feedback.content),
        contact,
        created,
        feedback.id,
    )
}

fn navigation(pagination: &Pagination) -> String {
    let prev = if pagination.has_prev() {
        format!("<a href=\"/?page={}\">Previous</a>", pagination.page - 1)
    } else {
        String::new()
    };
    let next = if pagination.has_next() {
        format!("<a href=\"/?page={}\">Next</a>", pagination.page + 1)
    } else {
        String::new()
    };

    format!(
        "<nav><div>{}</div><div class=\"muted\">Page {} of {}</div><div>{}</div></nav>",
        prev,
        pagination.page,
        pagination.display_pages(),
        next,
    )
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
