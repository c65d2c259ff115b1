//! HTML rendering for the form page.

use crate::report::{CheckOutcome, StrengthReport, Tone, FEEDBACK_TITLE};

pub const PAGE_TITLE: &str = "Password Strength Checker";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full page, with the outcome of the last submit if any.
pub fn render_page(outcome: Option<&CheckOutcome>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(template_head());
    html.push_str(&format!(
        "<h1>🔐 {}</h1>\n<p class=\"subtitle\">Enter a password to check its security level. 🚀</p>\n",
        PAGE_TITLE
    ));
    html.push_str(template_form());

    match outcome {
        Some(CheckOutcome::EmptyInput { message }) => {
            html.push_str(&format!(
                "<div class=\"banner {}\" role=\"alert\">⚠ {}</div>\n",
                Tone::Warning.as_str(),
                escape_html(message)
            ));
        }
        Some(CheckOutcome::Evaluated(report)) => html.push_str(&render_report(report)),
        None => {}
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_report(report: &StrengthReport) -> String {
    let banner = &report.banner;
    let mut html = String::new();

    html.push_str("<div class=\"password-card\">\n");
    html.push_str(&format!(
        "<div class=\"banner {}\" role=\"status\">{} <strong>{}</strong> - {}</div>\n",
        banner.tone.as_str(),
        banner.icon,
        escape_html(banner.title),
        escape_html(banner.message)
    ));
    html.push_str(&format!(
        "<progress value=\"{0}\" max=\"100\" aria-label=\"{1}\">{0}%</progress>\n",
        report.intensity,
        report.strength
    ));
    html.push_str("</div>\n");

    if report.has_feedback() {
        html.push_str(&format!(
            "<details class=\"feedback\">\n<summary>⚡ {}</summary>\n<ul>\n",
            FEEDBACK_TITLE
        ));
        for item in &report.feedback {
            html.push_str(&format!("<li>❌ {}</li>\n", escape_html(item)));
        }
        html.push_str("</ul>\n</details>\n");
    }

    html
}

fn template_head() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>🔐 Password Strength Checker</title>
    <style>
        body {
            background: linear-gradient(to right, #1e3c72, #2a5298);
            color: white;
            font-family: Arial, sans-serif;
            min-height: 100vh;
            margin: 0;
        }
        main { max-width: 720px; margin: 0 auto; padding: 2rem 1rem; }
        h1 { text-align: center; color: #FFD700; }
        .subtitle { text-align: center; }
        input[type=password] {
            width: 100%;
            box-sizing: border-box;
            background-color: white;
            color: black;
            font-size: 16px;
            padding: 10px;
            border-radius: 8px;
            border: 2px solid #FFD700;
        }
        button {
            margin-top: 1rem;
            background-color: #FFD700;
            color: black;
            font-size: 18px;
            font-weight: bold;
            border: none;
            border-radius: 8px;
            padding: 10px;
            transition: 0.3s;
            cursor: pointer;
        }
        button:hover { background-color: #FFA500; color: white; }
        .password-card {
            background: rgba(255, 255, 255, 0.1);
            margin-top: 1.5rem;
            padding: 20px;
            border-radius: 10px;
            text-align: center;
            box-shadow: 2px 2px 20px rgba(255, 255, 255, 0.2);
        }
        .banner { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
        .banner.success { background: #1f7a3a; }
        .banner.info { background: #1c5d99; }
        .banner.error { background: #9b2226; }
        .banner.warning { background: #a36a00; margin-top: 1.5rem; }
        progress { width: 100%; height: 1rem; }
        .feedback { margin-top: 1rem; background: rgba(0, 0, 0, 0.2); padding: 0.75rem 1rem; border-radius: 6px; }
        .feedback summary { cursor: pointer; font-weight: bold; }
    </style>
</head>
<body>
<main>
"#
}

fn template_form() -> &'static str {
    r#"<form method="post" action="/check" autocomplete="off">
    <label for="password">Enter your password:</label>
    <input type="password" id="password" name="password" title="Make sure your password is strong. ✔">
    <button type="submit">Check Strength</button>
</form>
"#
}
