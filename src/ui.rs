use crate::state::{ActivityCard, Message, NO_PARTICIPANTS, PLACEHOLDER_OPTION, ParticipantRow, ViewState};
use std::fmt::Write;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_page(view: &ViewState) -> String {
    let cards: String = view.cards().iter().map(render_card).collect();
    let options = render_options(view.options());
    let message = render_message(view.message());
    fill_template(
        INDEX_HTML,
        &[
            ("ACTIVITIES", cards.as_str()),
            ("OPTIONS", options.as_str()),
            ("MESSAGE", message.as_str()),
        ],
    )
}

pub fn render_card(card: &ActivityCard) -> String {
    let rows: String = card
        .rows
        .iter()
        .map(|row| match row {
            ParticipantRow::Participant(email) => {
                format!(r#"<li class="participant-item">{}</li>"#, escape_html(email))
            }
            ParticipantRow::Placeholder => {
                format!(r#"<li class="participant-item empty">{NO_PARTICIPANTS}</li>"#)
            }
        })
        .collect();

    format!(
        r#"
      <div class="activity-card" data-activity="{name}">
        <h4>{name}</h4>
        <p class="description">{description}</p>
        <p class="schedule"><strong>Schedule:</strong> {schedule}</p>
        <p class="capacity"><strong>Capacity:</strong> {current} / {max}</p>
        <div class="participants-section">
          <h5 class="participants-title">Participants</h5>
          <ul class="participants-list">{rows}</ul>
        </div>
      </div>"#,
        name = escape_html(&card.activity),
        description = escape_html(&card.description),
        schedule = escape_html(&card.schedule),
        current = card.capacity.current,
        max = card.capacity.max,
    )
}

pub fn render_options(options: &[String]) -> String {
    let mut html = format!(r#"<option value="">{PLACEHOLDER_OPTION}</option>"#);
    for name in options {
        let name = escape_html(name);
        let _ = write!(html, r#"<option value="{name}">{name}</option>"#);
    }
    html
}

pub fn render_message(message: Option<&Message>) -> String {
    match message {
        Some(message) => format!(
            r#"<div id="message" class="message {}">{}</div>"#,
            message.kind.as_str(),
            escape_html(&message.text)
        ),
        None => r#"<div id="message" class="hidden"></div>"#.to_string(),
    }
}

/// Plain-text rendering for terminals.
pub fn render_text(view: &ViewState) -> String {
    let mut out = String::new();
    if let Some(message) = view.message() {
        let _ = writeln!(out, "[{}] {}", message.kind.as_str(), message.text);
        out.push('\n');
    }
    for card in view.cards() {
        let _ = writeln!(
            out,
            "{} ({}/{})",
            card.activity, card.capacity.current, card.capacity.max
        );
        if !card.description.is_empty() {
            let _ = writeln!(out, "  {}", card.description);
        }
        if !card.schedule.is_empty() {
            let _ = writeln!(out, "  Schedule: {}", card.schedule);
        }
        for row in &card.rows {
            match row {
                ParticipantRow::Participant(email) => {
                    let _ = writeln!(out, "  - {email}");
                }
                ParticipantRow::Placeholder => {
                    let _ = writeln!(out, "  ({NO_PARTICIPANTS})");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Substitutes `{{KEY}}` markers in one pass, so inserted values are never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let replaced = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, &after[end + 2..]))
        });
        match replaced {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Extracurricular Activities</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2933;
      --accent: #1a4c8b;
      --card: #ffffff;
      --muted: #616e7c;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
    }

    header {
      background: var(--accent);
      color: white;
      padding: 20px 32px;
    }

    main {
      display: grid;
      grid-template-columns: minmax(0, 2fr) minmax(0, 1fr);
      gap: 24px;
      padding: 24px 32px;
    }

    .activity-card {
      background: var(--card);
      border-radius: 10px;
      padding: 16px 20px;
      margin-bottom: 16px;
      box-shadow: 0 6px 18px rgba(31, 41, 51, 0.08);
    }

    .activity-card h4 {
      margin: 0 0 8px;
      color: var(--accent);
    }

    .participants-list {
      margin: 4px 0 0;
      padding-left: 20px;
    }

    .participant-item.empty {
      color: var(--muted);
      font-style: italic;
      list-style: none;
      margin-left: -20px;
    }

    form {
      display: grid;
      gap: 12px;
      background: var(--card);
      border-radius: 10px;
      padding: 20px;
    }

    .message {
      margin-top: 16px;
      padding: 12px;
      border-radius: 6px;
    }

    .message.success {
      background: #e3f9e5;
      color: #1f6b2c;
    }

    .message.error {
      background: #ffe3e3;
      color: #9b1c1c;
    }

    .message.info {
      background: #e6f0ff;
      color: var(--accent);
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <header>
    <h1>Extracurricular Activities</h1>
  </header>
  <main>
    <section id="activities-container">
      <h3>Available Activities</h3>
      <div id="activities-list">{{ACTIVITIES}}
      </div>
    </section>
    <section id="signup-container">
      <h3>Sign Up for an Activity</h3>
      <form id="signup-form">
        <label for="email">Student Email:</label>
        <input type="email" id="email" required placeholder="your-email@mergington.edu" />
        <label for="activity">Select Activity:</label>
        <select id="activity" required>{{OPTIONS}}</select>
        <button type="submit">Sign Up</button>
      </form>
      {{MESSAGE}}
    </section>
  </main>
</body>
</html>
"#;
