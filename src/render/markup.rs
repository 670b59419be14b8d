use std::sync::LazyLock;

use regex::Regex;

static ICON_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([a-z]+)\]\s*(.*)$").expect("icon line pattern"));

static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold span pattern"));

/// Một dòng đã parse của tin nhắn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderLine {
    Plain(String),
    Icon { kind: String, body: String },
}

impl RenderLine {
    pub fn body(&self) -> &str {
        match self {
            RenderLine::Plain(body) => body,
            RenderLine::Icon { body, .. } => body,
        }
    }

    pub fn icon_kind(&self) -> Option<&str> {
        match self {
            RenderLine::Plain(_) => None,
            RenderLine::Icon { kind, .. } => Some(kind),
        }
    }
}

/// Đoạn text liên tục cùng kiểu chữ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

/// Dòng đã render: dòng gốc kèm HTML an toàn của phần body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub line: RenderLine,
    pub html: String,
}

impl RenderedLine {
    pub fn segments(&self) -> Vec<Segment> {
        bold_segments(self.line.body())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBlock {
    pub lines: Vec<RenderedLine>,
}

impl MessageBlock {
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="message-content-inner">"#);
        for rendered in &self.lines {
            match &rendered.line {
                RenderLine::Icon { kind, .. } => {
                    // kind chỉ gồm [a-z], không cần escape
                    html.push_str(&format!(
                        r#"<div class="message-line with-icon"><span class="message-icon" data-icon="{kind}"></span><span>{}</span></div>"#,
                        rendered.html
                    ));
                }
                RenderLine::Plain(_) => {
                    html.push_str(&format!(
                        r#"<div class="message-line">{}</div>"#,
                        rendered.html
                    ));
                }
            }
        }
        html.push_str("</div>");
        html
    }

    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|rendered| {
                let body: String = rendered
                    .segments()
                    .into_iter()
                    .map(|segment| segment.text)
                    .collect();
                match rendered.line.icon_kind() {
                    Some(kind) => format!("{} {body}", icon_glyph(kind)),
                    None => body,
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn parse_line(raw: &str) -> Option<RenderLine> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match ICON_LINE.captures(trimmed) {
        Some(caps) => Some(RenderLine::Icon {
            kind: caps[1].to_string(),
            body: caps[2].to_string(),
        }),
        None => Some(RenderLine::Plain(trimmed.to_string())),
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Chỉ gọi trên text đã qua `escape`.
pub fn apply_bold(escaped: &str) -> String {
    BOLD_SPAN
        .replace_all(escaped, "<strong>$1</strong>")
        .into_owned()
}

pub fn bold_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in BOLD_SPAN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(Segment {
                text: text[cursor..whole.start()].to_string(),
                bold: false,
            });
        }
        segments.push(Segment {
            text: inner.as_str().to_string(),
            bold: true,
        });
        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            bold: false,
        });
    }

    segments
}

pub fn render_message(text: &str) -> MessageBlock {
    let lines = text
        .split('\n')
        .filter_map(parse_line)
        .map(|line| {
            let html = apply_bold(&escape(line.body()));
            RenderedLine { line, html }
        })
        .collect();

    MessageBlock { lines }
}

pub fn icon_glyph(kind: &str) -> &'static str {
    match kind {
        "calendar" => "📅",
        "location" => "📍",
        "detail" => "📝",
        "price" => "💲",
        "category" => "🏷",
        "contact" => "📞",
        "link" => "🔗",
        "info" => "ℹ",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_icon_line() {
        let line = parse_line("[info] Hola").unwrap();
        assert_eq!(
            line,
            RenderLine::Icon {
                kind: "info".to_string(),
                body: "Hola".to_string()
            }
        );
    }

    #[test]
    fn test_parse_plain_line() {
        assert_eq!(
            parse_line("  Hola  "),
            Some(RenderLine::Plain("Hola".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_line_is_dropped() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_parse_uppercase_kind_is_plain() {
        assert_eq!(
            parse_line("[Info] Hola"),
            Some(RenderLine::Plain("[Info] Hola".to_string()))
        );
    }

    #[test]
    fn test_parse_icon_without_body() {
        let line = parse_line("[link]").unwrap();
        assert_eq!(line.icon_kind(), Some("link"));
        assert_eq!(line.body(), "");
    }

    #[test]
    fn test_escape_special_characters() {
        let escaped = escape(r#"<a href="x">Tom & 'Jerry'</a>"#);
        assert_eq!(
            escaped,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_no_raw_special_characters() {
        let inputs = ["&&&", "<<>>", r#""'"'"#, "a < b && c > \"d\" 'e'"];
        for input in inputs {
            let escaped = escape(input);
            // Bỏ các entity hợp lệ, phần còn lại không được chứa ký tự đặc biệt
            let stripped = escaped
                .replace("&amp;", "")
                .replace("&lt;", "")
                .replace("&gt;", "")
                .replace("&quot;", "")
                .replace("&#39;", "");
            assert!(
                !stripped.contains(['&', '<', '>', '"', '\'']),
                "raw character left in {escaped:?}"
            );
        }
    }

    #[test]
    fn test_apply_bold_wraps_only_marked_span() {
        assert_eq!(apply_bold("a **b** c"), "a <strong>b</strong> c");
    }

    #[test]
    fn test_apply_bold_is_non_greedy() {
        assert_eq!(
            apply_bold("**x** y **z**"),
            "<strong>x</strong> y <strong>z</strong>"
        );
    }

    #[test]
    fn test_apply_bold_ignores_unclosed_marker() {
        assert_eq!(apply_bold("**abierto"), "**abierto");
    }

    #[test]
    fn test_bold_segments() {
        let segments = bold_segments("a **b** c");
        assert_eq!(
            segments,
            vec![
                Segment {
                    text: "a ".to_string(),
                    bold: false
                },
                Segment {
                    text: "b".to_string(),
                    bold: true
                },
                Segment {
                    text: " c".to_string(),
                    bold: false
                },
            ]
        );
    }

    #[test]
    fn test_render_message_escapes_before_bold() {
        let block = render_message("**<script>**alert('x')");
        assert_eq!(block.lines.len(), 1);
        assert_eq!(
            block.lines[0].html,
            "<strong>&lt;script&gt;</strong>alert(&#39;x&#39;)"
        );
    }

    #[test]
    fn test_render_message_drops_blank_lines() {
        let block = render_message("Hola\n\n   \n[calendar] **Fecha:** hoy\n");
        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[1].line.icon_kind(), Some("calendar"));
        assert_eq!(block.lines[1].html, "<strong>Fecha:</strong> hoy");
    }

    #[test]
    fn test_message_block_html() {
        let block = render_message("Hola\n[info] Tom & Jerry");
        assert_eq!(
            block.to_html(),
            concat!(
                r#"<div class="message-content-inner">"#,
                r#"<div class="message-line">Hola</div>"#,
                r#"<div class="message-line with-icon"><span class="message-icon" data-icon="info"></span><span>Tom &amp; Jerry</span></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_message_block_plain_text() {
        let block = render_message("Hola **mijo**\n[location] **Lugar:** Parque");
        assert_eq!(block.to_plain_text(), "Hola mijo\n📍 Lugar: Parque");
    }
}
