//! HTML assembly: token rendering and the fixed page template.

use crate::model::Token;

use super::RenderOptions;

/// Render a normalized token sequence into a complete HTML page.
pub fn to_html(tokens: &[Token], options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(tokens)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render tokens into a complete page.
    pub fn render(&self, tokens: &[Token]) -> String {
        let body = self.render_body(tokens);
        self.page(&body)
    }

    /// Render tokens into the document body, concatenated with no
    /// separators.
    pub fn render_body(&self, tokens: &[Token]) -> String {
        let mut output = String::new();
        for token in tokens {
            self.render_token(&mut output, token);
        }
        output
    }

    fn render_token(&self, output: &mut String, token: &Token) {
        match token {
            Token::Heading { level, text } => self.render_heading(output, *level, text),
            Token::ListItem { text, href } => self.render_list_item(output, text, href),
            Token::ListOpen => output.push_str("<ul>"),
            Token::ListClose => output.push_str("</ul>"),
        }
    }

    fn render_heading(&self, output: &mut String, level: u8, text: &str) {
        match self.options.style.heading_class() {
            Some(class) => {
                output.push_str(&format!("<h{level} class='{class}'>{text}</h{level}>"))
            }
            None => output.push_str(&format!("<h{level}>{text}</h{level}>")),
        }
    }

    fn render_list_item(&self, output: &mut String, text: &str, href: &str) {
        match self.options.style.item_class() {
            Some(class) => output.push_str(&format!("<li class='{class}'>")),
            None => output.push_str("<li>"),
        }
        match self.options.style.anchor_class() {
            Some(class) => output.push_str(&format!(
                "<a class='{class}' href='{href}' target='_blank' rel='noreferrer'>{text}</a>"
            )),
            None => output.push_str(&format!(
                "<a href='{href}' target='_blank' rel='noreferrer'>{text}</a>"
            )),
        }
        output.push_str("</li>");
    }

    fn page(&self, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link href="{stylesheet}" rel="stylesheet">
</head>
<body>
<div class="{container}">
{body}
</div>
</body>
</html>
"#,
            title = self.options.title,
            stylesheet = self.options.stylesheet,
            container = self.options.style.container_class(),
        )
    }
}
