//! Style summary extraction.
//!
//! There is no layout engine here, so "computed" style is resolved
//! statically: rules from the page's `<style>` blocks that match an element
//! are applied in source order, then its inline `style` attribute.
//! Inherited properties fall back to the nearest ancestor that sets them.
//! External stylesheets are never fetched.

use scraper::{ElementRef, Html, Selector};

use blogtools_core::models::style::{Colors, Components, Spacing, StyleSummary, Typography};

/// Main-content containers, most specific first.
pub const CONTAINER_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".post",
    ".content",
    "#content",
    "body",
];

const PARAGRAPH: &str = "p";
const HEADING: &str = "h1, h2, h3";
const BUTTON: &str = "button, .button, .btn, input[type=\"submit\"], input[type=\"button\"]";
const INPUT: &str = "input[type=\"text\"], input[type=\"email\"], input[type=\"search\"], \
input[type=\"number\"], input:not([type]), textarea";
const LINK: &str = "a[href]";

const INHERITED: &[&str] = &["font-family", "font-size", "line-height", "color", "font-weight"];

struct Rule {
    selector: Selector,
    declarations: Vec<(String, String)>,
}

impl Rule {
    fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Summarize a page's visual style from its HTML.
pub fn extract_style(html: &str) -> StyleSummary {
    let document = Html::parse_document(html);
    let sheet = StyleSheet::from_document(&document);

    let container = find_container(&document);

    let paragraph = sample(&document, container, PARAGRAPH).or(container);
    let heading = sample(&document, container, HEADING);
    let button = sample(&document, container, BUTTON);
    let input = sample(&document, container, INPUT);
    let link = sample(&document, container, LINK);

    let get = |element: Option<ElementRef>, properties: &[&str]| {
        element
            .map(|e| sheet.computed_first(e, properties))
            .unwrap_or_default()
    };

    let text_color = get(paragraph, &["color"]);
    let link_color = get(link, &["color"]);
    let button_background = get(button, &["background-color", "background"]);

    let accent = if button_background.is_empty() {
        link_color.clone()
    } else {
        button_background.clone()
    };

    StyleSummary {
        typography: Typography {
            font_family: get(paragraph, &["font-family"]),
            font_size: get(paragraph, &["font-size"]),
            line_height: get(paragraph, &["line-height"]),
            color: text_color.clone(),
            heading_font_family: get(heading, &["font-family"]),
            heading_font_weight: get(heading, &["font-weight"]),
            heading_color: get(heading, &["color"]),
        },
        colors: Colors {
            text: text_color,
            background: container
                .map(|c| sheet.background(c))
                .unwrap_or_default(),
            link: link_color,
            accent,
        },
        spacing: Spacing {
            paragraph_margin: get(paragraph, &["margin", "margin-bottom"]),
            container_padding: get(container, &["padding"]),
            max_width: get(container, &["max-width"]),
        },
        components: Components {
            button_background,
            button_color: get(button, &["color"]),
            button_border_radius: get(button, &["border-radius"]),
            button_padding: get(button, &["padding"]),
            button_border: get(button, &["border"]),
            input_border: get(input, &["border"]),
            input_border_radius: get(input, &["border-radius"]),
            input_padding: get(input, &["padding"]),
        },
    }
}

/// First match inside the container, falling back to the whole document.
fn sample<'a>(
    document: &'a Html,
    container: Option<ElementRef<'a>>,
    css: &str,
) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    container
        .and_then(|c| c.select(&selector).next())
        .or_else(|| document.select(&selector).next())
}

/// First element matching the prioritized container selectors.
pub fn find_container(document: &Html) -> Option<ElementRef<'_>> {
    CONTAINER_SELECTORS.iter().find_map(|css| {
        let selector = Selector::parse(css).ok()?;
        document.select(&selector).next()
    })
}

struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    fn from_document(document: &Html) -> Self {
        let mut rules = Vec::new();
        if let Ok(selector) = Selector::parse("style") {
            for style in document.select(&selector) {
                rules.extend(parse_rules(&style.text().collect::<String>()));
            }
        }
        Self { rules }
    }

    /// Value declared directly on the element, stylesheet first, then inline.
    fn declared(&self, element: ElementRef<'_>, property: &str) -> Option<String> {
        let mut value = self
            .rules
            .iter()
            .filter(|rule| rule.selector.matches(&element))
            .filter_map(|rule| rule.get(property))
            .last()
            .map(str::to_string);

        if let Some(inline) = element.value().attr("style") {
            for (name, v) in parse_declarations(inline) {
                if name == property {
                    value = Some(v);
                }
            }
        }

        value.filter(|v| v != "inherit")
    }

    fn computed(&self, element: ElementRef<'_>, property: &str) -> String {
        if let Some(value) = self.declared(element, property) {
            return value;
        }
        if !INHERITED.contains(&property) {
            return String::new();
        }
        element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find_map(|ancestor| self.declared(ancestor, property))
            .unwrap_or_default()
    }

    /// First non-empty value among `properties` (longhand before shorthand).
    fn computed_first(&self, element: ElementRef<'_>, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|p| self.computed(element, p))
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    }

    /// Backgrounds are not inherited but show through, so walk up until one
    /// is set.
    fn background(&self, element: ElementRef<'_>) -> String {
        std::iter::once(element)
            .chain(element.ancestors().filter_map(ElementRef::wrap))
            .map(|e| self.computed_first(e, &["background-color", "background"]))
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    }
}

fn parse_rules(css: &str) -> Vec<Rule> {
    let css = strip_comments(css);
    let mut rules = Vec::new();
    let mut rest = css.as_str();

    while let Some(open) = rest.find('{') {
        let Some(close) = matching_brace(rest, open) else {
            break;
        };

        // Statements like `@import url(x);` can precede a rule.
        let prelude = rest[..open].rsplit(';').next().unwrap_or_default().trim();
        let body = &rest[open + 1..close];

        if !prelude.starts_with('@')
            && let Ok(selector) = Selector::parse(prelude)
        {
            rules.push(Rule {
                selector,
                declarations: parse_declarations(body),
            });
        }

        rest = &rest[close + 1..];
    }

    rules
}

fn matching_brace(css: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in css[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_declarations(body: &str) -> Vec<(String, String)> {
    body.split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(value);
            (!name.is_empty() && !value.is_empty()).then(|| (name, value.to_string()))
        })
        .collect()
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
