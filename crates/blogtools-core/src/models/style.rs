use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Visual style of a blog, sampled from one element per category.
///
/// Every property is a CSS value string. Properties that could not be
/// resolved are empty strings, never absent, so callers can rely on the
/// full shape being present.
///
/// Deserialization is lenient: `null` or malformed properties and
/// categories read as empty, and numbers are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSummary {
    #[serde(deserialize_with = "loose_category")]
    pub typography: Typography,
    #[serde(deserialize_with = "loose_category")]
    pub colors: Colors,
    #[serde(deserialize_with = "loose_category")]
    pub spacing: Spacing,
    #[serde(deserialize_with = "loose_category")]
    pub components: Components,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    #[serde(deserialize_with = "loose_string")]
    pub font_family: String,
    #[serde(deserialize_with = "loose_string")]
    pub font_size: String,
    #[serde(deserialize_with = "loose_string")]
    pub line_height: String,
    #[serde(deserialize_with = "loose_string")]
    pub color: String,
    #[serde(deserialize_with = "loose_string")]
    pub heading_font_family: String,
    #[serde(deserialize_with = "loose_string")]
    pub heading_font_weight: String,
    #[serde(deserialize_with = "loose_string")]
    pub heading_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    #[serde(deserialize_with = "loose_string")]
    pub text: String,
    #[serde(deserialize_with = "loose_string")]
    pub background: String,
    #[serde(deserialize_with = "loose_string")]
    pub link: String,
    #[serde(deserialize_with = "loose_string")]
    pub accent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spacing {
    #[serde(deserialize_with = "loose_string")]
    pub paragraph_margin: String,
    #[serde(deserialize_with = "loose_string")]
    pub container_padding: String,
    #[serde(deserialize_with = "loose_string")]
    pub max_width: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    #[serde(deserialize_with = "loose_string")]
    pub button_background: String,
    #[serde(deserialize_with = "loose_string")]
    pub button_color: String,
    #[serde(deserialize_with = "loose_string")]
    pub button_border_radius: String,
    #[serde(deserialize_with = "loose_string")]
    pub button_padding: String,
    #[serde(deserialize_with = "loose_string")]
    pub button_border: String,
    #[serde(deserialize_with = "loose_string")]
    pub input_border: String,
    #[serde(deserialize_with = "loose_string")]
    pub input_border_radius: String,
    #[serde(deserialize_with = "loose_string")]
    pub input_padding: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Text(text) => text,
        LooseValue::Integer(n) => n.to_string(),
        LooseValue::Float(n) => n.to_string(),
        LooseValue::Other(_) => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseCategory<T> {
    Value(T),
    Other(IgnoredAny),
}

fn loose_category<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match LooseCategory::deserialize(deserializer)? {
        LooseCategory::Value(category) => category,
        LooseCategory::Other(_) => T::default(),
    })
}

/// One resolved property, as `(category, property, value)`.
pub type StyleEntry<'a> = (&'static str, &'static str, &'a str);

impl StyleSummary {
    /// All properties in a fixed order, including empty ones.
    pub fn entries(&self) -> Vec<StyleEntry<'_>> {
        let t = &self.typography;
        let c = &self.colors;
        let s = &self.spacing;
        let k = &self.components;
        vec![
            ("typography", "font-family", &t.font_family),
            ("typography", "font-size", &t.font_size),
            ("typography", "line-height", &t.line_height),
            ("typography", "color", &t.color),
            ("typography", "heading font-family", &t.heading_font_family),
            ("typography", "heading font-weight", &t.heading_font_weight),
            ("typography", "heading color", &t.heading_color),
            ("colors", "text", &c.text),
            ("colors", "background", &c.background),
            ("colors", "link", &c.link),
            ("colors", "accent", &c.accent),
            ("spacing", "paragraph margin", &s.paragraph_margin),
            ("spacing", "container padding", &s.container_padding),
            ("spacing", "max-width", &s.max_width),
            ("components", "button background", &k.button_background),
            ("components", "button color", &k.button_color),
            ("components", "button border-radius", &k.button_border_radius),
            ("components", "button padding", &k.button_padding),
            ("components", "button border", &k.button_border),
            ("components", "input border", &k.input_border),
            ("components", "input border-radius", &k.input_border_radius),
            ("components", "input padding", &k.input_padding),
        ]
        .into_iter()
        .map(|(cat, name, value)| (cat, name, value.as_str()))
        .collect()
    }

    /// Only the properties that resolved to a value.
    pub fn non_empty(&self) -> Vec<StyleEntry<'_>> {
        self.entries()
            .into_iter()
            .filter(|(_, _, value)| !value.is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().is_empty()
    }
}
