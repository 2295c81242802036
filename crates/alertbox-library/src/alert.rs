//! The alert model.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use ecow::EcoString;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::diag::{ConfigError, StrResult};
use crate::html::check_attr_name;

/// The visual variant of an alert.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AlertStyle {
    /// The plain alert. Contributes no class token.
    #[default]
    Default,
    /// A successful outcome.
    Success,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    Info,
}

impl AlertStyle {
    /// All styles, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Success, Self::Warning, Self::Info];

    /// The lowercase name of the style.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// The class token this style adds to the wrapping element, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            other => Some(other.name()),
        }
    }
}

impl Display for AlertStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlertStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStyle(s.into()))
    }
}

impl Serialize for AlertStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AlertStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = EcoString::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// The message body of an alert.
///
/// Text is escaped when the alert is rendered. Markup is trusted and written
/// out verbatim, so it must only be built from content the caller controls.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum AlertText {
    /// Plain text.
    Text(EcoString),
    /// Pre-escaped markup.
    Markup(EcoString),
}

impl AlertText {
    /// The underlying string, escaped or not.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Markup(s) => s,
        }
    }

    /// Whether this is trusted markup.
    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}

impl Default for AlertText {
    fn default() -> Self {
        Self::Text(EcoString::new())
    }
}

impl<S: Into<EcoString>> From<S> for AlertText {
    fn from(text: S) -> Self {
        Self::Text(text.into())
    }
}

/// Everything needed to render one alert.
///
/// A configuration is immutable once built. Use [`AlertBuilder`] to derive a
/// modified copy.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AlertConfig {
    text: AlertText,
    style: AlertStyle,
    hide_close_button: bool,
    attrs: IndexMap<EcoString, EcoString>,
}

impl AlertConfig {
    /// A default alert showing the given text.
    pub fn new(text: impl Into<AlertText>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Start building an alert.
    pub fn builder() -> AlertBuilder {
        AlertBuilder::default()
    }

    /// Turn the configuration back into a builder.
    pub fn into_builder(self) -> AlertBuilder {
        AlertBuilder {
            text: self.text,
            style: Ok(self.style),
            hide_close_button: self.hide_close_button,
            attrs: self.attrs,
        }
    }

    /// The message body.
    pub fn text(&self) -> &AlertText {
        &self.text
    }

    /// The visual variant.
    pub fn style(&self) -> AlertStyle {
        self.style
    }

    /// Whether the trailing close button is omitted.
    pub fn hide_close_button(&self) -> bool {
        self.hide_close_button
    }

    /// Extra attributes for the wrapping element, in insertion order.
    ///
    /// May contain a `class` entry whose tokens are merged into the class
    /// list rather than written out separately.
    pub fn attrs(&self) -> &IndexMap<EcoString, EcoString> {
        &self.attrs
    }
}

/// Accumulates an [`AlertConfig`].
///
/// The last write to a field wins. Invalid input is reported by
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    text: AlertText,
    style: Result<AlertStyle, ConfigError>,
    hide_close_button: bool,
    attrs: IndexMap<EcoString, EcoString>,
}

impl Default for AlertBuilder {
    fn default() -> Self {
        Self {
            text: AlertText::default(),
            style: Ok(AlertStyle::Default),
            hide_close_button: false,
            attrs: IndexMap::new(),
        }
    }
}

impl AlertBuilder {
    /// Set the message to plain text.
    pub fn text(mut self, text: impl Into<EcoString>) -> Self {
        self.text = AlertText::Text(text.into());
        self
    }

    /// Set the message to trusted markup.
    pub fn markup(mut self, markup: impl Into<EcoString>) -> Self {
        self.text = AlertText::Markup(markup.into());
        self
    }

    /// Set the style.
    pub fn style(mut self, style: AlertStyle) -> Self {
        self.style = Ok(style);
        self
    }

    /// Set the style by name.
    pub fn style_name(mut self, name: &str) -> Self {
        self.style = name.parse();
        self
    }

    /// Whether to omit the close button.
    pub fn hide_close_button(mut self, hide: bool) -> Self {
        self.hide_close_button = hide;
        self
    }

    /// Add an attribute to the wrapping element.
    ///
    /// Names are ASCII-lowercased, as HTML attribute names are
    /// case-insensitive. Writing the same name again replaces the value but
    /// keeps the attribute's original position.
    pub fn attr(mut self, key: impl Into<EcoString>, value: impl Into<EcoString>) -> Self {
        let mut key: EcoString = key.into();
        if key.bytes().any(|b| b.is_ascii_uppercase()) {
            key = key.as_str().to_ascii_lowercase().into();
        }
        self.attrs.insert(key, value.into());
        self
    }

    /// Add several attributes in order.
    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<EcoString>,
        V: Into<EcoString>,
    {
        for (key, value) in attrs {
            self = self.attr(key, value);
        }
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> StrResult<AlertConfig> {
        let style = self.style?;
        for key in self.attrs.keys() {
            check_attr_name(key)?;
        }
        log::trace!("built {style} alert with {} extra attributes", self.attrs.len());
        Ok(AlertConfig {
            text: self.text,
            style,
            hide_close_button: self.hide_close_button,
            attrs: self.attrs,
        })
    }
}

impl<'de> Deserialize<'de> for AlertConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAlertConfig::deserialize(deserializer)?;
        let text = raw.text.unwrap_or_default();
        let builder = if raw.markup {
            AlertBuilder::default().markup(text)
        } else {
            AlertBuilder::default().text(text)
        };
        builder
            .style(raw.style)
            .hide_close_button(raw.hide_close_button)
            .attrs(raw.attrs)
            .build()
            .map_err(serde::de::Error::custom)
    }
}

/// The on-disk shape of an alert configuration.
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawAlertConfig {
    /// A missing or null text renders as an empty message.
    #[serde(default)]
    text: Option<EcoString>,
    #[serde(default)]
    markup: bool,
    #[serde(default)]
    style: AlertStyle,
    #[serde(default)]
    hide_close_button: bool,
    #[serde(default)]
    attrs: IndexMap<EcoString, EcoString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_class() {
        assert_eq!(AlertStyle::Default.class(), None);
        assert_eq!(AlertStyle::Success.class(), Some("success"));
        assert_eq!(AlertStyle::Warning.class(), Some("warning"));
        assert_eq!(AlertStyle::Info.class(), Some("info"));
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("Success".parse::<AlertStyle>(), Ok(AlertStyle::Success));
        assert_eq!(" info ".parse::<AlertStyle>(), Ok(AlertStyle::Info));
        assert_eq!("DEFAULT".parse::<AlertStyle>(), Ok(AlertStyle::Default));
        assert_eq!(
            "danger".parse::<AlertStyle>(),
            Err(ConfigError::UnknownStyle("danger".into()))
        );
    }

    #[test]
    fn test_builder_last_write_wins() {
        let config = AlertConfig::builder()
            .text("first")
            .style_name("bogus")
            .style(AlertStyle::Warning)
            .text("second")
            .attr("data-id", "1")
            .attr("role", "alert")
            .attr("data-id", "2")
            .build()
            .unwrap();
        assert_eq!(config.text(), &AlertText::Text("second".into()));
        assert_eq!(config.style(), AlertStyle::Warning);
        let attrs: Vec<_> =
            config.attrs().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(attrs, [("data-id", "2"), ("role", "alert")]);
    }

    #[test]
    fn test_builder_rejects_unknown_style() {
        let error = AlertConfig::builder().text("x").style_name("danger").build();
        assert_eq!(
            error.unwrap_err(),
            "unknown alert style `danger` (expected one of default, success, warning, info)"
        );
    }

    #[test]
    fn test_builder_rejects_bad_attr_name() {
        let error = AlertConfig::builder().attr("on click", "x").build();
        assert_eq!(error.unwrap_err(), "`on click` is not a valid attribute name");
    }

    #[test]
    fn test_builder_lowercases_attr_names() {
        let config = AlertConfig::builder()
            .attr("Data-ID", "1")
            .attr("role", "alert")
            .attr("data-id", "2")
            .build()
            .unwrap();
        let attrs: Vec<_> =
            config.attrs().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(attrs, [("data-id", "2"), ("role", "alert")]);
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let names = serde_json::to_string(&AlertStyle::ALL).unwrap();
        assert_eq!(names, r#"["default","success","warning","info"]"#);
    }

    #[test]
    fn test_into_builder_roundtrip() {
        let config = AlertConfig::builder()
            .markup("<b>hi</b>")
            .style(AlertStyle::Info)
            .hide_close_button(true)
            .build()
            .unwrap();
        let again = config.clone().into_builder().build().unwrap();
        assert_eq!(config, again);
        assert!(again.text().is_markup());
    }

    #[test]
    fn test_deserialize_toml() {
        let config: AlertConfig = toml::from_str(
            r#"
            text = "Saved"
            style = "success"
            hide-close-button = true

            [attrs]
            data-id = "1"
            role = "status"
            "#,
        )
        .unwrap();
        assert_eq!(config.text().as_str(), "Saved");
        assert_eq!(config.style(), AlertStyle::Success);
        assert!(config.hide_close_button());
        let keys: Vec<_> = config.attrs().keys().map(EcoString::as_str).collect();
        assert_eq!(keys, ["data-id", "role"]);
    }

    #[test]
    fn test_deserialize_json_null_text() {
        let config: AlertConfig = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(config.text(), &AlertText::default());
        assert_eq!(config.style(), AlertStyle::Default);
        assert!(!config.hide_close_button());
    }

    #[test]
    fn test_deserialize_rejects_unknown_style() {
        let error = serde_json::from_str::<AlertConfig>(r#"{"style": "danger"}"#);
        assert!(error.unwrap_err().to_string().contains("unknown alert style `danger`"));
    }
}
