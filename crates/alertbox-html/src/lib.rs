//! Alertbox's markup renderer.
//!
//! Turns an [`AlertConfig`] into a markup fragment of the form
//!
//! ```text
//! <div class="alert-box success" data-id="1">message<a class="close" href="">×</a></div>
//! ```
//!
//! Rendering is a pure function of the configuration: the same configuration
//! always produces byte-identical output and no state is shared between
//! calls.

mod encode;

pub use self::encode::{html, write_html};

use std::fmt;

use alertbox_library::alert::{AlertBuilder, AlertConfig, AlertText};
use alertbox_library::diag::{warning, Sink, StrResult};
use alertbox_library::html::{HtmlAttrs, HtmlElement, HtmlNode};
use ecow::{EcoString, EcoVec};

/// The class every alert's wrapping element carries.
pub const ALERT_CLASS: &str = "alert-box";

/// The class of the close button.
pub const CLOSE_CLASS: &str = "close";

/// The content of the close button, a multiplication sign.
pub const CLOSE_GLYPH: &str = "\u{d7}";

/// Render an alert into a markup string.
pub fn render(config: &AlertConfig) -> String {
    render_with(config, &mut Sink::new())
}

/// Render an alert into a markup string, reporting warnings into the sink.
pub fn render_with(config: &AlertConfig, sink: &mut Sink) -> String {
    html(&alert(config, sink))
}

/// Render an alert into an output sink provided by the host.
///
/// Only fails if the writer does.
pub fn render_into<W: fmt::Write + ?Sized>(config: &AlertConfig, out: &mut W) -> fmt::Result {
    write_html(out, &alert(config, &mut Sink::new()))
}

/// Build the element tree of an alert.
pub fn alert(config: &AlertConfig, sink: &mut Sink) -> HtmlElement {
    log::debug!(
        "rendering {} alert with {} extra attributes",
        config.style(),
        config.attrs().len()
    );

    let mut classes: EcoVec<EcoString> = EcoVec::new();
    classes.push(ALERT_CLASS.into());
    if let Some(class) = config.style().class() {
        classes.push(class.into());
    }

    let mut rest = HtmlAttrs::default();
    for (key, value) in config.attrs() {
        if is_class(key) {
            merge_classes(&mut classes, value, sink);
        } else {
            rest.push(key.clone(), value.clone());
        }
    }

    let mut attrs = HtmlAttrs::default();
    attrs.push("class", join(&classes));
    attrs.0.extend(rest.0);

    let mut children = vec![match config.text() {
        AlertText::Text(text) => HtmlNode::Text(text.clone()),
        AlertText::Markup(markup) => HtmlNode::Raw(markup.clone()),
    }];

    if !config.hide_close_button() {
        children.push(close_button().into());
    }

    HtmlElement { tag: "div".into(), attrs, children }
}

/// The dismiss anchor appended to alerts.
fn close_button() -> HtmlElement {
    HtmlElement::new("a")
        .with_attr("class", CLOSE_CLASS)
        .with_attr("href", "")
        .with_children(vec![HtmlNode::text(CLOSE_GLYPH)])
}

/// Whether an attribute name refers to the class list.
///
/// Attribute names are case-insensitive in HTML.
fn is_class(key: &str) -> bool {
    key.eq_ignore_ascii_case("class")
}

/// Append caller-supplied class tokens, skipping ones already present.
fn merge_classes(classes: &mut EcoVec<EcoString>, value: &str, sink: &mut Sink) {
    for token in value.split_ascii_whitespace() {
        if classes.iter().any(|c| c == token) {
            sink.warn(warning!("duplicate class `{}` was dropped", token));
            continue;
        }
        classes.push(token.into());
    }
}

/// Join class tokens into an attribute value.
fn join(classes: &[EcoString]) -> EcoString {
    let mut joined = EcoString::new();
    for (i, class) in classes.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(class);
    }
    joined
}

/// Terminal rendering for [`AlertBuilder`].
pub trait RenderAlert {
    /// Build the configuration and render it.
    fn render(self) -> StrResult<String>;
}

impl RenderAlert for AlertBuilder {
    fn render(self) -> StrResult<String> {
        Ok(render(&self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use alertbox_library::alert::AlertStyle;

    use super::*;

    #[test]
    fn test_default_alert() {
        let config = AlertConfig::new("message");
        assert_eq!(
            render(&config),
            "<div class=\"alert-box\">message<a class=\"close\" href=\"\">×</a></div>"
        );
    }

    #[test]
    fn test_success_alert() {
        let out = AlertConfig::builder()
            .text("message")
            .style(AlertStyle::Success)
            .render()
            .unwrap();
        assert_eq!(
            out,
            "<div class=\"alert-box success\">message<a class=\"close\" href=\"\">×</a></div>"
        );
    }

    #[test]
    fn test_warning_without_close_button() {
        let out = AlertConfig::builder()
            .text("message")
            .style(AlertStyle::Warning)
            .hide_close_button(true)
            .render()
            .unwrap();
        assert_eq!(out, "<div class=\"alert-box warning\">message</div>");
    }

    #[test]
    fn test_info_with_attrs() {
        let out = AlertConfig::builder()
            .text("message")
            .style(AlertStyle::Info)
            .attr("data-id", "1")
            .render()
            .unwrap();
        assert_eq!(
            out,
            "<div class=\"alert-box info\" data-id=\"1\">message<a class=\"close\" href=\"\">×</a></div>"
        );
    }

    #[test]
    fn test_empty_text() {
        let out = AlertConfig::builder().hide_close_button(true).render().unwrap();
        assert_eq!(out, "<div class=\"alert-box\"></div>");
    }

    #[test]
    fn test_text_is_escaped() {
        let config = AlertConfig::new("<script>alert('x')</script>");
        assert_eq!(
            render(&config),
            "<div class=\"alert-box\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;\
             <a class=\"close\" href=\"\">×</a></div>"
        );
    }

    #[test]
    fn test_markup_is_verbatim() {
        let out = AlertConfig::builder()
            .markup("<strong>Saved</strong> your file")
            .hide_close_button(true)
            .render()
            .unwrap();
        assert_eq!(out, "<div class=\"alert-box\"><strong>Saved</strong> your file</div>");
    }

    #[test]
    fn test_class_attr_is_merged() {
        let config = AlertConfig::builder()
            .text("m")
            .style(AlertStyle::Success)
            .attr("id", "x")
            .attr("class", "  wide success  round alert-box ")
            .attr("role", "alert")
            .hide_close_button(true)
            .build()
            .unwrap();
        let mut sink = Sink::new();
        assert_eq!(
            render_with(&config, &mut sink),
            "<div class=\"alert-box success wide round\" id=\"x\" role=\"alert\">m</div>"
        );
        let messages: Vec<_> = sink.warnings().iter().map(|w| w.to_string()).collect();
        assert_eq!(
            messages,
            [
                "duplicate class `success` was dropped",
                "duplicate class `alert-box` was dropped",
            ]
        );
    }

    #[test]
    fn test_class_attr_case_insensitive() {
        let config = AlertConfig::builder()
            .text("m")
            .attr("CLASS", "big")
            .hide_close_button(true)
            .build()
            .unwrap();
        assert_eq!(render(&config), "<div class=\"alert-box big\">m</div>");
    }

    #[test]
    fn test_attr_names_fold_case() {
        let out = AlertConfig::builder()
            .text("m")
            .attr("ID", "a")
            .attr("Title", "t")
            .attr("id", "b")
            .hide_close_button(true)
            .render()
            .unwrap();
        assert_eq!(out, "<div class=\"alert-box\" id=\"b\" title=\"t\">m</div>");
    }

    #[test]
    fn test_render_into_writer() {
        let config = AlertConfig::new("hi");
        let mut out = String::from("<body>");
        render_into(&config, &mut out).unwrap();
        assert_eq!(
            out,
            "<body><div class=\"alert-box\">hi<a class=\"close\" href=\"\">×</a></div>"
        );
    }

    #[test]
    fn test_invalid_style_fails_before_render() {
        let error = AlertConfig::builder().text("m").style_name("danger").render();
        assert!(error.unwrap_err().starts_with("unknown alert style"));
    }
}
