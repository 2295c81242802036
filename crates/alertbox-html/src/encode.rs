use std::fmt::{self, Write};

use alertbox_library::html::{HtmlElement, HtmlNode};

/// Encodes an HTML element into a string.
pub fn html(element: &HtmlElement) -> String {
    let mut buf = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_element(&mut buf, element);
    log::trace!("encoded <{}> into {} bytes", element.tag.as_str(), buf.len());
    buf
}

/// Encodes an HTML element into an arbitrary output sink.
pub fn write_html<W: Write + ?Sized>(w: &mut W, element: &HtmlElement) -> fmt::Result {
    write_element(w, element)
}

/// Encode an HTML node into the writer.
fn write_node<W: Write + ?Sized>(w: &mut W, node: &HtmlNode) -> fmt::Result {
    match node {
        HtmlNode::Text(text) => write_text(w, text),
        HtmlNode::Raw(markup) => w.write_str(markup),
        HtmlNode::Element(element) => write_element(w, element),
    }
}

/// Encode plain text into the writer.
fn write_text<W: Write + ?Sized>(w: &mut W, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '&' => w.write_str("&amp;")?,
            '\'' => w.write_str("&#39;")?,
            '"' => w.write_str("&quot;")?,
            _ => w.write_char(c)?,
        }
    }
    Ok(())
}

/// Encode a double-quoted attribute value into the writer.
fn write_attr_value<W: Write + ?Sized>(w: &mut W, value: &str) -> fmt::Result {
    w.write_char('"')?;
    for c in value.chars() {
        match c {
            '&' => w.write_str("&amp;")?,
            '"' => w.write_str("&quot;")?,
            _ => w.write_char(c)?,
        }
    }
    w.write_char('"')
}

/// Encode one element into the writer.
fn write_element<W: Write + ?Sized>(w: &mut W, element: &HtmlElement) -> fmt::Result {
    w.write_char('<')?;
    w.write_str(element.tag.as_str())?;

    for (key, value) in element.attrs.iter() {
        w.write_char(' ')?;
        w.write_str(key)?;
        w.write_char('=')?;
        write_attr_value(w, value)?;
    }

    w.write_char('>')?;

    if element.tag.is_void() {
        return Ok(());
    }

    for node in &element.children {
        write_node(w, node)?;
    }

    w.write_str("</")?;
    w.write_str(element.tag.as_str())?;
    w.write_char('>')
}
