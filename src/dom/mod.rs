// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! In-process model of a rendered page.
//!
//! A [`Document`] maps element ids to their current content and state. Render
//! functions fully replace the content of the elements they own on every
//! call, so there is no diffing and no stale markup survives a render.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Element {
    /// Inner markup, already escaped.
    pub(crate) html: String,
    /// Plain text content, escaped when exported.
    pub(crate) text: String,
    /// Current value of form inputs.
    pub(crate) value: String,
    pub(crate) style: String,
    pub(crate) hidden: bool,
    pub(crate) disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Document {
    title: String,
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            elements: BTreeMap::new(),
        }
    }

    /// Returns the element with `id`, creating an empty one if needed.
    pub(crate) fn el(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub(crate) fn set_html(&mut self, id: &str, html: String) {
        self.el(id).html = html;
    }

    pub(crate) fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.el(id).text = text.into();
    }

    pub(crate) fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.el(id).hidden = hidden;
    }

    pub(crate) fn set_disabled(&mut self, id: &str, disabled: bool) {
        self.el(id).disabled = disabled;
    }

    #[cfg(test)]
    pub(crate) fn html(&self, id: &str) -> &str {
        self.get(id).map(|e| e.html.as_str()).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn text(&self, id: &str) -> &str {
        self.get(id).map(|e| e.text.as_str()).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn value(&self, id: &str) -> &str {
        self.get(id).map(|e| e.value.as_str()).unwrap_or_default()
    }

    /// Unknown elements count as visible, as an absent element would not be
    /// hidden by a stylesheet either.
    pub(crate) fn is_hidden(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.hidden)
    }

    #[cfg(test)]
    pub(crate) fn is_disabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.disabled)
    }

    /// Serializes the document as a standalone HTML page, one `div` per
    /// element in id order.
    pub(crate) fn to_html(&self) -> String {
        let mut out = format!(
            "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n",
            escape(&self.title)
        );

        for (id, el) in &self.elements {
            out.push_str(&format!("<div id=\"{}\"", escape(id)));
            if el.hidden {
                out.push_str(" hidden");
            }
            if el.disabled {
                out.push_str(" aria-disabled=\"true\"");
            }
            if !el.style.is_empty() {
                out.push_str(&format!(" style=\"{}\"", escape(&el.style)));
            }
            if !el.value.is_empty() {
                out.push_str(&format!(" data-value=\"{}\"", escape(&el.value)));
            }
            out.push('>');
            out.push_str(&escape(&el.text));
            out.push_str(&el.html);
            out.push_str("</div>\n");
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Escapes text for use in HTML content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Mr. Morale & <the> \"Big\" 'Steppers'"), "Mr. Morale &amp; &lt;the&gt; &quot;Big&quot; &#39;Steppers&#39;");
    }

    #[test]
    fn test_missing_elements_read_as_empty() {
        let doc = Document::new("t");
        assert_eq!(doc.html("x"), "");
        assert_eq!(doc.text("x"), "");
        assert!(!doc.is_hidden("x"));
        assert!(!doc.is_disabled("x"));
    }

    #[test]
    fn test_to_html_exports_state() {
        let mut doc = Document::new("Darify");
        doc.set_text("name", "A & B");
        doc.set_hidden("empty", true);
        doc.set_html("list", "<p>x</p>".to_string());

        let html = doc.to_html();
        assert!(html.contains("<title>Darify</title>"));
        assert!(html.contains("<div id=\"empty\" hidden></div>"));
        assert!(html.contains("<div id=\"list\"><p>x</p></div>"));
        assert!(html.contains("<div id=\"name\">A &amp; B</div>"));
    }
}
