//! HTML attribute to JSX prop translation.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::node::AttrValue;
use crate::style::serialize_style;

/// HTML attribute names that JSX spells differently.
static RENAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("class", "className"),
        ("for", "htmlFor"),
        ("tabindex", "tabIndex"),
        ("readonly", "readOnly"),
        ("maxlength", "maxLength"),
        ("minlength", "minLength"),
        ("cellpadding", "cellPadding"),
        ("cellspacing", "cellSpacing"),
        ("rowspan", "rowSpan"),
        ("colspan", "colSpan"),
        ("usemap", "useMap"),
        ("frameborder", "frameBorder"),
        ("contenteditable", "contentEditable"),
        ("crossorigin", "crossOrigin"),
        ("datetime", "dateTime"),
        ("hreflang", "hrefLang"),
        ("http-equiv", "httpEquiv"),
        ("accept-charset", "acceptCharset"),
        ("accesskey", "accessKey"),
        ("autocomplete", "autoComplete"),
        ("autofocus", "autoFocus"),
        ("autoplay", "autoPlay"),
        ("charset", "charSet"),
        ("enctype", "encType"),
        ("formaction", "formAction"),
        ("formenctype", "formEncType"),
        ("formmethod", "formMethod"),
        ("formnovalidate", "formNoValidate"),
        ("formtarget", "formTarget"),
        ("inputmode", "inputMode"),
        ("novalidate", "noValidate"),
        ("playsinline", "playsInline"),
        ("referrerpolicy", "referrerPolicy"),
        ("spellcheck", "spellCheck"),
        ("srcdoc", "srcDoc"),
        ("srclang", "srcLang"),
        ("srcset", "srcSet"),
        // SVG presentation attributes
        ("alignment-baseline", "alignmentBaseline"),
        ("baseline-shift", "baselineShift"),
        ("clip-path", "clipPath"),
        ("clip-rule", "clipRule"),
        ("color-interpolation", "colorInterpolation"),
        ("color-interpolation-filters", "colorInterpolationFilters"),
        ("dominant-baseline", "dominantBaseline"),
        ("fill-opacity", "fillOpacity"),
        ("fill-rule", "fillRule"),
        ("flood-color", "floodColor"),
        ("flood-opacity", "floodOpacity"),
        ("font-family", "fontFamily"),
        ("font-size", "fontSize"),
        ("font-style", "fontStyle"),
        ("font-weight", "fontWeight"),
        ("letter-spacing", "letterSpacing"),
        ("lighting-color", "lightingColor"),
        ("marker-end", "markerEnd"),
        ("marker-mid", "markerMid"),
        ("marker-start", "markerStart"),
        ("paint-order", "paintOrder"),
        ("pointer-events", "pointerEvents"),
        ("shape-rendering", "shapeRendering"),
        ("stop-color", "stopColor"),
        ("stop-opacity", "stopOpacity"),
        ("stroke-dasharray", "strokeDasharray"),
        ("stroke-dashoffset", "strokeDashoffset"),
        ("stroke-linecap", "strokeLinecap"),
        ("stroke-linejoin", "strokeLinejoin"),
        ("stroke-miterlimit", "strokeMiterlimit"),
        ("stroke-opacity", "strokeOpacity"),
        ("stroke-width", "strokeWidth"),
        ("text-anchor", "textAnchor"),
        ("text-decoration", "textDecoration"),
        ("text-rendering", "textRendering"),
        ("vector-effect", "vectorEffect"),
        ("word-spacing", "wordSpacing"),
        ("writing-mode", "writingMode"),
        // Namespaced SVG attributes
        ("xlink:href", "xlinkHref"),
        ("xlink:title", "xlinkTitle"),
        ("xml:lang", "xmlLang"),
        ("xml:space", "xmlSpace"),
        ("xmlns:xlink", "xmlnsXlink"),
    ])
});

/// Map an HTML attribute name to its JSX name.
///
/// Lookup is exact and case-sensitive. Names without an entry (`data-*`, `aria-*`, `id`,
/// ...) are returned unchanged.
pub fn rename(key: &str) -> &str {
    RENAMES.get(key).copied().unwrap_or(key)
}

/// Render a single attribute as a JSX prop.
///
/// Returns `None` when the attribute produces no output: a `false` flag, or a `style`
/// with no usable declarations.
pub fn render_attribute(key: &str, value: &AttrValue) -> Option<String> {
    if key == "style" {
        return render_style(value);
    }

    let jsx_key = rename(key);

    match value {
        AttrValue::Bool(true) => Some(jsx_key.to_string()),
        AttrValue::Bool(false) => None,
        // disabled="disabled" is the HTML spelling of a true flag
        AttrValue::String(s) if s == key => Some(jsx_key.to_string()),
        AttrValue::String(s) => Some(format!(r#"{}="{}""#, jsx_key, escape_quotes(s))),
        AttrValue::List(tokens) => Some(format!(
            r#"{}="{}""#,
            jsx_key,
            escape_quotes(&tokens.join(" "))
        )),
    }
}

/// Render all attributes of an element, each with a single leading space.
pub fn render_attributes(attributes: &IndexMap<String, AttrValue>) -> String {
    let mut out = String::new();

    for (key, value) in attributes {
        if let Some(rendered) = render_attribute(key, value) {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}

fn render_style(value: &AttrValue) -> Option<String> {
    let raw = match value {
        AttrValue::String(s) => s.clone(),
        AttrValue::List(tokens) => tokens.join(" "),
        AttrValue::Bool(_) => {
            tracing::debug!("Dropping style attribute without declarations");
            return None;
        }
    };

    let object = serialize_style(&raw)?;
    Some(format!("style={{{object}}}"))
}

/// Double quotes would close the attribute literal early.
fn escape_quotes(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains('"') {
        value.replace('"', "&quot;").into()
    } else {
        value.into()
    }
}
