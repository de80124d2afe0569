//! Helpers available to user-supplied templates.

use handlebars::Handlebars;
use serde_json::Value;

/// Render a context value the way it would appear in `{{value}}`.
fn param_text(h: &handlebars::Helper) -> String {
    match h.param(0).map(|v| v.value()) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn uppercase_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    out.write(&param_text(h).to_uppercase())?;
    Ok(())
}

pub(crate) fn lowercase_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    out.write(&param_text(h).to_lowercase())?;
    Ok(())
}

/// Percent-encode a value for use inside a URL query or path segment.
pub(crate) fn urlencode_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let encoded: String = url::form_urlencoded::byte_serialize(param_text(h).as_bytes()).collect();
    out.write(&encoded)?;
    Ok(())
}
