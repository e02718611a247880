//! Request URL and label formatting

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::LikeConfig;

/// Characters escaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode one form value the way browsers serialize ajax params (spaces as `+`)
fn encode_param(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Build the GET url for liking `treasure_id`
///
/// A missing id still produces the parameter, with an empty value.
pub fn request_url(config: &LikeConfig, treasure_id: Option<&str>) -> String {
    let separator = if config.endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        config.endpoint,
        separator,
        encode_param(&config.param),
        encode_param(treasure_id.unwrap_or_default()),
    )
}

/// Text shown on the button after a successful like
pub fn like_label(config: &LikeConfig, body: &str) -> String {
    format!("{}{}", config.label_prefix, body)
}
