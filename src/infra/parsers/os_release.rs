use crate::domain::distribution::Distribution;

use super::key_value::key_value_pairs;

pub fn parse_os_release(contents: &str) -> Distribution {
    key_value_pairs(contents)
        .fold(Distribution::builder(), |builder, (key, value)| match key {
            "ID" => builder.id(value.to_lowercase()),
            "NAME" => builder.name(value),
            "VERSION" => builder.version(value),
            "VERSION_ID" => builder.version_id(value),
            "VERSION_CODENAME" => builder.version_codename(value),
            "PRETTY_NAME" => builder.pretty_name(value),
            "ID_LIKE" => builder.id_like(parse_id_like(value)),
            "HOME_URL" => builder.home_url(value),
            "SUPPORT_URL" => builder.support_url(value),
            "BUILD_ID" => builder.build_id(value),
            _ => builder,
        })
        .build()
}

fn parse_id_like(value: &str) -> Vec<String> {
    value
        .split(' ')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
