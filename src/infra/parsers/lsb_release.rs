use crate::domain::distribution::Distribution;

use super::key_value::key_value_pairs;

pub fn parse_lsb_release(contents: &str) -> Distribution {
    key_value_pairs(contents)
        .fold(Distribution::builder(), |builder, (key, value)| match key {
            "DISTRIB_ID" => builder.id(value.to_lowercase()).name(value),
            "DISTRIB_RELEASE" => builder.version_id(value),
            "DISTRIB_CODENAME" => builder.version_codename(value),
            "DISTRIB_DESCRIPTION" => builder.pretty_name(value),
            _ => builder,
        })
        .build()
}
