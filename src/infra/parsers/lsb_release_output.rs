use crate::domain::distribution::Distribution;

const ABSENT_CODENAME: &str = "n/a";

pub fn parse_lsb_release_output(output: &str) -> Distribution {
    output
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .fold(Distribution::builder(), |builder, (key, value)| match key {
            "Distributor ID" => builder.id(value.to_lowercase()).name(value),
            "Description" => builder.pretty_name(value),
            "Release" => builder.version_id(value),
            "Codename" if value != ABSENT_CODENAME => builder.version_codename(value),
            _ => builder,
        })
        .build()
}
