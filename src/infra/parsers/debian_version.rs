use crate::domain::distribution::Distribution;

const DEBIAN_NAME: &str = "Debian GNU/Linux";

pub fn parse_debian_version(contents: &str) -> Distribution {
    let contents = contents.trim();

    let (version_id, codename) = match contents.split_once('/') {
        Some((codename, _)) => ("", codename.trim()),
        None => (contents, ""),
    };

    let pretty_name = if !version_id.is_empty() {
        format!("{DEBIAN_NAME} {version_id}")
    } else if !codename.is_empty() {
        format!("{DEBIAN_NAME} ({codename})")
    } else {
        DEBIAN_NAME.to_string()
    };

    Distribution::builder()
        .id("debian")
        .name(DEBIAN_NAME)
        .version_id(version_id)
        .version_codename(codename)
        .pretty_name(pretty_name)
        .build()
}
