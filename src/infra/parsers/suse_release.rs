use crate::domain::distribution::Distribution;

pub fn parse_suse_release(contents: &str) -> Distribution {
    let mut lines = contents.lines().map(str::trim);

    let name = lines
        .clone()
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    let version_id = lines
        .find_map(|line| {
            line.starts_with("VERSION")
                .then(|| line.split_once('='))
                .flatten()
        })
        .map(|(_, version)| version.trim())
        .unwrap_or_default();

    Distribution::builder()
        .id(suse_id(name))
        .name(name)
        .pretty_name(name)
        .version_id(version_id)
        .build()
}

fn suse_id(name: &str) -> &'static str {
    let name = name.to_lowercase();

    if name.contains("tumbleweed") {
        "opensuse-tumbleweed"
    } else if name.contains("leap") {
        "opensuse-leap"
    } else if name.contains("sles") || name.contains("enterprise") {
        "sles"
    } else {
        "opensuse"
    }
}
