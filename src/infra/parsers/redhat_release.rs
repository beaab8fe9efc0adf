use std::sync::LazyLock;

use regex::Regex;

use crate::domain::distribution::Distribution;

struct Vendor {
    marker: &'static str,
    id: &'static str,
    name: &'static str,
    id_like: &'static [&'static str],
}

const RHEL_REBUILD_LIKE: &[&str] = &["rhel", "centos", "fedora"];

// Checked in order; the first marker found in the lowercased line wins.
const VENDORS: &[Vendor] = &[
    Vendor {
        marker: "red hat",
        id: "rhel",
        name: "Red Hat Enterprise Linux",
        id_like: &[],
    },
    Vendor {
        marker: "centos",
        id: "centos",
        name: "CentOS Linux",
        id_like: &[],
    },
    Vendor {
        marker: "fedora",
        id: "fedora",
        name: "Fedora Linux",
        id_like: &[],
    },
    Vendor {
        marker: "rocky",
        id: "rocky",
        name: "Rocky Linux",
        id_like: RHEL_REBUILD_LIKE,
    },
    Vendor {
        marker: "alma",
        id: "almalinux",
        name: "AlmaLinux",
        id_like: RHEL_REBUILD_LIKE,
    },
];

const GENERIC_VENDOR: Vendor = Vendor {
    marker: "",
    id: "rhel",
    name: "RHEL-based",
    id_like: &[],
};

static RELEASE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)release").expect("release keyword regex is valid"));

/// Parses the single free-text line of `/etc/redhat-release`, e.g.
/// `Red Hat Enterprise Linux release 9.0 (Plow)`.
pub fn parse_redhat_release(contents: &str) -> Distribution {
    let line = contents.trim();
    let lowercased = line.to_lowercase();

    let vendor = VENDORS
        .iter()
        .find(|vendor| lowercased.contains(vendor.marker))
        .unwrap_or(&GENERIC_VENDOR);

    Distribution::builder()
        .id(vendor.id)
        .name(vendor.name)
        .pretty_name(line)
        .version_id(release_version(line))
        .id_like(vendor.id_like.iter().copied())
        .build()
}

fn release_version(line: &str) -> &str {
    let Some(keyword) = RELEASE_KEYWORD.find(line) else {
        return "";
    };

    let remainder = line[keyword.end()..].trim();
    remainder.split(' ').next().unwrap_or(remainder)
}
