use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Debian,
    Rhel,
    Arch,
    Suse,
    #[default]
    Unknown,
}

impl Family {
    pub fn is_known(&self) -> bool {
        !matches!(self, Family::Unknown)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Family::Debian => "debian",
            Family::Rhel => "rhel",
            Family::Arch => "arch",
            Family::Suse => "suse",
            Family::Unknown => "unknown",
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown distribution family: {0}")]
pub struct UnknownFamilyError(pub String);

impl FromStr for Family {
    type Err = UnknownFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debian" => Ok(Family::Debian),
            "rhel" => Ok(Family::Rhel),
            "arch" => Ok(Family::Arch),
            "suse" => Ok(Family::Suse),
            "unknown" => Ok(Family::Unknown),
            _ => Err(UnknownFamilyError(s.to_string())),
        }
    }
}

const DEBIAN_IDS: &[&str] = &[
    "debian",
    "ubuntu",
    "linuxmint",
    "pop",
    "elementary",
    "zorin",
    "kali",
    "mx",
    "lmde",
    "raspbian",
    "devuan",
];

const RHEL_IDS: &[&str] = &[
    "fedora",
    "rhel",
    "centos",
    "rocky",
    "almalinux",
    "ol",
    "amzn",
    "scientific",
    "oracle",
];

const ARCH_IDS: &[&str] = &[
    "arch",
    "manjaro",
    "endeavouros",
    "garuda",
    "artix",
    "arcolinux",
    "archcraft",
    "archbang",
];

const SUSE_IDS: &[&str] = &[
    "opensuse",
    "opensuse-leap",
    "opensuse-tumbleweed",
    "sles",
    "suse",
];

/// Maps a distribution id and its declared `ID_LIKE` list to a [`Family`].
pub fn classify<S: AsRef<str>>(id: &str, id_like: &[S]) -> Family {
    let id = id.trim().to_lowercase();

    if let Some(family) = direct_family(&id) {
        return family;
    }

    id_like
        .iter()
        .find_map(|like| derivative_family(&like.as_ref().trim().to_lowercase()))
        .unwrap_or(Family::Unknown)
}

fn direct_family(id: &str) -> Option<Family> {
    [
        (DEBIAN_IDS, Family::Debian),
        (RHEL_IDS, Family::Rhel),
        (ARCH_IDS, Family::Arch),
        (SUSE_IDS, Family::Suse),
    ]
    .into_iter()
    .find(|(ids, _)| ids.contains(&id))
    .map(|(_, family)| family)
}

fn derivative_family(like: &str) -> Option<Family> {
    match like {
        "debian" | "ubuntu" => Some(Family::Debian),
        "fedora" | "rhel" | "centos" => Some(Family::Rhel),
        "arch" => Some(Family::Arch),
        "suse" | "opensuse" => Some(Family::Suse),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Family, classify};

    const NO_LIKE: &[&str] = &[];

    #[rstest]
    #[case("ubuntu", Family::Debian)]
    #[case("debian", Family::Debian)]
    #[case("pop", Family::Debian)]
    #[case("raspbian", Family::Debian)]
    #[case("fedora", Family::Rhel)]
    #[case("ol", Family::Rhel)]
    #[case("amzn", Family::Rhel)]
    #[case("almalinux", Family::Rhel)]
    #[case("arch", Family::Arch)]
    #[case("endeavouros", Family::Arch)]
    #[case("archbang", Family::Arch)]
    #[case("opensuse-tumbleweed", Family::Suse)]
    #[case("sles", Family::Suse)]
    #[case("nixos", Family::Unknown)]
    #[case("", Family::Unknown)]
    fn it_classifies_known_ids_directly(#[case] id: &str, #[case] expected: Family) {
        assert_eq!(classify(id, NO_LIKE), expected);
    }

    #[test]
    fn it_ignores_the_case_of_the_id() {
        assert_eq!(classify("Ubuntu", NO_LIKE), Family::Debian);
        assert_eq!(classify("  RHEL ", NO_LIKE), Family::Rhel);
    }

    #[rstest]
    #[case(&["debian"], Family::Debian)]
    #[case(&["ubuntu"], Family::Debian)]
    #[case(&["rhel", "fedora"], Family::Rhel)]
    #[case(&["centos"], Family::Rhel)]
    #[case(&["arch"], Family::Arch)]
    #[case(&["suse"], Family::Suse)]
    #[case(&["opensuse"], Family::Suse)]
    #[case(&["nothing", "ARCH"], Family::Arch)]
    #[case(&["gentoo"], Family::Unknown)]
    fn it_falls_back_to_id_like_for_unlisted_ids(
        #[case] id_like: &[&str],
        #[case] expected: Family,
    ) {
        assert_eq!(classify("bluecat", id_like), expected);
    }

    #[test]
    fn it_prefers_the_direct_match_over_id_like() {
        assert_eq!(classify("manjaro", &["debian"]), Family::Arch);
    }

    #[test]
    fn it_takes_the_first_recognised_id_like_entry() {
        assert_eq!(classify("hybrid", &["suse", "debian"]), Family::Suse);
    }

    #[test]
    fn it_round_trips_the_family_names() {
        for family in [
            Family::Debian,
            Family::Rhel,
            Family::Arch,
            Family::Suse,
            Family::Unknown,
        ] {
            assert_eq!(family.to_string().parse::<Family>(), Ok(family));
        }
        assert!("gentoo".parse::<Family>().is_err());
        assert!(!Family::Unknown.is_known());
        assert!(Family::Suse.is_known());
    }
}
