use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::{Serialize, Serializer};

#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub enum ProbeSource {
    #[default]
    Unspecified,
    File(PathBuf),
    Command(String),
}

impl Display for ProbeSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeSource::Unspecified => f.write_str("unspecified"),
            ProbeSource::File(path) => write!(f, "{}", path.display()),
            ProbeSource::Command(command) => write!(f, "`{command}`"),
        }
    }
}

impl Serialize for ProbeSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
