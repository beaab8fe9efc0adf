use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::{Family, ProbeSource, classify};

#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct Distribution {
    id: String,
    name: String,
    version: String,
    version_id: String,
    version_codename: String,
    pretty_name: String,
    id_like: Vec<String>,
    home_url: String,
    support_url: String,
    build_id: String,
    family: Family,
    source: ProbeSource,
}

impl Distribution {
    pub fn builder() -> DistributionBuilder {
        DistributionBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    pub fn version_codename(&self) -> &str {
        &self.version_codename
    }

    pub fn pretty_name(&self) -> &str {
        &self.pretty_name
    }

    pub fn id_like(&self) -> &[String] {
        &self.id_like
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn support_url(&self) -> &str {
        &self.support_url
    }

    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn source(&self) -> &ProbeSource {
        &self.source
    }

    /// Leading component of `version_id`, e.g. `"9"` for `"9.3"`.
    pub fn major_version(&self) -> Option<&str> {
        self.version_id
            .split('.')
            .next()
            .map(str::trim)
            .filter(|major| !major.is_empty())
    }

    pub fn is_rolling(&self) -> bool {
        self.build_id == "rolling" || (self.version_id.is_empty() && !self.build_id.is_empty())
    }

    pub(crate) fn with_source(self, source: ProbeSource) -> Self {
        Self { source, ..self }
    }
}

impl Display for Distribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.pretty_name.is_empty() {
            return f.write_str(&self.pretty_name);
        }

        match (self.name.is_empty(), self.version_id.is_empty()) {
            (false, false) => write!(f, "{} {}", self.name, self.version_id),
            (false, true) => f.write_str(&self.name),
            _ => f.write_str(&self.id),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DistributionBuilder {
    id: String,
    name: String,
    version: String,
    version_id: String,
    version_codename: String,
    pretty_name: String,
    id_like: Vec<String>,
    home_url: String,
    support_url: String,
    build_id: String,
}

impl DistributionBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = version_id.into();
        self
    }

    pub fn version_codename(mut self, version_codename: impl Into<String>) -> Self {
        self.version_codename = version_codename.into();
        self
    }

    pub fn pretty_name(mut self, pretty_name: impl Into<String>) -> Self {
        self.pretty_name = pretty_name.into();
        self
    }

    pub fn id_like<I, S>(mut self, id_like: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id_like = id_like.into_iter().map(Into::into).collect();
        self
    }

    pub fn home_url(mut self, home_url: impl Into<String>) -> Self {
        self.home_url = home_url.into();
        self
    }

    pub fn support_url(mut self, support_url: impl Into<String>) -> Self {
        self.support_url = support_url.into();
        self
    }

    pub fn build_id(mut self, build_id: impl Into<String>) -> Self {
        self.build_id = build_id.into();
        self
    }

    pub fn build(self) -> Distribution {
        let family = classify(&self.id, self.id_like.as_slice());

        Distribution {
            id: self.id,
            name: self.name,
            version: self.version,
            version_id: self.version_id,
            version_codename: self.version_codename,
            pretty_name: self.pretty_name,
            id_like: self.id_like,
            home_url: self.home_url,
            support_url: self.support_url,
            build_id: self.build_id,
            family,
            source: ProbeSource::Unspecified,
        }
    }
}
