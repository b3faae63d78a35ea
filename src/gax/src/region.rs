// Copyright 2025 Oracle and/or its affiliates.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Regions, realms, and service endpoints.
//!
//! Each OCI region belongs to a realm. The realm determines the second level
//! domain of the service endpoints. The client libraries compute the default
//! endpoint of a service from a template such as
//! `https://licensemanager.{region}.oci.{secondLevelDomain}`.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::region::*;
//! let region = Region::parse("iad")?;
//! assert_eq!(region.id(), "us-ashburn-1");
//! assert_eq!(
//!     region.endpoint("https://licensemanager.{region}.oci.{secondLevelDomain}"),
//!     "https://licensemanager.us-ashburn-1.oci.oraclecloud.com"
//! );
//! # Ok::<(), Error>(())
//! ```

/// The environment variable consulted when the application does not
/// configure a region.
pub const REGION_ENV: &str = "OCI_REGION";

const REGION_PLACEHOLDER: &str = "{region}";
const DOMAIN_PLACEHOLDER: &str = "{secondLevelDomain}";

/// Errors resolving a region.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("no region configured, use `with_region()` or set OCI_REGION")]
    Missing,
    #[error("`{0}` is not a valid region identifier")]
    Invalid(String),
}

/// An OCI realm, a set of regions sharing the same endpoint domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Realm {
    /// The commercial realm.
    Oc1,
    /// The US government realm.
    Oc2,
    /// The US Department of Defense realm.
    Oc3,
    /// The UK government realm.
    Oc4,
}

impl Realm {
    /// The second level domain for service endpoints in this realm.
    pub fn second_level_domain(&self) -> &'static str {
        match self {
            Self::Oc1 => "oraclecloud.com",
            Self::Oc2 | Self::Oc3 => "oraclegovcloud.com",
            Self::Oc4 => "oraclegovcloud.uk",
        }
    }
}

// (short code, region identifier, realm)
const KNOWN_REGIONS: &[(&str, &str, Realm)] = &[
    ("iad", "us-ashburn-1", Realm::Oc1),
    ("phx", "us-phoenix-1", Realm::Oc1),
    ("sjc", "us-sanjose-1", Realm::Oc1),
    ("ord", "us-chicago-1", Realm::Oc1),
    ("yyz", "ca-toronto-1", Realm::Oc1),
    ("yul", "ca-montreal-1", Realm::Oc1),
    ("gru", "sa-saopaulo-1", Realm::Oc1),
    ("lhr", "uk-london-1", Realm::Oc1),
    ("cwl", "uk-cardiff-1", Realm::Oc1),
    ("fra", "eu-frankfurt-1", Realm::Oc1),
    ("ams", "eu-amsterdam-1", Realm::Oc1),
    ("zrh", "eu-zurich-1", Realm::Oc1),
    ("cdg", "eu-paris-1", Realm::Oc1),
    ("mad", "eu-madrid-1", Realm::Oc1),
    ("arn", "eu-stockholm-1", Realm::Oc1),
    ("bom", "ap-mumbai-1", Realm::Oc1),
    ("hyd", "ap-hyderabad-1", Realm::Oc1),
    ("icn", "ap-seoul-1", Realm::Oc1),
    ("nrt", "ap-tokyo-1", Realm::Oc1),
    ("kix", "ap-osaka-1", Realm::Oc1),
    ("sin", "ap-singapore-1", Realm::Oc1),
    ("syd", "ap-sydney-1", Realm::Oc1),
    ("mel", "ap-melbourne-1", Realm::Oc1),
    ("jed", "me-jeddah-1", Realm::Oc1),
    ("dxb", "me-dubai-1", Realm::Oc1),
    ("jnb", "af-johannesburg-1", Realm::Oc1),
    ("lfi", "us-langley-1", Realm::Oc2),
    ("luf", "us-luke-1", Realm::Oc2),
    ("ric", "us-gov-ashburn-1", Realm::Oc3),
    ("pia", "us-gov-chicago-1", Realm::Oc3),
    ("tus", "us-gov-phoenix-1", Realm::Oc3),
    ("ltn", "uk-gov-london-1", Realm::Oc4),
    ("brs", "uk-gov-cardiff-1", Realm::Oc4),
];

/// A resolved OCI region.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    id: String,
    realm: Realm,
}

impl Region {
    /// Parses a region identifier or a short region code.
    ///
    /// The match is case insensitive. Unknown identifiers that look like a
    /// region identifier (e.g. `xx-newcity-1`) are assumed to be in the
    /// commercial realm, new regions open regularly.
    pub fn parse(value: &str) -> Result<Self, Error> {
        let normalized = value.trim().to_ascii_lowercase();
        if let Some((_, id, realm)) = KNOWN_REGIONS
            .iter()
            .find(|(code, id, _)| *code == normalized || *id == normalized)
        {
            return Ok(Self {
                id: id.to_string(),
                realm: *realm,
            });
        }
        if looks_like_region_id(&normalized) {
            return Ok(Self {
                id: normalized,
                realm: Realm::Oc1,
            });
        }
        Err(Error::Invalid(value.to_string()))
    }

    /// Resolves the region from the `OCI_REGION` environment variable.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(REGION_ENV) {
            Ok(v) if !v.trim().is_empty() => Self::parse(&v),
            _ => Err(Error::Missing),
        }
    }

    /// Resolves an optional configured region, falling back to the
    /// environment.
    pub fn resolve(configured: Option<&str>) -> Result<Self, Error> {
        match configured {
            Some(v) => Self::parse(v),
            None => Self::from_env(),
        }
    }

    /// The region identifier, e.g. `us-ashburn-1`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The realm containing this region.
    pub fn realm(&self) -> Realm {
        self.realm
    }

    /// Formats a service endpoint template for this region.
    pub fn endpoint(&self, template: &str) -> String {
        template
            .replace(REGION_PLACEHOLDER, &self.id)
            .replace(DOMAIN_PLACEHOLDER, self.realm.second_level_domain())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

impl std::str::FromStr for Region {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// `<area>-<city>-<n>`, with an optional qualifier such as `gov`.
fn looks_like_region_id(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let Some((last, rest)) = parts.split_last() else {
        return false;
    };
    (2..=3).contains(&rest.len())
        && !last.is_empty()
        && last.chars().all(|c| c.is_ascii_digit())
        && rest
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use test_case::test_case;

    #[test_case("us-ashburn-1", "us-ashburn-1", Realm::Oc1)]
    #[test_case("iad", "us-ashburn-1", Realm::Oc1)]
    #[test_case("IAD", "us-ashburn-1", Realm::Oc1)]
    #[test_case(" eu-frankfurt-1 ", "eu-frankfurt-1", Realm::Oc1)]
    #[test_case("lfi", "us-langley-1", Realm::Oc2)]
    #[test_case("us-gov-ashburn-1", "us-gov-ashburn-1", Realm::Oc3)]
    #[test_case("ltn", "uk-gov-london-1", Realm::Oc4)]
    #[test_case("xx-newcity-1", "xx-newcity-1", Realm::Oc1)]
    fn parse(input: &str, id: &str, realm: Realm) -> anyhow::Result<()> {
        let got = Region::parse(input)?;
        assert_eq!(got.id(), id);
        assert_eq!(got.realm(), realm);
        assert_eq!(got.to_string(), id);
        Ok(())
    }

    #[test_case("")]
    #[test_case("ashburn")]
    #[test_case("us-ashburn-one")]
    #[test_case("us--1")]
    #[test_case("https://example.com")]
    fn parse_invalid(input: &str) {
        let got = Region::parse(input);
        assert_eq!(got, Err(Error::Invalid(input.to_string())));
    }

    #[test_case(Realm::Oc1, "https://licensemanager.us-ashburn-1.oci.oraclecloud.com")]
    #[test_case(Realm::Oc4, "https://licensemanager.us-ashburn-1.oci.oraclegovcloud.uk")]
    fn endpoint(realm: Realm, want: &str) {
        let region = Region {
            id: "us-ashburn-1".into(),
            realm,
        };
        assert_eq!(
            region.endpoint("https://licensemanager.{region}.oci.{secondLevelDomain}"),
            want
        );
    }

    #[test]
    #[serial]
    fn from_env() -> anyhow::Result<()> {
        let _e = ScopedEnv::set(REGION_ENV, "phx");
        let got = Region::from_env()?;
        assert_eq!(got.id(), "us-phoenix-1");
        let got = Region::resolve(None)?;
        assert_eq!(got.id(), "us-phoenix-1");
        let got = Region::resolve(Some("fra"))?;
        assert_eq!(got.id(), "eu-frankfurt-1");
        Ok(())
    }

    #[test]
    #[serial]
    fn from_env_missing() {
        let _e = ScopedEnv::remove(REGION_ENV);
        assert_eq!(Region::from_env(), Err(Error::Missing));
        let _e = ScopedEnv::set(REGION_ENV, "  ");
        assert_eq!(Region::resolve(None), Err(Error::Missing));
    }

    #[test]
    fn from_str() -> anyhow::Result<()> {
        let got: Region = "syd".parse()?;
        assert_eq!(got.id(), "ap-sydney-1");
        Ok(())
    }
}
