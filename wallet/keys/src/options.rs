//!
//! Request options of the key operations.
//!

use crate::imports::*;

/// Derivation path of a request: an explicit path or `auto`, which picks
/// the BIP44/49/84 default path of the requested address family.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PathSelection {
    Auto,
    Path(DerivationPath),
}

impl PathSelection {
    pub fn resolve(&self, family: AddressFamily) -> DerivationPath {
        match self {
            PathSelection::Auto => family.default_path(),
            PathSelection::Path(path) => path.clone(),
        }
    }
}

impl Default for PathSelection {
    fn default() -> Self {
        PathSelection::Path(DerivationPath::default())
    }
}

impl FromStr for PathSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") { Ok(PathSelection::Auto) } else { Ok(PathSelection::Path(s.trim().parse()?)) }
    }
}

impl TryFrom<String> for PathSelection {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PathSelection> for String {
    fn from(selection: PathSelection) -> Self {
        selection.to_string()
    }
}

impl Display for PathSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PathSelection::Auto => f.write_str("auto"),
            PathSelection::Path(path) => Display::fmt(path, f),
        }
    }
}

/// Options filled in by the command surface.
///
/// Network and address type are passed with every call; there is no
/// process wide default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Options {
    pub network: Network,
    #[serde(alias = "addr-type")]
    pub address_type: ScriptType,
    pub derivation_path: PathSelection,
    /// Also emit the serialized extended keys and all address forms.
    pub show_all_keys: bool,
}

impl Options {
    pub fn new(network: Network, address_type: ScriptType) -> Self {
        Options { network, address_type, ..Default::default() }
    }

    pub fn with_derivation_path(mut self, derivation_path: PathSelection) -> Self {
        self.derivation_path = derivation_path;
        self
    }

    pub fn with_show_all_keys(mut self, show_all_keys: bool) -> Self {
        self.show_all_keys = show_all_keys;
        self
    }
}
