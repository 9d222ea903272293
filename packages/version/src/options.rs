/// Options for parsing a version.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Options {
	/// Whether segments such as `01` are accepted. Defaults to `true`.
	pub leading_zeros: bool,
}

impl Options {
	/// Options that reject leading zeros, matching the numeric identifier rule of semantic versioning.
	#[must_use]
	pub fn strict() -> Self {
		Self {
			leading_zeros: false,
		}
	}
}

impl Default for Options {
	fn default() -> Self {
		Self {
			leading_zeros: true,
		}
	}
}
