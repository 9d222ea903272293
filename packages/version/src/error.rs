/// A component of a version.
#[derive(
	Clone,
	Copy,
	Debug,
	Eq,
	Hash,
	Ord,
	PartialEq,
	PartialOrd,
	derive_more::Display,
	serde::Deserialize,
	serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Component {
	#[display("major")]
	Major,
	#[display("minor")]
	Minor,
	#[display("patch")]
	Patch,
}

/// An error produced when a string cannot be parsed into a version.
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
	/// The string did not split into exactly three dot separated segments.
	#[display("invalid version string: {string}")]
	Invalid { string: String },

	#[display("invalid major version: {segment}")]
	Major { segment: String },

	#[display("invalid minor version: {segment}")]
	Minor { segment: String },

	#[display("invalid patch version: {segment}")]
	Patch { segment: String },

	/// A segment had a leading zero and leading zeros were disallowed.
	#[display("invalid {component} version: {segment} has a leading zero")]
	LeadingZero { component: Component, segment: String },
}

impl FormatError {
	pub(crate) fn segment(component: Component, segment: &str) -> Self {
		let segment = segment.to_owned();
		match component {
			Component::Major => Self::Major { segment },
			Component::Minor => Self::Minor { segment },
			Component::Patch => Self::Patch { segment },
		}
	}

	/// Get the component that failed to parse, if the failure was specific to one component.
	#[must_use]
	pub fn component(&self) -> Option<Component> {
		match self {
			Self::Invalid { .. } => None,
			Self::Major { .. } => Some(Component::Major),
			Self::Minor { .. } => Some(Component::Minor),
			Self::Patch { .. } => Some(Component::Patch),
			Self::LeadingZero { component, .. } => Some(*component),
		}
	}
}
