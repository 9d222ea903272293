use winnow::{ascii::digit1, prelude::*};

pub use self::{
	error::{Component, FormatError},
	options::Options,
};

pub mod error;
pub mod options;

/// A version with a major, minor, and patch component, ordered by the precedence rules of semantic versioning.
#[derive(
	Clone,
	Copy,
	Debug,
	Default,
	Eq,
	Hash,
	PartialEq,
	serde_with::DeserializeFromStr,
	serde_with::SerializeDisplay,
)]
pub struct Version {
	major: u64,
	minor: u64,
	patch: u64,
}

impl Version {
	#[must_use]
	pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
		Self {
			major,
			minor,
			patch,
		}
	}

	/// Parse a version of the form `major.minor.patch`. Leading zeros are accepted.
	pub fn parse(string: &str) -> Result<Self, FormatError> {
		Self::parse_with_options(string, &Options::default())
	}

	pub fn parse_with_options(string: &str, options: &Options) -> Result<Self, FormatError> {
		let result = version(string, options);
		if let Err(error) = &result {
			tracing::trace!(%string, %error, "failed to parse the version");
		}
		result
	}

	#[must_use]
	pub const fn major(&self) -> u64 {
		self.major
	}

	#[must_use]
	pub const fn minor(&self) -> u64 {
		self.minor
	}

	#[must_use]
	pub const fn patch(&self) -> u64 {
		self.patch
	}

	#[must_use]
	pub fn ordering(&self, other: &Self) -> std::cmp::Ordering {
		self.cmp(other)
	}

	/// Compare this version against `other`, returning `-1` if it is older, `0` if they are equal, and `1` if it is newer.
	#[must_use]
	pub fn compare(&self, other: &Self) -> i8 {
		match self.ordering(other) {
			std::cmp::Ordering::Less => -1,
			std::cmp::Ordering::Equal => 0,
			std::cmp::Ordering::Greater => 1,
		}
	}

	#[must_use]
	pub fn older_than(&self, other: &Self) -> bool {
		self.compare(other) == -1
	}

	#[must_use]
	pub fn older_than_or_equal(&self, other: &Self) -> bool {
		self.compare(other) <= 0
	}

	#[must_use]
	pub fn equals(&self, other: &Self) -> bool {
		self.compare(other) == 0
	}

	#[must_use]
	pub fn newer_than_or_equal(&self, other: &Self) -> bool {
		self.compare(other) >= 0
	}

	#[must_use]
	pub fn newer_than(&self, other: &Self) -> bool {
		self.compare(other) == 1
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
	}
}

impl std::str::FromStr for Version {
	type Err = FormatError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<&str> for Version {
	type Error = FormatError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<String> for Version {
	type Error = FormatError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<(u64, u64, u64)> for Version {
	fn from((major, minor, patch): (u64, u64, u64)) -> Self {
		Self::new(major, minor, patch)
	}
}

impl From<Version> for (u64, u64, u64) {
	fn from(value: Version) -> Self {
		(value.major, value.minor, value.patch)
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.major
			.cmp(&other.major)
			.then_with(|| self.minor.cmp(&other.minor))
			.then_with(|| self.patch.cmp(&other.patch))
	}
}

fn version(string: &str, options: &Options) -> Result<Version, FormatError> {
	let segments = string.split('.').collect::<Vec<_>>();
	let [major, minor, patch] = segments[..] else {
		return Err(FormatError::Invalid {
			string: string.to_owned(),
		});
	};
	let major = segment(Component::Major, major, options)?;
	let minor = segment(Component::Minor, minor, options)?;
	let patch = segment(Component::Patch, patch, options)?;
	Ok(Version {
		major,
		minor,
		patch,
	})
}

fn segment(component: Component, string: &str, options: &Options) -> Result<u64, FormatError> {
	let value = number
		.parse(string)
		.map_err(|_| FormatError::segment(component, string))?;
	if !options.leading_zeros && string.len() > 1 && string.starts_with('0') {
		return Err(FormatError::LeadingZero {
			component,
			segment: string.to_owned(),
		});
	}
	Ok(value)
}

fn number(input: &mut &str) -> ModalResult<u64> {
	digit1
		.try_map(|digits: &str| digits.parse::<u64>())
		.parse_next(input)
}
