use triple_version::Version;

fn versions() -> Vec<Version> {
	let values = [0, 1, 2, 10, u64::MAX];
	let mut versions = Vec::new();
	for major in values {
		for minor in values {
			for patch in values {
				versions.push(Version::new(major, minor, patch));
			}
		}
	}
	versions
}

#[test]
fn total() {
	let versions = versions();
	for x in &versions {
		assert_eq!(x.compare(x), 0);
		for y in &versions {
			let results = [x.older_than(y), x.equals(y), x.newer_than(y)];
			assert_eq!(results.iter().filter(|result| **result).count(), 1, "{x} {y}");
			assert_eq!(x.compare(y), -y.compare(x), "{x} {y}");
			let left = <(u64, u64, u64)>::from(*x);
			let right = <(u64, u64, u64)>::from(*y);
			assert_eq!(x.cmp(y), left.cmp(&right), "{x} {y}");
		}
	}
}

#[test]
fn transitive() {
	let versions = versions();
	for x in &versions {
		for y in versions.iter().filter(|y| x.older_than(y)) {
			for z in versions.iter().filter(|z| y.older_than(z)) {
				assert!(x.older_than(z), "{x} {y} {z}");
			}
		}
	}
}

#[test]
fn predicates() {
	let versions = versions();
	for x in &versions {
		for y in &versions {
			let compare = x.compare(y);
			assert_eq!(x.older_than(y), compare == -1);
			assert_eq!(x.older_than_or_equal(y), compare == -1 || compare == 0);
			assert_eq!(x.equals(y), compare == 0);
			assert_eq!(x.newer_than_or_equal(y), compare == 0 || compare == 1);
			assert_eq!(x.newer_than(y), compare == 1);
			assert_eq!(x.equals(y), x == y);
			let ordering = match compare {
				-1 => std::cmp::Ordering::Less,
				0 => std::cmp::Ordering::Equal,
				_ => std::cmp::Ordering::Greater,
			};
			assert_eq!(x.ordering(y), ordering, "{x} {y}");
		}
	}
}

#[test]
fn sort() {
	let mut versions = ["1.10.0", "1.2.10", "0.9.9", "1.2.9", "10.0.0", "1.2.10", "2.0.0"]
		.into_iter()
		.map(|string| string.parse::<Version>().unwrap())
		.collect::<Vec<_>>();
	versions.sort();
	let versions = versions.iter().map(ToString::to_string).collect::<Vec<_>>();
	assert_eq!(
		versions,
		["0.9.9", "1.2.9", "1.2.10", "1.2.10", "1.10.0", "2.0.0", "10.0.0"]
	);
}
