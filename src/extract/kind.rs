//! The kinds of data a request can ask for.

//---------------------------------------------------------------------------------------------------- Use
use std::collections::BTreeSet;

//---------------------------------------------------------------------------------------------------- ExtractKind
/// A single kind of data to extract from a descriptor file.
///
/// Requests carry a _set_ of these ([`ExtractKinds`]),
/// duplicates collapse and order is irrelevant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy,Clone,Debug,PartialEq,Eq,PartialOrd,Ord,Hash)]
#[derive(strum::AsRefStr,strum::Display,strum::EnumCount,strum::EnumString,strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ExtractKind {
	/// Audio duration in seconds, via the duration probe.
	Duration,
	/// Background image path, from the `[Events]` section.
	Background,
	/// Video path, from the `[Events]` section.
	Video,
}

/// The set of [`ExtractKind`]'s one request asks for.
///
/// An empty set is valid, the request
/// succeeds with no data attached.
pub type ExtractKinds = BTreeSet<ExtractKind>;

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::str::FromStr;
	use strum::{EnumCount,IntoEnumIterator};

	#[test]
	fn string_round_trip() {
		for kind in ExtractKind::iter() {
			assert_eq!(ExtractKind::from_str(kind.as_ref()).unwrap(), kind);
		}
		assert_eq!(ExtractKind::Duration.to_string(),   "duration");
		assert_eq!(ExtractKind::Background.to_string(), "background");
		assert_eq!(ExtractKind::Video.to_string(),      "video");
	}

	#[test]
	fn set_semantics() {
		let kinds: ExtractKinds = [
			ExtractKind::Video,
			ExtractKind::Duration,
			ExtractKind::Duration,
		].into_iter().collect();

		assert_eq!(kinds.len(), 2);
		assert!(kinds.contains(&ExtractKind::Duration));
		assert!(kinds.contains(&ExtractKind::Video));
		assert!(!kinds.contains(&ExtractKind::Background));
		assert_eq!(ExtractKind::COUNT, 3);
	}
}
