//! Reference-model lookup and benchmark resolution
//!
//! Stored reference models (elite-pitcher statistics) live behind the
//! [`ProfileStore`] trait; how they are persisted is the store's business.
//! [`resolve_benchmark`] implements the lookup policy for choosing a
//! comparison model: prefer the model trained for the detected pitch type,
//! fall back to the player's generic model.
//!
//! Model names follow the `{player}_{pitch_type}_v1` convention, with
//! `all` as the pitch type of the generic model.

use crate::profile::Profile;

/// Pitch-type value emitted by upstream classifiers when the pitch could
/// not be classified. Treated the same as "no pitch type detected".
const UNKNOWN_PITCH_TYPE: &str = "Unknown";

/// Read-only lookup of stored reference profiles by model name.
///
/// A name that the store does not know is `None`, never an error — the
/// caller decides what to fall back to.
pub trait ProfileStore {
    /// Returns the named profile, if the store has it.
    fn find(&self, model_name: &str) -> Option<Profile>;
}

/// Resolves the benchmark profile for a scoring request.
///
/// With a usable pitch type (present, non-empty, and not the classifier's
/// `"Unknown"` sentinel), the pitch-type-specific model
/// `{player}_{pitch_type}_v1` is tried first. If that model does not exist
/// or no pitch type was detected, the generic `{player}_all_v1` model is
/// tried instead.
///
/// # Returns
///
/// The first profile found, or `None` when the store has neither model.
///
/// # Examples
///
/// ```
/// use pitchscope_profile::{
///     profile::{Profile, ProfileSource},
///     store::{ProfileStore, resolve_benchmark},
/// };
///
/// struct SingleModel(Profile);
/// impl ProfileStore for SingleModel {
///     fn find(&self, model_name: &str) -> Option<Profile> {
///         (model_name == "Darvish, Yu_all_v1").then(|| self.0.clone())
///     }
/// }
///
/// let store = SingleModel(Profile::new(
///     "Darvish, Yu",
///     ProfileSource::Reference { model_name: "Darvish, Yu_all_v1".to_string() },
///     [],
/// ));
///
/// // No slider-specific model stored; resolution falls back to the generic one
/// let profile = resolve_benchmark(&store, "Darvish, Yu", Some("SL")).unwrap();
/// assert_eq!(profile.label(), "Darvish, Yu");
/// assert!(resolve_benchmark(&store, "Imanaga, Shota", None).is_none());
/// ```
pub fn resolve_benchmark<S>(
    store: &S,
    benchmark_player: &str,
    pitch_type: Option<&str>,
) -> Option<Profile>
where
    S: ProfileStore + ?Sized,
{
    let usable_pitch_type =
        pitch_type.filter(|pitch| !pitch.is_empty() && *pitch != UNKNOWN_PITCH_TYPE);
    if let Some(pitch) = usable_pitch_type {
        let specific_name = format!("{benchmark_player}_{pitch}_v1");
        if let Some(profile) = store.find(&specific_name) {
            return Some(profile);
        }
    }

    let generic_name = format!("{benchmark_player}_all_v1");
    store.find(&generic_name)
}
