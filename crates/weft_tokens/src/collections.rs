//! Collection and mode management
//!
//! Each tier becomes one host collection. The host creates a default mode
//! with every collection; the first requested mode name renames it, and
//! every further name is an `add_mode` attempt. Hosts cap mode counts by
//! plan, so an add-mode failure degrades to a warning and a collection
//! with fewer modes than requested.

use weft_core::{CollectionId, Host, HostError, ModeId};

/// The three dependency tiers, in processing order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Primitives,
    Semantic,
    Component,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Primitives, Tier::Semantic, Tier::Component];

    /// Collection display name on the host
    pub fn collection_name(self) -> &'static str {
        match self {
            Tier::Primitives => "Primitives",
            Tier::Semantic => "Semantic",
            Tier::Component => "Component",
        }
    }

    /// Path prefix used in qualified token paths and override keys
    pub fn prefix(self) -> &'static str {
        match self {
            Tier::Primitives => "primitives",
            Tier::Semantic => "semantic",
            Tier::Component => "component",
        }
    }
}

/// A named mode within a created collection
#[derive(Clone, Debug)]
pub struct ModeHandle {
    pub id: ModeId,
    pub name: String,
}

/// A created collection and the modes that actually exist on the host
#[derive(Clone, Debug)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub modes: Vec<ModeHandle>,
}

impl Collection {
    /// The default mode (always present)
    pub fn default_mode(&self) -> ModeId {
        self.modes[0].id
    }

    pub fn mode_named(&self, name: &str) -> Option<ModeId> {
        self.modes.iter().find(|m| m.name == name).map(|m| m.id)
    }
}

/// Create a collection with the requested mode names.
///
/// Mode creation failures are never fatal: the returned collection simply
/// carries the modes that succeeded. Callers compare the achieved mode
/// count against the request to surface the shortfall.
pub fn create_collection(
    host: &mut dyn Host,
    name: &str,
    mode_names: &[String],
) -> Result<Collection, HostError> {
    let (id, default_mode) = host.create_collection(name)?;

    let default_name = mode_names.first().map(String::as_str).unwrap_or("Default");
    host.rename_mode(id, default_mode, default_name)?;

    let mut modes = vec![ModeHandle {
        id: default_mode,
        name: default_name.to_string(),
    }];

    for mode_name in mode_names.iter().skip(1) {
        match host.add_mode(id, mode_name) {
            Ok(mode_id) => modes.push(ModeHandle {
                id: mode_id,
                name: mode_name.clone(),
            }),
            Err(err) => {
                tracing::debug!(
                    "collection {name}: host refused additional modes ({err}); \
                     continuing with {} of {} requested",
                    modes.len(),
                    mode_names.len()
                );
                break;
            }
        }
    }

    Ok(Collection {
        id,
        name: name.to_string(),
        modes,
    })
}
