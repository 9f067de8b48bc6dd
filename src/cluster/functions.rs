//! The functions.
//!
use log::*;

use crate::cluster::ClusterAuthority;

/// Is the local server allowed to initiate a version check?
///
/// Identifiers compare case-insensitively. Unresolvable identities fail
/// open, see the module documentation.
pub fn is_authorized(
    authority: &ClusterAuthority,
) -> bool
{
    let designated = match &authority.designated_server_id {
        // no designated check server: every node may check.
        None => return true,
        Some(designated) => designated,
    };
    let designated = match resolve(&authority.inventory, designated) {
        None => {
            warn!("designated check server {} not found in the server inventory, allowing check", designated);
            return true;
        },
        Some(designated) => designated,
    };
    let local = match &authority.local_server_id {
        None => {
            warn!("local server identity not resolvable, allowing check");
            return true;
        },
        Some(local) => local,
    };
    designated.eq_ignore_ascii_case(local)
}

// lookup of a server identifier in the inventory.
fn resolve<'a>(
    inventory: &'a [String],
    server_id: &str,
) -> Option<&'a String>
{
    inventory.iter().find(|known| known.eq_ignore_ascii_case(server_id))
}
