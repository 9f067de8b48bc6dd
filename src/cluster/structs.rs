//! The structs
//!
/// The cluster authority configuration as read from the configuration store.
///
/// `inventory` holds the identifiers of the known servers in the cluster,
/// and is used to resolve `designated_server_id`.
#[derive(Debug, Default)]
pub struct ClusterAuthority {
    pub designated_server_id: Option<String>,
    pub local_server_id: Option<String>,
    pub inventory: Vec<String>,
}
