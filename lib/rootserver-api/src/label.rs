/// Node label marking a node as a root server (a dedicated machine joined to
/// the cluster rather than a cloud instance)
pub const INSTANCE_IS_ROOT_SERVER: &str = "instance.hetzner.cloud/is-root-server";

/// Node address type used as the gateway for root server routes
pub const NODE_INTERNAL_IP: &str = "InternalIP";
