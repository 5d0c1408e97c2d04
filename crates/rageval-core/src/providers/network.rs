//! Whether a live judge may reach the network.
//!
//! The policy is read once when a client is built. Offline CI sets
//! `RAGEVAL_NETWORK_POLICY=deny` so a stray API key cannot trigger paid calls.

pub const NETWORK_POLICY_ENV: &str = "RAGEVAL_NETWORK_POLICY";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NetworkPolicy {
    #[default]
    Allow,
    Deny(String),
}

impl NetworkPolicy {
    pub fn from_env() -> Self {
        match std::env::var(NETWORK_POLICY_ENV) {
            Ok(raw) if raw.trim().eq_ignore_ascii_case("deny") => {
                NetworkPolicy::Deny(format!("{}=deny", NETWORK_POLICY_ENV))
            }
            _ => NetworkPolicy::Allow,
        }
    }

    /// Fails before a judge request to `target` is sent under a deny policy.
    pub fn check_judge_call(&self, target: &str) -> anyhow::Result<()> {
        match self {
            NetworkPolicy::Allow => Ok(()),
            NetworkPolicy::Deny(reason) => anyhow::bail!(
                "network access denied for judge call to {} ({})",
                target,
                reason
            ),
        }
    }
}
