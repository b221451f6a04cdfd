//! Link building against a Sonar server base URL.

/// Server address used when an installation configures no URL at all.
pub const DEFAULT_SONAR_URL: &str = "http://localhost:9000";

const PROJECT_INDEX_PATH: &str = "/project/index/";
const COMPONENTS_INDEX_PATH: &str = "/components/index/";

/// Picks the effective base link for an installation.
///
/// The trimmed public URL wins when non-empty, then the trimmed server URL,
/// then [`DEFAULT_SONAR_URL`]. One trailing `/` is dropped from the result.
pub(super) fn effective_base(public_url: Option<&str>, server_url: Option<&str>) -> String {
    let chosen = [public_url, server_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty());

    let url = chosen.unwrap_or_else(|| {
        tracing::debug!(
            default_url = DEFAULT_SONAR_URL,
            "no server URL configured, using default"
        );
        DEFAULT_SONAR_URL
    });
    url.strip_suffix('/').unwrap_or(url).to_owned()
}

/// Appends `<path><group_id>:<artifact_id>[:<branch>]` to a base link.
fn resource_link(
    base: &str,
    path: &str,
    group_id: &str,
    artifact_id: &str,
    branch: Option<&str>,
) -> String {
    let mut link = format!("{base}{path}{group_id}:{artifact_id}");
    if let Some(name) = branch.filter(|value| !value.is_empty()) {
        link.push(':');
        link.push_str(name);
    }
    link
}

pub(super) fn project_link(
    base: &str,
    group_id: &str,
    artifact_id: &str,
    branch: Option<&str>,
) -> String {
    resource_link(base, PROJECT_INDEX_PATH, group_id, artifact_id, branch)
}

pub(super) fn component_link(base: &str, group_id: &str, artifact_id: &str) -> String {
    resource_link(base, COMPONENTS_INDEX_PATH, group_id, artifact_id, None)
}
